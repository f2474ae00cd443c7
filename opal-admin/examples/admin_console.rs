//! Admin Console - TUI for the Opal admin state layer
//!
//! Run: cargo run --example admin_console

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use opal_admin::editor::{EditorSection, PendingUpload, VariantField, VariantKey};
use opal_admin::{AdminWorkspace, FieldChange};
use opal_client::ClientConfig;
use ratatui::{prelude::*, widgets::*};
use rust_decimal::Decimal;
use shared::models::{Gender, StockStatus};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

struct App {
    /// Input field state
    input: Input,
    /// Current input mode
    input_mode: InputMode,
    /// Dashboard state
    workspace: AdminWorkspace,
    /// Logger Widget State
    logger_state: TuiWidgetState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    #[default]
    Normal,
    Editing,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize TUI Logger with Tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let config = ClientConfig::from_env();
    let mut app = App {
        input: Input::default(),
        input_mode: InputMode::default(),
        workspace: AdminWorkspace::new(&config),
        logger_state: TuiWidgetState::new(),
    };
    tracing::info!("Backend: {}", config.base_url);
    tracing::info!("Type /help for commands, press 'e' to edit, 'q' to quit");

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = Duration::from_millis(100);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    match app.input_mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('e') => {
                                app.input_mode = InputMode::Editing;
                            }
                            KeyCode::Char('q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::PageUp => {
                                app.logger_state.transition(TuiWidgetEvent::PrevPageKey)
                            }
                            KeyCode::PageDown => {
                                app.logger_state.transition(TuiWidgetEvent::NextPageKey)
                            }
                            KeyCode::Up => app.logger_state.transition(TuiWidgetEvent::UpKey),
                            KeyCode::Down => app.logger_state.transition(TuiWidgetEvent::DownKey),
                            _ => {}
                        },
                        InputMode::Editing => match key.code {
                            KeyCode::Enter => {
                                let input_str: String = app.input.value().into();
                                if !input_str.is_empty() {
                                    handle_command(app, &input_str).await;
                                    app.input.reset();
                                }
                            }
                            KeyCode::Esc => {
                                app.input_mode = InputMode::Normal;
                            }
                            _ => {
                                app.input.handle_event(&Event::Key(key));
                            }
                        },
                    }
                }
            }
        }
    }
}

async fn handle_command(app: &mut App, cmd: &str) {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    match parts[0] {
        "/help" => {
            tracing::info!("Available commands:");
            tracing::info!("  /login <email> <password>      - Authenticate");
            tracing::info!("  /logout                        - Drop the session");
            tracing::info!("  /products [page]               - List products");
            tracing::info!("  /search <term>                 - Search products");
            tracing::info!("  /categories                    - List categories");
            tracing::info!("  /new                           - Open a blank product editor");
            tracing::info!("  /edit <product-id>             - Open a product for editing");
            tracing::info!("  /set <field> <value...>        - Edit a draft field");
            tracing::info!("  /variant add | <i> <field> <v> - Edit variant rows");
            tracing::info!("  /image <path>                  - Attach an image file");
            tracing::info!("  /feature <index>               - Mark an image featured");
            tracing::info!("  /submit                        - Submit the open editor");
            tracing::info!("  /close                         - Close the editor");
            tracing::info!("  /quit                          - Exit");
        }
        "/quit" => {
            tracing::warn!("Press Esc then 'q' to quit application");
        }
        "/login" => {
            if parts.len() < 3 {
                tracing::error!("Usage: /login <email> <password>");
                return;
            }
            match app.workspace.login(parts[1], parts[2]).await {
                Ok(admin) => tracing::info!("✅ Logged in as {} ({})", admin.name, admin.role),
                Err(e) => tracing::error!("❌ Login failed: {}", e),
            }
        }
        "/logout" => match app.workspace.logout().await {
            Ok(()) => tracing::info!("Logged out"),
            Err(e) => tracing::error!("Logout failed: {}", e),
        },
        "/products" => {
            let page = parts.get(1).and_then(|p| p.parse().ok()).unwrap_or(1);
            let client = app.workspace.client().clone();
            app.workspace.products.go_to_page(&client, page).await;
            report_list(
                app.workspace.products.list.items.len(),
                app.workspace.products.list.error.as_deref(),
            );
        }
        "/search" => {
            if parts.len() < 2 {
                tracing::error!("Usage: /search <term>");
                return;
            }
            let term = parts[1..].join(" ");
            let client = app.workspace.client().clone();
            app.workspace.products.search(&client, term).await;
            report_list(
                app.workspace.products.list.items.len(),
                app.workspace.products.list.error.as_deref(),
            );
        }
        "/categories" => {
            let client = app.workspace.client().clone();
            app.workspace.categories.refresh(&client).await;
            match &app.workspace.categories.list.error {
                Some(e) => tracing::error!("❌ {}", e),
                None => {
                    for category in &app.workspace.categories.list.items {
                        tracing::info!("  {} - {} ({})", category.id, category.name, category.gender);
                    }
                }
            }
        }
        "/new" => {
            app.workspace.open_product_editor();
            tracing::info!("Editor opened on a blank product");
        }
        "/edit" => {
            if parts.len() < 2 {
                tracing::error!("Usage: /edit <product-id>");
                return;
            }
            match app.workspace.edit_product(parts[1]).await {
                Ok(()) => tracing::info!("Editing {}", parts[1]),
                Err(e) => tracing::error!("❌ {}", e),
            }
        }
        "/set" => set_field(app, &parts).await,
        "/variant" => variant_command(app, &parts).await,
        "/image" => {
            if parts.len() < 2 {
                tracing::error!("Usage: /image <path>");
                return;
            }
            let path = std::path::Path::new(parts[1]);
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload.png")
                .to_string();
            match std::fs::read(path) {
                Ok(bytes) => match PendingUpload::new(file_name, bytes) {
                    Ok(upload) => {
                        app.workspace.editor_apply(FieldChange::AddImage(upload)).await;
                        tracing::info!("Image attached");
                    }
                    Err(e) => tracing::error!("❌ {}", e),
                },
                Err(e) => tracing::error!("❌ Cannot read {}: {}", parts[1], e),
            }
        }
        "/feature" => {
            if let Some(index) = parts.get(1).and_then(|p| p.parse().ok()) {
                app.workspace
                    .editor_apply(FieldChange::SetFeaturedImage(index))
                    .await;
            } else {
                tracing::error!("Usage: /feature <index>");
            }
        }
        "/submit" => match app.workspace.submit_editor().await {
            Ok(product) => tracing::info!("✅ Saved {} ({})", product.name, product.id),
            Err(e) => tracing::error!("❌ Submit failed: {}", e),
        },
        "/close" => {
            app.workspace.close_editor();
            tracing::info!("Editor closed");
        }
        _ => {
            tracing::warn!("Unknown command: {}", parts[0]);
        }
    }
}

async fn set_field(app: &mut App, parts: &[&str]) {
    if parts.len() < 3 {
        tracing::error!("Usage: /set <field> <value...>");
        return;
    }
    let rest = parts[2..].join(" ");
    let change = match parts[1] {
        "name" => FieldChange::Name(rest),
        "slug" => FieldChange::Slug(rest),
        "sku" => FieldChange::Sku(rest),
        "stock" => FieldChange::StockQuantity(rest),
        "price" => match rest.parse::<Decimal>() {
            Ok(price) => FieldChange::RegularPrice(Some(price)),
            Err(_) => {
                tracing::error!("'{}' is not a valid price", rest);
                return;
            }
        },
        "sale" => match rest.parse::<Decimal>() {
            Ok(price) => FieldChange::SalePrice(Some(price)),
            Err(_) => {
                tracing::error!("'{}' is not a valid price", rest);
                return;
            }
        },
        "gender" => match parts[2] {
            "women" => FieldChange::Gender(Some(Gender::Women)),
            "men" => FieldChange::Gender(Some(Gender::Men)),
            "both" => FieldChange::Gender(Some(Gender::Both)),
            other => {
                tracing::error!("Unknown gender '{}'", other);
                return;
            }
        },
        "status" => match parts[2] {
            "in_stock" => FieldChange::StockStatus(StockStatus::InStock),
            "out_of_stock" => FieldChange::StockStatus(StockStatus::OutOfStock),
            "on_backorder" => FieldChange::StockStatus(StockStatus::OnBackorder),
            other => {
                tracing::error!("Unknown stock status '{}'", other);
                return;
            }
        },
        "category" => {
            if parts.len() < 4 {
                tracing::error!("Usage: /set category <id> <name...>");
                return;
            }
            FieldChange::Category {
                id: parts[2].to_string(),
                name: parts[3..].join(" "),
            }
        }
        "subcategory" => {
            if parts.len() < 4 {
                tracing::error!("Usage: /set subcategory <id> <name...>");
                return;
            }
            FieldChange::Subcategory {
                id: parts[2].to_string(),
                name: parts[3..].join(" "),
            }
        }
        "property" => {
            if parts.len() < 4 {
                tracing::error!("Usage: /set property <title> <value...>");
                return;
            }
            FieldChange::Property {
                title: parts[2].to_string(),
                value: parts[3..].join(" "),
            }
        }
        other => {
            tracing::error!("Unknown field '{}'", other);
            return;
        }
    };
    app.workspace.editor_apply(change).await;
}

async fn variant_command(app: &mut App, parts: &[&str]) {
    if parts.len() >= 2 && parts[1] == "add" {
        app.workspace.editor_apply(FieldChange::AddVariant).await;
        tracing::info!("Variant row added");
        return;
    }
    if parts.len() < 4 {
        tracing::error!("Usage: /variant add | /variant <index> <field> <value>");
        return;
    }
    let Some(index) = parts[1].parse::<usize>().ok() else {
        tracing::error!("'{}' is not a variant index", parts[1]);
        return;
    };
    let key: Option<VariantKey> = app
        .workspace
        .editor
        .as_ref()
        .and_then(|e| e.draft().variants.get(index))
        .map(|v| v.key.clone());
    let Some(key) = key else {
        tracing::error!("No variant at index {}", index);
        return;
    };
    let value = parts[3..].join(" ");
    let field = match parts[2] {
        "size" => VariantField::Size(value),
        "color" => VariantField::Color(value),
        "shape" => VariantField::Shape(value),
        "carat" => VariantField::Carat(value),
        "stock" => VariantField::StockCount(value),
        "sku" => VariantField::Sku(value),
        other => {
            tracing::error!("Unknown variant field '{}'", other);
            return;
        }
    };
    app.workspace.editor_apply(FieldChange::Variant(key, field)).await;
}

fn report_list(count: usize, error: Option<&str>) {
    match error {
        Some(e) => tracing::error!("❌ {}", e),
        None => tracing::info!("{} item(s) loaded", count),
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main Content (Logs + Status)
            Constraint::Length(3), // Input
        ])
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Logs
            Constraint::Percentage(40), // Draft / list status
        ])
        .split(chunks[1]);

    // Header
    let auth = match &app.workspace.admin {
        Some(admin) => Span::styled(
            format!(" {} ", admin.email),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(" not logged in ", Style::default().fg(Color::Red)),
    };
    let title = Paragraph::new(vec![Line::from(vec![
        Span::raw(" Opal Admin "),
        Span::styled(" Console ", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        auth,
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    // Logs (TuiLoggerWidget)
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, main_chunks[0]);

    // Right side: open draft, or the current product page
    let (title, lines) = match &app.workspace.editor {
        Some(editor) => {
            let mut lines: Vec<Line> = Vec::new();
            if let Some(error) = editor.last_error() {
                lines.push(Line::from(Span::styled(
                    error.to_string(),
                    Style::default().fg(Color::Red),
                )));
                lines.push(Line::from(""));
            }
            for section in EditorSection::ALL {
                lines.push(Line::from(Span::styled(
                    section.title(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                for line in section.lines(editor.draft()) {
                    lines.push(Line::from(format!("  {line}")));
                }
                lines.push(Line::from(""));
            }
            (" Draft ", lines)
        }
        None => {
            let list = &app.workspace.products.list;
            let mut lines: Vec<Line> = list
                .items
                .iter()
                .map(|p| {
                    Line::from(vec![
                        Span::styled(p.name.clone(), Style::default().fg(Color::Cyan)),
                        Span::raw(format!("  [{}]", p.stock_status)),
                    ])
                })
                .collect();
            if list.items.is_empty() {
                lines.push(Line::from("No products loaded, try /products"));
            } else {
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "Page {}/{} ({} total)",
                    list.pagination.page, list.pagination.total_pages, list.pagination.total
                )));
            }
            (" Products ", lines)
        }
    };
    let status = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(status, main_chunks[1]);

    // Input
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Command Input (Type /help) ");

    let style = match app.input_mode {
        InputMode::Normal => Style::default().fg(Color::Gray),
        InputMode::Editing => Style::default().fg(Color::Yellow),
    };

    let width = chunks[2].width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(input_block);
    f.render_widget(input, chunks[2]);

    // Cursor
    if app.input_mode == InputMode::Editing {
        f.set_cursor_position((
            chunks[2].x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            chunks[2].y + 1,
        ));
    }

    if app.input_mode == InputMode::Normal {
        let help_text = Paragraph::new("Press 'e' to edit, 'q' to quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(help_text, chunks[0]);
    }
}
