// opal-client/examples/catalog_tour.rs
// 目录巡览示例：登录后翻阅商品与分类

use opal_client::ClientConfig;
use shared::ListQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!(
            "  Example: {} admin@example.com password123",
            args[0]
        );
        println!("  Base URL comes from OPAL_API_URL (default http://localhost:5000)");
        return Ok(());
    }

    let email = &args[1];
    let password = &args[2];

    let client = ClientConfig::from_env().build_http_client();

    // 登录并携带 token
    let login = client.login(email, password).await?;
    tracing::info!("Logged in as: {} ({})", login.admin.name, login.admin.role);
    let client = client.with_token(login.token);

    // 第一页商品
    let products = client
        .list_products(&ListQuery::new().paginate(1, 10))
        .await?;
    tracing::info!(
        "Products: page {}/{} ({} total)",
        products.pagination.page,
        products.pagination.total_pages,
        products.pagination.total
    );
    for product in &products.items {
        println!(
            "  {:<28} {:<12} stock: {}",
            product.name,
            product.category_name,
            product.stock_quantity
        );
    }

    // 分类与每个分类的属性定义
    let categories = client.list_categories(&ListQuery::new()).await?;
    for category in &categories.items {
        let attributes = client.category_attributes(&category.id).await?;
        println!(
            "  {:<20} {} properties",
            category.name,
            attributes.len()
        );
        for def in &attributes {
            let terms: Vec<&str> = def.terms.iter().map(|t| t.value.as_str()).collect();
            println!("    {:<16} [{}]", def.title, terms.join(", "));
        }
    }

    Ok(())
}
