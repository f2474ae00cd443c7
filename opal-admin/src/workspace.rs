//! Admin workspace
//!
//! Root state of the dashboard. Owns the one HTTP client and every
//! panel; login swaps the client for an authorized clone so the token
//! reaches all panels at once. The product editor opens on demand and
//! its network effects are run here, on the workspace's client.

use opal_client::{AdminInfo, ClientConfig, ClientError, ClientResult, HttpClient, LoginResponse};
use shared::models::Product;
use tracing::{info, warn};

use crate::editor::{EditorEffect, EditorMode, FieldChange, ProductEditor};
use crate::panels::{
    AttributesPanel, BannersPanel, CategoriesPanel, CollectionsPanel, FaqsPanel, InstagramPanel,
    ProductsPanel, ReviewsPanel, ServicesPanel, SubcategoriesPanel, TaxClassesPanel,
    TaxOptionsPanel,
};

#[derive(Debug)]
pub struct AdminWorkspace {
    client: HttpClient,
    pub admin: Option<AdminInfo>,
    pub products: ProductsPanel,
    pub categories: CategoriesPanel,
    pub subcategories: SubcategoriesPanel,
    pub attributes: AttributesPanel,
    pub banners: BannersPanel,
    pub collections: CollectionsPanel,
    pub services: ServicesPanel,
    pub faqs: FaqsPanel,
    pub instagram: InstagramPanel,
    pub reviews: ReviewsPanel,
    pub tax_classes: TaxClassesPanel,
    pub tax_options: TaxOptionsPanel,
    pub editor: Option<ProductEditor>,
}

impl AdminWorkspace {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: HttpClient::new(config),
            admin: None,
            products: ProductsPanel::new(),
            categories: CategoriesPanel::new(),
            subcategories: SubcategoriesPanel::new(),
            attributes: AttributesPanel::new(),
            banners: BannersPanel::new(),
            collections: CollectionsPanel::new(),
            services: ServicesPanel::new(),
            faqs: FaqsPanel::new(),
            instagram: InstagramPanel::new(),
            reviews: ReviewsPanel::new(),
            tax_classes: TaxClassesPanel::new(),
            tax_options: TaxOptionsPanel::new(),
            editor: None,
        }
    }

    /// The client panels should borrow for their calls
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    // ========== 登录 ==========

    /// Authenticate and switch every later call onto the issued token
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<AdminInfo> {
        let LoginResponse { token, admin } = self.client.login(email, password).await?;
        self.client = self.client.clone().with_token(token);
        info!(email = %admin.email, "admin logged in");
        self.admin = Some(admin.clone());
        Ok(admin)
    }

    pub async fn logout(&mut self) -> ClientResult<()> {
        self.client.logout().await?;
        self.admin = None;
        info!("admin logged out");
        Ok(())
    }

    // ========== 商品编辑器 ==========

    /// Open the editor on a blank create form
    pub fn open_product_editor(&mut self) {
        self.editor = Some(ProductEditor::new());
    }

    /// Fetch a product and open the editor on it
    pub async fn edit_product(&mut self, id: &str) -> ClientResult<()> {
        let product = self.client.get_product(id).await?;
        let (editor, effects) = ProductEditor::from_product(product);
        self.editor = Some(editor);
        self.run_editor_effects(effects).await;
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Apply one edit and run whatever fetches it requested
    pub async fn editor_apply(&mut self, change: FieldChange) {
        let effects = match self.editor.as_mut() {
            Some(editor) => editor.apply(change),
            None => return,
        };
        self.run_editor_effects(effects).await;
    }

    /// Submit the open editor. Create resets to a blank form; update
    /// re-hydrates from a fresh fetch so server-assigned variant ids
    /// replace the draft ones.
    pub async fn submit_editor(&mut self) -> ClientResult<Product> {
        let (payload, mode) = match self.editor.as_ref() {
            Some(editor) => (editor.payload(), editor.mode().clone()),
            None => return Err(ClientError::Internal("no editor open".into())),
        };

        let result = match &mode {
            EditorMode::Create => self.client.create_product(payload).await,
            EditorMode::Edit { product_id } => {
                self.client.update_product(product_id, payload).await
            }
        };

        let product = match result {
            Ok(product) => product,
            Err(err) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.set_error(err.to_string());
                }
                return Err(err);
            }
        };

        match mode {
            EditorMode::Create => {
                info!(product = %product.name, "product created");
                if let Some(editor) = self.editor.as_mut() {
                    editor.reset();
                }
            }
            EditorMode::Edit { product_id } => {
                info!(product = %product.name, "product updated");
                let fresh = self.client.get_product(&product_id).await?;
                let effects = match self.editor.as_mut() {
                    Some(editor) => editor.hydrate(fresh),
                    None => Vec::new(),
                };
                self.run_editor_effects(effects).await;
            }
        }

        self.products.refresh(&self.client).await;
        Ok(product)
    }

    async fn run_editor_effects(&mut self, effects: Vec<EditorEffect>) {
        for effect in effects {
            match effect {
                EditorEffect::FetchProperties {
                    category_id,
                    generation,
                } => {
                    let result = self.client.category_attributes(&category_id).await;
                    let Some(editor) = self.editor.as_mut() else {
                        return;
                    };
                    match result {
                        Ok(defs) => editor.merge_property_definitions(generation, defs),
                        Err(err) => {
                            warn!(category_id, error = %err, "category attribute fetch failed");
                            editor.property_fetch_failed(generation, err.to_string());
                        }
                    }
                }
            }
        }
    }
}
