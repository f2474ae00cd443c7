//! Integration tests for the admin workspace.
//!
//! Drives login, the product editor and the panels against a `wiremock`
//! server, then inspects the multipart bodies the gateway actually sent.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use opal_admin::editor::{PendingUpload, VariantField, VariantKey};
use opal_admin::panels::CategoryForm;
use opal_admin::{AdminWorkspace, FieldChange};
use opal_client::ClientConfig;
use shared::models::Gender;

// 1x1 RGBA PNG
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0xF8,
    0xCF, 0xC0, 0xF0, 0x1F, 0x00, 0x05, 0x00, 0x01, 0xFF, 0x89, 0x99, 0x3D, 0x1D, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn workspace(server: &MockServer) -> AdminWorkspace {
    AdminWorkspace::new(&ClientConfig::new(server.uri()).with_timeout(5))
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({"code": "E0000", "message": "success", "data": data})
}

fn page_of(items: Vec<serde_json::Value>, total: u64) -> serde_json::Value {
    json!({
        "items": items,
        "pagination": {"page": 1, "per_page": 10, "total": total, "total_pages": total.div_ceil(10)}
    })
}

fn login_body() -> serde_json::Value {
    envelope(json!({
        "token": "tok_1",
        "admin": {"id": "a1", "name": "Admin", "email": "admin@test.dev", "role": "admin"}
    }))
}

fn product_with_variants(id: &str, variants: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Halo Ring",
        "slug": "halo-ring",
        "category_id": "cat_rings",
        "categoryName": "Rings",
        "gender": "women",
        "stock_status": "in_stock",
        "inventoryDetails": variants
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&login_body()))
        .mount(server)
        .await;
}

async fn mount_product_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&envelope(page_of(Vec::new(), 0))),
        )
        .mount(server)
        .await;
}

fn multipart_body(requests: &[Request], http_method: &str, url_path: &str) -> String {
    let request = requests
        .iter()
        .find(|r| r.method.as_str() == http_method && r.url.path() == url_path)
        .unwrap_or_else(|| panic!("no {http_method} {url_path} request recorded"));
    String::from_utf8_lossy(&request.body).into_owned()
}

#[tokio::test]
async fn create_flow_submits_the_full_field_grid() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_product_list(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/categories/cat_rings/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(json!([
            {"category_id": "cat_rings", "title": "Stone", "terms": [{"value": "emerald", "image": null}]},
            {"category_id": "cat_rings", "title": "Metal Type", "terms": []}
        ]))))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(header("authorization", "Bearer tok_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&envelope(product_with_variants("prod_9", json!([])))),
        )
        .mount(&server)
        .await;

    let mut workspace = workspace(&server);
    workspace.login("admin@test.dev", "secret").await.unwrap();
    workspace.open_product_editor();

    workspace
        .editor_apply(FieldChange::Name("Halo Ring".into()))
        .await;
    workspace
        .editor_apply(FieldChange::Category {
            id: "cat_rings".into(),
            name: "Rings".into(),
        })
        .await;

    // the metal definition must not have produced a picker
    let editor = workspace.editor.as_ref().unwrap();
    let titles: Vec<&str> = editor
        .draft()
        .property_defs
        .iter()
        .map(|d| d.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Stone"]);

    workspace
        .editor_apply(FieldChange::Property {
            title: "Stone".into(),
            value: "emerald".into(),
        })
        .await;
    workspace.editor_apply(FieldChange::AddVariant).await;
    let key = workspace.editor.as_ref().unwrap().draft().variants[0]
        .key
        .clone();
    workspace
        .editor_apply(FieldChange::Variant(key, VariantField::Size("6".into())))
        .await;

    let upload = PendingUpload::new("ring.png", TINY_PNG.to_vec()).unwrap();
    workspace
        .editor_apply(FieldChange::AddImage(upload))
        .await;
    workspace
        .editor_apply(FieldChange::SetFeaturedImage(0))
        .await;

    let created = workspace.submit_editor().await.unwrap();
    assert_eq!(created.id, "prod_9");

    let requests = server.received_requests().await.unwrap();
    let body = multipart_body(&requests, "POST", "/api/products");

    assert!(body.contains(r#"name="name""#));
    assert!(body.contains("Halo Ring"));
    assert!(body.contains(r#"name="gender""#));
    assert!(body.contains(r#"name="item_size[0]""#));
    assert!(body.contains(r#"name="inventoryDetailsId[0]""#));
    assert!(body.contains(r#"name="images[0]"; filename="ring.png""#));
    assert!(body.contains(r#"name="images_featured[0]""#));
    assert!(body.contains(r#"name="existingImages""#));
    assert!(body.contains("[]"));
    assert!(body.contains(r#"name="properties""#));
    assert!(body.contains(r#"{"Stone":"emerald"}"#));

    // create resets the editor back to a blank form
    let editor = workspace.editor.as_ref().unwrap();
    assert_eq!(editor.draft().name, "");
    assert!(editor.draft().variants.is_empty());
}

#[tokio::test]
async fn attribute_fetch_failure_lands_on_the_editor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/cat_rings/attributes"))
        .respond_with(ResponseTemplate::new(500).set_body_json(&json!({
            "code": "E5000", "message": "boom", "data": null
        })))
        .mount(&server)
        .await;

    let mut workspace = workspace(&server);
    workspace.open_product_editor();
    workspace
        .editor_apply(FieldChange::Category {
            id: "cat_rings".into(),
            name: "Rings".into(),
        })
        .await;

    let editor = workspace.editor.as_ref().unwrap();
    assert_eq!(editor.last_error(), Some("Internal error: boom"));
    assert!(editor.draft().property_defs.is_empty());
    assert!(editor.draft().properties.is_empty());
}

#[tokio::test]
async fn update_flow_rehydrates_with_server_assigned_ids() {
    let server = MockServer::start().await;
    mount_product_list(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/categories/cat_rings/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(json!([]))))
        .mount(&server)
        .await;

    // first fetch hydrates the editor with one persisted variant
    Mock::given(method("GET"))
        .and(path("/api/products/prod_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(
            product_with_variants(
                "prod_1",
                json!([{"id": "inv_1", "size": "6", "color": "gold", "image": null,
                        "shape": null, "carat": null, "stock_count": 3}]),
            ),
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // refetch after the update carries the server id for the new row
    Mock::given(method("GET"))
        .and(path("/api/products/prod_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(
            product_with_variants(
                "prod_1",
                json!([
                    {"id": "inv_1", "size": "6", "color": "gold", "image": null,
                     "shape": null, "carat": null, "stock_count": 3},
                    {"id": "inv_2", "size": "7", "color": "silver", "image": null,
                     "shape": null, "carat": null, "stock_count": 0}
                ]),
            ),
        )))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/products/prod_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(
            product_with_variants("prod_1", json!([])),
        )))
        .mount(&server)
        .await;

    let mut workspace = workspace(&server);
    workspace.edit_product("prod_1").await.unwrap();
    workspace.editor_apply(FieldChange::AddVariant).await;
    let draft_key = workspace.editor.as_ref().unwrap().draft().variants[1]
        .key
        .clone();
    workspace
        .editor_apply(FieldChange::Variant(
            draft_key,
            VariantField::Size("7".into()),
        ))
        .await;

    workspace.submit_editor().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = multipart_body(&requests, "PUT", "/api/products/prod_1");
    assert!(body.contains(r#"name="inventoryDetailsId[0]""#));
    assert!(body.contains("inv_1"));
    assert!(body.contains(r#"name="inventoryDetailsId[1]""#));

    let editor = workspace.editor.as_ref().unwrap();
    let keys: Vec<VariantKey> = editor
        .draft()
        .variants
        .iter()
        .map(|v| v.key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![
            VariantKey::Persisted("inv_1".into()),
            VariantKey::Persisted("inv_2".into()),
        ]
    );
}

#[tokio::test]
async fn category_panel_submits_its_form_as_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(json!({
            "id": "cat_1", "name": "Rings", "slug": "rings",
            "image": "/uploads/rings.jpg", "gender": "women"
        }))))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&envelope(page_of(Vec::new(), 0))),
        )
        .mount(&server)
        .await;

    let mut workspace = workspace(&server);
    let form = CategoryForm {
        id: None,
        name: "Rings".into(),
        slug: "rings".into(),
        gender: Some(Gender::Women),
        image: Some(opal_admin::editor::ImageSource::Pending(
            PendingUpload::new("rings.png", TINY_PNG.to_vec()).unwrap(),
        )),
    };
    let client = workspace.client().clone();
    let saved = workspace
        .categories
        .submit(&client, &form)
        .await
        .unwrap();
    assert_eq!(saved.id, "cat_1");

    let requests = server.received_requests().await.unwrap();
    let body = multipart_body(&requests, "POST", "/api/categories");
    assert!(body.contains(r#"name="image"; filename="rings.png""#));
    assert!(body.contains(r#"name="gender""#));
    assert!(body.contains("women"));
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope(page_of(
            vec![product_with_variants("p1", json!([]))],
            1,
        ))))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(&json!({
            "code": "E5000", "message": "database offline", "data": null
        })))
        .mount(&server)
        .await;

    let mut workspace = workspace(&server);
    let client = workspace.client().clone();

    workspace.products.refresh(&client).await;
    assert_eq!(workspace.products.list.items.len(), 1);
    assert!(workspace.products.list.error.is_none());

    workspace.products.refresh(&client).await;
    assert_eq!(workspace.products.list.items.len(), 1);
    assert_eq!(
        workspace.products.list.error.as_deref(),
        Some("Internal error: database offline")
    );
}
