use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = storefront_api::app::build_app("test-secret".to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Browser-like client: carries the session and auth cookies automatically.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("failed to build client")
}

async fn seeded_product(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
) -> serde_json::Value {
    let res = client
        .get(format!("{}/products", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["name"] == name)
        .unwrap_or_else(|| panic!("seeded product {name:?} not found"))
        .clone()
}

async fn add_to_cart(
    client: &reqwest::Client,
    base_url: &str,
    product_id: &str,
    quantity: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/cart/add", base_url))
        .json(&json!({ "product_id": product_id, "quantity": quantity }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_is_seeded_with_sample_products() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 6);

    let headphones = seeded_product(&client, &srv.base_url, "Wireless Bluetooth Headphones").await;
    assert_eq!(headphones["price_cents"], 14999);
    assert_eq!(headphones["stock"], 15);

    // Individual lookup round-trips through the same record.
    let id = headphones["id"].as_str().unwrap();
    let res = client
        .get(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Wireless Bluetooth Headphones");
}

#[tokio::test]
async fn unknown_and_malformed_product_ids_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .get(format!(
            "{}/products/{}",
            srv.base_url,
            uuid::Uuid::now_v7()
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/products/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_persists_across_requests_on_one_session() {
    let srv = TestServer::spawn().await;
    let client = client();

    let product = seeded_product(&client, &srv.base_url, "Laptop Stand").await;
    let id = product["id"].as_str().unwrap();

    let res = add_to_cart(&client, &srv.base_url, id, "2").await;
    assert_eq!(res.status(), StatusCode::OK);

    // Adding again accumulates into the same line.
    let res = add_to_cart(&client, &srv.base_url, id, "3").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let lines = body["cart"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 5);
    assert_eq!(body["cart"]["subtotal_cents"], 5 * 3999);
    assert_eq!(body["message"], serde_json::Value::Null);
}

#[tokio::test]
async fn sessions_do_not_share_carts() {
    let srv = TestServer::spawn().await;
    let alice = client();
    let bob = client();

    let product = seeded_product(&alice, &srv.base_url, "Wireless Charging Pad").await;
    let id = product["id"].as_str().unwrap();

    let res = add_to_cart(&alice, &srv.base_url, id, "1").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = bob
        .get(format!("{}/cart", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["cart"]["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn overdrawing_stock_is_rejected_and_leaves_the_cart_unchanged() {
    let srv = TestServer::spawn().await;
    let client = client();

    // Premium Coffee Maker is seeded with stock 8.
    let product = seeded_product(&client, &srv.base_url, "Premium Coffee Maker").await;
    let id = product["id"].as_str().unwrap();

    let res = add_to_cart(&client, &srv.base_url, id, "6").await;
    assert_eq!(res.status(), StatusCode::OK);

    // 6 in the cart + 3 requested > 8 available.
    let res = add_to_cart(&client, &srv.base_url, id, "3").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");
    assert_eq!(
        body["message"],
        "Not enough stock for Premium Coffee Maker. Available: 8"
    );
    assert_eq!(body["cart"]["lines"][0]["quantity"], 6);

    // The failure message is surfaced on the next cart view, then consumed.
    let res = client
        .get(format!("{}/cart", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Not enough stock for Premium Coffee Maker. Available: 8"
    );
    assert_eq!(body["cart"]["lines"][0]["quantity"], 6);

    let res = client
        .get(format!("{}/cart", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], serde_json::Value::Null);
}

#[tokio::test]
async fn invalid_quantities_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = client();

    let product = seeded_product(&client, &srv.base_url, "Fitness Tracker Watch").await;
    let id = product["id"].as_str().unwrap();

    for quantity in ["0", "-1", "abc", "1.5", ""] {
        let res = add_to_cart(&client, &srv.base_url, id, quantity).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "quantity {quantity:?}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_quantity");
        assert_eq!(body["message"], "Invalid quantity.");
    }
}

#[tokio::test]
async fn adding_an_unknown_product_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = add_to_cart(
        &client,
        &srv.base_url,
        &uuid::Uuid::now_v7().to_string(),
        "1",
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product not found.");
}

#[tokio::test]
async fn update_sets_the_absolute_quantity_and_zero_removes() {
    let srv = TestServer::spawn().await;
    let client = client();

    let product = seeded_product(&client, &srv.base_url, "Organic Cotton T-Shirt").await;
    let id = product["id"].as_str().unwrap();

    let res = add_to_cart(&client, &srv.base_url, id, "10").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{}/cart/update", srv.base_url))
        .json(&json!({ "product_id": id, "quantity": "4" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["cart"]["lines"][0]["quantity"], 4);

    let res = client
        .post(format!("{}/cart/update", srv.base_url))
        .json(&json!({ "product_id": id, "quantity": "0" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["cart"]["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn remove_is_idempotent() {
    let srv = TestServer::spawn().await;
    let client = client();

    let product = seeded_product(&client, &srv.base_url, "Laptop Stand").await;
    let id = product["id"].as_str().unwrap();

    let res = add_to_cart(&client, &srv.base_url, id, "1").await;
    assert_eq!(res.status(), StatusCode::OK);

    for _ in 0..2 {
        let res = client
            .post(format!("{}/cart/remove", srv.base_url))
            .json(&json!({ "product_id": id }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert!(body["cart"]["lines"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn register_login_whoami_logout_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = client();

    // Unauthenticated whoami is rejected.
    let res = client
        .get(format!("{}/auth/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&json!({
            "name": "Alice",
            "email": "Alice@Example.com",
            "password": "hunter2",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["email"], "alice@example.com");

    // Registration signs the user in.
    let res = client
        .get(format!("{}/auth/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["name"], "Alice");

    let res = client
        .post(format!("{}/auth/logout", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/auth/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Login with the original (differently cased) email works.
    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "alice@example.com", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/auth/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_conflicts_and_bad_credentials_are_unauthorized() {
    let srv = TestServer::spawn().await;
    let client = client();

    let register = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "hunter2",
    });
    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&register)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&register)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Wrong password and unknown email produce the same response.
    for (email, password) in [
        ("alice@example.com", "wrong"),
        ("nobody@example.com", "hunter2"),
    ] {
        let res = client
            .post(format!("{}/auth/login", srv.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Invalid email or password.");
    }
}

#[tokio::test]
async fn a_tampered_auth_cookie_is_cleared_not_fatal() {
    let srv = TestServer::spawn().await;
    let client = client();

    // A token signed with the wrong secret behaves like no token at all.
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &json!({
            "sub": uuid::Uuid::now_v7(),
            "issued_at": chrono::Utc::now().to_rfc3339(),
            "expires_at": (chrono::Utc::now() + chrono::Duration::hours(1)).to_rfc3339(),
        }),
        &jsonwebtoken::EncodingKey::from_secret(b"wrong-secret"),
    )
    .unwrap();

    let res = client
        .get(format!("{}/auth/whoami", srv.base_url))
        .header("cookie", format!("jwt={}", forged))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let cleared = res
        .headers()
        .get_all("set-cookie")
        .iter()
        .any(|v| v.to_str().is_ok_and(|v| v.starts_with("jwt=;")));
    assert!(cleared, "stale auth cookie should be cleared");

    // Products remain reachable with the bad cookie present.
    let res = client
        .get(format!("{}/products", srv.base_url))
        .header("cookie", format!("jwt={}", forged))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
