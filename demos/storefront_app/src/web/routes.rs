// demos/storefront_app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Mounts the cart service endpoints under `/api`, matching the paths the
/// cart client appends to its base URL.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .route("/login", web::post().to(auth_handlers::login_handler))
      .route("/getCart", web::get().to(cart_handlers::get_cart_handler))
      .route("/addToCart", web::post().to(cart_handlers::add_to_cart_handler))
      .route(
        "/deletedProduct/{line_id}",
        web::delete().to(cart_handlers::delete_line_handler),
      )
      .route(
        "/getAllProducts",
        web::get().to(product_handlers::list_products_handler),
      )
      .route("/productAdd", web::post().to(product_handlers::add_product_handler))
      .route(
        "/updateProduct/{product_id}",
        web::put().to(product_handlers::update_product_handler),
      )
      .route(
        "/deleteProduct/{product_id}",
        web::delete().to(product_handlers::delete_product_handler),
      ),
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::AppConfig;
  use crate::models::catalog_product::seed_catalog;
  use crate::services::mock_auth::MockAuthService;
  use crate::services::mock_cart::MockCartService;
  use crate::state::AppState;
  use actix_web::dev::ServerHandle;
  use actix_web::{http::StatusCode, test, App, HttpServer};
  use serde_json::{json, Value};
  use std::sync::Arc;
  use storefront_cart::{
    AddToCartRequest, AuthClient, CartApi, CartClientConfig, CartError, CartStore, CatalogClient, HttpCartApi,
    NewCartItem, NoToken, ProductDraft, StaticToken, TokenSource, TokenStatus,
  };

  fn test_state(require_token: bool) -> AppState {
    AppState {
      carts: Arc::new(MockCartService::new(seed_catalog())),
      auth: Arc::new(MockAuthService::new()),
      config: Arc::new(AppConfig {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        require_token,
        cart: CartClientConfig::default(),
      }),
    }
  }

  /// Runs the mock on an ephemeral port; returns the `/api` base URL.
  fn spawn_mock(state: AppState) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
      App::new()
        .app_data(web::Data::new(state.clone()))
        .configure(configure_app_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock server");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);
    (format!("http://{}/api", addr), handle)
  }

  fn client_config(base_url: String) -> CartClientConfig {
    CartClientConfig {
      api_base_url: base_url,
      ..CartClientConfig::default()
    }
  }

  /// Logs in against the mock and returns the token source holding the
  /// issued token.
  async fn logged_in(config: &CartClientConfig) -> Arc<StaticToken> {
    let tokens = Arc::new(StaticToken::default());
    AuthClient::new(config, tokens.clone())
      .expect("auth client")
      .login("shopper@example.com", "hunter2")
      .await
      .expect("login");
    tokens
  }

  #[actix_web::test]
  async fn get_cart_without_cart_is_404_with_message() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(test_state(false)))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/getCart").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Cart not found");
  }

  #[actix_web::test]
  async fn delete_wraps_cart_in_envelope() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(test_state(false)))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/addToCart")
      .set_json(json!({ "productId": "p-100", "quantity": 2 }))
      .to_request();
    let cart: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cart["items"][0]["productId"]["_id"], "p-100");
    assert_eq!(cart["items"][0]["quantity"], 2);
    let line_id = cart["items"][0]["_id"].as_str().expect("line id").to_string();

    let req = test::TestRequest::delete()
      .uri(&format!("/api/deletedProduct/{}", line_id))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Product removed from cart");
    assert_eq!(body["cart"]["items"], json!([]));
  }

  #[actix_web::test]
  async fn negative_quantity_is_rejected() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(test_state(false)))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/addToCart")
      .set_json(json!({ "productId": "p-100", "quantity": -1 }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn cart_store_round_trips_over_http() {
    let (base_url, handle) = spawn_mock(test_state(false));
    let api = HttpCartApi::new(base_url, Arc::new(NoToken), None).expect("client");
    let store = CartStore::new(api);

    store.load().await;
    assert!(store.items().is_empty());
    assert!(store.error().is_none());

    store
      .add_item(NewCartItem::new("p-100").named("Linen Shirt").with_quantity(2), None)
      .await;
    store.add_item(NewCartItem::new("p-200").named("Stoneware Mug"), None).await;
    assert_eq!(store.cart_items_count(), 3);
    assert!((store.cart_total() - 60.0).abs() < 1e-9);

    let shirt_line = store
      .items()
      .into_iter()
      .find(|item| item.product_id == "p-100")
      .map(|item| item.id)
      .expect("shirt line");
    store.update_quantity(&shirt_line, 5, None).await;
    assert_eq!(store.get_item_quantity("p-100"), 5);
    assert!(!store.is_in_cart(&shirt_line));
    assert!(store.error().is_none());

    store.clear_cart(None).await;
    assert!(store.items().is_empty());
    assert!(store.error().is_none());

    // The server agrees.
    store.load().await;
    assert!(store.items().is_empty());

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn http_api_classifies_failures() {
    let (base_url, handle) = spawn_mock(test_state(true));

    let anonymous = HttpCartApi::new(base_url.clone(), Arc::new(NoToken), None).expect("client");
    match anonymous.get_cart().await {
      Err(CartError::Unauthorized(message)) => assert!(message.contains("Authentication required")),
      other => panic!("expected Unauthorized, got {:?}", other),
    }

    let stale = HttpCartApi::new(
      base_url.clone(),
      Arc::new(StaticToken::new(Some("user-7".to_string()))),
      None,
    )
    .expect("client");
    match stale.get_cart().await {
      Err(CartError::Unauthorized(message)) => assert_eq!(message, "Invalid or expired token"),
      other => panic!("expected Unauthorized, got {:?}", other),
    }

    let tokens = logged_in(&client_config(base_url.clone())).await;
    let api = HttpCartApi::new(base_url, tokens, None).expect("client");
    assert!(api.get_cart().await.expect_err("no cart yet").is_not_found());

    let request = AddToCartRequest {
      product_id: "p-404".to_string(),
      quantity: 1,
    };
    assert!(matches!(api.add_to_cart(&request).await, Err(CartError::NotFound(_))));

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn catalog_fetch_builds_image_urls_for_a_logged_in_session() {
    let (base_url, handle) = spawn_mock(test_state(false));
    let config = client_config(base_url);

    let tokens = logged_in(&config).await;
    let catalog = CatalogClient::new(&config, tokens.clone()).expect("catalog client");
    assert_eq!(catalog.validate_token().await, TokenStatus::Valid);

    let products = catalog.get_all_products().await.expect("products");
    assert_eq!(products.len(), seed_catalog().len());
    let shirt = products.iter().find(|p| p.id == "p-100").expect("shirt");
    assert_eq!(shirt.name, "Linen Shirt");
    assert_eq!(
      shirt.image_url.as_deref(),
      Some(format!("{}/image/linen-shirt.jpg", config.origin()).as_str())
    );
    assert!(tokens.token().is_some());

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn login_stores_the_issued_token() {
    let (base_url, handle) = spawn_mock(test_state(true));
    let config = client_config(base_url);
    let tokens = Arc::new(StaticToken::default());
    let auth = AuthClient::new(&config, tokens.clone()).expect("auth client");
    assert!(!auth.is_authenticated());

    let session = auth.login("shopper@example.com", "hunter2").await.expect("login");
    assert!(session.token.starts_with("token-"));
    assert_eq!(tokens.token().as_deref(), Some(session.token.as_str()));
    assert_eq!(
      session.user.as_ref().and_then(|u| u["email"].as_str()),
      Some("shopper@example.com")
    );

    auth.logout();
    assert!(!auth.is_authenticated());

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn rejected_login_keeps_the_previous_token() {
    let (base_url, handle) = spawn_mock(test_state(false));
    let config = client_config(base_url);
    let tokens = Arc::new(StaticToken::new(Some("earlier".to_string())));
    let auth = AuthClient::new(&config, tokens.clone()).expect("auth client");

    match auth.login("not-an-email", "hunter2").await {
      Err(CartError::Unauthorized(message)) => assert_eq!(message, "Invalid email or password"),
      other => panic!("expected Unauthorized, got {:?}", other),
    }
    assert_eq!(tokens.token().as_deref(), Some("earlier"));

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn catalog_fetch_without_token_is_refused_before_sending() {
    let (base_url, handle) = spawn_mock(test_state(false));
    let catalog = CatalogClient::new(&client_config(base_url), Arc::new(NoToken)).expect("catalog client");

    assert_eq!(
      catalog.validate_token().await,
      TokenStatus::Invalid("No token found".to_string())
    );
    match catalog.get_all_products().await {
      Err(CartError::Unauthorized(message)) => assert_eq!(message, "Authentication required: No token found"),
      other => panic!("expected Unauthorized, got {:?}", other),
    }

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn rejected_token_is_cleared_by_the_catalog_fetch() {
    let (base_url, handle) = spawn_mock(test_state(true));
    let tokens = Arc::new(StaticToken::new(Some("token-from-last-week".to_string())));
    let catalog = CatalogClient::new(&client_config(base_url), tokens.clone()).expect("catalog client");

    match catalog.get_all_products().await {
      Err(CartError::Unauthorized(message)) => assert_eq!(message, "Authentication required: Token expired"),
      other => panic!("expected Unauthorized, got {:?}", other),
    }
    assert_eq!(tokens.token(), None);

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn product_admin_add_update_delete() {
    let (base_url, handle) = spawn_mock(test_state(true));
    let config = client_config(base_url);
    let tokens = logged_in(&config).await;
    let catalog = CatalogClient::new(&config, tokens).expect("catalog client");

    let draft = ProductDraft {
      name: "Floor Cushion".to_string(),
      price: 45.0,
      category: Some("home".to_string()),
      image: Some("cushion.jpg".to_string()),
      ..Default::default()
    };
    let added = catalog.add_product(&draft).await.expect("add");
    assert_eq!(added.name, "Floor Cushion");
    assert_eq!(
      added.image_url.as_deref(),
      Some(format!("{}/image/cushion.jpg", config.origin()).as_str())
    );

    let bigger = ProductDraft {
      name: "Floor Cushion XL".to_string(),
      price: 55.0,
      ..draft
    };
    let updated = catalog.update_product(&added.id, &bigger).await.expect("update");
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.name, "Floor Cushion XL");

    let listed = catalog.get_all_products().await.expect("products");
    assert_eq!(listed.len(), seed_catalog().len() + 1);

    catalog.delete_product(&added.id).await.expect("delete");
    assert!(matches!(
      catalog.delete_product(&added.id).await,
      Err(CartError::NotFound(_))
    ));
    assert_eq!(
      catalog.get_all_products().await.expect("products").len(),
      seed_catalog().len()
    );

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn product_admin_needs_a_token() {
    let (base_url, handle) = spawn_mock(test_state(false));
    let catalog = CatalogClient::new(&client_config(base_url), Arc::new(NoToken)).expect("catalog client");
    let draft = ProductDraft {
      name: "Anything".to_string(),
      price: 1.0,
      ..Default::default()
    };

    for result in [
      catalog.add_product(&draft).await.map(|_| ()),
      catalog.update_product("p-100", &draft).await.map(|_| ()),
      catalog.delete_product("p-100").await,
    ] {
      match result {
        Err(CartError::Unauthorized(message)) => assert_eq!(message, "Authentication required"),
        other => panic!("expected Unauthorized, got {:?}", other),
      }
    }

    handle.stop(true).await;
  }
}
