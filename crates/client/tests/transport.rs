//! Transport-level tests against a local stand-in backend.
//!
//! The stand-in is a plain axum router on an ephemeral port; each test
//! scripts exactly the response shape it needs.

use axum::extract::Json;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

use wms_client::{ClientConfig, ClientError, GraphqlClient};
use wms_core::{Category, Email, ProductCandidate, SupplierCandidate};

/// Serve a router on an ephemeral port, returning the endpoint URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/graphql/")
}

fn client_for(endpoint: &str) -> GraphqlClient {
    let config = ClientConfig::for_endpoint(endpoint).expect("valid endpoint");
    GraphqlClient::new(&config).expect("client builds")
}

fn supplier() -> SupplierCandidate {
    SupplierCandidate {
        first_name: "Test".to_string(),
        last_name: "Supplier".to_string(),
        email: Email::parse("testsupplier@example.com").expect("valid email"),
        password: "Password123!".to_string(),
    }
}

fn product() -> ProductCandidate {
    ProductCandidate {
        name: "Test Product".to_string(),
        description: "A test product description".to_string(),
        price: 99.99,
        discount_price: Some(10.0),
        images_url: vec!["https://picsum.photos/400/400?random=1".to_string()],
        category: Category::Electronics,
        stock_quantity: 100,
    }
}

#[tokio::test]
async fn register_round_trip_parses_payload() {
    let router = Router::new().route(
        "/graphql/",
        post(|Json(body): Json<Value>| async move {
            // The envelope must carry the Register query and the candidate
            // fields, doubled password included.
            let query = body["query"].as_str().unwrap_or_default();
            assert!(query.contains("mutation Register"));
            let vars = &body["variables"];
            assert_eq!(vars["email"], "testsupplier@example.com");
            assert_eq!(vars["password1"], vars["password2"]);
            assert_eq!(vars["accountType"], "SUPPLIER");
            assert_eq!(vars["termsAccepted"], true);

            Json(json!({
                "data": {
                    "register": {
                        "success": true,
                        "token": "abc",
                        "refreshToken": "def",
                        "errors": null
                    }
                }
            }))
        }),
    );
    let endpoint = serve(router).await;

    let payload = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect("register succeeds");
    assert_eq!(payload.session_token(), Some("abc"));
    assert_eq!(payload.refresh_token.as_deref(), Some("def"));
}

#[tokio::test]
async fn http_500_is_a_value_not_a_crash() {
    let router = Router::new().route(
        "/graphql/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let endpoint = serve(router).await;

    let err = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect_err("500 must surface as an error value");
    match err {
        ClientError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn top_level_errors_array_is_application_failure() {
    let router = Router::new().route(
        "/graphql/",
        post(|| async {
            Json(json!({
                "data": null,
                "errors": [
                    { "message": "Email already exists" }
                ]
            }))
        }),
    );
    let endpoint = serve(router).await;

    let err = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect_err("errors array must not be swallowed");
    match err {
        ClientError::GraphQl(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Email already exists");
        }
        other => panic!("expected GraphQl error, got {other:?}"),
    }
    // And it must never be classified as retryable.
    let err = ClientError::GraphQl(vec![]);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let router = Router::new().route("/graphql/", post(|| async { "<html>gateway page</html>" }));
    let endpoint = serve(router).await;

    let err = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect_err("garbage body must surface as Malformed");
    match err {
        ClientError::Malformed { body, .. } => assert!(body.contains("gateway page")),
        other => panic!("expected Malformed error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_data_and_errors_is_graphql_failure() {
    let router = Router::new().route("/graphql/", post(|| async { Json(json!({})) }));
    let endpoint = serve(router).await;

    let err = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect_err("empty envelope must fail");
    assert!(matches!(err, ClientError::GraphQl(_)));
}

#[tokio::test]
async fn create_product_sends_bearer_token() {
    let router = Router::new().route(
        "/graphql/",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if auth != "Bearer sekrit" {
                return (StatusCode::OK, Json(json!({
                    "errors": [{ "message": "missing bearer token" }]
                })))
                    .into_response();
            }
            // Optional mobile-app fields ride along as explicit nulls.
            let vars = &body["variables"];
            assert!(vars["subcategory"].is_null());
            assert!(vars["tags"].is_null());
            assert_eq!(vars["imagesUrl"].as_array().map(Vec::len), Some(1));

            Json(json!({
                "data": {
                    "createProduct": {
                        "success": true,
                        "message": "Product created",
                        "product": {
                            "id": "p1",
                            "name": "Test Product",
                            "price": 99.99,
                            "category": "Electronics"
                        }
                    }
                }
            }))
            .into_response()
        }),
    );
    let endpoint = serve(router).await;

    let payload = client_for(&endpoint)
        .create_product("sekrit", &product())
        .await
        .expect("create_product succeeds");
    assert!(payload.success);
    assert_eq!(payload.product.expect("product echoed").id, "p1");
}

#[tokio::test]
async fn non_object_data_is_application_failure() {
    // A broken backend answering 200 with `{"data": []}`: the payload lookup
    // must come back as an error value, not an index panic.
    let router = Router::new().route("/graphql/", post(|| async { Json(json!({ "data": [] })) }));
    let endpoint = serve(router).await;

    let err = client_for(&endpoint)
        .register(&supplier())
        .await
        .expect_err("array data must fail");
    match err {
        ClientError::GraphQl(errors) => {
            assert!(errors[0].message.contains("register"));
        }
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_candidate_never_reaches_the_wire() {
    // If the endpoint is contacted at all the client would see an Http
    // error, and the Validation assertion below would catch it.
    let router = Router::new().route(
        "/graphql/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "must not be contacted") }),
    );
    let endpoint = serve(router).await;

    let mut bad = product();
    bad.images_url.clear();
    let err = client_for(&endpoint)
        .create_product("sekrit", &bad)
        .await
        .expect_err("local validation must reject");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Port from an immediately-dropped listener: nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}/graphql/"))
        .register(&supplier())
        .await
        .expect_err("refused connection must surface as Network");
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
}
