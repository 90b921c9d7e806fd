//! End-to-end tests for the upload contract, driven over real HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use uuid::Uuid;

use wms_uploads::{UploadResponse, UploadsConfig, router};

struct TestServer {
    base_url: String,
    media_root: PathBuf,
}

async fn spawn() -> TestServer {
    let media_root = std::env::temp_dir().join(format!("wms-uploads-test-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&media_root)
        .await
        .expect("create media root");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    let config = UploadsConfig {
        host: addr.ip(),
        port: addr.port(),
        media_root: media_root.clone(),
        public_base_url: format!("http://{addr}"),
    };
    let app = router(config);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        media_root,
    }
}

fn image_part() -> reqwest::multipart::Part {
    // Smallest possible valid-enough payload; the service never decodes
    // image bytes.
    reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3])
        .file_name("avatar.png")
}

#[tokio::test]
async fn upload_stores_file_and_returns_url() {
    let server = spawn().await;

    let form = reqwest::multipart::Form::new().part("image", image_part());
    let response = reqwest::Client::new()
        .post(format!("{}/upload/", server.base_url))
        .multipart(form)
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body: UploadResponse = response.json().await.expect("json body");
    assert!(body.success);
    assert_eq!(body.message, "Image uploaded successfully");

    let url = body.image_url.expect("image_url present");
    assert!(url.contains("/media/profile_images/"));
    assert!(url.ends_with(".png"), "extension preserved: {url}");

    // The stored name is a fresh UUID, not the original filename.
    assert!(!url.contains("avatar"));

    // And the file is served back under /media/.
    let fetched = reqwest::get(&url).await.expect("fetch stored file");
    assert_eq!(fetched.status(), 200);
    let bytes = fetched.bytes().await.expect("body bytes");
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

    tokio::fs::remove_dir_all(&server.media_root).await.ok();
}

#[tokio::test]
async fn missing_image_field_is_400() {
    let server = spawn().await;

    let form = reqwest::multipart::Form::new().text("name", "not-a-file");
    let response = reqwest::Client::new()
        .post(format!("{}/upload/", server.base_url))
        .multipart(form)
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 400);
    let body: UploadResponse = response.json().await.expect("json body");
    assert!(!body.success);
    assert_eq!(body.message, "No image file provided");
    assert!(body.image_url.is_none());

    tokio::fs::remove_dir_all(&server.media_root).await.ok();
}

#[tokio::test]
async fn non_post_methods_are_405() {
    let server = spawn().await;
    let client = reqwest::Client::new();

    for method in [reqwest::Method::GET, reqwest::Method::PUT, reqwest::Method::DELETE] {
        let response = client
            .request(method.clone(), format!("{}/upload/", server.base_url))
            .send()
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), 405, "method {method} must be rejected");
        let body: UploadResponse = response.json().await.expect("json body");
        assert!(!body.success);
        assert_eq!(body.message, "Only POST method allowed");
    }

    tokio::fs::remove_dir_all(&server.media_root).await.ok();
}

#[tokio::test]
async fn upload_without_extension_still_succeeds() {
    let server = spawn().await;

    let part = reqwest::multipart::Part::bytes(vec![1, 2, 3]).file_name("blob");
    let form = reqwest::multipart::Form::new().part("image", part);
    let response = reqwest::Client::new()
        .post(format!("{}/upload/", server.base_url))
        .multipart(form)
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body: UploadResponse = response.json().await.expect("json body");
    let url = body.image_url.expect("image_url present");
    assert!(!url.ends_with('.'), "no stray dot: {url}");

    tokio::fs::remove_dir_all(&server.media_root).await.ok();
}

#[tokio::test]
async fn health_endpoint_answers() {
    let server = spawn().await;
    let response = reqwest::get(format!("{}/health", server.base_url))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 200);

    tokio::fs::remove_dir_all(&server.media_root).await.ok();
}
