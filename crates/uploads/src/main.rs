//! Wholesalers Marketplace uploads service binary.
//!
//! Serves the mobile app's profile-image upload endpoint and the stored
//! media files. See the crate docs for the wire contract.

#![cfg_attr(not(test), forbid(unsafe_code))]

use wms_uploads::{UPLOAD_SUBDIR, UploadsConfig, router};

#[tokio::main]
async fn main() {
    // Defaults to info level for this crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wms_uploads=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = UploadsConfig::from_env().expect("Failed to load configuration");

    let upload_dir = config.media_root.join(UPLOAD_SUBDIR);
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .expect("Failed to create upload directory");
    tracing::info!(dir = %upload_dir.display(), "Upload directory ready");

    let addr = config.socket_addr();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "Uploads service listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
