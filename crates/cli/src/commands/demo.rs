//! Create the fixed demo supplier account used for manual app testing.

use tracing::info;

use wms_client::{ClientConfig, GraphqlClient};
use wms_core::{Category, Email, ProductCandidate, SupplierCandidate};

const DEMO_EMAIL: &str = "demo@supplier.com";
const DEMO_PASSWORD: &str = "Demo123!";

/// Register the demo supplier and give it one sample product.
///
/// # Errors
///
/// Returns an error if the account cannot be registered (it usually already
/// exists) or the sample product is rejected.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = GraphqlClient::new(&ClientConfig::from_env()?)?;

    let candidate = SupplierCandidate {
        first_name: "Demo".to_string(),
        last_name: "Supplier".to_string(),
        email: Email::parse(DEMO_EMAIL)?,
        password: DEMO_PASSWORD.to_string(),
    };

    info!(email = DEMO_EMAIL, "Registering demo supplier");
    let registered = client.register(&candidate).await?;
    let Some(token) = registered.session_token() else {
        let detail = registered
            .errors
            .map_or_else(|| "no token returned".to_string(), |e| e.to_string());
        return Err(format!("demo supplier registration failed: {detail}").into());
    };

    info!("Demo supplier created");
    info!(email = DEMO_EMAIL, password = DEMO_PASSWORD, "Demo credentials");

    let product = ProductCandidate {
        name: "Demo Product".to_string(),
        description: "Sample product for the demo supplier account.".to_string(),
        price: 49.99,
        discount_price: None,
        images_url: vec!["https://picsum.photos/400/400?random=1".to_string()],
        category: Category::Electronics,
        stock_quantity: 50,
    };

    info!("Creating sample product");
    let created = client.create_product(token, &product).await?;
    if !created.success {
        let detail = created
            .message
            .unwrap_or_else(|| "no message returned".to_string());
        return Err(format!("sample product creation failed: {detail}").into());
    }

    info!("Demo supplier is ready for product creation in the app");
    Ok(())
}
