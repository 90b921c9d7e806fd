//! Bulk-provision suppliers and products against the backend.

use tracing::info;

use wms_client::{ClientConfig, GraphqlClient};
use wms_populate::{AuthMode, Generator, Pipeline, PopulateConfig};

/// Run a full provisioning pass.
///
/// # Errors
///
/// Returns an error if configuration is invalid, or if the run targeted at
/// least one supplier and not a single one was provisioned - total failure
/// usually means a wrong endpoint or an unreachable backend, and it should
/// fail the process rather than exit 0.
pub async fn run(
    suppliers: usize,
    products: usize,
    auth_mode: AuthMode,
    checkpoint_every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let client_config = ClientConfig::from_env()?;
    info!(endpoint = %client_config.endpoint, "Target backend");
    let client = GraphqlClient::new(&client_config)?;

    let config = PopulateConfig {
        suppliers,
        products_per_supplier: products,
        auth_mode,
        checkpoint_every,
        ..PopulateConfig::default()
    };

    let pipeline = Pipeline::new(client, config);
    let stats = pipeline.run(&mut Generator::new()).await;

    if suppliers > 0 && stats.suppliers_succeeded == 0 {
        return Err("no suppliers were provisioned".into());
    }
    Ok(())
}
