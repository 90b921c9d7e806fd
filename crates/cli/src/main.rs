//! Wholesalers Marketplace CLI - backend seeding and account tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the backend with suppliers and products
//! wms-cli populate --suppliers 100 --products 20
//!
//! # One supplier + one product smoke test
//! wms-cli quick-test
//!
//! # Create the fixed demo supplier account
//! wms-cli demo-supplier
//!
//! # Convert an existing account to a supplier (interactive)
//! wms-cli convert-supplier
//! ```
//!
//! # Commands
//!
//! - `populate` - Bulk-provision suppliers and products
//! - `quick-test` - End-to-end smoke test against the backend
//! - `demo-supplier` - Create the demo supplier account
//! - `convert-supplier` - Convert an existing account to a supplier

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use wms_populate::AuthMode;

mod commands;

#[derive(Parser)]
#[command(name = "wms-cli")]
#[command(author, version, about = "Wholesalers Marketplace operational tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-provision suppliers and products
    Populate {
        /// How many suppliers to create
        #[arg(long, default_value_t = 100)]
        suppliers: usize,

        /// How many products per supplier
        #[arg(long, default_value_t = 20)]
        products: usize,

        /// Where the session token comes from
        #[arg(long, value_enum, default_value_t = AuthModeArg::Login)]
        auth_mode: AuthModeArg,

        /// Emit a progress checkpoint every N suppliers (0 disables)
        #[arg(long, default_value_t = 10)]
        checkpoint_every: usize,
    },
    /// Register one supplier and create one product end to end
    QuickTest,
    /// Create the fixed demo supplier account with a sample product
    DemoSupplier,
    /// Convert an existing account to a supplier (prompts for credentials)
    ConvertSupplier,
}

/// CLI spelling of [`AuthMode`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AuthModeArg {
    /// Register, then perform a separate login exchange
    Login,
    /// Use the token embedded in the register payload
    RegisterToken,
}

impl From<AuthModeArg> for AuthMode {
    fn from(arg: AuthModeArg) -> Self {
        match arg {
            AuthModeArg::Login => Self::LoginExchange,
            AuthModeArg::RegisterToken => Self::RegisterToken,
        }
    }
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wms_cli=info,wms_populate=info,wms_client=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Populate {
            suppliers,
            products,
            auth_mode,
            checkpoint_every,
        } => {
            commands::populate::run(suppliers, products, auth_mode.into(), checkpoint_every)
                .await?;
        }
        Commands::QuickTest => commands::quick_test::run().await?,
        Commands::DemoSupplier => commands::demo::run().await?,
        Commands::ConvertSupplier => commands::convert::run().await?,
    }
    Ok(())
}
