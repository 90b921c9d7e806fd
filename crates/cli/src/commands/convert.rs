//! Convert an existing account to a supplier, interactively.

use std::io::{self, BufRead, Write};

use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use wms_client::{ClientConfig, GraphqlClient};
use wms_core::{AccountType, Email};

/// Prompt for credentials, log in, and flip the account type to supplier.
///
/// # Errors
///
/// Returns an error when the prompts cannot be read, the login is rejected,
/// or the backend refuses the update.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = GraphqlClient::new(&ClientConfig::from_env()?)?;

    let email = Email::parse(prompt("Email: ")?.trim())?;
    let password = SecretString::from(prompt("Password: ")?.trim_end().to_string());

    info!(email = %email, "Logging in");
    let login = client.login(&email, password.expose_secret()).await?;
    let Some(token) = login.session_token() else {
        return Err("login failed: no session token returned (check credentials)".into());
    };

    if let Some(user) = &login.user
        && user.account_type == Some(AccountType::Supplier)
    {
        info!(email = %email, "Account is already a supplier, nothing to do");
        return Ok(());
    }

    info!("Converting account to supplier");
    let updated = client
        .update_account_type(token, AccountType::Supplier)
        .await?;
    if !updated.success {
        let detail = updated
            .message
            .unwrap_or_else(|| "no message returned".to_string());
        return Err(format!("account conversion failed: {detail}").into());
    }

    info!(email = %email, "Account converted to supplier");
    Ok(())
}

/// Print a prompt and read one line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
