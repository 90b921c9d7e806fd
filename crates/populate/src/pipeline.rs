//! The provisioning pipeline: register → authenticate → create K products,
//! one supplier at a time.
//!
//! Per supplier the steps form a small state machine:
//! `PENDING → REGISTERING → LOGGING_IN → AUTHENTICATED → CREATING_PRODUCTS → DONE`,
//! where a registration or login failure is terminal for that supplier and
//! the pipeline simply moves on to the next one. Failures are converted into
//! statistics, never into run aborts.

use std::time::Duration;

use tracing::{info, warn};

use wms_client::{ClientError, MarketplaceApi};
use wms_core::{AuthSession, SupplierCandidate};

use crate::generator::Generator;
use crate::pacing::{PaceKind, Pacing};
use crate::stats::{Reporter, RunStats};

/// Where the session token for product creation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Use the token embedded in the register payload directly.
    RegisterToken,
    /// Register, then perform a separate login exchange.
    LoginExchange,
}

/// Tunables for one provisioning run.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// How many suppliers to provision.
    pub suppliers: usize,
    /// How many products to create per authenticated supplier.
    pub products_per_supplier: usize,
    /// Session token source.
    pub auth_mode: AuthMode,
    /// Emit a checkpoint summary every N suppliers; 0 disables.
    pub checkpoint_every: usize,
    /// Fixed inter-request delays.
    pub pacing: Pacing,
    /// Extra attempts for network-level failures (GraphQL failures are
    /// never retried).
    pub network_retries: u32,
    /// Base backoff between retry attempts.
    pub retry_backoff: Duration,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            suppliers: 100,
            products_per_supplier: 20,
            auth_mode: AuthMode::LoginExchange,
            checkpoint_every: 10,
            pacing: Pacing::default(),
            network_retries: 2,
            retry_backoff: Duration::from_millis(250),
        }
    }
}

/// Why a supplier never reached the product-creation stage.
#[derive(Debug)]
enum SupplierFailure {
    Registration(String),
    Login(String),
}

impl SupplierFailure {
    fn step(&self) -> &'static str {
        match self {
            Self::Registration(_) => "registration",
            Self::Login(_) => "login",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Self::Registration(d) | Self::Login(d) => d,
        }
    }
}

/// Drives a provisioning run against a [`MarketplaceApi`].
pub struct Pipeline<A> {
    api: A,
    config: PopulateConfig,
}

impl<A: MarketplaceApi> Pipeline<A> {
    /// Build a pipeline over an API implementation.
    pub const fn new(api: A, config: PopulateConfig) -> Self {
        Self { api, config }
    }

    /// Consume the pipeline and return the API it drove.
    pub fn into_api(self) -> A {
        self.api
    }

    /// Run to completion and return the aggregated statistics.
    ///
    /// Strictly sequential: one supplier is fully processed before the next
    /// begins. The run always terminates with a summary regardless of how
    /// many entities failed.
    pub async fn run(&self, generator: &mut Generator) -> RunStats {
        let mut reporter = Reporter::new(self.config.checkpoint_every);

        info!(
            suppliers = self.config.suppliers,
            products_per_supplier = self.config.products_per_supplier,
            "Starting backend population"
        );

        for supplier_num in 1..=self.config.suppliers {
            let candidate = generator.supplier_candidate();
            info!(
                supplier = supplier_num,
                total = self.config.suppliers,
                name = %candidate.full_name(),
                email = %candidate.email,
                "Processing supplier"
            );

            match self.authenticate_supplier(&candidate).await {
                Ok(session) => {
                    reporter.record_supplier(true);
                    let created = self
                        .create_products(&session, generator, &mut reporter)
                        .await;
                    info!(
                        email = %candidate.email,
                        created,
                        requested = self.config.products_per_supplier,
                        "Supplier provisioned"
                    );
                }
                Err(failure) => {
                    // Terminal for this supplier: zero product attempts.
                    reporter.record_supplier(false);
                    warn!(
                        email = %candidate.email,
                        step = failure.step(),
                        detail = %failure.detail(),
                        "Supplier failed"
                    );
                }
            }

            reporter.maybe_checkpoint(supplier_num);

            if supplier_num < self.config.suppliers {
                self.config.pacing.pace(PaceKind::BetweenSuppliers).await;
            }
        }

        let stats = reporter.into_stats();
        info!("Population complete");
        for line in stats.to_string().lines() {
            info!("{line}");
        }
        stats
    }

    /// Register (and, depending on mode, log in) one supplier.
    ///
    /// Success means a usable [`AuthSession`]; a reported registration
    /// success without a token is still a failure.
    async fn authenticate_supplier(
        &self,
        candidate: &SupplierCandidate,
    ) -> Result<AuthSession, SupplierFailure> {
        let registered = self
            .with_network_retry(|| self.api.register(candidate))
            .await
            .map_err(|e| SupplierFailure::Registration(e.to_string()))?;

        if !registered.success {
            let detail = registered
                .errors
                .map_or_else(|| "register reported failure".to_string(), |e| e.to_string());
            return Err(SupplierFailure::Registration(detail));
        }

        match self.config.auth_mode {
            AuthMode::RegisterToken => {
                let token = registered.session_token().ok_or_else(|| {
                    SupplierFailure::Registration(
                        "register reported success but returned no token".to_string(),
                    )
                })?;
                AuthSession::new(
                    token.to_string(),
                    registered.refresh_token.clone(),
                    candidate.email.clone(),
                )
                .ok_or_else(|| SupplierFailure::Registration("empty token".to_string()))
            }
            AuthMode::LoginExchange => {
                let login = self
                    .with_network_retry(|| self.api.login(&candidate.email, &candidate.password))
                    .await
                    .map_err(|e| SupplierFailure::Login(e.to_string()))?;

                let token = login.session_token().ok_or_else(|| {
                    SupplierFailure::Login("login returned no token".to_string())
                })?;
                AuthSession::new(
                    token.to_string(),
                    login.refresh_token.clone(),
                    candidate.email.clone(),
                )
                .ok_or_else(|| SupplierFailure::Login("empty token".to_string()))
            }
        }
    }

    /// Create the configured number of products under one session.
    ///
    /// Slots are independent: a failed slot is recorded and the remaining
    /// slots are still attempted.
    async fn create_products(
        &self,
        session: &AuthSession,
        generator: &mut Generator,
        reporter: &mut Reporter,
    ) -> usize {
        let mut created = 0;

        for slot in 1..=self.config.products_per_supplier {
            let category = generator.random_category();
            let candidate = generator.product_candidate(category);

            let outcome = self
                .with_network_retry(|| self.api.create_product(&session.token, &candidate))
                .await;

            match outcome {
                Ok(payload) if payload.success => {
                    created += 1;
                    reporter.record_product(true);
                }
                Ok(payload) => {
                    reporter.record_product(false);
                    warn!(
                        slot,
                        product = %candidate.name,
                        message = payload.message.as_deref().unwrap_or("(no message)"),
                        "Product creation rejected"
                    );
                }
                Err(e) => {
                    reporter.record_product(false);
                    warn!(slot, product = %candidate.name, error = %e, "Product creation failed");
                }
            }

            if slot < self.config.products_per_supplier {
                self.config.pacing.pace(PaceKind::BetweenProducts).await;
            }
        }

        created
    }

    /// Retry `op` on network-level failures only, with linear backoff.
    ///
    /// GraphQL and HTTP failures are returned immediately: retrying them
    /// with unmodified input would only repeat the rejection.
    async fn with_network_retry<T, F, Fut>(&self, mut op: F) -> Result<T, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Err(e) if e.is_retryable() && attempt < self.config.network_retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "Transient network failure, retrying");
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                }
                other => return other,
            }
        }
    }
}
