//! Seller Center client implementation.
//!
//! This module provides the main client interface and builder.

mod executor;

pub use executor::{RequestExecutor, CONTENT_TYPE, REQUEST_ID_HEADER};

use crate::config::SellerCenterConfig;
use crate::error::SellerCenterError;
use crate::services::{
    CatalogService, FeedsService, OrdersService, ProductsService, WebhooksService,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Seller Center client trait.
pub trait SellerCenterClient: Send + Sync {
    /// Get the orders service.
    fn orders(&self) -> &OrdersService;

    /// Get the products service.
    fn products(&self) -> &ProductsService;

    /// Get the feeds service.
    fn feeds(&self) -> &FeedsService;

    /// Get the webhooks service.
    fn webhooks(&self) -> &WebhooksService;

    /// Get the catalog service.
    fn catalog(&self) -> &CatalogService;

    /// Get the executor shared by the services.
    fn executor(&self) -> &RequestExecutor;

    /// Get the client configuration.
    fn config(&self) -> &SellerCenterConfig;
}

/// Seller Center client implementation.
pub struct SellerCenterClientImpl {
    executor: Arc<RequestExecutor>,

    // Lazy-initialized services
    orders: OnceCell<OrdersService>,
    products: OnceCell<ProductsService>,
    feeds: OnceCell<FeedsService>,
    webhooks: OnceCell<WebhooksService>,
    catalog: OnceCell<CatalogService>,
}

impl SellerCenterClientImpl {
    /// Create a new client with the given configuration.
    pub fn new(config: SellerCenterConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let executor = Arc::new(RequestExecutor::new(Arc::new(config), transport));

        Self {
            executor,
            orders: OnceCell::new(),
            products: OnceCell::new(),
            feeds: OnceCell::new(),
            webhooks: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }
}

impl SellerCenterClient for SellerCenterClientImpl {
    fn orders(&self) -> &OrdersService {
        self.orders
            .get_or_init(|| OrdersService::new(self.executor.clone()))
    }

    fn products(&self) -> &ProductsService {
        self.products
            .get_or_init(|| ProductsService::new(self.executor.clone()))
    }

    fn feeds(&self) -> &FeedsService {
        self.feeds
            .get_or_init(|| FeedsService::new(self.executor.clone()))
    }

    fn webhooks(&self) -> &WebhooksService {
        self.webhooks
            .get_or_init(|| WebhooksService::new(self.executor.clone()))
    }

    fn catalog(&self) -> &CatalogService {
        self.catalog
            .get_or_init(|| CatalogService::new(self.executor.clone()))
    }

    fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    fn config(&self) -> &SellerCenterConfig {
        self.executor.config()
    }
}

impl std::fmt::Debug for SellerCenterClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellerCenterClientImpl")
            .field("config", self.executor.config())
            .finish_non_exhaustive()
    }
}

/// Builder for the Seller Center client.
pub struct SellerCenterClientBuilder {
    config: Option<SellerCenterConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SellerCenterClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            from_env: false,
            transport: None,
        }
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: SellerCenterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Use a custom HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SellerCenterClientImpl, SellerCenterError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            SellerCenterConfig::builder().from_env()?.build()?
        } else {
            SellerCenterConfig::builder().build()?
        };

        let transport = if let Some(transport) = self.transport {
            transport
        } else {
            let mut builder = ReqwestTransport::builder()
                .connect_timeout(config.connect_timeout)
                .read_timeout(config.read_timeout)
                .verify_ssl(config.verify_ssl);
            if let Some(user_agent) = &config.user_agent {
                builder = builder.user_agent(user_agent.clone());
            }

            Arc::new(builder.build()?)
        };

        Ok(SellerCenterClientImpl::new(config, transport))
    }
}

impl Default for SellerCenterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
