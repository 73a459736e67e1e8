//! Products service.

use super::{body_collection, require_non_empty};
use crate::client::RequestExecutor;
use crate::error::{DomainError, SellerCenterError};
use crate::factories::feed_response;
use crate::parameters::json_list;
use crate::response::SuccessResponse;
use crate::transformers;
use crate::types::{FeedResponse, GetProductsParameters, ProductImage, Products, QcStatus};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Service for the product catalog of the seller.
pub struct ProductsService {
    executor: Arc<RequestExecutor>,
}

impl ProductsService {
    /// Create a new products service.
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// List products matching the filters.
    #[instrument(skip(self))]
    pub async fn get_products(
        &self,
        filters: GetProductsParameters,
    ) -> Result<Products, SellerCenterError> {
        let mut params = self.executor.parameters();
        filters.apply(&mut params);

        let response = self.executor.get("GetProducts", &params).await?;
        let products: Products = body_collection(&response, "Products")?;

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Get products by their seller SKUs.
    #[instrument(skip(self))]
    pub async fn get_products_by_seller_sku(
        &self,
        seller_skus: &[&str],
    ) -> Result<Products, SellerCenterError> {
        require_non_empty(seller_skus, "SkuSellerList")?;
        self.get_products(GetProductsParameters::new().skus(seller_skus.iter().copied()))
            .await
    }

    /// Create products. The changes are applied asynchronously through a feed.
    #[instrument(skip(self, products), fields(products = products.len()))]
    pub async fn create(&self, products: &Products) -> Result<FeedResponse, SellerCenterError> {
        check_product_data(products)?;
        self.write_products("ProductCreate", products, transformers::products)
            .await
    }

    /// Update existing products.
    #[instrument(skip(self, products), fields(products = products.len()))]
    pub async fn update(&self, products: &Products) -> Result<FeedResponse, SellerCenterError> {
        check_product_data(products)?;
        self.write_products("ProductUpdate", products, transformers::products)
            .await
    }

    /// Remove products.
    #[instrument(skip(self, products), fields(products = products.len()))]
    pub async fn remove(&self, products: &Products) -> Result<FeedResponse, SellerCenterError> {
        self.write_products("ProductRemove", products, transformers::products_remove)
            .await
    }

    /// Set the images of products.
    #[instrument(skip(self, images), fields(products = images.len()))]
    pub async fn add_images(
        &self,
        images: &[ProductImage],
    ) -> Result<FeedResponse, SellerCenterError> {
        require_non_empty(images, "ProductImages")?;

        let body = transformers::product_images(images);
        let response = self
            .executor
            .post("Image", &self.executor.parameters(), body)
            .await?;
        feed_created(&response)
    }

    /// Quality control status of products.
    #[instrument(skip(self))]
    pub async fn get_qc_status(
        &self,
        seller_skus: &[&str],
    ) -> Result<Vec<QcStatus>, SellerCenterError> {
        require_non_empty(seller_skus, "SkuSellerList")?;

        let params = self
            .executor
            .parameters()
            .with("SkuSellerList", json_list(seller_skus));
        let response = self.executor.get("GetQcStatus", &params).await?;
        body_collection(&response, "Status")
    }

    async fn write_products(
        &self,
        action: &str,
        products: &Products,
        document: fn(&Products) -> String,
    ) -> Result<FeedResponse, SellerCenterError> {
        if products.is_empty() {
            return Err(DomainError::empty("Products").into());
        }

        let response = self
            .executor
            .post(action, &self.executor.parameters(), document(products))
            .await?;
        feed_created(&response)
    }
}

fn check_product_data(products: &Products) -> Result<(), SellerCenterError> {
    match products.iter().find_map(|p| p.product_data.invalid_name()) {
        Some(name) => Err(DomainError::InvalidProductDataName {
            name: name.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

fn feed_created(response: &SuccessResponse) -> Result<FeedResponse, SellerCenterError> {
    let feed = feed_response(response.head())?;
    info!(feed_id = feed.feed_id(), action = %feed.request_action, "Feed queued");
    Ok(feed)
}

impl std::fmt::Debug for ProductsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsService").finish_non_exhaustive()
    }
}
