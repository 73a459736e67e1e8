//! Catalog service.

use super::{body_collection, require_non_empty};
use crate::client::RequestExecutor;
use crate::error::SellerCenterError;
use crate::parameters::json_list;
use crate::types::{Attribute, AttributeSet, Brand, Category};
use std::sync::Arc;
use tracing::instrument;

/// Service for categories, attributes and brands.
pub struct CatalogService {
    executor: Arc<RequestExecutor>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// The full category tree.
    #[instrument(skip(self))]
    pub async fn get_category_tree(&self) -> Result<Vec<Category>, SellerCenterError> {
        let response = self
            .executor
            .get("GetCategoryTree", &self.executor.parameters())
            .await?;
        body_collection(&response, "Categories")
    }

    /// Attributes of a primary category.
    #[instrument(skip(self))]
    pub async fn get_category_attributes(
        &self,
        primary_category_id: u64,
    ) -> Result<Vec<Attribute>, SellerCenterError> {
        let params = self
            .executor
            .parameters()
            .with("PrimaryCategory", primary_category_id);
        let response = self.executor.get("GetCategoryAttributes", &params).await?;
        body_collection(&response, "Attributes")
    }

    /// Attribute sets and the categories using them.
    #[instrument(skip(self))]
    pub async fn get_categories_by_attribute_set(
        &self,
        attribute_set_ids: &[u64],
    ) -> Result<Vec<AttributeSet>, SellerCenterError> {
        require_non_empty(attribute_set_ids, "AttributeSet")?;

        let params = self
            .executor
            .parameters()
            .with("AttributeSet", json_list(attribute_set_ids));
        let response = self
            .executor
            .get("GetCategoriesByAttributeSet", &params)
            .await?;
        body_collection(&response, "AttributeSets")
    }

    /// All brands.
    #[instrument(skip(self))]
    pub async fn get_brands(&self) -> Result<Vec<Brand>, SellerCenterError> {
        let response = self
            .executor
            .get("GetBrands", &self.executor.parameters())
            .await?;
        body_collection(&response, "Brands")
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}
