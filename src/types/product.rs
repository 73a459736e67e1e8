//! Product types.

use super::collection::{Keyed, KeyedCollection};
use super::common::ProductStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Products keyed by seller SKU.
pub type Products = KeyedCollection<Product>;

/// Category specific attributes of a product, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    entries: Vec<(String, String)>,
}

impl ProductData {
    /// Create empty product data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing the value of an existing one.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(name, value);
        self
    }

    /// Value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First attribute name that cannot be written as an element name.
    pub fn invalid_name(&self) -> Option<&str> {
        self.entries
            .iter()
            .map(|(n, _)| n.as_str())
            .find(|n| !is_element_name(n))
    }
}

/// ASCII XML element name: a letter or `_`, then letters, digits, `_`, `-`, `.`.
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// A product of the seller catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Seller SKU, unique per seller.
    pub seller_sku: String,
    /// SKU of the parent product for variations.
    pub parent_sku: Option<String>,
    /// Publication status.
    pub status: Option<ProductStatus>,
    /// Product name.
    pub name: String,
    /// Variation value.
    pub variation: Option<String>,
    /// Primary category.
    pub primary_category: String,
    /// Additional categories.
    pub categories: Vec<String>,
    /// HTML description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Regular price.
    pub price: f64,
    /// Sale price.
    pub sale_price: Option<f64>,
    /// Sale start.
    pub sale_start_date: Option<NaiveDateTime>,
    /// Sale end.
    pub sale_end_date: Option<NaiveDateTime>,
    /// Tax class.
    pub tax_class: Option<String>,
    /// Shipment type.
    pub shipment_type: Option<String>,
    /// Product identifier (EAN, UPC, ...).
    pub product_id: Option<String>,
    /// Condition, e.g. `new`.
    pub condition: Option<String>,
    /// Category specific attributes.
    pub product_data: ProductData,
    /// Stock quantity.
    pub quantity: Option<u32>,
    /// Image URLs.
    pub images: Vec<String>,
}

impl Product {
    /// Create a product from the fields every product carries.
    pub fn from_basic_data(
        seller_sku: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        primary_category: impl Into<String>,
    ) -> Self {
        Self {
            seller_sku: seller_sku.into(),
            name: name.into(),
            brand: brand.into(),
            description: description.into(),
            price,
            primary_category: primary_category.into(),
            ..Self::default()
        }
    }

    /// Set the parent SKU.
    pub fn with_parent_sku(mut self, parent_sku: impl Into<String>) -> Self {
        self.parent_sku = Some(parent_sku.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the variation.
    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }

    /// Set the additional categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set a sale price and its period.
    pub fn with_sale(
        mut self,
        sale_price: f64,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        self.sale_price = Some(sale_price);
        self.sale_start_date = start;
        self.sale_end_date = end;
        self
    }

    /// Set the tax class.
    pub fn with_tax_class(mut self, tax_class: impl Into<String>) -> Self {
        self.tax_class = Some(tax_class.into());
        self
    }

    /// Set the shipment type.
    pub fn with_shipment_type(mut self, shipment_type: impl Into<String>) -> Self {
        self.shipment_type = Some(shipment_type.into());
        self
    }

    /// Set the product identifier.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Set the condition.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set the category specific attributes.
    pub fn with_product_data(mut self, product_data: ProductData) -> Self {
        self.product_data = product_data;
        self
    }

    /// Set the stock quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the image URLs.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

impl Keyed for Product {
    fn key(&self) -> String {
        self.seller_sku.clone()
    }
}

/// Images attached to one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Seller SKU of the product.
    pub seller_sku: String,
    /// Image URLs, first one is the main image.
    pub images: Vec<String>,
}

impl ProductImage {
    /// Create an image set for a product.
    pub fn new<I, S>(seller_sku: impl Into<String>, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seller_sku: seller_sku.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }
}

/// Quality control status of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcStatus {
    /// Seller SKU.
    pub seller_sku: String,
    /// Status, e.g. `approved` or `rejected`.
    pub status: String,
    /// Rejection reason.
    pub reason: Option<String>,
}
