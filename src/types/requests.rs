//! Filter parameters of the listing actions.

use super::common::*;
use crate::parameters::{json_list, ParameterSet};
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Page size used when none (or zero) is given.
pub const DEFAULT_LIMIT: u32 = 1000;
/// First record used when no offset is given.
pub const DEFAULT_OFFSET: u32 = 0;

/// Format a date parameter as ISO 8601 with offset.
pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn insert_date(parameters: &mut ParameterSet, key: &str, date: &Option<DateTime<FixedOffset>>) {
    if let Some(date) = date {
        parameters.insert(key, format_date(date));
    }
}

fn insert_page(parameters: &mut ParameterSet, limit: Option<u32>, offset: Option<u32>) {
    let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
    parameters.insert("Limit", limit);
    parameters.insert("Offset", offset.unwrap_or(DEFAULT_OFFSET));
}

/// Filters of `GetOrders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOrdersParameters {
    /// Orders created after this date.
    pub created_after: Option<DateTime<FixedOffset>>,
    /// Orders created before this date.
    pub created_before: Option<DateTime<FixedOffset>>,
    /// Orders updated after this date.
    pub updated_after: Option<DateTime<FixedOffset>>,
    /// Orders updated before this date.
    pub updated_before: Option<DateTime<FixedOffset>>,
    /// Only orders with this status.
    pub status: Option<OrderStatus>,
    /// Page size.
    pub limit: Option<u32>,
    /// First record.
    pub offset: Option<u32>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_direction: Option<SortDirection>,
}

impl GetOrdersParameters {
    /// Create empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only orders created after the date.
    pub fn created_after(mut self, date: DateTime<FixedOffset>) -> Self {
        self.created_after = Some(date);
        self
    }

    /// Only orders created before the date.
    pub fn created_before(mut self, date: DateTime<FixedOffset>) -> Self {
        self.created_before = Some(date);
        self
    }

    /// Only orders updated after the date.
    pub fn updated_after(mut self, date: DateTime<FixedOffset>) -> Self {
        self.updated_after = Some(date);
        self
    }

    /// Only orders updated before the date.
    pub fn updated_before(mut self, date: DateTime<FixedOffset>) -> Self {
        self.updated_before = Some(date);
        self
    }

    /// Only orders with the status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Page size and first record.
    pub fn page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    /// Sort order.
    pub fn sort(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_direction = Some(direction);
        self
    }

    /// Write the filters into a parameter set.
    pub fn apply(&self, parameters: &mut ParameterSet) {
        insert_date(parameters, "CreatedAfter", &self.created_after);
        insert_date(parameters, "CreatedBefore", &self.created_before);
        insert_date(parameters, "UpdatedAfter", &self.updated_after);
        insert_date(parameters, "UpdatedBefore", &self.updated_before);
        if let Some(status) = self.status {
            parameters.insert("Status", status.as_str());
        }
        insert_page(parameters, self.limit, self.offset);
        if let Some(sort_by) = self.sort_by {
            parameters.insert("SortBy", sort_by.as_str());
        }
        if let Some(direction) = self.sort_direction {
            parameters.insert("SortDirection", direction.as_str());
        }
    }
}

/// Filters of `GetProducts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProductsParameters {
    /// Text searched in name and SKU.
    pub search: Option<String>,
    /// Status filter.
    pub filter: Option<ProductFilter>,
    /// Products created after this date.
    pub created_after: Option<DateTime<FixedOffset>>,
    /// Products created before this date.
    pub created_before: Option<DateTime<FixedOffset>>,
    /// Products updated after this date.
    pub updated_after: Option<DateTime<FixedOffset>>,
    /// Products updated before this date.
    pub updated_before: Option<DateTime<FixedOffset>>,
    /// Page size.
    pub limit: Option<u32>,
    /// First record.
    pub offset: Option<u32>,
    /// Only these seller SKUs.
    pub sku_seller_list: Vec<String>,
}

impl GetProductsParameters {
    /// Create empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search text.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Status filter.
    pub fn filter(mut self, filter: ProductFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Only products created after the date.
    pub fn created_after(mut self, date: DateTime<FixedOffset>) -> Self {
        self.created_after = Some(date);
        self
    }

    /// Only products created before the date.
    pub fn created_before(mut self, date: DateTime<FixedOffset>) -> Self {
        self.created_before = Some(date);
        self
    }

    /// Only products updated after the date.
    pub fn updated_after(mut self, date: DateTime<FixedOffset>) -> Self {
        self.updated_after = Some(date);
        self
    }

    /// Only products updated before the date.
    pub fn updated_before(mut self, date: DateTime<FixedOffset>) -> Self {
        self.updated_before = Some(date);
        self
    }

    /// Page size and first record.
    pub fn page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    /// Only these seller SKUs.
    pub fn skus<I, S>(mut self, skus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sku_seller_list = skus.into_iter().map(Into::into).collect();
        self
    }

    /// Write the filters into a parameter set.
    pub fn apply(&self, parameters: &mut ParameterSet) {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            parameters.insert("Search", search);
        }
        if let Some(filter) = self.filter {
            parameters.insert("Filter", filter.as_str());
        }
        insert_date(parameters, "CreatedAfter", &self.created_after);
        insert_date(parameters, "CreatedBefore", &self.created_before);
        insert_date(parameters, "UpdatedAfter", &self.updated_after);
        insert_date(parameters, "UpdatedBefore", &self.updated_before);
        insert_page(parameters, self.limit, self.offset);
        if !self.sku_seller_list.is_empty() {
            parameters.insert("SkuSellerList", json_list(&self.sku_seller_list));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterValue;

    fn date(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_orders_defaults() {
        let mut params = ParameterSet::new();
        GetOrdersParameters::new().apply(&mut params);

        assert_eq!(params.to_query_string(), "Limit=1000&Offset=0");
    }

    #[test]
    fn test_format_date_keeps_offset() {
        assert_eq!(
            format_date(&date("2024-02-01T00:00:00-03:00")),
            "2024-02-01T00:00:00-03:00"
        );
    }

    #[test]
    fn test_orders_filters() {
        let mut params = ParameterSet::new();
        GetOrdersParameters::new()
            .created_after(date("2024-01-15T10:30:00+00:00"))
            .updated_before(date("2024-02-01T00:00:00-03:00"))
            .status(OrderStatus::ReadyToShip)
            .page(0, 20)
            .sort(SortBy::UpdatedAt, SortDirection::Asc)
            .apply(&mut params);

        assert_eq!(
            params.get("CreatedAfter").map(ToString::to_string).as_deref(),
            Some("2024-01-15T10:30:00+00:00")
        );
        assert_eq!(
            params.get("UpdatedBefore").map(ToString::to_string).as_deref(),
            Some("2024-02-01T00:00:00-03:00")
        );
        assert_eq!(params.get("Status"), Some(&ParameterValue::from("ready_to_ship")));
        assert_eq!(params.get("Limit"), Some(&ParameterValue::from(1000u32)));
        assert_eq!(params.get("Offset"), Some(&ParameterValue::from(20u32)));
        assert_eq!(params.get("SortBy"), Some(&ParameterValue::from("updated_at")));
        assert_eq!(params.get("SortDirection"), Some(&ParameterValue::from("ASC")));
    }

    #[test]
    fn test_products_filters() {
        let mut params = ParameterSet::new();
        GetProductsParameters::new()
            .search("")
            .filter(ProductFilter::Live)
            .skus(vec!["SKU-1", "SKU-2"])
            .page(50, 100)
            .apply(&mut params);

        assert!(!params.contains("Search"));
        assert_eq!(params.get("Filter"), Some(&ParameterValue::from("live")));
        assert_eq!(
            params.get("SkuSellerList"),
            Some(&ParameterValue::from("[\"SKU-1\",\"SKU-2\"]"))
        );
        assert_eq!(params.get("Limit"), Some(&ParameterValue::from(50u32)));
    }
}
