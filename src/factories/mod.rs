//! Building typed entities from response XML.
//!
//! Every entity declares the child elements it requires, in order. The first
//! one that does not exist raises a [`StructuralError`]; an element that exists
//! but is blank is accepted and yields `None` for optional values or the type
//! default for required ones.

mod catalog;
mod feed;
mod order;
mod product;
mod webhook;

pub use feed::feed_response;
pub use order::{
    order_items_from_status, order_items_with_imei, order_with_items, orders_with_items,
};

use crate::error::{ResponseError, SellerCenterError, StructuralError};
use crate::xml::Node;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

/// Result type of the factories.
pub type Result<T> = std::result::Result<T, SellerCenterError>;

/// Build a value from an XML element.
pub trait FromXml: Sized {
    /// Build the value, validating the element structure.
    fn from_xml(node: &Node) -> Result<Self>;
}

/// An entity that also comes as a list inside a wrapper element.
pub trait CollectionItem: FromXml {
    /// Name of the wrapper element.
    const PLURAL: &'static str;
    /// Name of each item element.
    const SINGULAR: &'static str;
}

impl<T: CollectionItem> FromXml for Vec<T> {
    fn from_xml(node: &Node) -> Result<Self> {
        collect(node, T::PLURAL, T::SINGULAR, T::from_xml)
    }
}

/// Build every `singular` child of `node`, requiring at least one.
pub fn collect<T, F>(node: &Node, plural: &str, singular: &str, build: F) -> Result<Vec<T>>
where
    F: Fn(&Node) -> Result<T>,
{
    if !node.has_child(singular) {
        return Err(StructuralError::missing(plural, singular).into());
    }
    collect_nested(node, singular, build)
}

/// Build every `singular` child of `node`; an empty list is fine.
pub fn collect_nested<T, F>(node: &Node, singular: &str, build: F) -> Result<Vec<T>>
where
    F: Fn(&Node) -> Result<T>,
{
    node.children_named(singular).map(build).collect()
}

/// Parse a date from `YYYY-MM-DD HH:MM:SS`, RFC 3339 or a bare date.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Typed access to the children of an entity element.
pub(crate) struct Fields<'a> {
    entity: &'static str,
    node: &'a Node,
}

impl<'a> Fields<'a> {
    /// Check the required children in order and wrap the element.
    pub fn require(entity: &'static str, node: &'a Node, required: &[&str]) -> Result<Self> {
        if let Some(missing) = required.iter().find(|field| !node.has_child(field)) {
            return Err(StructuralError::missing(entity, *missing).into());
        }
        Ok(Self { entity, node })
    }

    /// A child element.
    pub fn child(&self, name: &str) -> Option<&'a Node> {
        self.node.child(name)
    }

    /// Trimmed text, for coercion and blank checks.
    fn raw(&self, name: &str) -> &'a str {
        self.verbatim(name).trim()
    }

    fn verbatim(&self, name: &str) -> &'a str {
        self.node.child_text(name).unwrap_or_default()
    }

    fn invalid(&self, name: &str, value: &str) -> SellerCenterError {
        SellerCenterError::Response(ResponseError::InvalidValue {
            entity: self.entity.to_string(),
            field: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Text of a required child as sent, empty when blank.
    pub fn string(&self, name: &str) -> String {
        self.opt_string(name).unwrap_or_default()
    }

    /// Text of an optional child as sent.
    pub fn opt_string(&self, name: &str) -> Option<String> {
        if self.raw(name).is_empty() {
            return None;
        }
        Some(self.verbatim(name).to_string())
    }

    /// Number in a required child, the type default when blank.
    pub fn number<T: FromStr + Default>(&self, name: &str) -> Result<T> {
        Ok(self.opt_number(name)?.unwrap_or_default())
    }

    /// Number in an optional child.
    pub fn opt_number<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        let raw = self.raw(name);
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(|_| self.invalid(name, raw))
    }

    /// Flag in a required child, `false` when blank.
    pub fn flag(&self, name: &str) -> Result<bool> {
        Ok(self.opt_flag(name)?.unwrap_or(false))
    }

    /// Flag in an optional child.
    pub fn opt_flag(&self, name: &str) -> Result<Option<bool>> {
        let raw = self.raw(name);
        match raw.to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            _ => Err(self.invalid(name, raw)),
        }
    }

    /// Date in a child, `None` when blank.
    pub fn datetime(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        let raw = self.raw(name);
        if raw.is_empty() {
            return Ok(None);
        }
        parse_datetime(raw)
            .map(Some)
            .ok_or_else(|| self.invalid(name, raw))
    }

    /// Value of a child parsed with `FromStr`, `None` when blank.
    pub fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.opt_number(name)
    }

    /// Texts of the `singular` children of a child, skipping blank ones.
    pub fn texts(&self, name: &str, singular: &str) -> Vec<String> {
        self.child(name)
            .map(|list| {
                list.children_named(singular)
                    .map(|n| n.text().trim())
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_required_fields_in_order() {
        let node = xml::parse("<Thing><B>1</B></Thing>").unwrap();
        let err = Fields::require("Thing", &node, &["A", "B", "C"])
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "The xml structure is not valid for a Thing. The property A should exist."
        );

        let err = Fields::require("Thing", &node, &["B", "C", "A"])
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "The xml structure is not valid for a Thing. The property C should exist."
        );
    }

    #[test]
    fn test_blank_values() {
        let node = xml::parse("<Thing><A/><B> </B><C>x</C></Thing>").unwrap();
        let fields = Fields::require("Thing", &node, &["A", "B", "C"]).unwrap();

        assert_eq!(fields.string("A"), "");
        assert_eq!(fields.opt_string("B"), None);
        assert_eq!(fields.opt_string("C").as_deref(), Some("x"));

        let node = xml::parse("<Thing><S> x\n</S><N> 7 </N></Thing>").unwrap();
        let fields = Fields::require("Thing", &node, &["S", "N"]).unwrap();
        assert_eq!(fields.string("S"), " x\n");
        assert_eq!(fields.number::<u32>("N").unwrap(), 7);
        assert_eq!(fields.number::<u64>("A").unwrap(), 0);
        assert_eq!(fields.opt_number::<f64>("B").unwrap(), None);
        assert!(!fields.flag("A").unwrap());
        assert_eq!(fields.datetime("A").unwrap(), None);
    }

    #[test]
    fn test_scalar_coercion() {
        let node = xml::parse(
            "<Thing><N>42</N><F>12.50</F><Y>1</Y><T>true</T><Z>0</Z><D>2024-01-15 10:30:00</D><R>2024-01-15T10:30:00-03:00</R><Bad>abc</Bad></Thing>",
        )
        .unwrap();
        let fields = Fields::require("Thing", &node, &[]).unwrap();

        assert_eq!(fields.number::<u32>("N").unwrap(), 42);
        assert_eq!(fields.number::<f64>("F").unwrap(), 12.5);
        assert!(fields.flag("Y").unwrap());
        assert!(fields.flag("T").unwrap());
        assert_eq!(fields.opt_flag("Z").unwrap(), Some(false));

        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(fields.datetime("D").unwrap(), Some(expected));
        assert_eq!(fields.datetime("R").unwrap(), Some(expected));

        assert!(matches!(
            fields.number::<u32>("Bad"),
            Err(SellerCenterError::Response(ResponseError::InvalidValue { .. }))
        ));
        assert!(fields.flag("Bad").is_err());
        assert!(fields.datetime("Bad").is_err());
    }

    #[test]
    fn test_collect_requires_one_item() {
        let empty = xml::parse("<Brands/>").unwrap();
        let err = collect(&empty, "Brands", "Brand", |n| Ok(n.text().to_string()))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "The xml structure is not valid for a Brands. The property Brand should exist."
        );

        let nested = collect_nested(&empty, "Brand", |n| Ok(n.text().to_string())).unwrap();
        assert!(nested.is_empty());
    }
}
