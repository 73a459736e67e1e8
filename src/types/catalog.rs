//! Catalog types: categories, attribute sets, attributes and brands.

use serde::{Deserialize, Serialize};

/// A node of the category tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub category_id: u64,
    /// Category name.
    pub name: String,
    /// Global identifier.
    pub global_identifier: String,
    /// Attribute set of the category.
    pub attribute_set_id: u64,
    /// Sub-categories.
    pub children: Vec<Category>,
}

impl Category {
    /// Depth-first search for a category id.
    pub fn find(&self, category_id: u64) -> Option<&Category> {
        if self.category_id == category_id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(category_id))
    }

    /// Whether the category has no sub-categories.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A set of attributes shared by several categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Attribute set id.
    pub attribute_set_id: u64,
    /// Name.
    pub name: String,
    /// Global identifier.
    pub global_identifier: String,
    /// Categories using the set.
    pub categories: Vec<Category>,
}

/// A product attribute of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Display label.
    pub label: String,
    /// Field name used in product data.
    pub name: String,
    /// Attribute group.
    pub group_name: Option<String>,
    /// Whether the attribute is required.
    pub is_mandatory: bool,
    /// Whether the attribute is shared by all categories.
    pub is_global_attribute: bool,
    /// Description.
    pub description: Option<String>,
    /// Product type.
    pub product_type: Option<String>,
    /// Input type, e.g. `textfield` or `dropdown`.
    pub input_type: String,
    /// Attribute type, e.g. `value` or `option`.
    pub attribute_type: String,
    /// Example value.
    pub example_value: Option<String>,
    /// Maximum value length.
    pub max_length: Option<u32>,
    /// Allowed values.
    pub options: Vec<AttributeOption>,
}

/// An allowed value of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOption {
    /// Global identifier.
    pub global_identifier: Option<String>,
    /// Option name.
    pub name: String,
    /// Whether it is the default value.
    pub is_default: bool,
}

/// A product brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand id.
    pub brand_id: u64,
    /// Brand name.
    pub name: String,
    /// Global identifier.
    pub global_identifier: Option<String>,
}
