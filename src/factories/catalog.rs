//! Catalog factories.

use super::{collect_nested, CollectionItem, Fields, FromXml, Result};
use crate::types::{Attribute, AttributeOption, AttributeSet, Brand, Category};
use crate::xml::Node;

const CATEGORY_FIELDS: &[&str] = &["Name", "CategoryId", "GlobalIdentifier", "AttributeSetId"];

const ATTRIBUTE_FIELDS: &[&str] = &[
    "Label",
    "Name",
    "GroupName",
    "IsMandatory",
    "IsGlobalAttribute",
    "Description",
    "ProductType",
    "InputType",
    "AttributeType",
    "ExampleValue",
    "MaxLength",
    "Options",
];

impl FromXml for Category {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Category", node, CATEGORY_FIELDS)?;
        let children = match f.child("Children") {
            Some(children) => collect_nested(children, "Category", Category::from_xml)?,
            None => Vec::new(),
        };

        Ok(Category {
            category_id: f.number("CategoryId")?,
            name: f.string("Name"),
            global_identifier: f.string("GlobalIdentifier"),
            attribute_set_id: f.number("AttributeSetId")?,
            children,
        })
    }
}

impl CollectionItem for Category {
    const PLURAL: &'static str = "Categories";
    const SINGULAR: &'static str = "Category";
}

impl FromXml for AttributeSet {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require(
            "AttributeSet",
            node,
            &["AttributeSetId", "Name", "GlobalIdentifier", "Categories"],
        )?;
        let categories = match f.child("Categories") {
            Some(list) => collect_nested(list, "Category", Category::from_xml)?,
            None => Vec::new(),
        };

        Ok(AttributeSet {
            attribute_set_id: f.number("AttributeSetId")?,
            name: f.string("Name"),
            global_identifier: f.string("GlobalIdentifier"),
            categories,
        })
    }
}

impl CollectionItem for AttributeSet {
    const PLURAL: &'static str = "AttributeSets";
    const SINGULAR: &'static str = "AttributeSet";
}

impl FromXml for AttributeOption {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Option", node, &["GlobalIdentifier", "Name", "isDefault"])?;
        Ok(AttributeOption {
            global_identifier: f.opt_string("GlobalIdentifier"),
            name: f.string("Name"),
            is_default: f.flag("isDefault")?,
        })
    }
}

impl FromXml for Attribute {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Attribute", node, ATTRIBUTE_FIELDS)?;
        let options = match f.child("Options") {
            Some(list) => collect_nested(list, "Option", AttributeOption::from_xml)?,
            None => Vec::new(),
        };

        Ok(Attribute {
            label: f.string("Label"),
            name: f.string("Name"),
            group_name: f.opt_string("GroupName"),
            is_mandatory: f.flag("IsMandatory")?,
            is_global_attribute: f.flag("IsGlobalAttribute")?,
            description: f.opt_string("Description"),
            product_type: f.opt_string("ProductType"),
            input_type: f.string("InputType"),
            attribute_type: f.string("AttributeType"),
            example_value: f.opt_string("ExampleValue"),
            max_length: f.opt_number("MaxLength")?,
            options,
        })
    }
}

impl CollectionItem for Attribute {
    const PLURAL: &'static str = "Attributes";
    const SINGULAR: &'static str = "Attribute";
}

impl FromXml for Brand {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Brand", node, &["BrandId", "Name", "GlobalIdentifier"])?;
        Ok(Brand {
            brand_id: f.number("BrandId")?,
            name: f.string("Name"),
            global_identifier: f.opt_string("GlobalIdentifier"),
        })
    }
}

impl CollectionItem for Brand {
    const PLURAL: &'static str = "Brands";
    const SINGULAR: &'static str = "Brand";
}
