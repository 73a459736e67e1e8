//! Product factories.

use super::{collect_nested, CollectionItem, Fields, FromXml, Result};
use crate::types::{Product, ProductData, ProductImage, Products, QcStatus};
use crate::xml::Node;

const PRODUCT_FIELDS: &[&str] = &[
    "SellerSku",
    "Name",
    "Brand",
    "Description",
    "Price",
    "PrimaryCategory",
];

fn image_urls(node: &Node) -> Result<Vec<String>> {
    Ok(collect_nested(node, "Image", |image| Ok(image.text().trim().to_string()))?
        .into_iter()
        .filter(|url| !url.is_empty())
        .collect())
}

fn product_data(node: &Node) -> ProductData {
    let mut data = ProductData::new();
    for entry in node.children() {
        let value = if entry.is_blank() { "" } else { entry.text() };
        data.add(entry.name(), value);
    }
    data
}

impl FromXml for Product {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Product", node, PRODUCT_FIELDS)?;

        let images = match f.child("Images") {
            Some(images) if !images.is_empty() => image_urls(images)?,
            _ => Vec::new(),
        };

        let categories = f
            .opt_string("Categories")
            .map(|c| {
                c.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Product {
            seller_sku: f.string("SellerSku"),
            parent_sku: f.opt_string("ParentSku"),
            status: f.parsed("Status")?,
            name: f.string("Name"),
            variation: f.opt_string("Variation"),
            primary_category: f.string("PrimaryCategory"),
            categories,
            description: f.string("Description"),
            brand: f.string("Brand"),
            price: f.number("Price")?,
            sale_price: f.opt_number("SalePrice")?,
            sale_start_date: f.datetime("SaleStartDate")?,
            sale_end_date: f.datetime("SaleEndDate")?,
            tax_class: f.opt_string("TaxClass"),
            shipment_type: f.opt_string("ShipmentType"),
            product_id: f.opt_string("ProductId"),
            condition: f.opt_string("Condition"),
            product_data: f.child("ProductData").map(product_data).unwrap_or_default(),
            quantity: f.opt_number("Quantity")?,
            images,
        })
    }
}

impl CollectionItem for Product {
    const PLURAL: &'static str = "Products";
    const SINGULAR: &'static str = "Product";
}

impl FromXml for Products {
    fn from_xml(node: &Node) -> Result<Self> {
        Ok(Vec::<Product>::from_xml(node)?.into_iter().collect())
    }
}

impl FromXml for ProductImage {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("ProductImage", node, &["SellerSku", "Images"])?;
        Ok(ProductImage {
            seller_sku: f.string("SellerSku"),
            images: f.child("Images").map(image_urls).transpose()?.unwrap_or_default(),
        })
    }
}

impl FromXml for QcStatus {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("QcStatus", node, &["SellerSKU", "Status"])?;
        Ok(QcStatus {
            seller_sku: f.string("SellerSKU"),
            status: f.string("Status"),
            reason: f.opt_string("Reason"),
        })
    }
}

impl CollectionItem for QcStatus {
    const PLURAL: &'static str = "Status";
    const SINGULAR: &'static str = "State";
}
