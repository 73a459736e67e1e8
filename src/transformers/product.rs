//! Product request documents.

use super::{DATETIME_FORMAT, REQUEST_ROOT};
use crate::types::{Product, ProductImage, Products};
use crate::xml::XmlBuilder;

fn write_product(xml: &mut XmlBuilder, product: &Product) {
    xml.open("Product")
        .element("SellerSku", &product.seller_sku)
        .optional_element("ParentSku", product.parent_sku.as_ref())
        .optional_element("Status", product.status.map(|s| s.as_str()))
        .element("Name", &product.name)
        .optional_element("Variation", product.variation.as_ref())
        .element("PrimaryCategory", &product.primary_category);

    if !product.categories.is_empty() {
        xml.element("Categories", product.categories.join(","));
    }

    xml.cdata_element("Description", &product.description)
        .element("Brand", &product.brand)
        .element("Price", product.price)
        .optional_element("SalePrice", product.sale_price)
        .optional_element(
            "SaleStartDate",
            product
                .sale_start_date
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
        )
        .optional_element(
            "SaleEndDate",
            product
                .sale_end_date
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
        )
        .optional_element("TaxClass", product.tax_class.as_ref())
        .optional_element("ShipmentType", product.shipment_type.as_ref())
        .optional_element("ProductId", product.product_id.as_ref())
        .optional_element("Condition", product.condition.as_ref());

    if product.product_data.is_empty() {
        xml.empty("ProductData");
    } else {
        xml.open("ProductData");
        for (name, value) in product.product_data.iter() {
            xml.element(name, value);
        }
        xml.close("ProductData");
    }

    xml.optional_element("Quantity", product.quantity)
        .close("Product");
}

/// Document for `ProductCreate` and `ProductUpdate`.
pub fn products(products: &Products) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT);
    for product in products {
        write_product(&mut xml, product);
    }
    xml.close(REQUEST_ROOT);
    xml.finish()
}

/// Document for `ProductRemove`.
pub fn products_remove(products: &Products) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT);
    for product in products {
        xml.open("Product")
            .element("SellerSku", &product.seller_sku)
            .close("Product");
    }
    xml.close(REQUEST_ROOT);
    xml.finish()
}

/// Document for `Image`.
pub fn product_images(images: &[ProductImage]) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT);
    for image in images {
        xml.open("ProductImage")
            .element("SellerSku", &image.seller_sku)
            .open("Images");
        for url in &image.images {
            xml.element("Image", url);
        }
        xml.close("Images").close("ProductImage");
    }
    xml.close(REQUEST_ROOT);
    xml.finish()
}
