//! Required element checks for every entity built from XML.

use seller_center::factories::FromXml;
use seller_center::types::*;
use seller_center::xml::{self, Node};
use test_case::test_case;

const ADDRESS: &[&str] = &[
    "FirstName", "LastName", "Phone", "Phone2", "Address1", "Address2", "Address3", "Address4",
    "Address5", "CustomerEmail", "City", "Ward", "Region", "PostCode", "Country",
];

const ORDER: &[&str] = &[
    "OrderId", "CustomerFirstName", "CustomerLastName", "OrderNumber", "PaymentMethod", "Remarks",
    "DeliveryInfo", "Price", "GiftOption", "GiftMessage", "VoucherCode", "CreatedAt", "UpdatedAt",
    "AddressUpdatedAt", "AddressBilling", "AddressShipping", "NationalRegistrationNumber",
    "ItemsCount", "PromisedShippingTime", "ExtraAttributes", "Statuses",
];

const ORDER_ITEM: &[&str] = &[
    "OrderItemId", "ShopId", "OrderId", "Name", "Sku", "Variation", "ShopSku", "ShippingType",
    "ItemPrice", "PaidPrice", "Currency", "WalletCredits", "TaxAmount", "CodCollectableAmount",
    "ShippingAmount", "ShippingServiceCost", "VoucherAmount", "VoucherCode", "Status",
    "IsProcessable", "ShipmentProvider", "IsDigital", "DigitalDeliveryInfo", "TrackingCode",
    "TrackingCodePre", "Reason", "ReasonDetail", "PurchaseOrderId", "PurchaseOrderNumber",
    "PackageId", "PromisedShippingTime", "ExtraAttributes", "ShippingProviderType", "CreatedAt",
    "UpdatedAt", "ReturnStatus",
];

const SHIPMENT_PROVIDER: &[&str] = &[
    "Name", "Default", "ApiIntegration", "Cod", "TrackingCodeValidationRegex",
    "TrackingCodeExample", "TrackingUrl", "EnabledDeliveryOptions",
];

const FAILURE_REASON: &[&str] = &["Type", "Name"];
const DOCUMENT: &[&str] = &["DocumentType", "MimeType", "File"];
const PRODUCT: &[&str] = &["SellerSku", "Name", "Brand", "Description", "Price", "PrimaryCategory"];
const PRODUCT_IMAGE: &[&str] = &["SellerSku", "Images"];
const QC_STATUS: &[&str] = &["SellerSKU", "Status"];

const FEED: &[&str] = &[
    "Feed", "Status", "Action", "CreationDate", "UpdatedDate", "Source", "TotalRecords",
    "ProcessedRecords", "FailedRecords", "FailureReports",
];

const FEED_ERROR: &[&str] = &["Code", "Message", "SellerSku"];
const FEED_WARNING: &[&str] = &["Message", "SellerSku"];
const CATEGORY: &[&str] = &["Name", "CategoryId", "GlobalIdentifier", "AttributeSetId"];
const ATTRIBUTE_SET: &[&str] = &["AttributeSetId", "Name", "GlobalIdentifier", "Categories"];

const ATTRIBUTE: &[&str] = &[
    "Label", "Name", "GroupName", "IsMandatory", "IsGlobalAttribute", "Description",
    "ProductType", "InputType", "AttributeType", "ExampleValue", "MaxLength", "Options",
];

const ATTRIBUTE_OPTION: &[&str] = &["GlobalIdentifier", "Name", "isDefault"];
const BRAND: &[&str] = &["BrandId", "Name", "GlobalIdentifier"];
const WEBHOOK: &[&str] = &["WebhookId", "CallbackUrl", "WebhookSource", "Events"];
const WEBHOOK_ENTITY: &[&str] = &["Name", "Events"];
const WEBHOOK_EVENT: &[&str] = &["Name", "Alias"];

fn build_error<T: FromXml>(node: &Node) -> Option<String> {
    T::from_xml(node).err().map(|e| e.to_string())
}

/// An element with every field present but blank, except `missing`.
fn element(name: &str, fields: &[&str], missing: Option<&str>) -> Node {
    let children: String = fields
        .iter()
        .filter(|field| Some(**field) != missing)
        .map(|field| format!("<{}/>", field))
        .collect();
    xml::parse(&format!("<{name}>{children}</{name}>", name = name, children = children)).unwrap()
}

#[test_case("Address", ADDRESS, build_error::<Address>; "address")]
#[test_case("Order", ORDER, build_error::<Order>; "order")]
#[test_case("OrderItem", ORDER_ITEM, build_error::<OrderItem>; "order item")]
#[test_case("ShipmentProvider", SHIPMENT_PROVIDER, build_error::<ShipmentProvider>; "shipment provider")]
#[test_case("Reason", FAILURE_REASON, build_error::<FailureReason>; "failure reason")]
#[test_case("Document", DOCUMENT, build_error::<Document>; "document")]
#[test_case("Product", PRODUCT, build_error::<Product>; "product")]
#[test_case("ProductImage", PRODUCT_IMAGE, build_error::<ProductImage>; "product image")]
#[test_case("QcStatus", QC_STATUS, build_error::<QcStatus>; "qc status")]
#[test_case("Feed", FEED, build_error::<Feed>; "feed")]
#[test_case("Error", FEED_ERROR, build_error::<FeedError>; "feed error")]
#[test_case("Warning", FEED_WARNING, build_error::<FeedWarning>; "feed warning")]
#[test_case("Category", CATEGORY, build_error::<Category>; "category")]
#[test_case("AttributeSet", ATTRIBUTE_SET, build_error::<AttributeSet>; "attribute set")]
#[test_case("Attribute", ATTRIBUTE, build_error::<Attribute>; "attribute")]
#[test_case("Option", ATTRIBUTE_OPTION, build_error::<AttributeOption>; "attribute option")]
#[test_case("Brand", BRAND, build_error::<Brand>; "brand")]
#[test_case("Webhook", WEBHOOK, build_error::<Webhook>; "webhook")]
#[test_case("Entity", WEBHOOK_ENTITY, build_error::<WebhookEntity>; "webhook entity")]
#[test_case("Event", WEBHOOK_EVENT, build_error::<WebhookEvent>; "webhook event")]
fn test_each_required_field(entity: &str, fields: &[&str], build: fn(&Node) -> Option<String>) {
    for field in fields {
        let node = element(entity, fields, Some(*field));
        assert_eq!(
            build(&node),
            Some(format!(
                "The xml structure is not valid for a {}. The property {} should exist.",
                entity, field
            )),
            "removing {} from {}",
            field,
            entity
        );
    }
}

#[test_case("Order", ORDER, &["Price", "OrderId"], "OrderId"; "order reports first declared")]
#[test_case("OrderItem", ORDER_ITEM, &["ReturnStatus", "Sku", "Name"], "Name"; "order item reports first declared")]
#[test_case("Feed", FEED, &["FailureReports", "Status"], "Status"; "feed reports first declared")]
fn test_first_missing_field_wins(entity: &str, fields: &[&str], removed: &[&str], expected: &str) {
    let remaining: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|f| !removed.contains(f))
        .collect();
    let node = element(entity, &remaining, None);

    let message = match entity {
        "Order" => build_error::<Order>(&node),
        "OrderItem" => build_error::<OrderItem>(&node),
        _ => build_error::<Feed>(&node),
    };
    assert_eq!(
        message,
        Some(format!(
            "The xml structure is not valid for a {}. The property {} should exist.",
            entity, expected
        ))
    );
}

#[test_case("<Orders/>", "Orders", "Order"; "orders")]
#[test_case("<OrderItems/>", "OrderItems", "OrderItem"; "order items")]
#[test_case("<Products/>", "Products", "Product"; "products")]
#[test_case("<Brands/>", "Brands", "Brand"; "brands")]
#[test_case("<Categories/>", "Categories", "Category"; "categories")]
#[test_case("<Feeds/>", "Feeds", "Feed"; "feeds")]
#[test_case("<Webhooks/>", "Webhooks", "Webhook"; "webhooks")]
fn test_empty_collections_are_structural_errors(raw: &str, plural: &str, singular: &str) {
    let node = xml::parse(raw).unwrap();
    let message = match plural {
        "Orders" => build_error::<Orders>(&node),
        "OrderItems" => build_error::<OrderItems>(&node),
        "Products" => build_error::<Products>(&node),
        "Brands" => build_error::<Vec<Brand>>(&node),
        "Categories" => build_error::<Vec<Category>>(&node),
        "Feeds" => build_error::<Vec<Feed>>(&node),
        _ => build_error::<Vec<Webhook>>(&node),
    };
    assert_eq!(
        message,
        Some(format!(
            "The xml structure is not valid for a {}. The property {} should exist.",
            plural, singular
        ))
    );
}

#[test]
fn test_blank_required_fields_are_accepted() {
    let node = element("Brand", BRAND, None);
    let brand = Brand::from_xml(&node).unwrap();
    assert_eq!(brand.brand_id, 0);
    assert_eq!(brand.name, "");
    assert_eq!(brand.global_identifier, None);

    let node = element("Event", WEBHOOK_EVENT, None);
    assert!(WebhookEvent::from_xml(&node).is_ok());
}

/// An element with every listed field blank; nested addresses get blank fields too.
fn blank<T: FromXml>(name: &str, required: &[&str], optional: &[&str]) -> T {
    let children: String = required
        .iter()
        .chain(optional)
        .map(|field| match *field {
            "AddressBilling" | "AddressShipping" => {
                let address: String = ADDRESS.iter().map(|f| format!("<{}/>", f)).collect();
                format!("<{field}>{address}</{field}>", field = field, address = address)
            }
            _ => format!("<{}/>", field),
        })
        .collect();
    let node = xml::parse(&format!("<{name}>{children}</{name}>", name = name, children = children))
        .unwrap();
    T::from_xml(&node).unwrap()
}

fn order_options() -> Vec<(&'static str, bool)> {
    let order: Order = blank("Order", ORDER, &[]);
    vec![
        ("Remarks", order.remarks.is_none()),
        ("DeliveryInfo", order.delivery_info.is_none()),
        ("GiftMessage", order.gift_message.is_none()),
        ("VoucherCode", order.voucher_code.is_none()),
        ("CreatedAt", order.created_at.is_none()),
        ("UpdatedAt", order.updated_at.is_none()),
        ("AddressUpdatedAt", order.address_updated_at.is_none()),
        ("NationalRegistrationNumber", order.national_registration_number.is_none()),
        ("PromisedShippingTime", order.promised_shipping_time.is_none()),
        ("ExtraAttributes", order.extra_attributes.is_none()),
    ]
}

fn order_item_options() -> Vec<(&'static str, bool)> {
    let item: OrderItem = blank("OrderItem", ORDER_ITEM, &["Imei"]);
    vec![
        ("Variation", item.variation.is_none()),
        ("VoucherCode", item.voucher_code.is_none()),
        ("ShipmentProvider", item.shipment_provider.is_none()),
        ("DigitalDeliveryInfo", item.digital_delivery_info.is_none()),
        ("TrackingCode", item.tracking_code.is_none()),
        ("TrackingCodePre", item.tracking_code_pre.is_none()),
        ("Reason", item.reason.is_none()),
        ("ReasonDetail", item.reason_detail.is_none()),
        ("PromisedShippingTime", item.promised_shipping_time.is_none()),
        ("ExtraAttributes", item.extra_attributes.is_none()),
        ("ShippingProviderType", item.shipping_provider_type.is_none()),
        ("CreatedAt", item.created_at.is_none()),
        ("UpdatedAt", item.updated_at.is_none()),
        ("ReturnStatus", item.return_status.is_none()),
        ("Imei", item.imei.is_none()),
    ]
}

fn shipment_provider_options() -> Vec<(&'static str, bool)> {
    let provider: ShipmentProvider = blank("ShipmentProvider", SHIPMENT_PROVIDER, &[]);
    vec![
        ("TrackingCodeValidationRegex", provider.tracking_code_validation_regex.is_none()),
        ("TrackingCodeExample", provider.tracking_code_example.is_none()),
        ("TrackingUrl", provider.tracking_url.is_none()),
    ]
}

fn product_options() -> Vec<(&'static str, bool)> {
    let product: Product = blank(
        "Product",
        PRODUCT,
        &[
            "ParentSku", "Status", "Variation", "SalePrice", "SaleStartDate", "SaleEndDate",
            "TaxClass", "ShipmentType", "ProductId", "Condition", "Quantity",
        ],
    );
    vec![
        ("ParentSku", product.parent_sku.is_none()),
        ("Status", product.status.is_none()),
        ("Variation", product.variation.is_none()),
        ("SalePrice", product.sale_price.is_none()),
        ("SaleStartDate", product.sale_start_date.is_none()),
        ("SaleEndDate", product.sale_end_date.is_none()),
        ("TaxClass", product.tax_class.is_none()),
        ("ShipmentType", product.shipment_type.is_none()),
        ("ProductId", product.product_id.is_none()),
        ("Condition", product.condition.is_none()),
        ("Quantity", product.quantity.is_none()),
    ]
}

fn qc_status_options() -> Vec<(&'static str, bool)> {
    let status: QcStatus = blank("QcStatus", QC_STATUS, &["Reason"]);
    vec![("Reason", status.reason.is_none())]
}

fn feed_options() -> Vec<(&'static str, bool)> {
    let feed: Feed = blank("Feed", FEED, &[]);
    vec![
        ("CreationDate", feed.creation_date.is_none()),
        ("UpdatedDate", feed.updated_date.is_none()),
        ("FailureReports", feed.failure_reports.is_none()),
    ]
}

fn attribute_options() -> Vec<(&'static str, bool)> {
    let attribute: Attribute = blank("Attribute", ATTRIBUTE, &[]);
    vec![
        ("GroupName", attribute.group_name.is_none()),
        ("Description", attribute.description.is_none()),
        ("ProductType", attribute.product_type.is_none()),
        ("ExampleValue", attribute.example_value.is_none()),
        ("MaxLength", attribute.max_length.is_none()),
    ]
}

fn attribute_option_options() -> Vec<(&'static str, bool)> {
    let option: AttributeOption = blank("Option", ATTRIBUTE_OPTION, &[]);
    vec![("GlobalIdentifier", option.global_identifier.is_none())]
}

fn brand_options() -> Vec<(&'static str, bool)> {
    let brand: Brand = blank("Brand", BRAND, &[]);
    vec![("GlobalIdentifier", brand.global_identifier.is_none())]
}

#[test_case(order_options; "order")]
#[test_case(order_item_options; "order item")]
#[test_case(shipment_provider_options; "shipment provider")]
#[test_case(product_options; "product")]
#[test_case(qc_status_options; "qc status")]
#[test_case(feed_options; "feed")]
#[test_case(attribute_options; "attribute")]
#[test_case(attribute_option_options; "attribute option")]
#[test_case(brand_options; "brand")]
fn test_blank_optionals_are_none(options: fn() -> Vec<(&'static str, bool)>) {
    for (field, is_none) in options() {
        assert!(is_none, "blank {} should be None", field);
    }
}
