//! Integration tests for OrdersService.

use chrono::{DateTime, NaiveDate};
use seller_center::client::RequestExecutor;
use seller_center::config::SellerCenterConfig;
use seller_center::error::{DomainError, SellerCenterError};
use seller_center::mocks::{MockResponse, MockTransport, TestFixtures};
use seller_center::services::OrdersService;
use seller_center::transport::{HttpMethod, HttpRequest};
use seller_center::types::*;
use std::collections::HashMap;
use std::sync::Arc;

fn create_test_service_with_transport(transport: Arc<MockTransport>) -> OrdersService {
    let config = SellerCenterConfig::builder()
        .endpoint("https://sellercenter-api.example.com/")
        .unwrap()
        .user_id("seller@example.com")
        .api_key("secret-key")
        .build()
        .unwrap();
    OrdersService::new(Arc::new(RequestExecutor::new(Arc::new(config), transport)))
}

fn query(request: &HttpRequest) -> HashMap<String, String> {
    url::Url::parse(&request.url)
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

#[tokio::test]
async fn test_get_order() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success(
            "GetOrder",
            &format!("<Orders>{}</Orders>", TestFixtures::order_xml(4687503)),
        ),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let order = service.get_order(4687503).await.unwrap();
    assert_eq!(order.order_id, 4687503);
    assert_eq!(order.address_billing.city, "Santiago");

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, HttpMethod::Get);
    let params = query(&recorded);
    assert_eq!(params["Action"], "GetOrder");
    assert_eq!(params["OrderId"], "4687503");
    assert_eq!(params["Format"], "XML");
    assert_eq!(params["Version"], "1.0");
    assert_eq!(params["UserID"], "seller@example.com");
    assert!(params.contains_key("Timestamp"));
    assert_eq!(params["Signature"].len(), 64);
}

#[tokio::test]
async fn test_get_order_error_response() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::error("GetOrder", "Sender", 16, "E016: \"999\" Invalid Order ID"),
    )]));
    let service = create_test_service_with_transport(transport);

    let err = service.get_order(999).await.unwrap_err();
    assert_eq!(err.api_code(), Some(16));
    assert_eq!(err.to_string(), "E0016: E016: \"999\" Invalid Order ID");
}

#[tokio::test]
async fn test_get_orders_sends_filters() {
    let body = format!(
        "<Orders>{}{}</Orders>",
        TestFixtures::order_xml(1),
        TestFixtures::order_xml(2)
    );
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetOrders", &body),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let filters = GetOrdersParameters::new()
        .created_after(DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00").unwrap())
        .status(OrderStatus::Pending)
        .page(50, 100)
        .sort(SortBy::UpdatedAt, SortDirection::Asc);
    let orders = service.get_orders(filters).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert!(orders.contains("2"));

    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["Action"], "GetOrders");
    assert_eq!(params["CreatedAfter"], "2024-01-01T00:00:00+00:00");
    assert_eq!(params["Status"], "pending");
    assert_eq!(params["Limit"], "50");
    assert_eq!(params["Offset"], "100");
    assert_eq!(params["SortBy"], "updated_at");
    assert_eq!(params["SortDirection"], "ASC");
}

#[tokio::test]
async fn test_get_orders_empty_body() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok(TestFixtures::success("GetOrders", "<Orders/>")),
        MockResponse::ok(TestFixtures::success("GetOrders", "")),
    ]));
    let service = create_test_service_with_transport(transport);

    assert!(service.get_orders(GetOrdersParameters::new()).await.unwrap().is_empty());
    assert!(service.get_orders(GetOrdersParameters::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_order_items() {
    let body = format!(
        "<OrderItems>{}{}</OrderItems>",
        TestFixtures::order_item_xml(11, 1),
        TestFixtures::order_item_xml(12, 1)
    );
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetOrderItems", &body),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let items = service.get_order_items(1).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.get("12").unwrap().sku, "SKU-12");
    assert_eq!(query(&transport.last_request().unwrap())["OrderId"], "1");
}

#[tokio::test]
async fn test_get_multiple_order_items() {
    let body = format!(
        "<Orders><Order><OrderId>7</OrderId><OrderNumber>700</OrderNumber><OrderItems>{}</OrderItems></Order></Orders>",
        TestFixtures::order_item_xml(71, 7)
    );
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetMultipleOrderItems", &body),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let orders = service.get_multiple_order_items(&[7, 8]).await.unwrap();
    assert_eq!(orders.get("7").unwrap().order_items.len(), 1);
    assert_eq!(query(&transport.last_request().unwrap())["OrderIdList"], "[7,8]");
}

#[tokio::test]
async fn test_get_multiple_order_items_requires_ids() {
    let transport = Arc::new(MockTransport::new());
    let service = create_test_service_with_transport(transport.clone());

    let err = service.get_multiple_order_items(&[]).await.unwrap_err();
    assert!(matches!(
        err,
        SellerCenterError::Validation(DomainError::EmptyArgument { ref argument }) if argument == "OrderIdList"
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_set_status_to_ready_to_ship() {
    let body = format!(
        "<OrderItems>{}{}</OrderItems>",
        TestFixtures::order_item_status_xml(1, "PKG-1"),
        TestFixtures::order_item_status_xml(2, "PKG-1")
    );
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetStatusToReadyToShip", &body),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let items = service
        .set_status_to_ready_to_ship(&[1, 2], DeliveryType::Dropship, "Chilexpress", "123456789012", Some("PKG-1"))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    let first = items.get("1").unwrap();
    assert_eq!(first.purchase_order_number, "PO-1");
    assert_eq!(first.package_id, "PKG-1");

    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["Action"], "SetStatusToReadyToShip");
    assert_eq!(params["OrderItemIds"], "[1,2]");
    assert_eq!(params["DeliveryType"], DeliveryType::Dropship.as_str());
    assert_eq!(params["ShippingProvider"], "Chilexpress");
    assert_eq!(params["TrackingNumber"], "123456789012");
    assert_eq!(params["PackageId"], "PKG-1");
}

#[tokio::test]
async fn test_set_status_to_packed_by_marketplace() {
    let body = format!(
        "<OrderItems>{}</OrderItems>",
        TestFixtures::order_item_status_xml(5, "PKG-5")
    );
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetStatusToPackedByMarketplace", &body),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let items = service
        .set_status_to_packed_by_marketplace(&[5], DeliveryType::Pickup, "", "")
        .await
        .unwrap();

    assert_eq!(items.get("5").unwrap().purchase_order_id, 95);
    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["Action"], "SetStatusToPackedByMarketplace");
    assert!(!params.contains_key("PackageId"));
}

#[tokio::test]
async fn test_set_status_requires_items() {
    let transport = Arc::new(MockTransport::new());
    let service = create_test_service_with_transport(transport.clone());

    let err = service
        .set_status_to_ready_to_ship(&[], DeliveryType::Dropship, "Chilexpress", "1", None)
        .await
        .unwrap_err();
    assert!(err.is_local());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_set_status_to_canceled() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetStatusToCanceled", ""),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    service
        .set_status_to_canceled(101, "Out of stock", "No units left")
        .await
        .unwrap();

    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["OrderItemId"], "101");
    assert_eq!(params["Reason"], "Out of stock");
    assert_eq!(params["ReasonDetail"], "No units left");
}

#[tokio::test]
async fn test_set_invoice_number() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetInvoiceNumber", ""),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    service
        .set_invoice_number(101, "F-0001", Some("https://docs.example.com/F-0001.pdf"))
        .await
        .unwrap();

    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["InvoiceNumber"], "F-0001");
    assert_eq!(params["InvoiceDocumentLink"], "https://docs.example.com/F-0001.pdf");
}

#[tokio::test]
async fn test_set_invoice_pdf_posts_document() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetInvoicePDF", ""),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let invoice = Invoice::new(
        vec![101],
        "F-0001",
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        InvoiceType::Boleta,
        OperatorCode::Chile,
        b"%PDF-1.4".to_vec(),
    )
    .unwrap();
    service.set_invoice_pdf(&invoice).await.unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, HttpMethod::Post);
    assert_eq!(query(&recorded)["Action"], "SetInvoicePDF");
    let body = recorded.body_text().unwrap();
    assert!(body.contains("<InvoiceNumber>F-0001</InvoiceNumber>"));
    assert!(body.contains("<OperatorCode>FACL</OperatorCode>"));
}

#[tokio::test]
async fn test_set_imei() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("SetImei", ""),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let items: OrderItems = vec![OrderItem::with_id(1).with_imei("356938035643809")]
        .into_iter()
        .collect();
    service.set_imei(&items).await.unwrap();

    let body = transport.last_request().unwrap().body_text().unwrap();
    assert!(body.contains("<Imei>356938035643809</Imei>"));
}

#[tokio::test]
async fn test_set_imei_requires_every_imei() {
    let transport = Arc::new(MockTransport::new());
    let service = create_test_service_with_transport(transport.clone());

    let items: OrderItems = vec![
        OrderItem::with_id(1).with_imei("356938035643809"),
        OrderItem::with_id(2),
    ]
    .into_iter()
    .collect();
    let err = service.set_imei(&items).await.unwrap_err();

    assert!(matches!(
        err,
        SellerCenterError::Validation(DomainError::EmptyArgument { ref argument }) if argument == "Imei"
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_get_failure_reasons() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetFailureReasons", TestFixtures::failure_reasons_xml()),
    )]));
    let service = create_test_service_with_transport(transport);

    let reasons = service.get_failure_reasons().await.unwrap();
    assert_eq!(reasons.len(), 2);
    assert_eq!(reasons[1].name, "Wrong price or pricing error");
}

#[tokio::test]
async fn test_get_shipment_providers() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetShipmentProviders", TestFixtures::shipment_providers_xml()),
    )]));
    let service = create_test_service_with_transport(transport);

    let providers = service.get_shipment_providers().await.unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].name, "Chilexpress");
    assert!(providers[1].cod);
}

#[tokio::test]
async fn test_get_document() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetDocument", TestFixtures::documents_xml()),
    )]));
    let service = create_test_service_with_transport(transport.clone());

    let document = service
        .get_document(&[1, 2], DocumentType::ShippingParcel)
        .await
        .unwrap();
    assert_eq!(document.mime_type, "application/pdf");
    assert_eq!(document.decode().unwrap(), b"%PDF-1.4".to_vec());

    let params = query(&transport.last_request().unwrap());
    assert_eq!(params["OrderItemIds"], "[1,2]");
    assert_eq!(params["DocumentType"], "shippingParcel");
}

#[tokio::test]
async fn test_get_document_without_documents_fails() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
        TestFixtures::success("GetDocument", "<Documents/>"),
    )]));
    let service = create_test_service_with_transport(transport);

    let err = service
        .get_document(&[1], DocumentType::Invoice)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The xml structure is not valid for a Documents. The property Document should exist."
    );
}
