//! Mock implementations for testing.
//!
//! This module provides a mock transport and canned API responses.

mod transport;

pub use transport::{MockResponse, MockResponseBuilder, MockTransport};

/// Canned response envelopes and entity XML.
pub struct TestFixtures;

impl TestFixtures {
    /// Timestamp used in every response head.
    pub const TIMESTAMP: &'static str = "2024-01-15T10:30:00+0000";

    /// A `SuccessResponse` envelope with the given body content.
    pub fn success(action: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<SuccessResponse>
    <Head>
        <RequestId/>
        <RequestAction>{}</RequestAction>
        <ResponseType/>
        <Timestamp>{}</Timestamp>
    </Head>
    <Body>{}</Body>
</SuccessResponse>"#,
            action,
            Self::TIMESTAMP,
            body
        )
    }

    /// The acknowledgement of a write action queued as a feed.
    pub fn feed_created(action: &str, feed_id: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<SuccessResponse>
    <Head>
        <RequestId>{}</RequestId>
        <RequestAction>{}</RequestAction>
        <ResponseType/>
        <Timestamp>{}</Timestamp>
    </Head>
    <Body/>
</SuccessResponse>"#,
            feed_id,
            action,
            Self::TIMESTAMP
        )
    }

    /// An `ErrorResponse` envelope.
    pub fn error(action: &str, error_type: &str, code: u32, message: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ErrorResponse>
    <Head>
        <RequestAction>{}</RequestAction>
        <ErrorType>{}</ErrorType>
        <ErrorCode>{}</ErrorCode>
        <ErrorMessage>{}</ErrorMessage>
    </Head>
    <Body/>
</ErrorResponse>"#,
            action, error_type, code, message
        )
    }

    /// An `ErrorResponse` envelope listing per-product details.
    pub fn error_with_details(action: &str, code: u32, message: &str, skus: &[&str]) -> String {
        let details: String = skus
            .iter()
            .map(|sku| {
                format!(
                    "<ErrorDetail><Field>Price</Field><Message>Field must contain a valid number</Message><Value>abc</Value><SellerSku>{}</SellerSku></ErrorDetail>",
                    sku
                )
            })
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ErrorResponse>
    <Head>
        <RequestAction>{}</RequestAction>
        <ErrorType>Sender</ErrorType>
        <ErrorCode>{}</ErrorCode>
        <ErrorMessage>{}</ErrorMessage>
    </Head>
    <Body>{}</Body>
</ErrorResponse>"#,
            action, code, message, details
        )
    }

    /// An address element with the given name.
    pub fn address_xml(name: &str) -> String {
        format!(
            "<{name}><FirstName>Jane</FirstName><LastName>Doe</LastName><Phone>5550101</Phone><Phone2/><Address1>Av. Providencia 1234</Address1><Address2>Depto 56</Address2><Address3/><Address4/><Address5/><CustomerEmail>jane@example.com</CustomerEmail><City>Santiago</City><Ward/><Region>Metropolitana</Region><PostCode>7500000</PostCode><Country>Chile</Country></{name}>",
            name = name
        )
    }

    /// A complete `Order` element.
    pub fn order_xml(order_id: u64) -> String {
        format!(
            "<Order><OrderId>{}</OrderId><CustomerFirstName>Jane</CustomerFirstName><CustomerLastName>Doe</CustomerLastName><OrderNumber>204657102</OrderNumber><PaymentMethod>CreditCard</PaymentMethod><Remarks/><DeliveryInfo/><Price>1299.9</Price><GiftOption>0</GiftOption><GiftMessage/><VoucherCode/><CreatedAt>2024-01-15 10:30:00</CreatedAt><UpdatedAt>2024-01-15 11:00:00</UpdatedAt><AddressUpdatedAt/>{}{}<NationalRegistrationNumber>12345678-9</NationalRegistrationNumber><ItemsCount>2</ItemsCount><PromisedShippingTime>2024-01-18 18:00:00</PromisedShippingTime><ExtraAttributes/><Statuses><Status>pending</Status></Statuses></Order>",
            order_id,
            Self::address_xml("AddressBilling"),
            Self::address_xml("AddressShipping")
        )
    }

    /// A complete `OrderItem` element.
    pub fn order_item_xml(order_item_id: u64, order_id: u64) -> String {
        format!(
            "<OrderItem><OrderItemId>{id}</OrderItemId><ShopId>SHOP-1</ShopId><OrderId>{order}</OrderId><Name>Running Shoe</Name><Sku>SKU-{id}</Sku><Variation>42</Variation><ShopSku>SHOP-SKU-{id}</ShopSku><ShippingType>Dropshipping</ShippingType><ItemPrice>649.95</ItemPrice><PaidPrice>649.95</PaidPrice><Currency>CLP</Currency><WalletCredits>0</WalletCredits><TaxAmount>0</TaxAmount><CodCollectableAmount/><ShippingAmount>0</ShippingAmount><ShippingServiceCost>0</ShippingServiceCost><VoucherAmount>0</VoucherAmount><VoucherCode/><Status>pending</Status><IsProcessable>1</IsProcessable><ShipmentProvider/><IsDigital>0</IsDigital><DigitalDeliveryInfo/><TrackingCode/><TrackingCodePre/><Reason/><ReasonDetail/><PurchaseOrderId>0</PurchaseOrderId><PurchaseOrderNumber/><PackageId/><PromisedShippingTime>2024-01-18 18:00:00</PromisedShippingTime><ExtraAttributes/><ShippingProviderType>express</ShippingProviderType><CreatedAt>2024-01-15 10:30:00</CreatedAt><UpdatedAt>2024-01-15 11:00:00</UpdatedAt><ReturnStatus/></OrderItem>",
            id = order_item_id,
            order = order_id
        )
    }

    /// A status-change `OrderItem` element.
    pub fn order_item_status_xml(order_item_id: u64, package_id: &str) -> String {
        format!(
            "<OrderItem><OrderItemId>{id}</OrderItemId><PurchaseOrderId>9{id}</PurchaseOrderId><PurchaseOrderNumber>PO-{id}</PurchaseOrderNumber><PackageId>{pkg}</PackageId></OrderItem>",
            id = order_item_id,
            pkg = package_id
        )
    }

    /// Shipment providers list.
    pub fn shipment_providers_xml() -> &'static str {
        r#"<ShipmentProviders>
    <ShipmentProvider>
        <Name>Chilexpress</Name>
        <Default>1</Default>
        <ApiIntegration>1</ApiIntegration>
        <Cod>0</Cod>
        <TrackingCodeValidationRegex>/^[0-9]{12}$/</TrackingCodeValidationRegex>
        <TrackingCodeExample>123456789012</TrackingCodeExample>
        <TrackingUrl>https://tracking.example.com/__TRACKING_NUMBER__</TrackingUrl>
        <EnabledDeliveryOptions>
            <DeliveryOption>standard</DeliveryOption>
            <DeliveryOption>express</DeliveryOption>
        </EnabledDeliveryOptions>
    </ShipmentProvider>
    <ShipmentProvider>
        <Name>Own Fleet</Name>
        <Default>0</Default>
        <ApiIntegration>0</ApiIntegration>
        <Cod>1</Cod>
        <TrackingCodeValidationRegex/>
        <TrackingCodeExample/>
        <TrackingUrl/>
        <EnabledDeliveryOptions/>
    </ShipmentProvider>
</ShipmentProviders>"#
    }

    /// Failure reasons list.
    pub fn failure_reasons_xml() -> &'static str {
        r#"<Reasons>
    <Reason>
        <Type>canceled</Type>
        <Name>Out of stock</Name>
    </Reason>
    <Reason>
        <Type>canceled</Type>
        <Name>Wrong price or pricing error</Name>
    </Reason>
</Reasons>"#
    }

    /// A documents list with one PDF label.
    pub fn documents_xml() -> &'static str {
        r#"<Documents>
    <Document>
        <DocumentType>shippingParcel</DocumentType>
        <MimeType>application/pdf</MimeType>
        <File>JVBERi0xLjQ=</File>
    </Document>
</Documents>"#
    }

    /// A `Feed` element with errors, a warning and a failure report.
    pub fn feed_xml(feed_id: &str, status: &str) -> String {
        format!(
            r#"<Feed>
    <Feed>{}</Feed>
    <Status>{}</Status>
    <Action>ProductCreate</Action>
    <CreationDate>2024-01-15 10:30:00</CreationDate>
    <UpdatedDate>2024-01-15 10:35:00</UpdatedDate>
    <Source>api</Source>
    <TotalRecords>3</TotalRecords>
    <ProcessedRecords>3</ProcessedRecords>
    <FailedRecords>1</FailedRecords>
    <FailureReports>
        <MimeType>text/csv</MimeType>
        <File>U2VsbGVyU2t1LEVycm9yCg==</File>
    </FailureReports>
    <FeedErrors>
        <Error>
            <Code>1000</Code>
            <Message>Seller SKU 'SKU-3' already exists</Message>
            <SellerSku>SKU-3</SellerSku>
        </Error>
    </FeedErrors>
    <FeedWarnings>
        <Warning>
            <Message>Image could not be downloaded</Message>
            <SellerSku>SKU-2</SellerSku>
        </Warning>
    </FeedWarnings>
</Feed>"#,
            feed_id, status
        )
    }

    /// Category tree with a nested branch and a leaf root.
    pub fn category_tree_xml() -> &'static str {
        r#"<Categories>
    <Category>
        <Name>Shoes</Name>
        <CategoryId>1001</CategoryId>
        <GlobalIdentifier>shoes</GlobalIdentifier>
        <AttributeSetId>1</AttributeSetId>
        <Children>
            <Category>
                <Name>Running</Name>
                <CategoryId>1002</CategoryId>
                <GlobalIdentifier>running</GlobalIdentifier>
                <AttributeSetId>1</AttributeSetId>
                <Children>
                    <Category>
                        <Name>Trail</Name>
                        <CategoryId>1004</CategoryId>
                        <GlobalIdentifier>trail</GlobalIdentifier>
                        <AttributeSetId>1</AttributeSetId>
                        <Children/>
                    </Category>
                </Children>
            </Category>
            <Category>
                <Name>Sandals</Name>
                <CategoryId>1003</CategoryId>
                <GlobalIdentifier>sandals</GlobalIdentifier>
                <AttributeSetId>1</AttributeSetId>
                <Children/>
            </Category>
        </Children>
    </Category>
    <Category>
        <Name>Books</Name>
        <CategoryId>2001</CategoryId>
        <GlobalIdentifier/>
        <AttributeSetId>2</AttributeSetId>
        <Children/>
    </Category>
</Categories>"#
    }

    /// Category attributes, one with options and one with a length limit.
    pub fn attributes_xml() -> &'static str {
        r#"<Attributes>
    <Attribute>
        <Label>Color</Label>
        <Name>Color</Name>
        <GroupName>Appearance</GroupName>
        <IsMandatory>1</IsMandatory>
        <IsGlobalAttribute>0</IsGlobalAttribute>
        <Description>Main color</Description>
        <ProductType>config</ProductType>
        <InputType>dropdown</InputType>
        <AttributeType>option</AttributeType>
        <ExampleValue>Blue</ExampleValue>
        <MaxLength/>
        <Options>
            <Option>
                <GlobalIdentifier>blue</GlobalIdentifier>
                <Name>Blue</Name>
                <isDefault>1</isDefault>
            </Option>
            <Option>
                <GlobalIdentifier/>
                <Name>Red</Name>
                <isDefault>0</isDefault>
            </Option>
        </Options>
    </Attribute>
    <Attribute>
        <Label>Size</Label>
        <Name>Size</Name>
        <GroupName/>
        <IsMandatory>0</IsMandatory>
        <IsGlobalAttribute>1</IsGlobalAttribute>
        <Description/>
        <ProductType>simple</ProductType>
        <InputType>textfield</InputType>
        <AttributeType>value</AttributeType>
        <ExampleValue>42</ExampleValue>
        <MaxLength>10</MaxLength>
        <Options/>
    </Attribute>
</Attributes>"#
    }

    /// Attribute sets with their categories.
    pub fn attribute_sets_xml() -> &'static str {
        r#"<AttributeSets>
    <AttributeSet>
        <AttributeSetId>1</AttributeSetId>
        <Name>footwear</Name>
        <GlobalIdentifier>footwear</GlobalIdentifier>
        <Categories>
            <Category>
                <Name>Running</Name>
                <CategoryId>1002</CategoryId>
                <GlobalIdentifier>running</GlobalIdentifier>
                <AttributeSetId>1</AttributeSetId>
            </Category>
        </Categories>
    </AttributeSet>
</AttributeSets>"#
    }

    /// Brands list.
    pub fn brands_xml() -> &'static str {
        r#"<Brands>
    <Brand>
        <BrandId>1</BrandId>
        <Name>Acme</Name>
        <GlobalIdentifier>acme</GlobalIdentifier>
    </Brand>
    <Brand>
        <BrandId>2</BrandId>
        <Name>Generic</Name>
        <GlobalIdentifier/>
    </Brand>
</Brands>"#
    }

    /// A complete `Product` element.
    pub fn product_xml(seller_sku: &str) -> String {
        format!(
            r#"<Product>
    <SellerSku>{}</SellerSku>
    <ShopSku>SHOP-1</ShopSku>
    <Name>Running Shoe</Name>
    <Brand>Acme</Brand>
    <Description><![CDATA[<p>Light & fast</p>]]></Description>
    <TaxClass>IVA 19%</TaxClass>
    <Variation>42</Variation>
    <ParentSku/>
    <Quantity>12</Quantity>
    <Available>12</Available>
    <Price>59.9</Price>
    <SalePrice/>
    <SaleStartDate/>
    <SaleEndDate/>
    <Status>active</Status>
    <ProductId/>
    <Url>https://marketplace.example.com/running-shoe</Url>
    <MainImage>https://img.example.com/1.jpg</MainImage>
    <Images>
        <Image>https://img.example.com/1.jpg</Image>
        <Image>https://img.example.com/2.jpg</Image>
        <Image/>
    </Images>
    <PrimaryCategory>1001</PrimaryCategory>
    <Categories>1001,1002</Categories>
    <ProductData>
        <Color>Blue</Color>
        <Size>42</Size>
    </ProductData>
</Product>"#,
            seller_sku
        )
    }

    /// QC status list.
    pub fn qc_status_xml() -> &'static str {
        r#"<Status>
    <State>
        <SellerSKU>SKU-1</SellerSKU>
        <Status>approved</Status>
    </State>
    <State>
        <SellerSKU>SKU-2</SellerSKU>
        <Status>rejected</Status>
        <Reason>Blurry image</Reason>
    </State>
</Status>"#
    }

    /// Registered webhooks.
    pub fn webhooks_xml() -> &'static str {
        r#"<Webhooks>
    <Webhook>
        <WebhookId>wh-1</WebhookId>
        <CallbackUrl>https://example.com/hooks/orders</CallbackUrl>
        <WebhookSource>api</WebhookSource>
        <Events>
            <Event>onOrderCreated</Event>
            <Event>onOrderItemsStatusChanged</Event>
        </Events>
    </Webhook>
    <Webhook>
        <WebhookId>wh-2</WebhookId>
        <CallbackUrl>https://example.com/hooks/empty</CallbackUrl>
        <WebhookSource>web</WebhookSource>
        <Events/>
    </Webhook>
</Webhooks>"#
    }

    /// Webhook entities and their event aliases.
    pub fn webhook_entities_xml() -> &'static str {
        r#"<Entities>
    <Entity>
        <Name>Order</Name>
        <Events>
            <Event>
                <Name>Created</Name>
                <Alias>onOrderCreated</Alias>
            </Event>
            <Event>
                <Name>Status changed</Name>
                <Alias>onOrderItemsStatusChanged</Alias>
            </Event>
        </Events>
    </Entity>
    <Entity>
        <Name>Feed</Name>
        <Events>
            <Event>
                <Name>Completed</Name>
                <Alias>onFeedCompleted</Alias>
            </Event>
        </Events>
    </Entity>
</Entities>"#
    }
}
