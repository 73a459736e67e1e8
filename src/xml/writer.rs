//! Building XML request documents.

use std::fmt::Display;

/// XML declaration emitted at the top of every request document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Incremental writer for request documents.
#[derive(Debug, Default)]
pub struct XmlBuilder {
    buffer: String,
}

impl XmlBuilder {
    /// Start an XML fragment without declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a document with the XML declaration.
    pub fn document() -> Self {
        Self {
            buffer: XML_DECLARATION.to_string(),
        }
    }

    /// Open an element.
    pub fn open(&mut self, name: &str) -> &mut Self {
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.buffer.push('>');
        self
    }

    /// Close an element.
    pub fn close(&mut self, name: &str) -> &mut Self {
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
        self
    }

    /// Write an element with escaped text content.
    pub fn element(&mut self, name: &str, value: impl Display) -> &mut Self {
        let text = value.to_string();
        self.open(name);
        self.buffer.push_str(&escape_xml(&text));
        self.close(name)
    }

    /// Write an element only when a value is present.
    pub fn optional_element<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.element(name, value);
        }
        self
    }

    /// Write an element whose content is wrapped in a character data section.
    pub fn cdata_element(&mut self, name: &str, value: &str) -> &mut Self {
        self.open(name);
        self.buffer.push_str("<![CDATA[");
        // A literal "]]>" has to be split across two sections.
        self.buffer.push_str(&value.replace("]]>", "]]]]><![CDATA[>"));
        self.buffer.push_str("]]>");
        self.close(name)
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str) -> &mut Self {
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.buffer.push_str("/>");
        self
    }

    /// Finish and return the document text.
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Escape special characters for XML.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
