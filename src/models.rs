/// Raw markup returned by a single page fetch. Consumed by the extractor
/// and discarded; it has no identity beyond the one request that produced it.
pub struct PageContent(String);

impl PageContent {
    pub fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
}
