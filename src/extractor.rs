use scraper::{Html, Selector};
use thiserror::Error;
use tracing::info;

use crate::models::{PageContent, ProductRecord};

const NAME_SELECTOR: &str = "#productTitle";
const PRICE_SELECTOR: &str = ".a-offscreen";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0} element not found in page")]
    MissingElement(&'static str),
    #[error("price text {0:?} is not a valid amount")]
    PriceFormat(String),
}

/// Pulls the product name and price out of the page. Either both fields come
/// back or the whole extraction fails; the error names the missing field so
/// the log can tell a restructured page from an unparseable price.
pub fn extract_product_details(page: &PageContent) -> Result<ProductRecord, ExtractError> {
    let doc = Html::parse_document(page.as_str());
    let name_selector = Selector::parse(NAME_SELECTOR).unwrap();
    let price_selector = Selector::parse(PRICE_SELECTOR).unwrap();

    let name = doc
        .select(&name_selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .ok_or(ExtractError::MissingElement("product name"))?;

    let price_text = doc
        .select(&price_selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or(ExtractError::MissingElement("price"))?;

    let price = parse_price(&price_text)?;

    info!(%name, price, "extracted product details");
    Ok(ProductRecord { name, price })
}

fn parse_price(raw: &str) -> Result<f64, ExtractError> {
    let cleaned = raw.replace('$', "").replace(',', "");
    let price: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| ExtractError::PriceFormat(raw.to_string()))?;
    if price < 0.0 {
        return Err(ExtractError::PriceFormat(raw.to_string()));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> PageContent {
        PageContent::new(html.to_string())
    }

    #[test]
    fn extracts_trimmed_name_and_numeric_price() {
        let content = page(
            r#"<html><body>
                <span id="productTitle">  Widget Deluxe  </span>
                <span class="a-offscreen">$1,234.56</span>
            </body></html>"#,
        );
        let record = extract_product_details(&content).unwrap();
        assert_eq!(record.name, "Widget Deluxe");
        assert_eq!(record.price, 1234.56);
    }

    #[test]
    fn missing_name_fails_even_when_price_is_present() {
        let content = page(r#"<html><span class="a-offscreen">$9.99</span></html>"#);
        let err = extract_product_details(&content).unwrap_err();
        assert!(matches!(err, ExtractError::MissingElement("product name")));
    }

    #[test]
    fn missing_price_fails_even_when_name_is_present() {
        let content = page(r#"<html><span id="productTitle">Widget</span></html>"#);
        let err = extract_product_details(&content).unwrap_err();
        assert!(matches!(err, ExtractError::MissingElement("price")));
    }

    #[test]
    fn non_numeric_price_is_a_format_failure() {
        let content = page(
            r#"<html>
                <span id="productTitle">Widget</span>
                <span class="a-offscreen">N/A</span>
            </html>"#,
        );
        let err = extract_product_details(&content).unwrap_err();
        assert!(matches!(err, ExtractError::PriceFormat(_)));
    }

    #[test]
    fn negative_price_is_a_format_failure() {
        assert!(matches!(
            parse_price("$-3.00"),
            Err(ExtractError::PriceFormat(_))
        ));
    }

    #[test]
    fn price_parsing_strips_symbol_and_separators() {
        assert_eq!(parse_price("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_price("$9.50").unwrap(), 9.5);
        assert_eq!(parse_price(" $12,000.00 ").unwrap(), 12000.0);
    }
}
