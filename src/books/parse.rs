use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::SENTINEL;

/// Number of product blocks examined per page
pub const MAX_BOOKS: usize = 10;

/// A book listing flattened into the `books` table layout
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub price: f64,
    /// Star-rating class token such as "Three", kept as an opaque label
    pub rating: String,
    pub availability: String,
}

static PRODUCT: Lazy<Selector> = Lazy::new(|| selector("article.product_pod"));
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| selector("h3 a"));
static PRICE: Lazy<Selector> = Lazy::new(|| selector("p.price_color"));
static RATING: Lazy<Selector> = Lazy::new(|| selector("p.star-rating"));
static AVAILABILITY: Lazy<Selector> = Lazy::new(|| selector("p.instock.availability"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Parse the first [`MAX_BOOKS`] product blocks of a listing page.
///
/// Blocks without a title or a readable price are skipped; they still
/// count toward the limit.
pub fn parse_books(html: &str) -> Vec<BookRecord> {
    let document = Html::parse_document(html);

    document
        .select(&PRODUCT)
        .take(MAX_BOOKS)
        .enumerate()
        .filter_map(|(idx, block)| {
            let book = parse_block(block);
            if book.is_none() {
                debug!(block = idx, "skipping product block with missing title or price");
            }
            book
        })
        .collect()
}

fn parse_block(block: ElementRef) -> Option<BookRecord> {
    let title = block
        .select(&TITLE_LINK)
        .next()?
        .value()
        .attr("title")?
        .to_string();

    let price_text: String = block.select(&PRICE).next()?.text().collect();
    let price = parse_price(&price_text)?;

    let rating = block
        .select(&RATING)
        .next()
        .and_then(|el| el.value().attr("class"))
        .and_then(|classes| classes.split_whitespace().nth(1))
        .unwrap_or(SENTINEL)
        .to_string();

    let availability = block
        .select(&AVAILABILITY)
        .next()
        .map(stripped_text)
        .unwrap_or_else(|| SENTINEL.to_string());

    Some(BookRecord {
        title,
        price,
        rating,
        availability,
    })
}

/// Keep only digits and the decimal point, then parse: "£51.77" -> 51.77
pub fn parse_price(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// Trimmed text nodes concatenated, skipping whitespace-only ones
fn stripped_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
