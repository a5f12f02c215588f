//! Report Builder: both tables rendered into a single document

pub mod docx;

pub use docx::write_docx;

use chrono::{DateTime, TimeZone};

use crate::books::BookRecord;
use crate::country::CountryRecord;
use crate::store::Stored;

pub const DEFAULT_OUTPUT: &str = "final_report.docx";
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DEFAULT_REPORTER_NAME: &str = "Unknown Name";

pub const TITLE: &str = "Public Data Report";
pub const COUNTRY_SECTION: &str = "1. Country Data";
pub const BOOK_SECTION: &str = "2. Book Data";
pub const NO_COUNTRIES: &str = "No country data found to include in the report.";
pub const NO_BOOKS: &str = "No book data found to include in the report.";

pub const COUNTRY_HEADERS: &[&str] = &[
    "ID",
    "Common Name",
    "Official Name",
    "Capital",
    "Continent",
    "Region",
    "Subregion",
    "Population",
    "Area (km²)",
    "Currency",
    "Currency Symbol",
    "Main Language",
    "Timezones",
    "Flag URL",
];

pub const BOOK_HEADERS: &[&str] = &["ID", "Title", "Price", "Rating", "Availability"];

/// One structural element of the rendered document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    PageBreak,
}

/// Format-independent document model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub blocks: Vec<Block>,
}

impl Report {
    fn heading(&mut self, level: usize, text: impl Into<String>) {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
    }

    fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph(text.into()));
    }

    /// A table, or `placeholder` when there are no rows
    fn table_or(&mut self, header: &[&str], rows: Vec<Vec<String>>, placeholder: &str) {
        if rows.is_empty() {
            self.paragraph(placeholder);
        } else {
            self.blocks.push(Block::Table {
                header: header.iter().map(|h| h.to_string()).collect(),
                rows,
            });
        }
    }
}

/// Assemble the report for the given rows
pub fn build_report<Tz>(
    reporter: &str,
    generated_at: &DateTime<Tz>,
    countries: &[Stored<CountryRecord>],
    books: &[Stored<BookRecord>],
) -> Report
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut report = Report::default();

    report.heading(1, TITLE);
    report.paragraph(format!("Name: {}", reporter));
    report.paragraph(format!(
        "Generated: {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));

    report.heading(2, COUNTRY_SECTION);
    report.table_or(
        COUNTRY_HEADERS,
        countries.iter().map(country_row).collect(),
        NO_COUNTRIES,
    );

    report.blocks.push(Block::PageBreak);

    report.heading(2, BOOK_SECTION);
    report.table_or(BOOK_HEADERS, books.iter().map(book_row).collect(), NO_BOOKS);

    report
}

fn country_row(stored: &Stored<CountryRecord>) -> Vec<String> {
    let c = &stored.record;
    vec![
        stored.id.to_string(),
        c.common_name.clone(),
        c.official_name.clone(),
        c.capital.clone(),
        c.continent.clone(),
        c.region.clone(),
        c.subregion.clone(),
        c.population.to_string(),
        format_real(c.area),
        c.currency_name.clone(),
        c.currency_symbol.clone(),
        c.main_language.clone(),
        c.timezones.clone(),
        c.flag_url.clone(),
    ]
}

fn book_row(stored: &Stored<BookRecord>) -> Vec<String> {
    let b = &stored.record;
    vec![
        stored.id.to_string(),
        b.title.clone(),
        format_price(b.price),
        b.rating.clone(),
        b.availability.clone(),
    ]
}

/// Shortest round-trip form that always carries a decimal point
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

pub fn format_price(price: f64) -> String {
    format!("£{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn country(id: i64, name: &str) -> Stored<CountryRecord> {
        Stored {
            id,
            record: CountryRecord {
                common_name: name.to_string(),
                official_name: "Japan".to_string(),
                capital: "Tokyo".to_string(),
                continent: "Asia".to_string(),
                region: "Asia".to_string(),
                subregion: "Eastern Asia".to_string(),
                population: 125836021,
                area: 377930.0,
                currency_name: "Japanese yen".to_string(),
                currency_symbol: "¥".to_string(),
                main_language: "Japanese".to_string(),
                timezones: "UTC+09:00".to_string(),
                flag_url: "https://flagcdn.com/w320/jp.png".to_string(),
            },
        }
    }

    fn book(id: i64, price: f64) -> Stored<BookRecord> {
        Stored {
            id,
            record: BookRecord {
                title: "A Light in the Attic".to_string(),
                price,
                rating: "Three".to_string(),
                availability: "In stock".to_string(),
            },
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    fn tables(report: &Report) -> Vec<&Block> {
        report
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Table { .. }))
            .collect()
    }

    #[test]
    fn test_header_block() {
        let report = build_report("Ada Lovelace", &timestamp(), &[], &[]);
        assert_eq!(
            report.blocks[..3],
            [
                Block::Heading { level: 1, text: TITLE.to_string() },
                Block::Paragraph("Name: Ada Lovelace".to_string()),
                Block::Paragraph("Generated: 05/03/2024 14:07:09".to_string()),
            ]
        );
    }

    #[test]
    fn test_timestamp_uses_given_offset() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let report = build_report("x", &at, &[], &[]);
        assert_eq!(
            report.blocks[2],
            Block::Paragraph("Generated: 31/12/2024 23:59:59".to_string())
        );
    }

    #[test]
    fn test_empty_tables_render_placeholders() {
        let report = build_report("x", &timestamp(), &[], &[]);
        assert!(tables(&report).is_empty());
        assert!(report.blocks.contains(&Block::Paragraph(NO_COUNTRIES.to_string())));
        assert!(report.blocks.contains(&Block::Paragraph(NO_BOOKS.to_string())));
    }

    #[test]
    fn test_sections_are_independent() {
        let report = build_report("x", &timestamp(), &[], &[book(1, 51.77)]);

        assert_eq!(
            report.blocks[3..],
            [
                Block::Heading { level: 2, text: COUNTRY_SECTION.to_string() },
                Block::Paragraph(NO_COUNTRIES.to_string()),
                Block::PageBreak,
                Block::Heading { level: 2, text: BOOK_SECTION.to_string() },
                Block::Table {
                    header: BOOK_HEADERS.iter().map(|h| h.to_string()).collect(),
                    rows: vec![vec![
                        "1".to_string(),
                        "A Light in the Attic".to_string(),
                        "£51.77".to_string(),
                        "Three".to_string(),
                        "In stock".to_string(),
                    ]],
                },
            ]
        );
    }

    #[test]
    fn test_country_rows_in_given_order() {
        let report = build_report("x", &timestamp(), &[country(1, "Japan"), country(2, "Japan")], &[]);
        let Block::Table { header, rows } = tables(&report)[0] else {
            panic!("expected country table");
        };
        assert_eq!(header.len(), COUNTRY_HEADERS.len());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[1][0], "2");
        assert_eq!(rows[0][7], "125836021");
        assert_eq!(rows[0][8], "377930.0");
        assert_eq!(rows[0].len(), COUNTRY_HEADERS.len());
        assert!(report.blocks.contains(&Block::Paragraph(NO_BOOKS.to_string())));
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(551695.0), "551695.0");
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(2.5), "2.5");
        assert_eq!(format_real(0.44), "0.44");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(51.77), "£51.77");
        assert_eq!(format_price(50.1), "£50.10");
        assert_eq!(format_price(7.0), "£7.00");
    }
}
