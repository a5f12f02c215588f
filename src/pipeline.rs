//! Driver: countries, then books, then the report

use anyhow::Result;
use chrono::Local;
use std::path::Path;
use tracing::warn;

use crate::books::BookSource;
use crate::country::{CountryLookup, CountryRecord};
use crate::error::{FetchError, FetchResult};
use crate::report::{build_report, write_docx, DEFAULT_REPORTER_NAME};
use crate::store::Store;
use crate::ui::Ui;

/// How many country names the interactive run asks for
pub const COUNTRY_PROMPTS: usize = 3;

/// Totals for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub countries_stored: usize,
    pub books_stored: usize,
}

/// Ask for [`COUNTRY_PROMPTS`] country names
pub fn prompt_country_names(ui: &mut impl Ui) -> Result<Vec<String>> {
    (1..=COUNTRY_PROMPTS)
        .map(|i| {
            ui.prompt(&format!("Enter the name of country {} (in English): ", i))
                .map(|name| name.trim().to_string())
        })
        .collect()
}

/// The "supply reporting name" capability; blank answers get the default name
pub fn reporting_name(ui: &mut impl Ui) -> Result<String> {
    let name = ui.prompt("Please enter your full name for the report: ")?;
    let name = name.trim();
    Ok(if name.is_empty() {
        DEFAULT_REPORTER_NAME.to_string()
    } else {
        name.to_string()
    })
}

/// Look up each name and store the hits. Lookup failures skip that name only.
pub fn ingest_countries(
    names: &[String],
    lookup: &impl CountryLookup,
    store: &impl Store,
    ui: &mut impl Ui,
) -> Result<usize> {
    let mut stored = 0;

    for name in names {
        ui.log(format!("\nFetching data for {}...", name));
        match lookup_named(lookup, name) {
            Ok(record) => {
                store.insert_country(&record)?;
                ui.log(format!("Data for {} saved.", record.common_name));
                stored += 1;
            }
            Err(e) => {
                warn!(country = %name, error = %e, "country lookup failed");
                ui.log(format!("Could not get data for {}: {}. Skipping.", name, e));
            }
        }
    }

    Ok(stored)
}

fn lookup_named(lookup: &impl CountryLookup, name: &str) -> FetchResult<CountryRecord> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FetchError::BlankName);
    }
    lookup.lookup(name)
}

/// Scrape the book page and store the batch. A failed fetch stores nothing.
pub fn scrape_books(
    source: &impl BookSource,
    store: &impl Store,
    ui: &mut impl Ui,
) -> Result<usize> {
    ui.log(format!("Scraping books from {}", source.describe()));

    let books = match source.fetch_books() {
        Ok(books) => books,
        Err(e) => {
            warn!(error = %e, "book scrape failed");
            ui.log(format!("Could not fetch the book page: {}", e));
            Vec::new()
        }
    };

    if books.is_empty() {
        ui.log("No book data was collected for insertion.");
        return Ok(0);
    }

    let count = store.insert_books(&books)?;
    ui.log(format!("{} books saved.", count));
    Ok(count)
}

/// Render both tables to `output` with the current local time
pub fn generate_report(
    store: &impl Store,
    reporter: &str,
    output: &Path,
    ui: &mut impl Ui,
) -> Result<()> {
    let countries = store.list_countries()?;
    let books = store.list_books()?;

    let report = build_report(reporter, &Local::now(), &countries, &books);
    write_docx(&report, output)?;

    ui.log(format!("\nReport {:?} generated.", output));
    Ok(())
}

/// The full interactive run
pub fn run(
    lookup: &impl CountryLookup,
    source: &impl BookSource,
    store: &impl Store,
    output: &Path,
    ui: &mut impl Ui,
) -> Result<RunSummary> {
    store.init()?;

    ui.log("--- Part 1: country data from the REST API ---");
    let names = prompt_country_names(ui)?;
    let countries_stored = ingest_countries(&names, lookup, store, ui)?;

    ui.log("\n--- Part 2: book data from the web ---");
    let books_stored = scrape_books(source, store, ui)?;

    ui.log("\n--- Part 3: final report ---");
    let reporter = reporting_name(ui)?;
    generate_report(store, &reporter, output, ui)?;

    ui.log("\nDone.");
    Ok(RunSummary {
        countries_stored,
        books_stored,
    })
}
