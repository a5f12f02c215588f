use anyhow::Result;
use public_data_report::{
    books::BooksClient,
    cli::{Cli, Commands},
    country::RestCountriesClient,
    pipeline,
    store::{SqliteStore, Store},
    ui::{TerminalUi, Ui},
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let store = SqliteStore::new(&cli.countries_db, &cli.books_db);
    let mut ui = TerminalUi::new();

    match cli.command() {
        Commands::Run => {
            let start = Instant::now();
            let lookup = RestCountriesClient::new(&cli.api_base)?;
            let source = BooksClient::new(&cli.books_url)?;

            let summary = pipeline::run(&lookup, &source, &store, &cli.output, &mut ui)?;

            ui.log(format!(
                "Stored {} countries and {} books in {:.1}s. Check {:?}, {:?} and {:?}.",
                summary.countries_stored,
                summary.books_stored,
                start.elapsed().as_secs_f64(),
                store.countries_db(),
                store.books_db(),
                cli.output
            ));
        }

        Commands::Countries { names } => {
            store.init()?;
            let lookup = RestCountriesClient::new(&cli.api_base)?;
            let stored = pipeline::ingest_countries(&names, &lookup, &store, &mut ui)?;
            ui.log(format!("\n{} of {} countries stored.", stored, names.len()));
        }

        Commands::Books => {
            store.init()?;
            let source = BooksClient::new(&cli.books_url)?;
            pipeline::scrape_books(&source, &store, &mut ui)?;
        }

        Commands::Report { name } => {
            let reporter = match name {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => pipeline::reporting_name(&mut ui)?,
            };
            pipeline::generate_report(&store, &reporter, &cli.output, &mut ui)?;
        }
    }

    Ok(())
}
