use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::books::DEFAULT_BOOKS_URL;
use crate::country::DEFAULT_API_BASE;
use crate::report::DEFAULT_OUTPUT;
use crate::store::{DEFAULT_BOOKS_DB, DEFAULT_COUNTRIES_DB};

#[derive(Parser, Debug)]
#[command(name = "public-data-report")]
#[command(version, about = "Collect country and book data into SQLite and render a Word report")]
pub struct Cli {
    /// SQLite file holding the countries table
    #[arg(long, global = true, default_value = DEFAULT_COUNTRIES_DB)]
    pub countries_db: PathBuf,

    /// SQLite file holding the books table
    #[arg(long, global = true, default_value = DEFAULT_BOOKS_DB)]
    pub books_db: PathBuf,

    /// Report output path (overwritten)
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base URL of the restcountries API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Book listing page to scrape
    #[arg(long, global = true, default_value = DEFAULT_BOOKS_URL)]
    pub books_url: String,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Prompt for countries, scrape books, then render the report
    Run,

    /// Look up and store the given countries without prompting
    Countries {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Scrape and store the book listing
    Books,

    /// Render the report from what is already stored
    Report {
        /// Name printed in the report header (prompted for when absent)
        #[arg(short, long)]
        name: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
