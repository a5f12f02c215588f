pub mod books;
pub mod cli;
pub mod country;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod store;
pub mod ui;

pub use cli::{Cli, Commands};
pub use error::FetchError;
pub use store::{SqliteStore, Store, Stored};
pub use ui::{SilentUi, TerminalUi, Ui};

/// Placeholder stored for any text field the source did not provide
pub const SENTINEL: &str = "N/A";
