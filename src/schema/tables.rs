//! Table schema definitions for the two local stores

use super::types::*;

pub static COUNTRIES: TableSchema = TableSchema {
    name: "countries",
    columns: &[
        Column::new("common_name", ColumnType::Text),
        Column::new("official_name", ColumnType::Text),
        Column::new("capital", ColumnType::Text),
        Column::new("continent", ColumnType::Text),
        Column::new("region", ColumnType::Text),
        Column::new("subregion", ColumnType::Text),
        Column::new("population", ColumnType::Integer),
        Column::new("area", ColumnType::Real),
        Column::new("currency_name", ColumnType::Text),
        Column::new("currency_symbol", ColumnType::Text),
        Column::new("main_language", ColumnType::Text),
        Column::new("timezones", ColumnType::Text),
        Column::new("flag_url", ColumnType::Text),
    ],
};

pub static BOOKS: TableSchema = TableSchema {
    name: "books",
    columns: &[
        Column::new("title", ColumnType::Text),
        Column::new("price", ColumnType::Real),
        Column::new("star_rating", ColumnType::Text),
        Column::new("availability", ColumnType::Text),
    ],
};
