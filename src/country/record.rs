use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{FetchError, FetchResult};
use crate::SENTINEL;

/// A country flattened into the `countries` table layout
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,
    pub capital: String,
    pub continent: String,
    pub region: String,
    pub subregion: String,
    pub population: u64,
    /// Square kilometres
    pub area: f64,
    pub currency_name: String,
    pub currency_symbol: String,
    pub main_language: String,
    /// Comma-joined list, e.g. "UTC-03:00, UTC+01:00"
    pub timezones: String,
    pub flag_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiName {
    common: Option<String>,
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiCurrency {
    name: Option<String>,
    symbol: Option<String>,
}

/// Map one restcountries candidate object.
///
/// Every field is read on its own; absent, null or wrong-typed values fall
/// back to the sentinel instead of failing the record.
pub fn map_candidate(candidate: &Map<String, Value>) -> CountryRecord {
    let name: ApiName = lenient(candidate.get("name")).unwrap_or_default();

    // First entry wins when several currencies or languages are listed;
    // relies on serde_json's preserve_order so "first" is the response order.
    let currency: ApiCurrency = first_entry(candidate.get("currencies"))
        .and_then(|v| lenient(Some(v)))
        .unwrap_or_default();

    let main_language = first_entry(candidate.get("languages"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let timezones = lenient::<Vec<String>>(candidate.get("timezones"))
        .filter(|zones| !zones.is_empty())
        .map(|zones| zones.join(", "));

    // Stored as SQLite INTEGER, so anything outside 0..=i64::MAX is treated as absent
    let population = lenient::<i64>(candidate.get("population"))
        .and_then(|p| u64::try_from(p).ok())
        .unwrap_or(0);

    let area = candidate
        .get("area")
        .and_then(Value::as_f64)
        .filter(|a| a.is_finite() && *a >= 0.0)
        .unwrap_or(0.0);

    let flag_url = candidate
        .get("flags")
        .and_then(|f| f.get("png"))
        .and_then(Value::as_str)
        .map(str::to_string);

    CountryRecord {
        common_name: or_sentinel(name.common),
        official_name: or_sentinel(name.official),
        capital: or_sentinel(first_item(candidate.get("capital"))),
        continent: or_sentinel(first_item(candidate.get("continents"))),
        region: or_sentinel(lenient(candidate.get("region"))),
        subregion: or_sentinel(lenient(candidate.get("subregion"))),
        population,
        area,
        currency_name: or_sentinel(currency.name),
        currency_symbol: or_sentinel(currency.symbol),
        main_language: or_sentinel(main_language),
        timezones: or_sentinel(timezones),
        flag_url: or_sentinel(flag_url),
    }
}

/// Result of decoding a lookup response body
#[derive(Debug)]
pub enum ParsedLookup {
    Found(CountryRecord),
    Empty,
}

/// Decode a lookup response body and map its first candidate.
///
/// Only the outer array and the first element's shape are checked;
/// later candidates are never looked at.
pub fn parse_lookup(body: &str) -> Result<ParsedLookup, String> {
    let candidates: Vec<Value> = serde_json::from_str(body).map_err(|e| e.to_string())?;

    match candidates.first() {
        Some(Value::Object(first)) => Ok(ParsedLookup::Found(map_candidate(first))),
        Some(other) => Err(format!("expected a country object, found {}", other)),
        None => Ok(ParsedLookup::Empty),
    }
}

/// Turn a successful response body for `name` into a record or a lookup failure
pub fn decode_lookup(body: &str, name: &str) -> FetchResult<CountryRecord> {
    match parse_lookup(body).map_err(FetchError::Malformed)? {
        ParsedLookup::Found(record) => Ok(record),
        ParsedLookup::Empty => Err(FetchError::NoMatch(name.to_string())),
    }
}

/// Deserialize a value if it has the expected shape, otherwise `None`
fn lenient<T: DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    value.and_then(|v| T::deserialize(v).ok())
}

fn or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| SENTINEL.to_string())
}

fn first_item(items: Option<&Value>) -> Option<String> {
    lenient::<Vec<String>>(items).and_then(|v| v.into_iter().next())
}

fn first_entry(map: Option<&Value>) -> Option<&Value> {
    map.and_then(Value::as_object).and_then(|m| m.values().next())
}
