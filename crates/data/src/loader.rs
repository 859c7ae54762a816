//! Cached-response loading.
//!
//! Quote-provider responses are cached on disk as JSON candle arrays, one
//! file per (API, instrument) pair. Loading replays such a file into the
//! in-memory store; the HTTP side that writes the cache is out of scope.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::error::DataError;
use crate::validation::validate_candles;
use ta_types::Candle;

/// Resolve a cached-response path using the canonical layout or an env override.
///
/// The root comes from `TA_RESPONSE_CACHE_ROOT`, falling back to
/// `response_cache`.
#[must_use]
pub fn resolve_cache_path(api: &str, endpoint: &str, symbol: &str) -> PathBuf {
    let root =
        std::env::var("TA_RESPONSE_CACHE_ROOT").unwrap_or_else(|_| "response_cache".to_string());
    resolve_cache_path_under(Path::new(&root), api, endpoint, symbol)
}

/// Resolve a cached-response path under an explicit root directory.
///
/// Layout: `<root>/<api>/<sanitized symbol>/<endpoint>_response.json`.
#[must_use]
pub fn resolve_cache_path_under(root: &Path, api: &str, endpoint: &str, symbol: &str) -> PathBuf {
    root.join(api)
        .join(sanitize_symbol(symbol))
        .join(format!("{endpoint}_response.json"))
}

/// Lowercases a symbol and replaces separators so it is safe as a directory
/// name (`"Tata Steel"` becomes `"tata_steel"`).
#[must_use]
pub fn sanitize_symbol(symbol: &str) -> String {
    symbol
        .to_lowercase()
        .replace([' ', '.', ':'], "_")
}

/// Loads candles from a cached JSON response file.
///
/// # Errors
/// - [`DataError::FileNotFound`] when the file cannot be opened.
/// - [`DataError::ParseError`] on malformed JSON.
/// - [`DataError::EmptyData`] when the file holds no candles.
pub fn load_candles(path: &Path) -> Result<Vec<Candle>, DataError> {
    let file = std::fs::File::open(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let candles: Vec<Candle> = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    if candles.is_empty() {
        return Err(DataError::EmptyData);
    }

    Ok(candles)
}

/// Loads candles and applies the validation rules.
///
/// # Errors
/// Propagates [`load_candles`] and [`validate_candles`] failures.
pub fn load_and_validate(path: &Path) -> Result<Vec<Candle>, DataError> {
    let candles = load_candles(path)?;
    validate_candles(&candles)?;
    Ok(candles)
}

/// Rejects a cache file older than `max_age` (by modification time).
///
/// A caller seeing [`DataError::StaleCache`] should refetch through its
/// provider rather than use the cached series.
///
/// # Errors
/// - [`DataError::FileNotFound`] when the file or its metadata is missing.
/// - [`DataError::StaleCache`] when the file is older than `max_age`.
pub fn ensure_fresh(path: &Path, max_age: Duration) -> Result<(), DataError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let modified = metadata
        .modified()
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO);

    if age > max_age {
        return Err(DataError::StaleCache {
            path: path.display().to_string(),
            age_secs: age.as_secs(),
            max_age_secs: max_age.as_secs(),
        });
    }

    Ok(())
}
