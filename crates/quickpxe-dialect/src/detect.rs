use tracing::debug;

use crate::dialect::Dialect;
use crate::errors::{DialectError, DialectResult};

/// Pick the dialect of an uploaded file. Dialects are tried in [`Dialect::ALL`] order and the
/// first match wins; `None` means the vendor is unknown.
pub fn identify(filename: &str, content: &str) -> Option<Dialect> {
    let found = Dialect::ALL
        .into_iter()
        .find(|dialect| dialect.detect(filename, content));
    debug!(filename, dialect = ?found, "identified vendor");
    found
}

pub fn identify_or_err(filename: &str, content: &str) -> DialectResult<Dialect> {
    identify(filename, content).ok_or_else(|| DialectError::UnrecognizedVendor {
        filename: filename.to_string(),
    })
}
