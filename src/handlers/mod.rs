pub mod health;
pub mod priced;
pub mod titled;

use crate::error::ApiError;

pub use health::health_handler;

/// Parse the `{id}` path segment into a row identifier
fn parse_id(id_str: &str) -> Result<i64, ApiError> {
    id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id_str.to_string()))
}
