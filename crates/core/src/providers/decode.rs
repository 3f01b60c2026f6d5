use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// Decode a JSON array body record by record.
///
/// The body itself must be a JSON array, otherwise the whole dataset fails.
/// Individual records with a missing field, a wrong type or an unparseable
/// date are dropped and logged; the rest of the dataset still loads.
pub fn decode_records<T: DeserializeOwned>(dataset: &str, body: &str) -> Result<Vec<T>, CoreError> {
    let values: Vec<Value> = serde_json::from_str(body).map_err(|e| CoreError::Api {
        dataset: dataset.to_string(),
        message: format!("Expected a JSON array: {e}"),
    })?;

    let total = values.len();
    let mut records = Vec::with_capacity(total);

    for (position, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(dataset, position, error = %e, "Dropping malformed record");
            }
        }
    }

    if records.len() < total {
        warn!(
            dataset,
            dropped = total - records.len(),
            kept = records.len(),
            "Dataset loaded with malformed records removed"
        );
    }

    Ok(records)
}

/// Decode a price series, additionally dropping non-finite prices.
pub fn decode_prices(body: &str) -> Result<Vec<PricePoint>, CoreError> {
    let mut points: Vec<PricePoint> = decode_records("prices", body)?;
    points.retain(|p| {
        let finite = p.price.is_finite();
        if !finite {
            warn!(date = %p.date, price = p.price, "Dropping non-finite price");
        }
        finite
    });
    Ok(points)
}
