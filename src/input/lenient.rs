//! Forgiving deserializers for numeric record fields.
//!
//! A negative, fractional or `null` count degrades to the nearest valid
//! value instead of failing the whole batch. Values of the wrong JSON type
//! (strings, arrays, objects) are still rejected.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

fn number_or_null<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
            Err(D::Error::custom("expected a number"))
        }
    }
}

pub fn clamp_count(v: f64, max: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        0.0
    } else if v >= max {
        max
    } else {
        v.floor()
    }
}

pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = number_or_null(deserializer)?.unwrap_or(0.0);
    Ok(clamp_count(v, u32::MAX as f64) as u32)
}

pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = number_or_null(deserializer)?;
    Ok(v.map(|v| clamp_count(v, u32::MAX as f64) as u32))
}

pub fn loot<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = number_or_null(deserializer)?.unwrap_or(0.0);
    Ok(clamp_count(v, u64::MAX as f64) as u64)
}

/// Star counts saturate at `u8::MAX`; the calculators clamp to 0..=3 and
/// flag the record.
pub fn stars<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let v = number_or_null(deserializer)?.unwrap_or(0.0);
    Ok(clamp_count(v, u8::MAX as f64) as u8)
}

/// Rates keep out-of-range values so the capital calculator can flag them.
pub fn rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_or_null(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/lenient.rs"]
mod tests;
