use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Monetary amount as submitted by a client.
///
/// Accepts a JSON number or a numeric string (`1500`, `1500.5`, `"1500"`).
/// Range checks happen in [`Amount::validate`] so that the error can name
/// the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    /// Amounts must be finite and non-negative
    pub fn validate(self, field: &'static str) -> Result<f64> {
        if !self.0.is_finite() {
            return Err(AppError::invalid_field(field, "must be a finite number"));
        }

        if self.0 < 0.0 {
            return Err(AppError::invalid_field(
                field,
                format!("cannot be negative, got {}", self.0),
            ));
        }

        Ok(self.0)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Amount, E> {
        v.trim()
            .parse::<f64>()
            .map(Amount)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}
