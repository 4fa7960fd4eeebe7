//! Money arithmetic and lenient numeric decoding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Round to 2 decimal places, half away from zero.
///
/// The backend rounds money half-up, not banker's style, so `round_dp`'s
/// default midpoint strategy would drift on .005 boundaries.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a value to a non-negative floor.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Rounded percentage of a base amount.
pub fn percent_of(base: Decimal, percentage: Decimal) -> Decimal {
    round(base * percentage / Decimal::ONE_HUNDRED)
}

/// Raw shape of a numeric field in a persisted record: the backend has sent
/// both JSON numbers and numeric strings for the same field over time.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumeric {
    Decimal(Decimal),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Deserialize a numeric field leniently: accepts a JSON number, a numeric
/// string, or null, and coerces anything unparseable to zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumeric>::deserialize(deserializer)? {
        Some(RawNumeric::Decimal(value)) => value,
        Some(RawNumeric::Text(text)) => text.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    })
}

/// Like [`lenient_decimal`] but for optional fields: absent, null or
/// unparseable values become `None` instead of zero.
pub fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumeric>::deserialize(deserializer)? {
        Some(RawNumeric::Decimal(value)) => Some(value),
        Some(RawNumeric::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
