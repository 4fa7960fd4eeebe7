//! Computed financial summary: the only financial state that is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// Fully resolved financial summary for an invoice.
///
/// Every monetary field is rounded to 2 decimal places at the pipeline stage
/// that produced it. `deposit_percentage` is the normalized percentage (the
/// clamped input in percentage mode, back-computed in amount mode) and
/// `deposit_amount_before_vat` is display-only; neither feeds further
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResult {
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub subtotal: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub discount_used: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub effective_subtotal: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub vat_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub withholding_tax_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub final_total_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub deposit_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub deposit_amount_before_vat: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub deposit_percentage: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub remaining_amount: Decimal,
}
