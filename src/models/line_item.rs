//! Line item model: one priced work item on an invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

fn default_unit() -> String {
    "piece".to_string()
}

/// One size/quantity/price row inside a line item.
///
/// Garment orders are usually priced per size run (S/M/L/XL), each size with
/// its own quantity and sometimes its own unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRow {
    #[serde(default)]
    pub size: String,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub unit_price: Decimal,
    #[serde(default)]
    pub notes: String,
}

impl SizeRow {
    /// Row amount with negative inputs clamped to zero.
    pub fn amount(&self) -> Decimal {
        money::clamp_non_negative(self.quantity) * money::clamp_non_negative(self.unit_price)
    }
}

/// Line item on an invoice.
///
/// When `size_rows` is non-empty the effective quantity and amount are the
/// sums over the rows; the flat `quantity`/`unit_price` pair applies
/// otherwise. `requested_quantity` carries the quantity originally asked for
/// on the sales quotation, kept separate so validation can flag divergence
/// between what was quoted and what is being invoiced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub fabric_type: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub size_rows: Vec<SizeRow>,
    #[serde(
        default,
        deserialize_with = "money::lenient_opt_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_quantity: Option<Decimal>,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            pattern: String::new(),
            fabric_type: String::new(),
            color: String::new(),
            unit: default_unit(),
            quantity: Decimal::ZERO,
            unit_price: Decimal::ZERO,
            size_rows: Vec::new(),
            requested_quantity: None,
        }
    }
}

impl LineItem {
    /// Whether this item is priced per size run.
    pub fn has_size_rows(&self) -> bool {
        !self.size_rows.is_empty()
    }

    /// Effective quantity: sum over size rows when present, flat quantity
    /// otherwise. Negative quantities count as zero.
    pub fn effective_quantity(&self) -> Decimal {
        if self.has_size_rows() {
            self.size_rows
                .iter()
                .map(|row| money::clamp_non_negative(row.quantity))
                .sum()
        } else {
            money::clamp_non_negative(self.quantity)
        }
    }

    /// Line amount rounded to money, with negative inputs clamped to zero.
    pub fn line_amount(&self) -> Decimal {
        let amount = if self.has_size_rows() {
            self.size_rows.iter().map(SizeRow::amount).sum()
        } else {
            money::clamp_non_negative(self.quantity) * money::clamp_non_negative(self.unit_price)
        };
        money::round(amount)
    }

    /// Copy of this item with every negative numeric clamped to zero.
    pub fn normalized(&self) -> LineItem {
        LineItem {
            quantity: money::clamp_non_negative(self.quantity),
            unit_price: money::clamp_non_negative(self.unit_price),
            size_rows: self
                .size_rows
                .iter()
                .map(|row| SizeRow {
                    size: row.size.clone(),
                    quantity: money::clamp_non_negative(row.quantity),
                    unit_price: money::clamp_non_negative(row.unit_price),
                    notes: row.notes.clone(),
                })
                .collect(),
            requested_quantity: self.requested_quantity.map(money::clamp_non_negative),
            ..self.clone()
        }
    }
}
