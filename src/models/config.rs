//! Financial configuration: the discount, tax and deposit settings the
//! editing UI holds as form state. Only the computed result is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// How the special discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    #[default]
    Amount,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Amount => "amount",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "percentage" => DiscountType::Percentage,
            _ => DiscountType::Amount,
        }
    }
}

/// Base amount withholding tax is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WithholdingTaxBase {
    #[default]
    Subtotal,
    TotalAfterVat,
}

impl WithholdingTaxBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithholdingTaxBase::Subtotal => "subtotal",
            WithholdingTaxBase::TotalAfterVat => "total_after_vat",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "total_after_vat" => WithholdingTaxBase::TotalAfterVat,
            _ => WithholdingTaxBase::Subtotal,
        }
    }
}

/// How the deposit is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepositMode {
    Percentage,
    Amount,
    #[default]
    None,
}

impl DepositMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositMode::Percentage => "percentage",
            DepositMode::Amount => "amount",
            DepositMode::None => "none",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "percentage" => DepositMode::Percentage,
            "amount" => DepositMode::Amount,
            _ => DepositMode::None,
        }
    }
}

/// Where the deposit lines sit on rendered documents. Presentation only;
/// never participates in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepositDisplayOrder {
    Before,
    #[default]
    After,
}

impl DepositDisplayOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositDisplayOrder::Before => "before",
            DepositDisplayOrder::After => "after",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "before" => DepositDisplayOrder::Before,
            _ => DepositDisplayOrder::After,
        }
    }
}

/// Discount, VAT, withholding tax and deposit settings for one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialConfiguration {
    #[serde(default)]
    pub special_discount_type: DiscountType,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub special_discount_value: Decimal,
    #[serde(default)]
    pub has_vat: bool,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub vat_percentage: Decimal,
    #[serde(default)]
    pub has_withholding_tax: bool,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub withholding_tax_percentage: Decimal,
    #[serde(default)]
    pub withholding_tax_base: WithholdingTaxBase,
    #[serde(default)]
    pub deposit_mode: DepositMode,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub deposit_percentage: Decimal,
    #[serde(default, deserialize_with = "money::lenient_decimal")]
    pub deposit_amount_input: Decimal,
    #[serde(default)]
    pub deposit_display_order: DepositDisplayOrder,
}
