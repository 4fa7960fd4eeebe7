//! Shared helpers for invoicing-core tests.

#![allow(dead_code)]

use std::str::FromStr;

use invoicing_core::{
    DepositMode, DiscountType, FinancialConfiguration, LineItem, SizeRow, WithholdingTaxBase,
};
use rust_decimal::Decimal;

/// Parse a decimal literal.
pub fn d(value: &str) -> Decimal {
    Decimal::from_str(value).expect("decimal literal")
}

/// A flat-priced line item.
pub fn flat_item(quantity: &str, unit_price: &str) -> LineItem {
    LineItem {
        name: "Polo shirt".to_string(),
        pattern: "PL-204".to_string(),
        fabric_type: "Cotton pique".to_string(),
        color: "Navy".to_string(),
        quantity: d(quantity),
        unit_price: d(unit_price),
        ..Default::default()
    }
}

/// A size-run line item; rows are `(size, quantity, unit_price)`.
pub fn sized_item(rows: &[(&str, &str, &str)]) -> LineItem {
    LineItem {
        name: "Work uniform".to_string(),
        pattern: "WU-11".to_string(),
        fabric_type: "Poly-cotton twill".to_string(),
        color: "Grey".to_string(),
        size_rows: rows
            .iter()
            .map(|(size, quantity, unit_price)| SizeRow {
                size: size.to_string(),
                quantity: d(quantity),
                unit_price: d(unit_price),
                notes: String::new(),
            })
            .collect(),
        ..Default::default()
    }
}

/// Configuration with a percentage discount and VAT.
pub fn discount_vat_config(discount_pct: &str, vat_pct: &str) -> FinancialConfiguration {
    FinancialConfiguration {
        special_discount_type: DiscountType::Percentage,
        special_discount_value: d(discount_pct),
        has_vat: true,
        vat_percentage: d(vat_pct),
        ..Default::default()
    }
}

/// Configuration with withholding tax enabled.
pub fn withholding_config(pct: &str, base: WithholdingTaxBase) -> FinancialConfiguration {
    FinancialConfiguration {
        has_withholding_tax: true,
        withholding_tax_percentage: d(pct),
        withholding_tax_base: base,
        ..Default::default()
    }
}

/// Configuration with a percentage-mode deposit.
pub fn deposit_percentage_config(pct: &str) -> FinancialConfiguration {
    FinancialConfiguration {
        deposit_mode: DepositMode::Percentage,
        deposit_percentage: d(pct),
        ..Default::default()
    }
}

/// Configuration with an amount-mode deposit.
pub fn deposit_amount_config(amount: &str) -> FinancialConfiguration {
    FinancialConfiguration {
        deposit_mode: DepositMode::Amount,
        deposit_amount_input: d(amount),
        ..Default::default()
    }
}
