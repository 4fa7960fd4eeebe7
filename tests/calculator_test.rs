//! Financial calculator integration tests for invoicing-core.

mod common;

use common::{
    d, deposit_amount_config, deposit_percentage_config, discount_vat_config, flat_item,
    sized_item, withholding_config,
};
use invoicing_core::{
    calculate, DepositMode, DiscountType, FinancialConfiguration, WithholdingTaxBase,
};
use rust_decimal::Decimal;

#[test]
fn full_pipeline_with_discount_vat_and_deposit() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        deposit_mode: DepositMode::Percentage,
        deposit_percentage: d("50"),
        ..discount_vat_config("10", "7")
    };

    let result = calculate(&items, &config).result;

    assert_eq!(result.subtotal, d("1000"));
    assert_eq!(result.discount_used, d("100"));
    assert_eq!(result.effective_subtotal, d("900"));
    assert_eq!(result.vat_amount, d("63"));
    assert_eq!(result.total_amount, d("963"));
    assert_eq!(result.withholding_tax_amount, Decimal::ZERO);
    assert_eq!(result.final_total_amount, d("963"));
    assert_eq!(result.deposit_amount, d("481.50"));
    assert_eq!(result.deposit_percentage, d("50"));
    assert_eq!(result.remaining_amount, d("481.50"));
    // 481.50 / 1.07 backs the VAT out of the deposit figure.
    assert_eq!(result.deposit_amount_before_vat, d("450.00"));
}

#[test]
fn amount_discount_is_capped_at_subtotal() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        special_discount_type: DiscountType::Amount,
        special_discount_value: d("1200"),
        has_vat: true,
        vat_percentage: d("7"),
        ..Default::default()
    };

    let result = calculate(&items, &config).result;

    assert_eq!(result.discount_used, d("1000"));
    assert_eq!(result.effective_subtotal, Decimal::ZERO);
    assert_eq!(result.vat_amount, Decimal::ZERO);
    assert_eq!(result.total_amount, Decimal::ZERO);
    assert_eq!(result.final_total_amount, Decimal::ZERO);
}

#[test]
fn percentage_discount_over_100_cannot_go_below_zero() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        special_discount_type: DiscountType::Percentage,
        special_discount_value: d("150"),
        ..Default::default()
    };

    let result = calculate(&items, &config).result;

    assert_eq!(result.discount_used, d("1000"));
    assert_eq!(result.effective_subtotal, Decimal::ZERO);
    assert_eq!(
        result.effective_subtotal,
        result.subtotal - result.discount_used
    );
}

#[test]
fn withholding_tax_on_total_after_vat() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        has_withholding_tax: true,
        withholding_tax_percentage: d("3"),
        withholding_tax_base: WithholdingTaxBase::TotalAfterVat,
        ..discount_vat_config("10", "7")
    };

    let result = calculate(&items, &config).result;

    assert_eq!(result.total_amount, d("963"));
    assert_eq!(result.withholding_tax_amount, d("28.89"));
    assert_eq!(result.final_total_amount, d("934.11"));
}

#[test]
fn withholding_tax_on_subtotal_base() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        has_withholding_tax: true,
        withholding_tax_percentage: d("3"),
        withholding_tax_base: WithholdingTaxBase::Subtotal,
        ..discount_vat_config("10", "7")
    };

    let result = calculate(&items, &config).result;

    // 3% of the 900 effective subtotal, not of the 963 total.
    assert_eq!(result.withholding_tax_amount, d("27"));
    assert_eq!(result.final_total_amount, d("936"));
}

#[test]
fn withholding_disabled_ignores_percentage() {
    let items = vec![flat_item("10", "100")];
    let mut config = withholding_config("3", WithholdingTaxBase::Subtotal);
    config.has_withholding_tax = false;

    let result = calculate(&items, &config).result;

    assert_eq!(result.withholding_tax_amount, Decimal::ZERO);
    assert_eq!(result.final_total_amount, d("1000"));
}

#[test]
fn size_rows_take_precedence_over_flat_quantities() {
    let mut item = sized_item(&[("S", "3", "100"), ("M", "4", "110"), ("L", "5", "120")]);
    item.quantity = d("1");
    item.unit_price = d("9999");

    let result = calculate(&[item], &FinancialConfiguration::default()).result;

    assert_eq!(result.subtotal, d("1340"));
}

#[test]
fn negative_inputs_are_clamped_not_propagated() {
    let items = vec![
        flat_item("-5", "100"),
        sized_item(&[("S", "2", "-80"), ("M", "3", "50")]),
    ];
    let config = FinancialConfiguration {
        special_discount_type: DiscountType::Amount,
        special_discount_value: d("-40"),
        has_vat: true,
        vat_percentage: d("-7"),
        ..Default::default()
    };

    let calculation = calculate(&items, &config);
    let result = &calculation.result;

    // Only the M row survives the clamping: 3 x 50.
    assert_eq!(result.subtotal, d("150"));
    assert_eq!(result.discount_used, Decimal::ZERO);
    assert_eq!(result.vat_amount, Decimal::ZERO);
    assert_eq!(result.final_total_amount, d("150"));

    // The returned items are the normalized copies the pipeline used.
    assert_eq!(calculation.items[0].quantity, Decimal::ZERO);
    assert_eq!(calculation.items[1].size_rows[0].unit_price, Decimal::ZERO);
}

#[test]
fn deposit_amount_mode_back_computes_percentage() {
    let items = vec![flat_item("10", "100")];
    let config = FinancialConfiguration {
        has_vat: true,
        vat_percentage: d("7"),
        special_discount_type: DiscountType::Percentage,
        special_discount_value: d("10"),
        ..deposit_amount_config("200")
    };

    let result = calculate(&items, &config).result;

    assert_eq!(result.final_total_amount, d("963"));
    assert_eq!(result.deposit_amount, d("200"));
    assert_eq!(result.remaining_amount, d("763"));

    // Re-applying the back-computed percentage reproduces the amount to the
    // cent.
    let reapplied = FinancialConfiguration {
        deposit_mode: DepositMode::Percentage,
        deposit_percentage: result.deposit_percentage,
        deposit_amount_input: Decimal::ZERO,
        ..config
    };
    let second = calculate(&items, &reapplied).result;
    assert!((second.deposit_amount - result.deposit_amount).abs() <= d("0.01"));
}

#[test]
fn deposit_amount_mode_is_capped_at_final_total() {
    let items = vec![flat_item("10", "100")];
    let config = deposit_amount_config("2000");

    let result = calculate(&items, &config).result;

    assert_eq!(result.deposit_amount, d("1000"));
    assert_eq!(result.deposit_percentage, d("100"));
    assert_eq!(result.remaining_amount, Decimal::ZERO);
}

#[test]
fn deposit_percentage_is_clamped_to_100() {
    let items = vec![flat_item("10", "100")];
    let config = deposit_percentage_config("130");

    let result = calculate(&items, &config).result;

    assert_eq!(result.deposit_percentage, d("100"));
    assert_eq!(result.deposit_amount, d("1000"));
    assert_eq!(result.remaining_amount, Decimal::ZERO);
}

#[test]
fn deposit_without_vat_keeps_before_vat_figure_equal() {
    let items = vec![flat_item("10", "100")];
    let config = deposit_percentage_config("50");

    let result = calculate(&items, &config).result;

    assert_eq!(result.deposit_amount, d("500"));
    assert_eq!(result.deposit_amount_before_vat, d("500"));
}

#[test]
fn zero_final_total_yields_zero_deposit_percentage() {
    let items: Vec<invoicing_core::LineItem> = Vec::new();
    let config = deposit_amount_config("250");

    let result = calculate(&items, &config).result;

    assert_eq!(result.subtotal, Decimal::ZERO);
    assert_eq!(result.deposit_amount, Decimal::ZERO);
    assert_eq!(result.deposit_percentage, Decimal::ZERO);
    assert_eq!(result.remaining_amount, Decimal::ZERO);
}

#[test]
fn line_amounts_are_rounded_per_item() {
    // 3 x 0.335 = 1.005, which must round to 1.01 before entering the
    // subtotal; deferring the rounding would give 1.00.
    let items = vec![flat_item("3", "0.335"), flat_item("1", "0.004")];

    let result = calculate(&items, &FinancialConfiguration::default()).result;

    assert_eq!(result.subtotal, d("1.01"));
}

#[test]
fn calculation_is_deterministic() {
    let items = vec![
        flat_item("7", "13.37"),
        sized_item(&[("S", "2", "80"), ("M", "3", "85.50")]),
    ];
    let config = FinancialConfiguration {
        has_withholding_tax: true,
        withholding_tax_percentage: d("3"),
        withholding_tax_base: WithholdingTaxBase::TotalAfterVat,
        deposit_mode: DepositMode::Percentage,
        deposit_percentage: d("30"),
        ..discount_vat_config("5", "7")
    };

    let first = calculate(&items, &config);
    let second = calculate(&items, &config);

    assert_eq!(first, second);
}
