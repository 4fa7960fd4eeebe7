//! Invoice financial calculation.
//!
//! A pure pipeline from line items and financial configuration to a fully
//! resolved [`FinancialResult`]. Every stage rounds to 2 decimal places
//! before the next stage consumes it; cent-level parity with the persisted
//! totals depends on that ordering, so none of the intermediate rounding can
//! be deferred to the end.

use rust_decimal::Decimal;
use tracing::{instrument, trace};

use crate::models::{
    DepositMode, DiscountType, FinancialConfiguration, FinancialResult, LineItem,
    WithholdingTaxBase,
};
use crate::money;

/// Output of [`calculate`]: the resolved summary plus the normalized item
/// list the pipeline actually used, so callers can verify it against their
/// own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub result: FinancialResult,
    pub items: Vec<LineItem>,
}

/// Resolve the financial summary for a set of line items.
///
/// Total over its input domain: negative inputs are clamped to zero, the
/// discount is capped at the subtotal and an amount-mode deposit at the
/// final total, so no field of the result is ever negative. Safe to call on
/// every keystroke; no side effects, no I/O.
#[instrument(level = "trace", skip_all, fields(item_count = items.len()))]
pub fn calculate(items: &[LineItem], config: &FinancialConfiguration) -> Calculation {
    let items: Vec<LineItem> = items.iter().map(LineItem::normalized).collect();

    let subtotal = money::round(items.iter().map(LineItem::line_amount).sum());

    let discount_raw = match config.special_discount_type {
        DiscountType::Amount if config.special_discount_value > Decimal::ZERO => {
            money::round(config.special_discount_value)
        }
        DiscountType::Percentage if config.special_discount_value > Decimal::ZERO => {
            money::percent_of(subtotal, config.special_discount_value)
        }
        _ => Decimal::ZERO,
    };
    // Capped in both modes so the invoice can never be discounted below zero
    // and `effective_subtotal == subtotal - discount_used` holds exactly.
    let discount_used = discount_raw.min(subtotal);
    let effective_subtotal = subtotal - discount_used;

    let vat_percentage = money::clamp_non_negative(config.vat_percentage);
    let vat_amount = if config.has_vat {
        money::percent_of(effective_subtotal, vat_percentage)
    } else {
        Decimal::ZERO
    };
    let total_amount = money::round(effective_subtotal + vat_amount);

    let withholding_base = match config.withholding_tax_base {
        WithholdingTaxBase::TotalAfterVat => total_amount,
        WithholdingTaxBase::Subtotal => effective_subtotal,
    };
    let withholding_tax_amount = if config.has_withholding_tax {
        money::percent_of(
            withholding_base,
            money::clamp_non_negative(config.withholding_tax_percentage),
        )
    } else {
        Decimal::ZERO
    };
    let final_total_amount = money::clamp_non_negative(money::round(
        total_amount - withholding_tax_amount,
    ));

    let (deposit_amount, deposit_percentage) = match config.deposit_mode {
        DepositMode::Amount if config.deposit_amount_input > Decimal::ZERO => {
            let amount = money::round(config.deposit_amount_input).min(final_total_amount);
            // Back-compute the equivalent percentage at full precision; the
            // deposit amount stays the source of truth and round-tripping
            // through percentage mode must land within a cent.
            let percentage = if final_total_amount > Decimal::ZERO {
                amount / final_total_amount * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            (amount, percentage)
        }
        DepositMode::Percentage if config.deposit_percentage > Decimal::ZERO => {
            let percentage = config.deposit_percentage.min(Decimal::ONE_HUNDRED);
            (money::percent_of(final_total_amount, percentage), percentage)
        }
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    // Display-only pre-VAT deposit figure for documents; never fed back into
    // the arithmetic.
    let deposit_amount_before_vat = if config.has_vat && vat_amount > Decimal::ZERO {
        money::round(deposit_amount / (Decimal::ONE + vat_percentage / Decimal::ONE_HUNDRED))
    } else {
        deposit_amount
    };

    let remaining_amount =
        money::clamp_non_negative(money::round(final_total_amount - deposit_amount));

    trace!(%subtotal, %final_total_amount, %remaining_amount, "financial summary resolved");

    Calculation {
        result: FinancialResult {
            subtotal,
            discount_used,
            effective_subtotal,
            vat_amount,
            total_amount,
            withholding_tax_amount,
            final_total_amount,
            deposit_amount,
            deposit_amount_before_vat,
            deposit_percentage,
            remaining_amount,
        },
        items,
    }
}
