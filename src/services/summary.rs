//! Document summary lines: the ordered block of labelled figures rendered on
//! invoices and quotations.
//!
//! This is the sole consumer of `deposit_display_order`; moving the deposit
//! lines around never changes any amount.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{DepositDisplayOrder, FinancialConfiguration, FinancialResult};

/// Which figure a summary line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Subtotal,
    SpecialDiscount,
    EffectiveSubtotal,
    Vat,
    TotalAmount,
    WithholdingTax,
    FinalTotal,
    Deposit,
    DepositBeforeVat,
    Remaining,
}

impl SummaryKind {
    /// Document label for this line.
    pub fn label(&self) -> &'static str {
        match self {
            SummaryKind::Subtotal => "Subtotal",
            SummaryKind::SpecialDiscount => "Special discount",
            SummaryKind::EffectiveSubtotal => "Subtotal after discount",
            SummaryKind::Vat => "VAT",
            SummaryKind::TotalAmount => "Total",
            SummaryKind::WithholdingTax => "Withholding tax",
            SummaryKind::FinalTotal => "Grand total",
            SummaryKind::Deposit => "Deposit",
            SummaryKind::DepositBeforeVat => "Deposit (before VAT)",
            SummaryKind::Remaining => "Remaining balance",
        }
    }
}

/// One labelled line on the document summary block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub kind: SummaryKind,
    pub amount: Decimal,
}

impl SummaryLine {
    fn new(kind: SummaryKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }
}

/// Build the ordered summary block for a computed result.
///
/// Optional lines (discount, VAT, withholding, deposit) appear only when
/// non-zero; subtotal, grand total and remaining balance always appear. The
/// deposit lines sit before or after the grand-total line according to
/// `deposit_display_order`.
pub fn summary_lines(
    result: &FinancialResult,
    config: &FinancialConfiguration,
) -> Vec<SummaryLine> {
    let mut lines = vec![SummaryLine::new(SummaryKind::Subtotal, result.subtotal)];

    if result.discount_used > Decimal::ZERO {
        lines.push(SummaryLine::new(
            SummaryKind::SpecialDiscount,
            result.discount_used,
        ));
        lines.push(SummaryLine::new(
            SummaryKind::EffectiveSubtotal,
            result.effective_subtotal,
        ));
    }

    if result.vat_amount > Decimal::ZERO {
        lines.push(SummaryLine::new(SummaryKind::Vat, result.vat_amount));
        lines.push(SummaryLine::new(SummaryKind::TotalAmount, result.total_amount));
    }

    if result.withholding_tax_amount > Decimal::ZERO {
        lines.push(SummaryLine::new(
            SummaryKind::WithholdingTax,
            result.withholding_tax_amount,
        ));
    }

    let mut deposit_lines = Vec::new();
    if result.deposit_amount > Decimal::ZERO {
        deposit_lines.push(SummaryLine::new(SummaryKind::Deposit, result.deposit_amount));
        if result.deposit_amount_before_vat != result.deposit_amount {
            deposit_lines.push(SummaryLine::new(
                SummaryKind::DepositBeforeVat,
                result.deposit_amount_before_vat,
            ));
        }
    }

    if config.deposit_display_order == DepositDisplayOrder::Before {
        lines.extend(deposit_lines.clone());
        deposit_lines.clear();
    }
    lines.push(SummaryLine::new(
        SummaryKind::FinalTotal,
        result.final_total_amount,
    ));
    lines.extend(deposit_lines);

    lines.push(SummaryLine::new(
        SummaryKind::Remaining,
        result.remaining_amount,
    ));

    lines
}
