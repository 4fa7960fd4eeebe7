//! Invoice validation: blocking errors, non-blocking warnings and read-only
//! detection for the same inputs the calculator consumes.
//!
//! The calculator is defensive about bad numerics regardless; validation is
//! what reports them back to the user. Errors block saving, warnings do not,
//! and a read-only status is surfaced as a flag rather than an error so the
//! invoice can still be displayed.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{DepositMode, DiscountType, FinancialConfiguration, InvoiceStatus, LineItem};

/// Machine-readable validation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    NegativeValue,
    QuantityMismatch,
    HighPercentage,
    ReadOnlyState,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::NegativeValue => "negative_value",
            IssueCode::QuantityMismatch => "quantity_mismatch",
            IssueCode::HighPercentage => "high_percentage",
            IssueCode::ReadOnlyState => "read_only_state",
        }
    }
}

/// A single validation finding, tied to the field path that produced it so
/// the UI layer can attach it to the right input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating an invoice's form state.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ValidationReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub is_read_only: bool,
}

impl ValidationReport {
    /// Whether the save action must be blocked.
    pub fn blocks_save(&self) -> bool {
        self.is_read_only || !self.errors.is_empty()
    }

    /// Every issue blocking the save, including a synthesized read-only
    /// issue when the status forbids mutation.
    pub fn save_blockers(&self) -> Vec<Issue> {
        let mut blockers = self.errors.clone();
        if self.is_read_only {
            blockers.push(Issue::new(
                IssueCode::ReadOnlyState,
                "status",
                "Invoice is read-only in its current status",
            ));
        }
        blockers
    }
}

/// Validate line items and financial configuration against an invoice status.
pub fn validate(
    items: &[LineItem],
    config: &FinancialConfiguration,
    status: InvoiceStatus,
) -> ValidationReport {
    let mut report = ValidationReport {
        is_read_only: status.is_read_only(),
        ..Default::default()
    };

    for (i, item) in items.iter().enumerate() {
        if item.has_size_rows() {
            for (j, row) in item.size_rows.iter().enumerate() {
                check_non_negative(
                    &mut report,
                    row.quantity,
                    format!("items[{}].sizeRows[{}].quantity", i, j),
                    "Quantity cannot be negative",
                );
                check_non_negative(
                    &mut report,
                    row.unit_price,
                    format!("items[{}].sizeRows[{}].unitPrice", i, j),
                    "Unit price cannot be negative",
                );
            }
            if let Some(requested) = item.requested_quantity {
                let invoiced = item.effective_quantity();
                if invoiced != requested {
                    report.warnings.push(Issue::new(
                        IssueCode::QuantityMismatch,
                        format!("items[{}].sizeRows", i),
                        format!(
                            "Size rows total {} but the quotation requested {}",
                            invoiced, requested
                        ),
                    ));
                }
            }
        } else {
            check_non_negative(
                &mut report,
                item.quantity,
                format!("items[{}].quantity", i),
                "Quantity cannot be negative",
            );
            check_non_negative(
                &mut report,
                item.unit_price,
                format!("items[{}].unitPrice", i),
                "Unit price cannot be negative",
            );
        }
    }

    check_non_negative(
        &mut report,
        config.special_discount_value,
        "specialDiscountValue".to_string(),
        "Discount cannot be negative",
    );
    if config.special_discount_type == DiscountType::Percentage {
        check_percentage_ceiling(
            &mut report,
            config.special_discount_value,
            "specialDiscountValue",
        );
    }

    if config.has_vat {
        check_non_negative(
            &mut report,
            config.vat_percentage,
            "vatPercentage".to_string(),
            "VAT percentage cannot be negative",
        );
        check_percentage_ceiling(&mut report, config.vat_percentage, "vatPercentage");
    }

    if config.has_withholding_tax {
        check_non_negative(
            &mut report,
            config.withholding_tax_percentage,
            "withholdingTaxPercentage".to_string(),
            "Withholding tax percentage cannot be negative",
        );
        check_percentage_ceiling(
            &mut report,
            config.withholding_tax_percentage,
            "withholdingTaxPercentage",
        );
    }

    match config.deposit_mode {
        DepositMode::Percentage => {
            check_non_negative(
                &mut report,
                config.deposit_percentage,
                "depositPercentage".to_string(),
                "Deposit percentage cannot be negative",
            );
            check_percentage_ceiling(&mut report, config.deposit_percentage, "depositPercentage");
        }
        DepositMode::Amount => {
            check_non_negative(
                &mut report,
                config.deposit_amount_input,
                "depositAmountInput".to_string(),
                "Deposit amount cannot be negative",
            );
        }
        DepositMode::None => {}
    }

    if report.blocks_save() {
        debug!(
            errors = report.errors.len(),
            is_read_only = report.is_read_only,
            "invoice validation blocks save"
        );
    }

    report
}

fn check_non_negative(
    report: &mut ValidationReport,
    value: Decimal,
    field: String,
    message: &str,
) {
    if value < Decimal::ZERO {
        report
            .errors
            .push(Issue::new(IssueCode::NegativeValue, field, message));
    }
}

fn check_percentage_ceiling(report: &mut ValidationReport, value: Decimal, field: &str) {
    if value > Decimal::ONE_HUNDRED {
        report.warnings.push(Issue::new(
            IssueCode::HighPercentage,
            field,
            format!("{} exceeds 100%", field),
        ));
    }
}
