//! Invoice record model: the persisted JSON document the UI loads and saves.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{
    DepositDisplayOrder, DepositMode, DiscountType, FinancialConfiguration, FinancialResult,
    LineItem, WithholdingTaxBase,
};
use crate::money;
use crate::services::{calculate, Calculation};

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    PendingApproval,
    Approved,
    PartiallyPaid,
    FullyPaid,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::PendingApproval => "pending_approval",
            InvoiceStatus::Approved => "approved",
            InvoiceStatus::PartiallyPaid => "partially_paid",
            InvoiceStatus::FullyPaid => "fully_paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending_approval" => InvoiceStatus::PendingApproval,
            "approved" => InvoiceStatus::Approved,
            "partially_paid" => InvoiceStatus::PartiallyPaid,
            "fully_paid" => InvoiceStatus::FullyPaid,
            "cancelled" => InvoiceStatus::Cancelled,
            _ => InvoiceStatus::Draft,
        }
    }

    /// Approved and fully paid invoices accept no further edits.
    pub fn is_read_only(&self) -> bool {
        matches!(self, InvoiceStatus::Approved | InvoiceStatus::FullyPaid)
    }
}

/// Persisted invoice document.
///
/// Carries the backend's discount/tax/deposit fields individually plus the
/// computed summary snapshot. The in-memory [`FinancialConfiguration`] form
/// state is reconstructed from these on load via [`InvoiceRecord::config`];
/// it is not persisted as its own object. The deposit percentage lives only
/// in the computed snapshot, which is why the record has no separate input
/// field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,

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
    pub deposit_amount_input: Decimal,
    #[serde(default)]
    pub deposit_display_order: DepositDisplayOrder,

    /// Computed summary snapshot, flattened into the record's JSON.
    #[serde(flatten)]
    pub totals: FinancialResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_utc: Option<DateTime<Utc>>,
}

impl InvoiceRecord {
    /// Parse a persisted record.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(Error::MalformedRecord)
    }

    /// Serialize the record back to its persisted form.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::SerializeRecord)
    }

    /// Reconstruct the editing form state from the persisted fields. The
    /// deposit percentage comes from the computed snapshot.
    pub fn config(&self) -> FinancialConfiguration {
        FinancialConfiguration {
            special_discount_type: self.special_discount_type,
            special_discount_value: self.special_discount_value,
            has_vat: self.has_vat,
            vat_percentage: self.vat_percentage,
            has_withholding_tax: self.has_withholding_tax,
            withholding_tax_percentage: self.withholding_tax_percentage,
            withholding_tax_base: self.withholding_tax_base,
            deposit_mode: self.deposit_mode,
            deposit_percentage: self.totals.deposit_percentage,
            deposit_amount_input: self.deposit_amount_input,
            deposit_display_order: self.deposit_display_order,
        }
    }

    /// Run the calculator on the current items and configuration.
    pub fn recompute(&self) -> Calculation {
        calculate(&self.items, &self.config())
    }

    /// Fold a computed summary back into the record: the persisted totals
    /// and the normalized item list replace the in-memory edit state.
    pub fn apply(&mut self, calculation: &Calculation) {
        self.totals = calculation.result.clone();
        self.items = calculation.items.clone();
    }

    pub fn is_read_only(&self) -> bool {
        self.status.is_read_only()
    }
}
