//! invoicing-core: Financial calculation and validation core for garment
//! production invoicing.
//!
//! The crate turns a set of priced work items and a tax/discount/deposit
//! configuration into a fully resolved financial summary (subtotal, special
//! discount, VAT, withholding tax, deposit and remaining balance), all in
//! [`rust_decimal::Decimal`] rounded to 2 places at every stage so totals
//! match what the backend persists to the cent.
//!
//! Entry points:
//! - [`calculate`] — the pure calculation pipeline,
//! - [`validate`] — blocking errors, non-blocking warnings and read-only
//!   detection for the same inputs,
//! - [`summary_lines`] — document-ready presentation rows,
//! - [`InvoiceRecord`] — the persisted JSON document tying them together.

pub mod error;
pub mod models;
pub mod money;
pub mod services;

pub use error::Error;
pub use models::{
    DepositDisplayOrder, DepositMode, DiscountType, FinancialConfiguration, FinancialResult,
    InvoiceRecord, InvoiceStatus, LineItem, SizeRow, WithholdingTaxBase,
};
pub use services::{
    calculate, summary_lines, validate, Calculation, Issue, IssueCode, SummaryKind, SummaryLine,
    ValidationReport,
};
