//! Domain models for invoicing-core.

mod config;
mod invoice;
mod line_item;
mod result;

pub use config::{
    DepositDisplayOrder, DepositMode, DiscountType, FinancialConfiguration, WithholdingTaxBase,
};
pub use invoice::{InvoiceRecord, InvoiceStatus};
pub use line_item::{LineItem, SizeRow};
pub use result::FinancialResult;
