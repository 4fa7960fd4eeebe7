//! Services module for invoicing-core.

pub mod calculator;
pub mod summary;
pub mod validator;

pub use calculator::{calculate, Calculation};
pub use summary::{summary_lines, SummaryKind, SummaryLine};
pub use validator::{validate, Issue, IssueCode, ValidationReport};
