//! Command-line interface for Chancery.
//!
//! `tui` is the primary surface; `list`, `modules`, and `inventory` drive
//! the same engines headlessly.

pub mod list;
pub mod output;
pub mod tui;
