//! Library backing the `locale-catalog` binary.

pub mod commands;
pub mod error;
pub mod ui;
