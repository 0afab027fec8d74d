//! Market View Builder: pure derivation of display rows from a snapshot

pub mod builder;
pub mod columns;
pub mod format;
pub mod swap_list;
pub mod tables;

pub use builder::{build_display_rows, build_rows, build_table, build_tables, ViewInputs};
pub use columns::{above_dust, ColumnSpec, RowContext, DUST_THRESHOLD};
pub use format::PLACEHOLDER;
pub use swap_list::{swap_list_rows, SwapListRow};
pub use tables::{RowSource, TableSpec};
