//! Sheet engine API.
//!
//! - [`Grid`], [`CellPos`], [`GRID_SIZE`] - Fixed-size cell storage and bounds-checked positions
//! - [`eval_expression`] - Single-operator arithmetic used to compute new cell values
//! - [`OperatorRule`] - How the operator is located inside an expression
//! - [`format_number`] - Format cell values for display

mod expr;
mod format;
mod grid;

pub use expr::{ExprError, Operator, OperatorRule, eval_expression};
pub use format::format_number;
pub use grid::{CellPos, GRID_SIZE, Grid, empty_grid};
