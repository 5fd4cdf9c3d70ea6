//! cellshare_engine - Grid value types and cell expression evaluation.

pub mod engine;

pub use engine::{
    CellPos, ExprError, GRID_SIZE, Grid, Operator, OperatorRule, empty_grid, eval_expression,
    format_number,
};
