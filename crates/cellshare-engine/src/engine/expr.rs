//! Single-operator arithmetic for new cell values.
//!
//! An expression is either a bare numeric literal (`"7"`, `"2.5"`) or two
//! literals joined by exactly one of `+ - * /` (`"3+4"`, `"10 / 4"`).
//! There is no precedence, grouping or chaining: the text is split once at the
//! chosen operator and both halves must parse as `f64`.
//!
//! How the operator is chosen depends on the [`OperatorRule`]. The default,
//! [`OperatorRule::Priority`], checks the operators in the fixed order
//! `+`, `-`, `*`, `/` and uses the first one present anywhere in the text, so
//! `"2*3+1"` is read as `"2*3" + "1"` and fails to parse.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Scan order used by [`OperatorRule::Priority`].
    pub const PRIORITY: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Operator> {
        Operator::PRIORITY.into_iter().find(|op| op.symbol() == c)
    }

    /// Apply the operator. Division by zero follows IEEE rules (inf or NaN).
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// How [`eval_expression`] picks the operator to split on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRule {
    /// First operator found in the order `+ - * /`, wherever it appears.
    #[default]
    Priority,
    /// Operator character that appears first in the text. A sign at the very
    /// start, or right after an exponent marker (`1e-5`), belongs to the
    /// operand it precedes.
    Leftmost,
}

impl FromStr for OperatorRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "priority" => Ok(OperatorRule::Priority),
            "leftmost" => Ok(OperatorRule::Leftmost),
            other => Err(format!(
                "Unknown operator rule: {} (expected priority or leftmost)",
                other
            )),
        }
    }
}

impl fmt::Display for OperatorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorRule::Priority => write!(f, "priority"),
            OperatorRule::Leftmost => write!(f, "leftmost"),
        }
    }
}

/// Locate the operator and its byte offset according to `rule`.
fn find_operator(input: &str, rule: OperatorRule) -> Option<(Operator, usize)> {
    match rule {
        OperatorRule::Priority => Operator::PRIORITY
            .into_iter()
            .find_map(|op| input.find(op.symbol()).map(|idx| (op, idx))),
        OperatorRule::Leftmost => {
            let mut prev = None;
            input.char_indices().find_map(|(idx, c)| {
                let before = prev.replace(c);
                let op = Operator::from_symbol(c)?;
                match before {
                    None => None,
                    Some('e' | 'E') if matches!(op, Operator::Add | Operator::Sub) => None,
                    Some(_) => Some((op, idx)),
                }
            })
        }
    }
}

fn parse_literal(text: &str) -> Result<f64, ExprError> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| ExprError::InvalidNumber(text.to_string()))
}

/// Evaluate an expression to the value that should be written into a cell.
pub fn eval_expression(input: &str, rule: OperatorRule) -> Result<f64, ExprError> {
    let input = input.trim();
    match find_operator(input, rule) {
        Some((op, idx)) => {
            // Operator symbols are single-byte ASCII.
            let lhs = parse_literal(&input[..idx])?;
            let rhs = parse_literal(&input[idx + 1..])?;
            Ok(op.apply(lhs, rhs))
        }
        None => parse_literal(input),
    }
}
