//! Strategy: interchangeable arithmetic operations behind one trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("unknown action '{0}', expected 1 (add), 2 (subtract) or 3 (multiply)")]
    UnknownAction(String),
    #[error("{op} of {a} and {b} overflows")]
    Overflow { op: Operation, a: i64, b: i64 },
}

pub trait Strategy {
    fn execute(&self, a: i64, b: i64) -> Option<i64>;
    fn operation(&self) -> Operation;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl Strategy for Add {
    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_add(b)
    }

    fn operation(&self) -> Operation {
        Operation::Add
    }
}

impl Strategy for Subtract {
    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_sub(b)
    }

    fn operation(&self) -> Operation {
        Operation::Subtract
    }
}

impl Strategy for Multiply {
    fn execute(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_mul(b)
    }

    fn operation(&self) -> Operation {
        Operation::Multiply
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Menu numbering used by the interactive calculator: 1, 2, 3.
    pub fn from_menu(action: &str) -> Result<Self, StrategyError> {
        match action.trim() {
            "1" => Ok(Operation::Add),
            "2" => Ok(Operation::Subtract),
            "3" => Ok(Operation::Multiply),
            other => Err(StrategyError::UnknownAction(other.to_string())),
        }
    }

    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Operation::Add => Box::new(Add),
            Operation::Subtract => Box::new(Subtract),
            Operation::Multiply => Box::new(Multiply),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" => Ok(Operation::Multiply),
            other => Operation::from_menu(other),
        }
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        self.strategy.execute(a, b).ok_or(StrategyError::Overflow {
            op: self.strategy.operation(),
            a,
            b,
        })
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Box::new(Add))
    }
}

/// Run the configured default, then every menu entry, on the same operands.
pub fn demo(default: Operation) -> Result<Vec<String>, StrategyError> {
    let (a, b) = (7, 3);
    let mut context = Context::new(default.strategy());
    let mut lines = vec![format!("default {default}: {}", context.execute_strategy(a, b)?)];

    for action in ["1", "2", "3"] {
        let op = Operation::from_menu(action)?;
        context.set_strategy(op.strategy());
        lines.push(format!("{op} of {a} and {b} = {}", context.execute_strategy(a, b)?));
    }
    Ok(lines)
}
