//! Interpreter: evaluates sentences of a tiny language, here Roman numerals.
//!
//! The grammar is the seven-symbol table below. Evaluation is a single
//! left-to-right pass carrying the value of the previous symbol. A symbol
//! larger than its predecessor means the predecessor should have been
//! subtracted, so the pass undoes the earlier addition and subtracts it.
//!
//! The interpreter is lenient: sequences a strict grammar would reject
//! (`"IIV"`, `"VX"`) are still evaluated by the same arithmetic rule.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Symbol table, fixed for the whole process.
pub const SYMBOL_TABLE: [(char, u64); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("invalid symbol {symbol:?} at position {position} in {text:?}")]
    InvalidSymbol {
        text: String,
        symbol: char,
        position: usize,
    },
}

impl InterpretError {
    /// The full input that failed to parse.
    pub fn text(&self) -> &str {
        match self {
            InterpretError::InvalidSymbol { text, .. } => text,
        }
    }
}

pub fn symbol_value(symbol: char) -> Option<u64> {
    SYMBOL_TABLE
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|&(_, value)| value)
}

/// Convert a Roman numeral into its value.
///
/// Every character is checked against [`SYMBOL_TABLE`] before anything is
/// accumulated, so a bad symbol anywhere fails the whole call.
///
/// ```
/// use design_patterns::behavioral::interpreter::interpret;
///
/// assert_eq!(interpret("MCMXCIX"), Ok(1999));
/// assert!(interpret("MCMZ").is_err());
/// ```
pub fn interpret(text: &str) -> Result<u64, InterpretError> {
    let values = text
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            symbol_value(symbol).ok_or_else(|| InterpretError::InvalidSymbol {
                text: text.to_string(),
                symbol,
                position,
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let mut total: u64 = 0;
    let mut previous: Option<u64> = None;

    for num in values {
        match previous {
            Some(prev) if prev < num => {
                // Each symbol is at least twice any smaller one, so this never underflows.
                total = total + num - prev * 2;
            }
            _ => total += num,
        }
        previous = Some(num);
    }

    debug!(input = text, value = total, "interpreted roman numeral");
    Ok(total)
}

/// Stateless interpreter handle; all instances share [`SYMBOL_TABLE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RomanNumeralInterpreter;

impl RomanNumeralInterpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn interpret(&self, text: &str) -> Result<u64, InterpretError> {
        interpret(text)
    }
}

/// A parsed numeral together with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanNumeral {
    text: String,
    value: u64,
}

impl RomanNumeral {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for RomanNumeral {
    type Err = InterpretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = interpret(s)?;
        Ok(Self {
            text: s.to_string(),
            value,
        })
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.text, self.value)
    }
}

pub fn demo() -> Vec<String> {
    let interpreter = RomanNumeralInterpreter::new();
    ["III", "IX", "XL", "MCMXCIX", "MMMCMXCIX", "MMXQ"]
        .iter()
        .map(|text| match interpreter.interpret(text) {
            Ok(value) => format!("{text} -> {value}"),
            Err(err) => format!("{text} -> error: {err}"),
        })
        .collect()
}
