//! # Design Patterns
//!
//! Runnable examples of the classic object-oriented design patterns, each in
//! its own module with a `demo()` that returns a transcript of what happened.
//!
//! ## Patterns Covered
//!
//! 1. **Behavioral** - chain of responsibility, command, interpreter, iterator,
//!    mediator, memento, observer, state, strategy, template method, visitor
//! 2. **Creational** - abstract factory, builder, factory method, prototype, singleton
//! 3. **Structural** - adapter, bridge, composite, decorator, facade, flyweight, proxy
//! 4. **Algorithms** - depth-first and breadth-first tree traversal
//!
//! The interpreter is the centerpiece: [`interpret`] turns a Roman numeral
//! into its value.
//!
//! ```
//! assert_eq!(design_patterns::interpret("MCMXCIV"), Ok(1994));
//! ```
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- demo decorator --config patterns.toml
//! cargo run --bin patterns -- demo --all
//! cargo run --bin patterns -- roman XLII MCMXCIX
//! cargo run --bin roman -- MMXXIV
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums per module, aggregated in [`error::CatalogError`]
//! - `serde` / `toml` / `serde_json` - configuration files
//! - `tracing` - events from the demos, installed by [`logging::init`]
//! - `clap` / `colored` - the command-line front end
//! - `dashmap` / `lazy_static` - shared state in flyweight and singleton
//! - `flate2` / `sha2` - the decorator's compression and encryption layers

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;
pub mod traversal;

pub use behavioral::interpreter::{interpret, InterpretError, RomanNumeral};
pub use catalog::{Category, Pattern};
pub use config::CatalogConfig;
pub use error::CatalogError;
