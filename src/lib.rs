//! # sqlfmt
//!
//! A SQL pretty-printer. The formatting logic itself lives in an embedded
//! script bundle executed by an in-process [Rhai](https://rhai.rs) engine;
//! this crate is the thin, safe wrapper around that engine: it owns the
//! engine context, marshals SQL text and options across the boundary as
//! JSON, type-checks the result, and repairs a known spacing artifact of
//! the bundle's output.
//!
//! - Around 20 SQL dialects (generic SQL, PostgreSQL, MySQL, BigQuery, …)
//! - Keyword / function / identifier / data-type casing
//! - Standard and tabular indentation, tabs or spaces
//! - Multi-statement input with configurable blank lines between statements
//!
//! ## Command-Line Tool
//!
//! This crate includes the `sqlfmt` CLI tool for formatting SQL from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install sqlfmt
//!
//! # Format SQL from stdin
//! echo 'select id,name from users' | sqlfmt
//!
//! # Format a file as PostgreSQL, lowercase keywords
//! sqlfmt query.sql --language postgresql --keyword-case lower
//! ```
//!
//! Run `sqlfmt --help` for all options.
//!
//! ## Quick Start
//!
//! For a single query, the one-shot [`format`] function is the simplest
//! entry point:
//!
//! ```rust
//! use sqlfmt::{format, FormatOptions};
//!
//! let formatted = format(
//!     "select id, name from users where active = 1",
//!     FormatOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(formatted.contains("SELECT"));
//! println!("{}", formatted);
//! ```
//!
//! ## Reusing a Formatter
//!
//! The one-shot function initializes a fresh engine context per call. When
//! formatting repeatedly, hold a [`Formatter`] instead — initialization
//! happens once, and the handle can be shared across threads (calls on one
//! handle are serialized internally):
//!
//! ```rust
//! use sqlfmt::{FormatOptions, Formatter};
//!
//! let formatter = Formatter::new().unwrap();
//! for query in ["select 1", "select 2"] {
//!     let formatted = formatter.format(query, FormatOptions::default()).unwrap();
//!     println!("{}", formatted);
//! }
//! formatter.close().unwrap();
//! ```
//!
//! ## Configuration
//!
//! Formatting is controlled by [`FormatOptions`]. Every field is optional;
//! unset fields fall back to the embedded bundle's defaults:
//!
//! ```rust
//! use sqlfmt::{CaseStyle, Dialect, FormatOptions};
//!
//! let mut options = FormatOptions::default();
//! options.language = Some(Dialect::PostgreSql);
//! options.keyword_case = Some(CaseStyle::Lower);
//! options.tab_width = Some(2);
//!
//! let formatted = sqlfmt::format("SELECT ID FROM T", options).unwrap();
//! assert!(formatted.contains("select"));
//! ```

mod engine;
mod error;
mod formatter;
mod options;

pub use crate::engine::ScriptError;
pub use crate::error::FormatError;
pub use crate::formatter::{Formatter, MAX_SQL_LEN};
pub use crate::options::{
    CaseStyle, Dialect, FormatOptions, IndentStyle, LogicalOperatorNewline,
};

/// Formats a SQL string with a throwaway [`Formatter`].
///
/// Creates a formatter, performs exactly one call, and closes the handle
/// again regardless of the outcome. Convenient for sporadic use; callers
/// formatting many queries should hold a [`Formatter`] to avoid paying the
/// engine-initialization cost per call.
///
/// # Example
///
/// ```rust
/// use sqlfmt::FormatOptions;
///
/// let formatted = sqlfmt::format("select * from users", FormatOptions::default()).unwrap();
/// assert!(formatted.starts_with("SELECT"));
/// ```
pub fn format(sql: &str, options: FormatOptions) -> Result<String, FormatError> {
    let formatter = Formatter::new()?;
    let result = formatter.format(sql, options);
    // best-effort cleanup; close cannot fail and the result matters more
    let _ = formatter.close();
    result
}
