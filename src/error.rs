use thiserror::Error;

use crate::engine::ScriptError;

/// Errors that can occur while creating a formatter or formatting SQL.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The SQL input is empty or contains only whitespace.
    #[error("empty SQL string")]
    EmptySql,

    /// The SQL input exceeds [`MAX_SQL_LEN`](crate::MAX_SQL_LEN) bytes.
    #[error("SQL string too large")]
    SqlTooLarge,

    /// The formatter has been closed; create a new one to keep formatting.
    #[error("formatter is closed")]
    FormatterClosed,

    /// The script engine context could not be constructed.
    #[error("creating script engine: {0}")]
    EngineInit(#[source] ScriptError),

    /// The embedded formatter bundle or its adapter was rejected by the
    /// engine. The handle is unusable and should be discarded.
    #[error("loading formatter bundle: {0}")]
    BundleLoad(#[source] ScriptError),

    /// The format options could not be encoded for the engine boundary.
    #[error("serializing format options: {0}")]
    OptionsSerialize(#[from] serde_json::Error),

    /// The formatting routine raised an error inside the engine, typically
    /// because it rejected the SQL input. Never retried.
    #[error("calling formatter entry point: {0}")]
    EngineCall(#[source] ScriptError),

    /// The engine returned something other than text. This indicates a
    /// broken bundle/adapter integration rather than bad input.
    #[error("formatter returned {0} instead of a string")]
    UnexpectedResultType(&'static str),
}
