use std::sync::LazyLock;

use log::debug;
use parking_lot::Mutex;
use regex::Regex;

use crate::engine::{RhaiEngine, ScriptEngine, ScriptValue};
use crate::error::FormatError;
use crate::options::FormatOptions;

/// Maximum accepted SQL input size, in bytes.
pub const MAX_SQL_LEN: usize = 1 << 20;

/// The embedded formatting bundle, loaded verbatim into every new handle.
static BUNDLE: &str = include_str!("../assets/sql_formatter.rhai");

/// Adapter installed after the bundle: bridges the JSON-options calling
/// convention to the bundle's `format(sql, options)` entry point.
const ADAPTER: &str = r#"
fn format_sql(sql, options_json) {
    let options = parse_options(options_json);
    format(sql, options)
}
"#;

const FORMAT_FN: &str = "format_sql";

/// Matches a space before `(` that is not at the start of a line. The
/// bundle leaves a spurious space between a word and an opening parenthesis;
/// the pattern requires a literal space after a non-whitespace character, so
/// indentation is untouched and a match can never span a line boundary.
static SPACE_BEFORE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S) \(").expect("space-before-paren pattern is valid"));

fn fix_space_before_paren(text: &str) -> String {
    SPACE_BEFORE_PAREN.replace_all(text, "${1}(").into_owned()
}

enum EngineState {
    Ready(Box<dyn ScriptEngine>),
    Closed,
}

/// A reusable SQL formatter owning one embedded script-engine context.
///
/// Creating a formatter loads the embedded formatting bundle into a fresh
/// engine context, which has a measurable cost; callers formatting more than
/// one query should keep a `Formatter` around instead of using the one-shot
/// [`format`](crate::format) function.
///
/// All calls on one handle are serialized through an internal lock (the
/// embedded engine is single-threaded), so a `Formatter` can be shared
/// across threads behind an `Arc`. Independent handles format in parallel.
///
/// # Example
///
/// ```rust
/// use sqlfmt::{FormatOptions, Formatter};
///
/// let formatter = Formatter::new().unwrap();
/// let sql = formatter
///     .format("select id from users", FormatOptions::default())
///     .unwrap();
/// assert!(sql.contains("SELECT"));
/// formatter.close().unwrap();
/// ```
pub struct Formatter {
    state: Mutex<EngineState>,
}

impl Formatter {
    /// Creates a new formatter.
    ///
    /// Allocates an engine context, evaluates the embedded bundle in it, and
    /// installs the options adapter. Any failure discards the context; no
    /// partially-initialized handle is ever returned.
    pub fn new() -> Result<Self, FormatError> {
        let mut engine = RhaiEngine::new().map_err(FormatError::EngineInit)?;
        engine.eval(BUNDLE).map_err(FormatError::BundleLoad)?;
        engine.eval(ADAPTER).map_err(FormatError::BundleLoad)?;
        debug!("formatter ready, bundle is {} bytes", BUNDLE.len());

        Ok(Self {
            state: Mutex::new(EngineState::Ready(Box::new(engine))),
        })
    }

    #[cfg(test)]
    fn with_engine(engine: Box<dyn ScriptEngine>) -> Self {
        Self {
            state: Mutex::new(EngineState::Ready(engine)),
        }
    }

    /// Formats a SQL string according to `options`.
    ///
    /// Blocks while another call on the same handle is in progress. There is
    /// no timeout: a pathological input that hangs the embedded routine
    /// hangs the calling thread.
    ///
    /// # Errors
    ///
    /// - [`FormatError::FormatterClosed`] after [`close`](Self::close).
    /// - [`FormatError::EmptySql`] / [`FormatError::SqlTooLarge`] for inputs
    ///   rejected before reaching the engine.
    /// - [`FormatError::EngineCall`] when the formatting routine fails, e.g.
    ///   on SQL it cannot parse. Calls are never retried.
    /// - [`FormatError::UnexpectedResultType`] when the engine returns
    ///   something other than text.
    pub fn format(&self, sql: &str, options: FormatOptions) -> Result<String, FormatError> {
        let mut state = self.state.lock();
        let engine = match &mut *state {
            EngineState::Ready(engine) => engine,
            EngineState::Closed => return Err(FormatError::FormatterClosed),
        };

        if sql.trim().is_empty() {
            return Err(FormatError::EmptySql);
        }
        if sql.len() > MAX_SQL_LEN {
            return Err(FormatError::SqlTooLarge);
        }

        let options_json = serde_json::to_string(&options)?;
        let result = engine
            .call(FORMAT_FN, vec![sql.to_string(), options_json])
            .map_err(FormatError::EngineCall)?;

        match result {
            ScriptValue::Text(text) => Ok(fix_space_before_paren(&text)),
            ScriptValue::Other(type_name) => Err(FormatError::UnexpectedResultType(type_name)),
        }
    }

    /// Closes the formatter, dropping its engine context.
    ///
    /// Idempotent; never fails once reached. After close, every
    /// [`format`](Self::format) call returns
    /// [`FormatError::FormatterClosed`]. Dropping the handle without calling
    /// `close` releases the context just the same; `close` exists to free
    /// the engine early while the handle is still shared.
    pub fn close(&self) -> Result<(), FormatError> {
        let mut state = self.state.lock();
        if matches!(*state, EngineState::Ready(_)) {
            *state = EngineState::Closed;
            debug!("formatter closed");
        }
        Ok(())
    }
}
