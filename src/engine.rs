//! The boundary between the wrapper and the embedded script engine.
//!
//! The formatter only ever needs two capabilities from an engine: evaluate a
//! piece of source text, and call a previously defined function by name with
//! positional string arguments. [`ScriptEngine`] captures exactly that, so
//! the concrete engine stays swappable (and stubbable in tests).

use rhai::{Dynamic, Engine, EvalAltResult, Map, Position, Scope, AST};
use thiserror::Error;

/// An error raised by the embedded script engine, carried as the source of
/// the corresponding [`FormatError`](crate::FormatError) variant.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ScriptError(pub(crate) String);

/// A value returned across the engine boundary.
#[derive(Debug)]
pub(crate) enum ScriptValue {
    /// The call produced text.
    Text(String),
    /// The call produced something else; carries the engine's name for the
    /// actual type.
    Other(&'static str),
}

/// Minimal capability interface over an embedded, single-threaded script
/// engine. Implementations are not required to be thread-safe; the formatter
/// serializes all access behind its own lock.
pub(crate) trait ScriptEngine: Send {
    /// Evaluates a piece of source text in the engine context. Definitions
    /// persist for later [`call`](Self::call)s.
    fn eval(&mut self, source: &str) -> Result<(), ScriptError>;

    /// Calls a named function with positional string arguments.
    fn call(&mut self, name: &str, args: Vec<String>) -> Result<ScriptValue, ScriptError>;
}

/// [`ScriptEngine`] backed by a Rhai engine context.
///
/// Each instance owns an isolated `Engine` plus the accumulated `AST` of
/// everything evaluated so far; evaluations merge into that AST so their
/// functions remain callable.
pub(crate) struct RhaiEngine {
    engine: Engine,
    scope: Scope<'static>,
    ast: AST,
}

impl RhaiEngine {
    /// Creates a fresh engine context with the host-side helpers the
    /// formatter's adapter snippet relies on.
    pub(crate) fn new() -> Result<Self, ScriptError> {
        let mut engine = Engine::new();
        // The embedded bundle is a trusted asset, not untrusted input; lift
        // the default expression-depth guard so it compiles under newer rhai
        // releases whose defaults are tighter than the bundle was written for.
        engine.set_max_expr_depths(0, 0);
        engine.register_fn("parse_options", parse_options);

        Ok(Self {
            engine,
            scope: Scope::new(),
            ast: AST::empty(),
        })
    }
}

impl ScriptEngine for RhaiEngine {
    fn eval(&mut self, source: &str) -> Result<(), ScriptError> {
        let ast = self
            .engine
            .compile(source)
            .map_err(|e| ScriptError(e.to_string()))?;
        self.engine
            .run_ast_with_scope(&mut self.scope, &ast)
            .map_err(|e| ScriptError(e.to_string()))?;
        self.ast = self.ast.merge(&ast);
        Ok(())
    }

    fn call(&mut self, name: &str, args: Vec<String>) -> Result<ScriptValue, ScriptError> {
        let args: Vec<Dynamic> = args.into_iter().map(Dynamic::from).collect();
        let result = self
            .engine
            .call_fn::<Dynamic>(&mut self.scope, &self.ast, name, args)
            .map_err(|e| ScriptError(e.to_string()))?;

        Ok(match result.into_string() {
            Ok(text) => ScriptValue::Text(text),
            Err(type_name) => ScriptValue::Other(type_name),
        })
    }
}

/// Host function exposed to scripts as `parse_options(json)`.
///
/// Parses a JSON object into a script map so the adapter can hand typed
/// options to the bundle's entry point.
fn parse_options(json: &str) -> Result<Map, Box<EvalAltResult>> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        Box::new(EvalAltResult::ErrorRuntime(
            format!("invalid options JSON: {e}").into(),
            Position::NONE,
        ))
    })?;
    let dynamic = rhai::serde::to_dynamic(&value)?;
    dynamic.try_cast::<Map>().ok_or_else(|| {
        Box::new(EvalAltResult::ErrorRuntime(
            "options JSON must be an object".into(),
            Position::NONE,
        ))
    })
}
