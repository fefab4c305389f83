pub mod constants;
pub mod math;

use crate::error::EvalError;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

pub type BuiltinFn = fn(&[f64]) -> f64;

/// A named numeric function with a fixed number of positional arguments.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    arity: usize,
    function: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, arity: usize, function: BuiltinFn) -> Self {
        Self {
            name,
            arity,
            function,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Runs the implementation, or fails with `ArityMismatch` without running it
    /// when `args` does not hold exactly `arity` values.
    pub fn call(&self, args: &[f64]) -> Result<f64, EvalError> {
        if args.len() != self.arity {
            return Err(EvalError::ArityMismatch(
                self.name.to_string(),
                self.arity,
                args.len(),
            ));
        }
        Ok((self.function)(args))
    }
}

/// Read-only table of builtin functions keyed by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: HashMap<&'static str, Builtin>,
}

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// An empty registry: every call fails with `UnknownFunction`.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// A fresh registry holding the standard math builtins.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        math::register(&mut registry);
        debug!("Registered {} builtin functions", registry.len());
        registry
    }

    /// The process-wide standard registry, built on first use.
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(Registry::standard)
    }

    pub(crate) fn register(&mut self, builtin: Builtin) {
        self.functions.insert(builtin.name(), builtin);
    }

    /// Looks up by exact name; callers lowercase first.
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.functions.get(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
