/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Chooses the parent scope of a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeMode {
    /// The call scope is a child of the scope the function was defined in.
    /// Functions returned from other functions keep seeing their enclosing
    /// variables.
    #[default]
    Lexical,
    /// The call scope is a child of the caller's scope. Free names in a
    /// function body resolve against whatever is visible at the call site.
    Dynamic,
}

/// Settings for a single program run.
///
/// # Example
/// ```
/// use aurora::config::{Config, ScopeMode};
///
/// let config = Config::default().with_scope_mode(ScopeMode::Dynamic);
///
/// assert_eq!(config.scope_mode, ScopeMode::Dynamic);
/// assert_eq!(config.max_call_depth, 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How call scopes are parented.
    pub scope_mode:     ScopeMode,
    /// Nested calls beyond this depth abort the run with a runtime error
    /// instead of overflowing the host stack.
    pub max_call_depth: usize,
}

impl Config {
    #[must_use]
    pub const fn with_scope_mode(mut self, scope_mode: ScopeMode) -> Self {
        self.scope_mode = scope_mode;
        self
    }

    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { scope_mode:     ScopeMode::Lexical,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }
}
