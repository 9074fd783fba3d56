//! Compiler settings.

/// Fragment count above which an unconstrained polymorphic property is reported.
pub const DEFAULT_FRAGMENT_THRESHOLD: usize = 100;

/// Environment variable overriding the fragment threshold.
pub const FRAGMENT_THRESHOLD_ENV: &str = "CMSGRAPH_FRAGMENT_THRESHOLD";

/// Configuration for fragment compilation and query assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Advisory limit on fragments generated by one polymorphic property
    pub(crate) fragment_threshold: usize,
    /// Include form element types in the experience composition union
    pub(crate) form_elements: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fragment_threshold: DEFAULT_FRAGMENT_THRESHOLD,
            form_elements: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with overrides from the process environment.
    pub fn from_env() -> Self {
        let value = std::env::var(FRAGMENT_THRESHOLD_ENV).ok();
        Self::default().threshold_override(value.as_deref())
    }

    /// Apply a textual threshold override; unparsable values keep the current threshold.
    pub fn threshold_override(mut self, value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return self;
        };
        match raw.trim().parse::<usize>() {
            Ok(threshold) => self.fragment_threshold = threshold,
            Err(err) => tracing::warn!(
                variable = FRAGMENT_THRESHOLD_ENV,
                value = raw,
                %err,
                "ignoring invalid fragment threshold"
            ),
        }
        self
    }

    /// Set the fragment count threshold.
    pub fn fragment_threshold(mut self, value: usize) -> Self {
        self.fragment_threshold = value;
        self
    }

    /// Set whether form element types join the composition union.
    pub fn form_elements(mut self, value: bool) -> Self {
        self.form_elements = value;
        self
    }

    pub fn threshold(&self) -> usize {
        self.fragment_threshold
    }

    pub fn includes_form_elements(&self) -> bool {
        self.form_elements
    }
}
