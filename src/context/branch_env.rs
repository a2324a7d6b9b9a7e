use crate::display::ColorChoice;
use std::env;

pub const DEFAULT_PREFIX: &str = "feature";

/// Runtime environment settings for branch creation
///
/// Resolution priority (highest to lowest):
/// 1. Builder override (test-only)
/// 2. Environment variable (`FEATURE_BRANCH_PREFIX`, `NO_COLOR`, `TERM`)
/// 3. Default (`feature`, color allowed, no terminal type)
///
/// CLI flags are applied on top of this by the caller.
#[derive(Debug, Clone)]
pub struct BranchEnv {
    prefix: String,
    no_color: bool,
    terminal_type: Option<String>,
}

impl BranchEnv {
    /// Create a new environment instance from process environment variables
    pub fn new() -> Self {
        Self {
            prefix: Self::resolve_prefix(None),
            no_color: Self::resolve_no_color(None),
            terminal_type: Self::resolve_terminal_type(None),
        }
    }

    #[cfg(test)]
    pub fn builder() -> BranchEnvBuilder {
        BranchEnvBuilder::new()
    }

    /// Branch prefix used when `--prefix` is not given
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when `NO_COLOR` is set to a non-empty value
    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn terminal_type(&self) -> Option<&str> {
        self.terminal_type.as_deref()
    }

    /// Decide whether prompts should be colored.
    ///
    /// `stdout_is_tty` is passed in so the decision stays testable.
    pub fn color_enabled(&self, choice: ColorChoice, stdout_is_tty: bool) -> bool {
        match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                stdout_is_tty && !self.no_color && self.terminal_type() != Some("dumb")
            }
        }
    }

    fn resolve_prefix(override_prefix: Option<&String>) -> String {
        if let Some(prefix) = override_prefix {
            return prefix.clone();
        }

        env::var("FEATURE_BRANCH_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
    }

    fn resolve_no_color(override_no_color: Option<bool>) -> bool {
        if let Some(no_color) = override_no_color {
            return no_color;
        }

        // https://no-color.org: any non-empty value disables color
        env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }

    fn resolve_terminal_type(override_terminal: Option<&Option<String>>) -> Option<String> {
        if let Some(terminal_type) = override_terminal {
            return terminal_type.clone();
        }

        env::var("TERM").ok()
    }
}

impl Default for BranchEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating BranchEnv instances with custom values
#[cfg(test)]
pub struct BranchEnvBuilder {
    prefix: Option<String>,
    no_color: Option<bool>,
    terminal_type: Option<Option<String>>,
}

#[cfg(test)]
impl BranchEnvBuilder {
    pub fn new() -> Self {
        Self {
            prefix: None,
            no_color: None,
            terminal_type: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = Some(no_color);
        self
    }

    pub fn with_terminal_type(mut self, terminal_type: Option<String>) -> Self {
        self.terminal_type = Some(terminal_type);
        self
    }

    pub fn build(self) -> BranchEnv {
        BranchEnv {
            prefix: BranchEnv::resolve_prefix(self.prefix.as_ref()),
            no_color: BranchEnv::resolve_no_color(self.no_color),
            terminal_type: BranchEnv::resolve_terminal_type(self.terminal_type.as_ref()),
        }
    }
}

#[cfg(test)]
impl Default for BranchEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
