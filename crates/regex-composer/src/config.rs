//! Configuration types for the pattern composer.

/// Configuration for a [`RegexBuilder`](crate::RegexBuilder).
///
/// # Example
///
/// ```rust
/// use regex_composer::{ComposerConfig, RegexBuilder};
///
/// let config = ComposerConfig::builder().with_strict(true).build();
/// let mut builder = RegexBuilder::with_config(config);
/// builder.times_between("a", 6, 3);
///
/// assert_eq!(builder.render(), "a{6,3}");
/// assert!(builder.try_render().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposerConfig {
    /// Record out-of-contract arguments so `try_render` can report them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
}

impl ComposerConfig {
    /// Creates a new builder for ComposerConfig.
    pub fn builder() -> ComposerConfigBuilder {
        ComposerConfigBuilder::default()
    }

    /// Shorthand for a strict configuration.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Builder for ComposerConfig.
#[derive(Debug, Clone, Default)]
pub struct ComposerConfigBuilder {
    strict: bool,
}

impl ComposerConfigBuilder {
    /// Enables or disables strict argument checking.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds the ComposerConfig.
    pub fn build(self) -> ComposerConfig {
        ComposerConfig {
            strict: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_is_lenient() {
        let config = ComposerConfig::default();
        assert!(!config.strict);
    }

    #[test]
    fn test_config_builder() {
        let config = ComposerConfig::builder().with_strict(true).build();
        assert!(config.strict);
        assert_eq!(config, ComposerConfig::strict());
    }

    #[test]
    fn test_builder_last_call_wins() {
        let config = ComposerConfig::builder()
            .with_strict(true)
            .with_strict(false)
            .build();
        assert!(!config.strict);
    }
}
