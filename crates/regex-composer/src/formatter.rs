//! Presentation forms for composed patterns.
//!
//! There is one rendering path, [`RegexBuilder::render`]. The literal form
//! only decorates its output.

use crate::composer::RegexBuilder;

/// Output format for a composed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// The pattern string as consumed by a matching engine (default).
    /// Example: `^a*$`
    #[default]
    Plain,

    /// The pattern between slash delimiters, for display.
    /// Example: `/^a*$/`
    Literal,
}

/// Composed pattern in every presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedPattern {
    /// Plain output.
    pub plain: String,
    /// Slash-delimited output.
    pub literal: String,
}

/// Pattern formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    _private: (),
}

impl Formatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a pattern in the specified style.
    pub fn format(&self, builder: &RegexBuilder, format: Format) -> String {
        Self::format_pattern(builder, format)
    }

    /// Format a pattern (static method).
    pub fn format_pattern(builder: &RegexBuilder, format: Format) -> String {
        let plain = builder.render();
        match format {
            Format::Plain => plain,
            Format::Literal => Self::delimit(&plain),
        }
    }

    /// Format in all styles.
    pub fn format_all(builder: &RegexBuilder) -> FormattedPattern {
        let plain = builder.render();
        let literal = Self::delimit(&plain);
        FormattedPattern { plain, literal }
    }

    fn delimit(pattern: &str) -> String {
        format!("/{}/", pattern)
    }
}

impl RegexBuilder {
    /// Render in the slash-delimited display form: `/pattern/`.
    pub fn to_literal(&self) -> String {
        Formatter::format_pattern(self, Format::Literal)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_anchored() -> RegexBuilder {
        let mut builder = RegexBuilder::new();
        builder.match_begin().zero_or_more_of("a").match_end();
        builder
    }

    #[test]
    fn test_format_plain() {
        let builder = sample_anchored();
        assert_eq!(Formatter::format_pattern(&builder, Format::Plain), "^a*$");
    }

    #[test]
    fn test_format_literal() {
        let builder = sample_anchored();
        assert_eq!(Formatter::format_pattern(&builder, Format::Literal), "/^a*$/");
        assert_eq!(builder.to_literal(), "/^a*$/");
    }

    #[test]
    fn test_format_empty_literal() {
        assert_eq!(RegexBuilder::new().to_literal(), "//");
    }

    #[test]
    fn test_format_all() {
        let builder = sample_anchored();
        let result = Formatter::format_all(&builder);
        assert_eq!(result.plain, "^a*$");
        assert_eq!(result.literal, "/^a*$/");
    }

    #[test]
    fn test_formatter_instance() {
        let builder = sample_anchored();
        let formatter = Formatter::new();
        assert_eq!(formatter.format(&builder, Format::default()), "^a*$");
    }

    #[test]
    fn test_formatting_does_not_mutate() {
        let builder = sample_anchored();
        let _ = builder.to_literal();
        assert_eq!(builder.fragment(), "a*");
        assert_eq!(builder.render(), "^a*$");
    }
}
