//! Fluent composer for regular expression patterns.
//!
//! Every operation appends a fixed piece of syntax to the accumulated
//! fragment and hands the same builder back, so calls chain. Anchors are
//! only applied when the pattern is rendered.

use std::fmt;

use crate::config::ComposerConfig;
use crate::error::{ArgumentViolation, ComposeError, ComposeResult};
use crate::group::GroupKind;

/// Fluent builder that composes a pattern string step by step.
///
/// Inputs are treated as already-valid pattern syntax: nothing is escaped
/// and nothing is validated against a matching engine.
///
/// ```rust
/// use regex_composer::RegexBuilder;
///
/// let pattern = RegexBuilder::new()
///     .match_begin()
///     .zero_or_more_of("a")
///     .match_end()
///     .render();
///
/// assert_eq!(pattern, "^a*$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegexBuilder {
    match_begin: bool,
    match_end: bool,
    fragment: String,
    #[cfg_attr(feature = "serde", serde(default))]
    config: ComposerConfig,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    violations: Vec<ArgumentViolation>,
}

impl RegexBuilder {
    /// Create an empty, lenient builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: ComposerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // =========================================================================
    // Anchors
    // =========================================================================

    /// Anchor the rendered pattern to the start of input (`^`).
    pub fn match_begin(&mut self) -> &mut Self {
        self.match_begin = true;
        self
    }

    /// Anchor the rendered pattern to the end of input (`$`).
    pub fn match_end(&mut self) -> &mut Self {
        self.match_end = true;
        self
    }

    // =========================================================================
    // Quantifiers
    // =========================================================================

    /// `expr*`, grouping `expr` first when it is longer than one character.
    pub fn zero_or_more_of(&mut self, expression: &str) -> &mut Self {
        self.push_quantified(expression, '*')
    }

    /// `expr+`, grouping `expr` first when it is longer than one character.
    pub fn one_or_more_of(&mut self, expression: &str) -> &mut Self {
        self.push_quantified(expression, '+')
    }

    /// `expr?`, grouping `expr` first when it is longer than one character.
    pub fn optional(&mut self, expression: &str) -> &mut Self {
        self.push_quantified(expression, '?')
    }

    /// Alternation of the choices, in order: `(a|b|c)`.
    ///
    /// An empty sequence emits `()`.
    pub fn any_of<I, S>(&mut self, choices: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        self.fragment.push('(');
        for choice in choices {
            if count > 0 {
                self.fragment.push('|');
            }
            self.fragment.push_str(choice.as_ref());
            count += 1;
        }
        self.fragment.push(')');

        if count == 0 {
            self.record(ArgumentViolation::EmptyAlternation);
        }
        self
    }

    /// `expr{n}`. The expression is not grouped.
    pub fn n_times_of(&mut self, expression: &str, count: u32) -> &mut Self {
        self.fragment.push_str(expression);
        self.fragment.push_str(&format!("{{{count}}}"));
        self
    }

    /// `expr{n,}`. The expression is not grouped.
    pub fn at_least_n_times_of(&mut self, expression: &str, count: u32) -> &mut Self {
        self.fragment.push_str(expression);
        self.fragment.push_str(&format!("{{{count},}}"));
        self
    }

    /// `expr{from,to}`. The expression is not grouped.
    ///
    /// `from > to` is emitted as written.
    pub fn times_between(&mut self, expression: &str, from: u32, to: u32) -> &mut Self {
        self.fragment.push_str(expression);
        self.fragment.push_str(&format!("{{{from},{to}}}"));

        if from > to {
            self.record(ArgumentViolation::InvertedRange {
                expression: expression.to_string(),
                from,
                to,
            });
        }
        self
    }

    /// Any single character: `.`
    pub fn any_single_character(&mut self) -> &mut Self {
        self.push_raw(".")
    }

    // =========================================================================
    // Escapes
    // =========================================================================

    /// Formfeed: `\f`
    pub fn formfeed(&mut self) -> &mut Self {
        self.push_raw(r"\f")
    }

    /// Newline: `\n`
    pub fn newline(&mut self) -> &mut Self {
        self.push_raw(r"\n")
    }

    /// Carriage return: `\r`
    pub fn carriage_return(&mut self) -> &mut Self {
        self.push_raw(r"\r")
    }

    /// Tab: `\t`
    pub fn tab(&mut self) -> &mut Self {
        self.push_raw(r"\t")
    }

    /// A single digit: `\d`, same as `[0-9]`.
    pub fn any_digit(&mut self) -> &mut Self {
        self.push_raw(r"\d")
    }

    /// Not a digit: `\D`, same as `[^0-9]`.
    pub fn any_non_digit(&mut self) -> &mut Self {
        self.push_raw(r"\D")
    }

    /// Whitespace: `\s`
    pub fn whitespace(&mut self) -> &mut Self {
        self.push_raw(r"\s")
    }

    /// Not whitespace: `\S`
    pub fn not_a_whitespace(&mut self) -> &mut Self {
        self.push_raw(r"\S")
    }

    /// Word character (letter, digit, underscore): `\w`
    pub fn any_word_character(&mut self) -> &mut Self {
        self.push_raw(r"\w")
    }

    /// Non-word character: `\W`
    pub fn any_non_word_character(&mut self) -> &mut Self {
        self.push_raw(r"\W")
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Wrap `expression` in the delimiter pair for `kind`.
    pub fn group(&mut self, expression: &str, kind: GroupKind) -> &mut Self {
        self.fragment.push_str(&kind.wrap(expression));
        self
    }

    /// Capturing group: `(expr)`.
    ///
    /// Capturing groups are numbered by the position of their opening
    /// parenthesis, starting at 1.
    pub fn capture(&mut self, expression: &str) -> &mut Self {
        self.group(expression, GroupKind::Capture)
    }

    /// Non-capturing group: `(?:expr)`.
    pub fn non_capture(&mut self, expression: &str) -> &mut Self {
        self.group(expression, GroupKind::NonCapture)
    }

    /// Positive lookahead: `(?=expr)`.
    pub fn positive_lookahead(&mut self, expression: &str) -> &mut Self {
        self.group(expression, GroupKind::PositiveLookahead)
    }

    /// Negative lookahead: `(?!expr)`.
    pub fn negative_lookahead(&mut self, expression: &str) -> &mut Self {
        self.group(expression, GroupKind::NegativeLookahead)
    }

    // =========================================================================
    // Character classes
    // =========================================================================

    /// One character out of `chars`: `single_character_in("abc")` gives `[abc]`.
    pub fn single_character_in(&mut self, chars: &str) -> &mut Self {
        self.fragment.push('[');
        self.fragment.push_str(chars);
        self.fragment.push(']');
        self
    }

    /// Any character except those in `chars`: `[^abc]`.
    pub fn any_single_character_except(&mut self, chars: &str) -> &mut Self {
        self.fragment.push_str("[^");
        self.fragment.push_str(chars);
        self.fragment.push(']');
        self
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the pattern, applying anchors around the whole fragment.
    ///
    /// Does not mutate the builder; calling it again gives the same string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.fragment.len() + 2);
        if self.match_begin {
            out.push('^');
        }
        out.push_str(&self.fragment);
        if self.match_end {
            out.push('$');
        }

        tracing::trace!(
            len = out.len(),
            match_begin = self.match_begin,
            match_end = self.match_end,
            "rendered pattern"
        );
        out
    }

    /// Alias of [`render`](Self::render).
    pub fn build(&self) -> String {
        self.render()
    }

    /// Render, failing if strict mode recorded out-of-contract arguments.
    ///
    /// A lenient builder always succeeds, whatever its violation list holds.
    pub fn try_render(&self) -> ComposeResult<String> {
        if self.config.strict && !self.violations.is_empty() {
            return Err(ComposeError::InvalidArguments(self.violations.clone()));
        }
        Ok(self.render())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The accumulated fragment, without anchors.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Whether the start anchor is set.
    pub fn is_match_begin(&self) -> bool {
        self.match_begin
    }

    /// Whether the end anchor is set.
    pub fn is_match_end(&self) -> bool {
        self.match_end
    }

    /// True if no operation has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty() && !self.match_begin && !self.match_end
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Violations recorded so far (always empty unless strict).
    pub fn violations(&self) -> &[ArgumentViolation] {
        &self.violations
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn push_raw(&mut self, syntax: &str) -> &mut Self {
        self.fragment.push_str(syntax);
        self
    }

    fn push_quantified(&mut self, expression: &str, quantifier: char) -> &mut Self {
        // Counts chars, not atoms: `\d` is grouped as `(?:\d)`. A char
        // outside the BMP counts once, so `😀` stays ungrouped.
        if expression.chars().count() > 1 {
            self.fragment.push_str(&GroupKind::NonCapture.wrap(expression));
        } else {
            self.fragment.push_str(expression);
        }
        self.fragment.push(quantifier);
        self
    }

    fn record(&mut self, violation: ArgumentViolation) {
        if !self.config.strict {
            return;
        }
        tracing::debug!(%violation, "out-of-contract argument");
        self.violations.push(violation);
    }
}

impl fmt::Display for RegexBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Tests
// =============================================================================
