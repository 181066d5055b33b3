//! # regex-composer
//!
//! A fluent builder for regular expression patterns.
//!
//! Instead of hand-writing escapes and grouping syntax, chain named
//! operations and render the result:
//!
//! ```rust
//! use regex_composer::{GroupKind, RegexBuilder};
//!
//! let pattern = RegexBuilder::new()
//!     .match_begin()
//!     .one_or_more_of("a")
//!     .group("bc", GroupKind::NonCapture)
//!     .any_of(["x", "y"])
//!     .match_end()
//!     .render();
//!
//! assert_eq!(pattern, "^a+(?:bc)(x|y)$");
//! ```
//!
//! Inputs are taken as pattern syntax verbatim; nothing is escaped, and the
//! output is never checked against a matching engine.
//!
//! ## Quantifier grouping
//!
//! `zero_or_more_of`, `one_or_more_of` and `optional` wrap their argument in
//! a non-capturing group when it is longer than one character, so the
//! quantifier binds to the whole expression:
//!
//! ```rust
//! use regex_composer::RegexBuilder;
//!
//! assert_eq!(RegexBuilder::new().zero_or_more_of("a").render(), "a*");
//! assert_eq!(RegexBuilder::new().zero_or_more_of("abc").render(), "(?:abc)*");
//! // Length is counted in characters, so escapes are grouped too.
//! assert_eq!(RegexBuilder::new().optional(r"\d").render(), r"(?:\d)?");
//! ```
//!
//! The counted repetitions (`n_times_of`, `at_least_n_times_of`,
//! `times_between`) never group their argument.
//!
//! ## Syntax Quick Reference
//!
//! | Method | Output |
//! |--------|--------|
//! | `match_begin` / `match_end` | `^` / `$` around the whole pattern |
//! | `zero_or_more_of(e)` | `e*` |
//! | `one_or_more_of(e)` | `e+` |
//! | `optional(e)` | `e?` |
//! | `any_of([a, b])` | `(a\|b)` |
//! | `n_times_of(e, n)` | `e{n}` |
//! | `at_least_n_times_of(e, n)` | `e{n,}` |
//! | `times_between(e, n, m)` | `e{n,m}` |
//! | `any_single_character` | `.` |
//! | `formfeed` `newline` `carriage_return` `tab` | `\f` `\n` `\r` `\t` |
//! | `any_digit` / `any_non_digit` | `\d` / `\D` |
//! | `whitespace` / `not_a_whitespace` | `\s` / `\S` |
//! | `any_word_character` / `any_non_word_character` | `\w` / `\W` |
//! | `capture` `non_capture` | `(e)` `(?:e)` |
//! | `positive_lookahead` `negative_lookahead` | `(?=e)` `(?!e)` |
//! | `single_character_in(s)` | `[s]` |
//! | `any_single_character_except(s)` | `[^s]` |
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for builders, configs and formats

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod composer;
mod config;
mod error;
mod formatter;
mod group;

pub use composer::RegexBuilder;
pub use config::{ComposerConfig, ComposerConfigBuilder};
pub use error::{ArgumentViolation, ComposeError, ComposeResult};
pub use formatter::{Format, FormattedPattern, Formatter};
pub use group::GroupKind;
