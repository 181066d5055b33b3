//! Group kinds and their delimiters.

/// Kind of parenthesized group emitted by [`RegexBuilder::group`](crate::RegexBuilder::group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupKind {
    /// Capturing group: `(expr)`.
    Capture,

    /// Non-capturing group: `(?:expr)`.
    NonCapture,

    /// Positive lookahead: `(?=expr)`.
    ///
    /// Matches like a non-capturing group, then rewinds to where the group
    /// started.
    PositiveLookahead,

    /// Negative lookahead: `(?!expr)`.
    ///
    /// Matches only if the expression fails to match.
    NegativeLookahead,
}

impl GroupKind {
    /// All group kinds, in declaration order.
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Capture,
        GroupKind::NonCapture,
        GroupKind::PositiveLookahead,
        GroupKind::NegativeLookahead,
    ];

    /// Opening delimiter for this kind.
    pub fn opening(self) -> &'static str {
        match self {
            GroupKind::Capture => "(",
            GroupKind::NonCapture => "(?:",
            GroupKind::PositiveLookahead => "(?=",
            GroupKind::NegativeLookahead => "(?!",
        }
    }

    /// Closing delimiter for this kind.
    pub fn closing(self) -> &'static str {
        match self {
            GroupKind::Capture
            | GroupKind::NonCapture
            | GroupKind::PositiveLookahead
            | GroupKind::NegativeLookahead => ")",
        }
    }

    /// Surround `expression` with this kind's delimiter pair.
    pub fn wrap(self, expression: &str) -> String {
        let mut out =
            String::with_capacity(self.opening().len() + expression.len() + self.closing().len());
        out.push_str(self.opening());
        out.push_str(expression);
        out.push_str(self.closing());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        assert_eq!(GroupKind::Capture.opening(), "(");
        assert_eq!(GroupKind::NonCapture.opening(), "(?:");
        assert_eq!(GroupKind::PositiveLookahead.opening(), "(?=");
        assert_eq!(GroupKind::NegativeLookahead.opening(), "(?!");
        for kind in GroupKind::ALL {
            assert_eq!(kind.closing(), ")");
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(GroupKind::Capture.wrap("hello"), "(hello)");
        assert_eq!(GroupKind::NonCapture.wrap("hello"), "(?:hello)");
        assert_eq!(GroupKind::PositiveLookahead.wrap("hello"), "(?=hello)");
        assert_eq!(GroupKind::NegativeLookahead.wrap("hello"), "(?!hello)");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(GroupKind::NonCapture.wrap(""), "(?:)");
    }
}
