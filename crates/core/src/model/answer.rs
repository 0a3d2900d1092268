use serde::{Deserialize, Serialize};
use std::fmt;

/// A user answer or a reference answer.
///
/// Single-blank questions carry `Text`; multi-part questions (matching,
/// multi-blank completion) carry an ordered `List`. Callers keep whichever
/// shape the question type expects; nothing here converts between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns the single text value, if this is a `Text` answer.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the parts of a `List` answer.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(values) => Some(values),
        }
    }

    /// True when the answer carries no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::List(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::List(values) => f.write_str(&values.join(", ")),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_display_joins_parts() {
        let value = AnswerValue::list(["Japan - A", "Europe - C"]);
        assert_eq!(value.to_string(), "Japan - A, Europe - C");
    }

    #[test]
    fn blank_detection_covers_both_shapes() {
        assert!(AnswerValue::text("   ").is_blank());
        assert!(AnswerValue::list(["", " "]).is_blank());
        assert!(!AnswerValue::list(["", "B"]).is_blank());
    }

    #[test]
    fn accessors_match_shape() {
        let text = AnswerValue::from("800");
        assert_eq!(text.as_text(), Some("800"));
        assert!(text.as_list().is_none());

        let list = AnswerValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));
        assert!(list.as_text().is_none());
    }
}
