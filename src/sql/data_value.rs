use nom::{combinator::all_consuming, number::complete::double};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sql::parser_utils::SqlResult;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    /// Converts one raw tuple token into a value.
    ///
    /// A token wrapped in matching single or double quotes loses one quote
    /// layer and is always text, even when the content looks numeric. Bare
    /// tokens become numbers when the whole token is a finite float literal.
    pub fn from_token(raw: &str) -> DataValue {
        let token = raw.trim();
        if let Some(inner) = strip_quotes(token) {
            return DataValue::Text(inner.to_string());
        }
        match parse_number(token) {
            Some(n) => DataValue::Number(n),
            None => DataValue::Text(token.to_string()),
        }
    }

    /// Numeric reading of the value. Text counts when it is a complete
    /// numeric literal, so `'10'` compares like `10`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(s) => parse_number(s.trim()),
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// Parses a complete, finite numeric literal (`5`, `-2.5`, `1e3`).
pub fn parse_number(input: &str) -> Option<f64> {
    let result: SqlResult<f64> = all_consuming(double)(input);
    result.ok().map(|(_, n)| n).filter(|n| n.is_finite())
}

/// Integral values print without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn strip_quotes(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if (first == '\'' || first == '"') && token.len() >= 2 && token.ends_with(first) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_test() {
        assert_eq!(DataValue::from_token("10"), DataValue::Number(10.0));
        assert_eq!(DataValue::from_token(" -2.5 "), DataValue::Number(-2.5));
        assert_eq!(DataValue::from_token("1e3"), DataValue::Number(1000.0));
        assert_eq!(
            DataValue::from_token("'Stick of Truth'"),
            DataValue::Text("Stick of Truth".to_string())
        );
        assert_eq!(
            DataValue::from_token("\"Axe\""),
            DataValue::Text("Axe".to_string())
        );
        assert_eq!(
            DataValue::from_token("hostile"),
            DataValue::Text("hostile".to_string())
        );
    }

    #[test]
    fn quoted_numbers_stay_text() {
        assert_eq!(DataValue::from_token("'5'"), DataValue::Text("5".to_string()));
        assert_eq!(DataValue::from_token("\"7\""), DataValue::Text("7".to_string()));
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        assert_eq!(
            DataValue::from_token("'abc\""),
            DataValue::Text("'abc\"".to_string())
        );
        assert_eq!(DataValue::from_token("'"), DataValue::Text("'".to_string()));
    }

    #[test]
    fn non_finite_and_partial_numbers_are_text() {
        assert_eq!(DataValue::from_token("inf"), DataValue::Text("inf".to_string()));
        assert_eq!(DataValue::from_token("NaN"), DataValue::Text("NaN".to_string()));
        assert_eq!(DataValue::from_token("5abc"), DataValue::Text("5abc".to_string()));
        assert_eq!(DataValue::from_token(""), DataValue::Text(String::new()));
    }

    #[test]
    fn numeric_text_reads_as_number() {
        assert_eq!(DataValue::Text("10".to_string()).as_number(), Some(10.0));
        assert_eq!(DataValue::Text(" 2.5 ".to_string()).as_number(), Some(2.5));
        assert_eq!(DataValue::Text("ten".to_string()).as_number(), None);
        assert_eq!(DataValue::Text(String::new()).as_number(), None);
    }

    #[test]
    fn display_test() {
        assert_eq!(DataValue::Number(5.0).to_string(), "5");
        assert_eq!(DataValue::Number(2.5).to_string(), "2.5");
        assert_eq!(DataValue::Text("Axe".to_string()).to_string(), "Axe");
    }
}
