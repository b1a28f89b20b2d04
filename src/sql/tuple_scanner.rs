// VALUES clause scanner: splits `(a, 'b,c'), (d, e)` into raw tuple tokens.
// Quote characters stay in the tokens; DataValue::from_token strips them.

use log::debug;

use crate::error::{Result, SqlWorldError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    BeforeTuple,
    InTuple,
    InQuote(char),
}

/// Raw tokens of one parenthesized tuple.
pub type RawTuple = Vec<String>;

pub fn scan_tuples(input: &str) -> Result<Vec<RawTuple>> {
    let mut state = ScanState::BeforeTuple;
    let mut tuples = Vec::new();
    let mut current: RawTuple = Vec::new();
    let mut token = String::new();

    for c in input.chars() {
        state = match state {
            ScanState::BeforeTuple => match c {
                '(' => ScanState::InTuple,
                ',' => ScanState::BeforeTuple,
                c if c.is_whitespace() => ScanState::BeforeTuple,
                _ => return Err(SqlWorldError::insert_syntax()),
            },
            ScanState::InTuple => match c {
                '\'' | '"' => {
                    token.push(c);
                    ScanState::InQuote(c)
                }
                ',' => {
                    current.push(std::mem::take(&mut token).trim().to_string());
                    ScanState::InTuple
                }
                ')' => {
                    // `()` contributes no values at all.
                    if !current.is_empty() || !token.trim().is_empty() {
                        current.push(std::mem::take(&mut token).trim().to_string());
                    }
                    token.clear();
                    tuples.push(std::mem::take(&mut current));
                    ScanState::BeforeTuple
                }
                _ => {
                    token.push(c);
                    ScanState::InTuple
                }
            },
            ScanState::InQuote(quote) => {
                token.push(c);
                if c == quote {
                    ScanState::InTuple
                } else {
                    ScanState::InQuote(quote)
                }
            }
        };
    }

    if state != ScanState::BeforeTuple {
        debug!("scan_tuples: dropping unterminated tuple");
    }
    Ok(tuples)
}
