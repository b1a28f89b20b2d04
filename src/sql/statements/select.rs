use nom::{
    character::complete::{char, multispace0, multispace1},
    combinator::all_consuming,
    sequence::tuple,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SqlWorldError};
use crate::sql::parser_utils::{ident, kw, strip_terminator, SqlResult};

use super::Statement;

/// `SELECT * FROM <table>`; no projection and no WHERE clause.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SelectStatement {
    pub table: String,
}

impl SelectStatement {
    pub fn parse(input: &str) -> Result<Statement> {
        let (_, table) =
            parse_select_all(strip_terminator(input)).map_err(|_| SqlWorldError::select_syntax())?;
        Ok(Statement::Select(SelectStatement {
            table: table.to_lowercase(),
        }))
    }
}

fn parse_select_all(input: &str) -> SqlResult<'_, &str> {
    let (input, (_, _, _, _, _, _, _, table, _)) = all_consuming(tuple((
        multispace0,
        kw("SELECT"),
        multispace1,
        char('*'),
        multispace1,
        kw("FROM"),
        multispace1,
        ident,
        multispace0,
    )))(input)?;
    Ok((input, table))
}
