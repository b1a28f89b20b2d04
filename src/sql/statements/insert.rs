use log::debug;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0, multispace1},
    sequence::delimited,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SqlWorldError};
use crate::sql::{
    data_value::{parse_number, DataValue},
    parser_utils::{ident, kw, strip_terminator, SqlResult},
    row::Row,
    tuple_scanner::scan_tuples,
};

use super::Statement;

/// Upper bound for the row-multiplier taken from the column list.
pub const MAX_ROW_MULTIPLIER: u32 = 10_000;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub multiplier: u32,
    pub rows: Vec<Row>,
}

impl InsertStatement {
    pub fn parse(input: &str) -> Result<Statement> {
        let (values_part, (table, column_list)) =
            parse_head(input).map_err(|_| SqlWorldError::insert_syntax())?;

        let table = table.to_lowercase();
        let (columns, multiplier) = parse_column_list(column_list);

        let tuples = scan_tuples(strip_terminator(values_part))?;
        if tuples.is_empty() {
            return Err(SqlWorldError::EmptyValues);
        }

        let mut rows = Vec::new();
        for tuple in tuples {
            let values: Vec<DataValue> = tuple.iter().map(|t| DataValue::from_token(t)).collect();
            rows.extend(align_rows(&columns, values)?);
        }

        if rows.len() == 1 && multiplier > 1 {
            let row = rows[0].clone();
            rows.resize(multiplier as usize, row);
        }

        debug!(
            "InsertStatement::parse: table={} columns={:?} rows={}",
            table,
            columns,
            rows.len()
        );

        Ok(Statement::Insert(InsertStatement {
            table,
            columns,
            multiplier,
            rows,
        }))
    }
}

/// Matches `INSERT INTO <table> (<cols>) VALUES` and returns the remaining input.
fn parse_head(input: &str) -> SqlResult<'_, (&str, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, _) = kw("INSERT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = kw("INTO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, table) = ident(input)?;
    let (input, _) = multispace0(input)?;
    let (input, columns) = delimited(char('('), take_while1(|c: char| c != ')'), char(')'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = kw("VALUES")(input)?;
    Ok((input, (table, columns)))
}

/// Splits the column list and pulls out the first purely numeric entry as
/// the row-multiplier (default 1).
fn parse_column_list(list: &str) -> (Vec<String>, u32) {
    let mut columns: Vec<String> = list.split(',').map(|c| c.trim().to_lowercase()).collect();

    let numeric = columns
        .iter()
        .enumerate()
        .find_map(|(idx, c)| parse_number(c).map(|n| (idx, n)));

    let multiplier = match numeric {
        Some((idx, n)) => {
            columns.remove(idx);
            n.floor().clamp(1.0, MAX_ROW_MULTIPLIER as f64) as u32
        }
        None => 1,
    };
    (columns, multiplier)
}

/// One row when the counts match; several rows when the tuple packs a whole
/// multiple of the column count.
fn align_rows(columns: &[String], values: Vec<DataValue>) -> Result<Vec<Row>> {
    let width = columns.len();
    if width == 0 || values.is_empty() || values.len() % width != 0 {
        return Err(SqlWorldError::Alignment {
            values: values.len(),
            columns: width,
        });
    }
    Ok(values
        .chunks(width)
        .map(|chunk| Row::from_pairs(columns, chunk.to_vec()))
        .collect())
}
