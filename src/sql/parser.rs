use log::debug;

use crate::error::{Result, SqlWorldError};
use crate::sql::statements::{insert::InsertStatement, select::SelectStatement, Statement};

pub struct Parser;

impl Parser {
    /// Parses one terminal line into a statement. A line starting with
    /// `INSERT` or `SELECT` (any case) goes to that statement's parser, which
    /// reports its own syntax error; anything else is an unsupported command.
    pub fn parse_sql(input: &str) -> Result<Statement> {
        let upper = input.trim_start().to_uppercase();

        debug!("Parser::parse_sql: input={}", input);
        if upper.starts_with("INSERT") {
            InsertStatement::parse(input)
        } else if upper.starts_with("SELECT") {
            SelectStatement::parse(input)
        } else {
            Err(SqlWorldError::UnsupportedCommand)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_keyword() {
        assert!(matches!(
            Parser::parse_sql("insert into weapons (name) values ('Club')"),
            Ok(Statement::Insert(_))
        ));
        assert!(matches!(
            Parser::parse_sql("SELECT * FROM weapons"),
            Ok(Statement::Select(_))
        ));
    }

    #[test]
    fn other_commands_are_unsupported() {
        for input in ["DELETE FROM weapons", "", "   ", "DROP TABLE creatures"] {
            assert!(matches!(
                Parser::parse_sql(input),
                Err(SqlWorldError::UnsupportedCommand)
            ));
        }
    }

    #[test]
    fn keyword_prefix_routes_to_statement_syntax_errors() {
        assert!(matches!(
            Parser::parse_sql("INSERT;"),
            Err(SqlWorldError::Syntax { statement: "INSERT", .. })
        ));
        assert!(matches!(
            Parser::parse_sql("INSERTINTO weapons (a) VALUES (1)"),
            Err(SqlWorldError::Syntax { statement: "INSERT", .. })
        ));
        assert!(matches!(
            Parser::parse_sql("SELECT*FROM creatures"),
            Err(SqlWorldError::Syntax { statement: "SELECT", .. })
        ));
    }
}
