use serde::{Deserialize, Serialize};

use self::{insert::InsertStatement, select::SelectStatement};

pub mod insert;
pub mod select;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Statement {
    Insert(InsertStatement),
    Select(SelectStatement),
}

impl Statement {
    pub fn table(&self) -> &str {
        match self {
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
        }
    }
}
