use thiserror::Error;

pub const INSERT_FORM: &str = "INSERT INTO table (col1, col2) VALUES (val1, val2);";
pub const SELECT_FORM: &str = "SELECT * FROM table;";

#[derive(Error, Debug)]
pub enum SqlWorldError {
    /// Statement shape not recognized.
    #[error("Invalid {statement} syntax. Expected: {expected}")]
    Syntax {
        statement: &'static str,
        expected: &'static str,
    },

    #[error("value count does not align with columns ({values} values for {columns} columns)")]
    Alignment { values: usize, columns: usize },

    #[error("no VALUES parsed")]
    EmptyValues,

    #[error("Unknown table \"{0}\". Supported tables: weapons, creatures")]
    UnknownTable(String),

    #[error("Unsupported command. Only INSERT and SELECT statements are supported.")]
    UnsupportedCommand,

    #[error("no creature with id {0}")]
    NoSuchCreature(u64),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no challenge is active")]
    NoActiveChallenge,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlWorldError {
    pub fn insert_syntax() -> Self {
        SqlWorldError::Syntax {
            statement: "INSERT",
            expected: INSERT_FORM,
        }
    }

    pub fn select_syntax() -> Self {
        SqlWorldError::Syntax {
            statement: "SELECT",
            expected: SELECT_FORM,
        }
    }
}

impl From<serde_yaml::Error> for SqlWorldError {
    fn from(err: serde_yaml::Error) -> Self {
        SqlWorldError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SqlWorldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_messages_name_the_expected_form() {
        assert_eq!(
            SqlWorldError::insert_syntax().to_string(),
            "Invalid INSERT syntax. Expected: INSERT INTO table (col1, col2) VALUES (val1, val2);"
        );
        assert_eq!(
            SqlWorldError::select_syntax().to_string(),
            "Invalid SELECT syntax. Expected: SELECT * FROM table;"
        );
    }

    #[test]
    fn unknown_table_lists_supported_tables() {
        let err = SqlWorldError::UnknownTable("potions".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown table \"potions\". Supported tables: weapons, creatures"
        );
    }
}
