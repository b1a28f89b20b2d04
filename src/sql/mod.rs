pub mod data_value;
pub mod parser;
pub mod parser_utils;
pub mod row;
pub mod statements;
pub mod tuple_scanner;
