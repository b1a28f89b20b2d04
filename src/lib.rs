pub mod challenge;
pub mod config;
pub mod error;
pub mod sql;
pub mod terminal;
pub mod world;


pub use challenge::{generate_challenge, ChallengeSpec, RuleBook, Tier, Verdict};
pub use config::GameConfig;
pub use error::{Result, SqlWorldError};
pub use sql::parser::Parser;
pub use sql::statements::Statement;
pub use terminal::Terminal;
pub use world::World;
