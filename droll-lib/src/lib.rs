pub mod command;
pub mod dice;
pub mod error;
mod parser;
pub mod roll;
