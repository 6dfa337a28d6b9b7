pub mod config;
pub mod outcome;
pub mod scores;
