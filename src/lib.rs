pub mod applier;
pub mod checker;
pub mod cli;
pub mod diff;
pub mod formatter;
pub mod traversal;
pub mod types;
