pub mod cards;
pub mod parser;
pub mod prompt;
mod service;

pub use service::{InterpretationResult, TarotService};
