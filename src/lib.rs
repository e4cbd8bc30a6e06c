pub mod analyzers;
pub mod error;
pub mod monitors;
pub mod output;
pub mod parser;
pub mod shot;
