//! Schema normalization: raw text tables to typed tables

pub mod column;
mod normalizer;
pub mod rules;
pub mod temporal;

pub use column::{OnError, Projection};
pub use normalizer::{normalize, SchemaNormalizer};
pub use rules::{Rule, TableRules, TABLE_RULES};
