//! Building blocks for validators

pub mod rules;

pub use rules::{RuleSet, in_list, positive, required, string_length};
