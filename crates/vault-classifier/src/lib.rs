//! Category classifier for credential records.

pub mod rules;
pub mod table;

pub use rules::{classify, is_domain_shaped, match_table, OTHER, UNCATEGORIZED};
pub use table::{Category, CategoryTable};

#[cfg(test)]
mod tests;
