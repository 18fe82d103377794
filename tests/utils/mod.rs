pub mod builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{round, skins, TournamentBuilder};
