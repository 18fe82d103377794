pub mod aggregator;
pub mod models;

pub use aggregator::aggregate;
pub use models::{Leaderboard, LeaderboardRow};
