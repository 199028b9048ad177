pub mod cache;
pub mod health;
pub mod resolve;

pub use cache::{clear_cache, get_cache_stats};
pub use health::health_check;
pub use resolve::get_a_records;
