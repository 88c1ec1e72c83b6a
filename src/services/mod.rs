pub mod screener;
pub mod scorer;
pub mod cache;
pub mod activity;

pub use screener::PhoenixScreener;
pub use activity::{ActivitySource, SimulatedActivity};
