pub mod pair;
pub mod phoenix;
pub mod alert;

pub use pair::PairTicker;
pub use phoenix::{PhoenixCandidate, PhoenixSummary};
pub use alert::Alert;
