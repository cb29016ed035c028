pub mod direction;
pub mod sma;
pub mod streak;

pub use direction::{Direction, day_directions};
pub use sma::simple_moving_average;
pub use streak::{last_price_at_streak, latest_pair, streak_history};
