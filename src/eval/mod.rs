//! Position evaluation: pattern catalog, line extraction, scoring.

pub mod heuristic;
pub mod patterns;
pub mod window;

pub use heuristic::{evaluate_board, evaluate_move};
pub use patterns::{classify, PatternClass, FIVE, HIGH_RISK, LOW_RISK, MIDDLE_RISK};
pub use window::extract_window;
