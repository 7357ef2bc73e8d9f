//! Search module for the Gomoku move-selection engine.
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition tables for caching main-search and kill-search results
//! - Candidate move generation by threat classification
//! - Alpha-Beta negamax search with iterative deepening
//! - VCF/VCT kill search for forced wins

pub mod alphabeta;
pub mod candidates;
pub mod killsearch;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{deepening_minimax, search, SearchResult};
pub use candidates::generate_candidates;
pub use killsearch::find_kill_move;
pub use tt::{KillTable, TranspositionTable};
pub use zobrist::ZobristTable;
