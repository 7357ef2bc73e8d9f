//! Candidate move generator: classify every empty cell into priority
//! buckets so the search driver only ever has to consider a short,
//! threat-ordered list of moves.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_move;
use crate::eval::patterns::{PatternClass, FIVE, LOW_RISK, MIDDLE_RISK};

const MAX_CANDIDATES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i32,
}

fn sort_desc_truncate(mut moves: Vec<ScoredMove>, cap: usize) -> Vec<ScoredMove> {
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(cap);
    moves
}

/// Generate move candidates for `color` against the current board.
///
/// Returns the ordered list of positions the driver should try, already
/// capped at 10 entries (except for the single-move winning/forced cases,
/// which return exactly one or a small forced set).
pub fn generate_candidates(board: &Board, color: Stone) -> Vec<Pos> {
    let opponent = color.opponent();
    let closed_four_score = PatternClass::ClosedFour.score();
    let closed_one_score = PatternClass::ClosedOne.score();

    let mut threat = 0u8;
    let mut high: Vec<ScoredMove> = Vec::new();
    let mut middle: Vec<ScoredMove> = Vec::new();
    let mut low: Vec<ScoredMove> = Vec::new();
    let mut kill: Vec<ScoredMove> = Vec::new();

    for row in 0..board.size() as i32 {
        for col in 0..board.size() as i32 {
            if board.at(row, col).expect("in-bounds scan") != Stone::Empty {
                continue;
            }
            let pos = Pos::new(row as u8, col as u8);
            let score = evaluate_move(board, pos, color);
            let foe_score = evaluate_move(board, pos, opponent);

            if score >= FIVE {
                return vec![pos];
            }

            if score >= MIDDLE_RISK {
                kill.push(ScoredMove { pos, score });
            }

            if foe_score >= FIVE {
                if threat < 2 {
                    threat = 2;
                    high.clear();
                }
                // every cell that blocks a foe five is kept, not just the one that
                // first promoted the threat level, since any of them block the win.
                high.push(ScoredMove { pos, score });
                continue;
            } else if foe_score >= MIDDLE_RISK {
                if threat < 1 {
                    threat = 1;
                    high.clear();
                    high.push(ScoredMove { pos, score });
                }
                continue;
            }

            if threat == 0 {
                if (LOW_RISK..MIDDLE_RISK).contains(&score) || (LOW_RISK..MIDDLE_RISK).contains(&foe_score) {
                    high.push(ScoredMove { pos, score });
                } else if score >= closed_four_score || foe_score >= closed_four_score {
                    middle.push(ScoredMove { pos, score });
                } else if score >= closed_one_score && middle.is_empty() {
                    low.push(ScoredMove { pos, score });
                }
            }
        }
    }

    if threat < 2 && !kill.is_empty() {
        return sort_desc_truncate(kill, MAX_CANDIDATES)
            .into_iter()
            .map(|m| m.pos)
            .collect();
    }

    let bucket = if !high.is_empty() {
        high
    } else if !middle.is_empty() {
        middle
    } else if !low.is_empty() {
        low
    } else {
        log::debug!("candidate generator found no classified move, falling back to random");
        return random_fallback(board);
    };

    sort_desc_truncate(bucket, MAX_CANDIDATES)
        .into_iter()
        .map(|m| m.pos)
        .collect()
}

fn random_fallback(board: &Board) -> Vec<Pos> {
    let mut empties = Vec::new();
    for row in 0..board.size() as i32 {
        for col in 0..board.size() as i32 {
            if board.at(row, col).expect("in-bounds scan") == Stone::Empty {
                empties.push(Pos::new(row as u8, col as u8));
            }
        }
    }
    match empties.choose(&mut thread_rng()) {
        Some(&p) => vec![p],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winning_move_returned_alone() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        let candidates = generate_candidates(&board, Stone::Black);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0] == Pos::new(7, 7) || candidates[0] == Pos::new(7, 2));
    }

    #[test]
    fn opponent_five_threat_forces_block() {
        let mut board = Board::new();
        board.place(7, 3, Stone::White).unwrap();
        board.place(7, 4, Stone::White).unwrap();
        board.place(7, 5, Stone::White).unwrap();
        board.place(7, 6, Stone::White).unwrap();
        let candidates = generate_candidates(&board, Stone::Black);
        assert!(candidates.contains(&Pos::new(7, 7)) || candidates.contains(&Pos::new(7, 2)));
    }

    #[test]
    fn empty_board_falls_back_to_one_random_move() {
        let board = Board::new();
        let candidates = generate_candidates(&board, Stone::Black);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn double_three_fork_move_is_top_candidate() {
        let mut board = Board::new();
        board.place(7, 6, Stone::Black).unwrap();
        board.place(7, 8, Stone::Black).unwrap();
        board.place(6, 7, Stone::Black).unwrap();
        board.place(8, 7, Stone::Black).unwrap();
        let candidates = generate_candidates(&board, Stone::Black);
        assert_eq!(candidates[0], Pos::new(7, 7));
    }

    #[test]
    fn candidate_list_never_exceeds_ten() {
        let mut board = Board::new();
        // Scatter stones so many cells classify into the same bucket.
        board.place(7, 7, Stone::Black).unwrap();
        board.place(3, 3, Stone::White).unwrap();
        let candidates = generate_candidates(&board, Stone::Black);
        assert!(candidates.len() <= MAX_CANDIDATES);
    }
}
