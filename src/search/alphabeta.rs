//! Iteratively-deepened negamax with alpha-beta pruning.
//!
//! Deliberately minimal: move ordering is fully delegated to the candidate
//! generator's priority buckets (see `search::candidates`), so this driver
//! adds no killer-move or history-heuristic ordering of its own, and it
//! performs no null-move pruning, futility pruning, or time management — the
//! depth ladder is the only search-depth control.

use crate::board::{Board, Pos, Stone};
use crate::eval::patterns::FIVE;
use crate::eval::{evaluate_board, evaluate_move};

use super::candidates::generate_candidates;
use super::tt::TranspositionTable;
use super::zobrist::ZobristTable;

const WIN_SCORE: i32 = i32::MAX - 1;
const LOSS_SCORE: i32 = i32::MIN + 1;

pub struct SearchResult {
    pub best_move: Option<Pos>,
    pub score: i32,
}

/// One negamax call: returns the score of `board` for `color` to move,
/// `remaining` plies deep, under the alpha-beta window. Root-level best-move
/// bookkeeping is threaded through `root_best`, populated only when
/// `cur_depth == 0`.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &mut Board,
    zobrist: &ZobristTable,
    hash: u64,
    tt: &mut TranspositionTable,
    cur_depth: u32,
    remaining: i8,
    mut alpha: i32,
    mut beta: i32,
    color: Stone,
    machine: Stone,
    aggressiveness: f64,
    root_best: &mut Vec<Pos>,
) -> i32 {
    if remaining == 0 {
        return evaluate_board(board, machine, aggressiveness);
    }

    let is_machine = color == machine;

    if let Some(cached) = tt.probe(hash, remaining) {
        return cached;
    }

    let candidates = generate_candidates(board, color);
    if cur_depth == 0 && candidates.len() == 1 {
        root_best.clear();
        root_best.push(candidates[0]);
        return evaluate_move(board, candidates[0], color);
    }

    for p in candidates {
        let move_score = evaluate_move(board, p, color);
        let score = if move_score >= FIVE {
            if is_machine {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        } else {
            board
                .place(p.row as i32, p.col as i32, color)
                .expect("candidate cell was empty");
            let new_hash = zobrist.update_place(hash, p, color);
            let s = minimax(
                board,
                zobrist,
                new_hash,
                tt,
                cur_depth + 1,
                remaining - 1,
                alpha,
                beta,
                color.opponent(),
                machine,
                aggressiveness,
                root_best,
            );
            board.unplace(p.row as i32, p.col as i32).expect("just placed");
            s
        };

        if is_machine {
            if score > alpha {
                alpha = score;
                if cur_depth == 0 {
                    root_best.clear();
                    root_best.push(p);
                }
            } else if cur_depth == 0 && score == alpha {
                root_best.push(p);
            }
        } else if score < beta {
            beta = score;
        }

        if alpha >= beta {
            break;
        }
    }

    let result = if is_machine { alpha } else { beta };
    tt.store(hash, remaining, result);
    result
}

/// Pick among root moves tied at the best score by the offense+defense
/// composite: `round(aggressiveness * evaluate_move(p, machine)) +
/// evaluate_move(p, opponent)`.
fn break_root_tie(board: &Board, candidates: &[Pos], machine: Stone, aggressiveness: f64) -> Pos {
    let opponent = machine.opponent();
    candidates
        .iter()
        .copied()
        .max_by_key(|&p| {
            let offense = (aggressiveness * evaluate_move(board, p, machine) as f64).round() as i64;
            let defense = evaluate_move(board, p, opponent) as i64;
            offense + defense
        })
        .expect("candidates is non-empty")
}

/// One fixed-depth negamax search from the root.
pub fn search(
    board: &mut Board,
    zobrist: &ZobristTable,
    hash: u64,
    tt: &mut TranspositionTable,
    remaining: i8,
    machine: Stone,
    aggressiveness: f64,
) -> SearchResult {
    let mut root_best = Vec::new();
    let score = minimax(
        board,
        zobrist,
        hash,
        tt,
        0,
        remaining,
        LOSS_SCORE,
        WIN_SCORE,
        machine,
        machine,
        aggressiveness,
        &mut root_best,
    );

    let best_move = if root_best.len() > 1 {
        Some(break_root_tie(board, &root_best, machine, aggressiveness))
    } else {
        root_best.first().copied()
    };

    SearchResult { best_move, score }
}

/// Iterative deepening: call `search` at `remaining = 2, 4, ..., max_depth`,
/// stopping early if the returned score is already a proven win or loss.
pub fn deepening_minimax(
    board: &mut Board,
    zobrist: &ZobristTable,
    hash: u64,
    tt: &mut TranspositionTable,
    max_depth: i8,
    machine: Stone,
    aggressiveness: f64,
) -> SearchResult {
    let mut last = SearchResult {
        best_move: None,
        score: 0,
    };

    let mut remaining = 2;
    while remaining <= max_depth {
        let result = search(board, zobrist, hash, tt, remaining, machine, aggressiveness);
        let decisive = result.score.abs() >= FIVE;
        last = result;
        if decisive {
            break;
        }
        remaining += 2;
    }

    last
}
