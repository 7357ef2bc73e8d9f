//! Positional evaluator: score a single move, and the whole board.

use crate::board::{Board, Pos, Stone};

use super::patterns::{classify, PatternClass, HIGH_RISK, LOW_RISK, MIDDLE_RISK};
use super::window::{extract_window, DIRECTIONS};

/// Score a prospective move for `color` as though it were already placed.
///
/// Scans all four lines through `p`, classifies each against the pattern
/// catalog, sums the class scores, and adds one compound bonus (mutually
/// exclusive: at most one of high/middle/low risk applies) based on the
/// tally of closed-fours and open-threes across directions. Pure function
/// of the board and (p, c) — nothing is placed.
pub fn evaluate_move(board: &Board, p: Pos, color: Stone) -> i32 {
    let mut score = 0;
    let mut closed_fours = 0;
    let mut open_threes = 0;

    for &dir in &DIRECTIONS {
        let window = extract_window(board, p, color, dir);
        if let Some(class) = classify(&window) {
            score += class.score();
            match class {
                PatternClass::ClosedFour => closed_fours += 1,
                PatternClass::OpenThree => open_threes += 1,
                _ => {}
            }
        }
    }

    if closed_fours >= 2 {
        score += HIGH_RISK;
    } else if closed_fours >= 1 && open_threes >= 1 {
        score += MIDDLE_RISK;
    } else if open_threes >= 2 {
        score += LOW_RISK;
    }

    score
}

/// Score the whole board from `machine`'s perspective: `alpha * machine_total
/// - human_total`, where each stone on the board is scored as though it were
/// the last one placed. Positive favors the machine.
pub fn evaluate_board(board: &Board, machine: Stone, alpha: f64) -> i32 {
    let mut machine_total: i64 = 0;
    let mut human_total: i64 = 0;

    for row in 0..board.size() as i32 {
        for col in 0..board.size() as i32 {
            let stone = board.at(row, col).expect("scanning in-bounds cells");
            if stone == Stone::Empty {
                continue;
            }
            let pos = Pos::new(row as u8, col as u8);
            let s = evaluate_move(board, pos, stone) as i64;
            if stone == machine {
                machine_total += s;
            } else {
                human_total += s;
            }
        }
    }

    (alpha * machine_total as f64 - human_total as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_four_outscores_single_stone() {
        let mut board = Board::new();
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        board.place(7, 7, Stone::Black).unwrap();
        let lone = evaluate_move(&board, Pos::new(3, 3), Stone::Black);
        let four = evaluate_move(&board, Pos::new(7, 8), Stone::Black);
        assert!(four > lone);
    }

    #[test]
    fn double_open_three_gets_low_risk_bonus() {
        let mut board = Board::new();
        // Crossing open-threes through (7,7): one horizontal, one vertical.
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        board.place(5, 7, Stone::Black).unwrap();
        board.place(6, 7, Stone::Black).unwrap();
        let score = evaluate_move(&board, Pos::new(7, 7), Stone::Black);
        assert!(score >= 2 * PatternClass::OpenThree.score() + LOW_RISK);
    }

    #[test]
    fn evaluator_symmetric_under_color_swap() {
        let mut black_board = Board::new();
        black_board.place(7, 6, Stone::Black).unwrap();
        black_board.place(7, 8, Stone::White).unwrap();

        let mut white_board = Board::new();
        white_board.place(7, 6, Stone::White).unwrap();
        white_board.place(7, 8, Stone::Black).unwrap();

        let a = evaluate_move(&black_board, Pos::new(7, 7), Stone::Black);
        let b = evaluate_move(&white_board, Pos::new(7, 7), Stone::White);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_board(&board, Stone::Black, 1.8), 0);
    }
}
