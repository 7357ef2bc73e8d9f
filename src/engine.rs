//! Main AI engine: owns the persistent search state across a game and
//! exposes the single `next_move` operation the host calls each turn.

use crate::board::{Board, BoardError, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::search::{deepening_minimax, find_kill_move, KillTable, TranspositionTable, ZobristTable};

const TT_SIZE_MB: usize = 16;

/// Depth ladder bucket: `(main_depth, kill_depth)` as a function of stones
/// already on the board. The earliest bucket has no paired kill search.
fn depth_for(stones_played: u32) -> (i8, Option<i8>) {
    match stones_played {
        0..=6 => (6, None),
        7..=10 => (6, Some(8)),
        11..=30 => (8, Some(10)),
        31..=60 => (10, Some(12)),
        _ => (12, Some(12)),
    }
}

/// Owns the Zobrist table and both transposition tables so they persist
/// across calls within a game. Borrows the board mutably only for the
/// duration of a single `next_move` call.
pub struct AIEngine {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    kill_tt: KillTable,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(TT_SIZE_MB),
            kill_tt: KillTable::new(TT_SIZE_MB),
        }
    }

    /// Select the next move for `machine_color` on `board`.
    ///
    /// `aggressiveness` biases `evaluate_board` toward offense; `stones_played`
    /// only selects the depth ladder. The opening special case (empty board,
    /// machine plays black) returns the center without searching.
    pub fn next_move(
        &mut self,
        board: &mut Board,
        machine_color: Stone,
        aggressiveness: f64,
        stones_played: u32,
    ) -> Pos {
        if stones_played == 0 && machine_color == Stone::Black {
            log::info!("opening move: center (7, 7)");
            return Pos::new(7, 7);
        }

        let (main_depth, kill_depth) = depth_for(stones_played);
        self.search_at_depth(board, machine_color, aggressiveness, main_depth, kill_depth)
    }

    /// Like `next_move`, but bypasses the stones-played depth ladder in
    /// favor of an explicit depth. Used by the demo binary's `--depth`
    /// flag; the ladder-driven `next_move` remains the core contract.
    pub fn next_move_at_depth(
        &mut self,
        board: &mut Board,
        machine_color: Stone,
        aggressiveness: f64,
        max_depth: i8,
    ) -> Pos {
        self.search_at_depth(board, machine_color, aggressiveness, max_depth, Some(max_depth))
    }

    fn search_at_depth(
        &mut self,
        board: &mut Board,
        machine_color: Stone,
        aggressiveness: f64,
        main_depth: i8,
        kill_depth: Option<i8>,
    ) -> Pos {
        let hash = self.zobrist.hash(board);

        let result = deepening_minimax(
            board,
            &self.zobrist,
            hash,
            &mut self.tt,
            main_depth,
            machine_color,
            aggressiveness,
        );

        let mut chosen = result.best_move;

        let already_winning = chosen
            .map(|p| crate::eval::evaluate_move(board, p, machine_color) >= crate::eval::patterns::FIVE)
            .unwrap_or(false);

        if !already_winning {
            if let Some(max_kill_depth) = kill_depth {
                let kill_hash = self.zobrist.hash(board);
                if let Some(kill_move) = find_kill_move(
                    board,
                    &self.zobrist,
                    kill_hash,
                    &mut self.kill_tt,
                    max_kill_depth,
                    true,
                    machine_color,
                ) {
                    log::info!("kill search overrides main search: {:?}", kill_move);
                    chosen = Some(kill_move);
                }
            }
        }

        let mv = chosen.unwrap_or_else(|| {
            log::debug!("main and kill search both returned no move, picking any empty cell");
            any_empty_cell(board).expect("next_move called on a full board")
        });

        log::info!(
            "next_move: ({}, {}) score={} depth={}",
            mv.row,
            mv.col,
            result.score,
            main_depth
        );

        mv
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn any_empty_cell(board: &Board) -> Option<Pos> {
    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            if board.at(row, col).ok()? == Stone::Empty {
                return Some(Pos::new(row as u8, col as u8));
            }
        }
    }
    None
}

/// Four directions a five-in-a-row can run through a single cell.
const FIVE_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Host-facing game-over check: does the stone just placed at `pos`
/// complete five-in-a-row? Scans only the four lines through `pos` rather
/// than the whole board, since only the last move can have created a five.
pub fn completes_five(board: &Board, pos: Pos, color: Stone) -> Result<bool, BoardError> {
    for (dr, dc) in FIVE_DIRECTIONS {
        let mut count = 1;
        count += run_length(board, pos, color, dr, dc)?;
        count += run_length(board, pos, color, -dr, -dc)?;
        if count >= 5 {
            return Ok(true);
        }
    }
    Ok(false)
}

fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> Result<u32, BoardError> {
    let mut count = 0;
    let mut row = pos.row as i32 + dr;
    let mut col = pos.col as i32 + dc;
    while Pos::is_valid(row, col) && board.at(row, col)? == color {
        count += 1;
        row += dr;
        col += dc;
    }
    Ok(count)
}

/// Host-facing draw check: every cell occupied.
pub fn is_board_full(board: &Board) -> bool {
    board.count() as usize == TOTAL_CELLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_move_is_center() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let mv = engine.next_move(&mut board, Stone::Black, 1.8, 0);
        assert_eq!(mv, Pos::new(7, 7));
    }

    #[test]
    fn completes_five_detects_horizontal_win() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        board.place(7, 7, Stone::Black).unwrap();
        assert!(completes_five(&board, Pos::new(7, 5), Stone::Black).unwrap());
    }

    #[test]
    fn completes_five_false_on_short_run() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        assert!(!completes_five(&board, Pos::new(7, 4), Stone::Black).unwrap());
    }

    #[test]
    fn full_board_is_reported_full() {
        let mut board = Board::new();
        let mut color = Stone::Black;
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                board.place(row, col, color).unwrap();
                color = color.opponent();
            }
        }
        assert!(is_board_full(&board));
    }

    #[test]
    fn empty_board_is_not_full() {
        let board = Board::new();
        assert!(!is_board_full(&board));
    }

    #[test]
    fn board_restored_after_next_move() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        board.place(7, 7, Stone::Black).unwrap();
        board.place(3, 3, Stone::White).unwrap();
        let before = board.count();
        engine.next_move(&mut board, Stone::White, 0.5, 2);
        assert_eq!(board.count(), before);
    }
}
