//! VCF/VCT kill search: a depth-limited search restricted to forcing moves,
//! looking for a guaranteed win independent of the main alpha-beta search.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_move;
use crate::eval::patterns::{PatternClass, FIVE, HIGH_RISK, MIDDLE_RISK};
use crate::eval::window::{extract_window, DIRECTIONS};

use super::tt::KillTable;
use super::zobrist::ZobristTable;

/// Collect forcing-move candidates for `color`.
///
/// Mirrors §4.4's immediate-win and immediate-loss short-circuits, then
/// restricts the remaining candidates to closed-fours (VCF) and, when
/// `allow_threes` is set, open-threes as well (VCT).
fn find_vcx_candidates(board: &Board, color: Stone, allow_threes: bool) -> Vec<Pos> {
    let opponent = color.opponent();
    let mut five_for_me = None;
    let mut five_for_foe = None;
    let mut attacks = Vec::new();

    for row in 0..board.size() as i32 {
        for col in 0..board.size() as i32 {
            if board.at(row, col).expect("in-bounds scan") != Stone::Empty {
                continue;
            }
            let pos = Pos::new(row as u8, col as u8);
            let score = evaluate_move(board, pos, color);
            if score >= FIVE {
                five_for_me = Some(pos);
                continue;
            }
            let foe_score = evaluate_move(board, pos, opponent);
            if foe_score >= FIVE {
                five_for_foe = Some(pos);
                continue;
            }

            if score >= MIDDLE_RISK {
                attacks.push(pos);
                continue;
            }

            if has_class(board, pos, color, PatternClass::ClosedFour) {
                attacks.push(pos);
            } else if allow_threes
                && (has_class(board, pos, color, PatternClass::OpenThree)
                    || has_class(board, pos, opponent, PatternClass::OpenFour))
            {
                // VCT also accepts open-threes the mover creates, and moves
                // that block an open-four the attacker would otherwise have.
                attacks.push(pos);
            }
        }
    }

    if let Some(win) = five_for_me {
        return vec![win];
    }
    if let Some(defense) = five_for_foe {
        return vec![defense];
    }
    attacks
}

fn has_class(board: &Board, pos: Pos, color: Stone, class: PatternClass) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| crate::eval::patterns::classify(&extract_window(board, pos, color, dir)) == Some(class))
}

/// Forcing-sequence search. Returns the move that starts a forced win for
/// `color`, or `None` if no such sequence exists within `remaining` plies.
///
/// Machine-to-move and opponent-to-move have asymmetric handling at the
/// high-risk threshold and at the recursive `None` child: the machine keeps
/// trying siblings when a branch fails, the opponent stops the instant a
/// single escape is found (because any single reply that survives is enough
/// to refute the attack).
pub fn calc_vcx_kill(
    board: &mut Board,
    zobrist: &ZobristTable,
    hash: u64,
    tt: &mut KillTable,
    remaining: i8,
    allow_threes: bool,
    color: Stone,
    machine: Stone,
) -> Option<Pos> {
    if remaining <= 0 {
        return None;
    }

    if let Some(cached) = tt.probe(hash, remaining) {
        return cached;
    }

    let is_machine = color == machine;
    let candidates = find_vcx_candidates(board, color, allow_threes);

    let mut result = None;

    for p in candidates {
        let score = evaluate_move(board, p, color);

        if score >= HIGH_RISK {
            if is_machine {
                result = Some(p);
                break;
            } else {
                result = None;
                tt.store(hash, remaining, result);
                return result;
            }
        }

        board.place(p.row as i32, p.col as i32, color).expect("candidate cell was empty");
        let new_hash = zobrist.update_place(hash, p, color);
        let child = calc_vcx_kill(
            board,
            zobrist,
            new_hash,
            tt,
            remaining - 1,
            allow_threes,
            color.opponent(),
            machine,
        );
        board.unplace(p.row as i32, p.col as i32).expect("just placed");

        if is_machine {
            if child.is_some() {
                result = Some(p);
                break;
            }
            // child is none: this branch fails, keep trying siblings.
        } else {
            if child.is_none() {
                // the opponent escaped through this reply: stop immediately.
                result = None;
                tt.store(hash, remaining, result);
                return result;
            }
            // every reply considered so far still loses; keep checking.
            result = Some(p);
        }
    }

    tt.store(hash, remaining, result);
    result
}

/// Iterative-deepening wrapper: try increasing even depths up to
/// `max_depth`, returning the first non-`None` result.
pub fn find_kill_move(
    board: &mut Board,
    zobrist: &ZobristTable,
    hash: u64,
    tt: &mut KillTable,
    max_depth: i8,
    allow_threes: bool,
    machine: Stone,
) -> Option<Pos> {
    let mut depth = 2i8;
    while depth <= max_depth {
        if let Some(mv) = calc_vcx_kill(board, zobrist, hash, tt, depth, allow_threes, machine, machine) {
            return Some(mv);
        }
        depth += 2;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_immediate_win() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        let zt = ZobristTable::new();
        let mut tt = KillTable::new(1);
        let hash = zt.hash(&board);
        let result = find_kill_move(&mut board, &zt, hash, &mut tt, 4, true, Stone::Black);
        assert!(result == Some(Pos::new(7, 7)) || result == Some(Pos::new(7, 2)));
    }

    #[test]
    fn deeper_search_still_finds_shallow_win() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        board.place(7, 6, Stone::Black).unwrap();
        let zt = ZobristTable::new();
        let hash = zt.hash(&board);

        let mut shallow_tt = KillTable::new(1);
        let shallow = find_kill_move(&mut board, &zt, hash, &mut shallow_tt, 2, true, Stone::Black);
        let mut deep_tt = KillTable::new(1);
        let deep = find_kill_move(&mut board, &zt, hash, &mut deep_tt, 8, true, Stone::Black);
        assert!(shallow.is_some());
        assert!(deep.is_some());
    }

    #[test]
    fn no_kill_on_empty_board() {
        let mut board = Board::new();
        let zt = ZobristTable::new();
        let mut tt = KillTable::new(1);
        let hash = zt.hash(&board);
        let result = find_kill_move(&mut board, &zt, hash, &mut tt, 4, true, Stone::Black);
        assert_eq!(result, None);
    }

    #[test]
    fn board_is_restored_after_search() {
        let mut board = Board::new();
        board.place(7, 3, Stone::Black).unwrap();
        board.place(7, 4, Stone::Black).unwrap();
        board.place(7, 5, Stone::Black).unwrap();
        let before = board.clone();
        let zt = ZobristTable::new();
        let mut tt = KillTable::new(1);
        let hash = zt.hash(&board);
        find_kill_move(&mut board, &zt, hash, &mut tt, 6, true, Stone::Black);
        assert_eq!(board.count(), before.count());
    }
}
