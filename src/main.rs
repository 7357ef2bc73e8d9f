//! Text-mode demo: play a game of Gomoku against the engine from the
//! terminal. Not part of the core; a thin host around `AIEngine`.

use std::io::{self, Write};

use clap::Parser;
use gomoku::{completes_five, is_board_full, AIEngine, Board, Pos, Stone, BOARD_SIZE};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku against the engine")]
struct Args {
    /// Fixed search depth, overriding the engine's stones-played ladder.
    #[arg(long, default_value_t = 8)]
    depth: i8,

    /// Aggressiveness multiplier on the machine's side of the evaluation.
    #[arg(long)]
    aggressiveness: Option<f64>,

    /// Color the engine plays.
    #[arg(long, value_enum, default_value_t = Color::Black)]
    machine_color: Color,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(c: Color) -> Stone {
        match c {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

fn default_aggressiveness(machine: Stone) -> f64 {
    if machine == Stone::Black {
        1.8
    } else {
        0.5
    }
}

fn print_board(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{:>2}", col);
    }
    println!();
    for row in 0..BOARD_SIZE as i32 {
        print!("{:>3}", row);
        for col in 0..BOARD_SIZE as i32 {
            let ch = match board.at(row, col).unwrap() {
                Stone::Empty => '.',
                Stone::Black => 'X',
                Stone::White => 'O',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn read_human_move(board: &Board) -> Pos {
    loop {
        print!("your move (row col): ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(r), Some(c)) = (parts.next(), parts.next()) else {
            continue;
        };
        let (Ok(row), Ok(col)) = (r.parse::<i32>(), c.parse::<i32>()) else {
            continue;
        };
        if let Ok(Stone::Empty) = board.at(row, col) {
            return Pos::new(row as u8, col as u8);
        }
        println!("that cell is occupied or out of bounds");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let machine: Stone = args.machine_color.into();
    let aggressiveness = args.aggressiveness.unwrap_or_else(|| default_aggressiveness(machine));

    let mut board = Board::new();
    let mut engine = AIEngine::new();
    let mut to_move = Stone::Black;

    loop {
        print_board(&board);

        if is_board_full(&board) {
            println!("board full — draw");
            break;
        }

        let pos = if to_move == machine {
            let started = std::time::Instant::now();
            let mv = engine.next_move_at_depth(&mut board, machine, aggressiveness, args.depth);
            log::info!("engine chose {:?} in {:?}", mv, started.elapsed());
            mv
        } else {
            read_human_move(&board)
        };

        board.place(pos.row as i32, pos.col as i32, to_move).unwrap();

        if completes_five(&board, pos, to_move).unwrap() {
            print_board(&board);
            let winner = if to_move == machine { "engine" } else { "you" };
            println!("{} win with a move at ({}, {})", winner, pos.row, pos.col);
            break;
        }

        to_move = to_move.opponent();
    }
}
