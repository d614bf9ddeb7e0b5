//! Terminal helpers: coordinate parsing and text rendering of the boards.

#![cfg(feature = "std")]

use std::string::String;

use crate::ai::Pdf;
use crate::board::{Cell, Coord, ShotGrid};
use crate::common::ShotOutcome;
use crate::config::{ship_class_name, LENGTH, WIDTH};
use crate::game::Game;
use crate::player::Player;

/// Format a coordinate as column letter plus 1-based row, e.g. `(4, 0)` → `A5`.
pub fn coord_to_string(x: i32, y: i32) -> String {
    if x < 0 || y < 0 || y >= 26 {
        return format!("({}, {})", x, y);
    }
    let col = (b'A' + y as u8) as char;
    format!("{}{}", col, x + 1)
}

/// Parse `A5` style input into `(x, y)`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = (b'A' + WIDTH as u8 - 1) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= WIDTH {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, LENGTH))?;
    if row == 0 || row > LENGTH {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, LENGTH));
    }
    Ok(((row - 1) as i32, col as i32))
}

fn print_header() {
    std::print!("    ");
    for c in 0..WIDTH {
        std::print!(" {}", (b'A' + c as u8) as char);
    }
    std::println!();
}

/// Render a shot grid: `X` hit, `o` miss, `.` unknown.
pub fn print_shot_grid(grid: &ShotGrid) {
    print_header();
    for r in 0..LENGTH {
        std::print!("  {:2}", r + 1);
        for c in 0..WIDTH {
            let ch = match grid.cell(r, c) {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Unknown => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Render a player's own waters: their ships overlaid with the shots the
/// opponent has fired (`incoming` is the opponent's shot grid).
pub fn print_fleet(player: &Player, incoming: &ShotGrid) {
    print_header();
    for r in 0..LENGTH {
        std::print!("  {:2}", r + 1);
        for c in 0..WIDTH {
            let (x, y) = (r as i32, c as i32);
            let ship = player.ships().iter().any(|s| s.contains(x, y));
            let ch = match (incoming.cell(r, c), ship) {
                (Cell::Hit, _) => 'X',
                (Cell::Miss, _) => 'o',
                (Cell::Unknown, true) => 'S',
                (Cell::Unknown, false) => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
    std::println!("\n    Ships:");
    for ship in player.ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        std::println!(
            "      {} ({}): {} [{} left]",
            ship_class_name(ship.length()),
            ship.length(),
            status,
            ship.size()
        );
    }
}

/// Print a normalized probability distribution matrix.
pub fn print_probability_board(pdf: &Pdf) {
    std::println!("\nProbability distribution:");
    std::print!("   ");
    for c in 0..WIDTH {
        std::print!(" {:>4}", (b'A' + c as u8) as char);
    }
    std::println!();
    for (r, row) in pdf.iter().enumerate() {
        std::print!("{:2} ", r + 1);
        for v in row {
            std::print!(" {:4.2}", v);
        }
        std::println!();
    }
}

/// Both boards from `viewer`'s side, plus the step counter.
pub fn print_player_view(game: &Game, viewer: usize) {
    let me = &game.players()[viewer];
    let them = &game.players()[1 - viewer];
    std::println!("Step {} | enemy ships left: {}", game.step(), them.ships_left());
    std::println!("Opponent waters:");
    print_shot_grid(me.guesses());
    std::println!("\nYour waters:");
    print_fleet(me, them.guesses());
}

/// One-line description of a shot.
pub fn describe_outcome(coord: Coord, outcome: ShotOutcome) -> String {
    let at = coord_to_string(coord.0, coord.1);
    match outcome {
        ShotOutcome::GameOver => "The game is already over.".to_string(),
        ShotOutcome::Illegal => format!("{} is off the board or already resolved.", at),
        ShotOutcome::Miss => format!("Miss. Your shot at {} hit only water.", at),
        ShotOutcome::Hit => format!("HIT! Your shot at {} struck an enemy ship!", at),
        ShotOutcome::Sunk { length } => {
            format!("SUNK! You destroyed the enemy's {}!", ship_class_name(length))
        }
        ShotOutcome::Victory { length } => format!(
            "SUNK! You destroyed the enemy's {} and won the game!",
            ship_class_name(length)
        ),
    }
}
