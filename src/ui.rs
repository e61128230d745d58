#![cfg(feature = "std")]

//! Terminal rendering and coordinate input for the interactive binary.

use std::string::{String, ToString};

use crate::{
    board::Board,
    common::GuessResult,
    config::BOARD_SIZE,
    coord::Coord,
    game::{GameSession, GameStatus},
    replay::ReplayView,
};

/// Parse "A5"-style input: column letter, then 1-based row.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A');
    let row_str: String = chars.collect();
    let row: u8 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    Coord::new(col, row - 1).ok_or_else(|| format!("{} is off the board", input.to_uppercase()))
}

fn print_grid<F>(cell: F)
where
    F: Fn(Coord) -> char,
{
    std::println!("    ╔═══════════════════════╗");
    std::print!("    ║  ");
    for x in 0..BOARD_SIZE {
        std::print!(" {}", (b'A' + x) as char);
    }
    std::println!(" ║");
    std::println!("    ╠═══════════════════════╣");
    for y in 0..BOARD_SIZE {
        std::print!("    ║ {:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let ch = Coord::new(x, y).map_or(' ', &cell);
            std::print!(" {}", ch);
        }
        std::println!(" ║");
    }
    std::println!("    ╚═══════════════════════╝");
}

fn tile_char(board: &Board, coord: Coord, reveal: bool) -> char {
    let tile = board.tile(coord);
    match tile.shot {
        Some(GuessResult::Sunk) => '#',
        Some(GuessResult::Hit) => 'X',
        Some(GuessResult::Miss) => 'o',
        None if reveal && tile.occupied => 'S',
        None => '.',
    }
}

/// Print a board; ships are drawn only when `reveal` is set.
pub fn print_board(board: &Board, reveal: bool) {
    print_grid(|c| tile_char(board, c, reveal));
    if reveal {
        std::println!("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
        std::println!("    Ships afloat: {}", board.ships_afloat());
    } else {
        std::println!("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
}

/// Opponent board on top, own board below.
pub fn print_session<R: rand::RngCore>(session: &GameSession<R>) {
    std::println!("Opponent board:");
    print_board(session.ai_board(), false);
    std::println!("\nYour board:");
    print_board(session.player_board(), true);
}

/// Draw one frame of a replay over the human's fleet.
pub fn print_replay_frame(fleet: &Board, view: &ReplayView) {
    std::println!("Your shots:");
    print_grid(|c| {
        if view.player_hits.has(c) {
            'X'
        } else if view.player_misses.has(c) {
            'o'
        } else {
            '.'
        }
    });
    std::println!("AI shots:");
    print_grid(|c| {
        if view.ai_hits.has(c) {
            'X'
        } else if view.ai_misses.has(c) {
            'o'
        } else if fleet.ship_map().has(c) {
            'S'
        } else {
            '.'
        }
    });
}

pub fn print_game_over(status: GameStatus) {
    std::println!("\n╔══════════════════════════════════════════════════════════╗");
    std::println!("║                   GAME OVER                              ║");
    std::println!("╚══════════════════════════════════════════════════════════╝\n");
    match status {
        GameStatus::Won => {
            std::println!("VICTORY!");
            std::println!("You have sunk all enemy ships!");
        }
        GameStatus::Lost => {
            std::println!("DEFEAT");
            std::println!("All your ships have been destroyed.");
        }
        GameStatus::InProgress => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_then_row() {
        assert_eq!(parse_coord("A1"), Ok(Coord::new(0, 0).unwrap()));
        assert_eq!(parse_coord("j10"), Ok(Coord::new(9, 9).unwrap()));
        assert_eq!(parse_coord(" c4 "), Ok(Coord::new(2, 3).unwrap()));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
    }
}
