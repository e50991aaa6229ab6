//! Grid rendering and input parsing for the terminal interface.

use crate::board::{Board, CellStatus};
use crate::coord::Coordinate;
use crate::ship::Direction;

/// Render a board as a text grid: columns numbered across the top, rows
/// lettered down the side. With `reveal` unset, un-hit ship cells stay
/// hidden, which is the view a player gets of the enemy board.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for column in 1..=board.width() {
        out.push_str(&format!("{:>3}", column));
    }
    out.push('\n');
    for row in 1..=board.height() {
        let letter = Coordinate::new(1, row).row_letter().unwrap_or('?');
        out.push_str(&format!("  {} ", letter));
        for column in 1..=board.width() {
            let glyph = match board.cell_status(Coordinate::new(column, row)) {
                CellStatus::Hit => 'X',
                CellStatus::Miss => 'o',
                CellStatus::UnshotShip if reveal => 'S',
                _ => '.',
            };
            out.push_str(&format!("{:>3}", glyph));
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("  Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("  Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Parse a coordinate in the prompt form: column number then row letter,
/// as "5 C" or "5C".
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let compact: String = input.split_whitespace().collect();
    if compact.is_empty() {
        return Err("empty input".to_string());
    }
    let digits: String = compact.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err("expected a column number first, e.g. 5 C".to_string());
    }
    let column: i32 = digits
        .parse()
        .map_err(|_| format!("invalid column '{}'", digits))?;
    if column == 0 {
        return Err("column numbering starts at 1".to_string());
    }
    let rest: Vec<char> = compact.chars().skip(digits.len()).collect();
    match rest[..] {
        [letter] => Coordinate::from_row_letter(column, letter).map_err(|e| e.to_string()),
        [] => Err("missing row letter, e.g. 5 C".to_string()),
        _ => Err(format!("trailing input after '{}{}'", digits, rest[0])),
    }
}

/// Parse a ship direction: `h`/`horizontal` or `v`/`vertical`.
pub fn parse_direction(input: &str) -> Result<Direction, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Direction::Horizontal),
        "v" | "vertical" => Ok(Direction::Vertical),
        other => Err(format!("unknown direction '{}' - use h or v", other)),
    }
}
