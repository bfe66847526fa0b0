//! Console prompts and rendering.
//!
//! Works over any `BufRead`/`Write` pair so sessions can be driven from
//! in-memory buffers in tests. Parsing of raw tokens happens here; the engine
//! only ever sees 0-based cell indices.

use crate::games::tictactoe::{BOARD_CELLS, Board, Mark, Outcome, Player};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

const RULE: &str = "********************************************************************";

/// Text console for one session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the welcome banner and the rules.
    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "\t\tWelcome to TICTACTOE!!! ")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "RULES:")?;
        writeln!(
            self.output,
            "\t - You play against the computer; you always move first."
        )?;
        writeln!(
            self.output,
            "\t - Each turn a player places their symbol (X or O) on an empty spot."
        )?;
        writeln!(
            self.output,
            "\t - First player to draw three symbols in a straight line (vertical, horizontal or diagonal) wins the game.\n"
        )
    }

    /// Prints the banner shown once players are set up.
    pub fn print_begin(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "\t\tBEGIN GAME!!! ")?;
        writeln!(self.output, "{}", RULE)
    }

    /// Asks a yes/no question until the answer is `y` or `n`.
    ///
    /// End of input counts as `n`.
    #[instrument(skip(self))]
    pub fn decision(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{}\t", question)?;
            self.output.flush()?;
            match self.read_token()?.as_deref() {
                None => return Ok(false),
                Some("y") => return Ok(true),
                Some("n") => return Ok(false),
                Some(other) => {
                    debug!(answer = other, "Invalid decision");
                    writeln!(self.output, "Invalid answer!")?;
                }
            }
        }
    }

    /// Asks for the player's name. `None` at end of input.
    pub fn ask_name(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Enter your player name: ")?;
        self.output.flush()?;
        self.read_token()
    }

    /// Asks which mark the player wants until they answer X or O.
    pub fn ask_mark(&mut self, name: &str) -> io::Result<Option<Mark>> {
        loop {
            write!(self.output, "{} choose your symbol (X or O): ", name)?;
            self.output.flush()?;
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };
            match token.parse::<Mark>() {
                Ok(mark) => {
                    writeln!(self.output)?;
                    return Ok(Some(mark));
                }
                Err(_) => writeln!(self.output, "Invalid answer! Choose X or O.")?,
            }
        }
    }

    /// Prompts for a spot (1-9) until the answer names an empty cell on `board`.
    ///
    /// Returns the 0-based cell index, or `None` at end of input.
    #[instrument(skip(self, board))]
    pub fn read_move(&mut self, board: &Board, mark: Mark) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "Choose a spot to place an '{}' (1 - 9): ", mark)?;
            self.output.flush()?;
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };

            if !token.chars().all(|c| c.is_ascii_digit()) {
                writeln!(self.output, "Invalid answer! Must enter a number.")?;
                continue;
            }

            let cell = token
                .parse::<usize>()
                .ok()
                .and_then(|spot| spot.checked_sub(1))
                .filter(|&cell| cell < BOARD_CELLS);
            let Some(cell) = cell else {
                writeln!(
                    self.output,
                    "Invalid answer! Spots are numbered from 1 to 9."
                )?;
                continue;
            };

            if let Some(Some(taken)) = board.get(cell).map(|s| s.mark()) {
                writeln!(
                    self.output,
                    "Invalid answer! There is already an '{}' there!\nChoose somewhere else.",
                    taken
                )?;
                continue;
            }

            debug!(cell, "Move read");
            return Ok(Some(cell));
        }
    }

    /// Prints a line of text.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Draws the board as a 3x3 grid.
    pub fn render_board(&mut self, board: &Board) -> io::Result<()> {
        let s = board.squares();
        write!(
            self.output,
            "\n   |   |   \n {} | {} | {} \n___|___|___\n   |   |   \n {} | {} | {} \n___|___|___\n   |   |   \n {} | {} | {} \n   |   |   \n",
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7], s[8]
        )
    }

    /// Announces the end of a round.
    pub fn announce(&mut self, outcome: Outcome, winner: Option<&Player>) -> io::Result<()> {
        match (outcome, winner) {
            (Outcome::Win(_), Some(player)) => {
                writeln!(self.output, "{} wins!", player.name())
            }
            (Outcome::Win(mark), None) => writeln!(self.output, "{} wins!", mark),
            (Outcome::Tie, _) => writeln!(self.output, "Tie!"),
        }
    }

    /// Prints the standings table.
    pub fn print_results(&mut self, players: &[&Player]) -> io::Result<()> {
        write!(self.output, "{}", results_table(players))
    }

    /// Next whitespace-separated token, skipping blank lines. `None` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}

const COLUMNS: [&str; 3] = ["PLAYERS", "SYMBOL", "POINTS"];
const PADDING: usize = 1;

/// Renders the standings as a bordered table.
///
/// Every column is as wide as the longest header or value in the table.
///
/// ```
/// use randtoe::{Mark, Player, results_table};
///
/// let ana = Player::new(Mark::X, "Ana");
/// let table = results_table(&[&ana]);
/// assert!(table.contains("| Ana     | X       | 0       |"));
/// ```
pub fn results_table(players: &[&Player]) -> String {
    let rows: Vec<[String; 3]> = players
        .iter()
        .map(|p| {
            [
                p.name().clone(),
                p.mark().to_string(),
                p.score().to_string(),
            ]
        })
        .collect();

    let width = rows
        .iter()
        .flatten()
        .map(|v| v.chars().count())
        .chain(COLUMNS.iter().map(|c| c.len()))
        .max()
        .unwrap_or(0);
    let length = (width + 2 * PADDING + 1) * COLUMNS.len() + 1;

    let line = |symbol: char| -> String { std::iter::repeat_n(symbol, length).collect() };
    let row = |cells: &[&str]| -> String {
        let pad = " ".repeat(PADDING);
        let mut out = String::from("|");
        for cell in cells {
            let filler = " ".repeat(width - cell.chars().count());
            out.push_str(&format!("{pad}{cell}{filler}{pad}|"));
        }
        out
    };

    let mut table = Vec::new();
    table.push(line('*'));
    table.push(row(&COLUMNS[..]));
    table.push(line('='));
    for (i, values) in rows.iter().enumerate() {
        if i > 0 {
            table.push(line('_'));
        }
        table.push(row(&values.iter().map(String::as_str).collect::<Vec<_>>()));
    }
    table.push(line('*'));

    let mut out = table.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_decision_reprompts() {
        let mut c = console("maybe\ny\n");
        assert!(c.decision("Play again?").unwrap());
        let out = output(c);
        assert_eq!(out.matches("Play again?").count(), 2);
        assert!(out.contains("Invalid answer!"));
    }

    #[test]
    fn test_decision_end_of_input_is_no() {
        let mut c = console("");
        assert!(!c.decision("Play again?").unwrap());
    }

    #[test]
    fn test_read_move_validates_tokens() {
        let board: Board = "X__ ___ ___".parse().unwrap();
        let mut c = console("abc\n0\n10\n1\n\n5\n");
        assert_eq!(c.read_move(&board, Mark::O).unwrap(), Some(4));

        let out = output(c);
        assert!(out.contains("Invalid answer! Must enter a number."));
        assert_eq!(out.matches("Spots are numbered from 1 to 9.").count(), 2);
        assert!(out.contains("There is already an 'X' there!"));
    }

    #[test]
    fn test_read_move_huge_number_is_out_of_range() {
        let board = Board::new();
        let mut c = console("99999999999999999999999\n9\n");
        assert_eq!(c.read_move(&board, Mark::X).unwrap(), Some(8));
        assert!(output(c).contains("Spots are numbered from 1 to 9."));
    }

    #[test]
    fn test_ask_mark_accepts_zero_as_o() {
        let mut c = console("Z\n0\n");
        assert_eq!(c.ask_mark("Ana").unwrap(), Some(Mark::O));
        assert!(output(c).contains("Invalid answer! Choose X or O."));
    }

    #[test]
    fn test_render_board() {
        let board: Board = "X__ _O_ __X".parse().unwrap();
        let mut c = console("");
        c.render_board(&board).unwrap();
        let out = output(c);
        assert!(out.contains(" X |   |   \n"));
        assert!(out.contains("   | O |   \n"));
        assert!(out.contains("   |   | X \n"));
    }

    #[test]
    fn test_results_table_layout() {
        let mut ana = Player::new(Mark::X, "Ana");
        let mut computer = Player::new(Mark::O, "Computer");
        ana.record_win();
        computer.record_tie();

        let expected = "\
**********************************
| PLAYERS  | SYMBOL   | POINTS   |
==================================
| Ana      | X        | 1        |
__________________________________
| Computer | O        | 0.5      |
**********************************
";
        assert_eq!(results_table(&[&ana, &computer]), expected);
    }
}
