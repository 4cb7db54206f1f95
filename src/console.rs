//! Line-oriented text loop driving a [`GameEngine`].
//!
//! The console owns all user-facing wording. The engine only ever sees
//! integers and answers with [`MoveError`] variants, which are mapped to
//! messages here.

use crate::config::SessionConfig;
use crate::games::tictactoe::{GameEngine, MoveError, Status};
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Shown when the line is not two integers.
pub const NOT_NUMERIC: &str = "You should enter numbers!";
/// Shown for [`MoveError::OutOfRange`].
pub const OUT_OF_RANGE: &str = "Coordinates should be from 1 to 3!";
/// Shown for [`MoveError::CellOccupied`].
pub const OCCUPIED: &str = "This cell is occupied! Choose another one!";

/// Input line could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Anything other than exactly two whitespace-separated integers.
    #[display("Expected two numbers, got {input:?}")]
    NotNumeric {
        /// The offending line, trimmed.
        input: String,
    },
}

/// Parses a line such as `"2 3"` into `(row, col)`.
///
/// Range checking is left to the engine.
pub fn parse_coordinates(line: &str) -> Result<(i32, i32), InputError> {
    let not_numeric = || InputError::NotNumeric {
        input: line.trim().to_string(),
    };

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(not_numeric());
    };

    match (row.parse(), col.parse()) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err(not_numeric()),
    }
}

/// Parses a `;`-separated move script such as `"1 1; 2 2"`.
///
/// Blank segments are skipped, so a trailing `;` is allowed.
pub fn parse_script(script: &str) -> Result<Vec<(i32, i32)>, InputError> {
    script
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_coordinates)
        .collect()
}

/// Maps an engine error to the message shown to the player.
pub fn describe(error: &MoveError) -> &'static str {
    match error {
        MoveError::OutOfRange { .. } => OUT_OF_RANGE,
        MoveError::CellOccupied { .. } => OCCUPIED,
    }
}

/// Interactive session over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
    show_history: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: &SessionConfig) -> Self {
        Self {
            input,
            output,
            prompt: config.prompt().clone(),
            show_history: *config.show_history(),
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game reaches a terminal status or input runs out.
    ///
    /// On a terminal status its display string is printed. On end of input
    /// the current (unfinished) status is returned without it. Either way the
    /// move list follows when the session is configured to show history.
    ///
    /// # Errors
    ///
    /// Only I/O failures; bad moves are reported to the player and retried.
    #[instrument(skip_all)]
    pub fn run(&mut self, engine: &mut GameEngine) -> Result<Status> {
        writeln!(self.output, "{}", engine.render_board())?;

        while !engine.status().is_terminal() {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                info!(moves = engine.history().len(), "Input closed before game ended");
                writeln!(self.output)?;
                if self.show_history {
                    self.print_history(engine)?;
                }
                return Ok(engine.status());
            }

            let (row, col) = match parse_coordinates(&line) {
                Ok(coordinates) => coordinates,
                Err(error) => {
                    debug!(%error, "Unparseable input");
                    writeln!(self.output, "{}", NOT_NUMERIC)?;
                    continue;
                }
            };

            match engine.make_move(row, col) {
                Ok(()) => writeln!(self.output, "{}", engine.render_board())?,
                Err(error) => writeln!(self.output, "{}", describe(&error))?,
            }
        }

        let status = engine.status();
        writeln!(self.output, "{}", status)?;
        info!(%status, moves = engine.history().len(), "Game finished");
        if self.show_history {
            self.print_history(engine)?;
        }
        Ok(status)
    }

    /// Writes the numbered move list, one `"{ply}. {mark} {coordinate}"` line
    /// per move, under a `Moves:` header.
    pub fn print_history(&mut self, engine: &GameEngine) -> Result<()> {
        writeln!(self.output, "Moves:")?;
        for (ply, mov) in engine.history().iter().enumerate() {
            writeln!(self.output, "{}. {}", ply + 1, mov)?;
        }
        Ok(())
    }
}
