//! Line protocol between the judge and the player.
//!
//! The judge writes the header (`W H`, `N`, `X0 Y0`) and then one token
//! per turn; the player answers each token with `X Y` on its own line.
//! Values are whitespace-separated, so line breaks only matter as
//! separators.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_knight::{Boundary, Feedback, GameError, GameReady, GridExtent, Point, TurnBudget};
use tracing::{debug, instrument, trace};

/// Splits an input stream into whitespace-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            trace!(line = %self.line.trim_end(), "Read line");
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    /// Returns the next token, failing at end of input.
    fn require(&mut self, what: &'static str) -> Result<String, GameError> {
        self.next_token()?.ok_or_else(|| GameError::InvalidArgument {
            what,
            detail: "missing (end of input)".to_string(),
        })
    }

    /// Parses the next token as an integer.
    pub fn integer(&mut self, what: &'static str) -> Result<i64, GameError> {
        let token = self.require(what)?;
        token
            .parse::<i64>()
            .map_err(|_| GameError::malformed(what, &token))
    }
}

/// The three header lines, validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameHeader {
    /// Grid size.
    pub extent: GridExtent,
    /// Turns allowed.
    pub budget: TurnBudget,
    /// Starting position.
    pub start: Point,
}

impl GameHeader {
    /// Reads and validates `W H`, `N`, `X0 Y0`.
    #[instrument(skip(tokens))]
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, GameError> {
        let width = tokens.integer("grid width")?;
        let height = tokens.integer("grid height")?;
        let extent = GridExtent::new(width, height)?;

        let budget = TurnBudget::new(tokens.integer("turn budget")?)?;

        let x = tokens.integer("start x")?;
        let y = tokens.integer("start y")?;
        let start = extent.point(x, y)?;

        debug!(%extent, turns = budget.turns(), %start, "Header read");
        Ok(Self {
            extent,
            budget,
            start,
        })
    }

    /// Builds the game this header describes.
    pub fn game(&self) -> Result<GameReady, GameError> {
        GameReady::new(self.extent, self.budget, self.start)
    }
}

/// [`Boundary`] over a token stream and an output stream.
#[derive(Debug)]
pub struct LineBoundary<R, W> {
    tokens: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> LineBoundary<R, W> {
    /// Joins an already-positioned token reader with an output stream.
    pub fn new(tokens: TokenReader<R>, output: W) -> Self {
        Self { tokens, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Boundary for LineBoundary<R, W> {
    fn feedback(&mut self) -> Result<Option<Feedback>, GameError> {
        match self.tokens.next_token()? {
            Some(token) => Feedback::from_str(&token)
                .map(Some)
                .map_err(|_| GameError::malformed("feedback token", &token)),
            None => {
                debug!("End of input");
                Ok(None)
            }
        }
    }

    fn emit(&mut self, guess: Point) -> Result<(), GameError> {
        writeln!(self.output, "{}", guess)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines() {
        let mut tokens = TokenReader::new(Cursor::new("10 12\n\n  6\nUR"));
        assert_eq!(tokens.integer("a").unwrap(), 10);
        assert_eq!(tokens.integer("b").unwrap(), 12);
        assert_eq!(tokens.integer("c").unwrap(), 6);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("UR"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_non_integer_is_invalid_argument() {
        let mut tokens = TokenReader::new(Cursor::new("ten"));
        assert!(matches!(
            tokens.integer("grid width"),
            Err(GameError::InvalidArgument { what: "grid width", .. })
        ));
    }

    #[test]
    fn test_header_validates_ranges() {
        let mut tokens = TokenReader::new(Cursor::new("20000 10\n5\n0 0\n"));
        assert!(matches!(
            GameHeader::read(&mut tokens),
            Err(GameError::InvalidArgument { what: "grid width", .. })
        ));

        let mut tokens = TokenReader::new(Cursor::new("10 10\n101\n0 0\n"));
        assert!(matches!(
            GameHeader::read(&mut tokens),
            Err(GameError::InvalidArgument { what: "turn budget", .. })
        ));

        let mut tokens = TokenReader::new(Cursor::new("10 10\n5\n0 10\n"));
        assert!(matches!(
            GameHeader::read(&mut tokens),
            Err(GameError::InvalidArgument { what: "start y", .. })
        ));
    }

    #[test]
    fn test_boundary_parses_tokens_and_writes_guesses() {
        let tokens = TokenReader::new(Cursor::new("DR\nup-left\nXX\n"));
        let mut boundary = LineBoundary::new(tokens, Vec::new());

        assert_eq!(boundary.feedback().unwrap(), Some(Feedback::DownRight));
        assert_eq!(boundary.feedback().unwrap(), Some(Feedback::UpLeft));
        assert!(matches!(
            boundary.feedback(),
            Err(GameError::InvalidArgument { what: "feedback token", .. })
        ));
        assert_eq!(boundary.feedback().unwrap(), None);

        boundary.emit(Point::new(4, 3)).unwrap();
        assert_eq!(boundary.into_output(), b"4 3\n");
    }
}
