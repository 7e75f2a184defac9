pub mod fill;

use tracing::debug;

use crate::board::Board;
use crate::error::ParseError;

/// What the interpreter loop should do after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Render,
    Exit,
}

/// One validated command line. Construction goes through [`Command::parse`],
/// which collapses every malformed line into `Invalid`; applying `Invalid`
/// is a no-op, so the loop never has to special-case bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New { width: i64, height: i64 },
    Clean,
    PointColor { x: i64, y: i64, color: String },
    VerticalLine { x: i64, y1: i64, y2: i64, color: String },
    HorizontalLine { x1: i64, x2: i64, y: i64, color: String },
    FloodFill { x: i64, y: i64, color: String },
    Show,
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match Self::try_parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line, %err, "ignoring malformed command");
                Command::Invalid
            }
        }
    }

    /// Dispatches on the first whitespace-delimited token; the rest of the
    /// line is the argument list for that variant.
    pub fn try_parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();
        match head {
            "I" => parse_new(&args),
            // No-argument commands ignore trailing tokens.
            "C" => Ok(Command::Clean),
            "L" => parse_point(&args),
            "V" => parse_vertical(&args),
            "H" => parse_horizontal(&args),
            "F" => parse_fill(&args),
            "S" => Ok(Command::Show),
            "X" => Ok(Command::Exit),
            other => Err(ParseError::UnknownCommand(other.to_owned())),
        }
    }

    pub fn apply(&self, board: &mut Board) -> Step {
        match self {
            Command::New { width, height } => {
                *board = Board::new(*width, *height);
            }
            Command::Clean => board.clear(),
            Command::PointColor { x, y, color } => board.set_color(*x, *y, color),
            Command::VerticalLine { x, y1, y2, color } => {
                for y in (*y1).min(*y2)..=(*y1).max(*y2) {
                    board.set_color(*x, y, color);
                }
            }
            Command::HorizontalLine { x1, x2, y, color } => {
                for x in (*x1).min(*x2)..=(*x1).max(*x2) {
                    board.set_color(x, *y, color);
                }
            }
            Command::FloodFill { x, y, color } => fill::flood_fill(board, *x, *y, color),
            Command::Show => return Step::Render,
            Command::Exit => return Step::Exit,
            Command::Invalid => {}
        }
        Step::Continue
    }
}

fn parse_new(args: &[&str]) -> Result<Command, ParseError> {
    let &[width, height] = args else {
        return Err(arg_count(2, args));
    };
    Ok(Command::New {
        width: positive(width)?,
        height: positive(height)?,
    })
}

fn parse_point(args: &[&str]) -> Result<Command, ParseError> {
    let &[x, y, color] = args else {
        return Err(arg_count(3, args));
    };
    Ok(Command::PointColor {
        x: positive(x)?,
        y: positive(y)?,
        color: color.to_owned(),
    })
}

fn parse_vertical(args: &[&str]) -> Result<Command, ParseError> {
    let &[x, y1, y2, color] = args else {
        return Err(arg_count(4, args));
    };
    Ok(Command::VerticalLine {
        x: positive(x)?,
        y1: positive(y1)?,
        y2: positive(y2)?,
        color: color.to_owned(),
    })
}

fn parse_horizontal(args: &[&str]) -> Result<Command, ParseError> {
    let &[x1, x2, y, color] = args else {
        return Err(arg_count(4, args));
    };
    Ok(Command::HorizontalLine {
        x1: positive(x1)?,
        x2: positive(x2)?,
        y: positive(y)?,
        color: color.to_owned(),
    })
}

fn parse_fill(args: &[&str]) -> Result<Command, ParseError> {
    let &[x, y, color] = args else {
        return Err(arg_count(3, args));
    };
    Ok(Command::FloodFill {
        x: positive(x)?,
        y: positive(y)?,
        color: color.to_owned(),
    })
}

fn positive(token: &str) -> Result<i64, ParseError> {
    let value: i64 = token
        .parse()
        .map_err(|_| ParseError::InvalidInteger(token.to_owned()))?;
    if value > 0 {
        Ok(value)
    } else {
        Err(ParseError::NonPositive(value))
    }
}

fn arg_count(expected: usize, args: &[&str]) -> ParseError {
    ParseError::ArgCount {
        expected,
        got: args.len(),
    }
}
