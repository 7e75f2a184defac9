use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::board::Board;
use crate::commands::{Command, Step};
use crate::config::PROMPT;
use crate::error::AppError;

/// Runs the interpreter over the given command files, or over stdin when
/// none are given. Files are chained into one logical stream sharing a
/// single board.
pub fn run(files: &[PathBuf]) -> Result<(), AppError> {
    info!(files = files.len(), "starting paint session");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if files.is_empty() {
        let prompt = io::stdin().is_terminal();
        run_loop(io::stdin().lock().lines(), &mut out, prompt)
    } else {
        run_loop(file_lines(files)?, &mut out, false)
    }
}

fn file_lines(files: &[PathBuf]) -> Result<impl Iterator<Item = io::Result<String>>, AppError> {
    let mut readers = Vec::with_capacity(files.len());
    for path in files {
        debug!(path = %path.display(), "reading command file");
        readers.push(BufReader::new(File::open(path)?));
    }
    Ok(readers.into_iter().flat_map(BufRead::lines))
}

/// One board, one pass over the line stream: parse, apply, render on Show,
/// stop on Exit or end of input. Malformed lines were already collapsed to
/// no-ops by the parser, so nothing here aborts the loop except real I/O
/// failures.
pub fn run_loop<I, W>(lines: I, out: &mut W, prompt: bool) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let mut board = Board::new(0, 0);
    if prompt {
        show_prompt(out)?;
    }
    for line in lines {
        match Command::parse(&line?).apply(&mut board) {
            Step::Continue => {}
            Step::Render => {
                out.write_all(board.render().as_bytes())?;
                out.flush()?;
            }
            Step::Exit => return Ok(()),
        }
        if prompt {
            show_prompt(out)?;
        }
    }
    Ok(())
}

fn show_prompt<W: Write>(out: &mut W) -> Result<(), AppError> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, prompt: bool) -> String {
        let lines = script
            .lines()
            .map(|line| Ok(line.to_owned()))
            .collect::<Vec<io::Result<String>>>();
        let mut out = Vec::new();
        run_loop(lines.into_iter(), &mut out, prompt).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn show_writes_the_rendered_board() {
        let out = run_script("I 2 2\nL 1 1 A\nS\n", false);
        assert_eq!(out, "AO\nOO\n");
    }

    #[test]
    fn exit_stops_processing_later_lines() {
        let out = run_script("I 2 2\nX\nS\n", false);
        assert_eq!(out, "");
    }

    #[test]
    fn end_of_input_stops_the_loop_cleanly() {
        let out = run_script("I 2 2\nL 1 1 A\n", false);
        assert_eq!(out, "");
    }

    #[test]
    fn malformed_lines_do_not_abort_or_leak_errors() {
        let out = run_script("I 2 2\nbogus\nL 0 0 A\nI nine 9\nS\n", false);
        assert_eq!(out, "OO\nOO\n");
    }

    #[test]
    fn prompt_precedes_every_read_when_interactive() {
        let out = run_script("I 2 2\nS\n", true);
        assert_eq!(out, "> > OO\nOO\n> ");
    }

    #[test]
    fn show_before_any_new_renders_the_empty_board() {
        let out = run_script("S\n", false);
        assert_eq!(out, "");
    }
}
