use std::io;

use paintboard::app::run_loop;

fn run_script(script: &str) -> String {
    let lines = script
        .lines()
        .map(|line| Ok(line.to_owned()))
        .collect::<Vec<io::Result<String>>>();
    let mut out = Vec::new();
    run_loop(lines.into_iter(), &mut out, false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn fill_then_point_scenario() {
    let out = run_script("I 5 6\nF 3 3 J\nL 1 1 A\nS\nX\n");
    assert_eq!(out, "AJJJJ\nJJJJJ\nJJJJJ\nJJJJJ\nJJJJJ\nJJJJJ\n");
}

#[test]
fn new_board_renders_all_default() {
    let out = run_script("I 4 3\nS\n");
    assert_eq!(out, "OOOO\nOOOO\nOOOO\n");
}

#[test]
fn line_commands_paint_their_segments() {
    let out = run_script("I 5 6\nV 2 3 4 W\nH 3 4 2 Z\nS\n");
    assert_eq!(out, "OOOOO\nOOZZO\nOWOOO\nOWOOO\nOOOOO\nOOOOO\n");
}

#[test]
fn clean_resets_between_shows() {
    let out = run_script("I 2 2\nF 1 1 J\nS\nC\nS\n");
    assert_eq!(out, "JJ\nJJ\nOO\nOO\n");
}

#[test]
fn malformed_lines_leave_the_board_byte_for_byte_unchanged() {
    let clean = run_script("I 3 3\nL 2 2 A\nS\n");
    let noisy = run_script("I 3 3\nL 2 2 A\nQ 1 1\nL 2 A\nV 1 0 2 W\nH x 2 1 Z\nF 1 -1 J\nS\n");
    assert_eq!(noisy, clean);
}

#[test]
fn exit_suppresses_everything_after_it() {
    let out = run_script("I 2 2\nS\nX\nF 1 1 J\nS\n");
    assert_eq!(out, "OO\nOO\n");
}

#[test]
fn new_replaces_the_board_mid_session() {
    let out = run_script("I 2 2\nF 1 1 J\nI 3 1\nS\n");
    assert_eq!(out, "OOO\n");
}
