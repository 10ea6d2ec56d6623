use puzzler::{
    App,
    help::{ALREADY_CORRECT, INVALID_OPTION, OPTION_PROMPT, PUZZLE_FILE_ERROR, PUZZLE_PROMPT, SOLVED},
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SWORD: &str = "\
Row Index,Column Index,Down/Across,Answer,Clue
0,0,A,SWORD,Blade with a hilt
2,0,A,ASPEN,Tree with quaking leaves
4,0,A,ENTER,Go in
0,0,D,SLATE,Roofing stone
0,4,D,DONOR,Blood bank visitor
";

const HAT: &str = "\
Row Index,Column Index,Down/Across,Answer,Clue
0,0,D,HAT,Fedora or beret
";

fn write_puzzle(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run a whole session over `input` and return everything written.
fn play(initial: Option<&Path>, input: &str, show_answers: bool) -> String {
    let mut out = Vec::new();
    let mut app = App::new(input.as_bytes(), &mut out);
    app.show_answers = show_answers;
    app.run(initial).unwrap();
    String::from_utf8(out).unwrap()
}

/// Output produced in response to each option prompt, in order.
fn responses(output: &str) -> Vec<&str> {
    output.split(OPTION_PROMPT).skip(1).collect()
}

#[test]
fn test_reveal_everything_solves() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(
        Some(path.as_path()),
        "R 0 0 A\nR 2 0 A\nR 4 0 A\nR 0 0 D\nR 0 4 D\nH\n",
        false,
    );

    assert!(output.ends_with(&format!("{SOLVED}\n")), "{output}");
    assert_eq!(output.matches("Crossword Puzzler --").count(), 1);
    assert!(output.contains("2 |  A    S    P    E    N  "));
    assert!(output.contains("Filled: 100%"));
}

#[test]
fn test_guess_reprompts_until_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(Some(path.as_path()), "G 0 0 A\nHI\nsw0rd\nsword\nQ\n", false);

    assert!(output.contains("Guess length does not match the length of the clue"));
    assert!(output.contains("Guess contains invalid character '0'"));
    assert!(output.contains("0 |  S    W    O    R    D  "));
    assert!(!output.contains(SOLVED));
}

#[test]
fn test_blank_guess() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(Some(path.as_path()), "G 0 4 D\nd_n_r\nQ\n", false);
    let answer = responses(&output)[0];

    assert!(answer.contains("0 |  _    _    _    _    D  "), "{answer}");
    assert!(answer.contains("1 |  _    ■    ■    ■    _  "), "{answer}");
    assert!(answer.contains("2 |  _    _    _    _    N  "), "{answer}");
}

#[test]
fn test_hints() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(
        Some(path.as_path()),
        "T 2 0 A\nG 0 0 A\nSWORE\nT 0 0 A\nR 0 0 A\nT 0 0 A\nQ\n",
        false,
    );
    let responses = responses(&output);

    assert!(responses[0].starts_with("Letter 1 is wrong, it should be A"));
    assert!(responses[2].starts_with("Letter 5 is wrong, it should be D"));
    assert!(responses[4].starts_with(ALREADY_CORRECT));
}

#[test]
fn test_invalid_commands() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(Some(path.as_path()), "X\nG 1 1 A\nR 0 0\nC x\n\nQ\n", false);

    assert_eq!(output.matches(INVALID_OPTION).count(), 5);
}

#[test]
fn test_list_some_clues() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(Some(path.as_path()), "C 1\nC 0\nQ\n", false);
    let responses = responses(&output);

    assert_eq!(
        responses[0],
        "\nAcross\n(0, 0) Across: Blade with a hilt\n\nDown\n(0, 0) Down: Roofing stone\n"
    );
    assert_eq!(
        responses[1],
        "\nAcross\n\
         (0, 0) Across: Blade with a hilt\n\
         (2, 0) Across: Tree with quaking leaves\n\
         (4, 0) Across: Go in\n\
         \nDown\n\
         (0, 0) Down: Roofing stone\n\
         (0, 4) Down: Blood bank visitor\n"
    );
}

#[test]
fn test_list_with_answers() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);

    let output = play(Some(path.as_path()), "Q\n", true);

    assert!(output.contains("(0, 4) Down: Blood bank visitor --- DONOR"));
}

#[test]
fn test_prompt_until_puzzle_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);
    let missing = dir.path().join("missing.csv");
    let bad = write_puzzle(&dir, "bad.csv", "Row Index,Column Index\n0,0\n");

    let input = format!("{}\n{}\n{}\nQ\n", missing.display(), bad.display(), path.display());
    let output = play(None, &input, false);

    assert_eq!(output.matches(PUZZLE_PROMPT).count(), 3);
    assert_eq!(output.matches(PUZZLE_FILE_ERROR).count(), 2);
    assert!(output.contains("(0, 0) Across: Blade with a hilt"));
}

#[test]
fn test_unreadable_initial_puzzle_prompts() {
    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);
    let missing = dir.path().join("missing.csv");

    let input = format!("{}\nQ\n", path.display());
    let output = play(Some(missing.as_path()), &input, false);

    assert!(output.starts_with(PUZZLE_FILE_ERROR));
    assert_eq!(output.matches(PUZZLE_PROMPT).count(), 1);
}

#[test]
fn test_restart_with_new_puzzle() {
    let dir = TempDir::new().unwrap();
    let sword = write_puzzle(&dir, "sword.csv", SWORD);
    let hat = write_puzzle(&dir, "hat.csv", HAT);

    let input = format!("G 0 0 A\nSWORD\nS\nnope.csv\n{}\nR 0 0 D\nQ\n", hat.display());
    let output = play(Some(sword.as_path()), &input, false);

    assert_eq!(output.matches(PUZZLE_FILE_ERROR).count(), 1);
    assert!(output.contains("(0, 0) Down: Fedora or beret"));
    assert!(output.contains("2 |  T    ■    ■    ■    ■  "));
    assert!(output.ends_with(&format!("{SOLVED}\n")), "{output}");
}

#[test]
fn test_end_of_input() {
    assert_eq!(play(None, "", false), PUZZLE_PROMPT);

    let dir = TempDir::new().unwrap();
    let path = write_puzzle(&dir, "sword.csv", SWORD);
    let output = play(Some(path.as_path()), "G 0 0 A\nSW\n", false);
    assert!(output.ends_with("(expected 5, got 2).\n\nEnter your guess (use _ for blanks): "));
}
