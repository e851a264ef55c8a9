//! Tests for command dispatch and exit codes

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use nestcol::cli::args::Cli;
use nestcol::cli::commands::{apply_cli_overrides, execute_command};
use nestcol::cli::error::CliResult;
use nestcol::config::{OutputFormat, Settings};
use nestcol::domain::SearchDepth;
use nestcol::exitcode;

const BOARD: &str = r#"{"A": ["x", {"B": ["p", {"C": ["1", "2"]}]}], "D": ["m"]}"#;

struct BoardFile {
    _dir: TempDir,
    path: PathBuf,
}

#[fixture]
fn board_file() -> BoardFile {
    write_board(BOARD)
}

fn write_board(content: &str) -> BoardFile {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.json");
    fs::write(&path, content).unwrap();
    BoardFile { _dir: dir, path }
}

fn run(board: &Path, args: &[&str]) -> CliResult<()> {
    let board = board.to_string_lossy().into_owned();
    let argv = ["nestcol", "--board", board.as_str()]
        .into_iter()
        .chain(args.iter().copied());
    execute_command(&Cli::parse_from(argv))
}

fn exit_code(result: CliResult<()>) -> i32 {
    result.map_or_else(|e| e.exit_code(), |()| exitcode::OK)
}

#[rstest]
#[case::absent_group(&["parent", "nope"])]
#[case::top_level_group(&["parent", "A"])]
fn given_group_without_parent_when_asking_parent_then_not_found(
    board_file: BoardFile,
    #[case] args: &[&str],
) {
    let err = run(&board_file.path, args).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
}

#[rstest]
fn given_nested_group_when_asking_parent_then_ok(board_file: BoardFile) {
    assert!(run(&board_file.path, &["parent", "B"]).is_ok());
    assert!(run(&board_file.path, &["parent", "C"]).is_ok());
}

#[rstest]
fn given_deep_group_and_shallow_flag_when_asking_parent_then_not_found(board_file: BoardFile) {
    let err = run(&board_file.path, &["--shallow", "parent", "C"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
}

#[rstest]
fn given_missing_parent_when_listing_entries_then_group_not_found(board_file: BoardFile) {
    let err = run(&board_file.path, &["entries", "Missing", "B"]).unwrap_err();
    assert_eq!(err.to_string(), "group not found: Missing");
    assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
}

#[rstest]
fn given_missing_child_when_listing_entries_then_not_found(board_file: BoardFile) {
    let err = run(&board_file.path, &["entries", "A", "Z"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
}

#[rstest]
#[case::unknown_group(&["move-entry", "nope", "0", "1"])]
#[case::missing_replace_target(&["replace", "A", "Z", "r1", "r2"])]
#[case::valid_move(&["move-entry", "C", "0", "1"])]
#[case::json_output(&["--json", "move-column", "0", "1"])]
fn given_board_command_when_group_missing_or_present_then_exits_ok(
    board_file: BoardFile,
    #[case] args: &[&str],
) {
    assert_eq!(exit_code(run(&board_file.path, args)), exitcode::OK);
}

#[rstest]
#[case::row(&["move-entry", "A", "0", "9"])]
#[case::column(&["move-column", "0", "5"])]
fn given_out_of_range_index_when_moving_then_usage(board_file: BoardFile, #[case] args: &[&str]) {
    assert_eq!(exit_code(run(&board_file.path, args)), exitcode::USAGE);
}

#[test]
fn given_missing_board_file_when_showing_then_noinput() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir.path().join("absent.json"), &["show"]);
    assert_eq!(exit_code(result), exitcode::NOINPUT);
}

#[test]
fn given_non_string_row_when_showing_then_dataerr() {
    let board = write_board(r#"{"A": [1]}"#);
    assert_eq!(exit_code(run(&board.path, &["show"])), exitcode::DATAERR);
}

#[rstest]
fn given_global_flags_when_resolving_settings_then_override_loaded_values(board_file: BoardFile) {
    let board = board_file.path.to_string_lossy().into_owned();
    let cli = Cli::parse_from(["nestcol", "show", "--board", board.as_str(), "--shallow", "--json"]);

    let settings = apply_cli_overrides(&cli, Settings::default());

    assert_eq!(settings.board_file.as_deref(), Some(board_file.path.as_path()));
    assert_eq!(settings.search_depth, SearchDepth::Shallow);
    assert_eq!(settings.output, OutputFormat::Json);
}
