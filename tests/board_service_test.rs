//! Tests for BoardService and the service container

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use nestcol::application::services::BoardService;
use nestcol::application::{ApplicationError, Operation};
use nestcol::config::Settings;
use nestcol::domain::{Board, SearchDepth};
use nestcol::infrastructure::di::ServiceContainer;
use nestcol::infrastructure::traits::{FileSystem, MemoryFileSystem, RealFileSystem};

fn memory_service(fs: MemoryFileSystem) -> BoardService {
    BoardService::new(Arc::new(fs))
}

#[test]
fn given_board_file_when_loading_then_decodes_it() {
    let service = memory_service(
        MemoryFileSystem::new().with_file("/boards/a.json", r#"{"A": ["x", {"B": ["p"]}]}"#),
    );

    let board = service.load_board(Path::new("/boards/a.json")).unwrap();

    assert_eq!(board.find_parent_group("B"), Some("A"));
}

#[test]
fn given_no_path_when_loading_then_seed_board() {
    let service = memory_service(MemoryFileSystem::new());
    let board = service.load_board_or_seed(None).unwrap();
    assert_eq!(
        board.column_names().collect::<Vec<_>>(),
        Board::seed().column_names().collect::<Vec<_>>()
    );
}

#[test]
fn given_missing_file_when_loading_then_operation_failed_with_path() {
    let service = memory_service(MemoryFileSystem::new());
    let err = service.load_board(Path::new("/missing.json")).unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("/missing.json"));
}

#[test]
fn given_script_file_when_loading_then_parses_operations() {
    let service = memory_service(MemoryFileSystem::new().with_file(
        "/ops.json",
        r#"[{"op": "move_column", "from": 1, "to": 0}]"#,
    ));
    let ops = service.load_script(Path::new("/ops.json")).unwrap();
    assert_eq!(ops, vec![Operation::MoveColumn { from: 1, to: 0 }]);
}

#[test]
fn given_board_path_when_opening_session_then_uses_depth() {
    let service = memory_service(
        MemoryFileSystem::new().with_file("/b.json", r#"{"A": [{"B": [{"C": ["1", "2"]}]}]}"#),
    );
    let mut session = service
        .open_session(Some(Path::new("/b.json")), SearchDepth::Shallow)
        .unwrap();

    assert_eq!(session.depth(), SearchDepth::Shallow);
    assert!(!session.move_entry("C", 0, 1).unwrap());
}

#[test]
fn given_real_filesystem_when_loading_board_then_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, r#"{"A": ["x", "y"]}"#).unwrap();

    let container = ServiceContainer::new(Settings::default());
    let board = container.boards.load_board(&path).unwrap();
    assert_eq!(board.column("A").unwrap().len(), 2);

    assert_eq!(
        RealFileSystem.read_to_string(&path).unwrap(),
        r#"{"A": ["x", "y"]}"#
    );
}
