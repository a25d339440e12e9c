//! Level file loading.

use std::io::Write;

use arcade::core::{Grid, LevelError};
use arcade::types::EntityKind;

#[test]
fn loads_a_level_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "#####\n#B P#\n#####").unwrap();

    let mut grid = Grid::new(1, 0, 0);
    grid.load_from_path(file.path()).unwrap();

    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.kind(1, 1), Some(EntityKind::Collectible));
    assert_eq!(grid.kind(3, 1), Some(EntityKind::Player));
}

#[test]
fn missing_file_reports_source_unavailable_and_leaves_the_grid_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-level.map");

    let mut grid = Grid::new(1, 3, 3);
    grid.set_kind(1, 1, EntityKind::Wall);

    let err = grid.load_from_path(&path).unwrap_err();
    match err {
        LevelError::SourceUnavailable { path: reported, .. } => assert_eq!(reported, path),
    }
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.kind(1, 1), Some(EntityKind::Wall));
}

#[test]
fn error_message_names_the_path() {
    let mut grid = Grid::new(1, 0, 0);
    let err = grid
        .load_from_path(std::path::Path::new("/nonexistent/level.map"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/level.map"));
}
