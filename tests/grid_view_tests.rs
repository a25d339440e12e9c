//! GridView rendering: glyph mapping, HUD gating and the degraded
//! banner for an empty snapshot.

use arcade::core::Grid;
use arcade::term::{GridView, Theme, Viewport};
use arcade::types::EntityKind;

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 24,
};

fn render_text(grid: &Grid) -> Vec<String> {
    let fb = GridView::default().render(grid, VIEWPORT);
    (0..fb.height())
        .map(|y| {
            (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect()
        })
        .collect()
}

fn screen(grid: &Grid) -> String {
    render_text(grid).join("\n")
}

#[test]
fn entities_render_with_their_theme_glyphs() {
    let theme = Theme::default();
    let mut grid = Grid::new(0, 4, 4);
    grid.set_kind(0, 0, EntityKind::Wall);
    grid.set_kind(1, 0, EntityKind::Collectible);
    grid.set_kind(2, 0, EntityKind::Player);
    grid.set_kind(3, 0, EntityKind::Enemy);

    let text = screen(&grid);
    assert!(text.contains(theme.wall.ch));
    assert!(text.contains(theme.collectible.ch));
    assert!(text.contains(theme.player.ch));
}

#[test]
fn field_is_framed_with_a_border_box() {
    let grid = Grid::new(0, 4, 4);
    let text = screen(&grid);
    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
    assert!(text.contains('│'));
}

#[test]
fn hud_shows_only_populated_fields() {
    let mut grid = Grid::new(0, 4, 4);
    let text = screen(&grid);
    assert!(!text.contains("SCORE"));
    assert!(!text.contains("LIVES"));
    assert!(!text.contains("LEVEL"));

    grid.set_score(150);
    grid.set_lives(3);
    let text = screen(&grid);
    assert!(text.contains("SCORE"));
    assert!(text.contains("150"));
    assert!(text.contains("LIVES"));
    assert!(!text.contains("TIME"));
}

#[test]
fn message_line_renders_under_the_field() {
    let mut grid = Grid::new(0, 4, 4);
    grid.set_message("insert coin");
    assert!(screen(&grid).contains("insert coin"));
}

#[test]
fn game_over_and_victory_overlays() {
    let mut grid = Grid::new(0, 4, 4);
    grid.set_game_over(true);
    assert!(screen(&grid).contains("GAME OVER"));

    grid.set_flag("VICTORY", true);
    let text = screen(&grid);
    assert!(text.contains("VICTORY"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn oversized_level_is_clipped_not_wrapped() {
    // Wider than u16 can hold; rendering must not wrap coordinates back
    // into the viewport or panic.
    let grid = Grid::new(1, 70_000, 1);
    let fb = GridView::default().render(&grid, VIEWPORT);
    assert_eq!(fb.width(), VIEWPORT.width);
    assert_eq!(fb.height(), VIEWPORT.height);
}

#[test]
fn empty_snapshot_renders_an_error_banner_instead_of_a_field() {
    let grid = Grid::new(0, 0, 0);
    let text = screen(&grid);
    assert!(text.contains("EMPTY GRID"));
    assert!(!text.contains('┌'));
}
