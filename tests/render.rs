mod common;

use dungeon::map::layout::Layout;
use dungeon::map::render::{Cell, MapRenderer};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use crate::common::{build_dungeon, id, parse_graph, CORNER, DANGLING_WEST, SAMPLE, SKEWED, SQUARE};

#[test]
fn test_render_corner() {
    let dungeon = build_dungeon(CORNER);
    let expected = concat!(
        "------\n", //
        "    c0\n",
        "    | \n",
        "**--b0\n",
        "------\n",
    );
    assert_eq!(dungeon.render(dungeon.start()), expected);
}

#[test]
fn test_render_marks_current_room() {
    let dungeon = build_dungeon(CORNER);
    let b0 = id(dungeon.graph(), "b0");
    let expected = concat!(
        "------\n", //
        "    c0\n",
        "    | \n",
        "a0--**\n",
        "------\n",
    );
    assert_eq!(dungeon.render(b0), expected);
}

#[test]
fn test_render_square() {
    let dungeon = build_dungeon(SQUARE);
    let expected = concat!(
        "------\n", //
        "**--b0\n",
        "|   | \n",
        "a1--b1\n",
        "------\n",
    );
    assert_eq!(dungeon.render(dungeon.start()), expected);
}

#[test]
fn test_render_sample() {
    let dungeon = build_dungeon(SAMPLE);
    let expected = concat!(
        "----------\n", //
        "    b9    \n",
        "    |     \n",
        "**--b0--c0\n",
        "|       | \n",
        "a1--b1--c1\n",
        "        | \n",
        "        c2\n",
        "----------\n",
    );
    assert_eq!(dungeon.render(dungeon.start()), expected);
}

#[test]
fn test_render_without_player() {
    let graph = parse_graph(CORNER);
    let layout = Layout::compute(&graph, 0).unwrap();
    let rendered = MapRenderer::render(&graph, &layout, None);
    assert_that(&rendered.contains("a0--b0")).is_true();
    assert_that(&rendered.contains("**")).is_false();
}

#[test]
fn test_render_is_repeatable() {
    let dungeon = build_dungeon(SAMPLE);
    let first = dungeon.render(dungeon.start());
    let second = dungeon.render(dungeon.start());
    assert_eq!(first, second);
}

#[test]
fn test_render_skewed_geometry() {
    // b0's south link points at an empty cell: c0 was placed below a0 instead.
    let dungeon = build_dungeon(SKEWED);
    let expected = concat!(
        "------\n", //
        "**--b0\n",
        "|   | \n",
        "c0    \n",
        "------\n",
    );
    assert_eq!(dungeon.render(dungeon.start()), expected);
}

#[test]
fn test_connector_outside_grid_is_skipped() {
    let dungeon = build_dungeon(DANGLING_WEST);
    let expected = concat!(
        "--\n", //
        "**\n",
        "| \n",
        "b0\n",
        "--\n",
    );
    assert_eq!(dungeon.render(dungeon.start()), expected);
}

#[test]
fn test_one_way_links_get_connectors() {
    // Only a0 declares the link; the connector is still drawn.
    let graph = parse_graph("a0 s:b0\n");
    let layout = Layout::compute(&graph, 0).unwrap();
    let grid = MapRenderer::grid(&graph, &layout, None);

    assert_eq!((grid.rows(), grid.cols()), (3, 1));
    assert_eq!(grid.get(1, 0), Some(Cell::Vertical));
    assert_eq!(grid.get(3, 0), None);
}

#[test]
fn test_grid_cells() {
    let graph = parse_graph(CORNER);
    let layout = Layout::compute(&graph, 0).unwrap();
    let grid = MapRenderer::grid(&graph, &layout, Some(0));

    assert_eq!(grid.get(2, 0), Some(Cell::Player));
    assert_eq!(grid.get(2, 1), Some(Cell::Horizontal));
    assert_eq!(grid.get(1, 2), Some(Cell::Vertical));
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    assert!(matches!(grid.get(0, 2), Some(Cell::Room(name)) if name.as_str() == "c0"));
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.rule(), "------");
}
