mod common;

use std::cell::Cell;
use std::rc::Rc;

use egui::{Pos2, pos2, vec2};
use layered_canvas::layer::factory;
use layered_canvas::tool::{DoodleTool, MoveTool, PencilTool, RotateTool};
use layered_canvas::{
    Color, Command, CommandHistory, Document, LayerContent, MouseButton, MouseStatus, RasterData, Tool,
};

fn press(tool: &mut dyn Tool, document: &mut Document, x: f32, y: f32) {
    assert!(tool.on_pointer_down(MouseStatus::primary(x, y), document).is_none());
}

fn drag(tool: &mut dyn Tool, document: &mut Document, x: f32, y: f32) {
    assert!(tool.on_pointer_move(MouseStatus::primary(x, y), document).is_none());
}

fn active_position(document: &Document) -> Pos2 {
    document.canvas().active_layer().unwrap().position()
}

#[test]
fn test_move_gesture_is_one_command() {
    common::init_logging();
    let mut document = common::document_with_layer(100, 100);
    let mut history = CommandHistory::new();
    let mut tool = MoveTool::new();

    press(&mut tool, &mut document, 10.0, 10.0);
    drag(&mut tool, &mut document, 15.0, 12.0);
    assert_eq!(active_position(&document), pos2(5.0, 2.0));
    drag(&mut tool, &mut document, 20.0, 20.0);
    let executed = tool
        .on_pointer_up(MouseStatus::primary(20.0, 20.0), &mut document)
        .expect("a finished move gesture");

    assert_eq!(
        executed.command(),
        &Command::MoveLayer {
            delta: vec2(10.0, 10.0)
        }
    );
    history.record(executed);
    assert_eq!(history.undo_len(), 1);
    assert_eq!(active_position(&document), pos2(10.0, 10.0));

    history.undo(&mut document);
    assert_eq!(active_position(&document), Pos2::ZERO);
    history.redo(&mut document).unwrap();
    assert_eq!(active_position(&document), pos2(10.0, 10.0));
}

#[test]
fn test_move_without_motion_records_nothing() {
    let mut document = common::document_with_layer(100, 100);
    let mut tool = MoveTool::new();

    press(&mut tool, &mut document, 10.0, 10.0);
    assert!(tool.is_busy());
    assert!(tool.on_pointer_up(MouseStatus::primary(10.0, 10.0), &mut document).is_none());
    assert!(!tool.is_busy());
}

#[test]
fn test_stopped_move_ignores_later_drags() {
    let mut document = common::document_with_layer(100, 100);
    let mut tool = MoveTool::new();

    press(&mut tool, &mut document, 10.0, 10.0);
    drag(&mut tool, &mut document, 15.0, 12.0);
    tool.stop();
    drag(&mut tool, &mut document, 40.0, 40.0);
    let executed = tool
        .on_pointer_up(MouseStatus::primary(50.0, 50.0), &mut document)
        .unwrap();

    assert_eq!(executed.command(), &Command::MoveLayer { delta: vec2(5.0, 2.0) });
    assert_eq!(active_position(&document), pos2(5.0, 2.0));
}

#[test]
fn test_tools_ignore_press_without_target() {
    let mut document = Document::new(50, 50).unwrap();
    let before = document.clone();

    let mut tools: Vec<Box<dyn Tool>> = vec![
        Box::new(MoveTool::new()),
        Box::new(RotateTool::new()),
        Box::new(PencilTool::new(3)),
    ];
    for tool in &mut tools {
        assert!(tool.on_pointer_down(MouseStatus::primary(5.0, 5.0), &mut document).is_none());
        assert!(!tool.is_busy(), "{} started without a layer", tool.name());
        assert!(tool.on_pointer_up(MouseStatus::primary(9.0, 9.0), &mut document).is_none());
    }
    assert_eq!(document, before);
}

#[test]
fn test_press_without_button_is_ignored() {
    let mut document = common::document_with_layer(50, 50);
    let mut tool = PencilTool::new(1);

    let status = MouseStatus::new(pos2(5.5, 5.5), MouseButton::None);
    assert!(tool.on_pointer_down(status, &mut document).is_none());
    assert!(!tool.is_busy());
    assert_eq!(common::active_pixel(&document, 5, 5), Color::TRANSPARENT);
}

#[test]
fn test_pencil_paints_live_and_undoes_as_one_stroke() {
    common::init_logging();
    let mut document = common::document_with_layer(20, 20);
    document.set_color(Color::RED);
    let mut history = CommandHistory::new();
    let mut tool = PencilTool::new(1);

    press(&mut tool, &mut document, 2.5, 2.5);
    assert_eq!(common::active_pixel(&document, 2, 2), Color::RED);
    drag(&mut tool, &mut document, 5.5, 2.5);
    // Interpolated between the two events
    assert_eq!(common::active_pixel(&document, 4, 2), Color::RED);

    let executed = tool
        .on_pointer_up(MouseStatus::primary(5.5, 2.5), &mut document)
        .unwrap();
    match executed.command() {
        Command::Stroke { stroke } => {
            assert_eq!(stroke.pixels().len(), 4);
            assert_eq!(stroke.color(), Color::RED);
        }
        other => panic!("expected a stroke, got {other:?}"),
    }
    history.record(executed);

    history.undo(&mut document);
    for x in 2..=5 {
        assert_eq!(common::active_pixel(&document, x, 2), Color::TRANSPARENT);
    }
    history.redo(&mut document).unwrap();
    assert_eq!(common::active_pixel(&document, 3, 2), Color::RED);
}

#[test]
fn test_huge_brush_stroke_stays_on_layer() {
    let mut document = common::document_with_layer(16, 16);
    let mut tool = PencilTool::new(3000);

    press(&mut tool, &mut document, 8.0, 8.0);
    drag(&mut tool, &mut document, 12.0, 3.0);
    let executed = tool
        .on_pointer_up(MouseStatus::primary(12.0, 3.0), &mut document)
        .unwrap();

    let Command::Stroke { stroke } = executed.command() else {
        panic!("expected a stroke, got {:?}", executed.command());
    };
    assert_eq!(stroke.pixels().len(), 16 * 16);
    assert!(
        stroke
            .pixels()
            .iter()
            .all(|p| (0..16).contains(&p.x) && (0..16).contains(&p.y))
    );
    assert_eq!(common::active_pixel(&document, 15, 15), Color::BLACK);
}

#[test]
fn test_pencil_writes_in_layer_coordinates() {
    let mut document = common::document_with_layer(20, 20);
    document.canvas_mut().move_active_layer(vec2(5.0, 5.0));
    let mut tool = PencilTool::new(1);

    press(&mut tool, &mut document, 7.5, 7.5);
    tool.on_pointer_up(MouseStatus::primary(7.5, 7.5), &mut document);

    assert_eq!(common::active_pixel(&document, 2, 2), Color::BLACK);
    assert_eq!(common::active_pixel(&document, 7, 7), Color::TRANSPARENT);
}

#[test]
fn test_eraser_clears_pixels() {
    let mut document = Document::new(20, 20).unwrap();
    let white = RasterData::filled(20, 20, Color::WHITE).unwrap();
    document
        .canvas_mut()
        .add_layer(factory::create_raster_from("paper", white));

    let mut tool = PencilTool::eraser(3);
    assert_eq!(tool.name(), "Eraser");
    press(&mut tool, &mut document, 10.5, 10.5);
    let executed = tool.on_pointer_up(MouseStatus::primary(10.5, 10.5), &mut document);

    assert!(executed.is_some());
    assert_eq!(common::active_pixel(&document, 10, 10), Color::TRANSPARENT);
    assert_eq!(common::active_pixel(&document, 11, 10), Color::TRANSPARENT);
    assert_eq!(common::active_pixel(&document, 0, 0), Color::WHITE);
}

#[test]
fn test_pencil_ignores_non_raster_layers() {
    let mut document = Document::new(20, 20).unwrap();
    document
        .canvas_mut()
        .add_layer(factory::create_text("title", Pos2::ZERO, "hello", 12.0, Color::BLACK));
    let mut tool = PencilTool::new(2);

    assert!(tool.on_pointer_down(MouseStatus::primary(1.0, 1.0), &mut document).is_none());
    assert!(!tool.is_busy());
}

#[test]
fn test_rotate_gesture_emits_final_angle() {
    let mut document = common::document_with_layer(20, 20);
    let mut tool = RotateTool::new();

    // The 20x20 layer pivots around (10, 10)
    press(&mut tool, &mut document, 20.0, 10.0);
    assert_eq!(tool.rotation().unwrap().anchor(), pos2(10.0, 10.0));
    drag(&mut tool, &mut document, 20.0, 15.0);
    drag(&mut tool, &mut document, 20.0, 20.0);
    let executed = tool
        .on_pointer_up(MouseStatus::primary(20.0, 20.0), &mut document)
        .unwrap();

    let Command::RotateLayer { degrees } = executed.command() else {
        panic!("expected a rotation, got {:?}", executed.command());
    };
    assert!((degrees - 45.0).abs() < 1e-4);
    let rotation = document.canvas().active_layer().unwrap().rotation();
    assert!((rotation - 45.0).abs() < 1e-4);

    let mut history = CommandHistory::new();
    history.record(executed);
    history.undo(&mut document);
    assert_eq!(document.canvas().active_layer().unwrap().rotation(), 0.0);
}

#[test]
fn test_rotate_without_motion_records_nothing() {
    let mut document = common::document_with_layer(20, 20);
    let mut tool = RotateTool::new();

    press(&mut tool, &mut document, 20.0, 10.0);
    assert!(tool.on_pointer_up(MouseStatus::primary(20.0, 10.0), &mut document).is_none());
}

#[test]
fn test_non_finite_rotation_is_rolled_back() {
    let mut document = common::document_with_layer(20, 20);
    let before = document.clone();
    let mut tool = RotateTool::new();

    press(&mut tool, &mut document, 20.0, 10.0);
    drag(&mut tool, &mut document, f32::NAN, f32::NAN);
    assert!(document.canvas().active_layer().unwrap().rotation().is_nan());

    let executed = tool.on_pointer_up(MouseStatus::primary(f32::NAN, f32::NAN), &mut document);
    assert!(executed.is_none());
    assert!(!tool.is_busy());
    assert_eq!(document, before);
}

#[test]
fn test_non_finite_move_is_rolled_back() {
    let mut document = common::document_with_layer(20, 20);
    let before = document.clone();
    let mut tool = MoveTool::new();

    press(&mut tool, &mut document, 1.0, 1.0);
    drag(&mut tool, &mut document, 4.0, 4.0);
    drag(&mut tool, &mut document, f32::INFINITY, 4.0);

    assert!(tool.deactivate(&mut document).is_none());
    assert_eq!(document, before);
}

#[test]
fn test_doodle_adds_new_layer() {
    common::init_logging();
    let mut document = common::document_with_layer(50, 50);
    document.set_color(Color::BLUE);
    let mut history = CommandHistory::new();
    let mut tool = DoodleTool::new(2.0);

    press(&mut tool, &mut document, 1.0, 1.0);
    drag(&mut tool, &mut document, 3.0, 4.0);
    drag(&mut tool, &mut document, 3.0, 4.0);
    // Not on the canvas until released
    assert_eq!(document.canvas().layers().len(), 1);
    assert_eq!(tool.current().unwrap().name(), "Doodle 2");

    let executed = tool
        .on_pointer_up(MouseStatus::primary(6.0, 8.0), &mut document)
        .unwrap();
    assert_eq!(executed.command().name(), "AddLayer");
    history.record(executed);

    let canvas = document.canvas();
    assert_eq!(canvas.layers().len(), 2);
    let doodle_layer = canvas.active_layer().unwrap();
    assert_eq!(doodle_layer.kind_name(), "doodle");
    assert_eq!(doodle_layer.position(), pos2(1.0, 1.0));
    let LayerContent::Doodle(doodle) = doodle_layer.content() else {
        panic!("expected doodle content");
    };
    assert_eq!(doodle.points(), [vec2(0.0, 0.0), vec2(2.0, 3.0), vec2(5.0, 7.0)]);
    assert_eq!(doodle.color, Color::BLUE);

    history.undo(&mut document);
    assert_eq!(document.canvas().layers().len(), 1);
}

#[test]
fn test_doodle_drag_requests_repaints() {
    let mut document = Document::new(50, 50).unwrap();
    let repaints = Rc::new(Cell::new(0));
    let counter = Rc::clone(&repaints);
    document
        .canvas()
        .add_canvas_listener(Rc::new(move || counter.set(counter.get() + 1)))
        .unwrap();
    let mut tool = DoodleTool::new(1.0);

    press(&mut tool, &mut document, 1.0, 1.0);
    assert_eq!(repaints.get(), 1);
    drag(&mut tool, &mut document, 4.0, 5.0);
    assert_eq!(repaints.get(), 2);
    // Same point again, nothing new to show
    drag(&mut tool, &mut document, 4.0, 5.0);
    assert_eq!(repaints.get(), 2);
    assert!(document.canvas().layers().is_empty());
}

#[test]
fn test_deactivate_finishes_doodle() {
    let mut document = Document::new(50, 50).unwrap();
    let mut tool = DoodleTool::new(1.0);

    press(&mut tool, &mut document, 1.0, 1.0);
    drag(&mut tool, &mut document, 9.0, 9.0);
    assert!(tool.deactivate(&mut document).is_some());
    assert!(!tool.is_busy());
    assert_eq!(document.canvas().layers().len(), 1);
}
