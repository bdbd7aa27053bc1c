mod common;

use layered_canvas::layer::factory;
use layered_canvas::{Layer, LayerManager};

fn manager_with(names: &[&str]) -> LayerManager {
    let mut manager = LayerManager::new();
    for name in names {
        manager.add_layer(factory::create_raster(name, 8, 8).unwrap());
    }
    manager
}

fn names(manager: &LayerManager) -> Vec<&str> {
    manager.layers().iter().map(Layer::name).collect()
}

fn assert_contiguous(manager: &LayerManager) {
    let depths: Vec<usize> = manager.layers().iter().map(Layer::depth).collect();
    let expected: Vec<usize> = (0..manager.len()).collect();
    assert_eq!(depths, expected);
}

#[test]
fn test_depths_stay_contiguous() {
    common::init_logging();
    let mut manager = manager_with(&["a", "b", "c", "d"]);
    assert_contiguous(&manager);

    manager.remove_layer(1);
    assert_contiguous(&manager);

    manager.change_depth_index(0, 2);
    assert_contiguous(&manager);
    assert_eq!(names(&manager), ["c", "d", "a"]);

    manager.add_layer(factory::create_raster("e", 8, 8).unwrap());
    manager.change_depth_index(3, -3);
    assert_contiguous(&manager);
    assert_eq!(names(&manager), ["e", "c", "d", "a"]);

    // No-ops leave the order alone
    manager.change_depth_index(0, -1);
    manager.change_depth_index(3, 1);
    manager.remove_layer(17);
    assert_contiguous(&manager);
    assert_eq!(names(&manager), ["e", "c", "d", "a"]);

    while !manager.is_empty() {
        manager.remove_layer(0);
        assert_contiguous(&manager);
    }
}

#[test]
fn test_removal_prefers_layer_below() {
    let mut manager = manager_with(&["a", "b", "c"]);
    manager.select_layer(1);

    let removed = manager.remove_layer(1).unwrap();
    assert_eq!(removed.name(), "b");
    assert_eq!(manager.active_index(), Some(0));
    assert_eq!(manager.active_layer().unwrap().name(), "a");
}

#[test]
fn test_removing_last_layer_clears_selection() {
    let mut manager = manager_with(&["only"]);
    assert_eq!(manager.active_index(), Some(0));

    manager.remove_layer(0);
    assert!(manager.is_empty());
    assert!(manager.active_layer().is_none());
}

#[test]
fn test_out_of_range_select_is_ignored() {
    let mut manager = manager_with(&["a", "b"]);
    assert!(!manager.select_layer(2));
    assert_eq!(manager.active_index(), Some(1));
    assert!(!manager.toggle_visibility(5));
    assert!(!manager.set_layer_name(5, "x"));
}

#[test]
fn test_clone_is_independent() {
    let original = manager_with(&["a", "b"]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set_layer_name(0, "renamed");
    copy.set_active_layer_pixel(0, 0, layered_canvas::Color::RED);
    assert_eq!(names(&original), ["a", "b"]);
    assert_ne!(copy, original);
    assert_eq!(copy.active_index(), original.active_index());
}
