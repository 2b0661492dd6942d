use std::collections::HashSet;

use bubble_menu_core::connector::{CONTROL_SPREAD, JITTER_SPREAD};
use bubble_menu_core::{
    build_connectors, compute_positions, connector_count, default_menu_items, jitter_connectors,
    jitter_enabled, JitterRng, MenuItem, Viewport,
};

fn placement(count: usize, viewport: Viewport) -> bubble_menu_core::Placement {
    let items: Vec<_> = (0..count)
        .map(|index| MenuItem::new(format!("{index}"), format!("#{index}")))
        .collect();
    compute_positions(&items, viewport, &mut JitterRng::new(9))
}

#[test]
fn complete_graph_without_duplicates_or_self_pairs() {
    let viewport = Viewport::new(1280.0, 720.0);
    for count in 0..=12 {
        let placed = placement(count, viewport);
        let connectors = build_connectors(&placed, viewport, &mut JitterRng::new(1));
        assert_eq!(connectors.len(), count * count.saturating_sub(1) / 2);
        assert_eq!(connectors.len(), connector_count(count));
        let mut seen = HashSet::new();
        for connector in &connectors {
            assert!(connector.from < connector.to);
            assert!(connector.to < count);
            assert!(seen.insert((connector.from, connector.to)));
        }
    }
}

#[test]
fn endpoints_are_absolute_bubble_centers() {
    let viewport = Viewport::new(1000.0, 600.0);
    let placed = placement(3, viewport);
    let connectors = build_connectors(&placed, viewport, &mut JitterRng::new(2));
    for connector in &connectors {
        let (x1, y1) = placed[connector.from].absolute(viewport);
        let (x2, y2) = placed[connector.to].absolute(viewport);
        assert_eq!((connector.start.x, connector.start.y), (x1, y1));
        assert_eq!((connector.end.x, connector.end.y), (x2, y2));
        let mid_x = (x1 + x2) * 0.5;
        let mid_y = (y1 + y2) * 0.5;
        assert!((connector.base_control.x - mid_x).abs() <= CONTROL_SPREAD * 0.5);
        assert!((connector.base_control.y - mid_y).abs() <= CONTROL_SPREAD * 0.5);
    }
}

#[test]
fn path_data_is_a_quadratic_curve() {
    let viewport = Viewport::new(800.0, 800.0);
    let placed = placement(2, viewport);
    let connectors = build_connectors(&placed, viewport, &mut JitterRng::new(4));
    let path = connectors[0].path_data();
    assert!(path.starts_with('M'), "{path}");
    assert_eq!(path.matches('Q').count(), 1, "{path}");
    assert_eq!(path, connectors[0].base_path_data());
    assert_eq!(connectors[0].key(), "0-1");
}

#[test]
fn jitter_stays_near_the_base_control() {
    let viewport = Viewport::new(1600.0, 900.0);
    let placed = placement(5, viewport);
    let mut rng = JitterRng::new(8);
    let mut connectors = build_connectors(&placed, viewport, &mut rng);
    let bases: Vec<_> = connectors.iter().map(|c| c.base_control).collect();
    for _ in 0..200 {
        jitter_connectors(&mut connectors, &mut rng);
        for (connector, base) in connectors.iter().zip(&bases) {
            assert_eq!(connector.base_control, *base);
            assert!((connector.control.x - base.x).abs() <= JITTER_SPREAD * 0.5);
            assert!((connector.control.y - base.y).abs() <= JITTER_SPREAD * 0.5);
        }
    }
}

#[test]
fn jitter_only_on_wide_viewports() {
    assert!(jitter_enabled(Viewport::new(768.0, 500.0)));
    assert!(jitter_enabled(Viewport::new(1920.0, 1080.0)));
    assert!(!jitter_enabled(Viewport::new(767.0, 1000.0)));
}

#[test]
fn default_items_open_with_ten_lines() {
    let viewport = Viewport::new(1280.0, 800.0);
    let placed = compute_positions(&default_menu_items(), viewport, &mut JitterRng::new(1));
    let connectors = build_connectors(&placed, viewport, &mut JitterRng::new(1));
    assert_eq!(placed.len(), 5);
    assert_eq!(connectors.len(), 10);
}
