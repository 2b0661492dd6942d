use bubble_menu_core::layout::{BUBBLE_DIAMETER, BUBBLE_PADDING, SCALE_MAX, SCALE_MIN};
use bubble_menu_core::{compute_positions, default_menu_items, JitterRng, MenuItem, Viewport};

fn items(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|index| MenuItem::new(format!("Item {index}"), format!("#item-{index}")))
        .collect()
}

#[test]
fn one_placement_per_item_with_finite_values() {
    let viewport = Viewport::new(1280.0, 800.0);
    for count in 1..=24 {
        let mut rng = JitterRng::new(count as u32);
        let placement = compute_positions(&items(count), viewport, &mut rng);
        assert_eq!(placement.len(), count);
        for bubble in &placement {
            let position = bubble.position;
            assert!(position.x.is_finite());
            assert!(position.y.is_finite());
            assert!(position.scale.is_finite());
            assert!(
                (SCALE_MIN..=SCALE_MAX).contains(&position.scale),
                "scale {} out of range",
                position.scale
            );
        }
    }
}

#[test]
fn placement_keeps_item_order() {
    let source = default_menu_items();
    let mut rng = JitterRng::new(3);
    let placement = compute_positions(&source, Viewport::new(1024.0, 768.0), &mut rng);
    let labels: Vec<_> = placement.iter().map(|bubble| bubble.item.label.as_str()).collect();
    assert_eq!(labels, vec!["About", "Experience", "Contact", "Projects", "Feedbacks"]);
}

#[test]
fn bubbles_stay_within_jittered_radius() {
    let viewport = Viewport::new(1440.0, 900.0);
    let radius = 450.0 - BUBBLE_DIAMETER - BUBBLE_PADDING;
    assert_eq!(viewport.radius(), radius);
    let mut rng = JitterRng::new(11);
    let placement = compute_positions(&default_menu_items(), viewport, &mut rng);
    for bubble in &placement {
        let distance = bubble.position.distance_from_center();
        assert!(distance >= radius * 0.75 - 1e-9, "{distance}");
        assert!(distance <= radius * 1.25 + 1e-9, "{distance}");
    }
}

#[test]
fn first_item_sits_on_positive_x_axis() {
    let mut rng = JitterRng::new(5);
    let placement = compute_positions(&items(4), Viewport::new(800.0, 800.0), &mut rng);
    let first = placement[0].position;
    assert!(first.x > 0.0);
    assert!(first.y.abs() < 1e-9);
}

#[test]
fn degenerate_viewports_collapse_to_center() {
    for (width, height) in [(0.0, 0.0), (-10.0, 400.0), (f64::NAN, 300.0), (100.0, 100.0)] {
        let mut rng = JitterRng::new(1);
        let viewport = Viewport::new(width, height);
        assert_eq!(viewport.radius(), 0.0);
        let placement = compute_positions(&items(3), viewport, &mut rng);
        for bubble in &placement {
            assert_eq!(bubble.position.x, 0.0);
            assert_eq!(bubble.position.y.abs(), 0.0);
            assert!(bubble.position.scale.is_finite());
        }
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let viewport = Viewport::new(1200.0, 700.0);
    let first = compute_positions(&items(6), viewport, &mut JitterRng::new(77));
    let second = compute_positions(&items(6), viewport, &mut JitterRng::new(77));
    assert_eq!(first, second);
}
