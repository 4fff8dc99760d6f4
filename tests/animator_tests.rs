// Host-side tests for the hex diffusion animator.

#![allow(dead_code)]
mod common;

use common::model::animator::*;
use common::model::diagram::Diagram;
use common::model::hex::HexField;
use common::model::surface::Color;
use common::{approx, DrawCall, RecordingSurface};
use glam::DVec2;

fn single_cell(config: HexConfig, value: f64) -> HexAnimator {
    let mut a = HexAnimator::new(config, 1);
    a.replace_field(HexField::from_values(1, 1, vec![value]).expect("shape"));
    a
}

fn assert_unit_range(a: &HexAnimator) {
    for &b in a.field().values() {
        assert!((0.0..=1.0).contains(&b), "brightness out of range: {b}");
    }
}

#[test]
fn lone_cell_decays_to_0_891_without_pointer() {
    let mut a = single_cell(HexConfig::default(), 1.0);
    a.step();
    let b = a.field().get(0, 0).expect("cell");
    assert!(approx(b, 0.891, 1e-12), "got {b}");
}

#[test]
fn lone_cell_under_pointer_charges_to_0_991() {
    let mut a = single_cell(HexConfig::default(), 1.0);
    a.set_pointer(Some(DVec2::ZERO));
    a.step();
    let b = a.field().get(0, 0).expect("cell");
    assert!(approx(b, 0.991, 1e-12), "got {b}");
}

#[test]
fn neighbourless_cell_strictly_decreases_every_tick() {
    let mut a = single_cell(HexConfig::default(), 0.8);
    let mut prev = 0.8;
    for _ in 0..50 {
        a.step();
        let b = a.field().get(0, 0).expect("cell");
        assert!(approx(b, prev * 0.99 * 0.9, 1e-12));
        assert!(b < prev);
        prev = b;
    }
}

#[test]
fn dark_cell_stays_dark() {
    let mut a = single_cell(HexConfig::default(), 0.0);
    a.step();
    assert_eq!(a.field().get(0, 0), Some(0.0));
}

#[test]
fn charge_radius_is_strict() {
    let config = HexConfig::default();
    let radius = config.charge_radius;
    let mut a = single_cell(config, 0.0);
    a.set_pointer(Some(DVec2::new(radius, 0.0)));
    a.step();
    assert_eq!(a.field().get(0, 0), Some(0.0));

    a.set_pointer(Some(DVec2::new(radius - 0.01, 0.0)));
    a.step();
    assert!(approx(a.field().get(0, 0).expect("cell"), 0.1, 1e-12));
}

#[test]
fn charging_clamps_at_one() {
    let mut config = HexConfig::default();
    config.decay_factor = 0.0;
    config.link_factor = 0.0;
    let mut a = single_cell(config, 0.95);
    a.set_pointer(Some(DVec2::ZERO));
    a.step();
    assert_eq!(a.field().get(0, 0), Some(1.0));
}

#[test]
fn charging_never_lowers_brightness() {
    let mut with_pointer = HexAnimator::new(HexConfig::default(), 11);
    let mut without = HexAnimator::new(HexConfig::default(), 11);
    let mut s = RecordingSurface::new();
    with_pointer.resize(200, 120, &mut s);
    without.resize(200, 120, &mut s);
    assert_eq!(with_pointer.field().values(), without.field().values());

    with_pointer.set_pointer(Some(DVec2::new(60.0, 40.0)));
    for _ in 0..5 {
        with_pointer.step();
        without.step();
        for (c, p) in with_pointer
            .field()
            .values()
            .iter()
            .zip(without.field().values())
        {
            assert!(c >= p);
            assert!(*c <= 1.0);
        }
    }
}

#[test]
fn brightness_stays_in_unit_range_under_heavy_charging() {
    let mut config = HexConfig::default();
    config.mouse_charge_strength = 0.9;
    config.charge_radius = 80.0;
    let mut a = HexAnimator::new(config, 3);
    let mut s = RecordingSurface::new();
    a.resize(300, 200, &mut s);
    a.set_pointer(Some(DVec2::new(150.0, 100.0)));
    for _ in 0..100 {
        a.tick(&mut s);
        assert_unit_range(&a);
    }
}

#[test]
fn double_buffered_reads_previous_tick() {
    let mut a = HexAnimator::new(HexConfig::default(), 1);
    a.replace_field(HexField::from_values(1, 2, vec![1.0, 0.0]).expect("shape"));
    a.step();
    let v = a.field().values();
    assert!(approx(v[0], 0.891, 1e-12));
    assert!(approx(v[1], 0.1, 1e-12));
}

#[test]
fn in_place_reads_cells_updated_earlier_in_the_pass() {
    let config = HexConfig {
        update_order: UpdateOrder::InPlace,
        ..HexConfig::default()
    };
    let mut a = HexAnimator::new(config, 1);
    a.replace_field(HexField::from_values(1, 2, vec![1.0, 0.0]).expect("shape"));
    a.step();
    let v = a.field().values();
    assert!(approx(v[0], 0.891, 1e-12));
    assert!(approx(v[1], 0.0891, 1e-12));
}

#[test]
fn resize_then_tick_uses_new_dimensions() {
    let mut a = HexAnimator::new(HexConfig::default(), 5);
    let mut s = RecordingSurface::new();
    a.resize(640, 480, &mut s);
    a.resize(100, 100, &mut s);
    a.tick(&mut s);
    assert_eq!((a.field().rows(), a.field().cols()), (12, 4));
    assert_eq!(a.field().len(), 48);
    assert_unit_range(&a);
    assert_eq!(a.ticks(), 1);
}

#[test]
fn resize_with_same_size_keeps_dimensions() {
    let mut a = HexAnimator::new(HexConfig::default(), 9);
    let mut s = RecordingSurface::new();
    a.resize(333, 222, &mut s);
    let first = (a.field().rows(), a.field().cols());
    let first_values = a.field().values().to_vec();
    a.resize(333, 222, &mut s);
    assert_eq!((a.field().rows(), a.field().cols()), first);
    // reseeded, not reused
    assert_ne!(a.field().values(), first_values.as_slice());
}

#[test]
fn resize_to_zero_renders_nothing_but_the_clear() {
    let mut a = HexAnimator::new(HexConfig::default(), 2);
    let mut s = RecordingSurface::new();
    a.resize(0, 0, &mut s);
    assert!(a.field().is_empty());
    assert_eq!(
        s.calls,
        vec![DrawCall::Clear {
            width: 0.0,
            height: 0.0
        }]
    );
    s.reset();
    a.tick(&mut s);
    assert_eq!(s.calls.len(), 1);
}

#[test]
fn resize_renders_immediately() {
    let mut a = HexAnimator::new(HexConfig::default(), 4);
    let mut s = RecordingSurface::new();
    a.resize(60, 20, &mut s);
    let cells = a.field().len();
    assert_eq!(s.lines().len(), cells * 3);
    assert_eq!(
        s.calls.first(),
        Some(&DrawCall::Clear {
            width: 60.0,
            height: 20.0
        })
    );
}

#[test]
fn render_scales_dots_and_skips_dark_cells() {
    let mut a = HexAnimator::new(HexConfig::default(), 1);
    a.replace_field(HexField::from_values(2, 2, vec![0.5, 0.0, 1.0, 0.25]).expect("shape"));
    let mut s = RecordingSurface::new();
    a.render(&mut s);

    let dots = s.fill_circles();
    assert_eq!(dots.len(), 3);
    assert!(dots.iter().all(|(_, _, c)| *c == Color::RED));
    let radii: Vec<f64> = dots.iter().map(|(_, r, _)| *r).collect();
    assert_eq!(radii, vec![3.0, 6.0, 1.5]);
    // second row is staggered
    assert!(approx(dots[1].0.x, 15.0, 1e-9));
    assert_eq!(s.lines().len(), 12);
}

#[test]
fn spokes_point_at_fixed_angles() {
    let mut a = HexAnimator::new(HexConfig::default(), 1);
    a.replace_field(HexField::from_values(1, 1, vec![0.0]).expect("shape"));
    let mut s = RecordingSurface::new();
    a.render(&mut s);
    let ends: Vec<DVec2> = s.lines().iter().map(|(_, to, _)| *to).collect();
    assert_eq!(ends.len(), 3);
    let r3 = 3.0_f64.sqrt();
    assert!(ends[0].abs_diff_eq(DVec2::new(10.0 * r3, -10.0), 1e-9));
    assert!(ends[1].abs_diff_eq(DVec2::new(10.0 * r3, 10.0), 1e-9));
    assert!(ends[2].abs_diff_eq(DVec2::new(0.0, 20.0), 1e-9));
}

#[test]
fn pointer_ring_drawn_only_while_present() {
    let mut a = single_cell(HexConfig::default(), 0.5);
    let mut s = RecordingSurface::new();
    a.render(&mut s);
    assert!(s.stroke_circles().is_empty());

    a.pointer_move(DVec2::new(42.0, 17.0));
    s.reset();
    a.render(&mut s);
    assert_eq!(s.stroke_circles(), vec![(DVec2::new(42.0, 17.0), 10.0)]);
}

#[test]
fn pointer_leave_resets_by_default() {
    let mut a = single_cell(HexConfig::default(), 0.0);
    a.pointer_move(DVec2::ZERO);
    a.pointer_leave();
    assert_eq!(a.pointer(), None);
    a.step();
    assert_eq!(a.field().get(0, 0), Some(0.0));
}

#[test]
fn pointer_leave_can_keep_last_position() {
    let config = HexConfig {
        reset_pointer_on_leave: false,
        ..HexConfig::default()
    };
    let mut a = single_cell(config, 0.0);
    a.pointer_move(DVec2::ZERO);
    a.pointer_leave();
    assert_eq!(a.pointer(), Some(DVec2::ZERO));
    a.step();
    assert!(approx(a.field().get(0, 0).expect("cell"), 0.1, 1e-12));
}

#[test]
fn same_seed_gives_same_lattice() {
    let mut s = RecordingSurface::new();
    let mut a = HexAnimator::new(HexConfig::default(), 77);
    let mut b = HexAnimator::new(HexConfig::default(), 77);
    a.resize(120, 90, &mut s);
    b.resize(120, 90, &mut s);
    assert_eq!(a.field().values(), b.field().values());
}

#[test]
fn logical_size_tracks_viewport() {
    let mut a = HexAnimator::new(HexConfig::default(), 1);
    let mut s = RecordingSurface::new();
    a.resize(800, 600, &mut s);
    assert_eq!(a.viewport(), (800, 600));
    assert_eq!(a.logical_size(), DVec2::new(800.0, 600.0));
}
