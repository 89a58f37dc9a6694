// Host-side tests for the dial geometry and snap resolver.

use glam::Vec2;
use telegraph_core::*;

fn dial() -> DialRect {
    DialRect::new(40.0, 60.0, 200.0, 200.0)
}

// Pointer `r` pixels from the dial center at `deg` clockwise from north.
fn pointer_at(rect: &DialRect, deg: f32, r: f32) -> Vec2 {
    rect.center() + label_offset(deg, r)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn rect_center_and_measurability() {
    let r = dial();
    assert_eq!(r.center(), Vec2::new(140.0, 160.0));
    assert!(r.is_measurable());
    assert!(!DialRect::default().is_measurable());
    assert!(!DialRect::new(0.0, 0.0, 100.0, 0.0).is_measurable());
    assert!(!DialRect::new(f32::NAN, 0.0, 100.0, 100.0).is_measurable());
}

#[test]
fn pointer_angle_is_clockwise_from_north() {
    let r = dial();
    let c = r.center();
    let north = pointer_angle(c + Vec2::new(0.0, -50.0), &r).unwrap();
    let east = pointer_angle(c + Vec2::new(50.0, 0.0), &r).unwrap();
    let south = pointer_angle(c + Vec2::new(0.0, 50.0), &r).unwrap();
    let west = pointer_angle(c + Vec2::new(-50.0, 0.0), &r).unwrap();
    assert!(approx(north, 0.0), "north={north}");
    assert!(approx(east, 90.0), "east={east}");
    assert!(approx(south, 180.0), "south={south}");
    assert!(approx(west, -90.0), "west={west}");
}

#[test]
fn pointer_angle_skips_unmeasurable_geometry() {
    let p = Vec2::new(10.0, 10.0);
    assert_eq!(pointer_angle(p, &DialRect::default()), None);
    assert_eq!(read_dial(p, &DialRect::new(0.0, 0.0, -5.0, 10.0)), None);
}

#[test]
fn normalize_wraps_once_into_half_open_range() {
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(180.0), 180.0);
    assert_eq!(normalize_angle(-180.0), 180.0);
    assert_eq!(normalize_angle(200.0), -160.0);
    assert_eq!(normalize_angle(270.0), -90.0);
    assert_eq!(normalize_angle(-200.0), 160.0);
}

#[test]
fn clamp_passes_angles_between_the_stops() {
    for a in [-135.0, -90.0, 0.0, 42.5, 179.9, 180.0] {
        assert_eq!(clamp_angle(a), a);
    }
}

#[test]
fn clamp_pulls_dead_arc_to_nearest_stop() {
    assert_eq!(clamp_angle(-136.0), MIN_ANGLE_DEG);
    assert_eq!(clamp_angle(-150.0), MIN_ANGLE_DEG);
    assert_eq!(clamp_angle(-157.5), MIN_ANGLE_DEG);
    assert_eq!(clamp_angle(-158.0), MAX_ANGLE_DEG);
    assert_eq!(clamp_angle(-179.0), MAX_ANGLE_DEG);
    // un-normalized input goes through normalization first
    assert_eq!(clamp_angle(200.0), MAX_ANGLE_DEG);
    assert_eq!(clamp_angle(215.0), MIN_ANGLE_DEG);
}

#[test]
fn clamp_never_leaves_the_stop_range() {
    let mut a = -540.0_f32;
    while a <= 540.0 {
        let c = clamp_angle(a);
        assert!(
            (MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(&c),
            "clamp({a}) = {c}"
        );
        a += 0.75;
    }
}

#[test]
fn resolve_exact_angles_hit_their_position() {
    for p in TelegraphPosition::ALL {
        assert_eq!(resolve_position(p.angle()), p);
    }
}

#[test]
fn resolve_picks_minimum_distance() {
    let mut a = MIN_ANGLE_DEG;
    while a <= MAX_ANGLE_DEG {
        let got = resolve_position(a);
        let best = TelegraphPosition::ALL
            .iter()
            .map(|p| (a - p.angle()).abs())
            .fold(f32::MAX, f32::min);
        assert_eq!((a - got.angle()).abs(), best, "angle {a}");
        a += 0.5;
    }
}

#[test]
fn resolve_ties_go_to_the_more_astern_position() {
    assert_eq!(resolve_position(15.0), TelegraphPosition::Stop);
    assert_eq!(resolve_position(-15.0), TelegraphPosition::DeadSlowAstern);
    assert_eq!(resolve_position(157.5), TelegraphPosition::FullAhead);
    assert_eq!(resolve_position(-117.5), TelegraphPosition::FullAstern);
    assert_eq!(resolve_position(82.5), TelegraphPosition::SlowAhead);
}

#[test]
fn read_dial_scenarios() {
    let r = dial();

    let north = read_dial(pointer_at(&r, 0.0, 80.0), &r).unwrap();
    assert_eq!(north.position, TelegraphPosition::Stop);
    assert!(approx(north.angle, 0.0));

    let ahead = read_dial(pointer_at(&r, 135.0, 80.0), &r).unwrap();
    assert_eq!(ahead.position, TelegraphPosition::FullAhead);
    assert!(approx(ahead.angle, 135.0));

    let past_bottom = read_dial(pointer_at(&r, 200.0, 80.0), &r).unwrap();
    assert_eq!(past_bottom.angle, MAX_ANGLE_DEG);
    assert_eq!(past_bottom.position, TelegraphPosition::FinishedWithEngines);

    let past_astern = read_dial(pointer_at(&r, -145.0, 80.0), &r).unwrap();
    assert_eq!(past_astern.angle, MIN_ANGLE_DEG);
    assert_eq!(past_astern.position, TelegraphPosition::FullAstern);
}

#[test]
fn label_offset_places_points_on_the_circle() {
    let up = label_offset(0.0, LABEL_RADIUS_PX);
    assert!(approx(up.x, 0.0) && approx(up.y, -LABEL_RADIUS_PX));
    let right = label_offset(90.0, 10.0);
    assert!(approx(right.x, 10.0) && approx(right.y, 0.0));
    for p in TelegraphPosition::ALL {
        let off = label_offset(p.angle(), LABEL_RADIUS_PX);
        assert!(approx(off.length(), LABEL_RADIUS_PX));
    }
}
