use balloon_pop::balloon::*;
use balloon_pop::config::{EXPLOSION_FRAMES, PALETTE};
use balloon_pop::viewport::Viewport;

use macroquad::prelude::Vec2;
use macroquad::rand::srand;

const VIEW: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn balloon_at(x: f32, y: f32, radius: f32) -> Balloon {
    let mut balloon = Balloon::spawn(VIEW);
    balloon.pos = Vec2::new(x, y);
    balloon.radius = radius;
    balloon.base_radius = radius;
    balloon
}

fn in_palette(balloon: &Balloon) -> bool {
    PALETTE.iter().any(|&(r, g, b)| {
        approx(balloon.color.r, r as f32 / 255.0)
            && approx(balloon.color.g, g as f32 / 255.0)
            && approx(balloon.color.b, b as f32 / 255.0)
    })
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[test]
fn spawn_stays_within_ranges() {
    srand(7);
    for _ in 0..500 {
        let b = Balloon::spawn(VIEW);
        assert!((30.0..=120.0).contains(&b.radius), "radius {}", b.radius);
        assert!(b.color.a >= 150.0 / 255.0 - 1e-4 && b.color.a <= 1.0 + 1e-4);
        assert!(in_palette(&b));
        assert!(approx(b.speed, speed_for_radius(b.radius)));
        assert!(b.highlight.size >= b.radius * 0.15 - 1e-3);
        assert!(b.highlight.size <= b.radius * 0.22 + 1e-3);
        assert!(approx(b.highlight.offset, b.radius * 0.22));
        assert!((0.0..=VIEW.width).contains(&b.pos.x));
        assert!(approx(b.pos.y, VIEW.height + b.radius)); // just below the screen
        assert!(!b.exploding);
        assert_eq!(b.timer, 0);
    }
}

#[test]
fn bigger_balloons_rise_slower() {
    assert!(approx(speed_for_radius(30.0), 2.5));
    assert!(approx(speed_for_radius(120.0), 0.5));
    assert!(approx(speed_for_radius(75.0), 1.5));
    assert!(speed_for_radius(40.0) > speed_for_radius(100.0));
}

#[test]
fn highlight_corner_is_four_pixels_when_it_fits() {
    let big = Highlight {
        size: 20.0,
        offset: 20.0,
    };
    assert_eq!(big.corner_radius(), 4.0);

    // Smallest balloons get a square under 8px, the corners shrink to fit
    let small = Highlight {
        size: 5.0,
        offset: 7.0,
    };
    assert_eq!(small.corner_radius(), 2.5);
}

// ── Hit-testing ───────────────────────────────────────────────────────────────

#[test]
fn press_at_center_hits() {
    for radius in [30.0, 64.0, 120.0] {
        let b = balloon_at(400.0, 300.0, radius);
        assert!(b.is_hit(Vec2::new(400.0, 300.0), VIEW));
    }
}

#[test]
fn press_just_inside_hit_radius_hits() {
    let b = balloon_at(400.0, 300.0, 60.0); // hit radius 35
    assert!(b.is_hit(Vec2::new(400.0 + 34.5, 300.0), VIEW));
}

#[test]
fn press_beyond_hit_radius_misses() {
    for radius in [30.0, 64.0, 120.0] {
        let b = balloon_at(400.0, 300.0, radius);
        let far = radius / 2.0 + 6.0;
        assert!(!b.is_hit(Vec2::new(400.0 + far, 300.0), VIEW));
        assert!(!b.is_hit(Vec2::new(400.0, 300.0 - far), VIEW));
    }
}

#[test]
fn exploding_balloon_cannot_be_hit() {
    let mut b = balloon_at(400.0, 300.0, 60.0);
    b.pop();
    assert!(!b.is_hit(Vec2::new(400.0, 300.0), VIEW));
}

#[test]
fn offscreen_balloon_cannot_be_hit() {
    // Below the tolerance band
    let low = balloon_at(400.0, VIEW.height + 60.0, 60.0);
    assert!(!low.is_hit(Vec2::new(400.0, VIEW.height + 60.0), VIEW));

    // Above it
    let high = balloon_at(400.0, -60.0, 60.0);
    assert!(!high.is_hit(Vec2::new(400.0, -60.0), VIEW));

    // Still inside the band
    let edge = balloon_at(400.0, VIEW.height + 59.0, 60.0);
    assert!(edge.is_hit(Vec2::new(400.0, VIEW.height + 59.0), VIEW));
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[test]
fn pop_snapshots_radius_and_zeroes_timer() {
    let mut b = balloon_at(400.0, 300.0, 80.0);
    b.timer = 9;
    b.pop();
    assert!(b.exploding);
    assert!(approx(b.base_radius, 80.0));
    assert_eq!(b.timer, 0);
}

#[test]
fn burst_grows_and_fades() {
    let mut b = balloon_at(400.0, 300.0, 50.0);
    assert!(b.burst().is_none());

    b.pop();
    let start = b.burst().expect("exploding balloon has a burst");
    assert!(approx(start.radius, 50.0));
    assert!(approx(start.alpha, b.color.a));

    b.timer = 8;
    let half = b.burst().expect("burst");
    assert!(approx(half.radius, 50.0 + 8.0 * 18.0));
    assert!(approx(half.alpha, b.color.a * 0.5));

    b.timer = EXPLOSION_FRAMES;
    let end = b.burst().expect("burst");
    assert!(approx(end.radius, 50.0 + 16.0 * 18.0));
    assert!(approx(end.alpha, 0.0));
}

#[test]
fn explosion_lasts_sixteen_frames() {
    let mut b = balloon_at(400.0, 300.0, 50.0);
    b.pop();
    for frame in 1..=EXPLOSION_FRAMES {
        assert_eq!(b.update(), Step::Exploding);
        assert_eq!(b.timer, frame);
    }
    assert_eq!(b.update(), Step::Popped);
}

#[test]
fn exploding_balloon_does_not_move() {
    let mut b = balloon_at(400.0, 300.0, 50.0);
    b.pop();
    b.update();
    assert!(approx(b.pos.y, 300.0));
}

#[test]
fn rising_balloon_moves_up_by_speed() {
    let mut b = balloon_at(400.0, 300.0, 50.0);
    let speed = b.speed;
    assert_eq!(b.update(), Step::Rising);
    assert!(approx(b.pos.y, 300.0 - speed));
}

#[test]
fn balloon_escapes_past_top_edge() {
    let mut b = balloon_at(400.0, -24.0, 50.0); // y + r/2 = 1
    b.speed = 2.0;
    assert_eq!(b.update(), Step::Escaped);
}

// ── Set ───────────────────────────────────────────────────────────────────────

#[test]
fn new_set_has_five_staggered_balloons() {
    let set = BalloonSet::new(VIEW);
    assert_eq!(set.len(), 5);
    for (i, b) in set.iter().enumerate() {
        assert!(!b.exploding);
        assert!(approx(b.pos.y, VIEW.height + 100.0 + i as f32 * 80.0));
    }
}

#[test]
fn set_hit_pops_only_the_first_match() {
    let mut set = BalloonSet::new(VIEW);
    for i in 0..2 {
        let b = set.get_mut(i).expect("slot");
        b.pos = Vec2::new(300.0, 300.0);
        b.radius = 100.0;
    }

    assert_eq!(set.hit(Vec2::new(300.0, 300.0), VIEW), Some(0));
    assert!(set.get(0).expect("slot").exploding);
    assert!(!set.get(1).expect("slot").exploding);

    // Next press on the same spot falls through to the second balloon
    assert_eq!(set.hit(Vec2::new(300.0, 300.0), VIEW), Some(1));
}

#[test]
fn set_hit_on_empty_space_does_nothing() {
    let mut set = BalloonSet::new(VIEW);
    assert_eq!(set.hit(Vec2::new(-500.0, -500.0), VIEW), None);
    assert!(set.iter().all(|b| !b.exploding));
}

#[test]
fn finished_explosion_scores_while_active_and_recycles() {
    let mut set = BalloonSet::new(VIEW);
    set.get_mut(2).expect("slot").pop();

    for _ in 0..EXPLOSION_FRAMES {
        assert_eq!(set.update(VIEW, true), 0);
        for b in set.iter().filter(|b| b.exploding) {
            assert!(b.timer <= EXPLOSION_FRAMES);
        }
    }

    assert_eq!(set.update(VIEW, true), 1);
    let recycled = set.get(2).expect("slot");
    assert!(!recycled.exploding);
    assert_eq!(recycled.timer, 0);
}

#[test]
fn finished_explosion_scores_nothing_while_inactive() {
    let mut set = BalloonSet::new(VIEW);
    let b = set.get_mut(0).expect("slot");
    b.pop();
    b.timer = EXPLOSION_FRAMES;

    assert_eq!(set.update(VIEW, false), 0);
    assert!(!set.get(0).expect("slot").exploding);
}

#[test]
fn escaped_balloon_is_replaced_below_screen() {
    let mut set = BalloonSet::new(VIEW);
    let b = set.get_mut(1).expect("slot");
    b.pos.y = -1000.0;

    assert_eq!(set.update(VIEW, true), 0);
    let fresh = set.get(1).expect("slot");
    assert!(approx(fresh.pos.y, VIEW.height + fresh.radius));
}
