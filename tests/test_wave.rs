mod common;

use common::{approx, seeded_rng};

use space_invaders::entities::March;
use space_invaders::wave::*;

#[test]
fn wave_one_is_four_by_eight() {
    let w = spawn_wave(1, 540.0, &mut seeded_rng());
    assert_eq!(w.formation.rows, 4);
    assert_eq!(w.formation.cols, 8);
    assert_eq!(w.aliens.len(), 32);
    assert!(w.aliens.iter().all(|a| a.alive && a.phase == 0.0));
}

#[test]
fn grid_size_grows_then_caps() {
    assert_eq!((rows_for(2), cols_for(2)), (5, 9));
    assert_eq!((rows_for(3), cols_for(3)), (6, 10));
    assert_eq!((rows_for(5), cols_for(5)), (6, 12));
    assert_eq!((rows_for(40), cols_for(40)), (6, 12));

    let w = spawn_wave(9, 540.0, &mut seeded_rng());
    assert_eq!(w.aliens.len(), 72);
}

#[test]
fn wave_zero_is_treated_as_wave_one() {
    let zero = spawn_wave(0, 540.0, &mut seeded_rng());
    let one = spawn_wave(1, 540.0, &mut seeded_rng());
    assert_eq!(zero.aliens, one.aliens);
    assert_eq!(zero.formation, one.formation);
}

#[test]
fn grid_is_centred_with_fixed_pitch() {
    let w = spawn_wave(1, 540.0, &mut seeded_rng());
    let first = &w.aliens[0];
    let last = &w.aliens[w.aliens.len() - 1];
    // 8 cells of 24 plus 7 gaps of 14 = 290 wide
    assert!(approx(first.x, 125.0));
    assert!(approx(last.x + last.w, 415.0));
    assert!(approx(w.aliens[1].x - first.x, 38.0));
    assert!(approx(first.y, 80.0));
    assert!(approx(w.aliens[8].y - first.y, 40.0));
}

#[test]
fn rear_rows_are_worth_more() {
    let w = spawn_wave(1, 540.0, &mut seeded_rng());
    let cols = w.formation.cols as usize;
    let row_value = |r: usize| w.aliens[r * cols].value;
    // row 0 is the back row, row 3 the front row
    assert_eq!(row_value(3), 10);
    assert_eq!(row_value(2), 15);
    assert_eq!(row_value(1), 20);
    assert_eq!(row_value(0), 25);
    assert!(w.aliens[..cols].iter().all(|a| a.value == 25));
}

#[test]
fn difficulty_scales_with_wave() {
    let w1 = spawn_wave(1, 540.0, &mut seeded_rng());
    assert!(approx(w1.formation.speed, 30.0));
    assert!(approx(w1.formation.fire_rate, 1.45));
    assert_eq!(w1.formation.step_down, 18.0);
    assert_eq!(w1.formation.march, March::Right);

    let mut prev = w1.formation;
    for wave in 2..10 {
        let next = spawn_wave(wave, 540.0, &mut seeded_rng()).formation;
        assert!(next.speed > prev.speed);
        assert!(next.fire_rate > prev.fire_rate);
        prev = next;
    }
}

#[test]
fn first_ufo_delay_is_between_eight_and_sixteen_seconds() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let w = spawn_wave(1, 540.0, &mut rng);
        assert!(w.ufo_timer >= 8.0 && w.ufo_timer < 16.0);
    }
}

#[test]
fn widest_grid_fits_minimum_field() {
    let w = spawn_wave(12, 460.0, &mut seeded_rng());
    let min_x = w.aliens.iter().map(|a| a.x).fold(f32::INFINITY, f32::min);
    let max_x = w.aliens.iter().map(|a| a.x + a.w).fold(f32::NEG_INFINITY, f32::max);
    assert!(min_x >= 8.0);
    assert!(max_x <= 452.0);
}
