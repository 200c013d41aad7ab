//! Unit tests for z-score scaling

use kakeibo::features::RATIO_SCALING;
use kakeibo::models::RATIO_FEATURES;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn test_scale_descale_round_trip() {
    // One full day of plausible raw features plus a second day to cover
    // the cyclic table application.
    let mut raw = vec![
        15.0, 7.0, 29.0, 300000.0, 0.0, 1.0, 0.0, 0.0, // calendar
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, // one-hot
        1200.0, 400.0, 0.0, 150.0, 800.0, 0.0, 90.0, // rolling means
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, // spikes
    ];
    let second_day = raw.clone();
    raw.extend_from_slice(&second_day);
    assert_eq!(raw.len(), 2 * RATIO_FEATURES);

    let scaled = RATIO_SCALING.scale(&raw);
    let restored = RATIO_SCALING.descale(&scaled);

    for (original, back) in raw.iter().zip(restored.iter()) {
        // Relative tolerance: the income slot round-trips through a
        // six-figure scale factor.
        let eps = (original.abs() * 1e-5).max(1e-3);
        assert!(
            approx(*original, *back, eps),
            "round trip drifted: {original} -> {back}"
        );
    }
}

#[test]
fn test_scaling_applies_cyclically() {
    let raw = vec![10.0; 2 * RATIO_FEATURES];
    let scaled = RATIO_SCALING.scale(&raw);
    for i in 0..RATIO_FEATURES {
        assert_eq!(scaled[i], scaled[i + RATIO_FEATURES]);
    }
}

#[test]
fn test_spike_slots_pass_through() {
    // Positions 22..29 have mean 0 and scale 1, so flags stay 0/1.
    let mut raw = vec![0.0; RATIO_FEATURES];
    raw[22] = 1.0;
    raw[28] = 1.0;
    let scaled = RATIO_SCALING.scale(&raw);
    assert_eq!(scaled[22], 1.0);
    assert_eq!(scaled[23], 0.0);
    assert_eq!(scaled[28], 1.0);
}
