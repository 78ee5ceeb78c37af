use approx::{assert_abs_diff_eq, assert_relative_eq};
use specframe_dsp::{
    db_spl, generate_window, generate_window_named, hz_to_mel, ishift, level_detection, level_lin,
    level_status, mel_to_hz, shift, silence_detection, DspError, MelVariant, WindowType,
};

/// Generate a 1 kHz test tone at the given amplitude.
fn generate_tone(samples: usize, amplitude: f32) -> Vec<f32> {
    (0..samples)
        .map(|i| {
            let t = i as f32 / 16000.0;
            (2.0 * std::f32::consts::PI * 1000.0 * t).sin() * amplitude
        })
        .collect()
}

// ============================================================================
// Windowed-frame level pipeline
// ============================================================================

#[test]
fn test_windowed_frame_level_pipeline() {
    let frame = generate_tone(512, 0.5);
    let window = generate_window(WindowType::Hanningz, 512);

    let windowed: Vec<f32> = frame.iter().zip(&window).map(|(s, w)| s * w).collect();

    // Windowing attenuates but does not silence the frame.
    assert!(level_lin(&windowed) > 0.0);
    assert!(level_lin(&windowed) < level_lin(&frame));
    assert!(!silence_detection(&windowed, -90.0));

    // A zeroed frame through the same window is silent.
    let zeros = vec![0.0f32; 512];
    let windowed_zeros: Vec<f32> = zeros.iter().zip(&window).map(|(s, w)| s * w).collect();
    assert!(silence_detection(&windowed_zeros, -90.0));
    assert!(level_status(&windowed_zeros, -90.0).is_silent());
}

#[test]
fn test_window_generation_by_wire_name() {
    let by_name = generate_window_named("blackman_harris", 256).unwrap();
    let by_tag = generate_window(WindowType::BlackmanHarris, 256);
    assert_eq!(by_name, by_tag);

    // Unknown names must fail, never silently fall back to a default.
    match generate_window_named("bogus", 16) {
        Err(DspError::UnknownWindowType { name }) => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownWindowType, got {:?}", other),
    }
}

// ============================================================================
// db_spl reference behavior
// ============================================================================

#[test]
fn test_db_spl_of_all_ones_follows_formula_not_docs() {
    // The upstream reference documentation shows db_spl of an all-ones
    // vector as 1.0, but the documented formula log10(level_lin(v))
    // yields log10(1.0) = 0.0. The formula is authoritative here; this
    // test exists to flag the discrepancy, not to hide it.
    let ones = vec![1.0f32; 1024];
    assert_abs_diff_eq!(level_lin(&ones), 1.0, epsilon = 1e-7);
    assert_abs_diff_eq!(db_spl(&ones), 0.0, epsilon = 1e-7);
}

#[test]
fn test_level_detection_legacy_contract() {
    let quiet = generate_tone(1024, 0.001);
    let loud = generate_tone(1024, 0.7);

    // Below threshold: the boolean-like 1.0.
    assert_eq!(level_detection(&quiet, 0.0), 1.0);

    // At or above threshold: the dB reading itself.
    let loud_db = db_spl(&loud);
    assert_eq!(level_detection(&loud, loud_db - 10.0), loud_db);

    // The clean alternative keeps the channels apart.
    assert!(level_status(&quiet, 0.0).is_silent());
    assert_eq!(level_status(&loud, loud_db - 10.0).db_spl(), Some(loud_db));
}

// ============================================================================
// Spectrum re-centering round trips
// ============================================================================

#[test]
fn test_shift_round_trip_on_window_vectors() {
    for size in [0, 1, 2, 15, 16, 511, 512] {
        let original = generate_window(WindowType::Hamming, size);
        let mut v = original.clone();
        ishift(shift(&mut v));
        assert_eq!(v, original, "round trip failed for size {}", size);
    }
}

#[test]
fn test_shift_recenters_symmetric_window() {
    // A symmetric window shifted by N/2 puts its peak at the edges.
    let mut window = generate_window(WindowType::Hanning, 64);
    shift(&mut window);
    assert!(window[0] > 0.99);
    assert_abs_diff_eq!(window[32], 0.0, epsilon = 1e-6);
}

// ============================================================================
// Mel scale sanity across variants
// ============================================================================

#[test]
fn test_mel_round_trip_both_variants() {
    for variant in [MelVariant::Slaney, MelVariant::Htk] {
        for hz in [27.5, 261.6, 1000.0, 4186.0, 12000.0] {
            let back = mel_to_hz(hz_to_mel(hz, variant), variant);
            assert_relative_eq!(back, hz, max_relative = 1e-4);
        }
    }
}

#[test]
fn test_variants_agree_on_origin_and_diverge_above() {
    assert_eq!(hz_to_mel(0.0, MelVariant::Slaney), 0.0);
    assert_eq!(hz_to_mel(0.0, MelVariant::Htk), 0.0);

    // The scales use different units; well above the origin they differ.
    let slaney = hz_to_mel(4000.0, MelVariant::Slaney);
    let htk = hz_to_mel(4000.0, MelVariant::Htk);
    assert!((slaney - htk).abs() > 1.0);
}
