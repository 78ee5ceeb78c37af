//! Frequency ↔ mel scale conversions.
//!
//! Two standard formula families are provided: Slaney (the default,
//! linear below a 1 kHz breakpoint and logarithmic above it) and HTK
//! (fully logarithmic).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mel scale formula family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MelVariant {
    /// Slaney's Auditory Toolbox scale: linear up to 1 kHz, log above.
    #[default]
    Slaney,
    /// HTK scale: `2595 * log10(1 + f / 700)`.
    Htk,
}

// Slaney scale constants: 200/3 mel per Hz below the 1 kHz breakpoint,
// log-spaced above it with a step of ln(6.4)/27.
const F_SP: f32 = 200.0 / 3.0;
const BRK_FRQ: f32 = 1000.0;
const BRK_PT: f32 = BRK_FRQ / F_SP;

#[inline]
fn log_step() -> f32 {
    (6.4f32).ln() / 27.0
}

/// Convert a frequency in Hz to mel.
///
/// Negative frequencies are clamped to the scale origin (`0.0` mel).
#[inline]
pub fn hz_to_mel(freq: f32, variant: MelVariant) -> f32 {
    if freq < 0.0 {
        tracing::warn!(freq, "negative frequency, returning 0 mel");
        return 0.0;
    }
    match variant {
        MelVariant::Htk => 2595.0 * (1.0 + freq / 700.0).log10(),
        MelVariant::Slaney => {
            if freq < BRK_FRQ {
                freq / F_SP
            } else {
                BRK_PT + (freq / BRK_FRQ).ln() / log_step()
            }
        }
    }
}

/// Convert a mel value to a frequency in Hz.
///
/// Negative mel values are clamped to the scale origin (`0.0` Hz).
#[inline]
pub fn mel_to_hz(mel: f32, variant: MelVariant) -> f32 {
    if mel < 0.0 {
        tracing::warn!(mel, "negative mel, returning 0 Hz");
        return 0.0;
    }
    match variant {
        MelVariant::Htk => 700.0 * (10.0f32.powf(mel / 2595.0) - 1.0),
        MelVariant::Slaney => {
            if mel < BRK_PT {
                mel * F_SP
            } else {
                BRK_FRQ * ((mel - BRK_PT) * log_step()).exp()
            }
        }
    }
}

/// Same as [`hz_to_mel`] with [`MelVariant::Htk`].
#[inline]
pub fn hz_to_mel_htk(freq: f32) -> f32 {
    hz_to_mel(freq, MelVariant::Htk)
}

/// Same as [`mel_to_hz`] with [`MelVariant::Htk`].
#[inline]
pub fn mel_to_hz_htk(mel: f32) -> f32 {
    mel_to_hz(mel, MelVariant::Htk)
}
