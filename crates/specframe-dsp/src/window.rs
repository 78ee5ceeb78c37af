//! Analysis window generation for framing signals before a Fourier transform.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DspError;

/// Supported analysis window shapes.
///
/// `Hanningz` is the default: a zero-phase Hann variant whose first sample
/// is exactly `0.0`, commonly used in phase vocoder analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowType {
    Ones,
    Rectangle,
    Hamming,
    Hanning,
    #[default]
    Hanningz,
    Blackman,
    BlackmanHarris,
    Gaussian,
    Welch,
    Parzen,
}

impl WindowType {
    /// All window types, in canonical order.
    pub const ALL: [WindowType; 10] = [
        WindowType::Ones,
        WindowType::Rectangle,
        WindowType::Hamming,
        WindowType::Hanning,
        WindowType::Hanningz,
        WindowType::Blackman,
        WindowType::BlackmanHarris,
        WindowType::Gaussian,
        WindowType::Welch,
        WindowType::Parzen,
    ];

    /// Parse a window type from its wire name.
    ///
    /// `"default"` is accepted as an alias for `hanningz`. Unknown names
    /// are rejected with [`DspError::UnknownWindowType`]; they never fall
    /// back to a default shape.
    pub fn from_name(name: &str) -> Result<Self, DspError> {
        match name {
            "ones" => Ok(WindowType::Ones),
            "rectangle" => Ok(WindowType::Rectangle),
            "hamming" => Ok(WindowType::Hamming),
            "hanning" => Ok(WindowType::Hanning),
            "hanningz" | "default" => Ok(WindowType::Hanningz),
            "blackman" => Ok(WindowType::Blackman),
            "blackman_harris" => Ok(WindowType::BlackmanHarris),
            "gaussian" => Ok(WindowType::Gaussian),
            "welch" => Ok(WindowType::Welch),
            "parzen" => Ok(WindowType::Parzen),
            other => {
                tracing::debug!(name = other, "rejecting unknown window type");
                Err(DspError::UnknownWindowType {
                    name: other.to_string(),
                })
            }
        }
    }

    /// Canonical wire name of this window type.
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Ones => "ones",
            WindowType::Rectangle => "rectangle",
            WindowType::Hamming => "hamming",
            WindowType::Hanning => "hanning",
            WindowType::Hanningz => "hanningz",
            WindowType::Blackman => "blackman",
            WindowType::BlackmanHarris => "blackman_harris",
            WindowType::Gaussian => "gaussian",
            WindowType::Welch => "welch",
            WindowType::Parzen => "parzen",
        }
    }
}

impl FromStr for WindowType {
    type Err = DspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowType::from_name(s)
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Generate an analysis window of `size` samples.
///
/// The output length always equals `size`; `size == 0` yields an empty
/// vector for every type.
///
/// For `size == 1` the window types whose formulas divide by `N - 1`
/// (hamming, blackman, blackman_harris, gaussian) output the single
/// sample `1.0` (peak-value convention) instead of dividing by zero.
pub fn generate_window(window_type: WindowType, size: usize) -> Vec<f32> {
    use std::f32::consts::PI;
    use WindowType::*;

    if size == 1 && matches!(window_type, Hamming | Blackman | BlackmanHarris | Gaussian) {
        // The (N - 1) denominator is zero for a single-sample window;
        // take the peak value instead.
        return vec![1.0];
    }

    let len = size as f32;
    (0..size)
        .map(|i| {
            let n = i as f32;
            match window_type {
                Ones => 1.0,
                Rectangle => 0.5,
                Hanning => 0.5 - 0.5 * (2.0 * PI * n / len).cos(),
                Hanningz => 0.5 * (1.0 - (2.0 * PI * n / len).cos()),
                Hamming => 0.54 - 0.46 * (2.0 * PI * n / (len - 1.0)).cos(),
                Blackman => {
                    0.42 - 0.50 * (2.0 * PI * n / (len - 1.0)).cos()
                        + 0.08 * (4.0 * PI * n / (len - 1.0)).cos()
                }
                BlackmanHarris => {
                    0.35875 - 0.48829 * (2.0 * PI * n / (len - 1.0)).cos()
                        + 0.14128 * (4.0 * PI * n / (len - 1.0)).cos()
                        - 0.01168 * (6.0 * PI * n / (len - 1.0)).cos()
                }
                Gaussian => {
                    let arg = (n - 0.5 * (len - 1.0)) / (0.25 * (len - 1.0));
                    (-0.5 * arg * arg).exp()
                }
                Welch => 1.0 - ((2.0 * n - len) / (len + 1.0)).powi(2),
                Parzen => 1.0 - ((2.0 * n - len) / (len + 1.0)).abs(),
            }
        })
        .collect()
}

/// Generate an analysis window from its wire name.
///
/// This is the string-keyed surface consumed by binding layers; it fails
/// with [`DspError::UnknownWindowType`] on an unrecognized name and
/// produces no output in that case.
pub fn generate_window_named(name: &str, size: usize) -> Result<Vec<f32>, DspError> {
    let window_type = WindowType::from_name(name)?;
    Ok(generate_window(window_type, size))
}
