//! Numeric signal-processing primitives for spectral analysis front-ends.
//!
//! This crate provides the small building blocks a phase vocoder or
//! onset/pitch tracker needs before and after its Fourier transform:
//!
//! - Analysis window generation (11 shapes, `hanningz` by default)
//! - Sound-level measurement (linear power, dB SPL) and threshold-based
//!   silence classification
//! - In-place partition swaps (`shift`/`ishift`) for re-centering spectra
//! - Scalar frequency ↔ mel conversions (Slaney and HTK scales)
//!
//! # Example
//!
//! ```
//! use specframe_dsp::{generate_window, level_lin, silence_detection, WindowType};
//!
//! // Window a frame of audio before the FFT.
//! let window = generate_window(WindowType::Hanningz, 512);
//! let frame = vec![0.5f32; 512];
//! let windowed: Vec<f32> = frame.iter().zip(&window).map(|(s, w)| s * w).collect();
//!
//! // Skip frames that are effectively silent.
//! if silence_detection(&windowed, -90.0) {
//!     // nothing to analyse
//! }
//! assert!(level_lin(&windowed) > 0.0);
//! ```
//!
//! # Design
//!
//! All operations are pure, synchronous functions over caller-supplied
//! buffers; nothing here performs I/O or holds process-wide state. The
//! read-only operations take `&[f32]` and are safe to call concurrently
//! on shared data. [`shift`] and [`ishift`] mutate their argument in
//! place, so the exclusive-access requirement is enforced by `&mut`.
//!
//! Undefined numeric results are sentinels, not errors: [`db_spl`] of a
//! zero-energy frame is `f32::NEG_INFINITY`, which compares below any
//! finite threshold. The only reportable error is an unrecognized window
//! name ([`DspError::UnknownWindowType`]).

pub mod error;
pub mod level;
pub mod mel;
pub mod shift;
pub mod window;

// Re-export main types and operations
pub use error::DspError;
pub use level::{db_spl, level_detection, level_lin, level_status, silence_detection, LevelStatus};
pub use mel::{hz_to_mel, hz_to_mel_htk, mel_to_hz, mel_to_hz_htk, MelVariant};
pub use shift::{ishift, shift};
pub use window::{generate_window, generate_window_named, WindowType};
