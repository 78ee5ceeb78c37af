//! Sound-level measurement and threshold-based silence classification.

/// Status of a frame relative to a silence threshold.
///
/// This is the unambiguous alternative to [`level_detection`], which folds
/// classification and measurement into one `f32` return channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelStatus {
    /// Frame level is below the threshold.
    Silent,
    /// Frame level is at or above the threshold.
    Measured {
        /// Level of the frame in dB SPL
        db_spl: f32,
    },
}

impl LevelStatus {
    /// Check if this status classifies the frame as silent.
    pub fn is_silent(&self) -> bool {
        matches!(self, LevelStatus::Silent)
    }

    /// The measured level, if the frame was not classified as silent.
    pub fn db_spl(&self) -> Option<f32> {
        match self {
            LevelStatus::Silent => None,
            LevelStatus::Measured { db_spl } => Some(*db_spl),
        }
    }
}

/// Compute the sound level of `frame` on a linear scale.
///
/// This is the mean of the squared amplitudes. An empty frame carries no
/// energy and yields `0.0`.
pub fn level_lin(frame: &[f32]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }

    let sum_squares: f64 = frame
        .iter()
        .map(|&sample| {
            let s = sample as f64;
            s * s
        })
        .sum();

    (sum_squares / frame.len() as f64) as f32
}

/// Compute the Sound Pressure Level (SPL) of `frame`, in dB.
///
/// Computed as `log10` of [`level_lin`]. A zero-energy frame yields
/// `f32::NEG_INFINITY` rather than an error, so that it compares below
/// any finite threshold.
pub fn db_spl(frame: &[f32]) -> f32 {
    let level = level_lin(frame);
    if level <= 0.0 {
        f32::NEG_INFINITY
    } else {
        level.log10()
    }
}

/// Check if the level of `frame`, in dB SPL, is under `threshold_db`.
pub fn silence_detection(frame: &[f32], threshold_db: f32) -> bool {
    db_spl(frame) < threshold_db
}

/// Classify-or-report level check, preserved for compatibility.
///
/// Returns `1.0` if the level of `frame` in dB SPL is under
/// `threshold_db`, and `db_spl(frame)` otherwise. The two meanings share
/// one return channel, so a reading of exactly `1.0` is ambiguous at the
/// boundary; new callers should prefer [`level_status`].
pub fn level_detection(frame: &[f32], threshold_db: f32) -> f32 {
    let db = db_spl(frame);
    if db < threshold_db {
        1.0
    } else {
        db
    }
}

/// Classify `frame` against `threshold_db`, keeping classification and
/// measurement in separate channels.
pub fn level_status(frame: &[f32], threshold_db: f32) -> LevelStatus {
    let db = db_spl(frame);
    if db < threshold_db {
        LevelStatus::Silent
    } else {
        LevelStatus::Measured { db_spl: db }
    }
}
