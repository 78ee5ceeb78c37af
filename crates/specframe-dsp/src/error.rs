use thiserror::Error;

/// Errors reported to callers of the DSP primitives.
///
/// Undefined numeric results (e.g. the dB level of an all-zero frame) are
/// not errors; they are reported through `f32::NEG_INFINITY` so threshold
/// comparisons keep working downstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    #[error("unknown window type: {name:?}")]
    UnknownWindowType { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_window_type_display() {
        let err = DspError::UnknownWindowType {
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown window type: \"bogus\"");
    }
}
