//! Fatal controller initialization errors
//!
//! Game outcomes (win/lose) are not errors; they are phases.

use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// Playfield narrower than one brick stride
    NoBricks { width: f32 },
    /// Playfield with a zero or negative dimension
    InvalidPlayfield { width: f32, height: f32 },
    /// Settings field out of range
    InvalidSettings { field: &'static str, reason: &'static str },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBricks { width } => {
                write!(f, "playfield width {width} fits no bricks")
            }
            Self::InvalidPlayfield { width, height } => {
                write!(f, "invalid playfield size {width}x{height}")
            }
            Self::InvalidSettings { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ControllerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ControllerError::InvalidSettings {
            field: "starting_lives",
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid setting `starting_lives`: must be at least 1"
        );
        assert_eq!(
            ControllerError::NoBricks { width: 40.0 }.to_string(),
            "playfield width 40 fits no bricks"
        );
    }
}
