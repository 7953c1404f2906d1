use std::fmt;

use input_core::InputId;

/// Why the hidden clone could not produce a measurement.
///
/// These never escape [`crate::HeightCalculator::calculate_height`]; the
/// calculator degrades to a best-effort result and logs the cause.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureError {
    /// The element is not rendered, so it has no layout box to copy.
    Detached(InputId),
    /// The element reported a border-box width that is not a finite number.
    NoLayoutWidth { id: InputId, width: f32 },
    /// The text measurer produced a non-finite line or content height.
    NonFiniteMetrics { id: InputId, height: f32 },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::Detached(id) => write!(f, "{id} is not rendered"),
            MeasureError::NoLayoutWidth { id, width } => {
                write!(f, "{id} has unusable layout width {width}")
            }
            MeasureError::NonFiniteMetrics { id, height } => {
                write!(f, "measuring {id} produced non-finite height {height}")
            }
        }
    }
}

impl std::error::Error for MeasureError {}
