use thiserror::Error;

/// Failures raised by the calculation engine.
///
/// `DivisionUndefined` is only returned by the low-level ratio primitives;
/// everything built on top of them folds it into an `Option` so callers can
/// render "N/A". The other two variants mean the caller skipped validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division undefined: {what}")]
    DivisionUndefined { what: &'static str },

    #[error("unknown {category} '{value}'")]
    UnknownCategory {
        category: &'static str,
        value: String,
    },

    #[error("invalid {field} = {value}: must be {constraint}")]
    InvalidMagnitude {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl CalcError {
    pub fn unknown(category: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category,
            value: value.into(),
        }
    }
}
