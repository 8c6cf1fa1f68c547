use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum XgError {
    #[error("Geometry domain error at ({x}, {y}): {reason}")]
    Domain { x: f64, y: f64, reason: &'static str },

    #[error("Model schema mismatch at column {position}: expected '{expected}', found '{found}'")]
    SchemaMismatch { position: usize, expected: String, found: String },

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    #[error("Event index out of range: shot at {index} has no preceding event")]
    OutOfRange { index: usize },

    #[error("Event log error: {0}")]
    EventLog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),
}

impl XgError {
    /// Errors the caller can fix by changing the inputs of a single call.
    pub fn is_input_error(&self) -> bool {
        match self {
            XgError::Domain { .. } => true,
            XgError::OutOfRange { .. } => true,
            XgError::SchemaMismatch { .. } => false,
            XgError::InvalidModelOutput(_) => false,
            XgError::EventLog(_) => true,
            XgError::Config(_) => true,
            XgError::Model(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, XgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_column() {
        let err = XgError::SchemaMismatch {
            position: 2,
            expected: "Number_Intervening_Opponents".to_string(),
            found: "Pressure".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("column 2"));
        assert!(msg.contains("Number_Intervening_Opponents"));
        assert!(msg.contains("Pressure"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(XgError::OutOfRange { index: 0 }.is_input_error());
        assert!(XgError::Domain { x: 0.0, y: 3.66, reason: "singular" }.is_input_error());
        assert!(!XgError::InvalidModelOutput("nan".into()).is_input_error());
    }
}
