//! CLI error types with process exit codes.

use std::process::ExitCode;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Classifier error: {0}")]
    Classifier(String),
}

impl CliError {
    /// Exit code reported to the shell for this error class.
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Configuration(_) => ExitCode::from(2),
            Self::Dataset(_) => ExitCode::from(3),
            Self::Classifier(_) => ExitCode::from(4),
        }
    }
}

impl From<clasificar::ClasificarError> for CliError {
    fn from(e: clasificar::ClasificarError) -> Self {
        match e {
            clasificar::ClasificarError::Io(_) | clasificar::ClasificarError::Format { .. } => {
                Self::Dataset(e.to_string())
            }
            _ => Self::Classifier(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let e = CliError::Configuration("unknown mode 7".to_string());
        assert_eq!(e.to_string(), "Configuration error: unknown mode 7");
    }

    #[test]
    fn test_display_dataset() {
        let e = CliError::Dataset("missing file".to_string());
        assert_eq!(e.to_string(), "Dataset error: missing file");
    }

    #[test]
    fn test_io_maps_to_dataset() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e: CliError = clasificar::ClasificarError::Io(io).into();
        assert!(matches!(e, CliError::Dataset(_)));
    }

    #[test]
    fn test_format_maps_to_dataset() {
        let e: CliError = clasificar::ClasificarError::Format {
            message: "bad magic".to_string(),
        }
        .into();
        assert!(matches!(e, CliError::Dataset(_)));
    }

    #[test]
    fn test_model_error_maps_to_classifier() {
        let e: CliError = clasificar::ClasificarError::Other("Model not fitted".to_string()).into();
        assert!(matches!(e, CliError::Classifier(_)));
    }
}
