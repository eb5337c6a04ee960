use core::fmt;

#[derive(Debug)]
pub enum AppError {
    DuplicateContact(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Logger(String),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DuplicateContact(key) => {
                write!(f, "Contact already exists: {}", key)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed contact data: {}", e)
            }
            AppError::Logger(msg) => {
                write!(f, "Could not start logger: {}", msg)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}
