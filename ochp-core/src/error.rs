use thiserror::Error;

/// Main error type for OCHP operations
#[derive(Error, Debug)]
pub enum OchpError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Missing attribute '{attribute}' on element '{element}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Invalid value in '{element}': {message}")]
    InvalidValue { element: String, message: String },

    #[error("Unexpected element: expected {expected}, got {actual}")]
    UnexpectedElement { expected: String, actual: String },

    #[error("Invalid {kind}: '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] xmltree::Error),

    #[error("SOAP error: {0}")]
    Soap(String),

    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },
}

impl OchpError {
    /// Shorthand for an `InvalidValue` error
    pub fn invalid_value(element: impl Into<String>, message: impl ToString) -> Self {
        OchpError::InvalidValue {
            element: element.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for OCHP operations
pub type OchpResult<T> = Result<T, OchpError>;
