//! Error handling types

use thiserror::Error;

use crate::value_objects::DocumentType;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ASAP
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// UTF-8 encoding/decoding error
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// XML that could not be read or written
    #[error("XML error: {message}")]
    Xml {
        /// Description of the XML problem
        message: String,
    },

    /// Document type tag with no registered converter or rule artifact
    #[error("Unsupported document type: {tag}")]
    UnsupportedDocumentType {
        /// The tag that failed to resolve
        tag: String,
    },

    /// Object document that could not be represented as structural markup
    #[error("Conversion of {document_type} document failed: {message}")]
    Conversion {
        /// Declared or inferred type of the document
        document_type: DocumentType,
        /// Diagnostic from the transform
        message: String,
    },

    /// Rule artifact could not be loaded, or evaluation failed
    #[error("Rule engine error: {message}")]
    RuleEngine {
        /// Description of the engine failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rule or scenario artifact could not be summarized
    #[error("Summary generation failed for {artifact}: {message}")]
    SummaryGeneration {
        /// Location of the artifact that could not be parsed
        artifact: String,
        /// Parse diagnostic
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Document and rule errors
impl Error {
    /// Create an unsupported document type error
    pub fn unsupported_document_type<S: Into<String>>(tag: S) -> Self {
        Self::UnsupportedDocumentType { tag: tag.into() }
    }

    /// Create a conversion error
    pub fn conversion<S: Into<String>>(document_type: DocumentType, message: S) -> Self {
        Self::Conversion {
            document_type,
            message: message.into(),
        }
    }

    /// Create a rule engine error
    pub fn rule_engine<S: Into<String>>(message: S) -> Self {
        Self::RuleEngine {
            message: message.into(),
            source: None,
        }
    }

    /// Create a rule engine error with source
    pub fn rule_engine_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::RuleEngine {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a summary generation error
    pub fn summary_generation<A: Into<String>, S: Into<String>>(artifact: A, message: S) -> Self {
        Self::SummaryGeneration {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    /// Create an XML error
    pub fn xml<S: Into<String>>(message: S) -> Self {
        Self::Xml {
            message: message.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O, configuration and network error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the error describes an input document rather than the system
    ///
    /// Only conversion failures qualify; they surface as a malformed outcome
    /// instead of aborting the caller.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}
