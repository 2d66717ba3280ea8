//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Permit
#[derive(Error, Debug)]
pub enum Error {
    /// A provider was invoked without overriding `attributes_for`
    #[error("Not implemented: {provider} must implement attributes_for")]
    NotImplemented {
        /// Name of the offending provider
        provider: String,
    },

    /// The persistence layer could not be reached at all
    #[error("Persistence unavailable: {message}")]
    PersistenceUnavailable {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A provider with the same name is already registered
    #[error("Duplicate attribute provider: {name}")]
    DuplicateProvider {
        /// The provider name that collided
        name: String,
    },

    /// A whitelist was already published for the model
    #[error("CRUD attributes already published for model: {model}")]
    AlreadyPublished {
        /// The model whose whitelist is already bound
        model: String,
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

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
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

// Basic error creation methods
impl Error {
    /// Create a not-implemented error for the named provider
    pub fn not_implemented<S: Into<String>>(provider: S) -> Self {
        Self::NotImplemented {
            provider: provider.into(),
        }
    }

    /// Create a duplicate provider error
    pub fn duplicate_provider<S: Into<String>>(name: S) -> Self {
        Self::DuplicateProvider { name: name.into() }
    }

    /// Create an already-published error
    pub fn already_published<S: Into<String>>(model: S) -> Self {
        Self::AlreadyPublished {
            model: model.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Persistence error creation methods
impl Error {
    /// Create a persistence-unavailable error
    pub fn persistence_unavailable<S: Into<String>>(message: S) -> Self {
        Self::PersistenceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence-unavailable error with source
    pub fn persistence_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::PersistenceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error means the data layer is not reachable at all
    pub fn is_persistence_unavailable(&self) -> bool {
        matches!(self, Self::PersistenceUnavailable { .. })
    }
}

// Configuration and I/O error creation methods
impl Error {
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
}
