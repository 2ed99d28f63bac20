//! Error types for the weather lookup
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Clima Error Enum ==
/// Unified error type for city resolution and weather retrieval.
///
/// The `Display` output is the message shown to the user; match on
/// [`ClimaError::kind`] instead of the text.
#[derive(Error, Debug)]
pub enum ClimaError {
    /// Geocoding returned no results for the city
    #[error("Cidade não encontrada.")]
    CityNotFound,

    /// Weather response had no current weather payload
    #[error("Dados do clima indisponíveis.")]
    WeatherUnavailable,

    /// Remote answered with an HTTP error status
    #[error("Erro na API: {status} {status_text}")]
    Api { status: u16, status_text: String },

    /// Request was sent but no response came back
    #[error("Sem resposta da API: {0}")]
    NoResponse(String),

    /// Any other failure while building or processing a request
    #[error("Erro inesperado: {0}")]
    Unexpected(String),
}

// == Error Kind ==
/// Coarse classification of a [`ClimaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DataUnavailable,
    Http,
    Network,
    Unexpected,
}

impl ClimaError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClimaError::CityNotFound => ErrorKind::NotFound,
            ClimaError::WeatherUnavailable => ErrorKind::DataUnavailable,
            ClimaError::Api { .. } => ErrorKind::Http,
            ClimaError::NoResponse(_) => ErrorKind::Network,
            ClimaError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Builds an `Api` error from a response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ClimaError::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

// == reqwest Conversion ==
impl From<reqwest::Error> for ClimaError {
    /// Classifies a transport error.
    ///
    /// Connection, timeout and mid-flight request failures mean no response
    /// arrived. Status errors keep their code. Everything else (builder,
    /// decode, redirect) is unexpected.
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClimaError::from_status(status)
        } else if err.is_builder() || err.is_decode() || err.is_redirect() {
            ClimaError::Unexpected(error_chain(&err))
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            ClimaError::NoResponse(error_chain(&err))
        } else {
            ClimaError::Unexpected(error_chain(&err))
        }
    }
}

/// Joins `err` and its sources with `": "`.
///
/// A cause whose text already appears in the message is skipped.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

// == Result Type Alias ==
/// Convenience Result type for the weather lookup.
pub type Result<T> = std::result::Result<T, ClimaError>;
