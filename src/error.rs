//! Error types for the dominant_blue library

use thiserror::Error;

/// Result type alias for dominant_blue operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for blue extraction and the image plumbing around it.
///
/// Finding no blue pixels is not an error; extraction reports it as `None`.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A raw pixel channel was outside [0, 255]
    #[error("Pixel {index}: {channel} channel value {value} is outside [0, 255]")]
    ChannelOutOfRange {
        index: usize,
        channel: Channel,
        value: i64,
    },

    /// A raw pixel did not have exactly three channels
    #[error("Pixel {index}: expected 3 channels, got {arity}")]
    MalformedPixel { index: usize, arity: usize },

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Neither the file content nor its extension names a format the loader decodes
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: String },

    /// Sampling configuration could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

/// RGB channel named in input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channel at position `i` of an (r, g, b) triple
    pub(crate) fn from_index(i: usize) -> Self {
        match i {
            0 => Channel::Red,
            1 => Channel::Green,
            _ => Channel::Blue,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl ExtractionError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True when the caller handed over malformed pixel data, as opposed to
    /// an upstream failure while producing it
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::ChannelOutOfRange { .. } | ExtractionError::MalformedPixel { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file and try again.".to_string()
            }
            ExtractionError::UnsupportedFormat { .. } => {
                "This image format is not supported.".to_string()
            }
            ExtractionError::ConfigError { .. } => {
                "Could not read the sampling configuration.".to_string()
            }
            ExtractionError::ChannelOutOfRange { .. } | ExtractionError::MalformedPixel { .. } => {
                "The pixel data is malformed.".to_string()
            }
            ExtractionError::InvalidParameter { parameter, .. } => {
                format!("Invalid value for {}.", parameter)
            }
        }
    }
}
