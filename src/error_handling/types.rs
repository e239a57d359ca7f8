use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    StreamIdWhitespace(String),
    BadOffsetFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StreamIdWhitespace(s) => {
                write!(f, "Stream id must not contain whitespace: {:?}", s)
            }
            ConfigError::BadOffsetFormat(s) => {
                write!(f, "UTC offset must be formatted as [+-]HH:MM: {:?}", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum ConvertError {
    ReadFailed(std::io::Error),
    WriteFailed(std::io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ReadFailed(e) => write!(f, "Log read error: {}", e),
            ConvertError::WriteFailed(e) => write!(f, "Report write error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {}
