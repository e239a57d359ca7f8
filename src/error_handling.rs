pub mod types;
pub use types::{ConfigError, ConvertError};
