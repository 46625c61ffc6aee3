pub mod error;
pub mod types;
pub mod value;

pub use error::{ModelError, Result};
pub use types::{IntegerType, StringType, TypeDescriptor, UuidType};
pub use value::Value;
