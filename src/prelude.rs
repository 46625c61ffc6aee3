//! Recommended API entrypoints for application code.
//!
//! Intended usage:
//! - `ModelClass` builders for class definition,
//! - `declare` plus the type descriptors for property declarations,
//! - `Model` and `Kwargs` for instance construction and access.

pub use crate::core::{
    IntegerType, ModelError, Result, StringType, TypeDescriptor, UuidType, Value,
};
pub use crate::model::{Model, ModelClass};
pub use crate::property::{Kwargs, PropertyDefault, PropertyMapping, PropertySchema, declare};
