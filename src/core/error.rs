use crate::core::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Property is required and cannot be null")]
    PropertyRequired,

    #[error("Property is read only")]
    ReadOnlyProperty,

    #[error("Invalid type value '{value}' for '{property_type}'")]
    InvalidType {
        value: Value,
        property_type: &'static str,
    },

    #[error("Invalid value '{value}' for property '{property}' of model '{model}': expected {expected}")]
    ModelInvalidType {
        property: String,
        value: Value,
        model: String,
        expected: &'static str,
    },

    #[error("Unknown parameters: {}", .0.join(", "))]
    UnknownParameters(Vec<String>),

    #[error("'{model}' object has no attribute '{attribute}'")]
    AttributeNotFound { model: String, attribute: String },

    #[error("Property '{0}' is not declared")]
    PropertyNotFound(String),

    #[error("Cannot merge {left} with {right}")]
    IncompatibleMerge {
        left: &'static str,
        right: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
