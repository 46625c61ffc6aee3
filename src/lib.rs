// ============================================================================
// ModelCore Library
// ============================================================================

pub mod core;
pub mod model;
pub mod prelude;
pub mod property;

// Re-export main types for convenience
pub use core::{IntegerType, ModelError, Result, StringType, TypeDescriptor, UuidType, Value};
pub use model::{Model, ModelClass, ModelClassBuilder};
pub use property::{
    Kwargs, Property, PropertyDeclaration, PropertyDefault, PropertyManager, PropertyMapping,
    PropertySchema, PropertySlot, SlotFactory, declare,
};
