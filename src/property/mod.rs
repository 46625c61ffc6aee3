pub mod declaration;
pub mod manager;
pub mod schema;
pub mod slot;

pub use declaration::{PropertyDeclaration, SlotFactory, declare};
pub use manager::{Kwargs, PropertyManager};
pub use schema::{PropertyMapping, PropertySchema};
pub use slot::{DefaultProducer, Property, PropertyDefault, PropertySlot};
