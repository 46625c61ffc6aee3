use crate::core::{ModelError, Result, Value};
use crate::model::class::ModelClass;
use crate::property::{Kwargs, PropertyManager};
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A model instance: a shared reference to its class plus its own
/// property manager. Undeclared names fall back to an auxiliary
/// attribute map, matching ordinary attribute assignment.
#[derive(Debug)]
pub struct Model {
    class: Arc<ModelClass>,
    properties: PropertyManager,
    attributes: BTreeMap<String, Value>,
}

impl Model {
    /// Construct an instance of `class`, binding constructor kwargs to
    /// declared property names. Omitted names take declared defaults;
    /// unknown names fail construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelcore::{IntegerType, Kwargs, Model, ModelClass, StringType, Value, declare};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let user = ModelClass::with_uuid("User")
    ///     .property("name", declare(StringType::new().min_length(1).max_length(64)).required())
    ///     .property("age", declare(IntegerType::new().min_value(0).max_value(150)))
    ///     .build();
    ///
    /// let mut alice = Model::new(&user, Kwargs::new().with("name", "Alice").with("age", 30))?;
    /// assert_eq!(alice.get("name")?, Value::from("Alice"));
    ///
    /// alice.set("age", 31)?;
    /// assert!(alice.set("age", "thirty-one").is_err());
    /// assert!(alice.set("uuid", uuid::Uuid::new_v4()).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(class: &Arc<ModelClass>, kwargs: Kwargs) -> Result<Self> {
        let properties = PropertyManager::new(class.schema(), kwargs)?;
        debug!("constructed model instance: class='{}'", class.name());
        Ok(Self {
            class: Arc::clone(class),
            properties,
            attributes: BTreeMap::new(),
        })
    }

    pub fn class(&self) -> &Arc<ModelClass> {
        &self.class
    }

    pub fn properties(&self) -> &PropertyManager {
        &self.properties
    }

    /// Read a declared property's current value, or an auxiliary
    /// attribute for undeclared names.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(slot) = self.properties.get(name) {
            return Ok(slot.value().clone());
        }
        self.attributes
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::AttributeNotFound {
                model: self.class.name().to_string(),
                attribute: name.to_string(),
            })
    }

    /// Write a declared property through its validating setter, or store
    /// an auxiliary attribute for undeclared names.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let Some(slot) = self.properties.get_mut(name) else {
            self.attributes.insert(name.to_string(), value);
            return Ok(());
        };
        match slot.set_value(value) {
            Err(ModelError::InvalidType {
                value,
                property_type,
            }) => Err(ModelError::ModelInvalidType {
                property: name.to_string(),
                value,
                model: self.class.name().to_string(),
                expected: property_type,
            }),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StringType;
    use crate::model::class::ModelClass;
    use crate::property::declare;

    fn person() -> Arc<ModelClass> {
        ModelClass::builder("Person")
            .property("name", declare(StringType::new()).required())
            .build()
    }

    #[test]
    fn test_get_and_set_declared_property() {
        let class = person();
        let mut model = Model::new(&class, Kwargs::new().with("name", "Alice")).unwrap();

        assert_eq!(model.get("name").unwrap(), Value::from("Alice"));
        model.set("name", "Bob").unwrap();
        assert_eq!(model.get("name").unwrap(), Value::from("Bob"));
    }

    #[test]
    fn test_invalid_write_is_model_level_error() {
        let class = person();
        let mut model = Model::new(&class, Kwargs::new().with("name", "Alice")).unwrap();

        let err = model.set("name", 5).unwrap_err();
        match err {
            ModelError::ModelInvalidType {
                property,
                value,
                model,
                expected,
            } => {
                assert_eq!(property, "name");
                assert_eq!(value, Value::Integer(5));
                assert_eq!(model, "Person");
                assert_eq!(expected, "TEXT");
            }
            other => panic!("expected ModelInvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_undeclared_names_fall_back_to_attributes() {
        let class = person();
        let mut model = Model::new(&class, Kwargs::new().with("name", "Alice")).unwrap();

        model.set("note", "remember me").unwrap();
        assert_eq!(model.get("note").unwrap(), Value::from("remember me"));

        let err = model.get("missing").unwrap_err();
        assert!(matches!(err, ModelError::AttributeNotFound { .. }));
    }
}
