use crate::core::{ModelError, Result, UuidType, Value};
use crate::property::{PropertyDeclaration, PropertyMapping, PropertySchema, declare};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

/// Runtime class object: the class name plus its assembled schema.
/// Built once via the builder, immutable afterward, shared by every
/// instance of the class.
#[derive(Debug)]
pub struct ModelClass {
    name: String,
    schema: PropertySchema,
}

impl ModelClass {
    /// Start assembling a model class.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelcore::{ModelClass, StringType, declare};
    ///
    /// let person = ModelClass::builder("Person")
    ///     .property("name", declare(StringType::new().min_length(1)).required())
    ///     .build();
    ///
    /// assert_eq!(person.name(), "Person");
    /// assert!(person.attr("name").is_ok());
    /// ```
    pub fn builder(name: impl Into<String>) -> ModelClassBuilder {
        ModelClassBuilder {
            name: name.into(),
            parent: None,
            own: PropertySchema::new(),
        }
    }

    /// Builder pre-declaring a read-only `uuid` property whose default is
    /// a fresh identifier generated per instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelcore::{Kwargs, Model, ModelClass};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let entity = ModelClass::with_uuid("Entity").build();
    ///
    /// let first = Model::new(&entity, Kwargs::new())?;
    /// let second = Model::new(&entity, Kwargs::new())?;
    /// assert_ne!(first.get("uuid")?, second.get("uuid")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_uuid(name: impl Into<String>) -> ModelClassBuilder {
        Self::builder(name).property(
            "uuid",
            declare(UuidType::new())
                .read_only()
                .default_with(|| Value::Uuid(Uuid::new_v4())),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    /// Class-level attribute lookup: returns the declaration, for
    /// introspection.
    pub fn attr(&self, name: &str) -> Result<&PropertyDeclaration> {
        self.schema
            .get(name)
            .map_err(|_| ModelError::AttributeNotFound {
                model: self.name.clone(),
                attribute: name.to_string(),
            })
    }
}

/// Assembles a class schema from the parent's schema plus the class's own
/// declarations (own entries win on name overlap).
pub struct ModelClassBuilder {
    name: String,
    parent: Option<PropertySchema>,
    own: PropertySchema,
}

impl ModelClassBuilder {
    pub fn extends(mut self, parent: &ModelClass) -> Self {
        self.parent = Some(parent.schema.clone());
        self
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        declaration: PropertyDeclaration,
    ) -> Self {
        self.own = self.own.with_property(name, declaration);
        self
    }

    pub fn build(self) -> Arc<ModelClass> {
        let schema = match self.parent {
            Some(parent) => parent.merged(&self.own),
            None => self.own,
        };
        debug!(
            "assembled model class: name='{}' properties={}",
            self.name,
            schema.len()
        );
        Arc::new(ModelClass {
            name: self.name,
            schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IntegerType, StringType};

    #[test]
    fn test_child_schema_extends_parent() {
        let base = ModelClass::builder("Base")
            .property("name", declare(StringType::new()))
            .build();
        let child = ModelClass::builder("Child")
            .extends(&base)
            .property("age", declare(IntegerType::new()))
            .build();

        assert_eq!(child.schema().names(), vec!["name", "age"]);
        assert_eq!(base.schema().len(), 1);
    }

    #[test]
    fn test_class_attr_returns_declaration() {
        let class = ModelClass::builder("Thing")
            .property("name", declare(StringType::new()).required())
            .build();

        assert!(class.attr("name").unwrap().is_required());
    }

    #[test]
    fn test_class_attr_unknown_fails() {
        let class = ModelClass::builder("Thing").build();
        let err = class.attr("name").unwrap_err();
        assert!(matches!(
            err,
            ModelError::AttributeNotFound { model, attribute }
                if model == "Thing" && attribute == "name"
        ));
    }
}
