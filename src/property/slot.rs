use crate::core::{ModelError, Result, TypeDescriptor, Value};
use std::fmt;
use std::sync::Arc;

/// Zero-argument default producer, invoked once per instantiation so
/// every instance gets its own value.
pub type DefaultProducer = Arc<dyn Fn() -> Value + Send + Sync>;

/// Default for a declared property: absent, a fixed value, or a producer
/// evaluated at each instantiation.
#[derive(Clone)]
pub enum PropertyDefault {
    None,
    Fixed(Value),
    Generated(DefaultProducer),
}

impl PropertyDefault {
    pub fn produce(&self) -> Value {
        match self {
            Self::None => Value::Null,
            Self::Fixed(value) => value.clone(),
            Self::Generated(producer) => producer(),
        }
    }
}

impl fmt::Debug for PropertyDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Fixed(value) => write!(f, "Fixed({:?})", value),
            Self::Generated(_) => write!(f, "Generated(..)"),
        }
    }
}

/// Capability set every property slot implementation must provide.
///
/// `Property` is the standard implementation; custom kinds plug in
/// through a slot factory on the declaration.
pub trait PropertySlot: fmt::Debug {
    fn value(&self) -> &Value;

    /// Validating setter honoring the read-only flag.
    fn set_value(&mut self, value: Value) -> Result<()>;

    /// Validating setter that bypasses the read-only check. Used for the
    /// initial assignment at construction time only.
    fn set_value_force(&mut self, value: Value) -> Result<()>;

    fn is_required(&self) -> bool;

    fn is_read_only(&self) -> bool;

    /// Name of the expected type, for error enrichment.
    fn type_name(&self) -> &'static str;
}

/// One declared, typed slot bound to a descriptor. Created once per
/// instance per declared name, never shared across instances.
#[derive(Debug)]
pub struct Property {
    descriptor: Arc<dyn TypeDescriptor>,
    value: Value,
    required: bool,
    read_only: bool,
}

impl Property {
    pub fn new(
        descriptor: Arc<dyn TypeDescriptor>,
        default: &PropertyDefault,
        required: bool,
        read_only: bool,
        initial: Value,
    ) -> Result<Self> {
        let effective = if initial.is_null() {
            default.produce()
        } else {
            initial
        };
        let mut property = Self {
            descriptor,
            value: Value::Null,
            required,
            read_only,
        };
        property.set_value_force(effective)?;
        Ok(property)
    }

    pub fn descriptor(&self) -> &Arc<dyn TypeDescriptor> {
        &self.descriptor
    }

    fn checked(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            if self.required {
                return Err(ModelError::PropertyRequired);
            }
            return Ok(value);
        }
        if self.descriptor.validate(&value) {
            Ok(value)
        } else {
            Err(ModelError::InvalidType {
                value,
                property_type: self.descriptor.name(),
            })
        }
    }
}

impl PropertySlot for Property {
    fn value(&self) -> &Value {
        &self.value
    }

    fn set_value(&mut self, value: Value) -> Result<()> {
        if self.read_only {
            return Err(ModelError::ReadOnlyProperty);
        }
        self.set_value_force(value)
    }

    fn set_value_force(&mut self, value: Value) -> Result<()> {
        self.value = self.checked(value)?;
        Ok(())
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn type_name(&self) -> &'static str {
        self.descriptor.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IntegerType, StringType};

    fn string_property(required: bool, read_only: bool, initial: Value) -> Result<Property> {
        Property::new(
            Arc::new(StringType::new()),
            &PropertyDefault::None,
            required,
            read_only,
            initial,
        )
    }

    #[test]
    fn test_required_without_value_fails() {
        let err = string_property(true, false, Value::Null).unwrap_err();
        assert!(matches!(err, ModelError::PropertyRequired));
    }

    #[test]
    fn test_optional_without_value_stays_null() {
        let property = string_property(false, false, Value::Null).unwrap();
        assert!(property.value().is_null());
    }

    #[test]
    fn test_invalid_type_rejected() {
        let err = string_property(false, false, Value::Integer(1)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidType {
                property_type: "TEXT",
                ..
            }
        ));
    }

    #[test]
    fn test_read_only_blocks_second_write_only() {
        let mut property = string_property(false, true, Value::from("initial")).unwrap();
        assert_eq!(property.value(), &Value::from("initial"));

        let err = property.set_value(Value::from("changed")).unwrap_err();
        assert!(matches!(err, ModelError::ReadOnlyProperty));
        assert_eq!(property.value(), &Value::from("initial"));
    }

    #[test]
    fn test_force_path_still_validates() {
        let mut property = string_property(true, true, Value::from("initial")).unwrap();

        let err = property.set_value_force(Value::Integer(5)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { .. }));
        assert_eq!(property.value(), &Value::from("initial"));

        let err = property.set_value_force(Value::Null).unwrap_err();
        assert!(matches!(err, ModelError::PropertyRequired));
        assert_eq!(property.value(), &Value::from("initial"));
    }

    #[test]
    fn test_fixed_default_applies_when_value_absent() {
        let property = Property::new(
            Arc::new(IntegerType::new()),
            &PropertyDefault::Fixed(Value::Integer(10)),
            false,
            false,
            Value::Null,
        )
        .unwrap();
        assert_eq!(property.value(), &Value::Integer(10));
    }

    #[test]
    fn test_supplied_value_wins_over_default() {
        let property = Property::new(
            Arc::new(IntegerType::new()),
            &PropertyDefault::Fixed(Value::Integer(10)),
            false,
            false,
            Value::Integer(3),
        )
        .unwrap();
        assert_eq!(property.value(), &Value::Integer(3));
    }
}
