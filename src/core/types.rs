use crate::core::{ModelError, Result, Value};
use std::fmt;
use uuid::Uuid;

/// Validator for one semantic value type, plus conversion to and from a
/// plain (JSON) representation. Descriptors are pure: validation depends
/// only on construction parameters and the input value.
pub trait TypeDescriptor: fmt::Debug + Send + Sync {
    /// Type name used in diagnostics.
    fn name(&self) -> &'static str;

    fn validate(&self, value: &Value) -> bool;

    /// Render a valid value in its plain form. Invalid values are never
    /// rendered.
    fn to_plain(&self, value: &Value) -> Result<serde_json::Value>;

    /// Rebuild a value from its plain form, re-validating the result.
    fn from_plain(&self, plain: serde_json::Value) -> Result<Value>;
}

fn mismatch(property_type: &'static str, value: &Value) -> ModelError {
    ModelError::InvalidType {
        value: value.clone(),
        property_type,
    }
}

#[derive(Debug, Clone)]
pub struct StringType {
    min_length: usize,
    max_length: usize,
}

impl StringType {
    pub fn new() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
        }
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for StringType {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDescriptor for StringType {
    fn name(&self) -> &'static str {
        "TEXT"
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Text(s) => {
                // Bounds are over characters, not bytes.
                let len = s.chars().count();
                len >= self.min_length && len <= self.max_length
            }
            _ => false,
        }
    }

    fn to_plain(&self, value: &Value) -> Result<serde_json::Value> {
        match value {
            Value::Text(s) if self.validate(value) => Ok(serde_json::Value::String(s.clone())),
            _ => Err(mismatch(self.name(), value)),
        }
    }

    fn from_plain(&self, plain: serde_json::Value) -> Result<Value> {
        match plain {
            serde_json::Value::String(s) => {
                let value = Value::Text(s);
                if self.validate(&value) {
                    Ok(value)
                } else {
                    Err(mismatch(self.name(), &value))
                }
            }
            other => Err(mismatch(self.name(), &Value::Text(other.to_string()))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegerType {
    min_value: i64,
    max_value: i64,
}

impl IntegerType {
    pub fn new() -> Self {
        Self {
            min_value: i64::MIN,
            max_value: i64::MAX,
        }
    }

    pub fn min_value(mut self, min_value: i64) -> Self {
        self.min_value = min_value;
        self
    }

    pub fn max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }
}

impl Default for IntegerType {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDescriptor for IntegerType {
    fn name(&self) -> &'static str {
        "INTEGER"
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Integer(i) => *i >= self.min_value && *i <= self.max_value,
            _ => false,
        }
    }

    fn to_plain(&self, value: &Value) -> Result<serde_json::Value> {
        match value {
            Value::Integer(i) if self.validate(value) => Ok(serde_json::Value::from(*i)),
            _ => Err(mismatch(self.name(), value)),
        }
    }

    fn from_plain(&self, plain: serde_json::Value) -> Result<Value> {
        match plain {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => {
                    let value = Value::Integer(i);
                    if self.validate(&value) {
                        Ok(value)
                    } else {
                        Err(mismatch(self.name(), &value))
                    }
                }
                None => Err(mismatch(self.name(), &Value::Text(n.to_string()))),
            },
            other => Err(mismatch(self.name(), &Value::Text(other.to_string()))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidType;

impl UuidType {
    pub fn new() -> Self {
        Self
    }
}

impl TypeDescriptor for UuidType {
    fn name(&self) -> &'static str {
        "UUID"
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Uuid(_))
    }

    fn to_plain(&self, value: &Value) -> Result<serde_json::Value> {
        match value {
            Value::Uuid(u) => Ok(serde_json::Value::String(u.to_string())),
            _ => Err(mismatch(self.name(), value)),
        }
    }

    fn from_plain(&self, plain: serde_json::Value) -> Result<Value> {
        match plain {
            serde_json::Value::String(s) => match Uuid::parse_str(&s) {
                Ok(u) => Ok(Value::Uuid(u)),
                Err(_) => Err(mismatch(self.name(), &Value::Text(s))),
            },
            other => Err(mismatch(self.name(), &Value::Text(other.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_bounds() {
        let ty = StringType::new().min_length(5).max_length(8);

        assert!(ty.validate(&Value::from("12345")));
        assert!(ty.validate(&Value::from("12345678")));
        assert!(!ty.validate(&Value::from("1234")));
        assert!(!ty.validate(&Value::from("123456789")));
        assert!(!ty.validate(&Value::Integer(12345)));
    }

    #[test]
    fn test_string_unbounded_by_default() {
        let ty = StringType::new();
        assert!(ty.validate(&Value::from("")));
        assert!(ty.validate(&Value::from("any length works")));
    }

    #[test]
    fn test_integer_bounds() {
        let ty = IntegerType::new().min_value(0).max_value(55);

        assert!(ty.validate(&Value::Integer(0)));
        assert!(ty.validate(&Value::Integer(55)));
        assert!(!ty.validate(&Value::Integer(-1)));
        assert!(!ty.validate(&Value::Integer(56)));
        assert!(!ty.validate(&Value::from("42")));
    }

    #[test]
    fn test_integer_plain_round_trip() {
        let ty = IntegerType::new();
        let plain = ty.to_plain(&Value::Integer(42)).unwrap();
        assert_eq!(ty.from_plain(plain).unwrap(), Value::Integer(42));
    }

    #[test]
    fn test_uuid_plain_round_trip() {
        let ty = UuidType::new();
        let id = Uuid::new_v4();

        let plain = ty.to_plain(&Value::Uuid(id)).unwrap();
        assert_eq!(plain, serde_json::Value::String(id.to_string()));
        assert_eq!(ty.from_plain(plain).unwrap(), Value::Uuid(id));
    }

    #[test]
    fn test_uuid_rejects_malformed_text() {
        let ty = UuidType::new();

        let err = ty
            .from_plain(serde_json::Value::String("not-a-uuid".into()))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { .. }));

        // The string form is not the identifier value itself.
        assert!(!ty.validate(&Value::from(Uuid::new_v4().to_string().as_str())));
    }

    #[test]
    fn test_to_plain_refuses_invalid_values() {
        let ty = StringType::new().min_length(5);
        let err = ty.to_plain(&Value::from("abc")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { .. }));
    }
}
