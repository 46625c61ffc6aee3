use crate::core::{ModelError, Result, Value};
use crate::property::schema::{PropertyMapping, PropertySchema};
use crate::property::slot::PropertySlot;
use std::collections::BTreeMap;

/// Keyword-style constructor arguments: name -> value pairs consumed
/// while a model instance binds its schema.
#[derive(Debug, Clone, Default)]
pub struct Kwargs {
    values: BTreeMap<String, Value>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn take(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    fn into_names(self) -> Vec<String> {
        self.values.into_keys().collect()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Kwargs {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Per-instance binding of a schema to live slots: one freshly
/// instantiated slot per declared name. Owned exclusively by its model
/// instance.
#[derive(Debug)]
pub struct PropertyManager {
    properties: BTreeMap<String, Box<dyn PropertySlot>>,
}

impl PropertyManager {
    /// Instantiate every declaration in `schema`, consuming matching
    /// kwargs (declared default when absent). Leftover kwargs are a
    /// construction error.
    pub fn new(schema: &PropertySchema, mut kwargs: Kwargs) -> Result<Self> {
        let mut properties = BTreeMap::new();
        for (name, _) in schema.iter() {
            let supplied = kwargs.take(name).unwrap_or(Value::Null);
            properties.insert(name.to_string(), schema.instantiate(name, supplied)?);
        }
        if !kwargs.is_empty() {
            return Err(ModelError::UnknownParameters(kwargs.into_names()));
        }
        Ok(Self { properties })
    }

    pub fn get(&self, name: &str) -> Option<&dyn PropertySlot> {
        self.properties.get(name).map(|slot| slot.as_ref())
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn PropertySlot>> {
        self.properties.get_mut(name)
    }
}

impl PropertyMapping for PropertyManager {
    fn kind_name(&self) -> &'static str {
        "PropertyManager"
    }

    fn len(&self) -> usize {
        self.properties.len()
    }

    fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    fn names(&self) -> Vec<&str> {
        self.properties.keys().map(|name| name.as_str()).collect()
    }
}
