use crate::core::{ModelError, Result, Value};
use crate::property::declaration::PropertyDeclaration;
use crate::property::slot::PropertySlot;
use log::warn;
use std::sync::Arc;

/// Read-only view over a name -> property mapping. Shared by the
/// class-level schema and the per-instance manager.
pub trait PropertyMapping {
    /// Mapping kind used in diagnostics.
    fn kind_name(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool;

    fn names(&self) -> Vec<&str>;

    fn as_schema(&self) -> Option<&PropertySchema> {
        None
    }
}

/// Immutable, declaration-order-preserving mapping from property name to
/// its declaration. Built once at class-definition time and shared
/// read-only by every instance of that class.
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    entries: Vec<(String, Arc<PropertyDeclaration>)>,
}

impl PropertySchema {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a declaration; redeclaring a name replaces the earlier entry
    /// in place.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        declaration: PropertyDeclaration,
    ) -> Self {
        self.insert(name.into(), Arc::new(declaration));
        self
    }

    fn insert(&mut self, name: String, declaration: Arc<PropertyDeclaration>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n.as_str() == name) {
            entry.1 = declaration;
        } else {
            self.entries.push((name, declaration));
        }
    }

    pub fn get(&self, name: &str) -> Result<&PropertyDeclaration> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, declaration)| declaration.as_ref())
            .ok_or_else(|| ModelError::PropertyNotFound(name.to_string()))
    }

    /// Combine with another mapping; entries of `other` win on name
    /// overlap. Only schema operands are accepted.
    pub fn merge(&self, other: &dyn PropertyMapping) -> Result<Self> {
        let Some(schema) = other.as_schema() else {
            return Err(ModelError::IncompatibleMerge {
                left: self.kind_name(),
                right: other.kind_name(),
            });
        };
        Ok(self.merged(schema))
    }

    pub(crate) fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (name, declaration) in &other.entries {
            if let Ok(existing) = merged.get(name) {
                let parent_type = existing.descriptor().name();
                let child_type = declaration.descriptor().name();
                if parent_type != child_type {
                    warn!(
                        "schema override changes property type: property='{}' parent='{}' child='{}'",
                        name, parent_type, child_type
                    );
                }
            }
            merged.insert(name.clone(), declaration.clone());
        }
        merged
    }

    pub fn instantiate(&self, name: &str, value: Value) -> Result<Box<dyn PropertySlot>> {
        self.get(name)?.instantiate(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyDeclaration)> {
        self.entries
            .iter()
            .map(|(name, declaration)| (name.as_str(), declaration.as_ref()))
    }
}

impl PropertyMapping for PropertySchema {
    fn kind_name(&self) -> &'static str {
        "PropertySchema"
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n.as_str() == name)
    }

    fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn as_schema(&self) -> Option<&PropertySchema> {
        Some(self)
    }
}
