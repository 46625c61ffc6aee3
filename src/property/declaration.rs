use crate::core::{Result, TypeDescriptor, Value};
use crate::property::slot::{Property, PropertyDefault, PropertySlot};
use std::fmt;
use std::sync::Arc;

/// Constructor for a slot implementation, invoked once per model
/// instance. The standard factory builds a `Property`; custom property
/// kinds supply their own.
pub type SlotFactory =
    Arc<dyn Fn(&PropertyDeclaration, Value) -> Result<Box<dyn PropertySlot>> + Send + Sync>;

/// A property factory captured at class-definition time: the descriptor
/// plus construction options. Shared read-only by every instance of the
/// declaring class.
#[derive(Clone)]
pub struct PropertyDeclaration {
    descriptor: Arc<dyn TypeDescriptor>,
    default: PropertyDefault,
    required: bool,
    read_only: bool,
    factory: SlotFactory,
}

impl PropertyDeclaration {
    pub fn descriptor(&self) -> &Arc<dyn TypeDescriptor> {
        &self.descriptor
    }

    pub fn default(&self) -> &PropertyDefault {
        &self.default
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = PropertyDefault::Fixed(value.into());
        self
    }

    /// Default produced anew for every instance, e.g. a fresh identifier.
    pub fn default_with(mut self, producer: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default = PropertyDefault::Generated(Arc::new(producer));
        self
    }

    /// Replace the slot implementation used for this property.
    pub fn slot_factory(mut self, factory: SlotFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Build a fresh slot seeded with `value`, falling back to the
    /// declared default when `value` is null.
    pub fn instantiate(&self, value: Value) -> Result<Box<dyn PropertySlot>> {
        (self.factory)(self, value)
    }
}

impl fmt::Debug for PropertyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDeclaration")
            .field("descriptor", &self.descriptor)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// Declare a typed property for a model class.
///
/// ```
/// use modelcore::{declare, StringType};
///
/// let name = declare(StringType::new().min_length(1)).required();
/// assert!(name.is_required());
/// assert!(!name.is_read_only());
/// ```
pub fn declare(descriptor: impl TypeDescriptor + 'static) -> PropertyDeclaration {
    PropertyDeclaration {
        descriptor: Arc::new(descriptor),
        default: PropertyDefault::None,
        required: false,
        read_only: false,
        factory: Arc::new(|declaration, value| {
            let property = Property::new(
                declaration.descriptor.clone(),
                &declaration.default,
                declaration.required,
                declaration.read_only,
                value,
            )?;
            Ok(Box::new(property) as Box<dyn PropertySlot>)
        }),
    }
}
