use crate::class_type::ClassType;
use crate::error::CallError;
use crate::member::{Member, Name};
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An object created from a class type.
///
/// Own fields live on the instance. Methods and shared fields are looked up
/// through the class; writing never touches the class.
#[derive(Clone)]
pub struct Instance {
    class: Arc<ClassType>,
    fields: IndexMap<Name, Value>,
}

impl Instance {
    pub(crate) fn new(class: Arc<ClassType>) -> Self {
        Self {
            class,
            fields: IndexMap::new(),
        }
    }

    pub fn class(&self) -> &Arc<ClassType> {
        &self.class
    }

    /// Own field first, then a shared field visible through the class.
    pub fn get(&self, name: &str) -> Option<&Value> {
        if let Some(value) = self.fields.get(name) {
            return Some(value);
        }
        self.class.resolve(name).and_then(Member::as_field)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    pub fn own_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        if let Some(slot) = self.fields.get_mut(name) {
            *slot = value;
        } else {
            self.fields.insert(Arc::from(name), value);
        }
    }

    /// Calls the method `name` with this instance as `this`.
    ///
    /// An own field named `name` shadows any method of the same name.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        if self.fields.contains_key(name) {
            return Err(self.not_callable(name));
        }
        let method = match self.class.resolve(name) {
            Some(Member::Method(method)) => method.clone(),
            Some(Member::Field(_)) => return Err(self.not_callable(name)),
            None => {
                return Err(CallError::UnknownMember {
                    class: self.class.name_handle(),
                    member: Arc::from(name),
                });
            }
        };
        method.invoke(self, args)
    }

    /// True when `call(name, ..)` would reach a method.
    pub fn responds_to(&self, name: &str) -> bool {
        !self.fields.contains_key(name)
            && self.class.resolve(name).is_some_and(Member::is_callable)
    }

    /// The `instanceof` relation: `class` is this instance's class or an ancestor.
    pub fn is_instance_of(&self, class: &ClassType) -> bool {
        self.class.is_same_or_derived_from(class)
    }

    fn not_callable(&self, name: &str) -> CallError {
        CallError::NotCallable {
            class: self.class.name_handle(),
            member: Arc::from(name),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.display_name())
            .field("fields", &self.fields)
            .finish()
    }
}
