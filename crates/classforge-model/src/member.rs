//! Members of shared and static tables.
//!
//! Callables carry an explicit declared arity. Rust closures do not expose
//! their parameter count, and capability checks compare arities, so every
//! callable is registered together with the number of parameters it declares.

use crate::error::CallError;
use crate::instance::Instance;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Interned-by-`Arc` member or class name.
pub type Name = Arc<str>;

/// Declared number of parameters of a callable.
pub type Arity = usize;

pub type MethodFn = dyn Fn(&mut Instance, &[Value]) -> Result<Value, CallError> + Send + Sync;
pub type StaticFn = dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync;
pub type ConstructorFn = dyn Fn(&mut Instance, &[Value]) -> Result<(), CallError> + Send + Sync;

/// An instance method: receives the instance as `this`.
#[derive(Clone)]
pub struct Method {
    arity: Arity,
    body: Arc<MethodFn>,
}

impl Method {
    pub fn new<F>(arity: Arity, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    pub const fn arity(&self) -> Arity {
        self.arity
    }

    pub fn invoke(&self, this: &mut Instance, args: &[Value]) -> Result<Value, CallError> {
        (self.body)(this, args)
    }

    /// True when both handles share the same function body.
    pub fn same_body(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("arity", &self.arity).finish()
    }
}

/// A function attached to the class itself. Has no `this`.
#[derive(Clone)]
pub struct StaticFunction {
    arity: Arity,
    body: Arc<StaticFn>,
}

impl StaticFunction {
    pub fn new<F>(arity: Arity, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    pub const fn arity(&self) -> Arity {
        self.arity
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Value, CallError> {
        (self.body)(args)
    }
}

impl fmt::Debug for StaticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticFunction")
            .field("arity", &self.arity)
            .finish()
    }
}

/// Runs when an instance is created. The default does nothing.
#[derive(Clone)]
pub struct Constructor {
    arity: Arity,
    body: Option<Arc<ConstructorFn>>,
}

impl Constructor {
    pub fn new<F>(arity: Arity, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<(), CallError> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Some(Arc::new(body)),
        }
    }

    pub const fn noop() -> Self {
        Self {
            arity: 0,
            body: None,
        }
    }

    pub const fn arity(&self) -> Arity {
        self.arity
    }

    pub const fn is_noop(&self) -> bool {
        self.body.is_none()
    }

    pub fn invoke(&self, this: &mut Instance, args: &[Value]) -> Result<(), CallError> {
        match &self.body {
            Some(body) => body(this, args),
            None => Ok(()),
        }
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("arity", &self.arity)
            .field("noop", &self.is_noop())
            .finish()
    }
}

/// An entry of a shared member table.
#[derive(Clone, Debug)]
pub enum Member {
    Method(Method),
    Field(Value),
}

impl Member {
    pub const fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            Member::Field(_) => None,
        }
    }

    pub const fn as_field(&self) -> Option<&Value> {
        match self {
            Member::Field(value) => Some(value),
            Member::Method(_) => None,
        }
    }

    pub const fn is_callable(&self) -> bool {
        matches!(self, Member::Method(_))
    }

    pub const fn kind(&self) -> MemberKind {
        match self {
            Member::Method(_) => MemberKind::Method,
            Member::Field(_) => MemberKind::Field,
        }
    }
}

/// An entry of a class's static table.
#[derive(Clone, Debug)]
pub enum StaticMember {
    Function(StaticFunction),
    Field(Value),
}

impl StaticMember {
    pub const fn as_function(&self) -> Option<&StaticFunction> {
        match self {
            StaticMember::Function(function) => Some(function),
            StaticMember::Field(_) => None,
        }
    }

    pub const fn as_field(&self) -> Option<&Value> {
        match self {
            StaticMember::Field(value) => Some(value),
            StaticMember::Function(_) => None,
        }
    }

    pub const fn kind(&self) -> MemberKind {
        match self {
            StaticMember::Function(_) => MemberKind::Method,
            StaticMember::Field(_) => MemberKind::Field,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Method,
    Field,
}
