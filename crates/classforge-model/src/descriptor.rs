//! Declarative class descriptors.
//!
//! A descriptor is read once by the class builder and then dropped. Every
//! field is optional:
//!
//! ```ignore
//! let circle = ClassDescriptor::new()
//!     .name("Circle")
//!     .extend(&shape)
//!     .construct(1, |this, args| {
//!         this.set("r", expect_number(args, 0)?);
//!         Ok(())
//!     })
//!     .method("area", 0, |this, _| {
//!         let r = this.get_number("r").unwrap_or(0.0);
//!         Ok(Value::Number(PI * r * r))
//!     })
//!     .borrow(&colorable)
//!     .provide(&colorable);
//! ```

use crate::class_type::ClassType;
use crate::error::CallError;
use crate::instance::Instance;
use crate::member::{Arity, Constructor, Member, Method, Name, StaticFunction, StaticMember};
use crate::value::Value;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::Arc;

pub type SourceList = SmallVec<[Arc<ClassType>; 4]>;

#[derive(Clone, Debug, Default)]
pub struct ClassDescriptor {
    pub(crate) name: Option<Name>,
    pub(crate) extend: Option<Arc<ClassType>>,
    pub(crate) construct: Option<Constructor>,
    pub(crate) methods: IndexMap<Name, Member>,
    pub(crate) statics: IndexMap<Name, StaticMember>,
    pub(crate) borrows: SourceList,
    pub(crate) provides: SourceList,
}

impl ClassDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<Name>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn extend(mut self, base: &Arc<ClassType>) -> Self {
        self.extend = Some(Arc::clone(base));
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.construct = Some(constructor);
        self
    }

    pub fn construct<F>(self, arity: Arity, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.constructor(Constructor::new(arity, body))
    }

    /// Adds or replaces an instance member. Later declarations win.
    pub fn member(mut self, name: impl Into<Name>, member: Member) -> Self {
        self.methods.insert(name.into(), member);
        self
    }

    pub fn method<F>(self, name: impl Into<Name>, arity: Arity, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.member(name, Member::Method(Method::new(arity, body)))
    }

    /// A shared data member, visible to every instance until shadowed.
    pub fn field(self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.member(name, Member::Field(value.into()))
    }

    pub fn static_member(mut self, name: impl Into<Name>, member: StaticMember) -> Self {
        self.statics.insert(name.into(), member);
        self
    }

    pub fn static_method<F>(self, name: impl Into<Name>, arity: Arity, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.static_member(name, StaticMember::Function(StaticFunction::new(arity, body)))
    }

    pub fn static_field(self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.static_member(name, StaticMember::Field(value.into()))
    }

    /// Borrows the methods of `source`. Sources apply in the order given.
    pub fn borrow(mut self, source: &Arc<ClassType>) -> Self {
        self.borrows.push(Arc::clone(source));
        self
    }

    pub fn borrows<'a>(mut self, sources: impl IntoIterator<Item = &'a Arc<ClassType>>) -> Self {
        self.borrows.extend(sources.into_iter().map(Arc::clone));
        self
    }

    /// Asserts that the built class provides the methods of `source`.
    pub fn provide(mut self, source: &Arc<ClassType>) -> Self {
        self.provides.push(Arc::clone(source));
        self
    }

    pub fn provides<'a>(
        mut self,
        sources: impl IntoIterator<Item = &'a Arc<ClassType>>,
    ) -> Self {
        self.provides.extend(sources.into_iter().map(Arc::clone));
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
