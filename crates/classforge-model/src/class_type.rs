//! Produced class types.
//!
//! A `ClassType` is the constructor-equivalent value returned by the class
//! builder. It owns:
//! - the shared member table (prototype equivalent), holding only the entries
//!   declared for this class (borrowed mixin methods, then own members)
//! - the bookkeeping fields `constructor`, `superclass` and `classname`
//! - the static table, which is never consulted by instance lookups
//!
//! Lookups that miss the own table delegate to the base class. Class types
//! are immutable once built, so delegation always observes the base exactly
//! as it was when the subclass was built.

use crate::error::CallError;
use crate::instance::Instance;
use crate::member::{Arity, Constructor, Member, MemberKind, Name, StaticMember};
use crate::value::Value;
use classforge_common::{CLASSNAME, CONSTRUCTOR, SUPERCLASS};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;

static ROOT: Lazy<Arc<ClassType>> = Lazy::new(|| {
    Arc::new(ClassType {
        name: Some(Arc::from("Object")),
        base: None,
        constructor: Constructor::noop(),
        members: IndexMap::new(),
        statics: IndexMap::new(),
    })
});

#[derive(Debug)]
pub struct ClassType {
    name: Option<Name>,
    /// `None` only for the universal root class.
    base: Option<Arc<ClassType>>,
    constructor: Constructor,
    members: IndexMap<Name, Member>,
    statics: IndexMap<Name, StaticMember>,
}

impl ClassType {
    pub(crate) fn from_parts(
        name: Option<Name>,
        base: Arc<ClassType>,
        constructor: Constructor,
        members: IndexMap<Name, Member>,
        statics: IndexMap<Name, StaticMember>,
    ) -> Self {
        Self {
            name,
            base: Some(base),
            constructor,
            members,
            statics,
        }
    }

    /// The universal empty base every class without `extend` derives from.
    pub fn root() -> Arc<ClassType> {
        Arc::clone(&ROOT)
    }

    pub const fn is_root(&self) -> bool {
        self.base.is_none()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn name_handle(&self) -> Option<Name> {
        self.name.clone()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }

    /// The `superclass` back-reference.
    pub fn base(&self) -> Option<&Arc<ClassType>> {
        self.base.as_ref()
    }

    pub const fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    /// Strict ancestors, nearest first. Ends with the root class.
    pub fn ancestors(&self) -> impl Iterator<Item = &ClassType> {
        std::iter::successors(self.base.as_deref(), |class| class.base.as_deref())
    }

    /// True when `other` is a strict ancestor of this class.
    pub fn is_derived_from(&self, other: &ClassType) -> bool {
        self.ancestors().any(|ancestor| std::ptr::eq(ancestor, other))
    }

    /// True when `other` is this class or one of its ancestors.
    pub fn is_same_or_derived_from(&self, other: &ClassType) -> bool {
        std::ptr::eq(self, other) || self.is_derived_from(other)
    }

    // =========================================================================
    // Shared member table
    // =========================================================================

    pub fn own_member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    pub fn own_members(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members
            .iter()
            .map(|(name, member)| (name.as_ref(), member))
    }

    /// Looks `name` up in the own table, then along the base chain.
    pub fn resolve(&self, name: &str) -> Option<&Member> {
        self.resolve_with_owner(name).map(|(_, member)| member)
    }

    /// Like `resolve`, also returning the class whose table holds the entry.
    pub fn resolve_with_owner(&self, name: &str) -> Option<(&ClassType, &Member)> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find_map(|class| class.members.get(name).map(|member| (class, member)))
    }

    /// Every member visible through this class: own entries in declaration
    /// order, then unshadowed inherited entries, nearest ancestor first.
    pub fn resolved_members(&self) -> Vec<(&str, &Member)> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut result = Vec::new();
        for class in std::iter::once(self).chain(self.ancestors()) {
            for (name, member) in &class.members {
                if seen.insert(name.as_ref()) {
                    result.push((name.as_ref(), member));
                }
            }
        }
        result
    }

    /// Keys of the shared table: bookkeeping fields followed by own members.
    pub fn shared_keys(&self) -> Vec<&str> {
        let mut keys = vec![CONSTRUCTOR];
        if self.base.is_some() {
            keys.push(SUPERCLASS);
        }
        if self.name.is_some() {
            keys.push(CLASSNAME);
        }
        keys.extend(self.members.keys().map(|name| name.as_ref()));
        keys
    }

    // =========================================================================
    // Static table
    // =========================================================================

    pub fn static_member(&self, name: &str) -> Option<&StaticMember> {
        self.statics.get(name)
    }

    pub fn statics(&self) -> impl Iterator<Item = (&str, &StaticMember)> {
        self.statics
            .iter()
            .map(|(name, member)| (name.as_ref(), member))
    }

    pub fn call_static(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        match self.statics.get(name) {
            Some(StaticMember::Function(function)) => function.invoke(args),
            Some(StaticMember::Field(_)) => Err(CallError::NotCallable {
                class: self.name.clone(),
                member: Arc::from(name),
            }),
            None => Err(CallError::UnknownMember {
                class: self.name.clone(),
                member: Arc::from(name),
            }),
        }
    }

    // =========================================================================
    // Instantiation
    // =========================================================================

    /// Creates an instance and runs this class's constructor on it.
    ///
    /// Base constructors are not run implicitly; a constructor that needs its
    /// base initialised calls `initialize` on the base explicitly.
    pub fn instantiate(self: &Arc<Self>, args: &[Value]) -> Result<Instance, CallError> {
        let mut instance = Instance::new(Arc::clone(self));
        self.constructor.invoke(&mut instance, args)?;
        Ok(instance)
    }

    /// Runs this class's constructor on an existing instance.
    pub fn initialize(&self, this: &mut Instance, args: &[Value]) -> Result<(), CallError> {
        self.constructor.invoke(this, args)
    }

    /// Serializable snapshot of bookkeeping fields and member layout.
    pub fn layout(&self) -> ClassLayout {
        ClassLayout {
            classname: self.name.as_deref().map(str::to_string),
            superclass: self
                .base
                .as_deref()
                .map(|base| base.display_name().to_string()),
            constructor_arity: self.constructor.arity(),
            members: self
                .members
                .iter()
                .map(|(name, member)| MemberLayout {
                    name: name.to_string(),
                    kind: member.kind(),
                    arity: member.as_method().map(|method| method.arity()),
                })
                .collect(),
            statics: self
                .statics
                .iter()
                .map(|(name, member)| MemberLayout {
                    name: name.to_string(),
                    kind: member.kind(),
                    arity: member.as_function().map(|function| function.arity()),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classname: Option<String>,
    pub superclass: Option<String>,
    pub constructor_arity: Arity,
    pub members: Vec<MemberLayout>,
    pub statics: Vec<MemberLayout>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberLayout {
    pub name: String,
    pub kind: MemberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arity: Option<Arity>,
}
