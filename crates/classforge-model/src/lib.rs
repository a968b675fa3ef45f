//! Runtime class definitions.
//!
//! Classes are described declaratively with a `ClassDescriptor` and turned
//! into immutable `ClassType`s by the `ClassBuilder`:
//!
//! - **Inheritance**: a single base class, consulted by delegation
//! - **Mixins**: methods borrowed from other classes, in order
//! - **Capabilities**: "provides" assertions checked by name and arity
//! - **Statics**: members of the class itself, invisible to instances
mod class_builder;
mod class_type;
pub mod conformance;
mod descriptor;
mod error;
mod instance;
pub mod member;
mod options;
pub mod registry;
pub mod value;

pub use class_builder::{ClassBuilder, define_class};
pub use class_type::{ClassLayout, ClassType, MemberLayout};
pub use conformance::{CapabilityGap, check_capabilities, conforms_to, find_capability_gap};
pub use descriptor::{ClassDescriptor, SourceList};
pub use error::{BuildError, CallError, ProvidedMember};
pub use instance::Instance;
pub use member::{
    Arity, Constructor, Member, MemberKind, Method, Name, StaticFunction, StaticMember,
};
pub use options::BuildOptions;
pub use registry::ClassRegistry;
pub use value::{Value, arg, expect_number, expect_str};
