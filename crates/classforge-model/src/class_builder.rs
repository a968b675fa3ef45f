//! Class Type Construction
//!
//! This module turns a `ClassDescriptor` into an immutable `ClassType`.
//!
//! Responsibilities:
//! - Resolve the base class (the universal root when none is given)
//! - Borrow mixin methods, then apply own instance members on top
//! - Record the bookkeeping fields (constructor, superclass, classname)
//! - Verify the declared capabilities before anything is returned
//! - Attach static members to the class only
//!
//! Resolution order for a member name is: base chain < mixins (later sources
//! win) < own instance members. Inherited entries are never copied into the
//! new table; lookups that miss it delegate to the base.

use crate::class_type::ClassType;
use crate::conformance::check_capabilities;
use crate::descriptor::ClassDescriptor;
use crate::error::BuildError;
use crate::member::{Member, Name};
use crate::options::BuildOptions;
use classforge_common::is_reserved;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, debug_span, trace};

/// Builder for class types.
///
/// This is a pure computation: it reads the descriptor and its sources and
/// produces a new class, never mutating the base, mixins or capability
/// sources.
pub struct ClassBuilder<'a> {
    options: &'a BuildOptions,
}

impl<'a> ClassBuilder<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self { options }
    }

    /// Builds the class described by `descriptor`.
    ///
    /// # Errors
    /// - `BuildError::ReservedMember` if an instance member uses a bookkeeping
    ///   name and `reject_reserved_members` is on
    /// - `BuildError::CapabilityMismatch` for the first required method the
    ///   class does not provide
    pub fn build(&self, descriptor: ClassDescriptor) -> Result<Arc<ClassType>, BuildError> {
        let ClassDescriptor {
            name,
            extend,
            construct,
            methods,
            statics,
            borrows,
            provides,
        } = descriptor;

        let _span = debug_span!("build_class", class = name.as_deref().unwrap_or("<anonymous>"))
            .entered();

        // 1. Base, defaulting to the universal root.
        let base = extend.unwrap_or_else(ClassType::root);

        // 2. Fresh table: nothing inherited is copied forward.
        let mut table: IndexMap<Name, Member> = IndexMap::new();

        // 3. Mixins, in order; later sources overwrite earlier ones.
        for source in &borrows {
            self.borrow_methods(&mut table, source);
        }

        // 4. Own instance members overwrite mixin entries.
        for (member_name, member) in methods {
            if is_reserved(&member_name) {
                if self.options.reject_reserved_members {
                    return Err(BuildError::ReservedMember {
                        class: name,
                        member: member_name,
                    });
                }
                trace!(member = &*member_name, "dropping reserved member");
                continue;
            }
            table.insert(member_name, member);
        }

        // 5-8. Bookkeeping and statics are fields of the class itself.
        let class = ClassType::from_parts(
            name,
            base,
            construct.unwrap_or_default(),
            table,
            statics,
        );

        // 6. Nothing escapes unless every capability holds.
        check_capabilities(&class, &provides)?;

        debug!(
            members = class.own_members().count(),
            statics = class.statics().count(),
            base = class.base().map_or("<none>", |base| base.display_name()),
            "built class"
        );
        Ok(Arc::new(class))
    }

    /// Copies every method visible on `source` into `table`. Data members are
    /// skipped.
    fn borrow_methods(&self, table: &mut IndexMap<Name, Member>, source: &ClassType) {
        let visible: Vec<(&str, &Member)> = if self.options.borrow_inherited {
            source.resolved_members()
        } else {
            source.own_members().collect()
        };

        for (member_name, member) in visible {
            if !member.is_callable() || is_reserved(member_name) {
                continue;
            }
            trace!(
                source = source.display_name(),
                member = member_name,
                "borrowing method"
            );
            table.insert(Arc::from(member_name), member.clone());
        }
    }
}

/// Builds `descriptor` with default options.
pub fn define_class(descriptor: ClassDescriptor) -> Result<Arc<ClassType>, BuildError> {
    ClassBuilder::new(&BuildOptions::default()).build(descriptor)
}

#[cfg(test)]
#[path = "tests/class_builder_tests.rs"]
mod tests;
