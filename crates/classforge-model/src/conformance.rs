//! Capability conformance ("provides") checks.
//!
//! A class provides a source class when, for every method visible on the
//! source (declared or inherited), it resolves a method of the same name with
//! the same declared arity. Data members of the source are ignored and
//! nothing is copied.

use crate::class_type::ClassType;
use crate::error::{BuildError, ProvidedMember};
use crate::member::{Arity, Member};
use classforge_common::is_reserved;
use std::sync::Arc;
use tracing::{debug, trace};

/// The first member of a source that a class fails to provide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityGap<'a> {
    pub member: &'a str,
    pub expected_arity: Arity,
    pub found: ProvidedMember,
}

/// Finds the first method of `source` that `class` does not provide.
pub fn find_capability_gap<'a>(
    class: &ClassType,
    source: &'a ClassType,
) -> Option<CapabilityGap<'a>> {
    for (name, member) in source.resolved_members() {
        let Member::Method(required) = member else {
            continue;
        };
        if is_reserved(name) {
            continue;
        }
        let found = match class.resolve(name) {
            Some(Member::Method(provided)) if provided.arity() == required.arity() => {
                trace!(member = name, arity = required.arity(), "capability satisfied");
                continue;
            }
            Some(Member::Method(provided)) => ProvidedMember::Arity(provided.arity()),
            Some(Member::Field(_)) => ProvidedMember::NotCallable,
            None => ProvidedMember::Missing,
        };
        return Some(CapabilityGap {
            member: name,
            expected_arity: required.arity(),
            found,
        });
    }
    None
}

/// Non-failing form of the capability check.
pub fn conforms_to(class: &ClassType, source: &ClassType) -> bool {
    find_capability_gap(class, source).is_none()
}

/// Checks `class` against every source in order, failing on the first gap.
pub fn check_capabilities<'a>(
    class: &ClassType,
    sources: impl IntoIterator<Item = &'a Arc<ClassType>>,
) -> Result<(), BuildError> {
    for source in sources {
        if let Some(gap) = find_capability_gap(class, source) {
            debug!(
                class = class.display_name(),
                source = source.display_name(),
                member = gap.member,
                expected_arity = gap.expected_arity,
                found = ?gap.found,
                "capability mismatch"
            );
            return Err(BuildError::CapabilityMismatch {
                class: class.name_handle(),
                source_class: source.name_handle(),
                member: Arc::from(gap.member),
                expected_arity: gap.expected_arity,
                found: gap.found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/conformance_tests.rs"]
mod tests;
