//! A shared, name-keyed registry of built classes.
//!
//! `define` builds and registers in one step. The registry can be shared
//! across threads; a name is claimed at most once.

use crate::class_builder::ClassBuilder;
use crate::class_type::ClassType;
use crate::descriptor::ClassDescriptor;
use crate::error::BuildError;
use crate::member::Name;
use crate::options::BuildOptions;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
pub struct ClassRegistry {
    options: BuildOptions,
    classes: DashMap<Name, Arc<ClassType>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            classes: DashMap::new(),
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds `descriptor` and registers the result under its name.
    ///
    /// The name is checked before building so a duplicate never runs
    /// the builder, and again on insert so concurrent definitions of the same
    /// name cannot both succeed.
    pub fn define(&self, descriptor: ClassDescriptor) -> Result<Arc<ClassType>, BuildError> {
        let name: Name = match descriptor.class_name() {
            Some(name) => Arc::from(name),
            None => return Err(BuildError::Anonymous),
        };
        if self.classes.contains_key(&name) {
            return Err(BuildError::DuplicateClass(name));
        }

        let class = ClassBuilder::new(&self.options).build(descriptor)?;

        match self.classes.entry(Arc::clone(&name)) {
            Entry::Occupied(_) => Err(BuildError::DuplicateClass(name)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&class));
                debug!(class = &*name, "registered class");
                Ok(class)
            }
        }
    }

    /// Registers an already built class under its own name.
    pub fn insert(&self, class: Arc<ClassType>) -> Result<(), BuildError> {
        let Some(name) = class.name() else {
            return Err(BuildError::Anonymous);
        };
        let name: Name = Arc::from(name);
        match self.classes.entry(Arc::clone(&name)) {
            Entry::Occupied(_) => Err(BuildError::DuplicateClass(name)),
            Entry::Vacant(slot) => {
                slot.insert(class);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<ClassType>> {
        self.classes.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.classes.iter().map(|entry| Arc::clone(entry.key())).collect();
        names.sort();
        names
    }

    /// Registered classes deriving from `name`, directly or transitively, sorted by name.
    pub fn subclasses_of(&self, name: &str) -> Vec<Name> {
        let Some(ancestor) = self.get(name) else {
            return Vec::new();
        };
        let mut names: Vec<Name> = self
            .classes
            .iter()
            .filter(|entry| entry.value().is_derived_from(&ancestor))
            .map(|entry| Arc::clone(entry.key()))
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
