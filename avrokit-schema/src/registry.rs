//! Name registry.
//!
//! Maps fully-qualified names to the named types defined so far in one
//! parse. A registry is created per parse and dropped with it.

use crate::schema::{Name, NamedRef, NamedSchema, RecordSchema};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use thiserror::Error;

/// A fully-qualified name was defined twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate definition of named type '{fullname}'")]
pub struct DuplicateName {
    /// The name that was already taken.
    pub fullname: String,
}

#[derive(Debug)]
enum Entry {
    /// Record whose fields are still being parsed.
    Pending(Name, Weak<RecordSchema>),
    /// Complete definition.
    Defined(NamedSchema),
}

/// Table of named types visible to the remainder of a parse.
#[derive(Debug, Default)]
pub struct NameRegistry {
    entries: HashMap<String, Entry>,
}

impl NameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Defines a complete named type.
    ///
    /// # Errors
    /// Returns `DuplicateName` if the fully-qualified name is already taken.
    pub fn define(&mut self, named: NamedSchema) -> Result<(), DuplicateName> {
        let fullname = named.name().fullname();
        self.ensure_free(&fullname)?;
        self.entries.insert(fullname, Entry::Defined(named));
        Ok(())
    }

    /// Declares a record before its fields are parsed, so that the fields
    /// may refer to it.
    pub(crate) fn declare_record(
        &mut self,
        name: &Name,
        record: Weak<RecordSchema>,
    ) -> Result<(), DuplicateName> {
        let fullname = name.fullname();
        self.ensure_free(&fullname)?;
        self.entries
            .insert(fullname, Entry::Pending(name.clone(), record));
        Ok(())
    }

    /// Replaces a declared record with its finished definition.
    pub(crate) fn complete_record(&mut self, record: &Arc<RecordSchema>) {
        self.entries.insert(
            record.name.fullname(),
            Entry::Defined(NamedSchema::Record(Arc::clone(record))),
        );
    }

    /// Resolves a fully-qualified name.
    ///
    /// A record that is still being parsed resolves to a recursive
    /// reference.
    #[must_use]
    pub fn resolve(&self, fullname: &str) -> Option<NamedRef> {
        self.entries.get(fullname).map(|entry| match entry {
            Entry::Pending(name, record) => NamedRef::recursive(name.clone(), record.clone()),
            Entry::Defined(named) => NamedRef::to(named),
        })
    }

    /// Returns true if the name is defined or declared.
    #[must_use]
    pub fn contains(&self, fullname: &str) -> bool {
        self.entries.contains_key(fullname)
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_free(&self, fullname: &str) -> Result<(), DuplicateName> {
        if self.entries.contains_key(fullname) {
            return Err(DuplicateName {
                fullname: fullname.to_string(),
            });
        }
        Ok(())
    }
}
