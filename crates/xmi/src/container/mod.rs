//! The three container kinds a value can describe itself into, plus the guard
//! types that hand out nested containers and super encoders.
//!
//! Guards borrow their parent container mutably and dereference to the child.
//! When a guard is dropped it finalizes the child and commits the resulting
//! fragment to the parent: under its key for a keyed parent, as the next
//! element for an unkeyed parent.

mod keyed;
mod single;
mod unkeyed;

pub use keyed::KeyedContainer;
pub use single::SingleValueContainer;
pub use unkeyed::UnkeyedContainer;

use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::encoder::Encoder;
use crate::scalar::names;

/// The container kinds an [`Encoder`] can hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Keyed,
    Unkeyed,
    SingleValue,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerKind::Keyed => "keyed",
            ContainerKind::Unkeyed => "unkeyed",
            ContainerKind::SingleValue => "single-value",
        })
    }
}

/// Where a guard puts its fragment once it is dropped.
enum CommitTarget<'p, 'c> {
    Field {
        parent: &'p mut KeyedContainer<'c>,
        key: String,
    },
    Element {
        parent: &'p mut UnkeyedContainer<'c>,
    },
}

impl CommitTarget<'_, '_> {
    fn commit(&mut self, type_name: &str, inner: &str) {
        match self {
            CommitTarget::Field { parent, key } => parent.store(key, type_name, inner),
            CommitTarget::Element { parent } => parent.push(type_name, inner),
        }
    }
}

/// A keyed container nested inside another container.
///
/// Committed as a `Dictionary` when dropped.
pub struct NestedKeyedContainer<'p, 'c> {
    target: CommitTarget<'p, 'c>,
    container: KeyedContainer<'c>,
}

impl<'p, 'c> NestedKeyedContainer<'p, 'c> {
    fn new(target: CommitTarget<'p, 'c>, container: KeyedContainer<'c>) -> Self {
        Self { target, container }
    }
}

impl<'c> Deref for NestedKeyedContainer<'_, 'c> {
    type Target = KeyedContainer<'c>;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for NestedKeyedContainer<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl Drop for NestedKeyedContainer<'_, '_> {
    fn drop(&mut self) {
        let text = self.container.take_fragment();
        self.target.commit(names::DICTIONARY, &text);
    }
}

/// An unkeyed container nested inside another container.
///
/// Committed as an `Array` when dropped.
pub struct NestedUnkeyedContainer<'p, 'c> {
    target: CommitTarget<'p, 'c>,
    container: UnkeyedContainer<'c>,
}

impl<'p, 'c> NestedUnkeyedContainer<'p, 'c> {
    fn new(target: CommitTarget<'p, 'c>, container: UnkeyedContainer<'c>) -> Self {
        Self { target, container }
    }
}

impl<'c> Deref for NestedUnkeyedContainer<'_, 'c> {
    type Target = UnkeyedContainer<'c>;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for NestedUnkeyedContainer<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl Drop for NestedUnkeyedContainer<'_, '_> {
    fn drop(&mut self) {
        let text = self.container.take_fragment();
        self.target.commit(names::ARRAY, &text);
    }
}

/// A fresh encoder for delegating part of a value to a base representation.
///
/// The fragment is typed after the container the delegate selected: the
/// scalar's name for a single value, `Dictionary` or `Array` otherwise. A
/// delegate that never selects a container commits nothing.
pub struct SuperEncoder<'p, 'c> {
    target: CommitTarget<'p, 'c>,
    encoder: Encoder<'c>,
}

impl<'p, 'c> SuperEncoder<'p, 'c> {
    fn new(target: CommitTarget<'p, 'c>, encoder: Encoder<'c>) -> Self {
        Self { target, encoder }
    }
}

impl<'c> Deref for SuperEncoder<'_, 'c> {
    type Target = Encoder<'c>;

    fn deref(&self) -> &Self::Target {
        &self.encoder
    }
}

impl DerefMut for SuperEncoder<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.encoder
    }
}

impl Drop for SuperEncoder<'_, '_> {
    fn drop(&mut self) {
        match self.encoder.take_selected() {
            Some((type_name, text)) => self.target.commit(type_name, &text),
            None => debug!(
                path = %self.encoder.path(),
                "super encoder dropped without selecting a container"
            ),
        }
    }
}
