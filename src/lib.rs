//! Read-only snapshots of private list fields.
//!
//! A [`FrozenList`] is an ordered sequence that rejects every mutation with
//! [`UnmodifiableError::UnsupportedOperation`]. The binding [`Resolver`]
//! copies an owner's private `Vec` into a fresh frozen list and publishes it
//! through the matching public [`ImmutableList`] field.

pub mod binding;
pub mod config;
pub mod error;
pub mod frozen;
pub mod sequence;

pub use binding::{
    resolve, unmodifiable_list, FieldDecl, FieldDeclarations, FieldType, Resolver, Unmodifiable,
};
pub use config::{ConfigError, NamingConvention};
pub use error::{LookupMiss, Operation, SequenceError, UnmodifiableError, UnmodifiableResult};
pub use frozen::{FrozenList, ImmutableList};
pub use sequence::MutableSequence;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
