use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

pub type UnmodifiableResult<T> = Result<T, UnmodifiableError>;

/// A mutating sequence operation, as reported by a rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SetItem,
    DelItem,
    ConcatInPlace,
    Insert,
    Append,
    Extend,
    Pop,
    Remove,
    Sort,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::SetItem,
        Operation::DelItem,
        Operation::ConcatInPlace,
        Operation::Insert,
        Operation::Append,
        Operation::Extend,
        Operation::Pop,
        Operation::Remove,
        Operation::Sort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::SetItem => "set_item",
            Operation::DelItem => "del_item",
            Operation::ConcatInPlace => "concat_in_place",
            Operation::Insert => "insert",
            Operation::Append => "append",
            Operation::Extend => "extend",
            Operation::Pop => "pop",
            Operation::Remove => "remove",
            Operation::Sort => "sort",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the resolver found no eligible public field.
///
/// Only used for wording. Every variant surfaces as
/// [`UnmodifiableError::MissingPublicField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    /// The private name is not a decorated identifier.
    InvalidName,
    /// No public field carries the candidate name.
    Absent,
    /// The public field exists but was declared without a type.
    Untyped,
    /// The public field exists with some other declared type.
    WrongType(&'static str),
    /// The owner does not expose the named private field.
    PrivateFieldMissing,
    /// The public field is declared but the owner has no slot for it.
    PublicSlotMissing,
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::InvalidName => write!(
                f,
                "private field names must be identifiers, optionally marker-decorated"
            ),
            LookupMiss::Absent => write!(
                f,
                "declare a public field of type ImmutableList with the undecorated name"
            ),
            LookupMiss::Untyped => write!(
                f,
                "the public field has no type declaration; declare it as ImmutableList"
            ),
            LookupMiss::WrongType(ty) => write!(
                f,
                "the public field is declared as `{ty}`; declare it as ImmutableList"
            ),
            LookupMiss::PrivateFieldMissing => {
                write!(f, "the owner does not expose this private field")
            }
            LookupMiss::PublicSlotMissing => write!(
                f,
                "the public field is declared but the owner does not expose a slot for it"
            ),
        }
    }
}

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum UnmodifiableError {
    #[error("Not allowed on protected object (attempted `{operation}`)")]
    #[diagnostic(
        code(unmodifiable::unsupported_operation),
        help("copy the snapshot with `to_vec()` to get a mutable sequence")
    )]
    UnsupportedOperation { operation: Operation },
    #[error(
        "Could not find corresponding public field `{public}` for `{private}` in origin type \
         or it is not type of ImmutableList"
    )]
    #[diagnostic(code(unmodifiable::missing_public_field), help("{reason}"))]
    MissingPublicField {
        private: String,
        public: String,
        reason: LookupMiss,
    },
}

impl UnmodifiableError {
    pub(crate) fn missing(private: &str, public: &str, reason: LookupMiss) -> Self {
        UnmodifiableError::MissingPublicField {
            private: private.to_string(),
            public: public.to_string(),
            reason,
        }
    }
}

/// Failures of an ordinary, mutable sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Pop from empty sequence")]
    PopFromEmpty,
    #[error("Value not found in sequence")]
    ValueNotFound,
}
