use crate::{
    config::NamingConvention,
    error::{LookupMiss, UnmodifiableError, UnmodifiableResult},
    frozen::{FrozenList, ImmutableList},
};

/// Declared type of a public field on an owning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// The field holds an [`ImmutableList`] snapshot.
    ImmutableList,
    /// Any other declared type, by name.
    Other(&'static str),
    /// Declared without a type.
    Untyped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDecl {
    pub const fn immutable_list(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::ImmutableList,
        }
    }

    pub const fn typed(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Other(ty),
        }
    }

    pub const fn untyped(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Untyped,
        }
    }
}

/// The public fields an owning type declares.
pub trait FieldDeclarations {
    fn declarations() -> &'static [FieldDecl];
}

/// A type whose private `Vec<T>` fields are published as frozen snapshots.
///
/// Implementors list their public fields in
/// [`FieldDeclarations::declarations`] and expose the backing storage on both
/// sides by name. An owner holding lists of several element types implements
/// this once per element type.
pub trait Unmodifiable<T: Clone>: FieldDeclarations {
    /// The private backing field, looked up by its decorated name.
    fn private_list(&self, private_name: &str) -> Option<&[T]>;

    /// The public snapshot slot, looked up by its public name.
    fn public_slot(&mut self, public_name: &str) -> Option<&mut ImmutableList<T>>;
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    convention: NamingConvention,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_convention(convention: NamingConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    /// Find the public `ImmutableList` field declared for `private_name`.
    pub fn lookup<O: FieldDeclarations>(
        &self,
        private_name: &str,
    ) -> UnmodifiableResult<&'static FieldDecl> {
        let Some(public) = self.convention.public_name(private_name) else {
            return Err(UnmodifiableError::missing(
                private_name,
                "",
                LookupMiss::InvalidName,
            ));
        };

        let mut miss = LookupMiss::Absent;
        for decl in O::declarations() {
            if decl.name != public || !self.convention.is_public(decl.name) {
                continue;
            }
            match decl.ty {
                FieldType::ImmutableList => return Ok(decl),
                FieldType::Untyped => miss = LookupMiss::Untyped,
                FieldType::Other(ty) => miss = LookupMiss::WrongType(ty),
            }
        }
        Err(UnmodifiableError::missing(private_name, public, miss))
    }

    /// Publish a frozen copy of `private_name` into its public field.
    ///
    /// A fresh snapshot is built on every call and replaces whatever the
    /// public field held before. The returned list shares storage with the
    /// published one.
    pub fn resolve<T, O>(
        &self,
        owner: &mut O,
        private_name: &str,
    ) -> UnmodifiableResult<ImmutableList<T>>
    where
        T: Clone,
        O: Unmodifiable<T>,
    {
        let decl = self.lookup::<O>(private_name)?;
        let source = owner.private_list(private_name).ok_or_else(|| {
            UnmodifiableError::missing(private_name, decl.name, LookupMiss::PrivateFieldMissing)
        })?;
        let snapshot = FrozenList::copied_from(source);

        let slot = owner.public_slot(decl.name).ok_or_else(|| {
            UnmodifiableError::missing(private_name, decl.name, LookupMiss::PublicSlotMissing)
        })?;
        *slot = snapshot.clone();

        tracing::debug!(
            owner = std::any::type_name::<O>(),
            item = std::any::type_name::<T>(),
            private = private_name,
            public = decl.name,
            len = snapshot.len(),
            "binding: published immutable snapshot"
        );
        Ok(snapshot)
    }

    /// Scoped form of [`Resolver::resolve`].
    ///
    /// `scope` only runs once the snapshot is published. Nothing is rolled
    /// back afterwards.
    pub fn bind<T, O, F, R>(
        &self,
        owner: &mut O,
        private_name: &str,
        scope: F,
    ) -> UnmodifiableResult<R>
    where
        T: Clone,
        O: Unmodifiable<T>,
        F: FnOnce(&ImmutableList<T>) -> R,
    {
        let snapshot = self.resolve(owner, private_name)?;
        Ok(scope(&snapshot))
    }
}

/// [`Resolver::resolve`] with the default naming convention.
pub fn resolve<T, O>(owner: &mut O, private_name: &str) -> UnmodifiableResult<ImmutableList<T>>
where
    T: Clone,
    O: Unmodifiable<T>,
{
    Resolver::default().resolve(owner, private_name)
}

/// [`Resolver::bind`] with the default naming convention.
pub fn unmodifiable_list<T, O, F, R>(
    owner: &mut O,
    private_name: &str,
    scope: F,
) -> UnmodifiableResult<R>
where
    T: Clone,
    O: Unmodifiable<T>,
    F: FnOnce(&ImmutableList<T>) -> R,
{
    Resolver::default().bind(owner, private_name, scope)
}
