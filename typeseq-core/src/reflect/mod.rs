use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ops::Predicate;
use crate::types::*;

mod shape;

pub use shape::*;


/*
 * Runtime view of type level lists, for diagnostics and checking one list
 * against another outside of trait resolution.
 */


#[derive(Clone, Copy, Debug)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeInfo { id: TypeId::of::<T>(), name: type_name::<T>() }
    }
    pub fn id(&self) -> TypeId {
        self.id
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    /// `name` with module paths dropped, `a::B<c::D>` becomes `B<D>`.
    pub fn short_name(&self) -> String {
        let mut pieces = self.name.split("::").peekable();
        let mut out = String::with_capacity(self.name.len());
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_some() {
                out.push_str(piece.trim_end_matches(|c: char| c.is_alphanumeric() || c == '_'));
            } else {
                out.push_str(piece);
            }
        }
        out
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for TypeInfo {}
impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}


pub trait Reify: TList {
    fn descriptors() -> Vec<TypeInfo>;
}
impl Reify for () {
    fn descriptors() -> Vec<TypeInfo> {
        vec![]
    }
}
impl<A: 'static, T: Reify> Reify for TCons<A, T> {
    fn descriptors() -> Vec<TypeInfo> {
        std::iter::once(TypeInfo::of::<A>()).chain(T::descriptors()).collect()
    }
}


/// Per element outcome of a type level predicate, in list order.
pub trait Verdicts<P>: TList {
    fn verdicts() -> Vec<bool>;
}
impl<P> Verdicts<P> for () {
    fn verdicts() -> Vec<bool> {
        vec![]
    }
}
impl<P: Predicate<A>, A, T: Verdicts<P>> Verdicts<P> for TCons<A, T> {
    fn verdicts() -> Vec<bool> {
        std::iter::once(<P::Output as Bool>::VALUE).chain(T::verdicts()).collect()
    }
}
