use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use super::{Reify, TypeInfo};


#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("index {index} out of range for a list of {count} types")]
    OutOfRange { index: usize, count: usize },
}

pub type R<T> = std::result::Result<T, ShapeError>;


/// Owned runtime copy of a type list. Every operation returns a new shape
/// and leaves the receiver untouched, matching the type level operations
/// element for element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<TypeInfo>);

impl Shape {
    pub fn new(descriptors: Vec<TypeInfo>) -> Shape {
        Shape(descriptors)
    }

    pub fn of<L: Reify>() -> Shape {
        let shape = Shape(L::descriptors());
        trace!(count = shape.count(), shape = %shape, "reified type list");
        shape
    }

    pub fn descriptors(&self) -> &[TypeInfo] {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&self, t: TypeInfo) -> Shape {
        let mut out = self.0.clone();
        out.push(t);
        Shape(out)
    }

    pub fn extend(&self, other: &Shape) -> Shape {
        other.0.iter().fold(self.clone(), |acc, t| acc.push(*t))
    }

    pub fn reverse(&self) -> Shape {
        Shape(self.0.iter().rev().copied().collect())
    }

    pub fn at(&self, index: usize) -> R<TypeInfo> {
        match self.0.get(index) {
            Some(t) => Ok(*t),
            None => {
                debug!(index, count = self.count(), "indexed access out of range");
                Err(ShapeError::OutOfRange { index, count: self.count() })
            }
        }
    }

    pub fn filter<F: FnMut(&TypeInfo) -> bool>(&self, mut keep: F) -> Shape {
        Shape(self.0.iter().copied().filter(|t| keep(t)).collect())
    }

    pub fn transform<F: FnMut(&TypeInfo) -> TypeInfo>(&self, mut op: F) -> Shape {
        Shape(self.0.iter().map(|t| op(t)).collect())
    }

    pub fn prefix(&self, n: usize) -> Shape {
        Shape(self.0[..n.min(self.count())].to_vec())
    }

    pub fn suffix(&self, n: usize) -> Shape {
        self.reverse().prefix(n).reverse()
    }

    pub fn skip(&self, n: usize) -> Shape {
        Shape(self.0[n.min(self.count())..].to_vec())
    }
}

impl FromIterator<TypeInfo> for Shape {
    fn from_iter<I: IntoIterator<Item = TypeInfo>>(iter: I) -> Self {
        Shape(iter.into_iter().collect())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, "]")
    }
}
