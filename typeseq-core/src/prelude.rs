
pub use crate::types::*;
pub use crate::ops::*;
pub use crate::qualify::*;
pub use crate::reflect::{Reify, Shape, ShapeError, TypeInfo, Verdicts};
pub use crate::{assert_len, assert_same, is_tlist, tlist, unqualified};
