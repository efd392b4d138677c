#![recursion_limit = "256"]

//! Compile time algebra over type level lists.
//!
//! A list is `()` or `TCons<Head, Tail>`, usually spelled with `tlist!`.
//! Every operation is a trait whose `Output` is the resulting type, with a
//! type alias for the common spelling:
//!
//! ```
//! use typeseq_core::prelude::*;
//!
//! type L = tlist![u8, Const<u16>, u32];
//!
//! assert_same!(Reversed<L>, tlist![u32, Const<u16>, u8]);
//! assert_same!(Filtered<L, IsConst>, tlist![Const<u16>]);
//! assert_same!(Transformed<L, RemoveConst>, tlist![u8, u16, u32]);
//! assert_same!(At<L, 2>, u32);
//! assert_same!(Suffixed<L, 2>, tlist![Const<u16>, u32]);
//! assert_len!(Extended<L, L>, 6);
//! ```
//!
//! Resolution depth grows with list length. Lists longer than about a
//! hundred elements need a larger `#![recursion_limit]` in the crate that
//! uses them, and `usize` indices are limited to [`MAX_INDEX`].

pub mod types;
pub mod ops;
pub mod qualify;
pub mod reflect;
pub mod prelude;


pub use types::{
    count, Bool, Count, False, Head, Idx, IsEmpty, Nat, NonEmpty, Peano, TCons, TList, Tail,
    ToNat, True, MAX_INDEX, S, Z,
};
pub use ops::*;
pub use qualify::{AddConst, Const, IsConst, Qualified, RemoveConst};
pub use reflect::{Reify, Shape, ShapeError, TypeInfo, Verdicts};


#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
