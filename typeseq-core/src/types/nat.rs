use std::marker::PhantomData;

use paste::paste;

/*
 * Type level Peano naturals, used for indices and size arguments
 */


pub trait Nat {
    const VALUE: usize;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Z;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct S<N: Nat>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}
impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}


/// Bridge from a `usize` literal to its Peano natural.
///
/// Only literals up to [`MAX_INDEX`] have an impl; anything larger is
/// rejected at compile time. Enable the `wide-index` feature to support
/// literals up to 128.
///
/// ```
/// use typeseq_core::{Nat, Peano};
///
/// assert_eq!(<Peano<64> as Nat>::VALUE, 64);
/// ```
///
/// ```compile_fail
/// use typeseq_core::{tlist, Prefixed};
///
/// fn f(_: Option<Prefixed<tlist![u8], 129>>) {}
/// ```
#[cfg_attr(not(feature = "wide-index"), doc = "```compile_fail")]
#[cfg_attr(feature = "wide-index", doc = "```")]
#[doc = "use typeseq_core::{Nat, Peano};"]
#[doc = ""]
#[doc = "assert_eq!(<Peano<65> as Nat>::VALUE, 65);"]
#[doc = "```"]
pub struct Idx<const N: usize>;

pub trait ToNat {
    type Nat: Nat;
}

pub type Peano<const N: usize> = <Idx<N> as ToNat>::Nat;


#[cfg(not(feature = "wide-index"))]
pub const MAX_INDEX: usize = 64;
#[cfg(feature = "wide-index")]
pub const MAX_INDEX: usize = 128;


macro_rules! define_indices {
    ($nat:ty;) => {};
    ($nat:ty; $n:literal $($rest:literal)*) => {
        paste! {
            pub type [<U $n>] = $nat;
        }
        impl ToNat for Idx<$n> {
            type Nat = $nat;
        }
        define_indices!(S<$nat>; $($rest)*);
    };
}

define_indices!(Z;
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
    16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
    32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
    48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
    64
);

#[cfg(feature = "wide-index")]
define_indices!(S<U64>;
    65 66 67 68 69 70 71 72 73 74 75 76 77 78 79 80
    81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96
    97 98 99 100 101 102 103 104 105 106 107 108 109 110 111 112
    113 114 115 116 117 118 119 120 121 122 123 124 125 126 127 128
);
