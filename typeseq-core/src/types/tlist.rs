use std::marker::PhantomData;

use super::boolean::{Bool, False, True};
use super::nat::{Nat, S, Z};

/*
 * Type level cons list
 */


pub trait TList {
    const LEN: usize;
    type Count: Nat;
    type IsEmpty: Bool;
}
impl TList for () {
    const LEN: usize = 0;
    type Count = Z;
    type IsEmpty = True;
}
impl<A, T: TList> TList for TCons<A, T> {
    const LEN: usize = T::LEN + 1;
    type Count = S<T::Count>;
    type IsEmpty = False;
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TCons<A, T: TList>(PhantomData<(A, T)>);


/// A list with at least one element. `()` has no impl, so `Head<()>` and
/// `Tail<()>` do not compile.
///
/// ```
/// use typeseq_core::{assert_same, tlist, Head, Tail};
///
/// assert_same!(Head<tlist![u8, u16]>, u8);
/// assert_same!(Tail<tlist![u8, u16]>, tlist![u16]);
/// assert_same!(Tail<tlist![u8]>, ());
/// ```
///
/// ```compile_fail
/// use typeseq_core::Head;
///
/// fn f(_: Option<Head<()>>) {}
/// ```
///
/// ```compile_fail
/// use typeseq_core::Tail;
///
/// fn f(_: Option<Tail<()>>) {}
/// ```
pub trait NonEmpty: TList {
    type Head;
    type Tail: TList;
}
impl<A, T: TList> NonEmpty for TCons<A, T> {
    type Head = A;
    type Tail = T;
}

pub type Head<L> = <L as NonEmpty>::Head;
pub type Tail<L> = <L as NonEmpty>::Tail;
pub type Count<L> = <L as TList>::Count;
pub type IsEmpty<L> = <L as TList>::IsEmpty;

pub const fn count<L: TList>() -> usize {
    L::LEN
}


#[macro_export]
macro_rules! tlist {
    () => { () };
    ($A:ty $(,$tok:ty)* $(,)?) => {
        $crate::TCons<$A, $crate::tlist!($($tok),*)>
    };
}


/*
 * `is_tlist!` dispatch. Method lookup tries `&&Probe<T>` first, which only
 * has an impl when `T: TList`, then falls back to `&Probe<T>`.
 */

#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);
impl<T: ?Sized> Probe<T> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

#[doc(hidden)]
pub trait ProbeTList {
    fn is_tlist(&self) -> bool { true }
}
impl<T: TList> ProbeTList for &Probe<T> {}

#[doc(hidden)]
pub trait ProbeOther {
    fn is_tlist(&self) -> bool { false }
}
impl<T: ?Sized> ProbeOther for Probe<T> {}

/// `true` iff the (concrete) type is a [`TList`].
///
/// ```
/// use typeseq_core::{is_tlist, tlist};
///
/// assert!(is_tlist!(()));
/// assert!(is_tlist!(tlist![u8, u16]));
/// assert!(!is_tlist!(u32));
/// assert!(!is_tlist!((u8, u16)));
/// ```
///
/// Inside generic code the answer is `false` unless the parameter carries a
/// `TList` bound; use the bound itself as the guard there.
#[macro_export]
macro_rules! is_tlist {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::types::{ProbeOther as _, ProbeTList as _};
        (&&$crate::types::Probe::<$t>::new()).is_tlist()
    }};
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_same;
    use crate::types::nat::*;

    struct A;
    struct B;

    assert_same!(tlist![], ());
    assert_same!(tlist![A, B], TCons<A, TCons<B, ()>>);
    assert_same!(tlist![A, B,], tlist![A, B]);
    assert_same!(Head<tlist![A, B]>, A);
    assert_same!(Tail<tlist![A, B]>, tlist![B]);
    assert_same!(Count<tlist![A, A, B]>, U3);
    assert_same!(IsEmpty<()>, True);
    assert_same!(IsEmpty<tlist![A]>, False);

    const _: () = assert!(count::<tlist![A, B, A]>() == 3);

    #[test]
    fn test_count() {
        assert_eq!(<() as TList>::LEN, 0);
        assert_eq!(<tlist![A] as TList>::LEN, 1);
        assert_eq!(count::<tlist![A, A]>(), 2);
        assert_eq!(<Count<tlist![A, B, A, B]> as Nat>::VALUE, 4);
    }

    #[test]
    fn test_is_tlist() {
        assert!(is_tlist!(()));
        assert!(is_tlist!(tlist![A]));
        assert!(is_tlist!(TCons<A, TCons<B, ()>>));
        assert!(!is_tlist!(A));
        assert!(!is_tlist!(u32));
        assert!(!is_tlist!(str));
        assert!(!is_tlist!((A, ())));
    }
}
