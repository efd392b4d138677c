use crate::types::*;

use super::push::{Concat, Extended};
use super::reverse::{Reverse, Reversed};


/*
 * Saturating prefix / suffix / skip. Size arguments larger than the list
 * simply take (or drop) everything.
 */

pub trait Prefix<N>: TList {
    type Output: TList;
}
impl<N: Nat> Prefix<N> for () {
    type Output = ();
}
impl<A, T: TList> Prefix<Z> for TCons<A, T> {
    type Output = ();
}
impl<A, T, N> Prefix<S<N>> for TCons<A, T>
where
    N: Nat,
    T: Prefix<N>,
    TCons<A, ()>: Concat<<T as Prefix<N>>::Output>,
{
    type Output = Extended<TCons<A, ()>, <T as Prefix<N>>::Output>;
}


/// `reverse(prefix(reverse(L), N))`
pub trait Suffix<N>: TList {
    type Output: TList;
}
impl<L, N> Suffix<N> for L
where
    L: Reverse,
    Reversed<L>: Prefix<N>,
    <Reversed<L> as Prefix<N>>::Output: Reverse,
{
    type Output = Reversed<<Reversed<L> as Prefix<N>>::Output>;
}


pub trait Skip<N>: TList {
    type Output: TList;
}
impl<N: Nat> Skip<N> for () {
    type Output = ();
}
impl<A, T: TList> Skip<Z> for TCons<A, T> {
    type Output = TCons<A, T>;
}
impl<A, T: Skip<N>, N: Nat> Skip<S<N>> for TCons<A, T> {
    type Output = T::Output;
}


pub type Prefixed<L, const N: usize> = <L as Prefix<Peano<N>>>::Output;
pub type Suffixed<L, const N: usize> = <L as Suffix<Peano<N>>>::Output;
pub type Skipped<L, const N: usize> = <L as Skip<Peano<N>>>::Output;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_len, assert_same, tlist};

    struct A;
    struct B;
    struct C;

    type AB = tlist![A, B];

    assert_same!(Prefixed<AB, 0>, ());
    assert_same!(Prefixed<AB, 1>, tlist![A]);
    assert_same!(Prefixed<AB, 2>, AB);
    assert_same!(Prefixed<AB, 3>, AB);
    assert_same!(Prefixed<(), 5>, ());

    assert_same!(Suffixed<AB, 0>, ());
    assert_same!(Suffixed<AB, 1>, tlist![B]);
    assert_same!(Suffixed<AB, 2>, AB);
    assert_same!(Suffixed<AB, 3>, AB);
    assert_same!(Suffixed<(), 5>, ());
    assert_same!(Suffixed<tlist![A, B, C], 2>, tlist![B, C]);

    assert_same!(Skipped<AB, 0>, AB);
    assert_same!(Skipped<AB, 1>, tlist![B]);
    assert_same!(Skipped<AB, 2>, ());
    assert_same!(Skipped<AB, 3>, ());
    assert_same!(Skipped<tlist![A, B, C], 2>, Suffixed<tlist![A, B, C], 1>);
    assert_same!(
        Extended<Prefixed<tlist![A, B, C], 1>, Skipped<tlist![A, B, C], 1>>,
        tlist![A, B, C]
    );

    // Peano arguments are unbounded, unlike the `usize` aliases.
    type Big = S<S<S<S<S<S<S<S<U64>>>>>>>>;
    assert_same!(<AB as Prefix<Big>>::Output, AB);
    assert_same!(<AB as Suffix<Big>>::Output, AB);
    assert_same!(<AB as Skip<Big>>::Output, ());

    assert_len!(Prefixed<tlist![A, B, C], 2>, 2);
    assert_len!(Suffixed<tlist![A, B, C], 64>, 3);

    #[test]
    fn test_saturating_len() {
        type L = tlist![A, B, C];
        assert_eq!(<Prefixed<L, 10> as TList>::LEN, 3);
        assert_eq!(<Suffixed<L, 10> as TList>::LEN, 3);
        assert_eq!(<Skipped<L, 10> as TList>::LEN, 0);
        assert_eq!(<Prefixed<L, 2> as TList>::LEN + <Skipped<L, 2> as TList>::LEN, 3);
    }
}
