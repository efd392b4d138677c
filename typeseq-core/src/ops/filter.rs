use std::marker::PhantomData;

use crate::types::*;

use super::push::{Concat, Extended};


pub trait Predicate<T> {
    type Output: Bool;
}

pub type Holds<P, T> = <P as Predicate<T>>::Output;

/// `[A]` if `P` holds for `A`, `()` otherwise.
pub type Kept<P, A> = If<Holds<P, A>, TCons<A, ()>, ()>;


/*
 * filter: decide the head on its own, recurse on the tail, concatenate
 */

pub trait Filter<P>: TList {
    type Output: TList;
}
impl<P> Filter<P> for () {
    type Output = ();
}
impl<P, A, T> Filter<P> for TCons<A, T>
where
    P: Predicate<A>,
    T: Filter<P>,
    Kept<P, A>: Concat<Filtered<T, P>>,
{
    type Output = Extended<Kept<P, A>, Filtered<T, P>>;
}

pub type Filtered<L, P> = <L as Filter<P>>::Output;


#[derive(Clone, Copy, Debug, Default)]
pub struct Not<P>(PhantomData<P>);
impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    type Output = Negate<Holds<P, T>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct And<P, Q>(PhantomData<(P, Q)>);
impl<T, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for And<P, Q> {
    type Output = Both<Holds<P, T>, Holds<Q, T>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Or<P, Q>(PhantomData<(P, Q)>);
impl<T, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Or<P, Q> {
    type Output = Either<Holds<P, T>, Holds<Q, T>>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualify::{Const, IsConst};
    use crate::{assert_len, assert_same, tlist};

    struct A;
    struct B;
    struct C;
    crate::unqualified!(A, B, C);

    struct IsA;
    impl Predicate<A> for IsA { type Output = True; }
    impl Predicate<B> for IsA { type Output = False; }
    impl Predicate<C> for IsA { type Output = False; }

    struct IsB;
    impl Predicate<A> for IsB { type Output = False; }
    impl Predicate<B> for IsB { type Output = True; }
    impl Predicate<C> for IsB { type Output = False; }

    assert_same!(Filtered<(), IsA>, ());
    assert_same!(Filtered<tlist![A, Const<A>], IsConst>, tlist![Const<A>]);
    assert_same!(Filtered<tlist![B, A, C, A], IsA>, tlist![A, A]);
    assert_same!(Filtered<tlist![B, C], IsA>, ());
    assert_same!(Filtered<tlist![B, A, C, A], Not<IsA>>, tlist![B, C]);
    assert_same!(Filtered<tlist![C, B, A, B], Or<IsA, IsB>>, tlist![B, A, B]);
    assert_same!(Filtered<tlist![A, B, C], And<IsA, IsB>>, ());
    assert_same!(Filtered<tlist![Const<B>, A, Const<A>, B], Not<IsConst>>, tlist![A, B]);
    assert_same!(Filtered<Filtered<tlist![A, B, A, C], Not<IsB>>, IsA>, tlist![A, A]);

    assert_len!(Filtered<tlist![A, B, C, A, B, C], IsB>, 2);

    #[test]
    fn test_filter_len() {
        type L = tlist![A, B, C, A];
        assert!(<Filtered<L, IsA> as TList>::LEN <= <L as TList>::LEN);
        let kept = <Filtered<L, IsA> as TList>::LEN;
        let dropped = <Filtered<L, Not<IsA>> as TList>::LEN;
        assert_eq!(kept + dropped, <L as TList>::LEN);
    }
}
