use crate::types::*;


/*
 * push: append one element at the end
 */

pub trait Push<T>: TList {
    type Output: TList;
}
impl<T> Push<T> for () {
    type Output = TCons<T, ()>;
}
impl<A, R: Push<T>, T> Push<T> for TCons<A, R> {
    type Output = TCons<A, Pushed<R, T>>;
}

pub type Pushed<L, T> = <L as Push<T>>::Output;


/*
 * extend: all of `L` followed by all of `R`, one push per element of `R`
 */

pub trait Concat<R>: TList {
    type Output: TList;
}
impl<L: TList> Concat<()> for L {
    type Output = L;
}
impl<L, H, R> Concat<TCons<H, R>> for L
where
    L: Push<H>,
    R: TList,
    Pushed<L, H>: Concat<R>,
{
    type Output = Extended<Pushed<L, H>, R>;
}

pub type Extended<L, R> = <L as Concat<R>>::Output;
