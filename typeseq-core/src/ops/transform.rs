use std::marker::PhantomData;

use crate::types::*;

use super::push::{Concat, Extended};


pub trait Operation<T> {
    type Output;
}

pub type Applied<Op, T> = <Op as Operation<T>>::Output;


/*
 * transform: map every element, keeping length and order
 */

pub trait Transform<Op>: TList {
    type Output: TList;
}
impl<Op> Transform<Op> for () {
    type Output = ();
}
impl<Op, A, T> Transform<Op> for TCons<A, T>
where
    Op: Operation<A>,
    T: Transform<Op>,
    TCons<Applied<Op, A>, ()>: Concat<Transformed<T, Op>>,
{
    type Output = Extended<TCons<Applied<Op, A>, ()>, Transformed<T, Op>>;
}

pub type Transformed<L, Op> = <L as Transform<Op>>::Output;


#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;
impl<T> Operation<T> for Identity {
    type Output = T;
}

/// `F` first, then `G`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compose<F, G>(PhantomData<(F, G)>);
impl<T, F: Operation<T>, G: Operation<Applied<F, T>>> Operation<T> for Compose<F, G> {
    type Output = Applied<G, Applied<F, T>>;
}
