use crate::types::*;

use super::push::{Push, Pushed};


/// Reverse the tail, then push the head onto the end.
pub trait Reverse: TList {
    type Output: TList;
}
impl Reverse for () {
    type Output = ();
}
impl<A, T> Reverse for TCons<A, T>
where
    T: Reverse,
    Reversed<T>: Push<A>,
{
    type Output = Pushed<Reversed<T>, A>;
}

pub type Reversed<L> = <L as Reverse>::Output;
