
/*
 * Type level booleans
 */


pub trait Bool {
    const VALUE: bool;

    /// `A` when `Self` is `True`, `B` otherwise.
    type If<A, B>;
    type Not: Bool;
    type And<B: Bool>: Bool;
    type Or<B: Bool>: Bool;
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct True;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct False;


impl Bool for True {
    const VALUE: bool = true;
    type If<A, B> = A;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<A, B> = B;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
}


pub type If<C, A, B> = <C as Bool>::If<A, B>;
pub type Negate<C> = <C as Bool>::Not;
pub type Both<C, D> = <C as Bool>::And<D>;
pub type Either<C, D> = <C as Bool>::Or<D>;
