use typeseq_core::unqualified;


/*
 * Distinguishable descriptors used throughout the harness
 */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct A;
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct B;
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct C;
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct D;

unqualified!(A, B, C, D);
