
//! Verification harness for `typeseq-core`. Everything in `scenarios` is
//! checked while this crate compiles; `agreement` compares type level
//! results with the runtime `Shape` model under `cargo test`.

pub mod atoms;
pub mod scenarios;


#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
