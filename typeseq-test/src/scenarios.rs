//! Build time scenarios. Every item below is checked by the compiler, so a
//! wrong answer fails `cargo build`.
//!
//! Out of range indices are rejected:
//!
//! ```compile_fail
//! use typeseq_core::prelude::*;
//! use typeseq_test::atoms::*;
//!
//! assert_same!(At<tlist![A, B], 2>, B);
//! ```
//!
//! including any index into the empty list:
//!
//! ```compile_fail
//! use typeseq_core::prelude::*;
//! use typeseq_test::atoms::*;
//!
//! assert_same!(At<(), 0>, A);
//! ```
//!
//! A wrong expectation fails the build as well:
//!
//! ```compile_fail
//! use typeseq_core::prelude::*;
//! use typeseq_test::atoms::*;
//!
//! assert_same!(Reversed<tlist![A, B]>, tlist![A, B]);
//! ```
//!
//! while the same scenario with the right answer compiles:
//!
//! ```
//! use typeseq_core::prelude::*;
//! use typeseq_test::atoms::*;
//!
//! assert_same!(Reversed<tlist![A, B]>, tlist![B, A]);
//! assert_same!(At<tlist![A, B], 1>, B);
//! ```

use typeseq_core::prelude::*;

use crate::atoms::*;


// count
assert_len!((), 0);
assert_len!(tlist![A], 1);
assert_len!(tlist![A, A], 2);
const _: () = assert!(count::<tlist![A, B, C, D]>() == 4);

// push
assert_same!(Pushed<tlist![A], A>, tlist![A, A]);
assert_same!(Pushed<(), B>, tlist![B]);
assert_len!(Pushed<tlist![A, B, C], D>, 4);

// extend
assert_same!(Extended<tlist![A, A], tlist![A, A]>, tlist![A, A, A, A]);
assert_same!(Extended<tlist![A, B], ()>, tlist![A, B]);
assert_same!(Extended<(), tlist![C, D]>, tlist![C, D]);
assert_len!(Extended<tlist![A, B, C], tlist![D, D]>, 5);

// reverse
assert_same!(Reversed<()>, ());
assert_same!(Reversed<tlist![B, A]>, tlist![A, B]);
assert_same!(Reversed<tlist![B, A, D]>, tlist![D, A, B]);
assert_same!(Reversed<Reversed<tlist![A, B, C, D]>>, tlist![A, B, C, D]);

// at
assert_same!(At<tlist![A, B], 0>, A);
assert_same!(At<tlist![A, B], 1>, B);
assert_same!(At<tlist![A, B, C, D], 3>, D);

// filter
assert_same!(Filtered<tlist![A, Const<A>], IsConst>, tlist![Const<A>]);
assert_same!(Filtered<(), IsConst>, ());
assert_same!(Filtered<tlist![Const<B>, A, Const<C>, D], IsConst>, tlist![Const<B>, Const<C>]);
assert_same!(Filtered<tlist![Const<B>, A, Const<C>, D], Not<IsConst>>, tlist![A, D]);

// transform
assert_same!(Transformed<tlist![A, Const<A>], RemoveConst>, tlist![A, A]);
assert_same!(Transformed<(), RemoveConst>, ());
assert_same!(Transformed<tlist![A, Const<B>], AddConst>, tlist![Const<A>, Const<B>]);
assert_same!(
    At<Transformed<tlist![C, Const<D>], RemoveConst>, 1>,
    Applied<RemoveConst, At<tlist![C, Const<D>], 1>>
);

// prefix
assert_same!(Prefixed<tlist![A, B], 0>, ());
assert_same!(Prefixed<tlist![A, B], 1>, tlist![A]);
assert_same!(Prefixed<tlist![A, B], 2>, tlist![A, B]);
assert_same!(Prefixed<tlist![A, B], 3>, tlist![A, B]);
assert_same!(Prefixed<(), 3>, ());

// suffix
assert_same!(Suffixed<tlist![A, B], 0>, ());
assert_same!(Suffixed<tlist![A, B], 1>, tlist![B]);
assert_same!(Suffixed<tlist![A, B], 2>, tlist![A, B]);
assert_same!(Suffixed<tlist![A, B], 3>, tlist![A, B]);
assert_same!(Suffixed<tlist![A, B, C, D], 2>, Reversed<Prefixed<Reversed<tlist![A, B, C, D]>, 2>>);

// skip
assert_same!(Skipped<tlist![A, B, C], 1>, tlist![B, C]);
assert_same!(
    Extended<Prefixed<tlist![A, B, C, D], 3>, Skipped<tlist![A, B, C, D], 3>>,
    tlist![A, B, C, D]
);

// composition
assert_same!(
    Reversed<Filtered<
        Transformed<tlist![A, Const<B>, C, Const<D>], Compose<RemoveConst, AddConst>>,
        IsConst,
    >>,
    tlist![Const<D>, Const<C>, Const<B>, Const<A>]
);
assert_same!(Head<Suffixed<tlist![A, B, C], 1>>, At<tlist![A, B, C], 2>);
