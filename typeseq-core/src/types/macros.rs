

/// Implemented only for `T: Same<T>`, so a `Same<B>` bound on `A` holds iff
/// `A` and `B` are structurally the same type.
pub trait Same<T: ?Sized> {}
impl<T: ?Sized> Same<T> for T {}


/// Compile time type equality. Expands to an item, so it can sit at module
/// level; a mismatch is a build error naming both types.
///
/// ```
/// use typeseq_core::{assert_same, tlist, Reversed};
///
/// assert_same!(Reversed<tlist![u8, u16]>, tlist![u16, u8]);
/// ```
///
/// ```compile_fail
/// use typeseq_core::{assert_same, tlist};
///
/// assert_same!(tlist![u8, u16], tlist![u16, u8]);
/// ```
#[macro_export]
macro_rules! assert_same {
    ($a:ty, $b:ty $(,)?) => {
        const _: fn() = || {
            fn same<A: ?Sized + $crate::types::Same<B>, B: ?Sized>() {}
            same::<$a, $b>();
        };
    };
}


/// Compile time length check, `assert_len!(L, n)`.
#[macro_export]
macro_rules! assert_len {
    ($l:ty, $n:expr $(,)?) => {
        const _: () = assert!(<$l as $crate::TList>::LEN == $n);
    };
}
