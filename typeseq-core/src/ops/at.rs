use crate::types::*;


/// Element at a Peano index.
///
/// Only indices below the list's length have an impl:
///
/// ```compile_fail
/// use typeseq_core::{tlist, At};
///
/// fn f(_: Option<At<tlist![u8, u16], 2>>) {}
/// ```
///
/// ```compile_fail
/// use typeseq_core::At;
///
/// fn f(_: Option<At<(), 0>>) {}
/// ```
///
/// ```
/// use typeseq_core::{tlist, At};
///
/// fn f(_: Option<At<tlist![u8, u16], 1>>) {}
/// ```
pub trait Get<N: Nat>: TList {
    type Output;
}
impl<A, T: TList> Get<Z> for TCons<A, T> {
    type Output = A;
}
impl<A, T: Get<N>, N: Nat> Get<S<N>> for TCons<A, T> {
    type Output = T::Output;
}

pub type At<L, const I: usize> = <L as Get<Peano<I>>>::Output;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_same, tlist};

    struct A;
    struct B;
    struct C;

    assert_same!(At<tlist![A, B], 0>, A);
    assert_same!(At<tlist![A, B], 1>, B);
    assert_same!(At<tlist![A, B, C], 2>, C);
    assert_same!(<tlist![A, B, C] as Get<U1>>::Output, B);
    assert_same!(At<tlist![A, B], 0>, Head<tlist![A, B]>);

    fn first<L: Get<Z>>() -> &'static str {
        std::any::type_name::<L::Output>()
    }

    #[test]
    fn test_first() {
        assert_eq!(first::<tlist![u8, u16]>(), "u8");
        assert_eq!(first::<tlist![String]>(), std::any::type_name::<String>());
    }
}
