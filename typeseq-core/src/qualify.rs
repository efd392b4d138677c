use std::marker::PhantomData;

use crate::ops::{Operation, Predicate};
use crate::types::*;


/*
 * Const qualification for descriptors. `Const<T>` marks `T` as qualified;
 * every other descriptor opts in through `unqualified!`.
 */


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const<T>(PhantomData<T>);


pub trait Qualified {
    type IsConst: Bool;
    type Unqualified;
}
impl<T> Qualified for Const<T> {
    type IsConst = True;
    type Unqualified = T;
}


#[derive(Clone, Copy, Debug, Default)]
pub struct IsConst;
impl<T: Qualified> Predicate<T> for IsConst {
    type Output = T::IsConst;
}

/// Strips one level of qualification; unqualified descriptors map to
/// themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoveConst;
impl<T: Qualified> Operation<T> for RemoveConst {
    type Output = T::Unqualified;
}

/// Qualifies a descriptor; already qualified ones are left as they are.
#[derive(Clone, Copy, Debug, Default)]
pub struct AddConst;
impl<T: Qualified> Operation<T> for AddConst {
    type Output = Const<T::Unqualified>;
}


/// Registers concrete types as unqualified descriptors.
///
/// ```
/// use typeseq_core::{assert_same, tlist, unqualified, Const, Filtered, IsConst};
///
/// struct Account;
/// unqualified!(Account);
///
/// assert_same!(Filtered<tlist![Account, Const<Account>], IsConst>, tlist![Const<Account>]);
/// ```
#[macro_export]
macro_rules! unqualified {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::Qualified for $t {
                type IsConst = $crate::False;
                type Unqualified = $t;
            }
        )*
    };
}

macro_rules! unqualified_generic {
    ($([$($params:ident),*] $t:ty),* $(,)?) => {
        $(
            impl<$($params),*> Qualified for $t {
                type IsConst = False;
                type Unqualified = $t;
            }
        )*
    };
}


unqualified!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String, &'static str,
);

unqualified_generic!(
    [T] Vec<T>,
    [T] Option<T>,
    [T] Box<T>,
    [T] PhantomData<T>,
    [T, E] Result<T, E>,
);


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Applied, Holds};
    use crate::assert_same;

    assert_same!(Holds<IsConst, Const<u8>>, True);
    assert_same!(Holds<IsConst, u8>, False);
    assert_same!(Holds<IsConst, Vec<Const<u8>>>, False);
    assert_same!(Applied<RemoveConst, Const<u8>>, u8);
    assert_same!(Applied<RemoveConst, u8>, u8);
    assert_same!(Applied<RemoveConst, Const<Const<u8>>>, Const<u8>);
    assert_same!(Applied<AddConst, u8>, Const<u8>);
    assert_same!(Applied<AddConst, Const<u8>>, Const<u8>);

    #[test]
    fn test_is_const() {
        assert!(<Holds<IsConst, Const<String>> as Bool>::VALUE);
        assert!(!<Holds<IsConst, String> as Bool>::VALUE);
        assert!(!<Holds<IsConst, Option<u8>> as Bool>::VALUE);
    }
}
