//! Operator overloads for [`FieldElement`].
//!
//! These mirror the fallible `try_*`/`negate`/`invert` methods but cannot
//! return `Result`, so they panic where those methods would return an error:
//! when no modulus is installed, and for `/` when the divisor is not a unit.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::FieldElement;
use crate::utils::errors::FieldError;

#[track_caller]
fn expect_ambient(result: Result<FieldElement, FieldError>) -> FieldElement {
    match result {
        Ok(element) => element,
        Err(e) => panic!("field operation failed: {e}"),
    }
}

macro_rules! impl_field_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        // Borrowed op Borrowed
        impl<'a> $trait<&'a FieldElement> for &FieldElement {
            type Output = FieldElement;
            #[track_caller]
            fn $method(self, rhs: &'a FieldElement) -> FieldElement {
                expect_ambient(self.$checked(rhs))
            }
        }

        // Owned op Owned
        impl $trait<FieldElement> for FieldElement {
            type Output = FieldElement;
            #[track_caller]
            fn $method(self, rhs: FieldElement) -> FieldElement {
                expect_ambient(self.$checked(&rhs))
            }
        }

        // Owned op Borrowed
        impl<'a> $trait<&'a FieldElement> for FieldElement {
            type Output = FieldElement;
            #[track_caller]
            fn $method(self, rhs: &'a FieldElement) -> FieldElement {
                expect_ambient(self.$checked(rhs))
            }
        }

        // Borrowed op Owned
        impl $trait<FieldElement> for &FieldElement {
            type Output = FieldElement;
            #[track_caller]
            fn $method(self, rhs: FieldElement) -> FieldElement {
                expect_ambient(self.$checked(&rhs))
            }
        }

        impl $assign_trait<FieldElement> for FieldElement {
            #[track_caller]
            fn $assign_method(&mut self, rhs: FieldElement) {
                *self = expect_ambient(self.$checked(&rhs));
            }
        }

        impl<'a> $assign_trait<&'a FieldElement> for FieldElement {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &'a FieldElement) {
                *self = expect_ambient(self.$checked(rhs));
            }
        }
    };
}

impl_field_binop!(Add, add, AddAssign, add_assign, try_add);
impl_field_binop!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_field_binop!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_field_binop!(Div, div, DivAssign, div_assign, try_div);

impl Neg for FieldElement {
    type Output = FieldElement;
    #[track_caller]
    fn neg(self) -> FieldElement {
        expect_ambient(self.negate())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;
    #[track_caller]
    fn neg(self) -> FieldElement {
        expect_ambient(self.negate())
    }
}

/// Panics if no modulus is installed, even for an empty iterator.
impl Sum for FieldElement {
    fn sum<I: Iterator<Item = FieldElement>>(iter: I) -> Self {
        iter.fold(FieldElement::zero_ambient(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.fold(FieldElement::zero_ambient(), |acc, x| acc + x)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = FieldElement>>(iter: I) -> Self {
        iter.fold(FieldElement::one_ambient(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.fold(FieldElement::one_ambient(), |acc, x| acc * x)
    }
}

impl Zero for FieldElement {
    fn zero() -> Self {
        FieldElement::zero_ambient()
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

impl One for FieldElement {
    fn one() -> Self {
        FieldElement::one_ambient()
    }
}

impl FieldElement {
    #[track_caller]
    fn zero_ambient() -> Self {
        expect_ambient(FieldElement::zero())
    }

    #[track_caller]
    fn one_ambient() -> Self {
        expect_ambient(FieldElement::one())
    }
}
