//! Building rationals by dividing two integers: `1i32.div_by(2)` is one half.

use num_bigint::BigInt;

use crate::rational::{Rational, RationalError};

/// Integer types that can be divided exactly into a [`Rational`]. Both operands are widened to
/// [`BigInt`] first, so this never overflows.
pub trait DivBy<Rhs = Self> {
    /// Returns `self / rhs` in lowest terms. Errors if `rhs` is zero.
    fn div_by(self, rhs: Rhs) -> Result<Rational, RationalError>;
}

macro_rules! impl_div_by {
    ($($t:ty),*) => {
        $(
            impl DivBy for $t {
                fn div_by(self, rhs: $t) -> Result<Rational, RationalError> {
                    Rational::new(BigInt::from(self), BigInt::from(rhs))
                }
            }

            impl DivBy<BigInt> for $t {
                fn div_by(self, rhs: BigInt) -> Result<Rational, RationalError> {
                    Rational::new(BigInt::from(self), rhs)
                }
            }

            impl DivBy<$t> for BigInt {
                fn div_by(self, rhs: $t) -> Result<Rational, RationalError> {
                    Rational::new(self, BigInt::from(rhs))
                }
            }
        )*
    };
}

impl_div_by!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl DivBy for BigInt {
    fn div_by(self, rhs: BigInt) -> Result<Rational, RationalError> {
        Rational::new(self, rhs)
    }
}

impl DivBy for &BigInt {
    fn div_by(self, rhs: &BigInt) -> Result<Rational, RationalError> {
        Rational::new(self.clone(), rhs.clone())
    }
}
