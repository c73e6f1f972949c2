//! An exact rational number type, stored as a pair of arbitrary-precision integers.
//!
//! Every [`Rational`] is kept in lowest terms with a positive denominator. All constructors and
//! operators funnel their raw numerator/denominator through a single normalization step, so two
//! values are equal exactly when their fields are equal, and the derived [`Hash`] agrees with
//! [`Eq`].

use num_bigint::{BigInt, ParseBigIntError};
use num_integer::Integer;
use num_traits::{Num, One, Signed, Zero};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

use crate::markup::{Block, RenderBlocks, RenderMode, DISPLAY};

/// A rational number in normalized form: `denominator > 0` and `gcd(|numerator|, denominator) ==
/// 1`. Zero is `0/1`.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationalError {
    #[error("Denominator can't be zero")]
    InvalidDenominator,
    #[error("Could not parse {0}: {1}")]
    StringParseError(String, #[source] ParseBigIntError),
}

/// The least common multiple of two positive denominators.
fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    a * b / a.gcd(b)
}

impl Rational {
    /// Creates the normalized rational `numerator / denominator`. Errors if the denominator is
    /// zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, RationalError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }

        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Creates the rational `n / 1`.
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Self {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    /// Brings a raw pair into normalized form. The denominator must be nonzero: callers either
    /// checked it or built it from the product of existing (positive) denominators.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        // Integer::gcd is never negative, and gcd(0, d) = d gives 0/1.
        let g = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &g,
            denominator: denominator / g,
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    /// Consumes the rational, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Rounds towards zero.
    pub fn trunc(&self) -> Self {
        Self::from_integer(&self.numerator / &self.denominator)
    }

    /// Swaps numerator and denominator, failing for zero.
    fn inv(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by `rhs`, failing with [`RationalError::InvalidDenominator`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Self, RationalError> {
        Ok(self * &rhs.inv()?)
    }

    /// The remainder of truncating division, `self - rhs * trunc(self / rhs)`. Takes the sign of
    /// `self`, like the remainder of the primitive integers.
    pub fn checked_rem(&self, rhs: &Rational) -> Result<Self, RationalError> {
        let quotient = self.checked_div(rhs)?.trunc();
        Ok(self - &(rhs * &quotient))
    }

    /// Whether `low <= self <= high`.
    pub fn is_within(&self, low: &Rational, high: &Rational) -> bool {
        low <= self && self <= high
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational::reduced(-&self.numerator, self.denominator.clone())
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational::reduced(-self.numerator, self.denominator)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denominator == rhs.denominator {
            Rational::reduced(&self.numerator + &rhs.numerator, self.denominator.clone())
        } else {
            // Scaling to the lcm rather than d1 * d2 keeps intermediates small when the
            // denominators share factors.
            let lcm = lcm(&self.denominator, &rhs.denominator);
            let numerator = &self.numerator * (&lcm / &self.denominator)
                + &rhs.numerator * (&lcm / &rhs.denominator);
            Rational::reduced(numerator, lcm)
        }
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// Note: this panics when dividing by zero, like integer division. Use
    /// [`Rational::checked_div`] to get the error instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("Cannot divide {} by {}: {}", self, rhs, e),
        }
    }
}

impl Rem for &Rational {
    type Output = Rational;

    /// Note: this panics when `rhs` is zero. See [`Rational::checked_rem`].
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(e) => panic!("Cannot take {} modulo {}: {}", self, rhs, e),
        }
    }
}

/// Implements the owned and mixed-reference forms of a binary operator, plus its assigning
/// version, in terms of the `&Rational op &Rational` implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $op:tt) => {
        impl $imp for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                &self $op &rhs
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                &self $op rhs
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                self $op &rhs
            }
        }

        impl $assign_imp for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = &*self $op &rhs;
            }
        }

        impl $assign_imp<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = &*self $op rhs;
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, +);
forward_binop!(Sub, sub, SubAssign, sub_assign, -);
forward_binop!(Mul, mul, MulAssign, mul_assign, *);
forward_binop!(Div, div, DivAssign, div_assign, /);
forward_binop!(Rem, rem, RemAssign, rem_assign, %);

impl Ord for Rational {
    /// Orders by the sign of the numerator of `self - other`.
    fn cmp(&self, other: &Self) -> Ordering {
        (self - other).numerator.cmp(&BigInt::zero())
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

/// Splits `s` into `n` or `n/d` and parses each half with `parse_int`. Any number of slashes
/// other than one is handed to `parse_int` whole, which then rejects it.
fn parse_with<F>(s: &str, parse_int: F) -> Result<Rational, RationalError>
where
    F: Fn(&str) -> Result<BigInt, ParseBigIntError>,
{
    let parse = |part: &str| {
        parse_int(part).map_err(|e| RationalError::StringParseError(s.to_owned(), e))
    };
    let parts: Vec<&str> = s.split('/').collect();
    match parts[..] {
        [n, d] => Rational::new(parse(n)?, parse(d)?),
        _ => parse(s).map(Rational::from_integer),
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with(s, BigInt::from_str)
    }
}

impl Num for Rational {
    type FromStrRadixErr = RationalError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        parse_with(str, |part| BigInt::from_str_radix(part, radix))
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Self::from_integer(n)
                }
            }
        )*
    };
}

from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl RenderBlocks for Rational {
    fn components(&self) -> Vec<Block> {
        let mut blocks = vec![];
        if self.numerator.is_negative() {
            blocks.push(Block::MINUS_SIGN);
        }
        let num = Block::new_text(self.numerator.magnitude().to_string());
        if self.is_integer() {
            blocks.push(num);
        } else {
            blocks.push(Block::new_fraction(
                num,
                Block::new_text(self.denominator.to_string()),
            ));
        }
        blocks
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rational!({} / {})", self.numerator, self.denominator)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DISPLAY.render_to_string(self))
    }
}

/// Builds a [`Rational`], panicking on a zero denominator. `rational!(1 / 2)` is one half,
/// `rational!(3)` is three.
#[macro_export]
macro_rules! rational {
    ($num:literal / $denom:expr) => {
        match $crate::rational::Rational::new($num, $denom) {
            Ok(r) => r,
            Err(e) => panic!("Invalid rational {} / {}: {}", $num, stringify!($denom), e),
        }
    };
    ($num:expr) => {
        $crate::rational::Rational::from_integer($num)
    };
}
