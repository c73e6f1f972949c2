//! Exact rational arithmetic on arbitrary-precision integers.
//!
//! ```
//! use rationals::{rational, DivBy, Rational};
//!
//! let r: Rational = "117/1098".parse().unwrap();
//! assert_eq!(r.to_string(), "13/122");
//! assert_eq!(rational!(1 / 2) + rational!(1 / 3), 5i32.div_by(6i32).unwrap());
//! ```

pub mod divby;
pub mod markup;
pub mod rational;

pub use divby::DivBy;
pub use rational::{Rational, RationalError};
