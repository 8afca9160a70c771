use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

pub const BASE: u8 = 62;

/// Arithmetic a numeric type supplies to the base62 digit algorithms.
///
/// Encoding only needs repeated division by the base and decoding only needs
/// `value * base + digit`, so both directions are written once against this
/// trait and instantiated for the native widths and for `BigUint`.
pub trait Radix: Sized {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    /// Quotient and remainder of a division by the base.
    fn div_rem_base(&self) -> (Self, u8);

    /// `self * base + digit`, or `None` when the result does not fit.
    fn mul_add_base(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_radix {
    ( $( $t:ty ),* ) => {
        $(
            impl Radix for $t {
                fn zero() -> Self {
                    0
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn div_rem_base(&self) -> (Self, u8) {
                    (*self / BASE as $t, (*self % BASE as $t) as u8)
                }

                fn mul_add_base(self, digit: u8) -> Option<Self> {
                    self.checked_mul(BASE as $t)?.checked_add(digit as $t)
                }
            }
        )*
    };
}

impl_radix!(u32, u64, u128);

impl Radix for BigUint {
    fn zero() -> Self {
        Zero::zero()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn div_rem_base(&self) -> (Self, u8) {
        let (quotient, remainder) = Integer::div_rem(self, &BigUint::from(BASE));
        // remainder < BASE
        (quotient, remainder.to_u8().unwrap_or_default())
    }

    fn mul_add_base(self, digit: u8) -> Option<Self> {
        Some(self * u32::from(BASE) + u32::from(digit))
    }
}

/// Digit values of `value`, least significant first.
///
/// Zero has a single zero digit rather than none.
pub fn digits<T: Radix>(value: &T) -> Vec<u8> {
    let mut digits = Vec::new();
    let (mut quotient, digit) = value.div_rem_base();
    digits.push(digit);
    while !quotient.is_zero() {
        let (next, digit) = quotient.div_rem_base();
        digits.push(digit);
        quotient = next;
    }
    digits
}
