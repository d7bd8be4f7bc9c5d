//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix values. Only integer types are supported.

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared against [`MatrixElement::ZERO`]
/// - Debug + Display: Can be reported
///
/// Arithmetic is checked so that overflow surfaces as an error rather
/// than wrapping silently.
pub trait MatrixElement:
    Copy + Clone + PartialEq + core::fmt::Debug + core::fmt::Display + Sized
{
    /// Wider integer used to accumulate dot products
    ///
    /// Every product of two `Self` values fits in it, so only the final
    /// sum has to be range-checked against `Self`.
    type Acc: Accumulator;

    /// The implicit value of every unstored cell
    const ZERO: Self;

    /// Checked addition, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Checked multiplication, `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossless conversion into the accumulator type
    fn widen(self) -> Self::Acc;

    /// Convert an accumulated value back, `None` if it does not fit
    fn narrow(acc: Self::Acc) -> Option<Self>;

    /// Parse an optionally `-`-signed decimal integer
    ///
    /// Returns `None` for empty input, stray characters, a `+` sign or
    /// values that do not fit in `Self`.
    fn parse_decimal(s: &str) -> Option<Self>;

    /// Whether this value is the implicit zero
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Checked arithmetic on the accumulator of a dot product
pub trait Accumulator: Copy {
    const ZERO: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_accumulator {
    ($($ty:ty),*) => {
        $(
            impl Accumulator for $ty {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_accumulator!(i64, i128);

macro_rules! impl_matrix_element {
    ($ty:ty, $acc:ty) => {
        impl MatrixElement for $ty {
            type Acc = $acc;

            const ZERO: Self = 0;

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_sub(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }

            fn widen(self) -> $acc {
                <$acc>::from(self)
            }

            fn narrow(acc: $acc) -> Option<Self> {
                <$ty>::try_from(acc).ok()
            }

            fn parse_decimal(s: &str) -> Option<Self> {
                let digits = s.strip_prefix('-').unwrap_or(s);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                s.parse().ok()
            }
        }
    };
}

impl_matrix_element!(i32, i64);
impl_matrix_element!(i64, i128);
