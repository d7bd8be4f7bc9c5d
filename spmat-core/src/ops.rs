//! Binary matrix arithmetic
//!
//! All operations borrow both operands and return a freshly built matrix.
//! Element-wise operations walk the full `rows x cols` grid; the product
//! walks `rows x other.cols x cols`. Cells that evaluate to zero are not
//! stored.

use core::str::FromStr;

use crate::error::{Result, SpmatError};
use crate::matrix::DokMatrix;
use crate::traits::{Accumulator, MatrixElement};
use crate::validation::{validate_inner_dimensions, validate_same_shape};

/// The binary operations a driver can request by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Every supported operation
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Name accepted by [`Operation::from_str`]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to `lhs` and `rhs`
    pub fn apply<T: MatrixElement>(
        self,
        lhs: &DokMatrix<T>,
        rhs: &DokMatrix<T>,
    ) -> Result<DokMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(SpmatError::InvalidOperation),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: MatrixElement> DokMatrix<T> {
    /// Element-wise sum; both operands must have the same shape
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, T::checked_add)
    }

    /// Element-wise difference; both operands must have the same shape
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, T::checked_sub)
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    ///
    /// Each dot product is summed in [`MatrixElement::Acc`], so only a
    /// final value outside `T` counts as overflow.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        validate_inner_dimensions(self.dimensions(), other.dimensions())?;

        let mut result = Self::new(self.rows(), other.cols());
        for r in 0..self.rows() {
            for c in 0..other.cols() {
                let overflow = SpmatError::ArithmeticOverflow { row: r, col: c };
                let mut sum = <T::Acc as Accumulator>::ZERO;
                for k in 0..self.cols() {
                    sum = self
                        .get(r, k)
                        .widen()
                        .checked_mul(other.get(k, c).widen())
                        .and_then(|term| sum.checked_add(term))
                        .ok_or(overflow)?;
                }
                result.set(r, c, T::narrow(sum).ok_or(overflow)?)?;
            }
        }
        Ok(result)
    }

    fn combine(&self, other: &Self, op: fn(T, T) -> Option<T>) -> Result<Self> {
        validate_same_shape(self.dimensions(), other.dimensions())?;

        let mut result = Self::new(self.rows(), self.cols());
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let value = op(self.get(r, c), other.get(r, c))
                    .ok_or(SpmatError::ArithmeticOverflow { row: r, col: c })?;
                result.set(r, c, value)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> DokMatrix {
        DokMatrix::from_entries(rows, cols, entries.iter().copied()).unwrap()
    }

    fn triples(m: &DokMatrix) -> Vec<(usize, usize, i64)> {
        m.sorted_entries()
            .into_iter()
            .map(|e| (e.row, e.col, e.value))
            .collect()
    }

    #[test]
    fn test_add_drops_cancelled_cells() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, -5), (0, 1, 7)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.dimensions(), (2, 2));
        assert_eq!(triples(&sum), [(0, 1, 7), (1, 1, 3)]);
        assert_eq!(sum.get(0, 0), 0);
        assert_eq!(sum.nnz(), 2);
    }

    #[test]
    fn test_add_zero_matrix_is_identity() {
        let a = matrix(3, 2, &[(0, 1, 4), (2, 0, -9)]);
        let zero = DokMatrix::new(3, 2);
        assert_eq!(a.add(&zero).unwrap(), a);
        assert_eq!(zero.add(&a).unwrap(), a);
    }

    #[test]
    fn test_add_is_commutative() {
        let a = matrix(2, 3, &[(0, 0, 1), (1, 2, 8), (0, 2, -2)]);
        let b = matrix(2, 3, &[(0, 0, 6), (1, 1, -4), (0, 2, 2)]);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_subtract() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 0, 2)]);
        let b = matrix(2, 2, &[(0, 0, 5), (0, 1, 3)]);

        let diff = a.subtract(&b).unwrap();
        assert_eq!(triples(&diff), [(0, 1, -3), (1, 0, 2)]);

        // Subtracting a matrix from itself leaves nothing stored
        assert!(a.subtract(&a).unwrap().is_empty());
    }

    #[test]
    fn test_elementwise_shape_mismatch() {
        let a = matrix(2, 2, &[(0, 0, 1)]);
        let b = matrix(2, 3, &[(0, 0, 1)]);
        let c = matrix(3, 2, &[]);

        let expected = SpmatError::DimensionMismatch {
            left: (2, 2),
            right: (2, 3),
        };
        assert_eq!(a.add(&b), Err(expected));
        assert_eq!(a.subtract(&b), Err(expected));
        assert!(matches!(
            a.add(&c),
            Err(SpmatError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_by_identity() {
        let m = matrix(2, 2, &[(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
        let identity = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);

        assert_eq!(m.multiply(&identity).unwrap(), m);
        assert_eq!(identity.multiply(&m).unwrap(), m);
    }

    #[test]
    fn test_multiply_rectangular() {
        // [1 0 2]   [1 0]   [7  8]
        // [0 3 0] x [0 4] = [0 12]
        //           [3 4]
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = matrix(3, 2, &[(0, 0, 1), (1, 1, 4), (2, 0, 3), (2, 1, 4)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(triples(&product), [(0, 0, 7), (0, 1, 8), (1, 1, 12)]);
    }

    #[test]
    fn test_multiply_omits_zero_sums() {
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 5), (1, 0, -5)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert!(product.is_empty());
    }

    #[test]
    fn test_multiply_inner_dimension_mismatch() {
        let a = matrix(2, 3, &[]);
        let b = matrix(2, 3, &[]);
        assert_eq!(
            a.multiply(&b),
            Err(SpmatError::IncompatibleDimensions {
                left: (2, 3),
                right: (2, 3)
            })
        );
        // Same shape is not enough, inner dimensions are what count
        assert!(a.multiply(&matrix(3, 7, &[])).is_ok());
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = matrix(2, 2, &[(0, 0, 2)]);
        let b = matrix(2, 2, &[(0, 0, -2), (1, 1, 1)]);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.add(&b).unwrap();
        let _ = a.multiply(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(
            a.add(&b),
            Err(SpmatError::ArithmeticOverflow { row: 0, col: 0 })
        );

        let c = matrix(1, 1, &[(0, 0, 2)]);
        assert_eq!(
            a.multiply(&c),
            Err(SpmatError::ArithmeticOverflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_multiply_intermediate_sum_may_leave_range() {
        // MAX + 1 - 1 passes through MAX + 1 but ends at MAX
        let a = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, 1), (0, 2, 1)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, 1), (2, 0, -1)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get(0, 0), i64::MAX);

        // A single product may exceed the range if the sum comes back
        let a = matrix(1, 2, &[(0, 0, i64::MAX), (0, 1, i64::MAX)]);
        let b = matrix(2, 1, &[(0, 0, 2), (1, 0, -2)]);
        assert!(a.multiply(&b).unwrap().is_empty());

        // Final sums outside the range are still rejected
        let b = matrix(2, 1, &[(0, 0, 1), (1, 0, 1)]);
        assert_eq!(
            a.multiply(&b),
            Err(SpmatError::ArithmeticOverflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_multiply_i32_accumulates_wide() {
        let a: DokMatrix<i32> =
            DokMatrix::from_entries(1, 2, [(0, 0, i32::MAX), (0, 1, i32::MAX)]).unwrap();
        let b: DokMatrix<i32> = DokMatrix::from_entries(2, 1, [(0, 0, 3), (1, 0, -2)]).unwrap();
        assert_eq!(a.multiply(&b).unwrap().get(0, 0), i32::MAX);
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));

        assert_eq!("divide".parse::<Operation>(), Err(SpmatError::InvalidOperation));
        assert_eq!("Add".parse::<Operation>(), Err(SpmatError::InvalidOperation));
        assert_eq!("".parse::<Operation>(), Err(SpmatError::InvalidOperation));

        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_operation_apply() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);
        let b = matrix(2, 2, &[(0, 0, 2), (0, 1, 3), (1, 0, 4), (1, 1, 5)]);

        assert_eq!(Operation::Multiply.apply(&a, &b).unwrap(), b);
        assert_eq!(
            triples(&Operation::Subtract.apply(&b, &a).unwrap()),
            [(0, 0, 1), (0, 1, 3), (1, 0, 4), (1, 1, 4)]
        );
    }

    mod properties {
        use super::*;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        const SEED: u64 = 0x5eed;
        const CASES: usize = 200;
        const DENSITIES: [f64; 4] = [0.0, 0.1, 0.5, 1.0];

        fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DokMatrix {
            let density = DENSITIES[rng.gen_range(0..DENSITIES.len())];
            let mut m: DokMatrix = DokMatrix::new(rows, cols);
            for r in 0..rows {
                for c in 0..cols {
                    if rng.gen_bool(density) {
                        m.set(r, c, rng.gen_range(-50..=50)).unwrap();
                    }
                }
            }
            m
        }

        fn random_shape(rng: &mut StdRng) -> (usize, usize) {
            (rng.gen_range(0..=6), rng.gen_range(0..=6))
        }

        fn negate(m: &DokMatrix) -> DokMatrix {
            let (rows, cols) = m.dimensions();
            DokMatrix::from_entries(rows, cols, m.entries().map(|e| (e.row, e.col, -e.value)))
                .unwrap()
        }

        fn assert_no_stored_zero(m: &DokMatrix) {
            assert!(m.entries().all(|e| e.value != 0));
        }

        #[test]
        fn test_add_and_subtract_match_cellwise() {
            let mut rng = StdRng::seed_from_u64(SEED);
            for _ in 0..CASES {
                let (rows, cols) = random_shape(&mut rng);
                let a = random_matrix(&mut rng, rows, cols);
                let b = random_matrix(&mut rng, rows, cols);

                let sum = a.add(&b).unwrap();
                let diff = a.subtract(&b).unwrap();
                assert_eq!(sum.dimensions(), (rows, cols));
                assert_eq!(diff.dimensions(), (rows, cols));
                for r in 0..rows {
                    for c in 0..cols {
                        assert_eq!(sum.get(r, c), a.get(r, c) + b.get(r, c));
                        assert_eq!(diff.get(r, c), a.get(r, c) - b.get(r, c));
                    }
                }
                assert_no_stored_zero(&sum);
                assert_no_stored_zero(&diff);
            }
        }

        #[test]
        fn test_zero_matrix_is_additive_identity() {
            let mut rng = StdRng::seed_from_u64(SEED + 1);
            for _ in 0..CASES {
                let (rows, cols) = random_shape(&mut rng);
                let a = random_matrix(&mut rng, rows, cols);
                let zero = DokMatrix::new(rows, cols);

                assert_eq!(a.add(&zero).unwrap(), a);
                assert_eq!(zero.add(&a).unwrap(), a);
                assert_eq!(a.subtract(&zero).unwrap(), a);
            }
        }

        #[test]
        fn test_add_commutes() {
            let mut rng = StdRng::seed_from_u64(SEED + 2);
            for _ in 0..CASES {
                let (rows, cols) = random_shape(&mut rng);
                let a = random_matrix(&mut rng, rows, cols);
                let b = random_matrix(&mut rng, rows, cols);
                assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
            }
        }

        #[test]
        fn test_subtract_is_add_of_negation() {
            let mut rng = StdRng::seed_from_u64(SEED + 3);
            for _ in 0..CASES {
                let (rows, cols) = random_shape(&mut rng);
                let a = random_matrix(&mut rng, rows, cols);
                let b = random_matrix(&mut rng, rows, cols);
                assert_eq!(a.subtract(&b).unwrap(), a.add(&negate(&b)).unwrap());
                assert!(a.subtract(&a).unwrap().is_empty());
            }
        }

        #[test]
        fn test_multiply_matches_dense_product() {
            let mut rng = StdRng::seed_from_u64(SEED + 4);
            for _ in 0..CASES {
                let (rows, inner) = random_shape(&mut rng);
                let cols = rng.gen_range(0..=6);
                let a = random_matrix(&mut rng, rows, inner);
                let b = random_matrix(&mut rng, inner, cols);

                let product = a.multiply(&b).unwrap();
                assert_eq!(product.dimensions(), (rows, cols));
                for r in 0..rows {
                    for c in 0..cols {
                        let expected: i64 = (0..inner).map(|k| a.get(r, k) * b.get(k, c)).sum();
                        assert_eq!(product.get(r, c), expected);
                    }
                }
                assert_no_stored_zero(&product);
            }
        }

        #[test]
        fn test_multiply_by_identity() {
            let mut rng = StdRng::seed_from_u64(SEED + 5);
            for _ in 0..CASES {
                let (rows, cols) = random_shape(&mut rng);
                let a = random_matrix(&mut rng, rows, cols);
                let left: DokMatrix =
                    DokMatrix::from_entries(rows, rows, (0..rows).map(|i| (i, i, 1))).unwrap();
                let right: DokMatrix =
                    DokMatrix::from_entries(cols, cols, (0..cols).map(|i| (i, i, 1))).unwrap();

                assert_eq!(left.multiply(&a).unwrap(), a);
                assert_eq!(a.multiply(&right).unwrap(), a);
            }
        }

        #[test]
        fn test_mismatched_shapes_are_rejected() {
            let mut rng = StdRng::seed_from_u64(SEED + 6);
            for _ in 0..CASES {
                let left = random_shape(&mut rng);
                let right = random_shape(&mut rng);
                let a = random_matrix(&mut rng, left.0, left.1);
                let b = random_matrix(&mut rng, right.0, right.1);

                assert_eq!(a.add(&b).is_ok(), left == right);
                assert_eq!(a.subtract(&b).is_ok(), left == right);
                assert_eq!(a.multiply(&b).is_ok(), left.1 == right.0);
            }
        }
    }
}
