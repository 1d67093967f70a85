use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

use crate::{RegressionErr, Result};

/// Accumulates the normal equations `XᵀX w = Xᵀy` row by row and adds `ridge`
/// to every diagonal entry of the Gram matrix.
///
/// # Arguments
/// * `x` - The `(n, k)` design matrix.
/// * `y` - The `n` targets.
/// * `ridge` - The regularization added to the diagonal.
///
/// # Returns
/// The `(k, k)` Gram matrix and the `k` right hand side, or a `SizeMismatch`
/// error if `x` and `y` disagree on the row count.
pub fn normal_equations(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    ridge: f64,
) -> Result<(Array2<f64>, Array1<f64>)> {
    if y.len() != x.nrows() {
        return Err(RegressionErr::SizeMismatch {
            a: "targets",
            b: "design matrix rows",
            got: y.len(),
            expected: x.nrows(),
        });
    }

    let k = x.ncols();
    let mut xtx = Array2::<f64>::zeros((k, k));
    let mut xty = Array1::<f64>::zeros(k);

    for (row, &target) in x.rows().into_iter().zip(y) {
        for a in 0..k {
            xty[a] += row[a] * target;
            for b in 0..k {
                xtx[[a, b]] += row[a] * row[b];
            }
        }
    }

    for i in 0..k {
        xtx[[i, i]] += ridge;
    }

    Ok((xtx, xty))
}

/// Solves `a w = b` by Gauss-Jordan elimination with partial pivoting.
///
/// For each column the pivot is the row at or below the diagonal with the
/// largest magnitude in that column. A pivot smaller than `epsilon` leaves the
/// column unreduced, so rank deficient systems never produce an error; the
/// affected weights keep whatever value elimination left in the right hand
/// side.
///
/// # Returns
/// The solution read off the reduced augmented column, or a `SizeMismatch`
/// error if `a` is not square or `b` has the wrong length.
pub fn gaussian_solve(
    a: ArrayView2<f64>,
    b: ArrayView1<f64>,
    epsilon: f64,
) -> Result<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(RegressionErr::SizeMismatch {
            a: "coefficient columns",
            b: "coefficient rows",
            got: a.ncols(),
            expected: n,
        });
    }

    if b.len() != n {
        return Err(RegressionErr::SizeMismatch {
            a: "right hand side",
            b: "coefficient rows",
            got: b.len(),
            expected: n,
        });
    }

    let mut aug = Array2::<f64>::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(&a);
    aug.column_mut(n).assign(&b);

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if aug[[row, col]].abs() > aug[[pivot, col]].abs() {
                pivot = row;
            }
        }

        if aug[[pivot, col]].abs() < epsilon {
            continue;
        }

        if pivot != col {
            for j in 0..=n {
                aug.swap([col, j], [pivot, j]);
            }
        }

        let pivot_val = aug[[col, col]];
        for j in col..=n {
            aug[[col, j]] /= pivot_val;
        }

        for row in 0..n {
            if row == col {
                continue;
            }

            let factor = aug[[row, col]];
            for j in col..=n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    Ok(aug.column(n).to_owned())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    const EPS: f64 = 1e-8;

    fn assert_close(got: &Array1<f64>, expected: &[f64]) {
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-9, "got {got:?}, expected {expected:?}");
        }
    }

    #[test]
    fn solves_small_system() {
        let a = array![[2., 1.], [1., 3.]];
        let b = array![3., 5.];

        let w = gaussian_solve(a.view(), b.view(), EPS).unwrap();
        assert_close(&w, &[0.8, 1.4]);
    }

    #[test]
    fn pivots_on_zero_diagonal() {
        let a = array![[0., 1., 0.], [1., 0., 0.], [0., 0., 2.]];
        let b = array![4., 5., 6.];

        let w = gaussian_solve(a.view(), b.view(), EPS).unwrap();
        assert_close(&w, &[5., 4., 3.]);
    }

    #[test]
    fn skips_degenerate_column() {
        let a = array![[0., 0.], [0., 1.]];
        let b = array![0., 2.];

        let w = gaussian_solve(a.view(), b.view(), EPS).unwrap();
        assert_close(&w, &[0., 2.]);
    }

    #[test]
    fn singular_system_stays_finite() {
        let a = array![[1., 1.], [1., 1.]];
        let b = array![2., 2.];

        let w = gaussian_solve(a.view(), b.view(), EPS).unwrap();
        assert!(w.iter().all(|v| v.is_finite()));
        assert_close(&w, &[2., 0.]);
    }

    #[test]
    fn rejects_non_square() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array1::<f64>::zeros(2);

        assert!(matches!(
            gaussian_solve(a.view(), b.view(), EPS),
            Err(RegressionErr::SizeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_short_rhs() {
        let a = Array2::<f64>::eye(2);
        let b = Array1::<f64>::zeros(1);

        assert!(gaussian_solve(a.view(), b.view(), EPS).is_err());
    }

    #[test]
    fn normal_equations_with_ridge() {
        let x = array![[1., 2.], [3., 4.]];
        let y = array![1., 1.];

        let (xtx, xty) = normal_equations(x.view(), y.view(), 0.5).unwrap();

        assert_eq!(xtx, array![[10.5, 14.], [14., 20.5]]);
        assert_eq!(xty, array![4., 6.]);
    }

    #[test]
    fn normal_equations_size_mismatch() {
        let x = Array2::<f64>::zeros((3, 1));
        let y = Array1::<f64>::zeros(2);

        assert!(normal_equations(x.view(), y.view(), 0.).is_err());
    }
}
