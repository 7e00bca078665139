//! Division of two arrays returning a substitute value where the denominator vanishes.
//!
//! `a / b` is computed where `|b| > |prec|`, everywhere else the result is `otherwise`
//! (NaN by default). Inputs are broadcast against each other with numpy rules, so a scalar
//! (0-dimensional array) or a length-1 axis stretches to the other operand.
//! ```
//! use ndarray::arr1;
//! use RustedEnvSci::arrays::{division, DivisionOptions};
//! let q = division(&arr1(&[1.0, 1.0, 1.0]), &arr1(&[2.0, 1.0, 0.0]), &DivisionOptions::new().otherwise(0.0)).unwrap();
//! assert_eq!(q.into_raw_vec_and_offset().0, vec![0.5, 1.0, 0.0]);
//! ```
use crate::arrays::masked::MaskedArray;
use crate::error::{Result, SciError};
use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn, Zip};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivisionOptions {
    /// value returned where `|b| <= |prec|`
    pub otherwise: f64,
    pub prec: f64,
}

impl Default for DivisionOptions {
    fn default() -> Self {
        DivisionOptions {
            otherwise: f64::NAN,
            prec: 0.0,
        }
    }
}

impl DivisionOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn otherwise(mut self, otherwise: f64) -> Self {
        self.otherwise = otherwise;
        self
    }
    pub fn prec(mut self, prec: f64) -> Self {
        self.prec = prec;
        self
    }
}

/// scalar kernel shared by all variants
#[inline]
pub fn division_value(a: f64, b: f64, opts: &DivisionOptions) -> f64 {
    if b.abs() > opts.prec.abs() {
        a / b
    } else {
        opts.otherwise
    }
}

/// numpy broadcasting: shapes are aligned at the trailing axis, an axis of length 1 stretches
fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>> {
    let n = a.len().max(b.len());
    let mut shape = vec![0; n];
    for i in 0..n {
        let da = if i < n - a.len() { 1 } else { a[i - (n - a.len())] };
        let db = if i < n - b.len() { 1 } else { b[i - (n - b.len())] };
        shape[i] = match (da, db) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => {
                return Err(SciError::ShapeMismatch(format!(
                    "operands could not be broadcast together with shapes {:?} {:?}",
                    a, b
                )));
            }
        };
    }
    Ok(shape)
}

pub fn division<SA, SB, DA, DB>(
    a: &ArrayBase<SA, DA>,
    b: &ArrayBase<SB, DB>,
    opts: &DivisionOptions,
) -> Result<ArrayD<f64>>
where
    SA: Data<Elem = f64>,
    SB: Data<Elem = f64>,
    DA: Dimension,
    DB: Dimension,
{
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let mismatch = || SciError::ShapeMismatch(format!("cannot broadcast to {:?}", shape));
    let av = a.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let bv = b.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    Ok(Zip::from(av)
        .and(bv)
        .map_collect(|&x, &y| division_value(x, y, opts)))
}

/// short name of [`division`]
pub fn div<SA, SB, DA, DB>(
    a: &ArrayBase<SA, DA>,
    b: &ArrayBase<SB, DB>,
    opts: &DivisionOptions,
) -> Result<ArrayD<f64>>
where
    SA: Data<Elem = f64>,
    SB: Data<Elem = f64>,
    DA: Dimension,
    DB: Dimension,
{
    division(a, b, opts)
}

/// division by a single denominator, shape of `a` is kept
pub fn division_scalar<S, D>(a: &ArrayBase<S, D>, b: f64, opts: &DivisionOptions) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.mapv(|x| division_value(x, b, opts))
}

/// Masked variant: the result is masked where `b` is masked, holds `a / b` (masked where `a`
/// is masked) where `|b| > |prec|` and holds an unmasked `otherwise` elsewhere.
pub fn division_masked<DA, DB>(
    a: &MaskedArray<f64, DA>,
    b: &MaskedArray<f64, DB>,
    opts: &DivisionOptions,
) -> Result<MaskedArray<f64, IxDyn>>
where
    DA: Dimension,
    DB: Dimension,
{
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let mismatch = || SciError::ShapeMismatch(format!("cannot broadcast to {:?}", shape));
    let ad = a.data().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let am = a.mask().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let bd = b.data().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let bm = b.mask().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let prec = opts.prec.abs();
    let combined = Zip::from(ad)
        .and(am)
        .and(bd)
        .and(bm)
        .map_collect(|&x, &x_masked, &y, &y_masked| {
            if y_masked {
                (f64::NAN, true)
            } else if y.abs() > prec {
                (x / y, x_masked)
            } else {
                (opts.otherwise, false)
            }
        });
    let data = combined.map(|(v, _)| *v);
    let mask = combined.map(|(_, m)| *m);
    MaskedArray::new(data, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr0, arr1, arr2};

    fn to_vec(a: ArrayD<f64>) -> Vec<f64> {
        a.iter().copied().collect()
    }

    #[test]
    fn test_division_by_scalar_array() {
        let q = division(&arr1(&[1.0, 2.0, 3.0]), &arr0(2.0), &DivisionOptions::new()).unwrap();
        assert_eq!(to_vec(q), vec![0.5, 1.0, 1.5]);
        let q = division_scalar(&arr1(&[1.0, 2.0, 3.0]), 2.0, &DivisionOptions::new());
        assert_eq!(q, arr1(&[0.5, 1.0, 1.5]));
    }

    #[test]
    fn test_division_default_nan() {
        let q = to_vec(division(&arr1(&[1.0, 1.0, 1.0]), &arr1(&[2.0, 1.0, 0.0]), &DivisionOptions::new()).unwrap());
        assert_relative_eq!(q[0], 0.5);
        assert_relative_eq!(q[1], 1.0);
        assert!(q[2].is_nan());
    }

    #[test]
    fn test_division_otherwise_and_prec() {
        let a = arr1(&[1.0, 1.0, 1.0]);
        let b = arr1(&[2.0, 1.0, 0.0]);
        let q = to_vec(div(&a, &b, &DivisionOptions::new().otherwise(0.0)).unwrap());
        assert_eq!(q, vec![0.5, 1.0, 0.0]);
        let q = to_vec(division(&a, &b, &DivisionOptions::new().prec(1.0)).unwrap());
        assert_relative_eq!(q[0], 0.5);
        assert!(q[1].is_nan());
        assert!(q[2].is_nan());
        // sign of prec does not matter
        let q = to_vec(division(&a, &b, &DivisionOptions::new().prec(-1.0).otherwise(-9.0)).unwrap());
        assert_eq!(q, vec![0.5, -9.0, -9.0]);
    }

    #[test]
    fn test_division_broadcast_2d() {
        let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = arr1(&[1.0, 0.0]);
        let q = division(&a, &b, &DivisionOptions::new().otherwise(-1.0)).unwrap();
        assert_eq!(q.shape(), &[2, 2]);
        assert_eq!(to_vec(q), vec![1.0, -1.0, 3.0, -1.0]);
        let bad = division(&a, &arr1(&[1.0, 2.0, 3.0]), &DivisionOptions::new());
        assert!(matches!(bad, Err(SciError::ShapeMismatch(_))));
    }

    #[test]
    fn test_division_masked() {
        let a = MaskedArray::from_vec(vec![1.0, 1.0, 1.0, 1.0], vec![false, true, false, false]).unwrap();
        let b = MaskedArray::from_vec(vec![2.0, 1.0, 0.0, 4.0], vec![false, false, false, true]).unwrap();
        let q = division_masked(&a, &b, &DivisionOptions::new().otherwise(0.0)).unwrap();
        assert_eq!(q.mask().iter().copied().collect::<Vec<_>>(), vec![false, true, false, true]);
        let data: Vec<f64> = q.data().iter().copied().collect();
        assert_relative_eq!(data[0], 0.5);
        assert_relative_eq!(data[2], 0.0);
    }
}
