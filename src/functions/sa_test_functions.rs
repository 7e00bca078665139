//! Test functions of sensitivity analysis. Each evaluates one sample `x`;
//! [`evaluate_samples`] maps a function over the rows of a sample matrix.
//!
//! References
//! * Saltelli et al. (2008) Global Sensitivity Analysis. The Primer, p. 111
//! * Saltelli et al. (2010) Variance based sensitivity analysis of model output,
//!   Computer Physics Communications 181, 259-270
//! * Morris (1991) Factorial sampling plans for preliminary computational experiments,
//!   Technometrics 33, 161-174
//! * Oakley & O'Hagan (2004) Probabilistic sensitivity analysis of complex models,
//!   J. R. Statist. Soc. B 66, 751-769
use crate::error::{Result, SciError};
use itertools::Itertools;
use ndarray::{Array1, Array2, Array3, Array4, ArrayView2};
use rand::Rng;

fn same_len(what: &str, x: &[f64], other: &[f64]) -> Result<()> {
    if x.len() != other.len() {
        return Err(SciError::ShapeMismatch(format!(
            "{}: sample has {} factors, coefficients {}",
            what,
            x.len(),
            other.len()
        )));
    }
    Ok(())
}

/// G function: Π (|4 x_i - 2| + a_i) / (1 + a_i)
pub fn g(x: &[f64], a: &[f64]) -> Result<f64> {
    same_len("g", x, a)?;
    Ok(x.iter()
        .zip(a)
        .map(|(xi, ai)| ((4.0 * xi - 2.0).abs() + ai) / (1.0 + ai))
        .product())
}

/// G* function: Π ((1 + α_i) |2 (x_i + δ_i - floor(x_i + δ_i)) - 1|^α_i + a_i) / (1 + a_i)
pub fn g_star(x: &[f64], alpha: &[f64], delta: &[f64], a: &[f64]) -> Result<f64> {
    same_len("g_star", x, alpha)?;
    same_len("g_star", x, delta)?;
    same_len("g_star", x, a)?;
    let mut y = 1.0;
    for i in 0..x.len() {
        let shifted = x[i] + delta[i];
        let frac = shifted - shifted.floor();
        y *= ((1.0 + alpha[i]) * (2.0 * frac - 1.0).abs().powf(alpha[i]) + a[i]) / (1.0 + a[i]);
    }
    Ok(y)
}

/// B function: Π (k - x_i) / (k - 0.5) with k the number of factors
pub fn b(x: &[f64]) -> f64 {
    let k = x.len() as f64;
    x.iter().map(|xi| (k - xi) / (k - 0.5)).product()
}

/// K function: Σ_i (-1)^i Π_{j<=i} x_j with 1-based i
pub fn k(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut prod = 1.0;
    let mut sign = 1.0;
    for xi in x {
        prod *= xi;
        sign = -sign;
        sum += sign * prod;
    }
    sum
}

/// linear model Σ Ω_i Z_i
pub fn saltelli(z: &[f64], omega: &[f64]) -> Result<f64> {
    same_len("saltelli", z, omega)?;
    Ok(z.iter().zip(omega).map(|(zi, oi)| zi * oi).sum())
}

/// coefficients of the 20-factor Morris function
#[derive(Debug, Clone, PartialEq)]
pub struct MorrisCoefficients {
    pub beta0: f64,
    /// first order, length 20
    pub beta1: Array1<f64>,
    /// second order, only `i < j` used
    pub beta2: Array2<f64>,
    /// third order, only `i < j < l` used
    pub beta3: Array3<f64>,
    /// fourth order, only `i < j < l < s` used
    pub beta4: Array4<f64>,
}

impl MorrisCoefficients {
    pub const N: usize = 20;

    /// Morris (1991): β_i = 20 for i <= 10, β_ij = -15 for i, j <= 6, β_ijl = -10 for
    /// i, j, l <= 5 and β_ijls = 5 for i, j, l, s <= 4. The remaining coefficients, normally
    /// drawn from a standard normal distribution, are zero here.
    pub fn standard() -> Self {
        let n = Self::N;
        let beta1 = Array1::from_shape_fn(n, |i| if i < 10 { 20.0 } else { 0.0 });
        let beta2 = Array2::from_shape_fn((n, n), |(i, j)| if i < 6 && j < 6 { -15.0 } else { 0.0 });
        let beta3 = Array3::from_shape_fn((n, n, n), |(i, j, l)| {
            if i < 5 && j < 5 && l < 5 { -10.0 } else { 0.0 }
        });
        let beta4 = Array4::from_shape_fn((n, n, n, n), |(i, j, l, s)| {
            if i < 4 && j < 4 && l < 4 && s < 4 { 5.0 } else { 0.0 }
        });
        MorrisCoefficients {
            beta0: 0.0,
            beta1,
            beta2,
            beta3,
            beta4,
        }
    }

    fn check(&self) -> Result<()> {
        let n = Self::N;
        if self.beta1.len() != n
            || self.beta2.shape() != [n, n]
            || self.beta3.shape() != [n, n, n]
            || self.beta4.shape() != [n, n, n, n]
        {
            return Err(SciError::ShapeMismatch(
                "Morris coefficients must be of size 20, 20x20, 20x20x20 and 20x20x20x20".to_string(),
            ));
        }
        Ok(())
    }
}

/// Morris function of 20 factors in [0, 1]
pub fn morris(x: &[f64], coeffs: &MorrisCoefficients) -> Result<f64> {
    coeffs.check()?;
    let n = MorrisCoefficients::N;
    if x.len() != n {
        return Err(SciError::ShapeMismatch(format!(
            "morris: sample has {} factors, needs {}",
            x.len(),
            n
        )));
    }
    // factors 3, 5 and 7 (1-based) are transformed non-linearly
    let w: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| match i {
            2 | 4 | 6 => 2.0 * (1.1 * xi / (xi + 0.1) - 0.5),
            _ => 2.0 * (xi - 0.5),
        })
        .collect();

    let mut y = coeffs.beta0;
    y += w.iter().zip(coeffs.beta1.iter()).map(|(wi, bi)| wi * bi).sum::<f64>();
    for (i, j) in (0..n).tuple_combinations() {
        y += coeffs.beta2[[i, j]] * w[i] * w[j];
    }
    for (i, j, l) in (0..n).tuple_combinations() {
        y += coeffs.beta3[[i, j, l]] * w[i] * w[j] * w[l];
    }
    for (i, j, l, s) in (0..n).tuple_combinations() {
        y += coeffs.beta4[[i, j, l, s]] * w[i] * w[j] * w[l] * w[s];
    }
    Ok(y)
}

/// coefficients of the Oakley & O'Hagan function
#[derive(Debug, Clone, PartialEq)]
pub struct OakleyOHaganCoefficients {
    pub a1: Array1<f64>,
    pub a2: Array1<f64>,
    pub a3: Array1<f64>,
    pub m: Array2<f64>,
}

impl OakleyOHaganCoefficients {
    pub const N: usize = 15;

    pub fn new(a1: Array1<f64>, a2: Array1<f64>, a3: Array1<f64>, m: Array2<f64>) -> Result<Self> {
        let n = Self::N;
        if a1.len() != n || a2.len() != n || a3.len() != n || m.shape() != [n, n] {
            return Err(SciError::ShapeMismatch(
                "Oakley & O'Hagan coefficients must be three vectors of 15 and a 15x15 matrix"
                    .to_string(),
            ));
        }
        Ok(OakleyOHaganCoefficients { a1, a2, a3, m })
    }
}

/// Oakley & O'Hagan function of 15 factors: a1·x + a2·sin(x) + a3·cos(x) + xᵀ M x
pub fn oakley_ohagan(x: &[f64], coeffs: &OakleyOHaganCoefficients) -> Result<f64> {
    if x.len() != OakleyOHaganCoefficients::N {
        return Err(SciError::ShapeMismatch(format!(
            "oakley_ohagan: sample has {} factors, needs {}",
            x.len(),
            OakleyOHaganCoefficients::N
        )));
    }
    let xv = Array1::from(x.to_vec());
    let linear = coeffs.a1.dot(&xv) + coeffs.a2.dot(&xv.mapv(f64::sin)) + coeffs.a3.dot(&xv.mapv(f64::cos));
    Ok(linear + xv.dot(&coeffs.m.dot(&xv)))
}

/// `f` applied to every row (sample) of `samples`
pub fn evaluate_samples<F>(f: F, samples: ArrayView2<f64>) -> Array1<f64>
where
    F: Fn(&[f64]) -> f64,
{
    samples
        .rows()
        .into_iter()
        .map(|row| match row.as_slice() {
            Some(s) => f(s),
            None => f(&row.to_vec()),
        })
        .collect()
}

/// `n` samples of `k` factors, uniform in [0, 1)
pub fn sample_uniform<R: Rng>(n: usize, k: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((n, k), |_| rng.random::<f64>())
}
