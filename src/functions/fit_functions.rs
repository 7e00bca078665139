use crate::error::{Result, SciError};
use itertools::izip;
use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;
use strum_macros::{Display, EnumIter};

/// ideal gas constant [J K^-1 mol^-1]
pub const R_GAS: f64 = 8.3144621;
/// 0 degC in Kelvin
pub const T0: f64 = 273.15;
/// 25 degC in Kelvin
pub const T25: f64 = 298.15;
pub const TC25: f64 = 25.0;

///////////////////////////////////////////////////////////////////////////////////////////////
/////////////////////////GENERIC COST FUNCTIONS////////////////////////////////////////////////
///////////////////////////////////////////////////////////////////////////////////////////////

/// Σ|y - func(x, p)| over all points
pub fn cost_abs<P, F>(p: &P, func: F, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64
where
    P: ?Sized,
    F: Fn(f64, &P) -> f64,
{
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (yi - func(xi, p)).abs())
        .sum()
}

/// Σ(y - func(x, p))² over all points
pub fn cost_square<P, F>(p: &P, func: F, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64
where
    P: ?Sized,
    F: Fn(f64, &P) -> f64,
{
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (yi - func(xi, p)).powi(2))
        .sum()
}

/// `cost_` and `cost2_` wrappers of a parameter-vector function with `n` parameters
macro_rules! cost_functions {
    ($func_p:ident, $cost:ident, $cost2:ident, $n:literal) => {
        #[doc = concat!("Σ|y - ", stringify!($func_p), "(x, p)|")]
        pub fn $cost(p: &[f64; $n], x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
            cost_abs(p, $func_p, x, y)
        }
        #[doc = concat!("Σ(y - ", stringify!($func_p), "(x, p))²")]
        pub fn $cost2(p: &[f64; $n], x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
            cost_square(p, $func_p, x, y)
        }
    };
}

///////////////////////////////////////////////////////////////////////////////////////////////
/////////////////////////FIT FUNCTIONS/////////////////////////////////////////////////////////
///////////////////////////////////////////////////////////////////////////////////////////////

/// Arrhenius temperature dependence of rates: exp((T - 25) E / (298.15 R (T + 273.15)))
/// # Arguments
/// * `t` - temperature [degC]
/// * `e` - activation energy [J]
pub fn arrhenius(t: f64, e: f64) -> f64 {
    ((t - TC25) * e / (T25 * R_GAS * (t + T0))).exp()
}
pub fn arrhenius_p(t: f64, p: &[f64; 1]) -> f64 {
    arrhenius(t, p[0])
}
cost_functions!(arrhenius_p, cost_arrhenius, cost2_arrhenius, 1);

/// a + b/x
pub fn f1x(x: f64, a: f64, b: f64) -> f64 {
    a + b / x
}
pub fn f1x_p(x: f64, p: &[f64; 2]) -> f64 {
    f1x(x, p[0], p[1])
}
cost_functions!(f1x_p, cost_f1x, cost2_f1x, 2);

/// a + b exp(c x)
pub fn fexp(x: f64, a: f64, b: f64, c: f64) -> f64 {
    a + b * (c * x).exp()
}
pub fn fexp_p(x: f64, p: &[f64; 3]) -> f64 {
    fexp(x, p[0], p[1], p[2])
}
cost_functions!(fexp_p, cost_fexp, cost2_fexp, 3);

/// normal density with mean `mu` and standard deviation `sig`
pub fn gauss(x: f64, mu: f64, sig: f64) -> f64 {
    (-(x - mu).powi(2) / (2.0 * sig * sig)).exp() / (sig * (2.0 * PI).sqrt())
}
pub fn gauss_p(x: f64, p: &[f64; 2]) -> f64 {
    gauss(x, p[0], p[1])
}
cost_functions!(gauss_p, cost_gauss, cost2_gauss, 2);

/// Lasslop et al. (2010): rectangular hyperbolic light response of GPP with Lloyd & Taylor
/// respiration. The light-saturated uptake decreases exponentially with VPD above 10 hPa
/// (Koerner 1995).
/// # Arguments
/// * `rg` - global radiation [W m-2]
/// * `et` - exponential term of Lloyd & Taylor, i.e. `lloyd_only_rref(T, 1)`
/// * `vpd` - vapour pressure deficit [hPa]
/// * `alpha` - light use efficiency
/// * `beta0` - maximum CO2 uptake rate at light saturation
/// * `k` - e-folding of exponential decrease of `beta0` with VPD
/// * `rref` - respiration at the reference temperature
pub fn lasslop(rg: f64, et: f64, vpd: f64, alpha: f64, beta0: f64, k: f64, rref: f64) -> f64 {
    let beta = if vpd > 10.0 {
        beta0 * (-k * (vpd - 10.0)).clamp(-600.0, 600.0).exp()
    } else {
        beta0
    };
    -alpha * beta * rg / (alpha * rg + beta) + rref * et
}
/// `p` = [alpha, beta0, k, rref]
pub fn lasslop_p(rg: f64, et: f64, vpd: f64, p: &[f64; 4]) -> f64 {
    lasslop(rg, et, vpd, p[0], p[1], p[2], p[3])
}
/// Σ|nee - lasslop_p(rg, et, vpd, p)|
pub fn cost_lasslop(
    p: &[f64; 4],
    rg: ArrayView1<f64>,
    et: ArrayView1<f64>,
    vpd: ArrayView1<f64>,
    nee: ArrayView1<f64>,
) -> f64 {
    izip!(rg.iter(), et.iter(), vpd.iter(), nee.iter())
        .map(|(&r, &e, &v, &n)| (n - lasslop_p(r, e, v, p)).abs())
        .sum()
}
/// Σ(nee - lasslop_p(rg, et, vpd, p))²
pub fn cost2_lasslop(
    p: &[f64; 4],
    rg: ArrayView1<f64>,
    et: ArrayView1<f64>,
    vpd: ArrayView1<f64>,
    nee: ArrayView1<f64>,
) -> f64 {
    izip!(rg.iter(), et.iter(), vpd.iter(), nee.iter())
        .map(|(&r, &e, &v, &n)| (n - lasslop_p(r, e, v, p)).powi(2))
        .sum()
}

/// a x
pub fn line0(x: f64, a: f64) -> f64 {
    a * x
}
pub fn line0_p(x: f64, p: &[f64; 1]) -> f64 {
    line0(x, p[0])
}
cost_functions!(line0_p, cost_line0, cost2_line0, 1);

/// a + b x
pub fn line(x: f64, a: f64, b: f64) -> f64 {
    a + b * x
}
pub fn line_p(x: f64, p: &[f64; 2]) -> f64 {
    line(x, p[0], p[1])
}
cost_functions!(line_p, cost_line, cost2_line, 2);

/// Lloyd & Taylor (1994) with T0 = -46.02 degC (227.13 K) and Tref = 10 degC (283.15 K)
/// # Arguments
/// * `t` - temperature [K]
/// * `rref` - respiration at Tref
/// * `e0` - activation energy [K]
pub fn lloyd_fix(t: f64, rref: f64, e0: f64) -> f64 {
    let tref = 283.15;
    let t0 = 227.13;
    rref * (e0 * (1.0 / (tref - t0) - 1.0 / (t - t0))).exp()
}
pub fn lloyd_fix_p(t: f64, p: &[f64; 2]) -> f64 {
    lloyd_fix(t, p[0], p[1])
}
cost_functions!(lloyd_fix_p, cost_lloyd_fix, cost2_lloyd_fix, 2);

/// Lloyd & Taylor with the exponential term `et` given: rref et
pub fn lloyd_only_rref(et: f64, rref: f64) -> f64 {
    rref * et
}
pub fn lloyd_only_rref_p(et: f64, p: &[f64; 1]) -> f64 {
    lloyd_only_rref(et, p[0])
}
cost_functions!(lloyd_only_rref_p, cost_lloyd_only_rref, cost2_lloyd_only_rref, 1);

/// L / (1 + exp(-k (x - x0)))
pub fn logistic(x: f64, l: f64, k: f64, x0: f64) -> f64 {
    l / (1.0 + (-k * (x - x0)).exp())
}
pub fn logistic_p(x: f64, p: &[f64; 3]) -> f64 {
    logistic(x, p[0], p[1], p[2])
}
cost_functions!(logistic_p, cost_logistic, cost2_logistic, 3);

/// L / (1 + exp(-k (x - x0))) + a
pub fn logistic_offset(x: f64, l: f64, k: f64, x0: f64, a: f64) -> f64 {
    logistic(x, l, k, x0) + a
}
pub fn logistic_offset_p(x: f64, p: &[f64; 4]) -> f64 {
    logistic_offset(x, p[0], p[1], p[2], p[3])
}
cost_functions!(
    logistic_offset_p,
    cost_logistic_offset,
    cost2_logistic_offset,
    4
);

/// c0 + c1 x + c2 x² + ... evaluated with Horner's scheme
pub fn poly(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
pub fn poly_p(x: f64, p: &[f64]) -> f64 {
    poly(x, p)
}
pub fn cost_poly(p: &[f64], x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    cost_abs(p, poly_p, x, y)
}
pub fn cost2_poly(p: &[f64], x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    cost_square(p, poly_p, x, y)
}

/// sqrt(a + b/x)
pub fn sabx(x: f64, a: f64, b: f64) -> f64 {
    (a + b / x).sqrt()
}
pub fn sabx_p(x: f64, p: &[f64; 2]) -> f64 {
    sabx(x, p[0], p[1])
}
cost_functions!(sabx_p, cost_sabx, cost2_sabx, 2);

/// Fit of sequential elementary effects: a (x - b)^c, zero for x < b
pub fn see(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x < b { 0.0 } else { a * (x - b).powf(c) }
}
pub fn see_p(x: f64, p: &[f64; 3]) -> f64 {
    see(x, p[0], p[1], p[2])
}
cost_functions!(see_p, cost_see, cost2_see, 3);

///////////////////////////////////////////////////////////////////////////////////////////////
/////////////////////////RUNTIME SELECTION/////////////////////////////////////////////////////
///////////////////////////////////////////////////////////////////////////////////////////////

/// The single-input fit functions selectable at runtime (by name from a task file or in a loop
/// over all of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum FitFunction {
    Arrhenius,
    F1x,
    Fexp,
    Gauss,
    Line0,
    Line,
    LloydFix,
    LloydOnlyRref,
    Logistic,
    LogisticOffset,
    Poly,
    Sabx,
    See,
}

impl FitFunction {
    /// number of parameters, `None` for the polynomial which takes any number
    pub fn n_params(&self) -> Option<usize> {
        match self {
            FitFunction::Arrhenius | FitFunction::Line0 | FitFunction::LloydOnlyRref => Some(1),
            FitFunction::F1x
            | FitFunction::Gauss
            | FitFunction::Line
            | FitFunction::LloydFix
            | FitFunction::Sabx => Some(2),
            FitFunction::Fexp | FitFunction::Logistic | FitFunction::See => Some(3),
            FitFunction::LogisticOffset => Some(4),
            FitFunction::Poly => None,
        }
    }

    fn check(&self, p: &[f64]) -> Result<()> {
        let ok = match self.n_params() {
            Some(n) => p.len() == n,
            None => !p.is_empty(),
        };
        if !ok {
            return Err(SciError::InvalidOptions(format!(
                "{} takes {} parameters, got {}",
                self,
                self.n_params()
                    .map_or_else(|| "at least 1".to_string(), |n| n.to_string()),
                p.len()
            )));
        }
        Ok(())
    }

    fn eval_unchecked(&self, x: f64, p: &[f64]) -> f64 {
        match self {
            FitFunction::Arrhenius => arrhenius(x, p[0]),
            FitFunction::F1x => f1x(x, p[0], p[1]),
            FitFunction::Fexp => fexp(x, p[0], p[1], p[2]),
            FitFunction::Gauss => gauss(x, p[0], p[1]),
            FitFunction::Line0 => line0(x, p[0]),
            FitFunction::Line => line(x, p[0], p[1]),
            FitFunction::LloydFix => lloyd_fix(x, p[0], p[1]),
            FitFunction::LloydOnlyRref => lloyd_only_rref(x, p[0]),
            FitFunction::Logistic => logistic(x, p[0], p[1], p[2]),
            FitFunction::LogisticOffset => logistic_offset(x, p[0], p[1], p[2], p[3]),
            FitFunction::Poly => poly(x, p),
            FitFunction::Sabx => sabx(x, p[0], p[1]),
            FitFunction::See => see(x, p[0], p[1], p[2]),
        }
    }

    pub fn eval(&self, x: f64, p: &[f64]) -> Result<f64> {
        self.check(p)?;
        Ok(self.eval_unchecked(x, p))
    }

    pub fn eval_array(&self, x: ArrayView1<f64>, p: &[f64]) -> Result<Array1<f64>> {
        self.check(p)?;
        Ok(x.mapv(|xi| self.eval_unchecked(xi, p)))
    }

    /// Σ|y - f(x, p)|
    pub fn cost(&self, p: &[f64], x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<f64> {
        self.check(p)?;
        Ok(cost_abs(p, |xi, p| self.eval_unchecked(xi, p), x, y))
    }

    /// Σ(y - f(x, p))²
    pub fn cost2(&self, p: &[f64], x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<f64> {
        self.check(p)?;
        Ok(cost_square(p, |xi, p| self.eval_unchecked(xi, p), x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lloyd_fix() {
        let (rref, e0, t, resp) = (1.0, 126.0, 293.15, 2.0);
        assert_relative_eq!(lloyd_fix(t, rref, e0), 1.40594, epsilon = 1e-4);
        assert_relative_eq!(lloyd_fix_p(t, &[rref, e0]), 1.40594, epsilon = 1e-4);
        let x = arr1(&[t]);
        let y = arr1(&[resp]);
        assert_relative_eq!(cost_lloyd_fix(&[rref, e0], x.view(), y.view()), 0.594, epsilon = 1e-3);
        assert_relative_eq!(cost2_lloyd_fix(&[rref, e0], x.view(), y.view()), 0.353, epsilon = 1e-3);
        // reference temperature
        assert_relative_eq!(lloyd_fix(283.15, 2.5, 300.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_poly() {
        assert_relative_eq!(poly(293.15, &[2.0, 1.0]), 295.15, epsilon = 1e-10);
        assert_relative_eq!(poly_p(2.0, &[1.0, 0.0, 3.0]), 13.0);
        let x = arr1(&[0.0, 1.0, 2.0]);
        let y = arr1(&[1.0, 2.0, 3.0]);
        assert_relative_eq!(cost2_poly(&[1.0, 1.0], x.view(), y.view()), 0.0);
        assert_relative_eq!(cost_poly(&[0.0, 1.0], x.view(), y.view()), 3.0);
    }

    #[test]
    fn test_simple_functions() {
        assert_relative_eq!(arrhenius(25.0, 50000.0), 1.0);
        assert!(arrhenius(35.0, 50000.0) > 1.0);
        assert_relative_eq!(f1x(2.0, 1.0, 4.0), 3.0);
        assert_relative_eq!(fexp(0.0, 1.0, 2.0, 3.0), 3.0);
        assert_relative_eq!(gauss(0.0, 0.0, 1.0), 0.3989422804014327, epsilon = 1e-12);
        assert_relative_eq!(line0(3.0, 2.0), 6.0);
        assert_relative_eq!(line(3.0, 1.0, 2.0), 7.0);
        assert_relative_eq!(lloyd_only_rref(0.5, 4.0), 2.0);
        assert_relative_eq!(logistic(1.0, 4.0, 2.0, 1.0), 2.0);
        assert_relative_eq!(logistic_offset(1.0, 4.0, 2.0, 1.0, 1.0), 3.0);
        assert_relative_eq!(sabx(2.0, 1.0, 2.0), 2f64.sqrt());
        assert_relative_eq!(see(3.0, 2.0, 1.0, 2.0), 8.0);
        assert_relative_eq!(see(0.5, 2.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_lasslop() {
        assert_relative_eq!(lasslop(100.0, 1.0, 5.0, 0.1, 10.0, 0.05, 2.0), -3.0, epsilon = 1e-12);
        let beta = 10.0 * (-0.5f64).exp();
        let expected = -0.1 * beta * 100.0 / (10.0 + beta) + 2.0;
        assert_relative_eq!(lasslop(100.0, 1.0, 20.0, 0.1, 10.0, 0.05, 2.0), expected, epsilon = 1e-12);
        let p = [0.1, 10.0, 0.05, 2.0];
        let rg = arr1(&[100.0, 100.0]);
        let et = arr1(&[1.0, 1.0]);
        let vpd = arr1(&[5.0, 5.0]);
        let nee = arr1(&[-2.0, -4.0]);
        assert_relative_eq!(cost_lasslop(&p, rg.view(), et.view(), vpd.view(), nee.view()), 2.0, epsilon = 1e-12);
        assert_relative_eq!(cost2_lasslop(&p, rg.view(), et.view(), vpd.view(), nee.view()), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generic_costs() {
        let x = arr1(&[1.0, 2.0, 4.0]);
        let y = arr1(&[2.0, 1.0, 0.0]);
        assert_relative_eq!(cost_abs(&[0.0, 2.0], f1x_p, x.view(), y.view()), 0.5);
        assert_relative_eq!(cost_square(&[0.0, 2.0], f1x_p, x.view(), y.view()), 0.25);
        assert_relative_eq!(cost_f1x(&[0.0, 2.0], x.view(), y.view()), 0.5);
        assert_relative_eq!(cost2_line(&[1.0, 0.0], x.view(), y.view()), 2.0);
    }

    #[test]
    fn test_fit_function_enum() {
        for f in FitFunction::iter() {
            let n = f.n_params().unwrap_or(2);
            let p = vec![1.0; n];
            assert!(f.eval(2.0, &p).unwrap().is_finite(), "{}", f);
            assert!(f.eval(2.0, &vec![1.0; n + 1]).is_err() || f == FitFunction::Poly);
        }
        assert!(matches!(
            FitFunction::Line.eval(1.0, &[1.0]),
            Err(SciError::InvalidOptions(_))
        ));
        assert!(FitFunction::Poly.eval(1.0, &[]).is_err());
        let y = FitFunction::Line.eval_array(arr1(&[0.0, 1.0]).view(), &[1.0, 2.0]).unwrap();
        assert_eq!(y, arr1(&[1.0, 3.0]));
        let c = FitFunction::LloydFix
            .cost(&[1.0, 126.0], arr1(&[293.15]).view(), arr1(&[2.0]).view())
            .unwrap();
        assert_relative_eq!(c, 0.594, epsilon = 1e-3);
        assert_eq!(FitFunction::LloydOnlyRref.to_string(), "LloydOnlyRref");
    }
}
