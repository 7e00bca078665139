//! Standard test functions of global optimisation.
//! Known optima: ackley 0 at origin, griewank 0 at origin, goldstein_price 3 at (0, -1),
//! rastrigin -2 at (0, 0), rosenbrock 0 at (1, 1), six_hump_camelback -1.031628453489877 at
//! (-0.08983, 0.7126) and (0.08983, -0.7126).
use std::f64::consts::{E, PI};

/// Ackley function for two or more parameters, search domain [-32.768, 32.768]
pub fn ackley(x: &[f64]) -> f64 {
    let a = 20.0;
    let b = 0.2;
    let c = 2.0 * PI;
    let n = x.len() as f64;
    let s1: f64 = x.iter().map(|xi| xi * xi).sum();
    let s2: f64 = x.iter().map(|xi| (c * xi).cos()).sum();
    -a * (-b * (s1 / n).sqrt()).exp() - (s2 / n).exp() + a + E
}

/// Griewank function; the quadratic term is divided by 200 for two parameters (domain
/// [-100, 100]) and by 4000 otherwise (domain [-600, 600])
pub fn griewank(x: &[f64]) -> f64 {
    let d = if x.len() == 2 { 200.0 } else { 4000.0 };
    let s: f64 = x.iter().map(|xi| xi * xi).sum();
    let p: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    s / d - p + 1.0
}

/// Goldstein-Price function, domain [-2, 2]
pub fn goldstein_price(x: &[f64; 2]) -> f64 {
    let [x1, x2] = *x;
    let a = 1.0
        + (x1 + x2 + 1.0).powi(2)
            * (19.0 - 14.0 * x1 + 3.0 * x1 * x1 - 14.0 * x2 + 6.0 * x1 * x2 + 3.0 * x2 * x2);
    let b = 30.0
        + (2.0 * x1 - 3.0 * x2).powi(2)
            * (18.0 - 32.0 * x1 + 12.0 * x1 * x1 + 48.0 * x2 - 36.0 * x1 * x2 + 27.0 * x2 * x2);
    a * b
}

/// two-parameter Rastrigin function, domain [-1, 1]
pub fn rastrigin(x: &[f64; 2]) -> f64 {
    let [x1, x2] = *x;
    x1 * x1 + x2 * x2 - (18.0 * x1).cos() - (18.0 * x2).cos()
}

/// Rosenbrock's banana function
pub fn rosenbrock(x: &[f64; 2]) -> f64 {
    let [x1, x2] = *x;
    100.0 * (x2 - x1 * x1).powi(2) + (1.0 - x1).powi(2)
}

/// six-hump camelback function, domain [-5, 5]
pub fn six_hump_camelback(x: &[f64; 2]) -> f64 {
    let [x1, x2] = *x;
    (4.0 - 2.1 * x1 * x1 + x1.powi(4) / 3.0) * x1 * x1 + x1 * x2 + (-4.0 + 4.0 * x2 * x2) * x2 * x2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_optima() {
        assert_relative_eq!(ackley(&[0.0, 0.0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ackley(&[0.0; 5]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(griewank(&[0.0, 0.0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(griewank(&[0.0; 10]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(goldstein_price(&[0.0, -1.0]), 3.0, epsilon = 1e-12);
        assert_relative_eq!(rastrigin(&[0.0, 0.0]), -2.0, epsilon = 1e-12);
        assert_relative_eq!(rosenbrock(&[1.0, 1.0]), 0.0);
        assert_relative_eq!(six_hump_camelback(&[-0.08983, 0.7126]), -1.031628453489877, epsilon = 1e-6);
        assert_relative_eq!(six_hump_camelback(&[0.08983, -0.7126]), -1.031628453489877, epsilon = 1e-6);
    }

    #[test]
    fn test_away_from_optima() {
        assert!(ackley(&[1.0, 1.0]) > 0.0);
        assert!(griewank(&[10.0, 10.0]) > 0.0);
        assert!(goldstein_price(&[1.0, 1.0]) > 3.0);
        assert_relative_eq!(rosenbrock(&[0.0, 0.0]), 1.0);
        // divisor switches with the number of parameters
        assert_relative_eq!(
            griewank(&[2.0, 0.0]) - griewank(&[2.0, 0.0, 0.0]),
            4.0 / 200.0 - 4.0 / 4000.0,
            epsilon = 1e-12
        );
    }
}
