//! Fit, cost and test functions for use with generic optimizers.
//!
//! Every fit function `f` comes in the forms
//! 1. `f(x, p1, p2, ...)` with the parameters as separate arguments,
//! 2. `f_p(x, &p)` with the parameters in one array,
//! 3. `cost_f(&p, x, y)` = Σ|y - f_p(x, p)| and `cost2_f(&p, x, y)` = Σ(y - f_p(x, p))².
//!
//! The generic [`cost_abs`] and [`cost_square`] take any `f_p`.
//! ```
//! use ndarray::arr1;
//! use RustedEnvSci::functions::{cost_lloyd_fix, lloyd_fix};
//! assert!((lloyd_fix(293.15, 1.0, 126.0) - 1.406).abs() < 1e-3);
//! let cost = cost_lloyd_fix(&[1.0, 126.0], arr1(&[293.15]).view(), arr1(&[2.0]).view());
//! assert!((cost - 0.594).abs() < 1e-3);
//! ```
pub mod fit_functions;
pub mod opti_test_functions;
pub mod sa_test_functions;

pub use fit_functions::*;
pub use opti_test_functions::{
    ackley, goldstein_price, griewank, rastrigin, rosenbrock, six_hump_camelback,
};
pub use sa_test_functions::{
    MorrisCoefficients, OakleyOHaganCoefficients, b, evaluate_samples, g, g_star, k, morris,
    oakley_ohagan, saltelli, sample_uniform,
};
