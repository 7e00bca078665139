use crate::error::Result;
use crate::functions::{
    FitFunction, MorrisCoefficients, ackley, cost2_lloyd_fix, cost_lloyd_fix, evaluate_samples, g,
    griewank, lloyd_fix, morris, rosenbrock, sample_uniform, six_hump_camelback,
};
use crate::isotopes::{AlphaKinOptions, WaterIsotopologue, alpha_kin_h2o};
use log::info;
use ndarray::{Array1, arr1};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

pub fn function_examples(example: usize) -> Result<()> {
    match example {
        0 => {
            // ecosystem respiration against temperature, brute force grid search over E0
            let t = arr1(&[278.15, 283.15, 288.15, 293.15, 298.15]);
            let resp: Array1<f64> = t.mapv(|ti| lloyd_fix(ti, 2.0, 180.0));
            let mut best = (f64::INFINITY, 0.0);
            for e0 in (50..=300).map(f64::from) {
                let c = cost2_lloyd_fix(&[2.0, e0], t.view(), resp.view());
                if c < best.0 {
                    best = (c, e0);
                }
            }
            println!("best E0 {} with squared cost {:e}", best.1, best.0);
            println!(
                "absolute cost at E0 = 100: {}",
                cost_lloyd_fix(&[2.0, 100.0], t.view(), resp.view())
            );
        }
        1 => {
            let x = arr1(&[0.0, 1.0, 2.0, 3.0]);
            for f in FitFunction::iter() {
                let p = vec![1.0; f.n_params().unwrap_or(3)];
                let y = f.eval_array(x.view(), &p)?;
                println!("{} with p = {:?}: {}", f, p, y);
            }
        }
        2 => {
            println!("ackley(0) = {}", ackley(&[0.0, 0.0, 0.0]));
            println!("griewank(0) = {}", griewank(&[0.0, 0.0]));
            println!("rosenbrock(1, 1) = {}", rosenbrock(&[1.0, 1.0]));
            println!(
                "six hump camelback minimum = {}",
                six_hump_camelback(&[0.0898, -0.7126])
            );
            let mut rng = StdRng::seed_from_u64(42);
            let samples = sample_uniform(100, 4, &mut rng);
            let a = [0.0, 1.0, 4.5, 9.0];
            let y = evaluate_samples(|x| g(x, &a).unwrap_or(f64::NAN), samples.view());
            info!("G function on {} samples", y.len());
            println!("mean of G function: {}", y.mean().unwrap_or(f64::NAN));
            let coeffs = MorrisCoefficients::standard();
            let samples = sample_uniform(10, MorrisCoefficients::N, &mut rng);
            let y = evaluate_samples(|x| morris(x, &coeffs).unwrap_or(f64::NAN), samples.view());
            println!("Morris function: {}", y);
        }
        3 => {
            for iso in WaterIsotopologue::iter() {
                let eps = alpha_kin_h2o(Some(iso), &AlphaKinOptions::new().eps(true));
                println!("kinetic fractionation of {}: {:.4} permil", iso, eps * 1000.0);
            }
        }
        _ => println!("no function example {}", example),
    }
    Ok(())
}
