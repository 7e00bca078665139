//! Kinetic fractionation of water isotopologues during evaporation.
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum WaterIsotopologue {
    /// HDO
    Hdo,
    /// H2 18O
    H218O,
}

/// Switches of [`alpha_kin_h2o`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaKinOptions {
    /// return the fractionation ε = α - 1 instead of α
    pub eps: bool,
    /// α > 1, i.e. the inverse of the diffusivity ratio
    pub greater1: bool,
    /// turbulent boundary layer: α^(2/3)
    pub boundary: bool,
    /// diffusivities of Cappa et al. (2003) instead of Merlivat (1978)
    pub cappa: bool,
}

impl Default for AlphaKinOptions {
    fn default() -> Self {
        AlphaKinOptions {
            eps: false,
            greater1: true,
            boundary: false,
            cappa: false,
        }
    }
}

impl AlphaKinOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn eps(mut self, eps: bool) -> Self {
        self.eps = eps;
        self
    }
    pub fn greater1(mut self, greater1: bool) -> Self {
        self.greater1 = greater1;
        self
    }
    pub fn boundary(mut self, boundary: bool) -> Self {
        self.boundary = boundary;
        self
    }
    pub fn cappa(mut self, cappa: bool) -> Self {
        self.cappa = cappa;
        self
    }
}

/// Kinetic fractionation factor of molecular diffusion of a water isotopologue in air.
/// Without isotopologue the factor is 1.
/// ```
/// use RustedEnvSci::isotopes::{alpha_kin_h2o, AlphaKinOptions, WaterIsotopologue};
/// let eps = alpha_kin_h2o(Some(WaterIsotopologue::Hdo), &AlphaKinOptions::new().eps(true));
/// assert!((eps * 1000.0 - 25.1153).abs() < 1e-4);
/// ```
pub fn alpha_kin_h2o(isotope: Option<WaterIsotopologue>, opts: &AlphaKinOptions) -> f64 {
    let mut alpha: f64 = match (isotope, opts.cappa) {
        (Some(WaterIsotopologue::Hdo), false) => 0.9755,
        (Some(WaterIsotopologue::Hdo), true) => 0.9839,
        (Some(WaterIsotopologue::H218O), false) => 0.9727,
        (Some(WaterIsotopologue::H218O), true) => 0.9691,
        (None, _) => 1.0,
    };
    if opts.boundary {
        alpha = alpha.powf(2.0 / 3.0);
    }
    if opts.greater1 {
        alpha = 1.0 / alpha;
    }
    if opts.eps {
        alpha -= 1.0;
    }
    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_kin_h2o() {
        assert_relative_eq!(alpha_kin_h2o(None, &AlphaKinOptions::new()), 1.0);
        let opts = AlphaKinOptions::new().eps(true);
        assert_relative_eq!(
            alpha_kin_h2o(Some(WaterIsotopologue::Hdo), &opts) * 1000.0,
            25.1153,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            alpha_kin_h2o(Some(WaterIsotopologue::H218O), &opts.greater1(false)) * 1000.0,
            -27.3,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            alpha_kin_h2o(Some(WaterIsotopologue::H218O), &opts.boundary(true)) * 1000.0,
            18.6244,
            epsilon = 1e-4
        );
        let opts = opts.greater1(false).boundary(true).cappa(true);
        assert_relative_eq!(
            alpha_kin_h2o(Some(WaterIsotopologue::H218O), &opts) * 1000.0,
            -20.7076,
            epsilon = 1e-4
        );
    }
}
