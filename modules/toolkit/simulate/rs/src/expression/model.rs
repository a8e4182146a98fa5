use derive_getters::Getters;
use derive_more::Constructor;
use eyre::{bail, Report, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Parameters of the Flux Simulator abundance model (Griebel et al., 2012):
/// `w(x) = x^k * exp((x / a) * (x / b)^2)` for the transcript rank `x`, where `a = b = slots`.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Constructor)]
pub struct FluxParams {
    k: f64,
}

impl Default for FluxParams {
    fn default() -> Self {
        Self { k: -0.6 }
    }
}

impl FluxParams {
    /// Unnormalized weight of the 1-based rank `x` out of `slots`.
    pub fn weight(&self, x: f64, slots: f64) -> f64 {
        let (a, b) = (slots, slots);
        x.powf(self.k) * ((x / a) * (x / b).powi(2)).exp()
    }
}

/// Abundance model used to generate expression profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    /// Power law decay with an exponential correction for the low abundance tail
    Flux(FluxParams),
    /// Uniform abundance
    Constant,
}

impl Default for Model {
    fn default() -> Self {
        Model::Flux(FluxParams::default())
    }
}

impl Model {
    pub const NAMES: [&'static str; 2] = ["flux", "constant"];

    pub fn name(&self) -> &'static str {
        match self {
            Model::Flux(_) => "flux",
            Model::Constant => "constant",
        }
    }

    /// Unnormalized weight of the zero-based slot out of `slots`.
    pub fn weight(&self, slot: usize, slots: usize) -> f64 {
        match self {
            Model::Flux(params) => params.weight((slot + 1) as f64, slots as f64),
            Model::Constant => 1.0,
        }
    }
}

impl FromStr for Model {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flux" => Ok(Model::Flux(FluxParams::default())),
            "constant" => Ok(Model::Constant),
            _ => bail!(
                "Unsupported expression model '{s}', expected one of {:?}",
                Model::NAMES
            ),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() -> Result<()> {
        assert_eq!("flux".parse::<Model>()?, Model::Flux(FluxParams::new(-0.6)));
        assert_eq!("constant".parse::<Model>()?, Model::Constant);
        for name in ["", "Flux", "uniform", "flux "] {
            assert!(name.parse::<Model>().is_err(), "Model: {name:?}");
        }
        for model in [Model::default(), Model::Constant] {
            assert_eq!(model.to_string().parse::<Model>()?, model);
        }
        Ok(())
    }

    #[test]
    fn test_flux_weight() {
        let params = FluxParams::default();
        assert_eq!(params.weight(1.0, 1.0), 1.0_f64.exp());
        assert!((params.weight(1.0, 10_000.0) - 1.0).abs() < 1e-9);
        assert!((params.weight(10.0, 10.0) - 10.0_f64.powf(-0.6) * 1.0_f64.exp()).abs() < 1e-12);

        // Decays with the rank until the correction term kicks in at the tail
        let weights: Vec<_> = (1..=100).map(|x| params.weight(x as f64, 1000.0)).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }
}
