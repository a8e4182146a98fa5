use super::Model;
use derive_more::{Deref, Into, IntoIterator};
use eyre::{ensure, Result};

/// Normalized probabilities of transcript ranks. Rank `i` has probability `profile[i]`.
#[derive(Debug, Clone, PartialEq, Default, Deref, Into, IntoIterator)]
pub struct Profile(Vec<f64>);

impl Profile {
    /// Default number of transcript slots.
    pub const DEFAULT_SLOTS: usize = 10_000;
    /// Maximal absolute deviation of the profile sum from 1.
    pub const TOLERANCE: f64 = 1e-3;

    /// Weigh each slot with the model and normalize the weights to sum to 1.
    pub fn generate(model: &Model, slots: usize) -> Result<Self> {
        ensure!(slots > 0, "Expression profile requires at least one slot");

        let mut weights: Vec<f64> = (0..slots).map(|slot| model.weight(slot, slots)).collect();
        let total: f64 = weights.iter().sum();
        ensure!(
            total.is_finite() && total > 0.0,
            "Invalid total weight of the {model} expression profile: {total}"
        );

        for weight in weights.iter_mut() {
            *weight /= total;
        }
        let sum: f64 = weights.iter().sum();
        ensure!(
            (sum - 1.0).abs() < Self::TOLERANCE,
            "Normalized {model} expression profile sums to {sum}"
        );
        Ok(Self(weights))
    }

    /// Up to `n` leading probabilities.
    pub fn head(&self, n: usize) -> &[f64] {
        &self.0[..n.min(self.0.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::FluxParams;

    #[test]
    fn test_profiles_are_normalized() -> Result<()> {
        for model in [Model::default(), Model::Constant] {
            for slots in [1, 10, Profile::DEFAULT_SLOTS] {
                let profile = Profile::generate(&model, slots)?;
                assert_eq!(profile.len(), slots);
                assert!(profile.iter().all(|&x| x >= 0.0), "Model: {model}, slots: {slots}");
                assert!((profile.iter().sum::<f64>() - 1.0).abs() < Profile::TOLERANCE);
            }
        }
        Ok(())
    }

    #[test]
    fn test_constant_is_uniform() -> Result<()> {
        for slots in [1, 10, 7, Profile::DEFAULT_SLOTS] {
            let profile = Profile::generate(&Model::Constant, slots)?;
            let expected = 1.0 / slots as f64;
            assert!(profile.iter().all(|&x| (x - expected).abs() < 1e-12));
        }
        Ok(())
    }

    #[test]
    fn test_flux_profile() -> Result<()> {
        let profile = Profile::generate(&Model::Flux(FluxParams::default()), 10)?;
        let weights: Vec<f64> = (1..=10)
            .map(|x| (x as f64).powf(-0.6) * ((x as f64 / 10.0).powi(3)).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        for (value, weight) in profile.iter().zip(weights) {
            assert!((value - weight / total).abs() < 1e-12);
        }

        // Top ranks dominate
        let profile = Profile::generate(&Model::default(), Profile::DEFAULT_SLOTS)?;
        assert!(profile[0] > profile[1] && profile[1] > profile[100]);
        assert_eq!(profile.head(10).len(), 10);
        assert_eq!(profile.head(usize::MAX).len(), Profile::DEFAULT_SLOTS);
        Ok(())
    }

    #[test]
    fn test_invalid_profiles() {
        assert!(Profile::generate(&Model::Constant, 0).is_err());
        assert!("zipf".parse::<Model>().is_err());
        assert!(Profile::generate(&Model::Flux(FluxParams::new(f64::NAN)), 10).is_err());
    }
}
