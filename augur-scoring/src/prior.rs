//! Initial belief weights from catalog popularity.

use augur_core::constants::MIN_PRIOR;
use augur_core::models::{Candidate, WeightMap};

/// Combine a popularity signal (plus optional bonus) into an initial weight.
///
/// `alpha` blends a flat baseline with the popularity signal: 0 gives every
/// candidate the same prior, 1 is fully popularity-driven. The result is
/// floored at `MIN_PRIOR` so no candidate starts permanently unreachable.
pub fn base_prior(popularity: f64, bonus: f64, alpha: f64) -> f64 {
    let alpha = alpha.clamp(0.0, 1.0);
    let signal = (popularity + bonus).max(0.0);
    ((1.0 - alpha) + alpha * signal).max(MIN_PRIOR)
}

/// Build the session's starting weight map from catalog priors.
pub fn initial_weights(catalog: &[Candidate], alpha: f64) -> WeightMap {
    catalog
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                base_prior(c.popularity, c.popularity_bonus, alpha),
            )
        })
        .collect()
}
