pub mod availability;
pub mod capital;
pub mod defense;
pub mod donations;
pub mod offense;

/// Output of one sub-metric calculator before confidence shrinkage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmetricRaw {
    pub raw: f64,
    pub normalized: f64,
    pub sample_size: u32,
    pub clamped: bool,
}

impl SubmetricRaw {
    pub fn neutral(neutral: f64) -> Self {
        Self {
            raw: neutral,
            normalized: neutral,
            sample_size: 0,
            clamped: false,
        }
    }
}

/// Halves a record's weight every `half_life` wars.
pub fn recency_weight(wars_ago: u32, half_life: f64) -> f64 {
    0.5f64.powf(wars_ago as f64 / half_life)
}

/// Recency weights measured from the newest record in the history, so the
/// newest weighs 1.0 and a weighted mean never divides by zero however old
/// the whole history is. Scaling every weight by the same factor leaves the
/// weighted mean unchanged.
pub fn relative_recency_weights(
    wars_ago: impl Iterator<Item = u32> + Clone,
    half_life: f64,
) -> Vec<f64> {
    let newest = wars_ago.clone().min().unwrap_or(0);
    wars_ago
        .map(|w| recency_weight(w - newest, half_life))
        .collect()
}

/// Exponential curve over a clamped Town Hall difference. Positive deltas
/// give factors above 1.0, negative deltas below. Unknown levels (0) are
/// treated as even.
pub fn th_curve(from_th: u32, to_th: u32, step: f64, cap: u32) -> f64 {
    if from_th == 0 || to_th == 0 {
        return 1.0;
    }
    let cap = cap as i64;
    let delta = (to_th as i64 - from_th as i64).clamp(-cap, cap);
    (step * delta as f64).exp()
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/mod.rs"]
mod tests;
