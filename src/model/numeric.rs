pub fn clip01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Replaces NaN and infinities with `fallback`.
pub fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x } else { fallback }
}

pub fn ratio(num: u32, denom: u32) -> f64 {
    num as f64 / denom.max(1) as f64
}

pub fn clamp_stars(stars: u8) -> u8 {
    stars.min(3)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/numeric.rs"]
mod tests;
