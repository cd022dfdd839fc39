use thiserror::Error;

use crate::color::{ParseColorError, Rgb};

/// Endpoints and step count for one gradient run. Not mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub start: Rgb,
    pub end: Rgb,
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("invalid step count {0}: at least 1 color must be requested")]
    InvalidStepCount(usize),
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

/// Generate `spec.steps` colors linearly interpolated from `spec.start` to
/// `spec.end`, endpoints included. Channels round half away from zero.
///
/// A single-step gradient is just `[start]`: the `i / (steps - 1)` factor is
/// undefined there and never evaluated.
pub fn generate(spec: GradientSpec) -> Result<Vec<Rgb>, GradientError> {
    if spec.steps < 1 {
        return Err(GradientError::InvalidStepCount(spec.steps));
    }
    if spec.steps == 1 {
        return Ok(vec![spec.start]);
    }

    let mut colors = Vec::with_capacity(spec.steps);
    for i in 0..spec.steps {
        let factor = i as f64 / (spec.steps - 1) as f64;
        colors.push(Rgb::new(
            lerp_channel(spec.start.r, spec.end.r, factor),
            lerp_channel(spec.start.g, spec.end.g, factor),
            lerp_channel(spec.start.b, spec.end.b, factor),
        ));
    }
    Ok(colors)
}

/// Hex-string convenience wrapper: decode both endpoints, generate, and
/// encode every color back to `#rrggbb` form.
pub fn generate_gradient(
    start: &str,
    end: &str,
    steps: usize,
) -> Result<Vec<String>, GradientError> {
    let spec = GradientSpec {
        start: Rgb::from_hex(start)?,
        end: Rgb::from_hex(end)?,
        steps,
    };
    Ok(generate(spec)?.iter().map(Rgb::to_hex).collect())
}

/// Interpolate one channel: round half away from zero, then clamp to the
/// 8-bit range before narrowing.
fn lerp_channel(start: u8, end: u8, factor: f64) -> u8 {
    let value = f64::from(start) + factor * (f64::from(end) - f64::from(start));
    value.round().clamp(0.0, 255.0) as u8
}
