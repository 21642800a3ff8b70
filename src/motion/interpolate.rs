use thiserror::Error;
use tracing::warn;

use super::color::{ColorError, Rgba};

#[derive(Debug, Error, PartialEq)]
pub enum KeyframeError {
    #[error("keyframe table is empty")]
    Empty,
    #[error("{inputs} breakpoints but {outputs} output values")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("breakpoint {index} is not finite")]
    NonFinite { index: usize },
    #[error("breakpoint {index} ({value}) is lower than the one before it")]
    Decreasing { index: usize, value: f64 },
    #[error(transparent)]
    Color(#[from] ColorError),
}

pub trait Lerp {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapOptions {
    pub clamp: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self { clamp: true }
    }
}

impl MapOptions {
    pub const CLAMP: Self = Self { clamp: true };
    pub const EXTRAPOLATE: Self = Self { clamp: false };
}

/// Breakpoint → value table for a piecewise-linear mapping. Breakpoints are
/// non-decreasing and paired one-to-one with outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
}

impl<T: Lerp + Clone> Keyframes<T> {
    pub fn new(inputs: &[f64], outputs: Vec<T>) -> Result<Self, KeyframeError> {
        if inputs.is_empty() {
            return Err(KeyframeError::Empty);
        }

        if inputs.len() != outputs.len() {
            return Err(KeyframeError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }

        for (index, value) in inputs.iter().enumerate() {
            if !value.is_finite() {
                return Err(KeyframeError::NonFinite { index });
            }
            if index > 0 && *value < inputs[index - 1] {
                return Err(KeyframeError::Decreasing {
                    index,
                    value: *value,
                });
            }
        }

        Ok(Self {
            inputs: inputs.to_vec(),
            outputs,
        })
    }

    pub fn constant(value: T) -> Self {
        Self {
            inputs: vec![0.0],
            outputs: vec![value],
        }
    }

    /// Falls back to a constant table built from the first declared output
    /// (or `T::default()`) when the declaration is malformed.
    pub fn or_static(inputs: &[f64], outputs: Vec<T>) -> Self
    where
        T: Default,
    {
        let fallback = outputs.first().cloned().unwrap_or_default();
        match Self::new(inputs, outputs) {
            Ok(table) => table,
            Err(error) => {
                warn!(%error, "malformed keyframe table, using a static value");
                Self::constant(fallback)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn first(&self) -> &T {
        &self.outputs[0]
    }

    pub fn last(&self) -> &T {
        &self.outputs[self.outputs.len() - 1]
    }
}

impl Keyframes<f64> {
    pub fn numbers(inputs: &[f64], outputs: &[f64]) -> Self {
        Self::or_static(inputs, outputs.to_vec())
    }
}

impl Keyframes<Rgba> {
    pub fn parse_colors(inputs: &[f64], outputs: &[&str]) -> Result<Self, KeyframeError> {
        let colors = outputs
            .iter()
            .map(|value| Rgba::parse(value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(inputs, colors)
    }

    pub fn colors(inputs: &[f64], outputs: &[&str]) -> Self {
        match Self::parse_colors(inputs, outputs) {
            Ok(table) => table,
            Err(error) => {
                warn!(%error, "malformed color keyframes, using a static value");
                let fallback = outputs
                    .first()
                    .and_then(|value| Rgba::parse(value).ok())
                    .unwrap_or_default();
                Self::constant(fallback)
            }
        }
    }
}

pub fn interpolate<T: Lerp + Clone>(progress: f64, keyframes: &Keyframes<T>, options: MapOptions) -> T {
    let inputs = &keyframes.inputs;
    let outputs = &keyframes.outputs;
    let last = inputs.len() - 1;

    if last == 0 {
        return outputs[0].clone();
    }

    let progress = if progress.is_finite() { progress } else { inputs[0] };

    if progress <= inputs[0] {
        if options.clamp || progress == inputs[0] || inputs[1] <= inputs[0] {
            return outputs[0].clone();
        }
        return segment(inputs, outputs, 0, progress);
    }

    if progress >= inputs[last] {
        if options.clamp || progress == inputs[last] || inputs[last] <= inputs[last - 1] {
            return outputs[last].clone();
        }
        return segment(inputs, outputs, last - 1, progress);
    }

    let index = (0..last)
        .find(|&i| progress < inputs[i + 1])
        .unwrap_or(last - 1);
    segment(inputs, outputs, index, progress)
}

fn segment<T: Lerp + Clone>(inputs: &[f64], outputs: &[T], index: usize, progress: f64) -> T {
    let start = inputs[index];
    let end = inputs[index + 1];
    let span = end - start;

    if span <= 0.0 {
        return outputs[index + 1].clone();
    }

    let t = (progress - start) / span;
    outputs[index].lerp(&outputs[index + 1], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_linear_midpoint() {
        let table = Keyframes::numbers(&[0.0, 1.0], &[0.0, 100.0]);
        assert_eq!(interpolate(0.5, &table, MapOptions::CLAMP), 50.0);
    }

    #[test]
    fn clamps_to_end_values() {
        let fade_in = Keyframes::numbers(&[0.0, 0.35], &[0.0, 1.0]);

        assert_eq!(interpolate(-0.5, &fade_in, MapOptions::CLAMP), 0.0);
        assert_eq!(interpolate(0.0, &fade_in, MapOptions::CLAMP), 0.0);
        assert_eq!(interpolate(1.5, &fade_in, MapOptions::CLAMP), 1.0);
        assert_eq!(interpolate(0.35, &fade_in, MapOptions::CLAMP), 1.0);
    }

    #[test]
    fn extrapolates_along_nearest_segment() {
        let table = Keyframes::numbers(&[0.0, 0.5, 1.0], &[0.0, 10.0, 30.0]);

        assert_eq!(interpolate(-0.5, &table, MapOptions::EXTRAPOLATE), -10.0);
        assert_eq!(interpolate(1.5, &table, MapOptions::EXTRAPOLATE), 50.0);
    }

    #[test]
    fn picks_the_bracketing_segment() {
        let table = Keyframes::numbers(&[0.0, 0.25, 1.0], &[0.0, 1.0, 0.0]);

        assert_eq!(interpolate(0.125, &table, MapOptions::CLAMP), 0.5);
        assert_eq!(interpolate(0.25, &table, MapOptions::CLAMP), 1.0);
        assert!((interpolate(0.625, &table, MapOptions::CLAMP) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn repeated_breakpoints_step() {
        let table = Keyframes::numbers(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]);

        assert_eq!(interpolate(0.49, &table, MapOptions::CLAMP), 0.0);
        assert_eq!(interpolate(0.5, &table, MapOptions::CLAMP), 1.0);
        assert_eq!(interpolate(0.75, &table, MapOptions::CLAMP), 1.0);
    }

    #[test]
    fn extrapolation_past_a_repeated_end_stop_holds_the_end_value() {
        let leading = Keyframes::numbers(&[0.0, 0.0, 1.0], &[5.0, 10.0, 20.0]);
        assert_eq!(interpolate(0.0, &leading, MapOptions::EXTRAPOLATE), 5.0);
        assert_eq!(interpolate(-0.5, &leading, MapOptions::EXTRAPOLATE), 5.0);
        assert_eq!(interpolate(1.5, &leading, MapOptions::EXTRAPOLATE), 25.0);

        let trailing = Keyframes::numbers(&[0.0, 1.0, 1.0], &[0.0, 10.0, 30.0]);
        assert_eq!(interpolate(1.0, &trailing, MapOptions::EXTRAPOLATE), 30.0);
        assert_eq!(interpolate(1.5, &trailing, MapOptions::EXTRAPOLATE), 30.0);
        assert_eq!(interpolate(-0.5, &trailing, MapOptions::EXTRAPOLATE), -5.0);
    }

    #[test]
    fn same_inputs_give_identical_bits() {
        let table = Keyframes::numbers(&[0.0, 0.3, 0.7, 1.0], &[0.1, 0.9, 0.2, 0.6]);

        for step in 0..=40 {
            let progress = f64::from(step) / 37.0 - 0.1;
            let first = interpolate(progress, &table, MapOptions::EXTRAPOLATE);
            let second = interpolate(progress, &table, MapOptions::EXTRAPOLATE);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            Keyframes::new(&[0.0, 1.0], vec![1.0]),
            Err(KeyframeError::LengthMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(
            Keyframes::new(&[0.5, 0.2], vec![1.0, 2.0]),
            Err(KeyframeError::Decreasing { index: 1, value: 0.2 })
        );
        assert_eq!(Keyframes::<f64>::new(&[], vec![]), Err(KeyframeError::Empty));
        assert_eq!(
            Keyframes::new(&[0.0, f64::NAN], vec![1.0, 2.0]),
            Err(KeyframeError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn malformed_tables_degrade_to_first_value() {
        let table = Keyframes::numbers(&[1.0, 0.0], &[0.35, 0.0]);

        assert_eq!(interpolate(0.0, &table, MapOptions::CLAMP), 0.35);
        assert_eq!(interpolate(0.9, &table, MapOptions::CLAMP), 0.35);

        let empty = Keyframes::numbers(&[0.0], &[]);
        assert_eq!(interpolate(0.4, &empty, MapOptions::CLAMP), 0.0);
    }

    #[test]
    fn non_finite_progress_reads_as_start() {
        let table = Keyframes::numbers(&[0.0, 1.0], &[4.0, 8.0]);
        assert_eq!(interpolate(f64::NAN, &table, MapOptions::CLAMP), 4.0);
    }

    #[test]
    fn interpolates_colors() {
        let table = Keyframes::colors(&[0.0, 1.0], &["#000000", "#ffffff"]);
        let mid = interpolate(0.5, &table, MapOptions::CLAMP);

        assert_eq!(mid.to_css(), "rgba(128, 128, 128, 1)");
    }

    #[test]
    fn bad_color_falls_back_to_first_parsable_value() {
        let table = Keyframes::colors(&[0.0, 1.0], &["#07150D", "not-a-color"]);
        let value = interpolate(0.7, &table, MapOptions::CLAMP);

        assert_eq!(value, Rgba::rgb(0x07, 0x15, 0x0d));
    }
}
