use std::fmt::Debug;

use dasp_sample::{Duplex, FloatSample};

/// Normalized floating-point sample type held in an `AudioBuffer`.
///
/// Samples nominally lie in `[-1.0, 1.0)`.
pub trait Sample: FloatSample + Duplex<f64> + Debug + Send + 'static {}

impl Sample for f32 {}
impl Sample for f64 {}
