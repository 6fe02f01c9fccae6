//! Sample acquisition abstraction
//!
//! Conversions never talk to hardware. Anything that can hand out raw ADC
//! codes implements [`SampleSource`]:
//! - A real ADC channel on the target
//! - A random generator standing in for a sensor on the host
//! - A fixed sequence in tests

use heapless::Vec;

use crate::{
    adc::RawSample,
    errors::{ConversionError, ConversionResult},
};

/// Source of raw ADC samples
pub trait SampleSource {
    /// Take the next sample
    fn next_sample(&mut self) -> RawSample;

    /// Take `len` consecutive samples into a fixed-capacity buffer.
    ///
    /// Nothing is read when `len` exceeds the capacity `N`.
    fn fill_window<const N: usize>(&mut self, len: usize) -> ConversionResult<Vec<RawSample, N>>
    where
        Self: Sized,
    {
        if len > N {
            return Err(ConversionError::WindowOverflow { capacity: N });
        }

        let mut window = Vec::new();
        for _ in 0..len {
            window
                .push(self.next_sample())
                .map_err(|_| ConversionError::WindowOverflow { capacity: N })?;
        }
        Ok(window)
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn next_sample(&mut self) -> RawSample {
        (**self).next_sample()
    }
}

/// Replays a fixed sequence, wrapping around at the end.
///
/// An empty sequence yields 0.
#[derive(Debug, Clone)]
pub struct FixedSamples<'a> {
    samples: &'a [RawSample],
    position: usize,
}

impl<'a> FixedSamples<'a> {
    pub fn new(samples: &'a [RawSample]) -> Self {
        Self { samples, position: 0 }
    }

    /// Restart from the first sample
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl SampleSource for FixedSamples<'_> {
    fn next_sample(&mut self) -> RawSample {
        if self.samples.is_empty() {
            return 0;
        }
        let sample = self.samples[self.position];
        self.position = (self.position + 1) % self.samples.len();
        sample
    }
}

/// Always returns the same code
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource {
    value: RawSample,
}

impl ConstantSource {
    pub fn new(value: RawSample) -> Self {
        Self { value }
    }

    pub fn set(&mut self, value: RawSample) {
        self.value = value;
    }
}

impl SampleSource for ConstantSource {
    fn next_sample(&mut self) -> RawSample {
        self.value
    }
}
