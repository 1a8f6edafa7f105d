//! Plucked-string synthesis (Karplus-Strong) over a rotating sample buffer.
//!
//! A string tuned to `frequency` owns a buffer of `round(sample_rate / frequency)`
//! samples. Plucking fills it with white noise; every [`tic`](GuitarString::tic)
//! pops the front sample, averages it with the new front, scales by the decay
//! factor and pushes the result to the back. The buffer length never changes, so
//! each step costs one amortized O(1) `pop_front`, one O(1) `get(0)` and one
//! amortized O(1) `push_back` on whatever backing store is used.

use rand::Rng;
use tracing::debug;

use crate::deques::{AnyDeque, ArrayDeque};
use crate::error::{DequeError, Result};

/// Tuning parameters shared by every string of an instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output samples per second.
    pub sample_rate: u32,
    /// Energy kept per step, in `[0, 1]`.
    pub decay: f64,
}

impl SynthConfig {
    pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
    pub const DEFAULT_DECAY: f64 = 0.996;

    fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(DequeError::InvalidArgument("sample rate must be positive"));
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(DequeError::InvalidArgument("decay must lie within [0, 1]"));
        }
        Ok(())
    }

    /// Number of samples in the buffer of a string tuned to `frequency`.
    fn buffer_len(&self, frequency: f64) -> Result<usize> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(DequeError::InvalidArgument(
                "frequency must be finite and positive",
            ));
        }
        let samples = (f64::from(self.sample_rate) / frequency).round();
        if samples < 1.0 {
            return Err(DequeError::InvalidArgument(
                "frequency is too high for the sample rate",
            ));
        }
        Ok(samples as usize)
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::DEFAULT_SAMPLE_RATE,
            decay: Self::DEFAULT_DECAY,
        }
    }
}

/// A single vibrating string.
///
/// Generic over its sample buffer: any [`AnyDeque<f64>`] works, and the output is
/// identical for every backing store.
pub struct GuitarString<D: AnyDeque<f64> = ArrayDeque<f64>> {
    buffer: D,
    config: SynthConfig,
}

impl GuitarString {
    /// Creates a silent string tuned to `frequency` Hz at the default
    /// [`SynthConfig`].
    ///
    /// # Errors
    /// See [`with_deque`](Self::with_deque).
    pub fn new(frequency: f64) -> Result<Self> {
        Self::with_config(frequency, SynthConfig::default())
    }

    /// Creates a silent string tuned to `frequency` Hz.
    ///
    /// # Errors
    /// See [`with_deque`](Self::with_deque).
    pub fn with_config(frequency: f64, config: SynthConfig) -> Result<Self> {
        Self::with_deque(ArrayDeque::new(), frequency, config)
    }
}

impl<D: AnyDeque<f64>> GuitarString<D> {
    /// Creates a silent string using `buffer` as its sample store.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidArgument`] if `buffer` is not empty, if
    /// `config` is out of range, or if `frequency` is not finite and positive or
    /// is so high that the buffer would hold no samples.
    pub fn with_deque(mut buffer: D, frequency: f64, config: SynthConfig) -> Result<Self> {
        if !buffer.is_empty() {
            return Err(DequeError::InvalidArgument("sample buffer must start empty"));
        }
        config.validate()?;
        let samples = config.buffer_len(frequency)?;
        for _ in 0..samples {
            buffer.push_back(0.0);
        }
        debug!(frequency, samples, "tuned guitar string");
        Ok(Self { buffer, config })
    }

    /// Replaces every sample with white noise in `[-0.5, 0.5)`.
    pub fn pluck(&mut self) {
        self.pluck_with(&mut rand::thread_rng());
    }

    /// Same as [`pluck`](Self::pluck) with a caller-supplied random source.
    pub fn pluck_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.buffer.len() {
            self.buffer.pop_front();
            self.buffer.push_back(rng.gen::<f64>() - 0.5);
        }
    }

    /// Advances the simulation by one sample.
    pub fn tic(&mut self) {
        let Some(first) = self.buffer.pop_front() else {
            return;
        };
        // A one-sample string averages with itself.
        let second = self.buffer.front().copied().unwrap_or(first);
        self.buffer.push_back(self.config.decay * 0.5 * (first + second));
    }

    /// Returns the current output sample.
    pub fn sample(&self) -> f64 {
        self.buffer.front().copied().unwrap_or(0.0)
    }

    /// Number of samples in the rotating buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always `false` for a constructed string; the buffer holds at least one
    /// sample.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn config(&self) -> SynthConfig {
        self.config
    }

    /// Read access to the sample buffer.
    pub fn buffer(&self) -> &D {
        &self.buffer
    }
}
