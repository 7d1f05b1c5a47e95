//! Deterministic seeded pseudo-random generator.
//!
//! [`RandomState`] holds a single number in `[0, 1)`. Every draw feeds that
//! number through a 32-bit bit mixer and stores the result as the new state,
//! so two generators built from the same [`Seed`] produce identical sequences.
//! The generator is not suitable for cryptography.
//!
//! There is no process-wide instance; callers own their generators.
//!
//! # Examples
//!
//! ```rust
//! use serpentine::random::RandomState;
//!
//! let mut random = RandomState::new(1).unwrap();
//! let rolls: Vec<i64> = (0..3).map(|_| random.randint(1, 10000).unwrap()).collect();
//! assert_eq!(rolls, vec![1194, 9002, 2501]);
//!
//! let mut replay = RandomState::new("seed").unwrap();
//! let mut again = RandomState::new("seed").unwrap();
//! assert_eq!(replay.random(), again.random());
//! ```

use tracing::debug;

use crate::error::{Error, Result};

/// Scale applied to the state before it is truncated to 32 bits.
const STATE_SCALE: f64 = 1_000_000_000.0;

/// `2^32`, mapping mixer output into `[0, 1)`.
const OUTPUT_SCALE: f64 = 4_294_967_296.0;

/// Raw seed material for a [`RandomState`].
///
/// Numbers are used as given, strings contribute the sum of their UTF-16 code
/// units, and booleans map to `0` or `1`.
///
/// # Examples
///
/// ```rust
/// use serpentine::random::Seed;
///
/// assert_eq!(Seed::from("AB").value(), 131.0);
/// assert_eq!(Seed::from(true).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed(f64);

impl Seed {
    /// Returns the raw numeric seed before normalization.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Seed {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

macro_rules! impl_seed_from_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl From<$integer> for Seed {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $integer) -> Self {
                    Self(value as f64)
                }
            }
        )*
    };
}

impl_seed_from_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Seed {
    fn from(value: bool) -> Self {
        Self(if value { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self(value.encode_utf16().map(f64::from).sum())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for Seed {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

/// A seeded pseudo-random generator.
///
/// Every method that draws advances the state by one or more steps; the
/// number of steps each operation takes is part of its contract, which is
/// what keeps whole sequences of mixed calls reproducible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomState {
    state: f64,
}

impl RandomState {
    /// Creates a generator from `seed`.
    ///
    /// The absolute value of the seed is divided by ten until it drops below
    /// one, so `1`, `10` and `100` all start from `0.1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the seed is NaN or infinite.
    pub fn new(seed: impl Into<Seed>) -> Result<Self> {
        let raw = seed.into().value();
        if !raw.is_finite() {
            return Err(Error::invalid_argument(
                "RandomState::new",
                format!("seed must be finite, got {raw}"),
            ));
        }
        let mut state = raw.abs();
        while state >= 1.0 {
            state /= 10.0;
        }
        Ok(Self { state })
    }

    /// Creates a generator seeded from the operating system's randomness.
    pub fn from_entropy() -> Self {
        let state: f64 = rand::random();
        debug!(state, "seeded random state from entropy");
        Self { state }
    }

    /// Returns the current state, suitable for [`set_state`](Self::set_state).
    #[inline]
    pub const fn state(&self) -> f64 {
        self.state
    }

    /// Restores a state previously returned by [`state`](Self::state).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `state` lies outside `[0, 1)`.
    pub fn set_state(&mut self, state: f64) -> Result<()> {
        if !(0.0..1.0).contains(&state) {
            return Err(Error::invalid_argument(
                "RandomState::set_state",
                format!("state must lie in [0, 1), got {state}"),
            ));
        }
        self.state = state;
        Ok(())
    }

    /// Advances the mixer and returns the raw 32-bit output.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn step(&mut self) -> u32 {
        let mut a = (self.state * STATE_SCALE) as i32 as u32;
        a = a.wrapping_add(0x6D2B_79F5);
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        let output = t ^ (t >> 14);
        self.state = f64::from(output) / OUTPUT_SCALE;
        output
    }

    /// Returns the next float in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.step();
        self.state
    }

    /// Returns an index in `0..length`; `length` must be positive.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index_below(&mut self, length: usize) -> usize {
        (self.random() * length as f64).floor() as usize
    }

    /// Returns an integer in `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serpentine::random::RandomState;
    ///
    /// let mut random = RandomState::new(7).unwrap();
    /// let value = random.randint(-3, 3).unwrap();
    /// assert!((-3..=3).contains(&value));
    /// assert!(random.randint(3, -3).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn randint(&mut self, start: i64, end: i64) -> Result<i64> {
        if start > end {
            return Err(Error::invalid_argument(
                "RandomState::randint",
                format!("empty range {start}..={end}"),
            ));
        }
        let span = end as f64 - start as f64 + 1.0;
        Ok((self.random() * span).floor() as i64 + start)
    }

    /// Returns an integer from `range(start, stop, step)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `step` is zero or the range is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serpentine::random::RandomState;
    ///
    /// let mut random = RandomState::new(3).unwrap();
    /// let even = random.randrange(0, 10, 2).unwrap();
    /// assert_eq!(even % 2, 0);
    /// let below = random.randrange(10, 0, -3).unwrap();
    /// assert!([10, 7, 4, 1].contains(&below));
    /// ```
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss
    )]
    pub fn randrange(&mut self, start: i64, stop: i64, step: i64) -> Result<i64> {
        if step == 0 {
            return Err(Error::invalid_argument(
                "RandomState::randrange",
                "step must not be zero",
            ));
        }
        let (start_wide, stop_wide, step_wide) = (i128::from(start), i128::from(stop), i128::from(step));
        let count = if step > 0 {
            (stop_wide - start_wide + step_wide - 1).div_euclid(step_wide)
        } else {
            (stop_wide - start_wide + step_wide + 1).div_euclid(step_wide)
        };
        if count <= 0 {
            return Err(Error::invalid_argument(
                "RandomState::randrange",
                format!("empty range ({start}, {stop}, {step})"),
            ));
        }
        let offset = (self.random() * count as f64).floor() as i128;
        i64::try_from(start_wide + step_wide * offset).map_err(|_| {
            Error::invalid_argument("RandomState::randrange", "result does not fit in i64")
        })
    }

    /// Returns an integer from `range(stop)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `stop` is not positive.
    pub fn randrange_to(&mut self, stop: i64) -> Result<i64> {
        self.randrange(0, stop, 1)
    }

    /// Returns a float in `[start, end)` (or `(end, start]` when `end < start`).
    pub fn uniform(&mut self, start: f64, end: f64) -> f64 {
        self.random() * (end - start) + start
    }

    /// Returns a random element of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `sequence` is empty.
    pub fn choice<'a, T>(&mut self, sequence: &'a [T]) -> Result<&'a T> {
        if sequence.is_empty() {
            return Err(Error::OutOfRange {
                function: "RandomState::choice",
                index: 0,
                length: 0,
            });
        }
        let index = self.index_below(sequence.len());
        Ok(&sequence[index])
    }

    /// Returns `k` elements drawn from `sequence` with replacement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `sequence` is empty and `k > 0`.
    pub fn choices<T: Clone>(&mut self, sequence: &[T], k: usize) -> Result<Vec<T>> {
        (0..k)
            .map(|_| self.choice(sequence).cloned())
            .collect()
    }

    /// Returns `k` distinct positions of `sequence`, in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `k` exceeds the length.
    pub fn sample<T: Clone>(&mut self, sequence: &[T], k: usize) -> Result<Vec<T>> {
        if k > sequence.len() {
            return Err(Error::invalid_argument(
                "RandomState::sample",
                format!("sample of {k} is larger than population of {}", sequence.len()),
            ));
        }
        let mut pool = sequence.to_vec();
        Ok((0..k)
            .map(|_| {
                let index = self.index_below(pool.len());
                pool.remove(index)
            })
            .collect())
    }

    /// Shuffles `sequence` in place.
    ///
    /// Each position, in ascending order, is swapped with a uniformly drawn
    /// position of the whole slice.
    pub fn shuffle<T>(&mut self, sequence: &mut [T]) {
        let length = sequence.len();
        for position in 0..length {
            let other = self.index_below(length);
            sequence.swap(position, other);
        }
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Exposes the mixer output to the `rand` ecosystem, one state step per
/// 32 bits.
impl rand::RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.step());
        let high = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, destination: &mut [u8]) {
        for chunk in destination.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, destination: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(destination);
        Ok(())
    }
}
