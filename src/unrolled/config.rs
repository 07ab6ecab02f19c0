//! Construction-time configuration for [`UnrolledDeque`](super::UnrolledDeque).

use super::DequeError;

/// Block size used when none is given.
pub const DEFAULT_BLOCK_SIZE: usize = 128;

/// Configuration of an unrolled deque.
///
/// The block size is the number of slots in every block of the chain. It must
/// be a positive even number so that the first block can be split evenly
/// around its center.
///
/// # Examples
///
/// ```rust
/// use unrolled_deque::{DequeConfig, UnrolledDeque};
///
/// let config = DequeConfig::new().block_size(16);
/// let deque: UnrolledDeque<i32> = UnrolledDeque::with_config(&config).unwrap();
/// assert_eq!(deque.block_size(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DequeConfig {
    block_size: usize,
}

impl DequeConfig {
    /// Creates a configuration with [`DEFAULT_BLOCK_SIZE`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Sets the number of slots per block.
    #[inline]
    #[must_use]
    pub const fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Returns the configured number of slots per block.
    #[inline]
    #[must_use]
    pub const fn get_block_size(&self) -> usize {
        self.block_size
    }

    /// Checks that the block size is positive and even.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidConfiguration`] otherwise.
    pub fn validate(&self) -> Result<(), DequeError> {
        let reason = if self.block_size == 0 {
            "block size must be positive"
        } else if self.block_size % 2 != 0 {
            "block size must be even"
        } else {
            return Ok(());
        };

        tracing::debug!(block_size = self.block_size, reason, "rejected deque configuration");
        Err(DequeError::InvalidConfiguration {
            block_size: self.block_size,
            reason,
        })
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self::new()
    }
}
