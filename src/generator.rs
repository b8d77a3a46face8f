//! UUIDv4 generator and related types.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the minimum random number source interface for [`V4Generator`].
pub trait RandSource {
    /// Fills `dest` with independent, uniformly distributed random bytes, or reports that the
    /// source cannot currently supply them.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandomnessUnavailable>;
}

/// Represents a UUIDv4 generator that wraps an injected random number source.
///
/// This type provides the interface to customize the random number source of a UUIDv4 generator.
/// The quality of the generated identifiers is entirely the wrapped source's contract: the
/// generator draws 128 bits per identifier and fixes up the six structural bits, nothing more.
/// The following example guarantees a cryptographically strong source by plugging in [`OsRng`]
/// directly.
///
/// [`OsRng`]: rand::rngs::OsRng
///
/// # Examples
///
/// ```rust
/// use uuid4::V4Generator;
///
/// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.generate()?);
/// # Ok::<(), uuid4::RandomnessUnavailable>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number source used by the generator.
    rand_source: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rand_source: R) -> Self {
        Self { rand_source }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// All 128 bits are drawn from the wrapped source; then the version field is overwritten
    /// with `0100` and the variant field with `10`, leaving the other 122 bits as drawn. When
    /// the source fails, the error is returned and no identifier with unfixed structural bits
    /// is ever observable.
    pub fn generate(&mut self) -> Result<Uuid, RandomnessUnavailable> {
        let mut bytes = [0u8; 16];
        self.rand_source.try_fill_bytes(&mut bytes)?;
        bytes[6] = 0x40 | (bytes[6] >> 4);
        bytes[8] = 0x80 | (bytes[8] >> 2);
        Ok(Uuid::from(bytes))
    }
}

/// Supports operations as an iterator that produces a new UUIDv4 object for each call of
/// `next()`, ending only if the underlying source fails.
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }
}

/// Error indicating that the random number source could not supply the requested bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RandomnessUnavailable {}

impl fmt::Display for RandomnessUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "random number source unavailable")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for RandomnessUnavailable {}
