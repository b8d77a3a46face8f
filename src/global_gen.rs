//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuid4: could not lock global generator")
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide global generator seeded by the operating system's entropy
/// source. On Unix, this function resets the generator when the process ID changes (i.e., upon
/// process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid4::uuid4().to_string();
/// ```
///
/// # Panics
///
/// Panics if the operating system's entropy source is unavailable. Use a [`V4Generator`] with a
/// custom [`RandSource`] to handle that condition without panicking.
///
/// [`V4Generator`]: crate::V4Generator
/// [`RandSource`]: crate::generator::RandSource
pub fn uuid4() -> Uuid {
    lock_global_gen()
        .get_mut()
        .generate()
        .expect("uuid4: random number source unavailable")
}

mod inner {
    use std::fmt;

    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, RandomnessUnavailable, V4Generator};

    /// The random number source of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl fmt::Debug for GlobalGenRng {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "GlobalGenRng {{ .. }}")
        }
    }

    impl RandSource for GlobalGenRng {
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandomnessUnavailable> {
            rand::RngCore::try_fill_bytes(&mut self.0, dest).map_err(|_| RandomnessUnavailable {})
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V4Generator::new(GlobalGenRng(ReseedingRng::new(
                    ChaCha12Core::from_rng(OsRng)
                        .expect("uuid4: could not initialize global generator"),
                    1024 * 64,
                    OsRng,
                ))),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
