//! A Rust implementation of UUID version 4
//!
//! ```rust
//! use uuid4::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - All of the other 122 bits are filled with bits drawn from the underlying random number
//!   source.
//!
//! # Custom random number sources
//!
//! The [`uuid4()`] entry point draws from a process-wide source seeded by the operating system.
//! Where the choice of source matters, a [`V4Generator`] accepts any type that implements
//! [`generator::RandSource`], including any `rand` (v0.8) generator through the
//! [`with_rand08`](V4Generator::with_rand08) adapter:
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use uuid4::V4Generator;
//!
//! let mut g = V4Generator::with_rand08(StdRng::from_entropy());
//! println!("{}", g.generate()?);
//! # Ok::<(), uuid4::RandomnessUnavailable>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

pub mod codec;
pub use codec::ParseError;

pub mod validator;

pub mod generator;
#[doc(inline)]
pub use generator::{RandomnessUnavailable, V4Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
