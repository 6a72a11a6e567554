// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: lib.rs
// Author: althash maintainers

//! Incremental message digests over a fixed set of algorithms, with a
//! `digest()` that can be read any number of times between updates.

pub mod alh {
	pub mod algorithm;
	pub mod backend;
	pub(crate) mod context;
	pub mod dual;
	pub mod error;
	pub mod hashlib;
}

pub use alh::algorithm::Algorithm;
pub use alh::dual::DualHandleDigest;
pub use alh::error::{HashError, HashErrorKind};
