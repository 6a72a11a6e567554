// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: context.rs
// Author: althash maintainers

//! One in-progress digest computation.

use super::algorithm::Algorithm;
use super::error::HashError;
use digest::DynDigest;

/// Backend digest that can move between threads and clone itself into a
/// new boxed `SendDigest`.
pub(crate) trait SendDigest: DynDigest + Send {
	fn box_clone_send(&self) -> Box<dyn SendDigest>;
}

impl<D> SendDigest for D
where
	D: DynDigest + Clone + Send + 'static,
{
	fn box_clone_send(&self) -> Box<dyn SendDigest> {
		Box::new(self.clone())
	}
}

/// Opaque accumulator for one algorithm.
///
/// Finalization takes the context by value, so a finalized context can
/// never be written or read again.
pub(crate) struct DigestContext {
	algorithm: Algorithm,
	inner: Box<dyn SendDigest>,
}

impl DigestContext {
	pub(crate) fn new(
		algorithm: Algorithm,
		inner: Box<dyn SendDigest>,
	) -> Self {
		Self { algorithm, inner }
	}

	pub(crate) fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	pub(crate) fn absorb(&mut self, data: &[u8]) {
		self.inner.update(data);
	}

	/// Independent context with the same absorbed state.
	pub(crate) fn duplicate(&self) -> Self {
		Self {
			algorithm: self.algorithm,
			inner: self.inner.box_clone_send(),
		}
	}

	pub(crate) fn finalize_and_read(
		self,
		expected_len: usize,
	) -> Result<Vec<u8>, HashError> {
		let algorithm = self.algorithm;
		let bytes = self.inner.finalize();
		if bytes.len() != expected_len {
			return Err(HashError::invalid_state(format!(
				"{} finalized into {} bytes, expected {}",
				algorithm,
				bytes.len(),
				expected_len
			)));
		}
		Ok(bytes.into_vec())
	}
}

impl std::fmt::Debug for DigestContext {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("DigestContext")
			.field("algorithm", &self.algorithm)
			.finish_non_exhaustive()
	}
}

#[cfg(all(test, feature = "md5"))]
mod tests {
	use super::*;
	use crate::alh::backend;
	use hex_literal::hex;

	#[test]
	fn duplicate_is_independent() {
		let mut original =
			backend::initialize().open(Algorithm::Md5).unwrap();
		original.absorb(b"a");
		let mut copy = original.duplicate();
		copy.absorb(b"bc");
		assert_eq!(
			copy.finalize_and_read(16).unwrap(),
			hex!("900150983cd24fb0d6963f7d28e17f72")
		);
		assert_eq!(
			original.finalize_and_read(16).unwrap(),
			hex!("0cc175b9c0f1b6a831c399e269772661")
		);
	}

	#[test]
	fn wrong_length_is_invalid_state() {
		let ctx = backend::initialize().open(Algorithm::Md5).unwrap();
		let err = ctx.finalize_and_read(20).unwrap_err();
		assert_eq!(
			err.kind(),
			crate::alh::error::HashErrorKind::InvalidState
		);
	}
}
