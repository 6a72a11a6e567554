// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: dual.rs
// Author: althash maintainers

//! Incremental digest whose `digest()` can be called any number of times.
//!
//! Backend contexts are consumed when finalized. `DualHandleDigest` keeps two
//! slots: the active one receives every update, and on `digest()` it is
//! first duplicated into the spare slot, then finalized. The roles swap
//! afterwards, so the live duplicate carries on from exactly where the
//! caller left off.

use super::algorithm::Algorithm;
use super::backend;
use super::context::DigestContext;
use super::error::HashError;
use std::io::{self, Read};

const READ_BUFFER_SIZE: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
	First,
	Second,
}

impl Slot {
	fn other(self) -> Self {
		match self {
			Slot::First => Slot::Second,
			Slot::Second => Slot::First,
		}
	}

	fn index(self) -> usize {
		match self {
			Slot::First => 0,
			Slot::Second => 1,
		}
	}
}

/// Two context slots behind an active/spare role label.
#[derive(Debug)]
struct HandlePair {
	slots: [Option<DigestContext>; 2],
	active: Slot,
}

impl HandlePair {
	fn open(context: DigestContext) -> Self {
		Self {
			slots: [Some(context), None],
			active: Slot::First,
		}
	}

	fn active(&self) -> Option<&DigestContext> {
		self.slots[self.active.index()].as_ref()
	}

	fn active_mut(&mut self) -> Option<&mut DigestContext> {
		self.slots[self.active.index()].as_mut()
	}

	/// Replaces whatever the spare slot held; the old occupant is dropped.
	fn install_spare(&mut self, context: DigestContext) {
		self.slots[self.active.other().index()] = Some(context);
	}

	fn take_active(&mut self) -> Option<DigestContext> {
		self.slots[self.active.index()].take()
	}

	fn swap(&mut self) {
		self.active = self.active.other();
	}

	fn release(&mut self) {
		self.slots = [None, None];
	}
}

/// Streaming digest with a non-destructive `digest()`.
///
/// An instance has no internal locking; `update` and `digest` take
/// `&mut self`. Once an internal fault is reported the instance is
/// poisoned and every later `update` or `digest` returns
/// [`HashErrorKind::InvalidState`](super::error::HashErrorKind::InvalidState).
#[derive(Debug)]
pub struct DualHandleDigest {
	algorithm: Algorithm,
	digest_length: usize,
	handles: HandlePair,
	poisoned: bool,
}

impl DualHandleDigest {
	pub fn new(algorithm: Algorithm) -> Result<Self, HashError> {
		let backend = backend::initialize();
		backend.test_algorithm(algorithm)?;
		let digest_length = backend
			.digest_len(algorithm)
			.ok_or_else(|| length_unknown(algorithm))?;
		let context = backend.open(algorithm)?;
		Ok(Self {
			algorithm,
			digest_length,
			handles: HandlePair::open(context),
			poisoned: false,
		})
	}

	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// Canonical algorithm name, e.g. `SHA256`.
	pub fn name(&self) -> &'static str {
		self.algorithm.name()
	}

	pub fn digest_size(&self) -> usize {
		self.digest_length
	}

	pub fn is_poisoned(&self) -> bool {
		self.poisoned
	}

	pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
		self.ensure_usable()?;
		match self.handles.active_mut() {
			Some(context) => {
				context.absorb(data);
				Ok(())
			}
			None => Err(self.poison("no active digest context")),
		}
	}

	/// Digest of everything absorbed so far. Absorption can continue
	/// afterwards as though nothing had been finalized.
	pub fn digest(&mut self) -> Result<Vec<u8>, HashError> {
		self.ensure_usable()?;
		let spare = match self.handles.active() {
			Some(context) => context.duplicate(),
			None => return Err(self.poison("no active digest context")),
		};
		debug_assert_eq!(spare.algorithm(), self.algorithm);
		self.handles.install_spare(spare);
		let finished = match self.handles.take_active() {
			Some(context) => context,
			None => return Err(self.poison("no active digest context")),
		};
		let bytes = match finished.finalize_and_read(self.digest_length) {
			Ok(bytes) => bytes,
			Err(err) => {
				self.mark_poisoned(&err);
				return Err(err);
			}
		};
		self.handles.swap();
		tracing::trace!(
			algorithm = self.algorithm.name(),
			len = bytes.len(),
			"digest read"
		);
		Ok(bytes)
	}

	pub fn hexdigest(&mut self) -> Result<String, HashError> {
		self.digest().map(hex::encode)
	}

	/// Independent instance carrying the same absorbed bytes.
	pub fn copy(&self) -> Result<Self, HashError> {
		self.ensure_usable()?;
		let context = self.handles.active().ok_or_else(|| {
			HashError::invalid_state("no active digest context")
		})?;
		Ok(Self {
			algorithm: self.algorithm,
			digest_length: self.digest_length,
			handles: HandlePair::open(context.duplicate()),
			poisoned: false,
		})
	}

	/// Absorbs a reader until EOF, returning the number of bytes read.
	pub fn update_reader<R: Read>(
		&mut self,
		mut reader: R,
	) -> io::Result<u64> {
		let mut buffer = [0u8; READ_BUFFER_SIZE];
		let mut total = 0u64;
		loop {
			let n = reader.read(&mut buffer)?;
			if n == 0 {
				break;
			}
			self.update(&buffer[..n]).map_err(io::Error::other)?;
			total += n as u64;
		}
		Ok(total)
	}

	fn ensure_usable(&self) -> Result<(), HashError> {
		if self.poisoned {
			return Err(HashError::invalid_state(format!(
				"{} digest is poisoned by an earlier failure",
				self.algorithm
			)));
		}
		Ok(())
	}

	fn poison(&mut self, reason: &'static str) -> HashError {
		let err = HashError::invalid_state(reason);
		self.mark_poisoned(&err);
		err
	}

	fn mark_poisoned(&mut self, err: &HashError) {
		tracing::warn!(
			algorithm = self.algorithm.name(),
			error = %err,
			"digest instance poisoned"
		);
		self.poisoned = true;
		self.handles.release();
	}
}

/// The catalog passed the support test but has no length on record.
fn length_unknown(algorithm: Algorithm) -> HashError {
	HashError::initialization(format!(
		"no digest length known for {}",
		algorithm
	))
}

impl io::Write for DualHandleDigest {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf).map_err(io::Error::other)?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
