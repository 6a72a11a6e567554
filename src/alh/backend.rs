// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: backend.rs
// Author: althash maintainers

//! Process-wide digest backend.
//!
//! The backend is the catalog of digest implementations compiled into this
//! build, built once on first use and shared by every instance. It answers
//! the support test, reports digest lengths and opens fresh contexts.

use super::algorithm::Algorithm;
use super::context::{DigestContext, SendDigest};
use super::error::HashError;
use digest::{DynDigest, OutputSizeUser};
use std::sync::OnceLock;

type ContextFactory = fn() -> Box<dyn SendDigest>;

#[derive(Clone, Copy)]
struct BackendEntry {
	algorithm: Algorithm,
	digest_len: usize,
	factory: ContextFactory,
}

fn open_boxed<D>() -> Box<dyn SendDigest>
where
	D: DynDigest + Default + Clone + Send + 'static,
{
	Box::new(D::default())
}

fn entry<D>(algorithm: Algorithm) -> BackendEntry
where
	D: DynDigest + Default + Clone + Send + OutputSizeUser + 'static,
{
	BackendEntry {
		algorithm,
		digest_len: <D as OutputSizeUser>::output_size(),
		factory: open_boxed::<D>,
	}
}

macro_rules! backend_catalog {
	($($feature:literal => $alg:expr => $hasher:ty),+ $(,)?) => {{
		#[allow(unused_mut)]
		let mut entries: Vec<BackendEntry> = Vec::new();
		$(
			#[cfg(feature = $feature)]
			entries.push(entry::<$hasher>($alg));
		)+
		entries
	}};
}

pub struct Backend {
	version: &'static str,
	entries: Vec<BackendEntry>,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Returns the shared backend, building it on the first call.
///
/// Concurrent first calls are serialized by the `OnceLock`; exactly one
/// of them builds the catalog and the rest observe the finished value.
pub fn initialize() -> &'static Backend {
	BACKEND.get_or_init(|| {
		let backend = Backend {
			version: env!("CARGO_PKG_VERSION"),
			entries: backend_catalog!(
				"sha1" => Algorithm::Sha1 => sha1::Sha1,
				"ripemd160" => Algorithm::Ripemd160 => ripemd::Ripemd160,
				"md5" => Algorithm::Md5 => md5::Md5,
				"md4" => Algorithm::Md4 => md4::Md4,
				"sha2" => Algorithm::Sha224 => sha2::Sha224,
				"sha2" => Algorithm::Sha256 => sha2::Sha256,
				"sha2" => Algorithm::Sha384 => sha2::Sha384,
				"sha2" => Algorithm::Sha512 => sha2::Sha512,
				"whirlpool" => Algorithm::Whirlpool => whirlpool::Whirlpool,
			),
		};
		tracing::debug!(
			version = backend.version,
			algorithms = backend.entries.len(),
			"digest backend initialized"
		);
		backend
	})
}

pub fn is_initialized() -> bool {
	BACKEND.get().is_some()
}

impl Backend {
	pub fn version(&self) -> &'static str {
		self.version
	}

	/// Algorithms compiled into this build.
	pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
		self.entries.iter().map(|entry| entry.algorithm)
	}

	fn lookup(&self, algorithm: Algorithm) -> Option<&BackendEntry> {
		self.entries
			.iter()
			.find(|entry| entry.algorithm == algorithm)
	}

	pub fn test_algorithm(
		&self,
		algorithm: Algorithm,
	) -> Result<(), HashError> {
		match self.lookup(algorithm) {
			Some(_) => Ok(()),
			None => Err(HashError::unsupported(format!(
				"digest algorithm {} is not compiled into this build",
				algorithm
			))),
		}
	}

	pub fn digest_len(&self, algorithm: Algorithm) -> Option<usize> {
		self.lookup(algorithm).map(|entry| entry.digest_len)
	}

	pub(crate) fn open(
		&self,
		algorithm: Algorithm,
	) -> Result<DigestContext, HashError> {
		let entry = self.lookup(algorithm).ok_or_else(|| {
			HashError::initialization(format!(
				"backend cannot open a {} context",
				algorithm
			))
		})?;
		let inner = (entry.factory)();
		if inner.output_size() != entry.digest_len {
			return Err(HashError::initialization(format!(
				"{} context reports a {}-byte digest, expected {}",
				algorithm,
				inner.output_size(),
				entry.digest_len
			)));
		}
		tracing::trace!(algorithm = algorithm.name(), "opened digest context");
		Ok(DigestContext::new(algorithm, inner))
	}
}
