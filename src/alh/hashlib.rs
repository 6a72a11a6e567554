// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: hashlib.rs
// Author: althash maintainers

//! Name-based constructors in the style of a `hashlib` module.

use super::algorithm::Algorithm;
use super::dual::DualHandleDigest;
use super::error::HashError;

/// Every accepted algorithm name, in upper and lower case.
pub fn algorithms_available() -> Vec<String> {
	Algorithm::all()
		.flat_map(|alg| alg.aliases().iter())
		.flat_map(|alias| [alias.to_string(), alias.to_ascii_lowercase()])
		.collect()
}

/// Construct a digest by name, absorbing `data` first when given.
pub fn new(
	name: &str,
	data: Option<&[u8]>,
) -> Result<DualHandleDigest, HashError> {
	let algorithm: Algorithm = name.parse()?;
	with_data(algorithm, data)
}

fn with_data(
	algorithm: Algorithm,
	data: Option<&[u8]>,
) -> Result<DualHandleDigest, HashError> {
	let mut hasher = DualHandleDigest::new(algorithm)?;
	if let Some(data) = data {
		hasher.update(data)?;
	}
	Ok(hasher)
}

macro_rules! impl_named_constructor {
	($name:ident, $alg:expr) => {
		pub fn $name(
			data: Option<&[u8]>,
		) -> Result<DualHandleDigest, HashError> {
			with_data($alg, data)
		}
	};
}

impl_named_constructor!(md5, Algorithm::Md5);
impl_named_constructor!(sha1, Algorithm::Sha1);
impl_named_constructor!(sha224, Algorithm::Sha224);
impl_named_constructor!(sha256, Algorithm::Sha256);
impl_named_constructor!(sha384, Algorithm::Sha384);
impl_named_constructor!(sha512, Algorithm::Sha512);
