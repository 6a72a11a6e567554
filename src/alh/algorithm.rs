// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: algorithm.rs
// Author: althash maintainers

//! The fixed set of digest algorithms exposed by althash.
//!
//! The backend knows more algorithms than this; the enum is the allow-list
//! and lookups by name or numeric id never reach past it.

use super::error::HashError;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Algorithm {
	Sha1,
	Ripemd160,
	Md5,
	Md4,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Whirlpool,
}

/// Message-digest ids the backend family knows but althash does not expose.
const WITHHELD_IDS: &[(u32, &str)] = &[
	(6, "TIGER"),
	(302, "CRC32"),
	(303, "CRC32_RFC1510"),
	(304, "CRC24_RFC2440"),
	(306, "TIGER1"),
	(307, "TIGER2"),
	(308, "GOSTR3411_94"),
	(309, "STRIBOG256"),
	(310, "STRIBOG512"),
];

impl Algorithm {
	/// Canonical upper-case name.
	pub const fn name(self) -> &'static str {
		match self {
			Algorithm::Sha1 => "SHA1",
			Algorithm::Ripemd160 => "RIPEMD160",
			Algorithm::Md5 => "MD5",
			Algorithm::Md4 => "MD4",
			Algorithm::Sha224 => "SHA224",
			Algorithm::Sha256 => "SHA256",
			Algorithm::Sha384 => "SHA384",
			Algorithm::Sha512 => "SHA512",
			Algorithm::Whirlpool => "WHIRLPOOL",
		}
	}

	/// Every name accepted by `FromStr`, canonical name first.
	pub const fn aliases(self) -> &'static [&'static str] {
		match self {
			Algorithm::Sha1 => &["SHA1", "SHA"],
			Algorithm::Ripemd160 => &["RIPEMD160"],
			Algorithm::Md5 => &["MD5"],
			Algorithm::Md4 => &["MD4"],
			Algorithm::Sha224 => &["SHA224"],
			Algorithm::Sha256 => &["SHA256"],
			Algorithm::Sha384 => &["SHA384"],
			Algorithm::Sha512 => &["SHA512"],
			Algorithm::Whirlpool => &["WHIRLPOOL"],
		}
	}

	/// Numeric message-digest id (libgcrypt numbering).
	pub const fn id(self) -> u32 {
		match self {
			Algorithm::Md5 => 1,
			Algorithm::Sha1 => 2,
			Algorithm::Ripemd160 => 3,
			Algorithm::Sha256 => 8,
			Algorithm::Sha384 => 9,
			Algorithm::Sha512 => 10,
			Algorithm::Sha224 => 11,
			Algorithm::Md4 => 301,
			Algorithm::Whirlpool => 305,
		}
	}

	pub fn all() -> impl Iterator<Item = Algorithm> {
		Algorithm::iter()
	}
}

impl std::fmt::Display for Algorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

impl FromStr for Algorithm {
	type Err = HashError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Algorithm::iter()
			.find(|alg| {
				alg.aliases()
					.iter()
					.any(|alias| alias.eq_ignore_ascii_case(name))
			})
			.ok_or_else(|| {
				HashError::unsupported(format!(
					"unsupported digest algorithm `{}`",
					name
				))
			})
	}
}

impl TryFrom<u32> for Algorithm {
	type Error = HashError;

	fn try_from(id: u32) -> Result<Self, Self::Error> {
		if let Some(alg) = Algorithm::iter().find(|alg| alg.id() == id) {
			return Ok(alg);
		}
		match WITHHELD_IDS.iter().find(|(known, _)| *known == id) {
			Some((_, name)) => Err(HashError::unsupported(format!(
				"digest algorithm {} (id {}) is not exposed",
				name, id
			))),
			None => Err(HashError::unsupported(format!(
				"unknown digest algorithm id {}",
				id
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::alh::error::HashErrorKind;

	#[test]
	fn allow_list_has_nine_entries() {
		assert_eq!(Algorithm::all().count(), 9);
	}

	#[test]
	fn ids_round_trip_through_try_from() {
		for alg in Algorithm::all() {
			assert_eq!(Algorithm::try_from(alg.id()).unwrap(), alg);
		}
	}

	#[test]
	fn withheld_id_names_the_algorithm() {
		let err = Algorithm::try_from(6).unwrap_err();
		assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
		assert!(err.message().contains("TIGER"));
	}

	#[test]
	fn unknown_id_is_unsupported() {
		let err = Algorithm::try_from(0).unwrap_err();
		assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
		assert!(err.message().contains("unknown"));
	}

	#[test]
	fn sha_alias_maps_to_sha1() {
		assert_eq!("sha".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
		assert_eq!(
			"Whirlpool".parse::<Algorithm>().unwrap(),
			Algorithm::Whirlpool
		);
	}
}
