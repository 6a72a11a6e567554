// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash

use althash::alh::hashlib;
use althash::{Algorithm, HashErrorKind};

#[test]
fn new_accepts_aliases_in_either_case() {
	for name in ["SHA", "sha", "SHA1", "sha1"] {
		let hasher = hashlib::new(name, None).unwrap();
		assert_eq!(hasher.algorithm(), Algorithm::Sha1);
		assert_eq!(hasher.name(), "SHA1");
	}
}

#[test]
fn unknown_name_is_rejected_instead_of_defaulting() {
	let err = hashlib::new("tiger", Some(b"abc")).unwrap_err();
	assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
	assert!(err.message().contains("tiger"));
}

#[test]
fn initial_data_is_absorbed() {
	let mut hasher = hashlib::sha256(Some(b"abc")).unwrap();
	assert_eq!(
		hasher.hexdigest().unwrap(),
		"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
	);
}

#[test]
fn named_constructors_pick_their_algorithm() {
	assert_eq!(hashlib::md5(None).unwrap().digest_size(), 16);
	assert_eq!(hashlib::sha1(None).unwrap().digest_size(), 20);
	assert_eq!(hashlib::sha224(None).unwrap().digest_size(), 28);
	assert_eq!(hashlib::sha384(None).unwrap().digest_size(), 48);
	assert_eq!(hashlib::sha512(None).unwrap().digest_size(), 64);
}

#[test]
fn hexdigest_of_empty_md5() {
	let mut hasher = hashlib::md5(None).unwrap();
	assert_eq!(
		hasher.hexdigest().unwrap(),
		"d41d8cd98f00b204e9800998ecf8427e"
	);
}

#[test]
fn available_names_cover_the_allow_list() {
	let names = hashlib::algorithms_available();
	for expected in [
		"SHA1", "sha", "RIPEMD160", "md4", "MD5", "sha224", "SHA256",
		"sha384", "SHA512", "whirlpool",
	] {
		assert!(names.iter().any(|n| n == expected), "{}", expected);
	}
	assert!(!names.iter().any(|n| n.eq_ignore_ascii_case("tiger")));
}

#[test]
fn numeric_ids_follow_the_allow_list() {
	assert_eq!(Algorithm::try_from(8).unwrap(), Algorithm::Sha256);
	assert_eq!(Algorithm::try_from(305).unwrap(), Algorithm::Whirlpool);
	for withheld in [6, 302, 303, 304, 306, 307, 308, 309, 310] {
		let err = Algorithm::try_from(withheld).unwrap_err();
		assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
	}
}
