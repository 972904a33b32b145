//! The container integrity checksum: the first 48 bits of the SHA-1 digest of the
//! body text, read big-endian.

use sha1::{Digest, Sha1};

use crate::bridge::format::CHECKSUM_LEN;

/// Computes the 48-bit checksum of `body_text`.
pub fn checksum48(body_text: &[u8]) -> u64 {
    let digest = Sha1::digest(body_text);
    read_be(&digest[..CHECKSUM_LEN])
}

/// Reads up to eight bytes as a big-endian unsigned integer.
pub fn read_be(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Writes the low `len` bytes of `value` big-endian.
pub fn write_be(value: u64, len: usize, out: &mut Vec<u8>) {
    debug_assert!(len <= 8);
    let bytes = value.to_be_bytes();
    out.extend_from_slice(&bytes[8 - len..]);
}
