//! Secure containers for seed material.
//!
//! Decoded seed bytes are key material: they must live no longer than the
//! caller needs them and must not leak through `Debug` output or logs. The
//! codec returns seeds in [`SecureBytes`], which zeroes its buffer on drop;
//! mnemonic phrases a caller wants to hold on to can be wrapped in
//! [`SecureString`]. The codec itself never retains either.

use secrecy::{SecretBox, SecretString};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A seed byte buffer that is zeroed when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes {
    bytes: Vec<u8>,
}

impl SecureBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Borrow the seed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable access, for callers that fill a buffer in place.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Surrender the bytes to the caller, who takes over wiping duty.
    pub fn into_vec(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len());
        out.extend_from_slice(&self.bytes);
        // self is zeroed on drop
        out
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.bytes.len())
    }
}

impl PartialEq for SecureBytes {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for SecureBytes {}

/// A string holding sensitive material, zeroed on drop.
pub type SecureString = SecretString;

/// Wrap a phrase in a [`SecureString`].
pub fn secure_string(s: impl Into<String>) -> SecureString {
    s.into().into()
}

/// Wrap a byte buffer in a `secrecy` box.
pub fn secure_bytes(bytes: Vec<u8>) -> SecretBox<Vec<u8>> {
    SecretBox::new(Box::new(bytes))
}
