//! Hash primitives feeding the tree.
//!
//! A [`Hasher`] turns one or more byte slices into a fixed-length hex digest
//! string. The slices are hashed as one concatenated payload, so
//! `hash_parts(&[a, b]) == hash_parts(&[a ++ b])`.

use std::{fmt, str::FromStr};

use tiny_keccak::{Hasher as _, Keccak};

use crate::{Error, Result};

/// The hash primitive used to combine nodes.
///
/// Implementations must be deterministic and pure: the same input always
/// yields the same digest.
pub trait Hasher {
    /// Hash the concatenation of `parts` into a hex digest string.
    fn hash_parts(&self, parts: &[&[u8]]) -> String;

    /// Hash a single raw value, typically to produce a leaf digest.
    fn hash_leaf(&self, data: &[u8]) -> String {
        self.hash_parts(&[data])
    }
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn hash_parts(&self, parts: &[&[u8]]) -> String {
        (**self).hash_parts(parts)
    }
}

/// Blake3, rendered as 64 lowercase hex characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl Hasher for Blake3Hasher {
    fn hash_parts(&self, parts: &[&[u8]]) -> String {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        hex::encode(hasher.finalize().as_bytes())
    }
}

/// Keccak-256, rendered as `0x` followed by 64 lowercase hex characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash_parts(&self, parts: &[&[u8]]) -> String {
        let mut hasher = Keccak::v256();
        for part in parts {
            hasher.update(part);
        }
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        format!("0x{}", hex::encode(output))
    }
}

/// Hash algorithm selected at runtime, e.g. from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// See [`Blake3Hasher`].
    #[default]
    Blake3,
    /// See [`Keccak256Hasher`].
    Keccak256,
}

impl HashAlgorithm {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Keccak256 => "keccak256",
        }
    }
}

impl Hasher for HashAlgorithm {
    fn hash_parts(&self, parts: &[&[u8]]) -> String {
        match self {
            HashAlgorithm::Blake3 => Blake3Hasher.hash_parts(parts),
            HashAlgorithm::Keccak256 => Keccak256Hasher.hash_parts(parts),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "keccak256" | "keccak-256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            _ => Err(Error::UnknownHashAlgorithm(s.to_owned())),
        }
    }
}

/// A hex digest string checked on construction.
///
/// Trees store plain strings; `Digest` is for callers accepting digests from
/// outside and wanting them validated first. An optional `0x` prefix is kept
/// as given, since it is part of the text that gets hashed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Validate `s` as a non-empty hex string with an optional `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let body = s.strip_prefix("0x").unwrap_or(s);
        if body.is_empty() {
            return Err(Error::InvalidDigest {
                digest: s.to_owned(),
                reason: "empty".to_owned(),
            });
        }
        hex::decode(body).map_err(|e| Error::InvalidDigest {
            digest: s.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Digest(s.to_owned()))
    }

    /// The digest text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the digest and return its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Digest::from_hex(s)
    }
}
