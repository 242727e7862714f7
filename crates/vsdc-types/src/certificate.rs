use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Symbols a certificate id may contain.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of symbols in every certificate id.
pub const CERTIFICATE_LEN: usize = 16;

/// Opaque SDC certificate token issued once per invoice.
///
/// Each of the 16 symbols is drawn independently and uniformly from
/// [`ALPHABET`]. Uniqueness is probabilistic (36^16 possible ids); nothing
/// checks for collisions between different invoices.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CertificateId(String);

impl CertificateId {
    /// Draw a fresh id from the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Draw a fresh id from the given generator.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let token = (0..CERTIFICATE_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(token)
    }

    /// Parse and check an id received from the outside.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let actual = s.chars().count();
        if actual != CERTIFICATE_LEN {
            return Err(TypeError::InvalidLength {
                expected: CERTIFICATE_LEN,
                actual,
            });
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii() || !ALPHABET.contains(&(*c as u8))) {
            return Err(TypeError::InvalidCharacter(bad));
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verification URL for this certificate under `base`.
    pub fn verification_url(&self, base: &str) -> String {
        format!("{base}{}", self.0)
    }
}

impl TryFrom<String> for CertificateId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CertificateId> for String {
    fn from(id: CertificateId) -> Self {
        id.0
    }
}

impl fmt::Debug for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CertificateId({})", self.0)
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
