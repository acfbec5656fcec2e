use crate::CryptoError;

/// Hash algorithms accepted for OAEP label hashing and MGF1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// All supported algorithms, weakest first.
    pub const ALL: [HashAlgId; 5] = [
        HashAlgId::Sha1,
        HashAlgId::Sha224,
        HashAlgId::Sha256,
        HashAlgId::Sha384,
        HashAlgId::Sha512,
    ];

    /// Resolve a symbolic algorithm name.
    ///
    /// Matching ignores case, surrounding whitespace and the separator between
    /// "SHA" and the digit part, so `SHA1`, `sha-1` and `SHA_1` all name SHA-1.
    /// An empty name selects SHA-1, which the remote verifiers expect when the
    /// caller does not specify one.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(HashAlgId::Sha1);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "SHA1" => Ok(HashAlgId::Sha1),
            "SHA224" => Ok(HashAlgId::Sha224),
            "SHA256" => Ok(HashAlgId::Sha256),
            "SHA384" => Ok(HashAlgId::Sha384),
            "SHA512" => Ok(HashAlgId::Sha512),
            _ => Err(CryptoError::UnsupportedHashAlgorithm(trimmed.to_string())),
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            HashAlgId::Sha1 => 20,
            HashAlgId::Sha224 => 28,
            HashAlgId::Sha256 => 32,
            HashAlgId::Sha384 => 48,
            HashAlgId::Sha512 => 64,
        }
    }

    /// Canonical hyphenated name, e.g. `SHA-256`.
    pub fn canonical_name(self) -> &'static str {
        match self {
            HashAlgId::Sha1 => "SHA-1",
            HashAlgId::Sha224 => "SHA-224",
            HashAlgId::Sha256 => "SHA-256",
            HashAlgId::Sha384 => "SHA-384",
            HashAlgId::Sha512 => "SHA-512",
        }
    }
}

impl std::fmt::Display for HashAlgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.canonical_name())
    }
}

impl std::str::FromStr for HashAlgId {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
