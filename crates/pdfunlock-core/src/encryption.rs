//! Encryption dictionary description.
//!
//! Provides [`EncryptionInfo`] for the fields of a PDF `/Encrypt` dictionary
//! that tell a user which security handler protects a file.

/// Parameters of a PDF `/Encrypt` dictionary.
///
/// Every field is optional because producers routinely omit entries that
/// have a default (e.g. `/Length` for 40-bit RC4).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionInfo {
    /// Security handler name (`/Filter`, usually `Standard`).
    pub filter: Option<String>,
    /// Algorithm version (`/V`).
    pub version: Option<i64>,
    /// Standard security handler revision (`/R`).
    pub revision: Option<i64>,
    /// Key length in bits (`/Length`).
    pub key_length: Option<i64>,
    /// User access permission flags (`/P`).
    pub permissions: Option<i64>,
}

impl EncryptionInfo {
    /// A short human-readable name for the cipher, based on `/V` and `/R`.
    pub fn algorithm(&self) -> &'static str {
        match (self.version, self.revision) {
            (Some(5), Some(6)) => "AES-256",
            (Some(5), _) => "AES-256 (draft)",
            (Some(4), Some(4)) => "RC4 or AES-128 (crypt filters)",
            (Some(2), _) | (_, Some(3)) => "RC4 (up to 128-bit)",
            (Some(1), _) | (_, Some(2)) => "RC4 40-bit",
            _ => "unknown",
        }
    }

    /// The key length in bits, falling back to the 40-bit default for V=1.
    pub fn effective_key_length(&self) -> Option<i64> {
        match (self.key_length, self.version) {
            (Some(len), _) => Some(len),
            (None, Some(1)) => Some(40),
            (None, Some(5)) => Some(256),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(version: i64, revision: i64) -> EncryptionInfo {
        EncryptionInfo {
            filter: Some("Standard".to_string()),
            version: Some(version),
            revision: Some(revision),
            key_length: None,
            permissions: Some(-4),
        }
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(info(1, 2).algorithm(), "RC4 40-bit");
        assert_eq!(info(2, 3).algorithm(), "RC4 (up to 128-bit)");
        assert_eq!(info(4, 4).algorithm(), "RC4 or AES-128 (crypt filters)");
        assert_eq!(info(5, 6).algorithm(), "AES-256");
        assert_eq!(info(5, 5).algorithm(), "AES-256 (draft)");
        assert_eq!(EncryptionInfo::default().algorithm(), "unknown");
    }

    #[test]
    fn effective_key_length_defaults() {
        assert_eq!(info(1, 2).effective_key_length(), Some(40));
        assert_eq!(info(5, 6).effective_key_length(), Some(256));
        assert_eq!(info(2, 3).effective_key_length(), None);

        let explicit = EncryptionInfo {
            key_length: Some(128),
            ..info(2, 3)
        };
        assert_eq!(explicit.effective_key_length(), Some(128));
    }
}
