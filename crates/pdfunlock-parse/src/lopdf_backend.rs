//! lopdf-based PDF backend.
//!
//! Implements [`PdfBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. This is the default backend for pdfunlock-rs.

use crate::backend::PdfBackend;
use crate::error::BackendError;
use lopdf::encryption::DecryptionError;
use pdfunlock_core::{EncryptionInfo, UnlockError};

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Number of pages, cached at open time.
    page_count: usize,
    /// Page count declared by the source's page tree.
    source_page_count: Option<usize>,
    /// Whether the source bytes carried an `/Encrypt` dictionary.
    was_encrypted: bool,
}

impl LopdfDocument {
    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }

    fn new(inner: lopdf::Document, source_page_count: Option<usize>) -> Self {
        let page_count = inner.get_pages().len();
        let was_encrypted = inner.was_encrypted();
        Self {
            inner,
            page_count,
            source_page_count,
            was_encrypted,
        }
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_count)
            .field("source_page_count", &self.source_page_count)
            .field("was_encrypted", &self.was_encrypted)
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use pdfunlock_parse::{LopdfBackend, PdfBackend};
///
/// let mut doc = LopdfBackend::open_with_password(&pdf_bytes, "secret")?;
/// let plain = LopdfBackend::save(&mut doc)?;
/// ```
pub struct LopdfBackend;

/// Map an lopdf load failure onto the backend error taxonomy.
fn load_error(e: lopdf::Error) -> BackendError {
    match e {
        lopdf::Error::InvalidPassword
        | lopdf::Error::Decryption(DecryptionError::IncorrectPassword) => {
            BackendError::Core(UnlockError::InvalidPassword)
        }
        lopdf::Error::Decryption(e) => BackendError::Decrypt(e.to_string()),
        e => BackendError::Parse(format!("failed to parse PDF: {e}")),
    }
}

/// Read the page tree's `/Count` straight from the source bytes.
///
/// lopdf skips objects it cannot parse or decrypt while loading, so this
/// count is the reference the loaded page list is checked against.
fn source_page_count(bytes: &[u8], password: Option<&str>) -> Option<usize> {
    let metadata = match password {
        Some(password) => lopdf::Document::load_metadata_mem_with_password(bytes, password),
        None => lopdf::Document::load_metadata_mem(bytes),
    };
    match metadata {
        Ok(metadata) if metadata.page_count > 0 => Some(metadata.page_count as usize),
        Ok(_) => None,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "page tree count unavailable");
            None
        }
    }
}

/// Resolve the trailer's `/Encrypt` entry, which may be a direct dictionary
/// or a reference to one.
fn encrypt_dictionary(doc: &lopdf::Document) -> Result<Option<&lopdf::Dictionary>, BackendError> {
    let entry = match doc.trailer.get(b"Encrypt") {
        Ok(entry) => entry,
        Err(_) => return Ok(None),
    };
    let dict = match entry {
        lopdf::Object::Reference(id) => doc
            .get_dictionary(*id)
            .map_err(|e| BackendError::Parse(format!("invalid /Encrypt reference: {e}")))?,
        lopdf::Object::Dictionary(dict) => dict,
        other => {
            return Err(BackendError::Parse(format!(
                "/Encrypt is not a dictionary: {other:?}"
            )));
        }
    };
    Ok(Some(dict))
}

fn name_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .and_then(|o| o.as_name())
        .ok()
        .map(|n| String::from_utf8_lossy(n).into_owned())
}

fn int_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<i64> {
    dict.get(key).and_then(|o| o.as_i64()).ok()
}

fn info_from_dictionary(dict: &lopdf::Dictionary) -> EncryptionInfo {
    EncryptionInfo {
        filter: name_entry(dict, b"Filter"),
        version: int_entry(dict, b"V"),
        revision: int_entry(dict, b"R"),
        key_length: int_entry(dict, b"Length"),
        // /P is a signed 32-bit field; lopdf re-encodes it unsigned.
        permissions: int_entry(dict, b"P").map(|p| p as i32 as i64),
    }
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = lopdf::Document::load_mem(bytes).map_err(load_error)?;

        // lopdf decrypts files with an empty user password on its own;
        // anything still carrying /Encrypt needs a password.
        if inner.is_encrypted() {
            return Err(BackendError::Core(UnlockError::PasswordRequired));
        }

        let source_pages = source_page_count(bytes, None);
        Ok(LopdfDocument::new(inner, source_pages))
    }

    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error> {
        let inner = lopdf::Document::load_mem_with_password(bytes, password).map_err(load_error)?;
        if inner.is_encrypted() {
            return Err(BackendError::Decrypt(
                "document is still encrypted after authentication".to_string(),
            ));
        }

        #[cfg(feature = "tracing")]
        if inner.was_encrypted() {
            tracing::debug!(objects = inner.objects.len(), "decrypted document");
        }

        let source_pages = source_page_count(bytes, Some(password));
        Ok(LopdfDocument::new(inner, source_pages))
    }

    fn encryption_info(bytes: &[u8]) -> Result<Option<EncryptionInfo>, Self::Error> {
        let doc = lopdf::Document::load_mem(bytes).map_err(load_error)?;
        if let Some(dict) = encrypt_dictionary(&doc)? {
            return Ok(Some(info_from_dictionary(dict)));
        }

        // Empty user password: lopdf already decrypted and dropped /Encrypt,
        // so describe the handler it authenticated against.
        let Some(state) = doc.encryption_state.as_ref() else {
            return Ok(None);
        };
        let dict = state
            .encode()
            .map_err(|e| BackendError::Decrypt(e.to_string()))?;
        Ok(Some(info_from_dictionary(&dict)))
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.page_count
    }

    fn source_page_count(doc: &Self::Document) -> Option<usize> {
        doc.source_page_count
    }

    fn was_encrypted(doc: &Self::Document) -> bool {
        doc.was_encrypted
    }

    fn save(doc: &mut Self::Document) -> Result<Vec<u8>, Self::Error> {
        let mut buf = Vec::new();
        doc.inner
            .save_to(&mut buf)
            .map_err(|e| BackendError::Serialize(format!("failed to serialize PDF: {e}")))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = buf.len(), "serialized document");

        Ok(buf)
    }
}
