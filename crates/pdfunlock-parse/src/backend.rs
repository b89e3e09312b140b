//! PDF backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the PDF operations the
//! unlock engine needs: open (optionally under a password), inspect the
//! encryption dictionary, and serialize without encryption.

use pdfunlock_core::{EncryptionInfo, UnlockError};

/// Trait abstracting PDF loading, decryption and serialization.
///
/// # Associated Types
///
/// - `Document`: The parsed PDF document representation.
/// - `Error`: Backend-specific error type, convertible to [`UnlockError`].
///
/// # Usage
///
/// ```ignore
/// let mut doc = MyBackend::open_with_password(pdf_bytes, "secret")?;
/// let plain = MyBackend::save(&mut doc)?;
/// assert!(MyBackend::encryption_info(&plain)?.is_none());
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`UnlockError`].
    type Error: std::error::Error + Into<UnlockError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document,
    /// or [`UnlockError::PasswordRequired`] if the document is encrypted.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse PDF bytes and decrypt them with `password`.
    ///
    /// The password may be either the user or the owner password. If the
    /// document is not encrypted, the password is ignored. Backends encode
    /// the password the way the document's security handler expects
    /// (PDFDocEncoding for revisions 2 to 4, SASLprep'd UTF-8 for 5 and 6).
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::InvalidPassword`] if the password is rejected,
    /// or another error if the bytes are not a valid PDF or the encryption
    /// scheme is unsupported.
    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error>;

    /// Read the `/Encrypt` dictionary without decrypting anything.
    ///
    /// Returns `None` for unencrypted documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document.
    fn encryption_info(bytes: &[u8]) -> Result<Option<EncryptionInfo>, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Page count read from the source bytes' page tree, independently of
    /// the objects [`open_with_password`](Self::open_with_password) loaded.
    ///
    /// `None` when the source does not declare a usable count.
    fn source_page_count(doc: &Self::Document) -> Option<usize>;

    /// Whether the document was encrypted before it was opened.
    fn was_encrypted(doc: &Self::Document) -> bool;

    /// Serialize the (decrypted) document to bytes without encryption.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(doc: &mut Self::Document) -> Result<Vec<u8>, Self::Error>;
}
