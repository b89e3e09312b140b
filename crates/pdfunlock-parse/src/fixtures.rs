//! In-memory PDF fixtures for tests.
//!
//! Builds plain and RC4-encrypted (V=1, R=2, 40-bit Standard security
//! handler) PDFs with lopdf, so no crate in the workspace needs binary
//! fixtures on disk. Enabled by the `test-util` feature.
//!
//! Every page `n` (1-based) carries the content stream [`page_content`]`(n)`.
//!
//! # Panics
//!
//! The builders panic if lopdf fails to serialize a fixture.

use std::path::Path;

use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// PDF standard padding bytes used in encryption key derivation.
const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

const FILE_ID: &[u8; 16] = b"testfileid123456";
const PERMISSIONS: i32 = -4;

/// Content stream of page `n` (1-based) in every fixture.
pub fn page_content(n: usize) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td (Page {n}) Tj ET").into_bytes()
}

/// Content streams `1..=page_count`, as a decrypted fixture should read back.
pub fn expected_contents(page_count: usize) -> Vec<Vec<u8>> {
    (1..=page_count).map(page_content).collect()
}

fn rc4_transform(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut s: Vec<u8> = (0..=255).collect();
    let mut j: usize = 0;
    for i in 0..256 {
        j = (j + s[i] as usize + key[i % key.len()] as usize) & 0xFF;
        s.swap(i, j);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut i: usize = 0;
    j = 0;
    for &byte in data {
        i = (i + 1) & 0xFF;
        j = (j + s[i] as usize) & 0xFF;
        s.swap(i, j);
        let k = s[(s[i] as usize + s[j] as usize) & 0xFF];
        out.push(byte ^ k);
    }
    out
}

fn build_document(page_count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for n in 1..=page_count {
        let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(n)));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn to_bytes(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// An unencrypted PDF with `page_count` pages.
pub fn plain_pdf(page_count: usize) -> Vec<u8> {
    to_bytes(build_document(page_count))
}

/// An RC4 40-bit encrypted PDF whose user and owner password are the UTF-8
/// bytes of `password`.
pub fn encrypted_pdf(password: &str, page_count: usize) -> Vec<u8> {
    encrypted_pdf_with_raw_password(password.as_bytes(), page_count)
}

/// Like [`encrypted_pdf`], but keyed on `password` exactly as given.
///
/// R2 handlers key on PDFDocEncoded bytes, so a non-ASCII password such as
/// `é` is stored as `[0xE9]`, not as its UTF-8 encoding.
pub fn encrypted_pdf_with_raw_password(password: &[u8], page_count: usize) -> Vec<u8> {
    let mut padded_pw = Vec::with_capacity(32);
    let pw_len = password.len().min(32);
    padded_pw.extend_from_slice(&password[..pw_len]);
    padded_pw.extend_from_slice(&PAD_BYTES[..32 - pw_len]);

    // Algorithm 3.3: /O value, owner password == user password
    let o_key_digest = md5::compute(&padded_pw);
    let o_value = rc4_transform(&o_key_digest[..5], &padded_pw);

    // Algorithm 3.2: encryption key
    let mut key_input = Vec::with_capacity(128);
    key_input.extend_from_slice(&padded_pw);
    key_input.extend_from_slice(&o_value);
    key_input.extend_from_slice(&(PERMISSIONS as u32).to_le_bytes());
    key_input.extend_from_slice(FILE_ID);
    let key_digest = md5::compute(&key_input);
    let enc_key = key_digest[..5].to_vec();

    // Algorithm 3.4: /U value (R=2)
    let u_value = rc4_transform(&enc_key, &PAD_BYTES);

    let mut doc = build_document(page_count);
    for (&obj_id, obj) in doc.objects.iter_mut() {
        let mut obj_key_input = Vec::with_capacity(10);
        obj_key_input.extend_from_slice(&enc_key);
        obj_key_input.extend_from_slice(&obj_id.0.to_le_bytes()[..3]);
        obj_key_input.extend_from_slice(&obj_id.1.to_le_bytes()[..2]);
        let obj_key_digest = md5::compute(&obj_key_input);
        let obj_key = &obj_key_digest[..(enc_key.len() + 5).min(16)];

        match obj {
            Object::Stream(stream) => {
                let encrypted = rc4_transform(obj_key, &stream.content);
                stream.set_content(encrypted);
            }
            Object::String(content, _) => {
                *content = rc4_transform(obj_key, content);
            }
            _ => {}
        }
    }

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1_i64,
        "R" => 2_i64,
        "Length" => 40_i64,
        "O" => Object::String(o_value, StringFormat::Literal),
        "U" => Object::String(u_value, StringFormat::Literal),
        "P" => PERMISSIONS as i64,
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(FILE_ID.to_vec(), StringFormat::Literal),
            Object::String(FILE_ID.to_vec(), StringFormat::Literal),
        ]),
    );
    to_bytes(doc)
}

/// Content streams of every page of `doc`, in page order.
pub fn page_contents(doc: &Document) -> Vec<Vec<u8>> {
    doc.get_pages()
        .values()
        .map(|&id| doc.get_page_content(id).expect("page content"))
        .collect()
}

/// Load `path` with lopdf, asserting it carries no `/Encrypt` dictionary.
pub fn load_plain(path: &Path) -> Document {
    let bytes = std::fs::read(path).expect("failed to read output");
    let doc = Document::load_mem(&bytes).expect("output should parse");
    assert!(
        doc.trailer.get(b"Encrypt").is_err() && !doc.was_encrypted(),
        "{} is still encrypted",
        path.display()
    );
    doc
}

/// Content streams of every page of the PDF at `path`, asserting it is not
/// encrypted.
pub fn plain_page_contents(path: &Path) -> Vec<Vec<u8>> {
    page_contents(&load_plain(path))
}
