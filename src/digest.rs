use md5::{Digest, Md5};

// MD5 of the input text. Collision resistance is irrelevant here; this is
// the one source of values that must reproduce across runs and across the
// per-node views of a single event.
pub fn digest(text: &str) -> [u8; 16] {
    let mut hash = Md5::new();
    hash.update(text.as_bytes());
    hash.finalize().into()
}
