use blake3::Hasher;

/// Hex BLAKE3 digest over `parts`.
///
/// Used to keep cache keys a fixed length regardless of how many skills feed them.
/// Each part is hashed behind its byte length, so `["ab", "c"]` and `["a", "bc"]`
/// differ, as do `["a|b"]` and `["a", "b"]`.
pub fn fingerprint<S: AsRef<str>>(parts: &[S]) -> String {
    let mut hasher = Hasher::new();
    for part in parts {
        let bytes = part.as_ref().as_bytes();
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hasher.finalize().to_hex().to_string()
}
