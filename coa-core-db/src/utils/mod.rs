use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// The hash is stable across runs and systems:
/// - CBOR gives a deterministic binary representation
/// - XxHash64 runs with a fixed seed (0)
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_and_case_sensitive() {
        let a = hash_as_i64(&"Retail - VAT").unwrap();
        let b = hash_as_i64(&"Retail - VAT").unwrap();
        let c = hash_as_i64(&"retail - vat").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
