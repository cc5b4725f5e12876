use crate::Bucket;
use crate::HASH_SEED;

/// Fold a clue into one of `buckets` buckets.
/// acc = acc * 33 + byte over the UTF-8 bytes, wrapping, seeded at 5381.
///
/// # Panics
///
/// If `buckets` is zero.
pub fn fold(text: &str, buckets: usize) -> Bucket {
    assert!(buckets > 0, "cannot hash into zero buckets");
    let hash = text
        .bytes()
        .fold(HASH_SEED, |acc, byte| acc.wrapping_mul(33).wrapping_add(byte as u64));
    (hash % buckets as u64) as Bucket
}
