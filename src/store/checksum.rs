//! CRC32 checksum over the stored form body

use crc32fast::Hasher;

pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

pub fn verify_checksum(data: &[u8], expected: u32) -> bool {
    compute_checksum(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_detects_single_bit_flip() {
        let mut body = br#"{"facts":{"constructionCost":"1-5"}}"#.to_vec();
        let original = compute_checksum(&body);
        body[3] ^= 0x01;
        assert!(!verify_checksum(&body, original));
    }

    #[test]
    fn test_verify_matches_compute() {
        let body = "점검 결과".as_bytes();
        assert!(verify_checksum(body, compute_checksum(body)));
    }
}
