//! Tests for edge fingerprints

#[cfg(test)]
mod tests {
    use tilemosaic::MosaicError;
    use tilemosaic::spatial::edge::EdgeFingerprint;

    fn edge(pattern: &str) -> EdgeFingerprint {
        let pixels: Vec<bool> = pattern.chars().map(|c| c == '#').collect();
        EdgeFingerprint::from_pixels(&pixels).expect("valid edge")
    }

    // Tests the first pixel lands in the most significant bit
    // Verified by shifting in the opposite direction
    #[test]
    fn test_forward_and_reverse_encoding() {
        let fingerprint = edge("##.#");
        assert_eq!(fingerprint.forward(), 0b1101);
        assert_eq!(fingerprint.reverse(), 0b1011);
        assert_eq!(fingerprint.canonical(), 0b1011);
        assert_eq!(fingerprint.len(), 4);
        assert_eq!(fingerprint.to_string(), "##.#");
    }

    // Tests matching is symmetric and ignores reading direction
    // Verified by comparing forward to forward only
    #[test]
    fn test_matches_is_symmetric() {
        let a = edge("#..##.");
        let b = edge(".##..#");
        let c = edge("#..#..");
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(a.matches(&a));
        assert!(!a.matches(&c));
        assert!(!c.matches(&a));
    }

    // Tests exact abutting requires opposite reading directions
    // Verified by comparing forward to forward in abuts
    #[test]
    fn test_abuts_requires_reversed_reading() {
        let a = edge("##...");
        let b = edge("...##");
        assert!(a.abuts(&b));
        assert!(b.abuts(&a));
        assert!(!a.abuts(&a));
    }

    // Tests flipping swaps readings and flipping twice is the identity
    // Verified by clearing reverse in flip
    #[test]
    fn test_flip_twice_is_identity() {
        let original = edge("#.##..");
        let mut flipped = original;
        flipped.flip();
        assert_eq!(flipped.forward(), original.reverse());
        assert_eq!(flipped.reverse(), original.forward());
        flipped.flip();
        assert_eq!(flipped, original);
    }

    // Tests different lengths never match even with equal bit patterns
    // Verified by removing the length comparison
    #[test]
    fn test_length_is_part_of_identity() {
        assert!(!edge("..#").matches(&edge("...#")));
    }

    // Tests empty and oversized borders are rejected
    // Verified by raising the limit to 65
    #[test]
    fn test_rejects_empty_and_oversized_edges() {
        assert!(matches!(
            EdgeFingerprint::from_pixels(&[]),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(EdgeFingerprint::from_pixels(&[true; 64]).is_ok());
        assert!(EdgeFingerprint::from_pixels(&[true; 65]).is_err());
    }
}
