//! Tests for pixel values

#[cfg(test)]
mod tests {
    use tilemosaic::spatial::pixel::Pixel;

    // Tests only the two input characters are accepted
    // Verified by accepting 'O' in from_char
    #[test]
    fn test_from_char_accepts_input_alphabet() {
        assert_eq!(Pixel::from_char('#'), Some(Pixel::On));
        assert_eq!(Pixel::from_char('.'), Some(Pixel::Off));
        assert_eq!(Pixel::from_char('O'), None);
        assert_eq!(Pixel::from_char(' '), None);
    }

    // Tests motif pixels still count as lit
    // Verified by matching only On in is_lit
    #[test]
    fn test_motif_pixels_are_lit() {
        assert!(Pixel::On.is_lit());
        assert!(Pixel::Motif.is_lit());
        assert!(!Pixel::Off.is_lit());
        assert_eq!(Pixel::Motif.symbol(), 'O');
        assert_eq!(Pixel::from(true), Pixel::On);
        assert_eq!(Pixel::default(), Pixel::Off);
    }
}
