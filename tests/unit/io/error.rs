//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilemosaic::MosaicError;
    use tilemosaic::io::error::{
        Approach, computation_error, invalid_parameter, malformed_tile, topology_error,
    };
    use tilemosaic::spatial::side::Side;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/puzzle.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/puzzle.txt"));
        assert!(topology_error(&"x").source().is_none());
    }

    // Tests ambiguity messages name the side and every tile
    // Verified by omitting the tile list from the message
    #[test]
    fn test_ambiguous_adjacency_message() {
        let error = MosaicError::AmbiguousAdjacency {
            tile: 1,
            side: Side::West,
            tiles: vec![1, 2, 3],
        };
        let message = error.to_string();
        assert!(message.contains("west"));
        assert!(message.contains('2') && message.contains('3'));
    }

    // Tests helper constructors fill the matching variant
    // Verified by swapping value and reason in invalid_parameter
    #[test]
    fn test_helper_constructors() {
        match invalid_parameter("grid_size", &1, &"too small") {
            MosaicError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "grid_size");
                assert_eq!(value, "1");
                assert_eq!(reason, "too small");
            }
            other => panic!("unexpected variant {other:?}"),
        }
        assert!(matches!(
            computation_error("corner product", &"overflow"),
            MosaicError::Computation { .. }
        ));
        assert!(matches!(
            malformed_tile(5, &"ragged"),
            MosaicError::MalformedTile { tile: 5, .. }
        ));
    }

    // Tests a missing motif is the only recoverable error
    // Verified by marking topology errors as recoverable
    #[test]
    fn test_only_missing_motif_is_not_fatal() {
        assert!(!MosaicError::NoMotifOrientationFound { lit_pixels: 3 }.is_fatal());
        assert!(topology_error(&"10 tiles").is_fatal());
        let message = MosaicError::InvalidInput {
            line: 12,
            reason: "bad header".into(),
        }
        .to_string();
        assert!(message.contains("12"));
    }

    // Tests approaches render their cell and side
    // Verified by printing row and column swapped
    #[test]
    fn test_approach_display() {
        let approach = Approach {
            from: (2, 5),
            side: Side::North,
        };
        assert_eq!(approach.to_string(), "north side of (2, 5)");
    }

    // Tests io errors convert through the question mark operator
    // Verified by dropping the From implementation
    #[test]
    fn test_from_io_error() {
        let error: MosaicError = std::io::Error::other("boom").into();
        assert!(matches!(error, MosaicError::FileSystem { .. }));
    }
}
