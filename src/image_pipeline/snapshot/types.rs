//! Snapshot encoding options

/// Compression of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    #[default]
    None,
    Lzw,
    /// Deflate at its balanced level
    Deflate,
}

/// How a snapshot is encoded.
///
/// Horizontal differencing only pays off when the data is compressed, so
/// [`SnapshotConfig::compressed`] turns it on together with compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotConfig {
    pub compression: TiffCompression,
    /// Store each sample as the difference to its left neighbor
    pub horizontal_predictor: bool,
}

impl SnapshotConfig {
    pub fn compressed(compression: TiffCompression) -> Self {
        Self {
            compression,
            horizontal_predictor: compression != TiffCompression::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uncompressed() {
        let config = SnapshotConfig::default();
        assert_eq!(config.compression, TiffCompression::None);
        assert!(!config.horizontal_predictor);
    }

    #[test]
    fn test_compressed_enables_predictor_only_with_compression() {
        assert!(SnapshotConfig::compressed(TiffCompression::Lzw).horizontal_predictor);
        assert!(SnapshotConfig::compressed(TiffCompression::Deflate).horizontal_predictor);
        assert_eq!(
            SnapshotConfig::compressed(TiffCompression::None),
            SnapshotConfig::default()
        );
    }
}
