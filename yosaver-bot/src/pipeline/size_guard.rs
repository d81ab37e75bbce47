//! Size ceiling check for a selected variant.

use video_provider::StreamVariant;

use super::error::SizeError;

/// Rejects `variant` when its size exceeds `ceiling_bytes`. A size equal to the ceiling passes.
/// An unknown size (0) passes here; the fetched file is checked again with [`check_bytes`].
pub fn check(variant: &StreamVariant, ceiling_bytes: u64) -> Result<(), SizeError> {
    check_bytes(variant.size_bytes, ceiling_bytes)
}

/// Same rule for a byte count measured on disk.
pub fn check_bytes(observed: u64, ceiling_bytes: u64) -> Result<(), SizeError> {
    if observed > ceiling_bytes {
        return Err(SizeError::TooLarge {
            observed,
            ceiling: ceiling_bytes,
        });
    }
    Ok(())
}
