//! Stream selection: best progressive variant by resolution.

use std::cmp::Reverse;

use video_provider::StreamVariant;

use super::error::SelectionError;

/// Picks the progressive variant with the highest resolution.
///
/// Non-progressive variants are never chosen since delivery sends one file without muxing.
/// Among equal resolutions the first in `variants` order wins (stable sort).
pub fn select(variants: &[StreamVariant]) -> Result<StreamVariant, SelectionError> {
    let mut progressive: Vec<&StreamVariant> =
        variants.iter().filter(|v| v.is_progressive).collect();
    progressive.sort_by_key(|v| Reverse(v.resolution));

    progressive
        .first()
        .map(|v| (*v).clone())
        .ok_or(SelectionError::NoSuitableStream)
}
