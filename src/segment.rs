//! Segment model: the fixed, ordered list of addressable light zones.

use heapless::Vec;
use thiserror::Error;

/// Opaque identifier the device sink uses to address one zone.
pub type ZoneId = u16;

/// Maximum number of zones the engine can drive.
pub const MAX_ZONES: usize = 16;

/// Errors from building a [`SegmentMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("segment list is empty")]
    Empty,
    #[error("segment list exceeds {MAX_ZONES} zones")]
    TooMany,
}

/// Ordered, read-only mapping from segment index (0..N-1) to zone id.
///
/// Built once at construction; segments have no lifecycle of their own.
#[derive(Debug, Clone)]
pub struct SegmentMap {
    ids: Vec<ZoneId, MAX_ZONES>,
}

impl SegmentMap {
    /// Build a map from an ordered zone id list.
    pub fn new(ids: &[ZoneId]) -> Result<Self, SegmentError> {
        if ids.is_empty() {
            return Err(SegmentError::Empty);
        }
        let ids = Vec::from_slice(ids).map_err(|()| SegmentError::TooMany)?;
        Ok(Self { ids })
    }

    /// Number of segments.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Zone id at a segment index.
    pub fn id_at(&self, index: usize) -> Option<ZoneId> {
        self.ids.get(index).copied()
    }

    /// Iterate `(index, zone_id)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ZoneId)> + '_ {
        self.ids.iter().copied().enumerate()
    }
}

impl Default for SegmentMap {
    /// Four logical zones addressed 0-3, the reference layout.
    fn default() -> Self {
        Self::new(&[0, 1, 2, 3]).unwrap_or_else(|_| unreachable!())
    }
}
