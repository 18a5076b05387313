//! Cabinet geometry table
//!
//! Maps small integer cabinet identifiers to contiguous pixel ranges on the
//! ring. Identifier 0 is reserved and addresses the entire ring; identifiers
//! `1..=K` address the configured furniture sections. The table is validated
//! once at construction and read-only afterwards.

use heapless::Vec;

/// Largest number of configurable cabinet sections
pub const MAX_CABINETS: usize = 8;

/// Identifier addressing the whole ring
pub const WHOLE_RING_ID: u8 = 0;

/// Contiguous pixel range of one cabinet section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CabinetRange {
    /// First pixel index of the section
    pub from_pos: u16,
    /// Number of pixels in the section
    pub length: u16,
}

impl CabinetRange {
    pub const fn new(from_pos: u16, length: u16) -> Self {
        Self { from_pos, length }
    }

    /// One past the last nominal pixel of the section
    pub const fn end(self) -> u16 {
        self.from_pos + self.length
    }
}

/// Errors produced by table construction and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Identifier outside the configured `0..=K` id space
    InvalidCabinetId(u8),
    /// A configured range is empty or reaches past the ring
    InvalidGeometry {
        /// Cabinet id of the offending entry
        cabinet: u8,
        range: CabinetRange,
    },
    /// More sections than the table can hold
    TooManyCabinets(usize),
}

/// Validated cabinet lookup table
///
/// Built once from deployment data, then pure lookups only. Lookup cannot
/// fail for ids accepted at construction time.
#[derive(Debug, Clone)]
pub struct CabinetTable {
    ring_len: u16,
    ranges: Vec<CabinetRange, MAX_CABINETS>,
}

impl CabinetTable {
    /// Validate and build the table
    ///
    /// `ranges[i]` becomes cabinet id `i + 1`; id 0 always resolves to the
    /// whole ring. Every entry must be non-empty and fit within `ring_len`.
    pub fn new(ring_len: u16, ranges: &[CabinetRange]) -> Result<Self, GeometryError> {
        let mut table = Vec::new();
        for (i, &range) in ranges.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let cabinet = (i + 1) as u8;
            if range.length == 0 || range.end() > ring_len {
                return Err(GeometryError::InvalidGeometry { cabinet, range });
            }
            table
                .push(range)
                .map_err(|_| GeometryError::TooManyCabinets(ranges.len()))?;
        }
        Ok(Self {
            ring_len,
            ranges: table,
        })
    }

    /// Number of configured sections (K)
    pub fn cabinet_count(&self) -> usize {
        self.ranges.len()
    }

    /// Pixel count of the ring this table was validated against
    pub const fn ring_len(&self) -> u16 {
        self.ring_len
    }

    /// Resolve a cabinet identifier to its pixel range
    ///
    /// Id 0 returns the whole ring. Ids past the configured sections are a
    /// caller contract violation and are rejected instead of reading past
    /// the table.
    pub fn range_of(&self, cabinet_id: u8) -> Result<CabinetRange, GeometryError> {
        if cabinet_id == WHOLE_RING_ID {
            return Ok(CabinetRange::new(0, self.ring_len));
        }
        self.ranges
            .get(usize::from(cabinet_id) - 1)
            .copied()
            .ok_or(GeometryError::InvalidCabinetId(cabinet_id))
    }
}
