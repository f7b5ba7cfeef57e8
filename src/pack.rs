//! Bit-packing transform from a [`CodeSet`] to the embedded byte table.

use log::debug;

use crate::codeset::CodeSet;

/// The packed membership bitmap: bit `j` of byte `i` is set iff code
/// `8 * i + j` is a member. Length is `max_code / 8 + 1`, so the table is
/// never empty; the degenerate empty set packs to a single zero byte.
pub struct PackedTable {
    bytes: Vec<u8>,
}

/// Packs a code set into its membership bitmap.
///
/// Walks every candidate value from 0 through `max_code`, accumulating one
/// output byte per group of 8. The accumulator is flushed at the start of
/// each new group and once more after the loop, so a trailing partial group
/// still lands in the table.
pub fn pack(set: &CodeSet) -> PackedTable {
    let max_code = set.max_code().unwrap_or(0);
    let mut bytes = Vec::with_capacity(max_code as usize / 8 + 1);
    let mut acc: u8 = 0;

    for i in 0..=max_code {
        if i > 0 && i % 8 == 0 {
            bytes.push(acc);
            acc = 0;
        }
        if set.contains(i) {
            acc |= 1 << (i & 0x7);
        }
    }
    bytes.push(acc);

    debug!(
        "packed {} codes (max {}) into {} bytes",
        set.len(),
        max_code,
        bytes.len()
    );
    PackedTable { bytes }
}

impl PackedTable {
    /// Membership test with the exact semantics of the emitted C accessor:
    /// out-of-range queries (including negative ones) report non-membership
    /// instead of faulting.
    pub fn contains(&self, cc: i32) -> bool {
        let b = cc >> 3;
        if b < 0 || b as usize >= self.bytes.len() {
            return false;
        }
        self.bytes[b as usize] & (1u8 << (cc & 0x7)) != 0
    }

    /// The raw table bytes, low codes first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the table, always `max_code / 8 + 1`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}
