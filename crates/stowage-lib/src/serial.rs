//! Serial number allocation for containers.
//!
//! Every container is identified by a `KON-<tag>-<sequence>` serial, where
//! the tag names the container kind and the sequence is drawn from a single
//! monotonic counter shared by all kinds. The counter lives in an explicitly
//! owned [`SerialAllocator`] rather than process-global state, so callers
//! decide its scope and tests can pin serial assignment deterministically.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// One-letter code identifying a container specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Liquid,
    Gas,
    Refrigerated,
}

impl KindTag {
    /// Letter embedded in serial numbers for this kind.
    pub fn code(self) -> &'static str {
        match self {
            KindTag::Liquid => "L",
            KindTag::Gas => "G",
            KindTag::Refrigerated => "C",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unique container identifier in the `KON-<tag>-<sequence>` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// The serial as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic serial number source shared by every container kind.
///
/// Sequence numbers are issued once and never reused. The counter is atomic
/// so construction stays safe if containers are ever built from multiple
/// threads.
#[derive(Debug)]
pub struct SerialAllocator {
    next: AtomicU64,
}

impl SerialAllocator {
    /// Allocator whose first issued sequence number is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Allocator whose first issued sequence number is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Issue the next serial number for the given kind.
    pub fn allocate(&self, tag: KindTag) -> SerialNumber {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        SerialNumber(format!("KON-{tag}-{sequence}"))
    }
}

impl Default for SerialAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serials_embed_the_kind_tag() {
        let serials = SerialAllocator::new();
        assert_eq!(serials.allocate(KindTag::Refrigerated).as_str(), "KON-C-1");
    }

    #[test]
    fn the_sequence_is_not_per_kind() {
        let serials = SerialAllocator::new();
        serials.allocate(KindTag::Liquid);
        assert_eq!(serials.allocate(KindTag::Gas).as_str(), "KON-G-2");
    }
}
