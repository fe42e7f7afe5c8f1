use std::collections::BTreeSet;

/// One-way record of which sections have been revealed.
///
/// The browser's class list already de-duplicates, but the tracker is what
/// decides whether an intersection entry should touch the DOM at all.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection entry. Returns `true` only the first time the
    /// section is seen intersecting.
    pub fn observe(&mut self, section: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(section)
    }
}
