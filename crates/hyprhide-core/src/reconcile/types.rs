/// What a sweep changed in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Addresses of parked windows that got a synthesized record.
    pub synthesized: Vec<String>,
    /// Addresses whose window no longer exists; their records were deleted.
    pub removed: Vec<String>,
}

impl ReconcileSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.synthesized.is_empty() && self.removed.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.synthesized.len() + self.removed.len()
    }
}
