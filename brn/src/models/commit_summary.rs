// src/models/commit_summary.rs

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommitSummary {
    pub renamed: u64,
    pub unchanged: u64,
}

impl CommitSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            renamed: 0,
            unchanged: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn touched(&self) -> u64 {
        self.renamed.saturating_add(self.unchanged)
    }
}
