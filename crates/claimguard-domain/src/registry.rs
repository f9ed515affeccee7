use claimguard_types::{Claim, ClaimCategory};
use std::collections::BTreeSet;
use std::fmt;

/// Error returned when a claim id is registered twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateClaim {
    pub id: &'static str,
}

impl fmt::Display for DuplicateClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "claim id registered twice: {}", self.id)
    }
}

impl std::error::Error for DuplicateClaim {}

/// The fixed claim catalogue for one process.
///
/// Built once in the entry point and passed by reference. Claims can only be added,
/// never removed or updated; registration order is preserved because report rendering
/// depends on it.
#[derive(Clone, Debug, Default)]
pub struct ClaimRegistry {
    claims: Vec<Claim>,
    ids: BTreeSet<&'static str>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, claim: Claim) -> Result<(), DuplicateClaim> {
        if !self.ids.insert(claim.id) {
            return Err(DuplicateClaim { id: claim.id });
        }
        self.claims.push(claim);
        Ok(())
    }

    /// All claims in first-registration order.
    pub fn all_claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Claims of one category, in registration order. Empty if none.
    pub fn by_category(&self, category: ClaimCategory) -> Vec<&Claim> {
        self.claims.iter().filter(|c| c.category == category).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
