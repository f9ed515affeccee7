use crate::registry::ClaimRegistry;
use claimguard_types::{Claim, ClaimCategory};

pub fn claim(id: &'static str, category: ClaimCategory) -> Claim {
    Claim {
        id,
        category,
        description: "test claim",
        test_procedure: "1. Verify the thing",
        expected_result: "The thing holds",
    }
}

pub fn registry_of(claims: Vec<Claim>) -> ClaimRegistry {
    let mut registry = ClaimRegistry::new();
    for claim in claims {
        registry.register(claim).expect("register test claim");
    }
    registry
}
