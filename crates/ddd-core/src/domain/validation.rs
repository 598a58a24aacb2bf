use crate::domain::{error::DomainError, plan::ScaffoldPlan};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
