use crate::policy::CorsPolicy;
use crate::request::CorsRequest;
use crate::result::AdmissionResult;
use std::sync::Arc;

/// Maps request paths to the policy governing them.
///
/// Lookups walk policies in registration order and the first policy whose
/// path pattern matches wins.
#[derive(Debug, Clone, Default)]
pub struct CorsRegistry {
    policies: Vec<Arc<CorsPolicy>>,
}

impl CorsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, policy: CorsPolicy) -> &mut Self {
        tracing::debug!(
            path = policy.path().as_str(),
            position = self.policies.len(),
            "cors policy registered"
        );
        self.policies.push(Arc::new(policy));
        self
    }

    pub fn policy_for(&self, path: &str) -> Option<&CorsPolicy> {
        self.policies
            .iter()
            .find(|policy| policy.applies_to(path))
            .map(Arc::as_ref)
    }

    /// Evaluates `request` with the policy governing its path, or returns
    /// `None` when no policy applies.
    pub fn evaluate(&self, request: &CorsRequest<'_>) -> Option<AdmissionResult> {
        self.policy_for(request.path)
            .map(|policy| policy.evaluate(request))
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl FromIterator<CorsPolicy> for CorsRegistry {
    fn from_iter<I: IntoIterator<Item = CorsPolicy>>(iter: I) -> Self {
        let mut registry = Self::new();
        for policy in iter {
            registry.register(policy);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
