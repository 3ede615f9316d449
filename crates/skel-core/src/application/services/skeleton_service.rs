//! Skeleton Service - read-only queries over the registry.
//!
//! Backs `skel list`. Separated from ScaffoldService so listing never needs
//! a filesystem or module tool.

use serde::Serialize;

use crate::{
    application::SkeletonRegistry,
    domain::{InstantiationMode, ModuleIdentifier, TemplateDescriptor},
    error::SkelResult,
};

/// Information about a skeleton for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkeletonInfo {
    pub name: String,
    pub mode: InstantiationMode,
    pub placeholder: ModuleIdentifier,
    pub description: String,
}

impl From<&TemplateDescriptor> for SkeletonInfo {
    fn from(descriptor: &TemplateDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            mode: descriptor.mode(),
            placeholder: descriptor.placeholder().clone(),
            description: descriptor.description().to_string(),
        }
    }
}

/// Service for skeleton queries.
pub struct SkeletonService {
    registry: SkeletonRegistry,
}

impl SkeletonService {
    pub fn new(registry: SkeletonRegistry) -> Self {
        Self { registry }
    }

    /// All skeletons, ordered by name.
    pub fn list(&self) -> Vec<SkeletonInfo> {
        self.registry.descriptors().map(SkeletonInfo::from).collect()
    }

    /// A single skeleton by name.
    pub fn get(&self, name: &str) -> SkelResult<SkeletonInfo> {
        self.registry.resolve(name).map(SkeletonInfo::from)
    }
}
