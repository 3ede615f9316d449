//! Skeleton registry.
//!
//! Maps symbolic skeleton names to their [`TemplateDescriptor`]s. The
//! registry is built once at start-up (from the compiled-in table or a
//! skeleton directory) and handed to the scaffold service; nothing mutates it
//! after that.

use std::collections::BTreeMap;

use crate::{
    application::ApplicationError,
    domain::{DomainError, DomainValidator as validator, TemplateDescriptor},
    error::SkelResult,
};

/// Name → descriptor mapping, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct SkeletonRegistry {
    entries: BTreeMap<String, TemplateDescriptor>,
}

impl SkeletonRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor. Names must be unique.
    pub fn register(&mut self, descriptor: TemplateDescriptor) -> SkelResult<()> {
        validator::validate_descriptor(&descriptor)?;

        if self.entries.contains_key(descriptor.name()) {
            return Err(DomainError::DuplicateSkeleton {
                name: descriptor.name().to_string(),
            }
            .into());
        }

        self.entries
            .insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, descriptor: TemplateDescriptor) -> SkelResult<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Look up a skeleton by name.
    pub fn resolve(&self, name: &str) -> SkelResult<&TemplateDescriptor> {
        self.entries.get(name).ok_or_else(|| {
            ApplicationError::SkeletonNotFound {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            }
            .into()
        })
    }

    /// Registered names, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Registered descriptors, in name order.
    pub fn descriptors(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{InstantiationMode, ModuleIdentifier},
        error::SkelError,
    };

    fn descriptor(name: &str) -> TemplateDescriptor {
        TemplateDescriptor::new(
            name,
            name,
            ModuleIdentifier::try_new("example.com/app").unwrap(),
        )
    }

    #[test]
    fn resolves_registered_names() {
        let registry = SkeletonRegistry::new()
            .with(descriptor("rest"))
            .unwrap()
            .with(descriptor("app").with_mode(InstantiationMode::Adapt))
            .unwrap();

        assert_eq!(registry.resolve("rest").unwrap().name(), "rest");
        assert_eq!(
            registry.resolve("app").unwrap().mode(),
            InstantiationMode::Adapt
        );
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["app", "rest"]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = SkeletonRegistry::new().with(descriptor("empty")).unwrap();

        match registry.resolve("grpc") {
            Err(SkelError::Application(ApplicationError::SkeletonNotFound { name, available })) => {
                assert_eq!(name, "grpc");
                assert_eq!(available, vec!["empty".to_string()]);
            }
            other => panic!("expected SkeletonNotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = SkeletonRegistry::new();
        registry.register(descriptor("empty")).unwrap();

        assert!(matches!(
            registry.register(descriptor("empty")),
            Err(SkelError::Domain(DomainError::DuplicateSkeleton { .. }))
        ));
        assert_eq!(registry.len(), 1);
    }
}
