//! Skeleton descriptors.
//!
//! A [`TemplateDescriptor`] says where a skeleton lives inside a payload
//! source and which placeholder identifier its files were written against.
//! Descriptors are built once at start-up and never change afterwards.

use crate::domain::{
    error::DomainError,
    value_objects::{InstantiationMode, ModuleIdentifier},
};

/// Immutable description of one registered skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    name: String,
    root: String,
    placeholder: ModuleIdentifier,
    mode: InstantiationMode,
    description: String,
}

impl TemplateDescriptor {
    /// Create a create-mode descriptor with an empty description.
    ///
    /// `root` is a `/`-separated location inside the payload source; an empty
    /// root means the whole source.
    pub fn new(
        name: impl Into<String>,
        root: impl Into<String>,
        placeholder: ModuleIdentifier,
    ) -> Self {
        let root: String = root.into();
        Self {
            name: name.into(),
            root: root.trim_end_matches('/').to_string(),
            placeholder,
            mode: InstantiationMode::default(),
            description: String::new(),
        }
    }

    pub fn with_mode(mut self, mode: InstantiationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn placeholder(&self) -> &ModuleIdentifier {
        &self.placeholder
    }

    pub fn mode(&self) -> InstantiationMode {
        self.mode
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDescriptor {
                name: self.name.clone(),
                reason: "name must be a single non-empty word".into(),
            });
        }

        if self.root.starts_with('/') {
            return Err(DomainError::InvalidDescriptor {
                name: self.name.clone(),
                reason: format!("payload root '{}' must be relative", self.root),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder() -> ModuleIdentifier {
        ModuleIdentifier::try_new("example.com/app").unwrap()
    }

    #[test]
    fn defaults_to_create_mode() {
        let d = TemplateDescriptor::new("empty", "empty", placeholder());
        assert_eq!(d.mode(), InstantiationMode::Create);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn trailing_separator_is_trimmed_from_root() {
        let d = TemplateDescriptor::new("empty", "skeletons/empty/", placeholder());
        assert_eq!(d.root(), "skeletons/empty");
    }

    #[test]
    fn rejects_blank_name_and_absolute_root() {
        assert!(
            TemplateDescriptor::new("", "x", placeholder())
                .validate()
                .is_err()
        );
        assert!(
            TemplateDescriptor::new("two words", "x", placeholder())
                .validate()
                .is_err()
        );
        assert!(
            TemplateDescriptor::new("abs", "/x", placeholder())
                .validate()
                .is_err()
        );
    }
}
