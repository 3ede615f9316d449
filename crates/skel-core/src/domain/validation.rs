use crate::domain::{
    entities::TemplateDescriptor,
    error::DomainError,
    manifest,
    value_objects::ModuleIdentifier,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &TemplateDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }

    pub fn validate_identifier(raw: &str) -> Result<ModuleIdentifier, DomainError> {
        ModuleIdentifier::try_new(raw)
    }

    pub fn validate_manifest(content: &str) -> Result<ModuleIdentifier, DomainError> {
        manifest::parse_module_declaration(content)
    }
}
