//! Scaffold Service - main application orchestrator.
//!
//! This service drives one instantiation run:
//! 1. Resolve the skeleton and the target identifier
//! 2. Initialise the module (create mode only)
//! 3. Walk the skeleton, rewrite each file, write it to the destination
//! 4. Resolve dependencies
//!
//! Every failure is fatal to the run. Files written before a failure are
//! left in place.

use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{
        ApplicationError, SkeletonRegistry,
        ports::{Filesystem, ModuleTool, SkeletonSource},
        services::walker::Walker,
    },
    domain::{
        DomainValidator as validator, EntryKind, InstantiationMode, MANIFEST_FILE,
        ModuleIdentifier, SubstitutionRuleSet, TemplateDescriptor, rewrite,
    },
    error::SkelResult,
};

/// Input to [`ScaffoldService::scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Symbolic skeleton name.
    pub skeleton: String,
    /// Positional identifier arguments, exactly as the caller gave them.
    pub arguments: Vec<String>,
    /// Directory the skeleton is instantiated into.
    pub destination: PathBuf,
}

impl ScaffoldRequest {
    pub fn new(skeleton: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            skeleton: skeleton.into(),
            arguments: Vec::new(),
            destination: destination.into(),
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = String>) -> Self {
        self.arguments.extend(arguments);
        self
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub skeleton: String,
    pub identifier: ModuleIdentifier,
    pub mode: InstantiationMode,
    pub directories: usize,
    pub files: usize,
}

/// Orchestrator states. Linear; a failure in any of them ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveIdentifier,
    InitializeModule,
    Materialize,
    ResolveDependencies,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResolveIdentifier => "resolve-identifier",
            Self::InitializeModule => "initialize-module",
            Self::Materialize => "materialize",
            Self::ResolveDependencies => "resolve-dependencies",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Default)]
struct Counts {
    directories: usize,
    files: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: SkeletonRegistry,
    source: Box<dyn SkeletonSource>,
    filesystem: Box<dyn Filesystem>,
    module_tool: Box<dyn ModuleTool>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given registry and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use skel_core::application::{ScaffoldService, SkeletonRegistry, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     registry,    // SkeletonRegistry
    ///     source,      // impl SkeletonSource
    ///     filesystem,  // impl Filesystem
    ///     module_tool, // impl ModuleTool
    /// );
    /// ```
    pub fn new(
        registry: SkeletonRegistry,
        source: Box<dyn SkeletonSource>,
        filesystem: Box<dyn Filesystem>,
        module_tool: Box<dyn ModuleTool>,
    ) -> Self {
        Self {
            registry,
            source,
            filesystem,
            module_tool,
        }
    }

    pub fn registry(&self) -> &SkeletonRegistry {
        &self.registry
    }

    /// Instantiate a skeleton into `request.destination`.
    #[instrument(
        skip_all,
        fields(
            skeleton = %request.skeleton,
            destination = %request.destination.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> SkelResult<ScaffoldReport> {
        info!("Scaffolding skeleton");

        let mut stage = Stage::ResolveIdentifier;
        match self.run(request, &mut stage) {
            Ok(report) => {
                info!(
                    identifier = %report.identifier,
                    directories = report.directories,
                    files = report.files,
                    "Scaffold completed"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(%stage, error = %e, "Scaffold failed");
                Err(e)
            }
        }
    }

    fn run(&self, request: &ScaffoldRequest, stage: &mut Stage) -> SkelResult<ScaffoldReport> {
        let descriptor = self.registry.resolve(&request.skeleton)?;
        let destination = request.destination.as_path();
        let identifier = self.resolve_identifier(descriptor, &request.arguments, destination)?;
        debug!(identifier = %identifier, mode = %descriptor.mode(), "Identifier resolved");

        self.filesystem.create_dir_all(destination)?;

        if descriptor.mode().initializes_module() {
            transition(stage, Stage::InitializeModule);
            if self.declares_module(destination, &identifier) {
                debug!("Destination manifest already declares the module; skipping initialize");
            } else {
                self.module_tool.initialize(destination, &identifier)?;
            }
        }

        transition(stage, Stage::Materialize);
        let rules = SubstitutionRuleSet::derive(descriptor.placeholder(), &identifier);
        let counts = self.materialize(descriptor, &rules, destination)?;

        transition(stage, Stage::ResolveDependencies);
        self.module_tool.resolve_dependencies(destination)?;

        transition(stage, Stage::Done);
        Ok(ScaffoldReport {
            skeleton: descriptor.name().to_string(),
            identifier,
            mode: descriptor.mode(),
            directories: counts.directories,
            files: counts.files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_identifier(
        &self,
        descriptor: &TemplateDescriptor,
        arguments: &[String],
        destination: &Path,
    ) -> SkelResult<ModuleIdentifier> {
        let mode = descriptor.mode();
        let expected = mode.expected_arguments();
        if arguments.len() != expected {
            return Err(
                ApplicationError::argument_count(descriptor.name(), expected, arguments.len())
                    .into(),
            );
        }

        match mode {
            InstantiationMode::Create => Ok(validator::validate_identifier(&arguments[0])?),
            InstantiationMode::Adapt => self.read_manifest_identifier(destination),
        }
    }

    fn read_manifest_identifier(&self, destination: &Path) -> SkelResult<ModuleIdentifier> {
        let path = destination.join(MANIFEST_FILE);
        let manifest_error = |reason: String| ApplicationError::ManifestParse {
            path: path.clone(),
            reason,
        };

        if !self.filesystem.exists(&path) {
            return Err(manifest_error("file not found".into()).into());
        }

        let content = self
            .filesystem
            .read_to_string(&path)
            .map_err(|e| manifest_error(e.to_string()))?;

        validator::validate_manifest(&content).map_err(|e| manifest_error(e.to_string()).into())
    }

    /// Whether `destination/go.mod` exists and declares exactly `identifier`.
    fn declares_module(&self, destination: &Path, identifier: &ModuleIdentifier) -> bool {
        let path = destination.join(MANIFEST_FILE);
        if !self.filesystem.exists(&path) {
            return false;
        }
        self.filesystem
            .read_to_string(&path)
            .ok()
            .and_then(|content| validator::validate_manifest(&content).ok())
            .is_some_and(|declared| declared == *identifier)
    }

    /// Walk, rewrite and write every entry. Stops at the first failure.
    fn materialize(
        &self,
        descriptor: &TemplateDescriptor,
        rules: &SubstitutionRuleSet,
        destination: &Path,
    ) -> SkelResult<Counts> {
        let mut counts = Counts::default();

        for entry in Walker::new(self.source.as_ref(), descriptor) {
            let entry = entry?;
            let path = destination.join(entry.path().to_path_buf());

            let written = match entry.kind() {
                EntryKind::Directory => self
                    .filesystem
                    .create_dir_all(&path)
                    .map(|()| counts.directories += 1),
                EntryKind::File(content) => self
                    .filesystem
                    .write_file(&path, &rewrite(content, rules))
                    .map(|()| counts.files += 1),
            };
            written.map_err(|e| ApplicationError::EntryFailed {
                entry: entry.path().as_str().to_string(),
                source: Box::new(e),
            })?;
            trace!(path = %entry.path(), "Entry written");
        }

        Ok(counts)
    }
}

fn transition(stage: &mut Stage, next: Stage) {
    debug!(from = %stage, to = %next, "Stage transition");
    *stage = next;
}
