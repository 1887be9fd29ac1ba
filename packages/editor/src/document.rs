//! # Document Handle
//!
//! A Document wraps one project and its editing state.
//! Documents can be:
//! - **Memory-backed**: Temporary, for testing or in-memory operations
//! - **File-backed**: Single-user editing with disk persistence
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Project → Save
//!   ↓      ↓        ↓       ↓
//! JSON  Mutations  Scene   JSON
//! ```

use std::path::PathBuf;

use flowkit_document::Project;
use tracing::{debug, info};

use crate::{EditorError, Mutation, MutationResult};

/// Editable project document
#[derive(Debug)]
pub struct Document {
    /// Path to the backing file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { project: Project },

    /// File-backed (single-user editing)
    File { project: Project, dirty: bool },
}

impl Document {
    /// Wrap a project without any disk backing (memory-backed)
    pub fn from_project(project: Project) -> Self {
        Self {
            path: PathBuf::new(),
            version: 0,
            storage: DocumentStorage::Memory { project },
        }
    }

    /// Start a new file-backed document. Nothing is written until the
    /// first save.
    pub fn create(path: PathBuf, project: Project) -> Self {
        Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                project,
                dirty: true,
            },
        }
    }

    /// Load document from file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let project: Project = serde_json::from_str(&source)?;
        info!(path = %path.display(), project = %project.name, "document loaded");

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                project,
                dirty: false,
            },
        })
    }

    /// Get current project state
    pub fn project(&self) -> &Project {
        match &self.storage {
            DocumentStorage::Memory { project } => project,
            DocumentStorage::File { project, .. } => project,
        }
    }

    /// Get mutable project reference (marks file-backed documents dirty)
    pub fn project_mut(&mut self) -> &mut Project {
        match &mut self.storage {
            DocumentStorage::Memory { project } => project,
            DocumentStorage::File { project, dirty } => {
                *dirty = true;
                project
            }
        }
    }

    /// Apply a mutation. Rejected mutations change nothing, including the
    /// version counter.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        match &mut self.storage {
            DocumentStorage::Memory { project } => {
                mutation.apply(project)?;
            }
            DocumentStorage::File { project, dirty } => {
                mutation.apply(project)?;
                *dirty = true;
            }
        }

        self.version += 1;
        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    pub fn is_file_backed(&self) -> bool {
        matches!(self.storage, DocumentStorage::File { .. })
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { project, dirty } => {
                let source = serde_json::to_string_pretty(project)?;
                std::fs::write(&self.path, source)?;
                *dirty = false;
                debug!(path = %self.path.display(), "document saved");
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }
}
