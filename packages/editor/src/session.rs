//! # Edit Session
//!
//! Tracks one user's editing state for an open document: the current
//! selection, mutation commits, and the save-after-every-edit loop.
//!
//! The session is where protocol failures become no-ops. Structural
//! rejections and stale identities are logged and swallowed here so a
//! half-finished drag can never take the editor down; the typed errors
//! stay available on `Document::apply` for callers that want them.

use tracing::{debug, instrument, warn};

use flowkit_document::{Project, VariableKind};
use flowkit_projector::{Projector, Scene};

use crate::drop::{resolve_placement, DragPayload, DropTarget};
use crate::{Document, Mutation};

/// Session-scoped cursor over the active file and component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// View file open on the canvas
    pub view_file: Option<String>,

    /// Model file open in the schema editor. Mutually exclusive with
    /// `view_file`.
    pub model_file: Option<String>,

    /// Component highlighted in the inspector
    pub component: Option<String>,
}

impl Selection {
    pub fn select_view_file(&mut self, id: &str) {
        if self.view_file.as_deref() != Some(id) {
            self.component = None;
        }
        self.view_file = Some(id.to_string());
        self.model_file = None;
    }

    pub fn select_model_file(&mut self, id: &str) {
        self.model_file = Some(id.to_string());
        self.view_file = None;
        self.component = None;
    }

    pub fn select_component(&mut self, id: &str) {
        self.component = Some(id.to_string());
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    /// Drop any selection entry whose id no longer resolves.
    fn reconcile(&mut self, project: &Project) {
        if let Some(id) = self.view_file.as_deref() {
            if project.view_file(id).is_none() {
                self.view_file = None;
                self.component = None;
            }
        }
        if let Some(id) = self.model_file.as_deref() {
            if project.model_file(id).is_none() {
                self.model_file = None;
            }
        }
        if let Some(id) = self.component.as_deref() {
            if project.find_component(id).is_none() {
                self.component = None;
            }
        }
    }
}

/// Single edit session (one user, one open document)
pub struct EditSession {
    /// Document being edited
    pub document: Document,

    /// Current selection
    pub selection: Selection,
}

impl EditSession {
    /// Create new edit session
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: Selection::default(),
        }
    }

    /// Apply a mutation, reconcile the selection, and flush to storage.
    ///
    /// Returns whether the mutation was applied. Rejections are logged and
    /// leave the document exactly as it was.
    pub fn commit(&mut self, mutation: Mutation) -> bool {
        match self.document.apply(mutation) {
            Ok(result) => {
                debug!(version = result.version, "mutation applied");
                self.selection.reconcile(self.document.project());
                self.persist();
                true
            }
            Err(error) => {
                warn!(%error, "mutation rejected - document unchanged");
                false
            }
        }
    }

    /// Complete a drag. Resolves the payload against the live document,
    /// computes the placement, mutates, and selects the landed component.
    ///
    /// Every failure path (stale payload, missing target, self-drop,
    /// descendant drop) is a logged no-op.
    #[instrument(skip(self))]
    pub fn handle_drop(&mut self, payload: DragPayload, target: DropTarget) -> bool {
        match payload {
            DragPayload::Existing { component_id } => {
                let placement = match resolve_placement(
                    self.document.project(),
                    Some(&component_id),
                    &target,
                ) {
                    Ok(placement) => placement,
                    Err(error) => {
                        warn!(%error, "drop rejected");
                        return false;
                    }
                };

                if self.commit(Mutation::MoveComponent {
                    component_id: component_id.clone(),
                    placement,
                }) {
                    self.selection.select_component(&component_id);
                    true
                } else {
                    false
                }
            }

            DragPayload::Palette { kind } => {
                let placement =
                    match resolve_placement(self.document.project(), None, &target) {
                        Ok(placement) => placement,
                        Err(error) => {
                            warn!(%error, "drop rejected");
                            return false;
                        }
                    };

                let component = self.document.project_mut().create_component(kind);
                let component_id = component.id.clone();

                if self.commit(Mutation::InsertComponent {
                    component,
                    placement,
                }) {
                    self.selection.select_component(&component_id);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Create an empty view file, select it, and persist. Returns the new
    /// file's id, or `None` if the mutation was rejected.
    pub fn create_view_file(&mut self, name: &str) -> Option<String> {
        let file = self.document.project_mut().create_view_file(name);
        let file_id = file.id.clone();
        if self.commit(Mutation::InsertViewFile { file }) {
            self.selection.select_view_file(&file_id);
            Some(file_id)
        } else {
            None
        }
    }

    /// Create an empty model file, select it, and persist.
    pub fn create_model_file(&mut self, name: &str) -> Option<String> {
        let file = self.document.project_mut().create_model_file(name);
        let file_id = file.id.clone();
        if self.commit(Mutation::InsertModelFile { file }) {
            self.selection.select_model_file(&file_id);
            Some(file_id)
        } else {
            None
        }
    }

    /// Declare a variable on a view file. Returns the new variable's id.
    pub fn add_variable(
        &mut self,
        file_id: &str,
        name: &str,
        value_type: &str,
        kind: VariableKind,
        default_value: Option<String>,
    ) -> Option<String> {
        let variable =
            self.document
                .project_mut()
                .create_variable(name, value_type, kind, default_value);
        let variable_id = variable.id.clone();
        self.commit(Mutation::InsertVariable {
            file_id: file_id.to_string(),
            variable,
        })
        .then_some(variable_id)
    }

    /// Add a field to a model schema. Returns the new field's id.
    pub fn add_field(
        &mut self,
        file_id: &str,
        name: &str,
        value_type: &str,
        default_value: Option<String>,
    ) -> Option<String> {
        let field = self
            .document
            .project_mut()
            .create_field(name, value_type, default_value);
        let field_id = field.id.clone();
        self.commit(Mutation::InsertField {
            file_id: file_id.to_string(),
            field,
        })
        .then_some(field_id)
    }

    /// Project the selected view file for the preview pane.
    pub fn preview(&self) -> Option<Scene> {
        let file_id = self.selection.view_file.as_deref()?;
        self.preview_file(file_id)
    }

    /// Project a specific view file for the preview pane.
    pub fn preview_file(&self, file_id: &str) -> Option<Scene> {
        let project = self.document.project();
        let file = project.view_file(file_id)?;
        Some(Projector::new(project).project_file(file))
    }

    /// Flush to storage. Save failures are logged and swallowed; the
    /// in-memory state stays authoritative either way.
    fn persist(&mut self) {
        if !self.document.is_file_backed() {
            return;
        }
        if let Err(error) = self.document.save() {
            warn!(%error, path = %self.document.path.display(), "save failed - keeping in-memory state");
        }
    }
}
