//! # Drag and Drop
//!
//! Wire payloads for drags and the placement policy for drops.
//!
//! A drag carries either a palette kind (a new component will be created)
//! or the identity of an existing component (it will be relocated). The
//! payload crosses the embedder's drag plumbing as bytes, so identity is
//! re-resolved against the live document when the drop lands; a payload can
//! go stale mid-flight if the component is deleted underneath it.
//!
//! ## Placement policy
//!
//! - Dropping on a **container** appends the component as its last child
//! - Dropping on a **leaf** inserts the component as the sibling
//!   immediately after it, under the leaf's own parent
//! - Dropping on a **file's root zone** appends to the root list

use flowkit_document::{ComponentKind, Project};
use serde::{Deserialize, Serialize};

use crate::mutations::{MutationError, Placement};

/// Payload carried by an in-flight drag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DragPayload {
    /// A palette tile: dropping creates a fresh component of this kind
    Palette { kind: ComponentKind },

    /// An existing component: dropping relocates its whole subtree
    Existing { component_id: String },
}

/// Where a drag was released
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DropTarget {
    /// Released on another component
    Component { component_id: String },

    /// Released on a view file's root canvas zone
    FileRoot { file_id: String },
}

impl DragPayload {
    /// Encode for the embedder's transfer mechanism.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode bytes received from the embedder. Malformed payloads abort
    /// the drop before any mutation is attempted.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Resolve a drop target into a concrete placement.
///
/// `source_id` is the component being relocated, or `None` when the payload
/// creates a fresh one. Relocations onto themselves or into their own
/// subtree are rejected here, before anything is detached.
pub fn resolve_placement(
    project: &Project,
    source_id: Option<&str>,
    target: &DropTarget,
) -> Result<Placement, MutationError> {
    match target {
        DropTarget::FileRoot { file_id } => {
            project
                .view_file(file_id)
                .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
            Ok(Placement::Root {
                file_id: file_id.clone(),
                index: None,
            })
        }

        DropTarget::Component {
            component_id: target_id,
        } => {
            if let Some(source_id) = source_id {
                let source = project
                    .find_component(source_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(source_id.to_string()))?;
                if source.contains(target_id) {
                    return Err(MutationError::CycleDetected);
                }
            }

            let target = project
                .find_component(target_id)
                .ok_or_else(|| MutationError::ComponentNotFound(target_id.clone()))?;

            if target.kind.is_container() {
                return Ok(Placement::Inside {
                    parent_id: target_id.clone(),
                    index: None,
                });
            }

            // Leaf target: land right after it among its siblings.
            Ok(Placement::After {
                sibling_id: target_id.clone(),
            })
        }
    }
}
