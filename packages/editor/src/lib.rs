//! # Flowkit Editor
//!
//! Core document editing engine for Flowkit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Project, files, component trees   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save documents                      │
//! │  - Apply mutations with validation          │
//! │  - Resolve drag payloads into placements    │
//! │  - Track selection per session              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ projector: component trees → Scene          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The project is the source of truth**: Scenes are derived views
//! 2. **Validate, then mutate**: A rejected mutation changes nothing
//! 3. **Structural editing**: Component-level operations, not text-level
//! 4. **Errors stop at the session**: Rejections and save failures are
//!    logged no-ops; the engine itself stays typed
//!
//! ## Usage
//!
//! ### Single-user editing
//!
//! ```rust,ignore
//! use flowkit_editor::{Document, EditSession, Mutation};
//!
//! // Load document
//! let doc = Document::load("app.flowkit.json".into())?;
//! let mut session = EditSession::new(doc);
//!
//! // Apply mutation
//! let mutation = Mutation::SetProperty {
//!     component_id: "a1b2c3-7".to_string(),
//!     key: "text".to_string(),
//!     value: "\"Click me!\"".to_string(),
//! };
//! session.commit(mutation);
//!
//! // Project the selected file to a scene
//! let scene = session.preview();
//! ```
//!
//! ### Completing a drag
//!
//! ```rust,ignore
//! use flowkit_editor::{DragPayload, DropTarget};
//!
//! let payload = DragPayload::decode(&bytes)?;
//! session.handle_drop(payload, DropTarget::Component {
//!     component_id: "a1b2c3-9".to_string(),
//! });
//! ```

mod document;
mod drop;
mod errors;
mod mutations;
mod session;

pub use document::{Document, DocumentStorage};
pub use drop::{resolve_placement, DragPayload, DropTarget};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult, Placement};
pub use session::{EditSession, Selection};

// Re-export common types for convenience
pub use flowkit_document::{Component, ComponentKind, Project, ViewFile};
pub use flowkit_projector::{Scene, Visual};
