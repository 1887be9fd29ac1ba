pub mod component;
pub mod id;
pub mod kind;
pub mod project;

pub use component::{Component, Modifier, ModifierArgument, Property};
pub use id::{project_seed, IdGenerator};
pub use kind::{palette, ComponentKind, KindFacts, PaletteCategory, ProjectColor, VariableKind};
pub use project::{Location, ModelField, ModelFile, Project, Variable, ViewFile};
