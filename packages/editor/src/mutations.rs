//! # Document Mutations
//!
//! High-level semantic operations on project documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user-visible operation
//! 2. **Validated**: Structural constraints are checked before anything changes
//! 3. **All-or-nothing**: A rejected mutation leaves the project untouched
//!
//! ## Mutation Semantics
//!
//! ### Move
//! - Atomic relocation of a component subtree to a new parent or file root
//! - Fails if the destination is inside the moved subtree (no cycles)
//! - Fails if the destination parent is not a container kind
//!
//! ### Remove
//! - Removes the component and all descendants
//! - Later mutations addressing removed ids fail with not-found
//!
//! ### DeleteViewFile
//! - Removes the file and every component tree in it
//! - Custom-view references to the file are cleared, never left dangling

use flowkit_document::{
    Component, ComponentKind, ModelField, ModelFile, ModifierArgument, Project, Variable, ViewFile,
};
use flowkit_projector::default_arguments;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a component lands when inserted or moved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Placement {
    /// Into a container's child list. `None` appends as the last child.
    Inside {
        parent_id: String,
        index: Option<usize>,
    },

    /// Into a view file's root list. `None` appends at the end.
    Root {
        file_id: String,
        index: Option<usize>,
    },

    /// Immediately after an existing component, in whatever sibling list it
    /// occupies. The slot is resolved at apply time, so a move within one
    /// list lands right after the anchor even though detaching shifted
    /// every index.
    After { sibling_id: String },
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a pre-built component subtree. Creation flows allocate the
    /// component (and its seeded defaults) through the project first.
    InsertComponent {
        component: Component,
        placement: Placement,
    },

    /// Relocate an existing component subtree
    MoveComponent {
        component_id: String,
        placement: Placement,
    },

    /// Remove a component and all of its descendants
    RemoveComponent { component_id: String },

    /// Point a custom view at a view file (`None` clears the reference)
    SetViewReference {
        component_id: String,
        view_id: Option<String>,
    },

    /// Update a property value, or append the property if the key is new
    SetProperty {
        component_id: String,
        key: String,
        value: String,
    },

    /// Remove a property by identity
    RemoveProperty {
        component_id: String,
        property_id: String,
    },

    /// Append a modifier. Empty arguments are seeded from the vocabulary
    /// defaults, so `padding` arrives as `padding(16)`.
    AddModifier {
        component_id: String,
        name: String,
        arguments: Vec<ModifierArgument>,
    },

    /// Remove a modifier by identity
    RemoveModifier {
        component_id: String,
        modifier_id: String,
    },

    /// Add a pre-built view file to the project
    InsertViewFile { file: ViewFile },

    /// Delete a view file, its component trees, and every reference to it
    DeleteViewFile { file_id: String },

    /// Add a pre-built model file to the project
    InsertModelFile { file: ModelFile },

    /// Delete a model file and its fields
    DeleteModelFile { file_id: String },

    /// Declare a variable on a view file
    InsertVariable { file_id: String, variable: Variable },

    /// Remove a variable by identity
    RemoveVariable {
        file_id: String,
        variable_id: String,
    },

    /// Add a field to a model schema
    InsertField { file_id: String, field: ModelField },

    /// Remove a field by identity
    RemoveField { file_id: String, field_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("{0} components cannot hold children")]
    NotAContainer(String),

    #[error("Identity already in use: {0}")]
    DuplicateIdentity(String),

    #[error("{0} components cannot reference views")]
    NotAViewReference(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Modifier not found: {0}")]
    ModifierNotFound(String),

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

impl Mutation {
    /// Apply mutation to the project with validation
    pub fn apply(&self, project: &mut Project) -> Result<(), MutationError> {
        // Validate first
        self.validate(project)?;

        match self {
            Mutation::InsertComponent {
                component,
                placement,
            } => Self::apply_place(project, component.clone(), placement),

            Mutation::MoveComponent {
                component_id,
                placement,
            } => {
                let component = project
                    .detach_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                Self::apply_place(project, component, placement)
            }

            Mutation::RemoveComponent { component_id } => {
                project
                    .detach_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                Ok(())
            }

            Mutation::SetViewReference {
                component_id,
                view_id,
            } => {
                let component = project
                    .find_component_mut(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                component.referenced_view = view_id.clone();
                Ok(())
            }

            Mutation::SetProperty {
                component_id,
                key,
                value,
            } => {
                let (files, ids) = project.files_and_ids();
                let component = files
                    .iter_mut()
                    .find_map(|file| file.find_component_mut(component_id))
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                component.set_property(key, value, ids);
                Ok(())
            }

            Mutation::RemoveProperty {
                component_id,
                property_id,
            } => {
                let component = project
                    .find_component_mut(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                component
                    .remove_property(property_id)
                    .ok_or_else(|| MutationError::PropertyNotFound(property_id.clone()))?;
                Ok(())
            }

            Mutation::AddModifier {
                component_id,
                name,
                arguments,
            } => {
                let arguments = if arguments.is_empty() {
                    default_arguments(name)
                } else {
                    arguments.clone()
                };
                let (files, ids) = project.files_and_ids();
                let component = files
                    .iter_mut()
                    .find_map(|file| file.find_component_mut(component_id))
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                component.add_modifier(name, arguments, ids);
                Ok(())
            }

            Mutation::RemoveModifier {
                component_id,
                modifier_id,
            } => {
                let component = project
                    .find_component_mut(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                component
                    .remove_modifier(modifier_id)
                    .ok_or_else(|| MutationError::ModifierNotFound(modifier_id.clone()))?;
                Ok(())
            }

            Mutation::InsertViewFile { file } => {
                project.view_files.push(file.clone());
                Ok(())
            }

            Mutation::DeleteViewFile { file_id } => {
                project
                    .remove_view_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::InsertModelFile { file } => {
                project.model_files.push(file.clone());
                Ok(())
            }

            Mutation::DeleteModelFile { file_id } => {
                project
                    .remove_model_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::InsertVariable { file_id, variable } => {
                let file = project
                    .view_file_mut(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.variables.push(variable.clone());
                Ok(())
            }

            Mutation::RemoveVariable {
                file_id,
                variable_id,
            } => {
                let file = project
                    .view_file_mut(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.remove_variable(variable_id)
                    .ok_or_else(|| MutationError::VariableNotFound(variable_id.clone()))?;
                Ok(())
            }

            Mutation::InsertField { file_id, field } => {
                let file = project
                    .model_file_mut(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.fields.push(field.clone());
                Ok(())
            }

            Mutation::RemoveField { file_id, field_id } => {
                let file = project
                    .model_file_mut(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.remove_field(field_id)
                    .ok_or_else(|| MutationError::FieldNotFound(field_id.clone()))?;
                Ok(())
            }
        }
    }

    /// Land a detached component at a placement. Out-of-range indices clamp
    /// to the end of the sibling list.
    fn apply_place(
        project: &mut Project,
        component: Component,
        placement: &Placement,
    ) -> Result<(), MutationError> {
        match placement {
            Placement::Inside { parent_id, index } => {
                let parent = project
                    .find_component_mut(parent_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(parent_id.clone()))?;
                let insert_index = index.unwrap_or(parent.children.len()).min(parent.children.len());
                parent.children.insert(insert_index, component);
                Ok(())
            }
            Placement::Root { file_id, index } => {
                let file = project
                    .view_file_mut(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                let insert_index = index.unwrap_or(file.components.len()).min(file.components.len());
                file.components.insert(insert_index, component);
                Ok(())
            }
            Placement::After { sibling_id } => {
                let location = project
                    .locate(sibling_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(sibling_id.clone()))?;
                match location.parent_id {
                    Some(parent_id) => {
                        let parent = project
                            .find_component_mut(&parent_id)
                            .ok_or_else(|| MutationError::ComponentNotFound(parent_id.clone()))?;
                        parent.children.insert(location.index + 1, component);
                    }
                    None => {
                        let file = project
                            .view_file_mut(&location.file_id)
                            .ok_or_else(|| MutationError::FileNotFound(location.file_id.clone()))?;
                        file.components.insert(location.index + 1, component);
                    }
                }
                Ok(())
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, project: &Project) -> Result<(), MutationError> {
        match self {
            Mutation::InsertComponent {
                component,
                placement,
            } => {
                Self::validate_placement(project, placement)?;
                Self::validate_subtree(project, component)?;
                Ok(())
            }

            Mutation::MoveComponent {
                component_id,
                placement,
            } => {
                let source = project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;

                // A destination inside the moved subtree would orphan it.
                let anchor = match placement {
                    Placement::Inside { parent_id, .. } => Some(parent_id),
                    Placement::After { sibling_id } => Some(sibling_id),
                    Placement::Root { .. } => None,
                };
                if anchor.is_some_and(|id| source.contains(id)) {
                    return Err(MutationError::CycleDetected);
                }

                Self::validate_placement(project, placement)
            }

            Mutation::RemoveComponent { component_id } => {
                project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                Ok(())
            }

            Mutation::SetViewReference {
                component_id,
                view_id,
            } => {
                let component = project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                if component.kind != ComponentKind::CustomView {
                    return Err(MutationError::NotAViewReference(
                        component.kind.display_name().to_string(),
                    ));
                }
                if let Some(view_id) = view_id {
                    project
                        .view_file(view_id)
                        .ok_or_else(|| MutationError::FileNotFound(view_id.clone()))?;
                }
                Ok(())
            }

            Mutation::SetProperty { component_id, .. } => {
                project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveProperty {
                component_id,
                property_id,
            } => {
                let component = project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                if !component
                    .properties
                    .iter()
                    .any(|property| property.id == *property_id)
                {
                    return Err(MutationError::PropertyNotFound(property_id.clone()));
                }
                Ok(())
            }

            Mutation::AddModifier { component_id, .. } => {
                project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveModifier {
                component_id,
                modifier_id,
            } => {
                let component = project
                    .find_component(component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
                if !component
                    .modifiers
                    .iter()
                    .any(|modifier| modifier.id == *modifier_id)
                {
                    return Err(MutationError::ModifierNotFound(modifier_id.clone()));
                }
                Ok(())
            }

            Mutation::InsertViewFile { file } => {
                if project.view_file(&file.id).is_some() || project.model_file(&file.id).is_some()
                {
                    return Err(MutationError::DuplicateIdentity(file.id.clone()));
                }
                for root in &file.components {
                    Self::validate_subtree(project, root)?;
                }
                Ok(())
            }

            Mutation::DeleteViewFile { file_id } => {
                project
                    .view_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::InsertModelFile { file } => {
                if project.view_file(&file.id).is_some() || project.model_file(&file.id).is_some()
                {
                    return Err(MutationError::DuplicateIdentity(file.id.clone()));
                }
                Ok(())
            }

            Mutation::DeleteModelFile { file_id } => {
                project
                    .model_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::InsertVariable { file_id, .. } => {
                project
                    .view_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveVariable {
                file_id,
                variable_id,
            } => {
                let file = project
                    .view_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.variable(variable_id)
                    .ok_or_else(|| MutationError::VariableNotFound(variable_id.clone()))?;
                Ok(())
            }

            Mutation::InsertField { file_id, .. } => {
                project
                    .model_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveField { file_id, field_id } => {
                let file = project
                    .model_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                file.field(field_id)
                    .ok_or_else(|| MutationError::FieldNotFound(field_id.clone()))?;
                Ok(())
            }
        }
    }

    /// Placement target must exist, and a parent must be a container kind.
    fn validate_placement(project: &Project, placement: &Placement) -> Result<(), MutationError> {
        match placement {
            Placement::Inside { parent_id, .. } => {
                let parent = project
                    .find_component(parent_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(parent_id.clone()))?;
                if !parent.kind.is_container() {
                    return Err(MutationError::NotAContainer(
                        parent.kind.display_name().to_string(),
                    ));
                }
                Ok(())
            }
            Placement::Root { file_id, .. } => {
                project
                    .view_file(file_id)
                    .ok_or_else(|| MutationError::FileNotFound(file_id.clone()))?;
                Ok(())
            }
            Placement::After { sibling_id } => {
                project
                    .find_component(sibling_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(sibling_id.clone()))?;
                Ok(())
            }
        }
    }

    /// An incoming subtree must not reuse ids already in the project, and
    /// every non-container node in it must be childless.
    fn validate_subtree(project: &Project, component: &Component) -> Result<(), MutationError> {
        let mut duplicate = None;
        let mut non_container = None;
        component.walk(&mut |node| {
            if duplicate.is_none() && project.find_component(&node.id).is_some() {
                duplicate = Some(node.id.clone());
            }
            if non_container.is_none() && !node.kind.is_container() && !node.children.is_empty() {
                non_container = Some(node.kind.display_name().to_string());
            }
        });
        if let Some(id) = duplicate {
            return Err(MutationError::DuplicateIdentity(id));
        }
        if let Some(kind) = non_container {
            return Err(MutationError::NotAContainer(kind));
        }
        Ok(())
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,
}
