use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::id::IdGenerator;
use crate::kind::{ComponentKind, ProjectColor, VariableKind};

/// Top-level container for everything the editor works on: view files,
/// model files, and the id allocator they all draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: ProjectColor,
    pub view_files: Vec<ViewFile>,
    pub model_files: Vec<ModelFile>,
    ids: IdGenerator,
}

/// A screen design: an ordered forest of component trees plus the
/// variables declared alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewFile {
    pub id: String,
    pub name: String,
    pub components: Vec<Component>,
    pub variables: Vec<Variable>,
}

/// A data schema: a named list of typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub id: String,
    pub name: String,
    pub fields: Vec<ModelField>,
}

/// A variable declared in a view file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub value_type: String,
    pub kind: VariableKind,
    /// Meaningful only for kinds where `supports_default` holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A field of a model schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    pub id: String,
    pub name: String,
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Where a component currently sits in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file_id: String,
    /// Parent component id, or `None` when the component is a file root.
    pub parent_id: Option<String>,
    /// Index among its siblings.
    pub index: usize,
}

impl Project {
    pub fn new(name: &str, icon: &str, color: ProjectColor) -> Self {
        let ids = IdGenerator::new(name);
        Self {
            id: ids.seed().to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color,
            view_files: Vec::new(),
            model_files: Vec::new(),
            ids,
        }
    }

    pub fn ids(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Allocate a component of `kind` with default properties seeded.
    /// The caller decides where it lands (usually via a mutation).
    pub fn create_component(&mut self, kind: ComponentKind) -> Component {
        Component::with_defaults(kind, &mut self.ids)
    }

    /// Allocate an empty view file. Not yet part of the project.
    pub fn create_view_file(&mut self, name: &str) -> ViewFile {
        ViewFile {
            id: self.ids.new_id(),
            name: name.to_string(),
            components: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Allocate an empty model file. Not yet part of the project.
    pub fn create_model_file(&mut self, name: &str) -> ModelFile {
        ModelFile {
            id: self.ids.new_id(),
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn create_variable(
        &mut self,
        name: &str,
        value_type: &str,
        kind: VariableKind,
        default_value: Option<String>,
    ) -> Variable {
        Variable {
            id: self.ids.new_id(),
            name: name.to_string(),
            value_type: value_type.to_string(),
            kind,
            default_value,
        }
    }

    pub fn create_field(
        &mut self,
        name: &str,
        value_type: &str,
        default_value: Option<String>,
    ) -> ModelField {
        ModelField {
            id: self.ids.new_id(),
            name: name.to_string(),
            value_type: value_type.to_string(),
            default_value,
        }
    }

    pub fn view_file(&self, id: &str) -> Option<&ViewFile> {
        self.view_files.iter().find(|file| file.id == id)
    }

    pub fn view_file_mut(&mut self, id: &str) -> Option<&mut ViewFile> {
        self.view_files.iter_mut().find(|file| file.id == id)
    }

    pub fn model_file(&self, id: &str) -> Option<&ModelFile> {
        self.model_files.iter().find(|file| file.id == id)
    }

    pub fn model_file_mut(&mut self, id: &str) -> Option<&mut ModelFile> {
        self.model_files.iter_mut().find(|file| file.id == id)
    }

    /// Remove a view file and clear every custom-view reference to it, so
    /// no component is left pointing at a file that no longer exists.
    pub fn remove_view_file(&mut self, id: &str) -> Option<ViewFile> {
        let position = self.view_files.iter().position(|file| file.id == id)?;
        let removed = self.view_files.remove(position);
        for file in &mut self.view_files {
            for root in &mut file.components {
                root.walk_mut(&mut |component| {
                    if component.referenced_view.as_deref() == Some(id) {
                        component.referenced_view = None;
                    }
                });
            }
        }
        Some(removed)
    }

    pub fn remove_model_file(&mut self, id: &str) -> Option<ModelFile> {
        let position = self.model_files.iter().position(|file| file.id == id)?;
        Some(self.model_files.remove(position))
    }

    /// Search every view file for a component, in file order.
    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.view_files
            .iter()
            .find_map(|file| file.find_component(id))
    }

    pub fn find_component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.view_files
            .iter_mut()
            .find_map(|file| file.find_component_mut(id))
    }

    /// Locate a component: which file, which parent (if any), which index.
    pub fn locate(&self, id: &str) -> Option<Location> {
        for file in &self.view_files {
            if let Some(position) = file.components.iter().position(|root| root.id == id) {
                return Some(Location {
                    file_id: file.id.clone(),
                    parent_id: None,
                    index: position,
                });
            }
            for root in &file.components {
                if let Some((parent, index)) = root.locate(id) {
                    return Some(Location {
                        file_id: file.id.clone(),
                        parent_id: Some(parent.id.clone()),
                        index,
                    });
                }
            }
        }
        None
    }

    /// Detach a component subtree from whichever file holds it.
    pub fn detach_component(&mut self, id: &str) -> Option<Component> {
        self.view_files
            .iter_mut()
            .find_map(|file| file.detach_component(id))
    }

    /// Split borrow for callers that need to edit a component and allocate
    /// ids at the same time.
    pub fn files_and_ids(&mut self) -> (&mut Vec<ViewFile>, &mut IdGenerator) {
        (&mut self.view_files, &mut self.ids)
    }
}

impl ViewFile {
    /// Depth-first pre-order search across the root forest.
    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find_map(|root| root.find(id))
    }

    pub fn find_component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components
            .iter_mut()
            .find_map(|root| root.find_mut(id))
    }

    pub fn contains_component(&self, id: &str) -> bool {
        self.find_component(id).is_some()
    }

    /// Detach the subtree rooted at `id`, whether it is a root or nested.
    pub fn detach_component(&mut self, id: &str) -> Option<Component> {
        if let Some(position) = self.components.iter().position(|root| root.id == id) {
            return Some(self.components.remove(position));
        }
        for root in &mut self.components {
            if let Some(detached) = root.detach_child(id) {
                return Some(detached);
            }
        }
        None
    }

    /// Pre-order walk over every component in the file.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Component)) {
        for root in &self.components {
            root.walk(visit);
        }
    }

    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.id == id)
    }

    pub fn remove_variable(&mut self, id: &str) -> Option<Variable> {
        let position = self
            .variables
            .iter()
            .position(|variable| variable.id == id)?;
        Some(self.variables.remove(position))
    }
}

impl ModelFile {
    pub fn field(&self, id: &str) -> Option<&ModelField> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn remove_field(&mut self, id: &str) -> Option<ModelField> {
        let position = self.fields.iter().position(|field| field.id == id)?;
        Some(self.fields.remove(position))
    }
}
