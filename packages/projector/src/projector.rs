use std::collections::HashMap;

use flowkit_document::{Component, ComponentKind, Project, ViewFile};
use tracing::{debug, instrument, warn};

use crate::modifiers::apply_modifiers;
use crate::scene::{Axis, Scene, Visual};

/// Gap between stack children when the spacing property is missing or
/// unparsable.
pub const DEFAULT_SPACING: f64 = 10.0;

/// Projects component trees into scenes.
///
/// Projection is a pure function of the document: it never mutates it, and
/// the same input always yields the same scene. Broken data (unparsable
/// numbers, unset, dangling, or cyclic view references) degrades to
/// fallbacks and placeholder visuals instead of errors.
pub struct Projector<'a> {
    /// Every view file in the project, for resolving custom-view references.
    files: HashMap<&'a str, &'a ViewFile>,
    /// View files currently being expanded; guards against reference cycles.
    reference_stack: Vec<String>,
}

impl<'a> Projector<'a> {
    pub fn new(project: &'a Project) -> Self {
        let files = project
            .view_files
            .iter()
            .map(|file| (file.id.as_str(), file))
            .collect();
        Self {
            files,
            reference_stack: Vec::new(),
        }
    }

    /// Project one view file's root components, in order.
    #[instrument(skip(self, file), fields(file_name = %file.name, roots = file.components.len()))]
    pub fn project_file(&mut self, file: &ViewFile) -> Scene {
        debug!("Projecting view file");
        self.reference_stack.push(file.id.clone());
        let mut scene = Scene::new();
        for component in &file.components {
            scene.add_root(self.project_component(component));
        }
        self.reference_stack.pop();
        scene
    }

    /// Project a single component subtree into a visual, modifiers applied.
    pub fn project_component(&mut self, component: &Component) -> Visual {
        let visual = match component.kind {
            ComponentKind::Text => Visual::Text {
                content: self.literal(component, "text").unwrap_or_else(|| "Text".to_string()),
            },
            ComponentKind::Image => Visual::Image {
                symbol: self
                    .literal(component, "systemName")
                    .unwrap_or_else(|| "photo".to_string()),
            },
            ComponentKind::Button => Visual::Button {
                label: self
                    .literal(component, "label")
                    .unwrap_or_else(|| "Button".to_string()),
            },
            ComponentKind::TextField => Visual::TextField {
                placeholder: self.literal(component, "placeholder").unwrap_or_default(),
            },
            ComponentKind::Spacer => Visual::Spacer,
            ComponentKind::VerticalStack => self.project_stack(component, Axis::Vertical),
            ComponentKind::HorizontalStack => self.project_stack(component, Axis::Horizontal),
            ComponentKind::LayeredStack => self.project_stack(component, Axis::Layered),
            ComponentKind::CustomView => self.project_reference(component),
        };
        apply_modifiers(visual, &component.modifiers)
    }

    fn project_stack(&mut self, component: &Component, axis: Axis) -> Visual {
        let spacing = self
            .literal(component, "spacing")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_SPACING);
        let children = component
            .children
            .iter()
            .map(|child| self.project_component(child))
            .collect();
        Visual::Stack {
            axis,
            spacing,
            children,
        }
    }

    /// Expand a custom view into the file it references. Unset, dangling,
    /// and cyclic references all degrade to placeholders.
    fn project_reference(&mut self, component: &Component) -> Visual {
        let Some(view_id) = component.referenced_view.as_deref() else {
            return Visual::placeholder("Custom View");
        };
        let Some(file) = self.files.get(view_id).copied() else {
            warn!(view_id, "custom view points at a missing file");
            return Visual::placeholder(format!("Missing view {}", view_id));
        };
        if self.reference_stack.iter().any(|id| id == view_id) {
            warn!(file_name = %file.name, "view reference cycle - rendering placeholder");
            return Visual::placeholder(format!("Reference cycle through {}", file.name));
        }

        self.reference_stack.push(view_id.to_string());
        let children: Vec<Visual> = file
            .components
            .iter()
            .map(|root| self.project_component(root))
            .collect();
        self.reference_stack.pop();

        Visual::Stack {
            axis: Axis::Vertical,
            spacing: DEFAULT_SPACING,
            children,
        }
    }

    /// Read a property as a displayable literal, quotes stripped.
    fn literal(&self, component: &Component, key: &str) -> Option<String> {
        component
            .property(key)
            .map(|property| property.value.replace('"', ""))
    }
}
