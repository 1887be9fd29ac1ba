use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;
use crate::kind::ComponentKind;

/// One node of a view file's component tree.
///
/// Children are owned directly, so a component value is always a whole
/// subtree and moving one moves everything beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub kind: ComponentKind,
    pub properties: Vec<Property>,
    pub modifiers: Vec<Modifier>,
    pub children: Vec<Component>,
    /// View file a custom view points at. Unset or dangling references
    /// project as placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_view: Option<String>,
}

/// A key/value pair on a component. Values are stored as strings and
/// interpreted at projection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub key: String,
    pub value: String,
}

/// A styling modifier. Order in the component's list is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    pub arguments: Vec<ModifierArgument>,
}

/// One argument of a modifier, optionally labeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierArgument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
}

impl ModifierArgument {
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

impl Component {
    /// Create a bare component with no properties seeded.
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            properties: Vec::new(),
            modifiers: Vec::new(),
            children: Vec::new(),
            referenced_view: None,
        }
    }

    /// Create a component of `kind` with its default properties seeded.
    /// Seeding happens exactly once, here; later kind-table changes never
    /// rewrite existing components.
    pub fn with_defaults(kind: ComponentKind, ids: &mut IdGenerator) -> Self {
        let mut component = Component::new(ids.new_id(), kind);
        for (key, value) in kind.default_properties() {
            component.properties.push(Property {
                id: ids.new_id(),
                key: (*key).to_string(),
                value: (*value).to_string(),
            });
        }
        component
    }

    /// Depth-first pre-order search of this subtree.
    pub fn find(&self, id: &str) -> Option<&Component> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Component> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Whether `id` names this component or anything beneath it.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Find the parent of `id` within this subtree, with the child's index.
    pub fn locate(&self, id: &str) -> Option<(&Component, usize)> {
        if let Some(position) = self.children.iter().position(|child| child.id == id) {
            return Some((self, position));
        }
        self.children.iter().find_map(|child| child.locate(id))
    }

    /// Detach the subtree rooted at `id` from anywhere below this node.
    pub fn detach_child(&mut self, id: &str) -> Option<Component> {
        if let Some(position) = self.children.iter().position(|child| child.id == id) {
            return Some(self.children.remove(position));
        }
        for child in &mut self.children {
            if let Some(detached) = child.detach_child(id) {
                return Some(detached);
            }
        }
        None
    }

    /// Pre-order walk over this subtree.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Component)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Component)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// First property with `key`. Duplicate keys can only enter through
    /// hand-built data; reads resolve to the first match.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.key == key)
    }

    /// Update the property named `key` in place, or append a new one.
    /// Going through here keeps keys unique within the component.
    pub fn set_property(&mut self, key: &str, value: &str, ids: &mut IdGenerator) {
        if let Some(property) = self
            .properties
            .iter_mut()
            .find(|property| property.key == key)
        {
            property.value = value.to_string();
            return;
        }
        self.properties.push(Property {
            id: ids.new_id(),
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    pub fn remove_property(&mut self, property_id: &str) -> Option<Property> {
        let position = self
            .properties
            .iter()
            .position(|property| property.id == property_id)?;
        Some(self.properties.remove(position))
    }

    /// Append a modifier to the end of the list (the outermost styling layer).
    /// Returns the new modifier's id.
    pub fn add_modifier(
        &mut self,
        name: &str,
        arguments: Vec<ModifierArgument>,
        ids: &mut IdGenerator,
    ) -> String {
        let id = ids.new_id();
        self.modifiers.push(Modifier {
            id: id.clone(),
            name: name.to_string(),
            arguments,
        });
        id
    }

    pub fn remove_modifier(&mut self, modifier_id: &str) -> Option<Modifier> {
        let position = self
            .modifiers
            .iter()
            .position(|modifier| modifier.id == modifier_id)?;
        Some(self.modifiers.remove(position))
    }
}
