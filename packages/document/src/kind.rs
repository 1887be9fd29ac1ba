use serde::{Deserialize, Serialize};

/// The closed set of component kinds the editor can place on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Text,
    Image,
    VerticalStack,
    HorizontalStack,
    LayeredStack,
    Spacer,
    Button,
    TextField,
    CustomView,
}

/// Palette group a kind is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteCategory {
    Layout,
    Controls,
    Display,
    Custom,
}

/// Everything the editor knows about a component kind, in one row.
///
/// The palette, the structure sidebar, and default-property seeding all read
/// from this table rather than keeping parallel lookup switches that can
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFacts {
    pub display_name: &'static str,
    pub icon: &'static str,
    pub category: PaletteCategory,
    pub is_container: bool,
    /// Key/value pairs seeded onto a freshly created component.
    pub default_properties: &'static [(&'static str, &'static str)],
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::VerticalStack,
        ComponentKind::HorizontalStack,
        ComponentKind::LayeredStack,
        ComponentKind::Spacer,
        ComponentKind::Button,
        ComponentKind::TextField,
        ComponentKind::CustomView,
    ];

    pub fn facts(&self) -> &'static KindFacts {
        match self {
            ComponentKind::Text => &KindFacts {
                display_name: "Text",
                icon: "textformat",
                category: PaletteCategory::Display,
                is_container: false,
                default_properties: &[("text", "\"Hello, World!\"")],
            },
            ComponentKind::Image => &KindFacts {
                display_name: "Image",
                icon: "photo",
                category: PaletteCategory::Display,
                is_container: false,
                default_properties: &[("systemName", "\"photo\"")],
            },
            ComponentKind::VerticalStack => &KindFacts {
                display_name: "Vertical Stack",
                icon: "rectangle.split.1x3",
                category: PaletteCategory::Layout,
                is_container: true,
                default_properties: &[("spacing", "10")],
            },
            ComponentKind::HorizontalStack => &KindFacts {
                display_name: "Horizontal Stack",
                icon: "rectangle.split.3x1",
                category: PaletteCategory::Layout,
                is_container: true,
                default_properties: &[("spacing", "10")],
            },
            ComponentKind::LayeredStack => &KindFacts {
                display_name: "Layered Stack",
                icon: "square.stack.3d.up",
                category: PaletteCategory::Layout,
                is_container: true,
                default_properties: &[("spacing", "10")],
            },
            ComponentKind::Spacer => &KindFacts {
                display_name: "Spacer",
                icon: "arrow.left.and.right",
                category: PaletteCategory::Layout,
                is_container: false,
                default_properties: &[],
            },
            ComponentKind::Button => &KindFacts {
                display_name: "Button",
                icon: "button.programmable",
                category: PaletteCategory::Controls,
                is_container: false,
                default_properties: &[("action", "{}"), ("label", "\"Button\"")],
            },
            ComponentKind::TextField => &KindFacts {
                display_name: "Text Field",
                icon: "character.textbox",
                category: PaletteCategory::Controls,
                is_container: false,
                default_properties: &[
                    ("placeholder", "\"Enter text...\""),
                    ("text", ".constant(\"\")"),
                ],
            },
            ComponentKind::CustomView => &KindFacts {
                display_name: "Custom View",
                icon: "doc.badge.plus",
                category: PaletteCategory::Custom,
                is_container: false,
                default_properties: &[],
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.facts().display_name
    }

    pub fn icon(&self) -> &'static str {
        self.facts().icon
    }

    pub fn category(&self) -> PaletteCategory {
        self.facts().category
    }

    /// Container kinds may hold children; every other kind is a leaf.
    pub fn is_container(&self) -> bool {
        self.facts().is_container
    }

    pub fn default_properties(&self) -> &'static [(&'static str, &'static str)] {
        self.facts().default_properties
    }
}

/// Palette layout: each category with its kinds, in declaration order.
pub fn palette() -> [(PaletteCategory, Vec<ComponentKind>); 4] {
    let categories = [
        PaletteCategory::Layout,
        PaletteCategory::Controls,
        PaletteCategory::Display,
        PaletteCategory::Custom,
    ];
    categories.map(|category| {
        let kinds = ComponentKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.category() == category)
            .collect();
        (category, kinds)
    })
}

/// Storage semantics of a view-file variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableKind {
    State,
    Binding,
    Constant,
    Environment,
    ObservedObject,
    EnvironmentObject,
}

impl VariableKind {
    pub const ALL: [VariableKind; 6] = [
        VariableKind::State,
        VariableKind::Binding,
        VariableKind::Constant,
        VariableKind::Environment,
        VariableKind::ObservedObject,
        VariableKind::EnvironmentObject,
    ];

    /// Whether a declared default value is meaningful for this kind.
    pub fn supports_default(&self) -> bool {
        matches!(self, VariableKind::State | VariableKind::Constant)
    }
}

/// Accent color a project is badged with in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectColor {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Pink,
    Gray,
}

impl ProjectColor {
    pub const ALL: [ProjectColor; 10] = [
        ProjectColor::Red,
        ProjectColor::Orange,
        ProjectColor::Yellow,
        ProjectColor::Green,
        ProjectColor::Teal,
        ProjectColor::Blue,
        ProjectColor::Indigo,
        ProjectColor::Purple,
        ProjectColor::Pink,
        ProjectColor::Gray,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectColor::Red => "Red",
            ProjectColor::Orange => "Orange",
            ProjectColor::Yellow => "Yellow",
            ProjectColor::Green => "Green",
            ProjectColor::Teal => "Teal",
            ProjectColor::Blue => "Blue",
            ProjectColor::Indigo => "Indigo",
            ProjectColor::Purple => "Purple",
            ProjectColor::Pink => "Pink",
            ProjectColor::Gray => "Gray",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProjectColor::Red => "flame.fill",
            ProjectColor::Orange => "sun.max.fill",
            ProjectColor::Yellow => "lightbulb.fill",
            ProjectColor::Green => "leaf.fill",
            ProjectColor::Teal => "drop.fill",
            ProjectColor::Blue => "cloud.fill",
            ProjectColor::Indigo => "moon.fill",
            ProjectColor::Purple => "sparkles",
            ProjectColor::Pink => "heart.fill",
            ProjectColor::Gray => "circle",
        }
    }
}
