use serde::{Deserialize, Serialize};

/// Direction children of a stack are composed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
    Layered,
}

/// Renderable node produced by projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Visual {
    /// Children composed along an axis with a gap between them
    Stack {
        axis: Axis,
        spacing: f64,
        children: Vec<Visual>,
    },

    /// Text run
    Text { content: String },

    /// Iconographic image, addressed by symbol name
    Image { symbol: String },

    /// Tappable button with its label
    Button { label: String },

    /// Single-line text input showing its placeholder
    TextField { placeholder: String },

    /// Flexible empty space
    Spacer,

    /// One styling layer wrapped around an inner visual. Nesting order
    /// follows the source modifier list: the first modifier is innermost.
    Styled { effect: Effect, content: Box<Visual> },

    /// Stand-in for content that cannot be projected (unset, dangling, or
    /// cyclic view references). Shown instead of failing the projection.
    Placeholder { message: String },
}

/// A single resolved styling operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    Padding { inset: f64 },
    Frame { width: Option<f64>, height: Option<f64> },
    Background { color: String },
    ForegroundStyle { color: String },
    Font { style: String },
    CornerRadius { radius: f64 },
    Shadow { radius: f64 },
    Opacity { value: f64 },
    ScaleEffect { factor: f64 },
    RotationEffect { degrees: f64 },
    Offset { x: f64, y: f64 },
    ClipShape { shape: String },
}

impl Visual {
    pub fn stack(axis: Axis, spacing: f64) -> Self {
        Visual::Stack {
            axis,
            spacing,
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Visual::Text {
            content: content.into(),
        }
    }

    pub fn placeholder(message: impl Into<String>) -> Self {
        Visual::Placeholder {
            message: message.into(),
        }
    }

    pub fn with_child(mut self, child: Visual) -> Self {
        if let Visual::Stack {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = Visual>) -> Self {
        if let Visual::Stack {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Wrap this visual in a styling layer.
    pub fn styled(self, effect: Effect) -> Self {
        Visual::Styled {
            effect,
            content: Box::new(self),
        }
    }

    /// The visual beneath every styling layer.
    pub fn unstyled(&self) -> &Visual {
        match self {
            Visual::Styled { content, .. } => content.unstyled(),
            other => other,
        }
    }

    /// Styling layers around this visual, innermost first.
    pub fn effects(&self) -> Vec<&Effect> {
        let mut effects = Vec::new();
        let mut current = self;
        while let Visual::Styled { effect, content } = current {
            effects.push(effect);
            current = content;
        }
        effects.reverse();
        effects
    }
}

/// Projected preview of one view file: its root visuals, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub roots: Vec<Visual>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, visual: Visual) {
        self.roots.push(visual);
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
