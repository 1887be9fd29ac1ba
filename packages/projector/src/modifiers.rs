use flowkit_document::{Modifier, ModifierArgument};
use tracing::debug;

use crate::scene::{Effect, Visual};

/// Default arguments seeded when a modifier is added without any.
///
/// This table is also the fallback source during projection: an argument
/// that is missing or fails to parse resolves to its entry here, so stored
/// data can never fail a render.
pub fn default_arguments(name: &str) -> Vec<ModifierArgument> {
    match name {
        "padding" => vec![ModifierArgument::positional("16")],
        "frame" => vec![
            ModifierArgument::named("width", "100"),
            ModifierArgument::named("height", "50"),
        ],
        "background" => vec![ModifierArgument::positional(".blue")],
        "foregroundStyle" | "foregroundColor" => vec![ModifierArgument::positional(".primary")],
        "font" => vec![ModifierArgument::positional(".title")],
        "cornerRadius" => vec![ModifierArgument::positional("8")],
        "shadow" => vec![ModifierArgument::named("radius", "5")],
        "opacity" => vec![ModifierArgument::positional("0.5")],
        "scaleEffect" => vec![ModifierArgument::positional("1.2")],
        "rotationEffect" => vec![ModifierArgument::positional("45")],
        "offset" => vec![
            ModifierArgument::named("x", "0"),
            ModifierArgument::named("y", "0"),
        ],
        "clipShape" => vec![ModifierArgument::positional("circle")],
        _ => Vec::new(),
    }
}

/// Modifier names the projector understands.
pub fn is_known_modifier(name: &str) -> bool {
    matches!(
        name,
        "padding"
            | "frame"
            | "background"
            | "foregroundStyle"
            | "foregroundColor"
            | "font"
            | "cornerRadius"
            | "shadow"
            | "opacity"
            | "scaleEffect"
            | "rotationEffect"
            | "offset"
            | "clipShape"
    )
}

/// Fold a component's modifier list over its projected visual, left to
/// right, so the first modifier becomes the innermost styling layer.
/// Unrecognized names are skipped.
pub fn apply_modifiers(mut visual: Visual, modifiers: &[Modifier]) -> Visual {
    for modifier in modifiers {
        match effect_for(modifier) {
            Some(effect) => visual = visual.styled(effect),
            None => {
                debug!(name = %modifier.name, "skipping unrecognized modifier");
            }
        }
    }
    visual
}

/// Resolve one stored modifier into an effect. `None` means the name is
/// outside the vocabulary and the modifier contributes nothing.
pub fn effect_for(modifier: &Modifier) -> Option<Effect> {
    let arguments = &modifier.arguments;
    match modifier.name.as_str() {
        "padding" => Some(Effect::Padding {
            inset: number_or(first_value(arguments), 16.0),
        }),
        "frame" => Some(Effect::Frame {
            width: named_value(arguments, "width").and_then(parse_number),
            height: named_value(arguments, "height").and_then(parse_number),
        }),
        "background" => Some(Effect::Background {
            color: normalize_color(first_value(arguments).unwrap_or(".blue")),
        }),
        "foregroundStyle" | "foregroundColor" => Some(Effect::ForegroundStyle {
            color: normalize_color(first_value(arguments).unwrap_or(".primary")),
        }),
        "font" => Some(Effect::Font {
            style: normalize_font(first_value(arguments).unwrap_or(".title")),
        }),
        "cornerRadius" => Some(Effect::CornerRadius {
            radius: number_or(first_value(arguments), 8.0),
        }),
        "shadow" => Some(Effect::Shadow {
            radius: number_or(named_value(arguments, "radius"), 5.0),
        }),
        "opacity" => Some(Effect::Opacity {
            value: number_or(first_value(arguments), 0.5),
        }),
        "scaleEffect" => Some(Effect::ScaleEffect {
            factor: number_or(first_value(arguments), 1.2),
        }),
        "rotationEffect" => Some(Effect::RotationEffect {
            degrees: number_or(first_value(arguments), 45.0),
        }),
        "offset" => Some(Effect::Offset {
            x: number_or(named_value(arguments, "x"), 0.0),
            y: number_or(named_value(arguments, "y"), 0.0),
        }),
        "clipShape" => Some(Effect::ClipShape {
            shape: clean_token(first_value(arguments).unwrap_or("circle")),
        }),
        _ => None,
    }
}

/// Normalize a color argument (".blue", "Blue", "grey") against the known
/// palette. Unknown names resolve to the primary color rather than failing.
pub fn normalize_color(value: &str) -> String {
    let cleaned = clean_token(value);
    match cleaned.as_str() {
        "red" | "blue" | "green" | "yellow" | "orange" | "purple" | "pink" | "gray" | "black"
        | "white" | "clear" | "accentcolor" => cleaned,
        "grey" => "gray".to_string(),
        _ => "primary".to_string(),
    }
}

/// Normalize a font style argument (".largeTitle", "Body"). Unknown names
/// resolve to the body style.
pub fn normalize_font(value: &str) -> String {
    let cleaned = clean_token(value);
    match cleaned.as_str() {
        "largetitle" | "title" | "title2" | "title3" | "headline" | "subheadline" | "body"
        | "callout" | "footnote" | "caption" | "caption2" => cleaned,
        _ => "body".to_string(),
    }
}

/// Lowercase and strip the leading-dot member syntax and quotes.
fn clean_token(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['.', '"'], "")
}

fn first_value(arguments: &[ModifierArgument]) -> Option<&str> {
    arguments.first().map(|argument| argument.value.as_str())
}

fn named_value<'a>(arguments: &'a [ModifierArgument], name: &str) -> Option<&'a str> {
    arguments
        .iter()
        .find(|argument| argument.name.as_deref() == Some(name))
        .map(|argument| argument.value.as_str())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().trim_matches('"').parse().ok()
}

fn number_or(value: Option<&str>, fallback: f64) -> f64 {
    value.and_then(parse_number).unwrap_or(fallback)
}
