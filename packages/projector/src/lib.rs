pub mod modifiers;
pub mod projector;
pub mod scene;

#[cfg(test)]
mod tests_projection;

pub use modifiers::{apply_modifiers, default_arguments, is_known_modifier};
pub use projector::{Projector, DEFAULT_SPACING};
pub use scene::{Axis, Effect, Scene, Visual};
