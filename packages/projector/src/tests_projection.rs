use flowkit_document::{ComponentKind, ModifierArgument, Project, ProjectColor};

use crate::projector::{Projector, DEFAULT_SPACING};
use crate::scene::{Axis, Effect, Visual};

fn empty_project() -> Project {
    Project::new("Preview", "app.fill", ProjectColor::Blue)
}

#[test]
fn test_fresh_text_projects_seeded_content() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");
    let text = project.create_component(ComponentKind::Text);
    file.components.push(text);
    project.view_files.push(file);

    let file = &project.view_files[0];
    let scene = Projector::new(&project).project_file(file);

    assert_eq!(scene.roots.len(), 1);
    // The seeded value is quoted in storage; projection strips the quotes.
    assert_eq!(scene.roots[0], Visual::text("Hello, World!"));
}

#[test]
fn test_stack_spacing_comes_from_property() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");

    let mut stack = project.create_component(ComponentKind::VerticalStack);
    stack.set_property("spacing", "24", project.ids());
    let mut child = project.create_component(ComponentKind::Text);
    child.set_property("text", "\"one\"", project.ids());
    stack.children.push(child);
    file.components.push(stack);
    project.view_files.push(file);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    match &scene.roots[0] {
        Visual::Stack {
            axis,
            spacing,
            children,
        } => {
            assert_eq!(*axis, Axis::Vertical);
            assert_eq!(*spacing, 24.0);
            assert_eq!(children.len(), 1);
        }
        other => panic!("expected stack, got {:?}", other),
    }
}

#[test]
fn test_unparsable_spacing_falls_back_to_default() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");
    let mut stack = project.create_component(ComponentKind::HorizontalStack);
    stack.set_property("spacing", "roomy", project.ids());
    file.components.push(stack);
    project.view_files.push(file);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    match &scene.roots[0] {
        Visual::Stack { spacing, axis, .. } => {
            assert_eq!(*spacing, DEFAULT_SPACING);
            assert_eq!(*axis, Axis::Horizontal);
        }
        other => panic!("expected stack, got {:?}", other),
    }
}

#[test]
fn test_kind_fallbacks_when_properties_missing() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");

    // Bare components, bypassing default seeding.
    let text = flowkit_document::Component::new(project.ids().new_id(), ComponentKind::Text);
    let button = flowkit_document::Component::new(project.ids().new_id(), ComponentKind::Button);
    let image = flowkit_document::Component::new(project.ids().new_id(), ComponentKind::Image);
    let field = flowkit_document::Component::new(project.ids().new_id(), ComponentKind::TextField);
    file.components.extend([text, button, image, field]);
    project.view_files.push(file);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    assert_eq!(scene.roots[0], Visual::text("Text"));
    assert_eq!(
        scene.roots[1],
        Visual::Button {
            label: "Button".to_string(),
        }
    );
    assert_eq!(
        scene.roots[2],
        Visual::Image {
            symbol: "photo".to_string(),
        }
    );
    assert_eq!(
        scene.roots[3],
        Visual::TextField {
            placeholder: String::new(),
        }
    );
}

#[test]
fn test_modifiers_wrap_in_list_order() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");

    let mut text = project.create_component(ComponentKind::Text);
    text.add_modifier("padding", vec![], project.ids());
    text.add_modifier(
        "background",
        vec![ModifierArgument::positional(".green")],
        project.ids(),
    );
    file.components.push(text);
    project.view_files.push(file);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    let effects = scene.roots[0].effects();
    assert_eq!(effects[0], &Effect::Padding { inset: 16.0 });
    assert_eq!(
        effects[1],
        &Effect::Background {
            color: "green".to_string(),
        }
    );
    assert_eq!(scene.roots[0].unstyled(), &Visual::text("Hello, World!"));
}

#[test]
fn test_projection_is_deterministic() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");
    let mut stack = project.create_component(ComponentKind::VerticalStack);
    let mut text = project.create_component(ComponentKind::Text);
    text.add_modifier("opacity", vec![], project.ids());
    stack.children.push(text);
    stack.children.push(project.create_component(ComponentKind::Spacer));
    file.components.push(stack);
    project.view_files.push(file);

    let first = Projector::new(&project).project_file(&project.view_files[0]);
    let second = Projector::new(&project).project_file(&project.view_files[0]);

    assert_eq!(first, second);
}

#[test]
fn test_custom_view_expands_referenced_file() {
    let mut project = empty_project();

    let mut detail = project.create_view_file("Detail");
    detail
        .components
        .push(project.create_component(ComponentKind::Text));
    let detail_id = detail.id.clone();
    project.view_files.push(detail);

    let mut home = project.create_view_file("Home");
    let mut custom = project.create_component(ComponentKind::CustomView);
    custom.referenced_view = Some(detail_id);
    home.components.push(custom);
    project.view_files.push(home);

    let scene = Projector::new(&project).project_file(&project.view_files[1]);

    match &scene.roots[0] {
        Visual::Stack { children, .. } => {
            assert_eq!(children[0], Visual::text("Hello, World!"));
        }
        other => panic!("expected expanded reference, got {:?}", other),
    }
}

#[test]
fn test_unset_reference_projects_placeholder() {
    let mut project = empty_project();
    let mut home = project.create_view_file("Home");
    home.components
        .push(project.create_component(ComponentKind::CustomView));
    project.view_files.push(home);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    assert_eq!(scene.roots[0], Visual::placeholder("Custom View"));
}

#[test]
fn test_dangling_reference_projects_placeholder() {
    let mut project = empty_project();
    let mut home = project.create_view_file("Home");
    let mut custom = project.create_component(ComponentKind::CustomView);
    custom.referenced_view = Some("gone-42".to_string());
    home.components.push(custom);
    project.view_files.push(home);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    match &scene.roots[0] {
        Visual::Placeholder { message } => assert!(message.contains("gone-42")),
        other => panic!("expected placeholder, got {:?}", other),
    }
}

#[test]
fn test_reference_cycle_projects_placeholder() {
    let mut project = empty_project();

    let mut a = project.create_view_file("A");
    let mut b = project.create_view_file("B");
    let a_id = a.id.clone();
    let b_id = b.id.clone();

    let mut a_ref = project.create_component(ComponentKind::CustomView);
    a_ref.referenced_view = Some(b_id);
    a.components.push(a_ref);

    let mut b_ref = project.create_component(ComponentKind::CustomView);
    b_ref.referenced_view = Some(a_id);
    b.components.push(b_ref);

    project.view_files.push(a);
    project.view_files.push(b);

    // A -> B -> A stops at the cycle with a placeholder instead of recursing.
    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    let outer = match &scene.roots[0] {
        Visual::Stack { children, .. } => &children[0],
        other => panic!("expected expanded reference, got {:?}", other),
    };
    match outer {
        Visual::Placeholder { message } => assert!(message.contains('A')),
        other => panic!("expected cycle placeholder, got {:?}", other),
    }
}

#[test]
fn test_self_reference_projects_placeholder() {
    let mut project = empty_project();
    let mut home = project.create_view_file("Home");
    let home_id = home.id.clone();
    let mut custom = project.create_component(ComponentKind::CustomView);
    custom.referenced_view = Some(home_id);
    home.components.push(custom);
    project.view_files.push(home);

    let scene = Projector::new(&project).project_file(&project.view_files[0]);

    match &scene.roots[0] {
        Visual::Placeholder { message } => assert!(message.contains("Home")),
        other => panic!("expected placeholder, got {:?}", other),
    }
}

#[test]
fn test_projection_leaves_project_untouched() {
    let mut project = empty_project();
    let mut file = project.create_view_file("Home");
    let mut stack = project.create_component(ComponentKind::VerticalStack);
    stack.children.push(project.create_component(ComponentKind::Text));
    file.components.push(stack);
    project.view_files.push(file);

    let before = project.clone();
    let _ = Projector::new(&project).project_file(&project.view_files[0]);

    assert_eq!(project, before);
}
