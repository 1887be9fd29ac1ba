//! Drag-and-drop placement policy tests

use flowkit_document::{ComponentKind, Project, ProjectColor};
use flowkit_editor::{Document, DragPayload, DropTarget, EditSession, Mutation, Placement};

fn session_with_screen() -> (EditSession, String) {
    let mut project = Project::new("Test", "app.fill", ProjectColor::Blue);
    let file = project.create_view_file("Home");
    let file_id = file.id.clone();
    project.view_files.push(file);
    let mut session = EditSession::new(Document::from_project(project));
    session.selection.select_view_file(&file_id);
    (session, file_id)
}

fn insert_root(session: &mut EditSession, file_id: &str, kind: ComponentKind) -> String {
    let component = session.document.project_mut().create_component(kind);
    let id = component.id.clone();
    assert!(session.commit(Mutation::InsertComponent {
        component,
        placement: Placement::Root {
            file_id: file_id.to_string(),
            index: None,
        },
    }));
    id
}

fn insert_child(session: &mut EditSession, parent_id: &str, kind: ComponentKind) -> String {
    let component = session.document.project_mut().create_component(kind);
    let id = component.id.clone();
    assert!(session.commit(Mutation::InsertComponent {
        component,
        placement: Placement::Inside {
            parent_id: parent_id.to_string(),
            index: None,
        },
    }));
    id
}

fn child_ids(session: &EditSession, parent_id: &str) -> Vec<String> {
    session
        .document
        .project()
        .find_component(parent_id)
        .unwrap()
        .children
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

fn root_ids(session: &EditSession, file_id: &str) -> Vec<String> {
    session
        .document
        .project()
        .view_file(file_id)
        .unwrap()
        .components
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

#[test]
fn test_drop_on_container_appends_as_last_child() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let existing_child = insert_child(&mut session, &stack_id, ComponentKind::Text);
    let dragged = insert_root(&mut session, &file_id, ComponentKind::Button);

    let dropped = session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::Component {
            component_id: stack_id.clone(),
        },
    );

    assert!(dropped);
    assert_eq!(child_ids(&session, &stack_id), vec![existing_child, dragged.clone()]);
    // The root list no longer holds the dragged component.
    assert_eq!(root_ids(&session, &file_id), vec![stack_id]);
    // The landed component becomes the selection.
    assert_eq!(session.selection.component.as_deref(), Some(dragged.as_str()));
}

#[test]
fn test_drop_on_leaf_inserts_sibling_after() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let first = insert_child(&mut session, &stack_id, ComponentKind::Text);
    let second = insert_child(&mut session, &stack_id, ComponentKind::Text);
    let dragged = insert_root(&mut session, &file_id, ComponentKind::Image);

    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::Component {
            component_id: first.clone(),
        },
    ));

    assert_eq!(child_ids(&session, &stack_id), vec![first, dragged, second]);
}

#[test]
fn test_drop_on_later_sibling_lands_right_after_it() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let dragged = insert_child(&mut session, &stack_id, ComponentKind::Image);
    let target = insert_child(&mut session, &stack_id, ComponentKind::Text);
    let trailing = insert_child(&mut session, &stack_id, ComponentKind::Spacer);

    // Detaching the dragged component shifts its later siblings down one
    // slot; the landing position accounts for that.
    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::Component {
            component_id: target.clone(),
        },
    ));

    assert_eq!(child_ids(&session, &stack_id), vec![target, dragged, trailing]);
}

#[test]
fn test_drop_on_immediately_preceding_sibling_stays_put() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let target = insert_child(&mut session, &stack_id, ComponentKind::Text);
    let dragged = insert_child(&mut session, &stack_id, ComponentKind::Image);

    let before = session.document.project().clone();
    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged,
        },
        DropTarget::Component {
            component_id: target,
        },
    ));

    // Already the following sibling, so the tree is unchanged.
    assert_eq!(session.document.project(), &before);
}

#[test]
fn test_drop_on_root_leaf_lands_in_root_list() {
    let (mut session, file_id) = session_with_screen();

    let leaf = insert_root(&mut session, &file_id, ComponentKind::Text);
    let trailing = insert_root(&mut session, &file_id, ComponentKind::Spacer);
    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let dragged = insert_child(&mut session, &stack_id, ComponentKind::Button);

    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::Component {
            component_id: leaf.clone(),
        },
    ));

    assert_eq!(
        root_ids(&session, &file_id),
        vec![leaf, dragged.clone(), trailing, stack_id.clone()]
    );
    assert!(child_ids(&session, &stack_id).is_empty());
}

#[test]
fn test_grandchild_dropped_on_root_leaf() {
    let (mut session, file_id) = session_with_screen();

    // Root-level leaf L, and a grandchild B two levels down.
    let leaf = insert_root(&mut session, &file_id, ComponentKind::Text);
    let outer = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let inner = insert_child(&mut session, &outer, ComponentKind::HorizontalStack);
    let grandchild = insert_child(&mut session, &inner, ComponentKind::Button);

    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: grandchild.clone(),
        },
        DropTarget::Component {
            component_id: leaf.clone(),
        },
    ));

    // B sits immediately after L at root level, and its old parent no
    // longer lists it.
    assert_eq!(root_ids(&session, &file_id), vec![leaf, grandchild.clone(), outer]);
    assert!(child_ids(&session, &inner).is_empty());
}

#[test]
fn test_drop_on_file_root_zone_appends() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let dragged = insert_child(&mut session, &stack_id, ComponentKind::Text);

    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::FileRoot {
            file_id: file_id.clone(),
        },
    ));

    assert_eq!(root_ids(&session, &file_id), vec![stack_id, dragged]);
}

#[test]
fn test_palette_drop_creates_seeded_component() {
    let (mut session, file_id) = session_with_screen();

    let dropped = session.handle_drop(
        DragPayload::Palette {
            kind: ComponentKind::Text,
        },
        DropTarget::FileRoot {
            file_id: file_id.clone(),
        },
    );
    assert!(dropped);

    let roots = root_ids(&session, &file_id);
    assert_eq!(roots.len(), 1);

    let project = session.document.project();
    let text = project.find_component(&roots[0]).unwrap();
    assert_eq!(text.kind, ComponentKind::Text);
    assert_eq!(
        text.property("text").map(|p| p.value.as_str()),
        Some("\"Hello, World!\"")
    );
    assert_eq!(session.selection.component.as_deref(), Some(roots[0].as_str()));
}

#[test]
fn test_palette_drop_on_leaf_becomes_sibling() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let leaf = insert_child(&mut session, &stack_id, ComponentKind::Text);

    assert!(session.handle_drop(
        DragPayload::Palette {
            kind: ComponentKind::Spacer,
        },
        DropTarget::Component {
            component_id: leaf.clone(),
        },
    ));

    let children = child_ids(&session, &stack_id);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], leaf);
    let spacer = session
        .document
        .project()
        .find_component(&children[1])
        .unwrap();
    assert_eq!(spacer.kind, ComponentKind::Spacer);
}

#[test]
fn test_drop_onto_self_is_identity() {
    let (mut session, file_id) = session_with_screen();
    let text = insert_root(&mut session, &file_id, ComponentKind::Text);

    let before = session.document.project().clone();

    let dropped = session.handle_drop(
        DragPayload::Existing {
            component_id: text.clone(),
        },
        DropTarget::Component {
            component_id: text,
        },
    );

    assert!(!dropped);
    assert_eq!(session.document.project(), &before);
}

#[test]
fn test_drop_onto_descendant_is_identity() {
    let (mut session, file_id) = session_with_screen();

    let outer = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let inner = insert_child(&mut session, &outer, ComponentKind::HorizontalStack);
    let grandchild = insert_child(&mut session, &inner, ComponentKind::Text);

    let before = session.document.project().clone();

    let dropped = session.handle_drop(
        DragPayload::Existing {
            component_id: outer,
        },
        DropTarget::Component {
            component_id: grandchild,
        },
    );

    assert!(!dropped);
    assert_eq!(session.document.project(), &before);
}

#[test]
fn test_stale_payload_is_ignored() {
    let (mut session, file_id) = session_with_screen();
    let text = insert_root(&mut session, &file_id, ComponentKind::Text);
    let target = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);

    // The component vanishes while the drag is in flight.
    assert!(session.commit(Mutation::RemoveComponent {
        component_id: text.clone(),
    }));

    let before = session.document.project().clone();
    let dropped = session.handle_drop(
        DragPayload::Existing { component_id: text },
        DropTarget::Component {
            component_id: target,
        },
    );

    assert!(!dropped);
    assert_eq!(session.document.project(), &before);
}

#[test]
fn test_drop_on_missing_target_is_ignored() {
    let (mut session, file_id) = session_with_screen();
    let text = insert_root(&mut session, &file_id, ComponentKind::Text);

    let before = session.document.project().clone();

    assert!(!session.handle_drop(
        DragPayload::Existing {
            component_id: text.clone(),
        },
        DropTarget::Component {
            component_id: "gone-5".to_string(),
        },
    ));
    assert!(!session.handle_drop(
        DragPayload::Existing { component_id: text },
        DropTarget::FileRoot {
            file_id: "gone-6".to_string(),
        },
    ));

    assert_eq!(session.document.project(), &before);
}

#[test]
fn test_repeated_drop_on_container_is_idempotent() {
    let (mut session, file_id) = session_with_screen();

    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);
    let dragged = insert_root(&mut session, &file_id, ComponentKind::Text);

    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged.clone(),
        },
        DropTarget::Component {
            component_id: stack_id.clone(),
        },
    ));
    let after_first = session.document.project().clone();

    // Dropping again onto the same container re-appends at the same spot.
    assert!(session.handle_drop(
        DragPayload::Existing {
            component_id: dragged,
        },
        DropTarget::Component {
            component_id: stack_id,
        },
    ));

    assert_eq!(session.document.project(), &after_first);
}

#[test]
fn test_payload_survives_the_wire() {
    let (mut session, file_id) = session_with_screen();
    let dragged = insert_root(&mut session, &file_id, ComponentKind::Button);
    let stack_id = insert_root(&mut session, &file_id, ComponentKind::VerticalStack);

    // Round-trip through the embedder's byte transfer.
    let bytes = DragPayload::Existing {
        component_id: dragged.clone(),
    }
    .encode()
    .unwrap();
    let payload = DragPayload::decode(&bytes).unwrap();

    assert!(session.handle_drop(
        payload,
        DropTarget::Component {
            component_id: stack_id.clone(),
        },
    ));
    assert_eq!(child_ids(&session, &stack_id), vec![dragged]);
}
