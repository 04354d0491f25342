use crate::{AttachedWidgetRegistry, ElementId};

#[test]
fn element_id() {
    let id = ElementId::from("contest-calendar");
    assert_eq!(id.as_str(), "contest-calendar");
    assert_eq!(id.to_string(), "#contest-calendar");
    assert_eq!(id, ElementId::from("contest-calendar".to_string()));
}

#[test]
fn attach_and_detach() {
    let mut registry = AttachedWidgetRegistry::new();
    assert!(registry.is_empty());

    assert_eq!(registry.attach("calendar", "first"), None);
    assert_eq!(registry.attach("popup", "second"), None);
    assert!(registry.contains("calendar"));
    assert_eq!(registry.len(), 2);

    assert_eq!(registry.attach("calendar", "third"), Some("first"));
    assert_eq!(registry.len(), 2);

    *registry.get_mut("popup").unwrap() = "fourth";
    assert_eq!(registry.detach("popup"), Some("fourth"));
    assert_eq!(registry.detach("popup"), None);
    assert!(!registry.contains("popup"));
}

#[test]
fn detach_all() {
    let mut registry = AttachedWidgetRegistry::new();
    registry.attach("c", 3);
    registry.attach("a", 1);
    registry.attach("b", 2);

    let detached: Vec<_> = registry
        .detach_all()
        .into_iter()
        .map(|(id, widget)| (id.as_str().to_string(), widget))
        .collect();

    assert_eq!(
        detached,
        [("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)],
    );

    assert!(registry.is_empty());
    assert!(registry.detach_all().is_empty());
}
