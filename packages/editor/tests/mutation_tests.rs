//! Mutation scenarios driven through the store

use blockdoc_editor::{DocumentStore, ElementKind, Mutation};

fn seeded_store(kinds: &[ElementKind]) -> (DocumentStore, Vec<String>) {
    let mut store = DocumentStore::new("test-doc");
    let ids = kinds.iter().map(|kind| store.add(*kind)).collect();
    (store, ids)
}

#[test]
fn test_removal_renumbers_groups() {
    let (mut store, ids) = seeded_store(&[
        ElementKind::Paragraph,
        ElementKind::OrderedList,
        ElementKind::UnorderedList,
    ]);
    let [a, b, c] = [&ids[0], &ids[1], &ids[2]];

    store.remove(b);

    let remaining: Vec<&str> = store.elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(remaining, vec![a.as_str(), c.as_str()]);

    // Group numbers follow the new positions, not the original ones
    let schema = store.schema();
    assert_eq!(schema.children.len(), 2);
    assert_eq!(schema.children[0].attribute.name, "data-related-id");
    assert_eq!(schema.children[0].attribute.value, "group1");
    assert_eq!(schema.children[1].attribute.name, "id");
    assert_eq!(schema.children[1].attribute.value, "group2");
    assert_eq!(schema.children[1].tag, "ul");
}

#[test]
fn test_reorder_swaps_first_attribute_variant() {
    let (mut store, _) = seeded_store(&[ElementKind::Paragraph, ElementKind::OrderedList]);

    store.reorder(0, Some(1));

    let schema = store.schema();
    assert_eq!(schema.children[0].tag, "ol");
    assert_eq!(schema.children[0].attribute.name, "data-related-id");
    assert_eq!(schema.children[1].tag, "p");
    assert_eq!(schema.children[1].attribute.name, "id");
}

#[test]
fn test_reorder_there_and_back_is_identity() {
    let (mut store, _) = seeded_store(&[
        ElementKind::Paragraph,
        ElementKind::OrderedList,
        ElementKind::UnorderedList,
    ]);
    let before = store.elements().to_vec();
    let version = store.version();

    store.reorder(2, Some(0));
    store.reorder(0, Some(2));

    assert_eq!(store.elements(), &before[..]);
    assert_eq!(store.version(), version + 2);
}

#[test]
fn test_cancelled_drag_changes_nothing() {
    let (mut store, _) = seeded_store(&[ElementKind::Paragraph, ElementKind::OrderedList]);
    let before = store.elements().to_vec();
    let version = store.version();

    store.reorder(1, None);

    assert_eq!(store.elements(), &before[..]);
    assert_eq!(store.version(), version);
}

#[test]
fn test_mutations_replayed_on_raw_sequences_match_store() {
    // The store is a thin commit loop over the pure mutation application
    let (mut store, ids) = seeded_store(&[ElementKind::Paragraph, ElementKind::OrderedList]);

    let mut replayed = store.elements().to_vec();
    let mutation = Mutation::UpdateContent {
        element_id: ids[0].clone(),
        content: "replay".to_string(),
    };

    replayed = mutation.apply(&replayed);
    store.apply(mutation);

    assert_eq!(store.elements(), &replayed[..]);
}
