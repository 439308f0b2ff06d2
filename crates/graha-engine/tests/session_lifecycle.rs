//! Registry and session lifecycle: singletons, caching, determinism, errors.

use std::rc::Rc;

use graha_core::enums::{Character, Dignity};
use graha_core::{House, ObjectKey, PositionSnapshot};
use graha_engine::rules::character;
use graha_engine::{DescriptorCatalog, EngineError, ResolutionSession, ResolvedAttributes};
use pretty_assertions::assert_eq;

fn sample_snapshot() -> PositionSnapshot {
    serde_json::from_str(
        r#"{
            "Sy": { "house": 1, "degree": 10.0 },
            "Ch": { "house": 4, "degree": 18.0 },
            "Ma": { "house": 10, "degree": 28.0 },
            "Bu": { "house": 1, "degree": 25.5 },
            "Gu": { "house": 9, "degree": 3.0 },
            "Sk": { "house": 12, "degree": 27.0 },
            "Sa": { "house": 1, "degree": 14.0 },
            "Ra": { "house": 3, "degree": 7.0 },
            "Ke": { "house": 9, "degree": 7.0 }
        }"#,
    )
    .expect("sample snapshot parses")
}

#[test]
fn same_key_returns_same_instance_within_session() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let session = ResolutionSession::new(&snapshot, &catalog);

    let first = session.object(ObjectKey::Bu).unwrap();
    let second = session.registry().get(ObjectKey::Bu).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn sessions_never_share_instances() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let one = ResolutionSession::new(&snapshot, &catalog);
    let two = ResolutionSession::new(&snapshot, &catalog);

    let a = one.object(ObjectKey::Bu).unwrap();
    let b = two.object(ObjectKey::Bu).unwrap();
    assert!(!Rc::ptr_eq(&a, &b));

    a.resolve(&one).unwrap();
    assert!(a.is_resolved());
    assert!(!b.is_resolved());
}

#[test]
fn recursive_lookups_register_peers_once() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let session = ResolutionSession::new(&snapshot, &catalog);

    // Budha shares Aries with Surya and Shani.
    session.resolve(ObjectKey::Bu).unwrap();
    assert_eq!(session.registry().len(), 3);
    assert!(session.registry().contains(ObjectKey::Sy));
    assert!(session.registry().contains(ObjectKey::Sa));
    assert!(session.object(ObjectKey::Sa).unwrap().is_resolved());
}

#[test]
fn resolution_is_deterministic_across_sessions() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();

    let runs: Vec<_> = (0..3)
        .map(|_| {
            ResolutionSession::new(&snapshot, &catalog)
                .resolve_all()
                .unwrap()
        })
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn resolve_all_covers_every_placed_key() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let resolved = ResolutionSession::new(&snapshot, &catalog)
        .resolve_all()
        .unwrap();

    assert_eq!(resolved.len(), 9);
    assert_eq!(
        resolved[&ObjectKey::Bu],
        ResolvedAttributes {
            key: ObjectKey::Bu,
            character: Character::Malefic,
            dignity: Dignity::Neutral,
        }
    );
    // Moon 98 degrees ahead of the Sun, in its own sign.
    assert_eq!(resolved[&ObjectKey::Ch].character, Character::Benign);
    assert_eq!(resolved[&ObjectKey::Ch].dignity, Dignity::OwnSign);
    assert_eq!(resolved[&ObjectKey::Sy].dignity, Dignity::Exalted);
    assert_eq!(resolved[&ObjectKey::Ma].dignity, Dignity::Exalted);
    assert_eq!(resolved[&ObjectKey::Sa].dignity, Dignity::Debilitated);
    assert_eq!(resolved[&ObjectKey::Sk].dignity, Dignity::Exalted);
}

#[test]
fn resolved_attributes_serialize_for_renderers() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let attributes = ResolutionSession::new(&snapshot, &catalog)
        .resolve(ObjectKey::Gu)
        .unwrap();

    let json = serde_json::to_value(attributes).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "key": "Gu", "character": "benign", "dignity": "mooltrikona" })
    );
}

#[test]
fn unknown_key_lookup_fails() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin().without(ObjectKey::Sa);
    let session = ResolutionSession::new(&snapshot, &catalog);

    assert_eq!(
        session.object(ObjectKey::Sa).unwrap_err(),
        EngineError::UnknownObjectKey(ObjectKey::Sa)
    );
    // Budha's peer Shani cannot be looked up either.
    assert_eq!(
        session.resolve(ObjectKey::Bu),
        Err(EngineError::UnknownObjectKey(ObjectKey::Sa))
    );
    assert!(session.resolution_path().is_empty());
}

#[test]
fn unparseable_key_is_unknown() {
    let err: EngineError = "Pl"
        .parse::<ObjectKey>()
        .map_err(EngineError::from)
        .unwrap_err();
    assert_eq!(err.to_string(), "core error: Unknown object key: Pl");
}

#[test]
fn missing_position_fails_without_partial_result() {
    let snapshot = PositionSnapshot::new()
        .with(ObjectKey::Bu, 4, 1.0)
        .and_then(|s| s.with(ObjectKey::Ch, 4, 2.0))
        .unwrap();
    let catalog = DescriptorCatalog::builtin().with_rule(ObjectKey::Ch, character::paksha);
    let session = ResolutionSession::new(&snapshot, &catalog);

    // The Moon's phase rule needs the Sun, which is not placed.
    assert_eq!(
        session.resolve(ObjectKey::Bu),
        Err(EngineError::MissingPosition(ObjectKey::Sy))
    );
    assert!(!session.object(ObjectKey::Bu).unwrap().is_resolved());
    assert!(!session.object(ObjectKey::Ch).unwrap().is_resolved());
    assert!(session.resolution_path().is_empty());

    assert_eq!(
        session.resolve(ObjectKey::Ke),
        Err(EngineError::MissingPosition(ObjectKey::Ke))
    );
}

#[test]
fn aspect_lookup_reads_static_tables() {
    let snapshot = sample_snapshot();
    let catalog = DescriptorCatalog::builtin();
    let session = ResolutionSession::new(&snapshot, &catalog);

    // Guru in Sagittarius aspects Aries (its 5th) fully.
    let guru = session.object(ObjectKey::Gu).unwrap();
    let aries = House::new(1).unwrap();
    assert!((guru.aspect_on(&session, aries).unwrap() - 1.0).abs() < f64::EPSILON);
    assert!((guru.aspect_to(&session, ObjectKey::Sa).unwrap() - 1.0).abs() < f64::EPSILON);
    // Aspect lookups never resolve anything.
    assert!(!guru.is_resolved());
}
