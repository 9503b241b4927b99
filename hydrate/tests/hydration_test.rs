use graphmap_core::config::{ClientConfig, HydrationConfig, RowConfig};
use graphmap_core::error::{CodedError, ErrorCode};
use graphmap_core::{Endpoints, Entity, PropertyMap, PropertySet, PropertyValue, Relationship};
use hydrate::{HydrateError, Hydrator};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct FriendsWith {
    since: i64,
}

impl PropertySet for FriendsWith {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "since" => Some(PropertyValue::Integer(self.since)),
            _ => None,
        }
    }

    fn to_property_map(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("since".to_string(), PropertyValue::Integer(self.since));
        map
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Person {
    name: String,
}

impl PropertySet for Person {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "name" => Some(PropertyValue::from(self.name.as_str())),
            _ => None,
        }
    }

    fn to_property_map(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("name".to_string(), PropertyValue::from(self.name.as_str()));
        map
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct StrictPerson {
    name: String,
}

impl PropertySet for StrictPerson {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "name" => Some(PropertyValue::from(self.name.as_str())),
            _ => None,
        }
    }

    fn to_property_map(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("name".to_string(), PropertyValue::from(self.name.as_str()));
        map
    }
}

fn friends_row() -> serde_json::Value {
    json!({ "id": 42, "type": "FRIENDS_WITH", "properties": { "since": 2019 } })
}

#[test]
fn test_hydration_path_scenario() {
    let hydrator = Hydrator::default();
    let rel = hydrator.relationship_from_json(&friends_row()).unwrap();

    assert_eq!(rel.id(), 42);
    assert_eq!(rel.rel_type(), "FRIENDS_WITH");
    assert_eq!(rel.property("since"), Some(PropertyValue::Integer(2019)));
    assert_eq!(rel.property("strength"), None);
    assert!(rel.typed_properties().is_none());
}

#[test]
fn test_direct_path_matches_hydrated_row() {
    let hydrator = Hydrator::default();
    let hydrated = hydrator.relationship_from_json(&friends_row()).unwrap();
    let direct = Relationship::typed(42, FriendsWith { since: 2019 }, "FRIENDS_WITH");

    assert_eq!(direct.id(), hydrated.id());
    assert_eq!(direct.rel_type(), hydrated.rel_type());
    assert_eq!(direct.property("since"), hydrated.property("since"));
    assert_eq!(direct.property("strength"), hydrated.property("strength"));
    assert_eq!(direct.property_map(), hydrated.property_map());
    assert!(direct == hydrated);
}

#[test]
fn test_typed_row_goes_through_adapter() {
    let hydrator = Hydrator::default();
    let row = hydrator.parse_row(&friends_row()).unwrap();
    let rel = hydrator.relationship_as::<FriendsWith>(row).unwrap();

    assert_eq!(rel.typed_properties(), Some(&FriendsWith { since: 2019 }));
    assert_eq!(rel.property("since"), Some(PropertyValue::Integer(2019)));
    assert_eq!(rel.property("strength"), None);
}

#[test]
fn test_typed_row_with_wrong_shape_is_rejected() {
    let hydrator = Hydrator::default();
    let row = hydrator
        .parse_row(&json!({ "id": 5, "type": "FRIENDS_WITH", "properties": { "since": "long ago" } }))
        .unwrap();

    let err = hydrator.relationship_as::<FriendsWith>(row).unwrap_err();
    assert!(matches!(err, HydrateError::TypedAdapter { id: 5, .. }));
    assert_eq!(err.error_code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_null_property_is_present() {
    let hydrator = Hydrator::default();
    let rel = hydrator
        .relationship_from_json(&json!({
            "id": 1,
            "type": "KNOWS",
            "properties": { "until": null }
        }))
        .unwrap();

    assert_eq!(rel.property("until"), Some(PropertyValue::Null));
    assert!(rel.contains_property("until"));
    assert!(!rel.contains_property("since"));
}

#[test]
fn test_endpoints_are_carried_over() {
    let hydrator = Hydrator::default();
    let rel = hydrator
        .relationship_from_json(&json!({ "id": 3, "type": "KNOWS", "start": 10, "end": 11 }))
        .unwrap();

    assert_eq!(rel.endpoints(), Some(Endpoints::new(10, 11)));
    assert!(rel.property_map().is_empty());
}

#[test]
fn test_empty_type_label_is_accepted() {
    let _ = graphmap_core::init_tracing("debug");
    let quiet = Hydrator::new(ClientConfig {
        rows: RowConfig::default(),
        hydration: HydrationConfig {
            warn_on_empty_type: false,
        },
    });
    let rel = quiet
        .relationship_from_json(&json!({ "id": 8, "type": "", "properties": {} }))
        .unwrap();
    assert_eq!(rel.rel_type(), "");

    let rel = Hydrator::default()
        .relationship_from_json(&json!({ "id": 8, "type": "" }))
        .unwrap();
    assert_eq!(rel.rel_type(), "");
}

#[test]
fn test_missing_type_label_is_rejected() {
    let err = Hydrator::default()
        .relationship_from_json(&json!({ "id": 8, "properties": {} }))
        .unwrap_err();

    match &err {
        HydrateError::MissingField { field } => assert_eq!(field, "type"),
        other => panic!("expected missing type field, got {:?}", other),
    }
    assert_eq!(err.error_code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_node_rows_ignore_type_label() {
    let hydrator = Hydrator::default();
    let node = hydrator
        .node_from_json(&json!({ "id": 100, "properties": { "name": "Ada", "age": 36 } }))
        .unwrap();

    assert_eq!(node.id(), 100);
    assert_eq!(node.property("name"), Some(PropertyValue::from("Ada")));
    assert_eq!(node.property("age"), Some(PropertyValue::Integer(36)));
    assert_eq!(node.property("email"), None);
}

#[test]
fn test_custom_field_names() {
    let hydrator = Hydrator::new(ClientConfig {
        rows: RowConfig {
            id_field: "identity".to_string(),
            type_field: "label".to_string(),
            properties_field: "props".to_string(),
            ..RowConfig::default()
        },
        hydration: HydrationConfig::default(),
    });

    let rel = hydrator
        .relationship_from_json(&json!({ "identity": 42, "label": "FRIENDS_WITH", "props": { "since": 2019 } }))
        .unwrap();
    assert_eq!(rel.id(), 42);
    assert_eq!(rel.rel_type(), "FRIENDS_WITH");
}

#[test]
fn test_typed_node_goes_through_adapter() {
    let hydrator = Hydrator::default();
    let row = hydrator
        .parse_row(&json!({ "id": 1, "properties": { "name": "Ada" } }))
        .unwrap();
    let node = hydrator.node_as::<Person>(row).unwrap();

    assert_eq!(node.id(), 1);
    assert_eq!(
        node.typed_properties(),
        Some(&Person {
            name: "Ada".to_string()
        })
    );
    assert_eq!(node.property("name"), Some(PropertyValue::from("Ada")));
    assert_eq!(node.property("email"), None);
}

#[test]
fn test_typed_node_with_wrong_shape_is_rejected() {
    let hydrator = Hydrator::default();
    let row = hydrator
        .parse_row(&json!({ "id": 2, "properties": { "name": 36 } }))
        .unwrap();

    let err = hydrator.node_as::<Person>(row).unwrap_err();
    assert!(matches!(err, HydrateError::TypedAdapter { id: 2, .. }));
    assert_eq!(err.error_code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_typed_node_drops_undeclared_keys() {
    let hydrator = Hydrator::default();
    let row_json = json!({ "id": 1, "properties": { "name": "Ada", "age": 36 } });

    let typed = hydrator
        .node_as::<Person>(hydrator.parse_row(&row_json).unwrap())
        .unwrap();
    let mapped = hydrator.node_from_json(&row_json).unwrap();

    assert_eq!(typed.property("age"), None);
    assert_eq!(mapped.property("age"), Some(PropertyValue::Integer(36)));
    assert!(typed != mapped);

    let err = hydrator
        .node_as::<StrictPerson>(hydrator.parse_row(&row_json).unwrap())
        .unwrap_err();
    assert!(matches!(err, HydrateError::TypedAdapter { id: 1, .. }));
}
