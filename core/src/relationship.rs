use crate::entity::{Entity, GraphEntity, PropertySet, PropertySlot, PropertySource};
use crate::error::EntityError;
use crate::value::PropertyMap;
use serde::{Deserialize, Serialize};

/// Start and end node identifiers of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub start: i64,
    pub end: i64,
}

impl Endpoints {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// A typed edge. Identity, label and properties are fixed at construction.
///
/// The type label is stored verbatim; an empty label is accepted.
#[derive(Debug, Clone)]
pub struct Relationship<P = PropertyMap> {
    entity: GraphEntity<P>,
    rel_type: String,
    endpoints: Option<Endpoints>,
}

impl<P: PropertySet> Relationship<P> {
    pub fn new(id: i64, properties: PropertySource<P>, rel_type: impl Into<String>) -> Self {
        Self {
            entity: GraphEntity::new(id, properties),
            rel_type: rel_type.into(),
            endpoints: None,
        }
    }

    /// Direct path: application code holding its own property type.
    pub fn typed(id: i64, properties: P, rel_type: impl Into<String>) -> Self {
        Self::new(id, PropertySource::Typed(properties), rel_type)
    }

    pub fn builder() -> RelationshipBuilder<P> {
        RelationshipBuilder::default()
    }

    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    pub fn endpoints(&self) -> Option<Endpoints> {
        self.endpoints
    }

    pub fn typed_properties(&self) -> Option<&P> {
        self.entity.typed_properties()
    }
}

impl Relationship<PropertyMap> {
    /// Hydration path: a generic mapping taken from a result row.
    pub fn from_mapping(id: i64, properties: PropertyMap, rel_type: impl Into<String>) -> Self {
        Self::new(id, PropertySource::Mapping(properties), rel_type)
    }
}

impl<P: PropertySet> Entity for Relationship<P> {
    type Properties = P;

    fn base(&self) -> &GraphEntity<P> {
        &self.entity
    }
}

impl<P: PropertySet, Q: PropertySet> PartialEq<Relationship<Q>> for Relationship<P> {
    fn eq(&self, other: &Relationship<Q>) -> bool {
        self.rel_type == other.rel_type
            && self.endpoints == other.endpoints
            && self.entity == other.entity
    }
}

/// Collects relationship fields during hydration, then freezes them.
///
/// `rel_type` may be called more than once; the last label wins. Properties
/// must be supplied exactly once, from one source.
#[derive(Debug)]
pub struct RelationshipBuilder<P = PropertyMap> {
    id: Option<i64>,
    rel_type: Option<String>,
    endpoints: Option<Endpoints>,
    properties: PropertySlot<P>,
}

impl<P> Default for RelationshipBuilder<P> {
    fn default() -> Self {
        Self {
            id: None,
            rel_type: None,
            endpoints: None,
            properties: PropertySlot::default(),
        }
    }
}

impl<P: PropertySet> RelationshipBuilder<P> {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = Some(rel_type.into());
        self
    }

    pub fn endpoints(mut self, start: i64, end: i64) -> Self {
        self.endpoints = Some(Endpoints::new(start, end));
        self
    }

    pub fn typed_properties(mut self, properties: P) -> Self {
        self.properties.set(PropertySource::Typed(properties));
        self
    }

    pub fn mapping_properties(mut self, properties: PropertyMap) -> Self {
        self.properties.set(PropertySource::Mapping(properties));
        self
    }

    pub fn build(self) -> Result<Relationship<P>, EntityError> {
        let id = self.id.ok_or(EntityError::MissingId {
            kind: "relationship",
        })?;
        let properties = self.properties.take("relationship", id)?;
        let rel_type = self.rel_type.ok_or(EntityError::MissingType { id })?;

        Ok(Relationship {
            entity: GraphEntity::new(id, properties),
            rel_type,
            endpoints: self.endpoints,
        })
    }
}
