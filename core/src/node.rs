use crate::entity::{Entity, GraphEntity, PropertySet, PropertySlot, PropertySource};
use crate::error::EntityError;
use crate::value::PropertyMap;

#[derive(Debug, Clone)]
pub struct Node<P = PropertyMap> {
    entity: GraphEntity<P>,
}

impl<P: PropertySet> Node<P> {
    pub fn new(id: i64, properties: PropertySource<P>) -> Self {
        Self {
            entity: GraphEntity::new(id, properties),
        }
    }

    pub fn typed(id: i64, properties: P) -> Self {
        Self::new(id, PropertySource::Typed(properties))
    }

    pub fn builder() -> NodeBuilder<P> {
        NodeBuilder::default()
    }

    pub fn typed_properties(&self) -> Option<&P> {
        self.entity.typed_properties()
    }
}

impl Node<PropertyMap> {
    pub fn from_mapping(id: i64, properties: PropertyMap) -> Self {
        Self::new(id, PropertySource::Mapping(properties))
    }
}

impl<P: PropertySet> Entity for Node<P> {
    type Properties = P;

    fn base(&self) -> &GraphEntity<P> {
        &self.entity
    }
}

impl<P: PropertySet, Q: PropertySet> PartialEq<Node<Q>> for Node<P> {
    fn eq(&self, other: &Node<Q>) -> bool {
        self.entity == other.entity
    }
}

#[derive(Debug)]
pub struct NodeBuilder<P = PropertyMap> {
    id: Option<i64>,
    properties: PropertySlot<P>,
}

impl<P> Default for NodeBuilder<P> {
    fn default() -> Self {
        Self {
            id: None,
            properties: PropertySlot::default(),
        }
    }
}

impl<P: PropertySet> NodeBuilder<P> {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
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

    pub fn build(self) -> Result<Node<P>, EntityError> {
        let id = self.id.ok_or(EntityError::MissingId { kind: "node" })?;
        let properties = self.properties.take("node", id)?;
        Ok(Node {
            entity: GraphEntity::new(id, properties),
        })
    }
}
