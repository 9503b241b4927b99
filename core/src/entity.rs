use crate::error::EntityError;
use crate::value::{PropertyMap, PropertyValue};

/// Read access to a property container, typed or not.
///
/// Application property structs implement this so that typed and
/// hydrated entities answer lookups the same way.
pub trait PropertySet: std::fmt::Debug {
    /// `None` when the property is absent; `Some(PropertyValue::Null)` when present but null.
    fn property(&self, name: &str) -> Option<PropertyValue>;

    fn to_property_map(&self) -> PropertyMap;
}

impl PropertySet for PropertyMap {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.get(name).cloned()
    }

    fn to_property_map(&self) -> PropertyMap {
        self.clone()
    }
}

/// Where an entity's properties came from. Exactly one source per entity.
#[derive(Debug, Clone)]
pub enum PropertySource<P = PropertyMap> {
    /// Built by application code from its own property type.
    Typed(P),
    /// Reconstructed from a string-keyed mapping in a result row.
    Mapping(PropertyMap),
}

impl<P> PropertySource<P> {
    pub fn is_typed(&self) -> bool {
        matches!(self, PropertySource::Typed(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, PropertySource::Mapping(_))
    }
}

impl<P: PropertySet> PropertySource<P> {
    fn lookup(&self, name: &str) -> Option<PropertyValue> {
        match self {
            PropertySource::Typed(props) => props.property(name),
            PropertySource::Mapping(map) => map.get(name).cloned(),
        }
    }

    fn snapshot(&self) -> PropertyMap {
        match self {
            PropertySource::Typed(props) => props.to_property_map(),
            PropertySource::Mapping(map) => map.clone(),
        }
    }
}

/// Identity plus properties, shared by every entity kind.
#[derive(Debug, Clone)]
pub struct GraphEntity<P = PropertyMap> {
    id: i64,
    properties: PropertySource<P>,
}

impl<P: PropertySet> GraphEntity<P> {
    pub fn new(id: i64, properties: PropertySource<P>) -> Self {
        Self { id, properties }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn source(&self) -> &PropertySource<P> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.lookup(name)
    }

    pub fn contains_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn property_map(&self) -> PropertyMap {
        self.properties.snapshot()
    }

    /// The application property object, when built through the typed path.
    pub fn typed_properties(&self) -> Option<&P> {
        match &self.properties {
            PropertySource::Typed(props) => Some(props),
            PropertySource::Mapping(_) => None,
        }
    }
}

impl<P: PropertySet, Q: PropertySet> PartialEq<GraphEntity<Q>> for GraphEntity<P> {
    fn eq(&self, other: &GraphEntity<Q>) -> bool {
        self.id == other.id() && self.property_map() == other.property_map()
    }
}

/// Builder-side holder that accepts a single property source.
#[derive(Debug)]
pub(crate) struct PropertySlot<P> {
    source: Option<PropertySource<P>>,
    conflicting: bool,
}

impl<P> Default for PropertySlot<P> {
    fn default() -> Self {
        Self {
            source: None,
            conflicting: false,
        }
    }
}

impl<P> PropertySlot<P> {
    pub(crate) fn set(&mut self, source: PropertySource<P>) {
        if self.source.is_some() {
            self.conflicting = true;
        }
        self.source = Some(source);
    }

    pub(crate) fn take(self, kind: &'static str, id: i64) -> Result<PropertySource<P>, EntityError> {
        if self.conflicting {
            return Err(EntityError::ConflictingPropertySources { kind, id });
        }
        self.source
            .ok_or(EntityError::MissingProperties { kind, id })
    }
}

/// The read contract common to nodes and relationships.
pub trait Entity {
    type Properties: PropertySet;

    fn base(&self) -> &GraphEntity<Self::Properties>;

    fn id(&self) -> i64 {
        self.base().id()
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.base().property(name)
    }

    fn contains_property(&self, name: &str) -> bool {
        self.base().contains_property(name)
    }

    fn property_map(&self) -> PropertyMap {
        self.base().property_map()
    }
}
