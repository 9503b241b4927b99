use crate::adapter::TypedAdapter;
use crate::error::HydrateError;
use crate::row::RawRow;
use crate::source::RowSource;
use graphmap_core::config::ClientConfig;
use graphmap_core::{Node, PropertyMap, PropertySet, Relationship};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Turns raw result rows into entities.
///
/// Mapping payloads always go through the hydration constructors. A typed
/// entity is only produced by first running the mapping through a
/// [`TypedAdapter`].
#[derive(Debug, Clone, Default)]
pub struct Hydrator {
    config: ClientConfig,
}

impl Hydrator {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn parse_row(&self, row: &Value) -> Result<RawRow, HydrateError> {
        RawRow::from_json(row, &self.config.rows)
    }

    pub fn relationship(&self, row: RawRow) -> Result<Relationship, HydrateError> {
        let rel_type = self.relationship_type(&row)?;
        let mut builder = Relationship::<PropertyMap>::builder()
            .id(row.id)
            .rel_type(rel_type)
            .mapping_properties(row.properties);
        if let Some(endpoints) = row.endpoints {
            builder = builder.endpoints(endpoints.start, endpoints.end);
        }
        Ok(builder.build()?)
    }

    /// Typed path via [`TypedAdapter`]. Row keys that `P` does not declare are
    /// dropped, so the result can differ from [`Hydrator::relationship`] on the
    /// same row. Put `#[serde(deny_unknown_fields)]` on `P` to reject such rows.
    pub fn relationship_as<P>(&self, row: RawRow) -> Result<Relationship<P>, HydrateError>
    where
        P: PropertySet + DeserializeOwned,
    {
        let rel_type = self.relationship_type(&row)?;
        let typed = TypedAdapter::<P>::new().adapt(row.id, &row.properties)?;
        let mut builder = Relationship::<P>::builder()
            .id(row.id)
            .rel_type(rel_type)
            .typed_properties(typed);
        if let Some(endpoints) = row.endpoints {
            builder = builder.endpoints(endpoints.start, endpoints.end);
        }
        Ok(builder.build()?)
    }

    pub fn node(&self, row: RawRow) -> Result<Node, HydrateError> {
        debug!(id = row.id, "hydrating node");
        Ok(Node::<PropertyMap>::builder()
            .id(row.id)
            .mapping_properties(row.properties)
            .build()?)
    }

    /// Typed path for nodes. Undeclared row keys are dropped, as in
    /// [`Hydrator::relationship_as`].
    pub fn node_as<P>(&self, row: RawRow) -> Result<Node<P>, HydrateError>
    where
        P: PropertySet + DeserializeOwned,
    {
        debug!(id = row.id, "hydrating typed node");
        let typed = TypedAdapter::<P>::new().adapt(row.id, &row.properties)?;
        Ok(Node::<P>::builder().id(row.id).typed_properties(typed).build()?)
    }

    pub fn relationship_from_json(&self, row: &Value) -> Result<Relationship, HydrateError> {
        self.relationship(self.parse_row(row)?)
    }

    pub fn node_from_json(&self, row: &Value) -> Result<Node, HydrateError> {
        self.node(self.parse_row(row)?)
    }

    /// Drains `source`, stopping at the first row that fails to hydrate.
    pub async fn hydrate_relationships<S>(
        &self,
        source: &mut S,
    ) -> Result<Vec<Relationship>, HydrateError>
    where
        S: RowSource + ?Sized,
    {
        let mut out = Vec::new();
        while let Some(row) = source.next_row().await? {
            out.push(self.relationship_from_json(&row)?);
        }
        debug!(count = out.len(), "hydrated relationships");
        Ok(out)
    }

    pub async fn hydrate_nodes<S>(&self, source: &mut S) -> Result<Vec<Node>, HydrateError>
    where
        S: RowSource + ?Sized,
    {
        let mut out = Vec::new();
        while let Some(row) = source.next_row().await? {
            out.push(self.node_from_json(&row)?);
        }
        debug!(count = out.len(), "hydrated nodes");
        Ok(out)
    }

    fn relationship_type(&self, row: &RawRow) -> Result<String, HydrateError> {
        let rel_type = row
            .rel_type
            .clone()
            .ok_or_else(|| HydrateError::MissingField {
                field: self.config.rows.type_field.clone(),
            })?;
        if rel_type.is_empty() && self.config.hydration.warn_on_empty_type {
            warn!(id = row.id, "relationship has an empty type label");
        }
        debug!(id = row.id, rel_type = %rel_type, "hydrating relationship");
        Ok(rel_type)
    }
}
