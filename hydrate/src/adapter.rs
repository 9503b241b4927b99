use crate::error::HydrateError;
use graphmap_core::PropertyMap;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Explicit conversion of a row mapping into an application property type.
///
/// The typed constructors never see mapping-shaped data except through this.
#[derive(Debug)]
pub struct TypedAdapter<P> {
    _target: PhantomData<fn() -> P>,
}

impl<P> Default for TypedAdapter<P> {
    fn default() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<P: DeserializeOwned> TypedAdapter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adapt(&self, id: i64, properties: &PropertyMap) -> Result<P, HydrateError> {
        let to_typed = |source: serde_json::Error| HydrateError::TypedAdapter {
            id,
            target: std::any::type_name::<P>(),
            source,
        };
        let value = serde_json::to_value(properties).map_err(to_typed)?;
        serde_json::from_value(value).map_err(to_typed)
    }
}
