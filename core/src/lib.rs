pub mod config;
pub mod entity;
pub mod error;
pub mod node;
pub mod relationship;
pub mod value;

pub use entity::{Entity, GraphEntity, PropertySet, PropertySource};
pub use node::{Node, NodeBuilder};
pub use relationship::{Endpoints, Relationship, RelationshipBuilder};
pub use value::{PropertyMap, PropertyValue, ValueKind};

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Fails if a subscriber is already installed, so repeated calls are harmless.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}
