pub mod adapter;
pub mod error;
pub mod hydrator;
pub mod row;
pub mod source;

pub use adapter::TypedAdapter;
pub use error::HydrateError;
pub use hydrator::Hydrator;
pub use row::RawRow;
pub use source::{ChannelRowSource, RowSource, SourceError, VecRowSource};
