//! Schema-introspection source.
//!
//! The generator consumes a JSON introspection dump of the target REST API:
//! schema records, enum value sets, and endpoint records. This module owns
//! the record structs, the dump loader, and the read-only queries the
//! emitters use (`schemas()`, `enums()`, `endpoint_groups()`). Records are
//! immutable once loaded.

mod load;
mod types;

pub use load::{SchemaSource, Target};
pub use types::{EndpointRecord, FieldRecord, SchemaRecord};
