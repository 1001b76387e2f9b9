//! # Generator Module
//!
//! Translation and synthesis logic for the binding compiler: everything
//! between the introspection records and the emitted Java text.
//!
//! ## Architecture
//!
//! ```text
//! Introspection Dump → SchemaSource → Emitters → Askama Rendering → Java Files
//! ```
//!
//! The emitters are pure with respect to their record: each schema, enum,
//! proxy group, and facade depends only on its own data plus the two leaf
//! translators, so the driver may process records in any order without
//! changing output.
//!
//! - [`types`] — type-token → Java type translation (per-target table)
//! - [`naming`] — snake_case → camelCase identifier translation
//! - [`value`] — default-value literal synthesis
//! - [`schema`] — value-object (POJO) emission
//! - [`enums`] — enum emission with reserved-word handling
//! - [`proxy`] — Retrofit interface emission with overload derivation
//! - [`facade`] — client entry point: call wrappers, job polling, and the
//!   discriminator-keyed polymorphic decoder tables
//! - [`project`] — driver: enumerates records, writes files, aggregates
//!   per-record failures
//!
//! Per-record failures (unresolvable type token, broken discriminator
//! naming contract, too many required fields) never abort the run; the
//! driver reports them together at the end.

mod enums;
mod facade;
mod naming;
mod project;
mod proxy;
mod schema;
mod types;
mod value;
mod wrap;


pub use enums::generate_enum;
pub use facade::{generate_facade, DEFAULT_URL};
pub use naming::translate_name;
pub use project::{
    check_source, generate_bindings, GenFailure, GenReport, GenerateOptions,
};
pub use proxy::generate_proxy;
pub use schema::generate_schema;
pub use types::TypeTranslator;
pub use value::java_value;
