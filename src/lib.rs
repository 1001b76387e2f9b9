//! # restbind
//!
//! **restbind** is an offline binding compiler: it reads a machine-readable
//! introspection dump of a REST API — data schemas, enumerations, and
//! endpoints — and emits a statically typed Java client library: value
//! objects (POJOs), enum types, Retrofit proxy interfaces, and a facade
//! class that wires HTTP calls, polymorphic Gson decoding, and
//! long-running-job polling.
//!
//! ## Overview
//!
//! The generator is single-threaded, synchronous, and side-effect-free
//! except for writing text: each record's emission depends only on its own
//! data and two pure leaf translators (type tokens and identifier names),
//! so records can be processed in any order. Per-record failures are
//! aggregated and reported at the end of a run instead of aborting it.
//!
//! ## Architecture
//!
//! - **[`source`]** — the schema-introspection collaborator: record structs
//!   and the read-only queries (`schemas()`, `enums()`, `endpoint_groups()`)
//! - **[`generator`]** — translation and synthesis: type/name translation,
//!   default-value literal synthesis, schema/enum/proxy/facade emission,
//!   and the driver
//! - **[`cli`]** — `restbind-gen` command line (`generate`, `check`)
//!
//! ## Usage
//!
//! ```bash
//! restbind-gen generate --source introspection.json --output build
//! ```
//!
//! ### Programmatic usage
//!
//! ```rust,ignore
//! use restbind::generator::{generate_bindings, GenerateOptions};
//! use restbind::source::{SchemaSource, Target};
//!
//! let source = SchemaSource::load("introspection.json".as_ref(), Target::java())?;
//! let report = generate_bindings(&source, "build".as_ref(), &GenerateOptions::default())?;
//! for failure in &report.failures {
//!     eprintln!("{failure}");
//! }
//! ```
//!
//! The emitted client performs HTTP calls against a configurable base URL
//! (default `http://localhost:54321/`) with a configurable timeout
//! (default 60 s); the generator itself never touches the network.

pub mod cli;
pub mod generator;
pub mod source;

pub use generator::{generate_bindings, GenFailure, GenReport, GenerateOptions};
pub use source::{EndpointRecord, FieldRecord, SchemaRecord, SchemaSource, Target};
