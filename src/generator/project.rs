use std::fs;
use std::path::{Path, PathBuf};

use super::enums::generate_enum;
use super::facade::generate_facade;
use super::proxy::generate_proxy;
use super::schema::generate_schema;
use super::types::TypeTranslator;
use crate::source::SchemaSource;
use anyhow::Context;

/// A per-record generation failure.
///
/// One bad schema entry must not block generation of the rest of the client
/// library; the driver collects these and reports them together at the end
/// of the run, with enough context to locate the schema defect.
#[derive(Debug)]
pub struct GenFailure {
    /// Name of the record that failed (schema, enum, group or endpoint)
    pub record: String,
    pub error: anyhow::Error,
}

impl GenFailure {
    pub fn new(record: impl Into<String>, error: anyhow::Error) -> Self {
        GenFailure {
            record: record.into(),
            error,
        }
    }
}

impl std::fmt::Display for GenFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.record, self.error)
    }
}

/// Options for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root Java package for the emitted library
    pub package: String,
    /// Name of the emitted facade class
    pub facade_class: String,
    /// Overwrite existing files
    pub force: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            package: "water.bindings".to_string(),
            facade_class: "H2oApi".to_string(),
            force: false,
        }
    }
}

/// Outcome of a generator run.
#[derive(Debug, Default)]
pub struct GenReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<GenFailure>,
}

impl GenReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn translator_for(source: &SchemaSource) -> TypeTranslator {
    match source.target().language {
        "Java" => TypeTranslator::java(),
        _ => TypeTranslator::new(),
    }
}

fn package_dir(out_dir: &Path, package: &str) -> PathBuf {
    let mut dir = out_dir.to_path_buf();
    for part in package.split('.') {
        dir = dir.join(part);
    }
    dir
}

/// Generate the full binding library from one introspection source.
///
/// Emits one file per schema record, one per enum, one proxy interface per
/// endpoint group, and the facade, under a package-shaped directory layout.
/// Record emission order does not affect any single file's content; each
/// record depends only on its own data and the pure translators.
pub fn generate_bindings(
    source: &SchemaSource,
    out_dir: &Path,
    opts: &GenerateOptions,
) -> anyhow::Result<GenReport> {
    let translator = translator_for(source);
    let ext = source.target().extension;
    let pojos_package = format!("{}.pojos", opts.package);
    let proxy_package = format!("{}.proxies.retrofit", opts.package);

    let base_dir = package_dir(out_dir, &opts.package);
    let pojos_dir = base_dir.join("pojos");
    let proxy_dir = base_dir.join("proxies").join("retrofit");
    fs::create_dir_all(&pojos_dir)?;
    fs::create_dir_all(&proxy_dir)?;

    let mut report = GenReport::default();

    for schema in source.schemas() {
        match generate_schema(schema, &translator, &pojos_package) {
            Ok(content) => {
                let path = pojos_dir.join(format!("{}.{ext}", schema.name));
                if write_generated(&path, &content, opts.force)? {
                    println!("✅ Generated schema: {path:?}");
                    report.written.push(path);
                }
            }
            Err(error) => report.failures.push(GenFailure::new(&schema.name, error)),
        }
    }

    for (name, values) in source.enums() {
        match generate_enum(name, values, &pojos_package) {
            Ok(content) => {
                let path = pojos_dir.join(format!("{name}.{ext}"));
                if write_generated(&path, &content, opts.force)? {
                    println!("✅ Generated enum: {path:?}");
                    report.written.push(path);
                }
            }
            Err(error) => report.failures.push(GenFailure::new(name, error)),
        }
    }

    for (group, endpoints) in source.endpoint_groups() {
        match generate_proxy(
            &group,
            &endpoints,
            &translator,
            &proxy_package,
            &pojos_package,
        ) {
            Ok(content) => {
                let path = proxy_dir.join(format!("{group}.{ext}"));
                if write_generated(&path, &content, opts.force)? {
                    println!("✅ Generated proxy: {path:?}");
                    report.written.push(path);
                }
            }
            Err(error) => report.failures.push(GenFailure::new(&group, error)),
        }
    }

    let facade = generate_facade(
        source.endpoints(),
        &translator,
        &opts.package,
        &opts.facade_class,
        &mut report.failures,
    )?;
    let facade_path = base_dir.join(format!("{}.{ext}", opts.facade_class));
    if write_generated(&facade_path, &facade, opts.force)? {
        println!("✅ Generated facade: {facade_path:?}");
        report.written.push(facade_path);
    }

    translator.flush_log();
    Ok(report)
}

/// Validate a source without writing anything.
///
/// Runs every emitter in memory and returns the per-record failures it
/// would produce, so a bad dump can be caught before generation.
pub fn check_source(
    source: &SchemaSource,
    opts: &GenerateOptions,
) -> anyhow::Result<Vec<GenFailure>> {
    let translator = translator_for(source);
    let pojos_package = format!("{}.pojos", opts.package);
    let proxy_package = format!("{}.proxies.retrofit", opts.package);

    let mut failures = Vec::new();
    for schema in source.schemas() {
        if let Err(error) = generate_schema(schema, &translator, &pojos_package) {
            failures.push(GenFailure::new(&schema.name, error));
        }
    }
    for (name, values) in source.enums() {
        if let Err(error) = generate_enum(name, values, &pojos_package) {
            failures.push(GenFailure::new(name, error));
        }
    }
    for (group, endpoints) in source.endpoint_groups() {
        if let Err(error) = generate_proxy(
            &group,
            &endpoints,
            &translator,
            &proxy_package,
            &pojos_package,
        ) {
            failures.push(GenFailure::new(&group, error));
        }
    }
    let _ = generate_facade(
        source.endpoints(),
        &translator,
        &opts.package,
        &opts.facade_class,
        &mut failures,
    )?;
    Ok(failures)
}

fn write_generated(path: &Path, content: &str, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing file: {path:?}");
        return Ok(false);
    }
    fs::write(path, content).with_context(|| format!("failed to write {path:?}"))?;
    Ok(true)
}
