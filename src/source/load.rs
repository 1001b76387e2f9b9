use super::types::{Dump, EndpointRecord, SchemaRecord};
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Target language binding for a generator run.
///
/// Bound once before any query is issued; file extensions and the type
/// translator's override table both key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub language: &'static str,
    pub extension: &'static str,
}

impl Target {
    pub fn java() -> Self {
        Target {
            language: "Java",
            extension: "java",
        }
    }
}

/// Server-style path variables like `(?<frameid>.*)`; rewritten to `{frameid}`.
static PATH_VAR: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\(\?<(\w+)>[^)]*\)").unwrap()
});

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\{(\w+)\}").unwrap()
});

/// The schema-introspection source: read-only record queries over one dump.
#[derive(Debug)]
pub struct SchemaSource {
    target: Target,
    schemas: Vec<SchemaRecord>,
    enums: BTreeMap<String, Vec<String>>,
    endpoints: Vec<EndpointRecord>,
}

impl SchemaSource {
    /// Load an introspection dump and bind it to a target language.
    ///
    /// Normalizes endpoint URL templates and derives `is_path_param` for
    /// every input parameter from the template's placeholders.
    pub fn load(path: &Path, target: Target) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read introspection dump {path:?}"))?;
        let mut dump: Dump = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse introspection dump {path:?}"))?;

        for endpoint in &mut dump.endpoints {
            endpoint.url_pattern = PATH_VAR
                .replace_all(&endpoint.url_pattern, "{$1}")
                .into_owned();
            let placeholders: Vec<String> = PLACEHOLDER
                .captures_iter(&endpoint.url_pattern)
                .map(|c| c[1].to_string())
                .collect();
            for param in &mut endpoint.input_params {
                param.is_path_param = placeholders.iter().any(|p| p == &param.name);
            }
        }

        Ok(SchemaSource {
            target,
            schemas: dump.schemas,
            enums: dump.enums,
            endpoints: dump.endpoints,
        })
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// All schema records, in dump order.
    pub fn schemas(&self) -> &[SchemaRecord] {
        &self.schemas
    }

    /// Enum name → value set.
    pub fn enums(&self) -> &BTreeMap<String, Vec<String>> {
        &self.enums
    }

    /// All endpoint records, in dump order.
    pub fn endpoints(&self) -> &[EndpointRecord] {
        &self.endpoints
    }

    /// Endpoints grouped by owning proxy class, group order deterministic.
    pub fn endpoint_groups(&self) -> BTreeMap<String, Vec<&EndpointRecord>> {
        let mut groups: BTreeMap<String, Vec<&EndpointRecord>> = BTreeMap::new();
        for endpoint in &self.endpoints {
            groups
                .entry(endpoint.class_name.clone())
                .or_default()
                .push(endpoint);
        }
        groups
    }
}
