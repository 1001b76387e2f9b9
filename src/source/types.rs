use serde::Deserialize;
use serde_json::Value;

/// A single field of a schema or an input parameter of an endpoint.
///
/// Fields are read once from the introspection dump and never mutated; the
/// same record is consulted independently by several emitters, so everything
/// derived from it (names, types, literals) must be a pure function of it.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldRecord {
    /// Wire name, snake_case (possibly with leading/trailing underscores)
    pub name: String,
    /// Raw type token, e.g. `int`, `string[]`, `Key<Frame>`, `Map<string,int>`
    #[serde(rename = "type")]
    pub type_token: String,
    /// Referenced schema or enum name for schema/enum-typed fields
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Help text rendered into Javadoc
    #[serde(default)]
    pub help: String,
    /// Declared on a superclass; documented but not re-declared
    #[serde(default)]
    pub is_inherited: bool,
    /// The field's type is itself a schema
    #[serde(default)]
    pub is_schema: bool,
    /// Default value as decoded from the dump; absent means null
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub required: bool,
    /// Bound from a `{placeholder}` in the owning endpoint's URL template.
    /// Derived at load time; a value in the dump is overwritten.
    #[serde(default)]
    pub is_path_param: bool,
}

impl FieldRecord {
    /// Schema name for type translation, empty when the field has none.
    pub fn schema_name_str(&self) -> &str {
        self.schema_name.as_deref().unwrap_or("")
    }
}

/// A described value-object type from the API's type system.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaRecord {
    pub name: String,
    pub superclass: String,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    /// Generic parameters on the emitted class, `(name, bound)` pairs
    #[serde(default)]
    pub generics: Option<Vec<(String, String)>>,
    /// Generic arguments applied to the superclass
    #[serde(default)]
    pub super_generics: Option<Vec<String>>,
}

/// A described HTTP operation.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointRecord {
    /// Stable API-level name, e.g. `train_gbm` or `parse`
    pub api_name: String,
    /// Owning proxy group, e.g. `ModelBuilders`, `Frames`, `Jobs`
    pub class_name: String,
    /// `GET` or `POST`
    pub http_method: String,
    /// Path template with `{var}` placeholders after normalization
    pub url_pattern: String,
    #[serde(default)]
    pub input_params: Vec<FieldRecord>,
    pub input_schema: String,
    pub output_schema: String,
    /// Server-side handler; `exec` means the api name doubles as the method
    pub handler_method: String,
    #[serde(default)]
    pub summary: String,
    /// Discriminator tag for model-builder endpoints
    #[serde(default)]
    pub algo: Option<String>,
}

impl EndpointRecord {
    /// Java method name on the proxy interface.
    pub fn method_name(&self) -> &str {
        if self.handler_method == "exec" {
            &self.api_name
        } else {
            &self.handler_method
        }
    }
}

/// Raw shape of the introspection dump file.
#[derive(Debug, Deserialize)]
pub(crate) struct Dump {
    #[serde(default)]
    pub schemas: Vec<SchemaRecord>,
    #[serde(default)]
    pub enums: std::collections::BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub endpoints: Vec<EndpointRecord>,
}
