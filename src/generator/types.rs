use anyhow::{anyhow, bail};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// Maps schema type tokens to target-language type names.
///
/// The base table covers the fixed set of token shapes the introspection
/// source can produce. A target language customizes the table entries
/// (Java renames `string` to `String`) without touching the traversal
/// algorithm, which is the extension point for additional targets.
///
/// Every translation is recorded in a write-only log that the driver
/// flushes at the end of a run for diagnostics.
#[derive(Debug)]
pub struct TypeTranslator {
    types: HashMap<&'static str, &'static str>,
    log: RefCell<BTreeMap<String, String>>,
}

impl TypeTranslator {
    /// Base table shared by all targets.
    pub fn new() -> Self {
        let mut types: HashMap<&'static str, &'static str> = HashMap::new();
        types.insert("byte", "byte");
        types.insert("short", "short");
        types.insert("int", "int");
        types.insert("long", "long");
        types.insert("float", "float");
        types.insert("double", "double");
        types.insert("boolean", "boolean");
        types.insert("string", "string");
        types.insert("Polymorphic", "Object");
        types.insert("Object", "Object");
        // Opaque server-side value type; clients only ever see it boxed.
        types.insert("Iced", "Object");
        TypeTranslator {
            types,
            log: RefCell::new(BTreeMap::new()),
        }
    }

    /// Translator bound to the Java target.
    pub fn java() -> Self {
        let mut t = Self::new();
        t.types.insert("string", "String");
        t
    }

    /// Translate one type token to a target type name.
    ///
    /// `schema_name` carries the referenced class for schema-, enum- and
    /// key-typed tokens; it is empty for plain primitives. An unresolvable
    /// token is a generator-time error, not a runtime condition.
    pub fn translate(&self, token: &str, schema_name: &str) -> anyhow::Result<String> {
        let result = self.translate_inner(token, schema_name)?;
        self.log
            .borrow_mut()
            .insert(token.to_string(), result.clone());
        Ok(result)
    }

    fn translate_inner(&self, token: &str, schema_name: &str) -> anyhow::Result<String> {
        if let Some(base) = token.strip_suffix("[]") {
            // `[][]` falls out of the recursion.
            return Ok(format!("{}[]", self.translate_inner(base, schema_name)?));
        }
        if let Some(inner) = token.strip_prefix("Map<").and_then(|s| s.strip_suffix(">")) {
            let value_token = inner.splitn(2, ',').nth(1).unwrap_or(inner).trim();
            let value_type = self.translate_inner(value_token, "")?;
            return Ok(format!("Map<String, {}>", boxed(&value_type)));
        }
        if token.starts_with("Key<") {
            return Ok(if schema_name.is_empty() {
                "KeyV3".to_string()
            } else {
                schema_name.to_string()
            });
        }
        if token == "enum" {
            if schema_name.is_empty() {
                bail!("enum token without a schema name");
            }
            return Ok(schema_name.to_string());
        }
        if let Some(mapped) = self.types.get(token) {
            return Ok((*mapped).to_string());
        }
        if !schema_name.is_empty() {
            // Nested schema reference.
            return Ok(schema_name.to_string());
        }
        Err(anyhow!("no type mapping for token `{token}`"))
    }

    /// Flush the accumulated translation log to the tracing subscriber.
    pub fn flush_log(&self) {
        for (token, target) in self.log.borrow().iter() {
            tracing::debug!(token = %token, target = %target, "type translation");
        }
    }
}

impl Default for TypeTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Java map values must be reference types.
fn boxed(ty: &str) -> String {
    match ty {
        "byte" => "Byte",
        "short" => "Short",
        "int" => "Integer",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        "boolean" => "Boolean",
        other => other,
    }
    .to_string()
}
