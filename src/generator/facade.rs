use super::naming::translate_name;
use super::project::GenFailure;
use super::types::TypeTranslator;
use super::wrap;
use crate::source::{EndpointRecord, FieldRecord};
use anyhow::anyhow;
use askama::Template;

/// Base URL baked into the generated client as the default.
pub const DEFAULT_URL: &str = "http://localhost:54321/";

/// The overload partitions collapse to a single aggregate-parameter call
/// once a set reaches this many parameters.
const AGGREGATE_THRESHOLD: usize = 4;

/// Field excluded by the middle overload partition.
const EXCLUDED_FIELD: &str = "_exclude_fields";

#[derive(Template)]
#[template(path = "facade.java.txt", escape = "none")]
struct FacadeTemplateData {
    package: String,
    pojos_package: String,
    proxy_package: String,
    class_name: String,
    default_url: String,
    wrappers: Vec<String>,
    deserializers: Vec<String>,
}

/// Emit the single client entry-point class.
///
/// Per endpoint, `input_params` is partitioned into required-only, all
/// except `_exclude_fields`, and all; up to three call wrappers are
/// emitted, with duplicate partitions collapsed and large parameter lists
/// folded into one aggregate-parameter overload. Contract violations
/// (required-field count, discriminator naming) fail the offending record
/// and are collected into `failures`; the rest of the facade still renders.
pub fn generate_facade(
    endpoints: &[EndpointRecord],
    translator: &TypeTranslator,
    package: &str,
    class_name: &str,
    failures: &mut Vec<GenFailure>,
) -> anyhow::Result<String> {
    let mut wrappers = Vec::new();
    for endpoint in endpoints {
        match wrapper_block(endpoint, translator) {
            Ok(block) => wrappers.push(block),
            Err(error) => failures.push(GenFailure::new(&endpoint.api_name, error)),
        }
    }

    let data = FacadeTemplateData {
        package: package.to_string(),
        pojos_package: format!("{package}.pojos"),
        proxy_package: format!("{package}.proxies.retrofit"),
        class_name: class_name.to_string(),
        default_url: DEFAULT_URL.to_string(),
        wrappers,
        deserializers: deserializer_blocks(endpoints, failures),
    };
    Ok(data.render()?)
}

fn wrapper_block(
    endpoint: &EndpointRecord,
    translator: &TypeTranslator,
) -> anyhow::Result<String> {
    let input: Vec<&FieldRecord> = endpoint.input_params.iter().collect();
    let required: Vec<&FieldRecord> = input.iter().copied().filter(|f| f.required).collect();
    let wo_excluded: Vec<&FieldRecord> = input
        .iter()
        .copied()
        .filter(|f| f.name != EXCLUDED_FIELD)
        .collect();

    let li = input.len();
    let le = wo_excluded.len();
    let lr = required.len();
    if lr > 3 {
        return Err(anyhow!(
            "too many required fields ({lr}) in method {}",
            endpoint.api_name
        ));
    }

    // Partition collapse: drop sets that duplicate one already emitted, and
    // drop the middle set once the aggregate form takes over anyway.
    let mut all = Some(input);
    let mut middle = Some(wo_excluded);
    if lr == li {
        all = None;
        middle = None;
    } else if le == li || le == lr || li >= AGGREGATE_THRESHOLD {
        middle = None;
    }
    // The bulk-ingest parse endpoint requires every setup field; its
    // required-only set is not a valid call. Matched by name on purpose.
    let required = if endpoint.api_name == "parse" {
        None
    } else {
        Some(required)
    };

    let mut block = String::new();
    block.push_str("  /**\n");
    block.push_str(&wrap::wrap(&endpoint.summary, "   * "));
    block.push('\n');
    block.push_str("   */\n");

    let partitions = [
        (false, required),
        (true, middle),
        (false, all),
    ];
    for (is_middle, fields) in partitions
        .into_iter()
        .filter_map(|(tag, set)| set.map(|s| (tag, s)))
    {
        let use_schema_param = fields.len() >= AGGREGATE_THRESHOLD;
        let mut typed = Vec::new();
        let mut values = Vec::new();
        for field in &fields {
            let ftype = translator
                .translate(&field.type_token, field.schema_name_str())
                .map_err(|e| anyhow!("endpoint {}: parameter {}: {e}", endpoint.api_name, field.name))?;
            let fname = translate_name(&field.name);
            typed.push(format!("{ftype} {fname}"));
            let fname = if use_schema_param {
                format!("params.{fname}")
            } else {
                fname
            };
            values.push(if ftype.ends_with("KeyV3[]") {
                format!("keyArrayToStringArray({fname})")
            } else if ftype.ends_with("KeyV3") {
                format!("keyToString({fname})")
            } else if ftype.starts_with("ColSpecifier") {
                format!("colToString({fname})")
            } else {
                fname
            });
        }

        let (args, values) = if use_schema_param {
            (
                format!("{} params", endpoint.input_schema),
                format!("\n      {}\n    ", values.join(",\n      ")),
            )
        } else {
            let mut joined = values.join(", ");
            if is_middle {
                // The excluded field still travels, as an empty string.
                joined.push_str(", \"\"");
            }
            (typed.join(", "), joined)
        };

        block.push_str(&format!(
            "  public {} {}({args}) throws IOException {{\n",
            endpoint.output_schema, endpoint.api_name
        ));
        block.push_str(&format!(
            "    {0} s = getService({0}.class);\n",
            endpoint.class_name
        ));
        block.push_str(&format!(
            "    return s.{}({values}).execute().body();\n",
            endpoint.method_name()
        ));
        block.push_str("  }\n");
    }
    Ok(block.trim_end().to_string() + "\n")
}

/// The four polymorphic decoder tables, one per name-injection rule.
///
/// Every train endpoint must uphold the naming contract: its output schema,
/// lower-cased, starts with its `algo` tag. The injection rules splice the
/// related type name in right after that prefix.
fn deserializer_blocks(
    endpoints: &[EndpointRecord],
    failures: &mut Vec<GenFailure>,
) -> Vec<String> {
    let mut cases: Vec<(String, String)> = Vec::new();
    for endpoint in endpoints {
        if endpoint.class_name != "ModelBuilders" || !endpoint.api_name.starts_with("train") {
            continue;
        }
        let Some(algo) = endpoint.algo.as_deref() else {
            continue;
        };
        let oschema = &endpoint.output_schema;
        if !oschema.to_lowercase().starts_with(algo) {
            failures.push(GenFailure::new(
                &endpoint.api_name,
                anyhow!("wrong output schema for algo {algo}: {oschema}"),
            ));
            continue;
        }
        cases.push((algo.to_string(), oschema.clone()));
    }

    let inject = |schema: &str, algo: &str, middle: &str| -> String {
        format!("{}{middle}{}", &schema[..algo.len()], &schema[algo.len()..])
    };

    let tables: [(&str, &str, &str); 4] = [
        ("ModelDeserializer", "ModelBuilderSchema", ""),
        ("ModelSchemaDeserializer", "ModelSchemaBaseV3", "Model"),
        ("ModelOutputDeserializer", "ModelOutputSchemaV3", "ModelOutput"),
        (
            "ModelParametersDeserializer",
            "ModelParametersSchemaV3",
            "Parameters",
        ),
    ];

    let mut blocks = Vec::new();
    for (clz, base, middle) in tables {
        let mut b = String::new();
        b.push_str("  /**\n");
        b.push_str(&format!(
            "   * Factory method for parsing a {base} json object into an instance of the model-specific subclass.\n"
        ));
        b.push_str("   */\n");
        b.push_str(&format!(
            "  private static class {clz} implements JsonDeserializer<{base}> {{\n"
        ));
        b.push_str("    @Override\n");
        b.push_str(&format!(
            "    public {base} deserialize(JsonElement json, Type typeOfT, JsonDeserializationContext context)\n"
        ));
        b.push_str("      throws JsonParseException {\n");
        b.push_str("      if (json.isJsonNull()) return null;\n");
        b.push_str("      if (json.isJsonObject()) {\n");
        b.push_str("        JsonObject jobj = json.getAsJsonObject();\n");
        b.push_str("        if (jobj.has(\"algo\")) {\n");
        b.push_str(
            "          String algo = jobj.get(\"algo\").getAsJsonPrimitive().getAsString().toLowerCase();\n",
        );
        b.push_str("          switch (algo) {\n");
        for (algo, oschema) in &cases {
            let model = inject(oschema, algo, middle);
            b.push_str(&format!(
                "            case \"{algo}\": return context.deserialize(json, {model}.class);\n"
            ));
        }
        b.push_str("            default:\n");
        b.push_str(
            "              throw new JsonParseException(\"Unable to deserialize model of type \" + algo);\n",
        );
        b.push_str("          }\n");
        b.push_str("        }\n");
        b.push_str("      }\n");
        b.push_str(&format!(
            "      throw new JsonParseException(\"Invalid {base} element \" + json.toString());\n"
        ));
        b.push_str("    }\n");
        b.push_str("  }\n");
        blocks.push(b);
    }
    blocks
}
