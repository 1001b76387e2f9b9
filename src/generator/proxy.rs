use super::naming::translate_name;
use super::types::TypeTranslator;
use super::wrap;
use crate::source::EndpointRecord;
use anyhow::Context;
use askama::Template;

#[derive(Template)]
#[template(path = "proxy.java.txt", escape = "none")]
struct ProxyTemplateData {
    package: String,
    pojos_package: String,
    name: String,
    method_blocks: Vec<String>,
    has_helper: bool,
    helper_blocks: Vec<String>,
    key_array_helper: bool,
}

/// Emit one Retrofit proxy interface for a group of endpoints.
///
/// Each endpoint yields a full-parameter method and, when the required
/// subset differs, a required-parameters-only overload. Key and column
/// specifier parameters travel as their string identity, never as the
/// object reference. Endpoints tagged with an `algo` discriminator also get
/// a static helper that takes the aggregate parameter schema and forwards
/// field by field.
pub fn generate_proxy(
    name: &str,
    endpoints: &[&EndpointRecord],
    translator: &TypeTranslator,
    package: &str,
    pojos_package: &str,
) -> anyhow::Result<String> {
    let mut method_blocks = Vec::new();
    let mut helper_blocks = Vec::new();
    let mut key_array_helper = false;

    for endpoint in endpoints {
        let method = endpoint.method_name();

        let mut param_strs = Vec::new();
        let mut required_strs = Vec::new();
        for field in &endpoint.input_params {
            let binding = if field.is_path_param { "Path" } else { "Field" };
            let mut ptype = translator
                .translate(&field.type_token, field.schema_name_str())
                .with_context(|| {
                    format!("endpoint {}: parameter {}", endpoint.api_name, field.name)
                })?;
            // Keys and column specifiers go over the wire as plain strings.
            if ptype.ends_with("KeyV3") || ptype == "ColSpecifierV3" {
                ptype = "String".to_string();
            }
            if ptype.ends_with("KeyV3[]") {
                ptype = "String[]".to_string();
            }
            let param = format!("@{binding}(\"{0}\") {ptype} {0}", field.name);
            param_strs.push(param.clone());
            if field.required {
                required_strs.push(param);
            }
        }
        let required_strs = if required_strs.len() == param_strs.len() {
            None
        } else {
            Some(required_strs)
        };

        let mut block = String::new();
        block.push_str("  /** \n");
        block.push_str(&wrap::wrap(&endpoint.summary, "   * "));
        block.push('\n');
        for field in &endpoint.input_params {
            let lead = format!("   *   @param {} ", field.name);
            let indent = format!("   *{}", " ".repeat(lead.len() - 4));
            block.push_str(&lead);
            block.push_str(&wrap::wrap_continued(&field.help, &indent));
            block.push('\n');
        }
        block.push_str("   */\n");

        // Full-parameter form first, then the required-only form.
        for params in [Some(&param_strs), required_strs.as_ref()]
            .into_iter()
            .flatten()
        {
            if endpoint.http_method == "POST" {
                block.push_str("  @FormUrlEncoded\n");
            }
            block.push_str(&format!(
                "  @{}(\"{}\")\n",
                endpoint.http_method, endpoint.url_pattern
            ));
            if params.len() <= 1 {
                let args = params.first().map(String::as_str).unwrap_or("");
                block.push_str(&format!(
                    "  Call<{}> {method}({args});\n",
                    endpoint.output_schema
                ));
            } else {
                block.push_str(&format!("  Call<{}> {method}(\n", endpoint.output_schema));
                for (i, arg) in params.iter().enumerate() {
                    let comma = if i + 1 == params.len() { "" } else { "," };
                    block.push_str(&format!("    {arg}{comma}\n"));
                }
                block.push_str("  );\n");
            }
            block.push('\n');
        }
        method_blocks.push(block.trim_end().to_string() + "\n");

        if endpoint.algo.is_some() {
            let mut helper = String::new();
            helper.push_str("    /**\n");
            helper.push_str(&wrap::wrap(&endpoint.summary, "     * "));
            helper.push('\n');
            helper.push_str("     */\n");
            helper.push_str(&format!(
                "    public static Call<{}> {method}({name} z, {} p) {{\n",
                endpoint.output_schema, endpoint.input_schema
            ));
            helper.push_str(&format!("      return z.{method}(\n"));
            for (i, field) in endpoint.input_params.iter().enumerate() {
                let ptype = translator
                    .translate(&field.type_token, field.schema_name_str())
                    .with_context(|| {
                        format!("endpoint {}: parameter {}", endpoint.api_name, field.name)
                    })?;
                let pname = translate_name(&field.name);
                let mut arg = if ptype.ends_with("KeyV3[]") {
                    key_array_helper = true;
                    format!("(p.{pname} == null? null : keyArrayToStringArray(p.{pname}))")
                } else if ptype.ends_with("KeyV3") {
                    format!("(p.{pname} == null? null : p.{pname}.name)")
                } else if ptype.starts_with("ColSpecifier") {
                    format!("(p.{pname} == null? null : p.{pname}.columnName)")
                } else {
                    format!("p.{pname}")
                };
                if i + 1 != endpoint.input_params.len() {
                    arg.push(',');
                }
                helper.push_str(&format!("        {arg}\n"));
            }
            helper.push_str("      );\n");
            helper.push_str("    }\n");
            helper_blocks.push(helper);
        }
    }

    let data = ProxyTemplateData {
        package: package.to_string(),
        pojos_package: pojos_package.to_string(),
        name: name.to_string(),
        method_blocks,
        has_helper: !helper_blocks.is_empty(),
        helper_blocks,
        key_array_helper,
    };
    Ok(data.render()?)
}
