use super::naming::translate_name;
use super::types::TypeTranslator;
use super::value::java_value;
use super::wrap;
use crate::source::SchemaRecord;
use anyhow::Context;
use askama::Template;

/// Superclass marker that roots the hierarchy; rendered as plain `Object`.
const ROOT_MARKER: &str = "Schema";

#[derive(Template)]
#[template(path = "schema.java.txt", escape = "none")]
struct SchemaTemplateData {
    package: String,
    has_map: bool,
    has_super: bool,
    class_decl: String,
    super_decl: String,
    field_blocks: Vec<String>,
    has_inherited: bool,
    rule: String,
    spacer: String,
    inherited_blocks: Vec<String>,
    ctor_name: String,
    assignments: Vec<String>,
}

struct RenderedField {
    name: String,
    value: String,
    java_type: String,
    help: String,
    inherited: bool,
}

/// Emit one value-object class for a schema record.
///
/// Own fields get a full declaration plus a default assignment in the
/// generated constructor; inherited fields are documented in an inert
/// comment block so the subtype never re-declares what the supertype owns.
/// An unresolvable type token fails this record only; the driver carries on
/// with the next one.
pub fn generate_schema(
    schema: &SchemaRecord,
    translator: &TypeTranslator,
    package: &str,
) -> anyhow::Result<String> {
    let mut superclass = schema.superclass.as_str();
    if superclass == ROOT_MARKER {
        superclass = "Object";
    }

    let mut has_map = false;
    let mut fields: Vec<RenderedField> = Vec::new();
    for field in &schema.fields {
        // Bookkeeping field, not user data.
        if field.name == "__meta" {
            continue;
        }
        if !field.is_inherited && field.type_token.starts_with("Map") {
            has_map = true;
        }
        let java_type = translator
            .translate(&field.type_token, field.schema_name_str())
            .with_context(|| format!("schema {}: field {}", schema.name, field.name))?;
        let value = java_value(field, translator)
            .with_context(|| format!("schema {}: field {}", schema.name, field.name))?;
        fields.push(RenderedField {
            name: field.name.clone(),
            value,
            java_type,
            help: field.help.clone(),
            inherited: field.is_inherited,
        });
    }

    let mut class_decl = schema.name.clone();
    if let Some(generics) = &schema.generics {
        let params: Vec<String> = generics
            .iter()
            .map(|(name, bound)| format!("{name} extends {bound}"))
            .collect();
        class_decl.push_str(&format!("<{}>", params.join(", ")));
    }
    let mut super_decl = superclass.to_string();
    if let Some(super_generics) = &schema.super_generics {
        super_decl.push_str(&format!("<{}>", super_generics.join(", ")));
    }

    let mut field_blocks = Vec::new();
    let mut inherited_blocks = Vec::new();
    for field in &fields {
        let ccname = translate_name(&field.name);
        if field.inherited {
            inherited_blocks.push(format!(
                "{}\n    public {} {};",
                wrap::wrap(&field.help, "    // "),
                field.java_type,
                ccname
            ));
        } else {
            let mut block = String::new();
            block.push_str("    /**\n");
            block.push_str(&wrap::wrap(&field.help, "     * "));
            block.push('\n');
            block.push_str("     */\n");
            if field.name != ccname {
                block.push_str(&format!("    @SerializedName(\"{}\")\n", field.name));
            }
            block.push_str(&format!("    public {} {};", field.java_type, ccname));
            field_blocks.push(block);
        }
    }

    let assignments: Vec<String> = fields
        .iter()
        .filter(|f| {
            // Aggregate-parameter fields get their defaults from a nested
            // object graph the generator does not flatten.
            f.name != "parameters" && f.value != "null"
        })
        .map(|f| format!("{} = {};", translate_name(&f.name), f.value))
        .collect();

    let data = SchemaTemplateData {
        package: package.to_string(),
        has_map,
        has_super: super_decl != "Object",
        class_decl,
        super_decl,
        field_blocks,
        has_inherited: !inherited_blocks.is_empty(),
        rule: "-".repeat(114),
        spacer: " ".repeat(50),
        inherited_blocks,
        ctor_name: schema.name.clone(),
        assignments,
    };
    Ok(data.render()?)
}
