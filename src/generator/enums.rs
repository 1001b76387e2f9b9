use askama::Template;

/// Words that are valid schema enum values but illegal as Java enum member
/// names.
const RESERVED: [&str; 9] = [
    "enum", "int", "double", "boolean", "long", "byte", "class", "lambda", "null",
];

#[derive(Template)]
#[template(path = "enum.java.txt", escape = "none")]
struct EnumTemplateData {
    package: String,
    name: String,
    values: Vec<String>,
}

/// Emit one enum type.
///
/// Values are sorted for deterministic output. If any value collides with a
/// reserved word, every value is upper-cased — all or nothing, so the
/// emitted enum keeps a single casing convention and round-trip lookup by
/// value name stays possible.
pub fn generate_enum(name: &str, values: &[String], package: &str) -> anyhow::Result<String> {
    let mut values: Vec<String> = values.to_vec();
    values.sort();
    if values.iter().any(|v| RESERVED.contains(&v.as_str())) {
        for v in &mut values {
            *v = v.to_uppercase();
        }
    }
    let data = EnumTemplateData {
        package: package.to_string(),
        name: name.to_string(),
        values,
    };
    Ok(data.render()?)
}
