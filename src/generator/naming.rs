/// Convert a snake_case identifier into the target language's camelCase.
///
/// Leading and trailing underscore runs are preserved verbatim so that
/// private/dunder-style wire names keep their prefix; interior underscore
/// runs collapse. Must stay a pure function: the same field name is
/// translated independently by several emitters and the results have to
/// agree byte for byte.
///
/// ```
/// use restbind::generator::translate_name;
/// assert_eq!(translate_name("num_rows"), "numRows");
/// assert_eq!(translate_name("build_GBM_model"), "buildGbmModel");
/// assert_eq!(translate_name("_exclude_fields"), "_excludeFields");
/// ```
pub fn translate_name(name: &str) -> String {
    let mut parts: Vec<String> = name.split('_').map(String::from).collect();
    let mut i = 0;
    while i < parts.len() && parts[i].is_empty() {
        parts[i] = "_".to_string();
        i += 1;
    }
    if i >= parts.len() {
        return parts.concat();
    }
    parts[i] = parts[i].to_lowercase();
    for part in parts.iter_mut().skip(i + 1) {
        *part = capitalize(part);
    }
    let mut k = parts.len() - 1;
    while parts[k].is_empty() {
        parts[k] = "_".to_string();
        if k == 0 {
            break;
        }
        k -= 1;
    }
    parts.concat()
}

/// First letter upper-cased, remainder lower-cased (so `GBM` becomes `Gbm`).
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
