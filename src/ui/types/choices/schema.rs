use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
}

/// File constraints declared on a string field through the `x-file`,
/// `x-must-exist` and `x-extensions` schema extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileConstraint {
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub file: Option<FileConstraint>,
}

/// Field specs of the `params` object for the variant tagged `kind_key`, in
/// declaration order.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    let branch = alts
        .iter()
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| discriminant_matches(props, kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))?;

    let Some(params) = branch.get("params").and_then(Value::as_object) else {
        return Ok(vec![]);
    };
    let params = resolve_ref_obj(root_obj, params)
        .ok_or_else(|| anyhow!("failed to resolve params of '{kind_key}'"))?;

    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field.as_object().context("field schema not object")?;
        let field = resolve_ref_obj(root_obj, field)
            .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

        let Some(kind) = detect_field_kind(field.get("type")) else {
            bail!("field '{name}' of '{kind_key}' has an unsupported type");
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: str_of(field, "title").unwrap_or(name.as_str()).to_string(),
            description: str_of(field, "description").map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: f64_of(field, "minimum").or_else(|| f64_of(field, "exclusiveMinimum")),
            max: f64_of(field, "maximum").or_else(|| f64_of(field, "exclusiveMaximum")),
            min_length: field.get("minLength").and_then(Value::as_u64),
            max_length: field.get("maxLength").and_then(Value::as_u64),
            file: file_constraint(field),
        });
    }
    Ok(out)
}

fn str_of<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn f64_of(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

fn file_constraint(field: &Map<String, Value>) -> Option<FileConstraint> {
    if field.get("x-file").and_then(Value::as_bool) != Some(true) {
        return None;
    }
    let extensions = field
        .get("x-extensions")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    Some(FileConstraint {
        must_exist: field
            .get("x-must-exist")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        extensions,
    })
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tag) = props.get("type").and_then(Value::as_object) else {
        return false;
    };

    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `$ref` such as `"#/$defs/FitParameters"`; objects without a
/// `$ref` are returned unchanged.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    path.split('/').try_fold(root_obj, |cur, raw_seg| {
        // JSON Pointer unescape (~1 => /, ~0 => ~)
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let kind_of = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => kind_of(s),
        // unions like ["null", "integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{TaskChoice, UIChoice};

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn fit_specs_in_declaration_order() {
        let specs = specs_for_kind(&TaskChoice::schema(), "fit-and-predict").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["path", "delimiter", "x_new", "line_points"]);
    }

    #[test]
    fn field_kinds_titles_and_ranges() {
        let specs = specs_for_kind(&TaskChoice::schema(), "fit-and-predict").unwrap();

        let path = spec(&specs, "path");
        assert_eq!(path.kind, FieldKind::String);
        assert_eq!(path.title, "Dataset Path");
        assert!(path.required);

        let delimiter = spec(&specs, "delimiter");
        assert_eq!(delimiter.kind, FieldKind::String);
        assert!(!delimiter.required);
        assert_eq!(delimiter.min_length, Some(1));
        assert_eq!(delimiter.max_length, Some(1));
        assert_eq!(spec(&specs, "x_new").kind, FieldKind::Number);

        let points = spec(&specs, "line_points");
        assert_eq!(points.kind, FieldKind::Integer);
        assert_eq!(points.min, Some(2.0));
    }

    #[test]
    fn file_constraints_are_read() {
        let specs = specs_for_kind(&TaskChoice::schema(), "export-line").unwrap();

        let input = spec(&specs, "path").file.clone().unwrap();
        assert!(input.must_exist);
        assert!(input.extensions.is_empty());

        let output = spec(&specs, "output").file.clone().unwrap();
        assert!(!output.must_exist);
        assert_eq!(output.extensions, ["csv", "tsv", "json"]);

        assert!(spec(&specs, "x_new").file.is_none());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(specs_for_kind(&TaskChoice::schema(), "nope").is_err());
    }

    #[test]
    fn detects_nullable_unions() {
        let ty = serde_json::json!(["null", "integer"]);
        assert_eq!(detect_field_kind(Some(&ty)), Some(FieldKind::Integer));
        assert_eq!(detect_field_kind(Some(&serde_json::json!("boolean"))), None);
    }
}
