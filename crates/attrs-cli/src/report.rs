//! Rendering validation results for the terminal

use attrs_bag::AttrsValidation;
use serde_json::json;

pub(crate) fn render_text(result: &AttrsValidation<String>, fields: usize) -> String {
    if !result.has_errors() {
        return format!("ok: {fields} field(s) valid\n");
    }

    let mut out = String::new();
    for error in result {
        out.push_str(&error.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "failed: {} of {fields} field(s) invalid\n",
        result.len()
    ));
    out
}

pub(crate) fn render_json(result: &AttrsValidation<String>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "valid": !result.has_errors(),
        "errors": result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrs_bag::FormAttrs;
    use pretty_assertions::assert_eq;

    fn checked(values: &[(&str, &str)]) -> AttrsValidation<String> {
        let mut form = FormAttrs::new(["a", "b"]).unwrap();
        for (key, value) in values {
            form.set(key, (*value).to_string()).unwrap();
        }
        form.validate()
    }

    #[test]
    fn text_for_valid_form() {
        let result = checked(&[("a", "A"), ("b", "B")]);
        assert_eq!(render_text(&result, 2), "ok: 2 field(s) valid\n");
    }

    #[test]
    fn text_lists_failures() {
        let result = checked(&[("a", "A")]);
        assert_eq!(
            render_text(&result, 2),
            "Validation error for key b with value <unset> and message Value was never added\n\
             failed: 1 of 2 field(s) invalid\n"
        );
    }

    #[test]
    fn json_document() {
        let result = checked(&[("b", "B")]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"]["a"]["error"], "Value was never added");
        assert!(value["errors"].get("b").is_none());
    }
}
