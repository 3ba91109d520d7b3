use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.sort();
        error_messages.join("; ")
    }
}
