//! Helpers for turning `validator` results into readable messages.

use validator::{ValidationError, ValidationErrors};

/// Flatten field errors into `"field: message; field: message"`.
///
/// Fields are sorted so the output is stable across runs.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("{field}: {}", message_for(e)))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn message_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let param = |name: &str| error.params.get(name).map(|v| v.to_string());
    match error.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max}"),
            (None, Some(max)) => format!("length must be at most {max}"),
            (Some(min), None) => format!("length must be at least {min}"),
            (None, None) => "invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, None) => "out of range".to_string(),
        },
        code => format!("invalid value ({code})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5))]
        name: String,
        #[validate(range(min = 0, max = 100))]
        progress: i16,
    }

    #[test]
    fn describes_each_failing_field_in_order() {
        let sample = Sample {
            name: "too long".into(),
            progress: 101,
        };
        let message = describe(&sample.validate().unwrap_err());
        assert!(message.starts_with("name: length must be between 1 and 5; "));
        assert!(message.contains("progress: must be between"));
    }

    #[test]
    fn custom_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "budget",
            ValidationError::new("decimal").with_message("at most 2 decimal places".into()),
        );
        assert_eq!(describe(&errors), "budget: at most 2 decimal places");
    }
}
