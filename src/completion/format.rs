use serde::Serialize;

use crate::extractor::FunctionSignature;

/// A completion entry: what the user sees and what gets inserted.
///
/// The snippet uses numbered placeholder fields (`${1:text}`) and ends with
/// the `$0` exit marker when it has any fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub trigger: String,
    pub snippet: String,
}

impl Completion {
    pub fn from_signature(signature: &FunctionSignature) -> Self {
        let name = &signature.name;

        let Some(raw) = signature.parameters.as_deref() else {
            let trigger = format!("{name}()");
            return Self {
                snippet: trigger.clone(),
                trigger,
            };
        };

        let fields = signature
            .parameter_list()
            .iter()
            .enumerate()
            .map(|(index, param)| format!("${{{}:{param}}}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            trigger: format!("{name}( {raw} )"),
            snippet: format!("{name}( {fields} )$0"),
        }
    }

    /// `(trigger, snippet)` pair as editors usually take it.
    pub fn into_pair(self) -> (String, String) {
        (self.trigger, self.snippet)
    }
}

impl From<&FunctionSignature> for Completion {
    fn from(signature: &FunctionSignature) -> Self {
        Self::from_signature(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_parameters() {
        let completion = Completion::from_signature(&FunctionSignature::new("Foo", Some("a, b")));
        assert_eq!(completion.trigger, "Foo( a, b )");
        assert_eq!(completion.snippet, "Foo( ${1:a}, ${2:b} )$0");
    }

    #[test]
    fn test_format_without_parameters() {
        let completion = Completion::from_signature(&FunctionSignature::new("Foo", None));
        assert_eq!(completion.trigger, "Foo()");
        assert_eq!(completion.snippet, "Foo()");
    }

    #[test]
    fn test_blank_parameters_format_as_none() {
        let completion = Completion::from_signature(&FunctionSignature::new("Foo", Some("  ")));
        assert_eq!(completion.into_pair(), ("Foo()".to_string(), "Foo()".to_string()));
    }

    #[test]
    fn test_placeholders_are_numbered_in_order() {
        let signature = FunctionSignature::new("Customer_Load_ID", Some("id,customer var ,  flags"));
        let completion = Completion::from(&signature);
        assert_eq!(completion.trigger, "Customer_Load_ID( id,customer var ,  flags )");
        assert_eq!(
            completion.snippet,
            "Customer_Load_ID( ${1:id}, ${2:customer var}, ${3:flags} )$0"
        );
    }
}
