//! Diagnostic types and message lookup for class definition and dispatch.
//!
//! Codes in the `1xxx` range are raised while building a class, codes in the
//! `2xxx` range while calling into a built class.

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Error,
    Message,
}

/// Related information for a diagnostic (e.g. the source that declared a member).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A class definition or dispatch diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Display name of the class the diagnostic is about, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create an error diagnostic from a message definition and its arguments.
    #[must_use]
    pub fn from_message(
        class_name: Option<String>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            class_name,
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
            related_information: Vec::new(),
        }
    }

    /// Add related information to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            message_text: message,
            category: DiagnosticCategory::Message,
            code: 0,
        });
        self
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
///
/// The template is scanned once, so placeholder-like text inside an argument
/// is copied verbatim. Placeholders without a matching argument are kept.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

// =============================================================================
// Message Table
// =============================================================================

pub mod diagnostic_codes {
    pub const CLASS_DOES_NOT_PROVIDE_METHOD: u32 = 1001;
    pub const RESERVED_MEMBER_NAME: u32 = 1002;
    pub const DUPLICATE_CLASS_NAME: u32 = 1003;
    pub const ANONYMOUS_CLASS_REGISTRATION: u32 = 1004;
    pub const MEMBER_IS_NOT_CALLABLE: u32 = 2001;
    pub const UNKNOWN_MEMBER: u32 = 2002;
    pub const CALL_FAILED: u32 = 2003;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const CLASS_DOES_NOT_PROVIDE_METHOD: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CLASS_DOES_NOT_PROVIDE_METHOD,
        category: DiagnosticCategory::Error,
        message: "Class {0} does not provide method {1}.{2}",
    };
    pub const RESERVED_MEMBER_NAME: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RESERVED_MEMBER_NAME,
        category: DiagnosticCategory::Error,
        message: "Member name '{0}' is reserved and cannot be declared on class {1}.",
    };
    pub const DUPLICATE_CLASS_NAME: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_CLASS_NAME,
        category: DiagnosticCategory::Error,
        message: "A class named '{0}' is already registered.",
    };
    pub const ANONYMOUS_CLASS_REGISTRATION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::ANONYMOUS_CLASS_REGISTRATION,
        category: DiagnosticCategory::Error,
        message: "Only named classes can be registered.",
    };
    pub const MEMBER_IS_NOT_CALLABLE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::MEMBER_IS_NOT_CALLABLE,
        category: DiagnosticCategory::Error,
        message: "Member '{0}' of class {1} is not callable.",
    };
    pub const UNKNOWN_MEMBER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_MEMBER,
        category: DiagnosticCategory::Error,
        message: "Class {1} has no member '{0}'.",
    };
    pub const CALL_FAILED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CALL_FAILED,
        category: DiagnosticCategory::Error,
        message: "Call failed: {0}",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::CLASS_DOES_NOT_PROVIDE_METHOD,
    diagnostic_messages::RESERVED_MEMBER_NAME,
    diagnostic_messages::DUPLICATE_CLASS_NAME,
    diagnostic_messages::ANONYMOUS_CLASS_REGISTRATION,
    diagnostic_messages::MEMBER_IS_NOT_CALLABLE,
    diagnostic_messages::UNKNOWN_MEMBER,
    diagnostic_messages::CALL_FAILED,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_positional_args() {
        let text = format_message(
            diagnostic_messages::CLASS_DOES_NOT_PROVIDE_METHOD.message,
            &["Circle", "Colorable", "setColor"],
        );
        assert_eq!(text, "Class Circle does not provide method Colorable.setColor");
    }

    #[test]
    fn test_format_message_does_not_rescan_arguments() {
        let text = format_message(
            diagnostic_messages::CLASS_DOES_NOT_PROVIDE_METHOD.message,
            &["Box{2}", "Req", "run"],
        );
        assert_eq!(text, "Class Box{2} does not provide method Req.run");

        let text = format_message(
            diagnostic_messages::UNKNOWN_MEMBER.message,
            &["get{1}", "Shape"],
        );
        assert_eq!(text, "Class Shape has no member 'get{1}'.");
    }

    #[test]
    fn test_format_message_keeps_unmatched_braces() {
        assert_eq!(format_message("{0} {x} {5} {", &["a"]), "a {x} {5} {");
        assert_eq!(format_message("{}{0}", &["b"]), "{}b");
    }

    #[test]
    fn test_message_codes_are_unique() {
        for (i, a) in DIAGNOSTIC_MESSAGES.iter().enumerate() {
            for b in &DIAGNOSTIC_MESSAGES[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate diagnostic code {}", a.code);
            }
        }
    }

    #[test]
    fn test_get_message_template() {
        assert_eq!(
            get_message_template(diagnostic_codes::DUPLICATE_CLASS_NAME),
            Some("A class named '{0}' is already registered.")
        );
        assert_eq!(get_message_template(9999), None);
    }

    #[test]
    fn test_diagnostic_serializes_without_empty_fields() {
        let diag = Diagnostic::from_message(None, &diagnostic_messages::CALL_FAILED, &["boom"]);
        let json = serde_json::to_value(&diag).unwrap();
        assert!(json.get("class_name").is_none());
        assert!(json.get("related_information").is_none());
        assert_eq!(json["code"], 2003);

        let diag = diag.with_related("see Shape".to_string());
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["related_information"][0]["message_text"], "see Shape");
    }
}
