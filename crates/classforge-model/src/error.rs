use crate::member::{Arity, Name};
use classforge_common::{Diagnostic, diagnostic_messages};
use thiserror::Error;

/// What the class under construction offers for a required member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProvidedMember {
    /// Nothing with that name is reachable, own or inherited.
    Missing,
    /// A data member shadows the name.
    NotCallable,
    /// A method with a different declared arity.
    Arity(Arity),
}

impl ProvidedMember {
    fn detail(&self, expected: &Arity) -> String {
        match self {
            ProvidedMember::Missing => "member is missing".to_string(),
            ProvidedMember::NotCallable => "member is not a method".to_string(),
            ProvidedMember::Arity(found) => {
                format!("expected {expected} parameter(s), found {found}")
            }
        }
    }
}

fn display_name(name: &Option<Name>) -> &str {
    name.as_deref().unwrap_or("<anonymous>")
}

/// Failure to produce a class type. No partial type is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(
        "Class {} does not provide method {}.{member} ({})",
        display_name(.class),
        display_name(.source_class),
        .found.detail(.expected_arity)
    )]
    CapabilityMismatch {
        class: Option<Name>,
        source_class: Option<Name>,
        member: Name,
        expected_arity: Arity,
        found: ProvidedMember,
    },

    #[error(
        "Member name '{member}' is reserved and cannot be declared on class {}",
        display_name(.class)
    )]
    ReservedMember { class: Option<Name>, member: Name },

    #[error("A class named '{0}' is already registered")]
    DuplicateClass(Name),

    #[error("Only named classes can be registered")]
    Anonymous,
}

impl BuildError {
    /// The member name the error is about, if any.
    pub fn member(&self) -> Option<&str> {
        match self {
            BuildError::CapabilityMismatch { member, .. }
            | BuildError::ReservedMember { member, .. } => Some(member.as_ref()),
            BuildError::DuplicateClass(_) | BuildError::Anonymous => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::CapabilityMismatch {
                class,
                source_class,
                member,
                expected_arity,
                found,
            } => Diagnostic::from_message(
                class.as_deref().map(str::to_string),
                &diagnostic_messages::CLASS_DOES_NOT_PROVIDE_METHOD,
                &[display_name(class), display_name(source_class), member.as_ref()],
            )
            .with_related(found.detail(expected_arity)),
            BuildError::ReservedMember { class, member } => Diagnostic::from_message(
                class.as_deref().map(str::to_string),
                &diagnostic_messages::RESERVED_MEMBER_NAME,
                &[member.as_ref(), display_name(class)],
            ),
            BuildError::DuplicateClass(name) => Diagnostic::from_message(
                Some(name.to_string()),
                &diagnostic_messages::DUPLICATE_CLASS_NAME,
                &[name.as_ref()],
            ),
            BuildError::Anonymous => Diagnostic::from_message(
                None,
                &diagnostic_messages::ANONYMOUS_CLASS_REGISTRATION,
                &[],
            ),
        }
    }
}

/// Failure raised while dispatching into a built class.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("Class {} has no member '{member}'", display_name(.class))]
    UnknownMember { class: Option<Name>, member: Name },

    #[error("Member '{member}' of class {} is not callable", display_name(.class))]
    NotCallable { class: Option<Name>, member: Name },

    #[error("argument {index} must be a {expected}, got {found}")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Raised by a method, static function or constructor body.
    #[error("{0}")]
    Thrown(String),
}

impl CallError {
    pub fn thrown(message: impl Into<String>) -> Self {
        CallError::Thrown(message.into())
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CallError::UnknownMember { class, member } => Diagnostic::from_message(
                class.as_deref().map(str::to_string),
                &diagnostic_messages::UNKNOWN_MEMBER,
                &[member.as_ref(), display_name(class)],
            ),
            CallError::NotCallable { class, member } => Diagnostic::from_message(
                class.as_deref().map(str::to_string),
                &diagnostic_messages::MEMBER_IS_NOT_CALLABLE,
                &[member.as_ref(), display_name(class)],
            ),
            CallError::ArgumentType { .. } | CallError::Thrown(_) => Diagnostic::from_message(
                None,
                &diagnostic_messages::CALL_FAILED,
                &[self.to_string().as_str()],
            ),
        }
    }
}
