//! Reserved bookkeeping member names.
//!
//! Every shared member table records its constructor, its base class and
//! (when named) its display name under these keys. They are never stored as
//! ordinary members and are skipped by capability checks.

pub const CONSTRUCTOR: &str = "constructor";
pub const SUPERCLASS: &str = "superclass";
pub const CLASSNAME: &str = "classname";

pub const RESERVED_MEMBER_NAMES: [&str; 3] = [CONSTRUCTOR, SUPERCLASS, CLASSNAME];

/// Returns true when `name` is one of the bookkeeping keys.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_MEMBER_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved("constructor"));
        assert!(is_reserved("superclass"));
        assert!(is_reserved("classname"));
        assert!(!is_reserved("className"));
        assert!(!is_reserved("area"));
    }
}
