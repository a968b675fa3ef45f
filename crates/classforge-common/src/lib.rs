//! Common types and utilities for the classforge object model.
//!
//! This crate provides foundational pieces shared by the classforge crates:
//! - Diagnostic types, codes and message templates (`Diagnostic`, `format_message`)
//! - Reserved bookkeeping member names (`reserved`)

// Diagnostic types and the message table
pub mod diagnostics;
pub use diagnostics::{
    DIAGNOSTIC_MESSAGES, Diagnostic, DiagnosticCategory, DiagnosticMessage,
    DiagnosticRelatedInformation, diagnostic_codes, diagnostic_messages, format_message,
    get_message_template,
};

// Names the builder owns on every shared member table
pub mod reserved;
pub use reserved::{CLASSNAME, CONSTRUCTOR, RESERVED_MEMBER_NAMES, SUPERCLASS, is_reserved};
