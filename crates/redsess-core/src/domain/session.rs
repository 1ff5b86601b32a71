//! Session handle

use std::collections::HashMap;

use serde_json::Value;

use super::options::SessionOptions;

/// Caller-supplied session entries: a JSON object keyed by string.
/// Strings, integers, floats, bools, and nested arrays/objects all
/// round-trip through the backend record.
pub type SessionValues = HashMap<String, Value>;

/// Per-request, in-memory session state.
///
/// A plain record: the caller mutates `values` and `options` freely between
/// `new_session` and `save`. Owned by the request task that created it and
/// never shared across tasks; dropping an unsaved handle has no effect on
/// the backend.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: String,
    pub name: String,
    pub values: SessionValues,
    pub options: SessionOptions,
    pub is_new: bool,
}
