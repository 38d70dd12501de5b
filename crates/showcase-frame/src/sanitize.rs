//! Outbound payload sanitization.
//!
//! Configuration payloads built by a host-side configurator carry a
//! back-reference to the configurator that owns them. That field does not
//! survive serialization across the channel and is stripped before sending.
//! Nothing else about the payload is validated.

use serde_json::Value;

/// Field linking a configuration payload back to its owning configurator.
pub const OWNER_REF_FIELD: &str = "configurator";

/// Shallow-copy `configuration` without the owner back-reference.
///
/// Non-object payloads and objects without the field pass through as a
/// plain copy. Only the top-level field is stripped; nested occurrences
/// belong to the payload and are kept.
pub fn strip_owner_ref(configuration: &Value) -> Value {
    let mut copy = configuration.clone();
    if let Value::Object(fields) = &mut copy {
        fields.remove(OWNER_REF_FIELD);
    }
    copy
}
