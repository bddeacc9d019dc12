//! Request construction from plain key-value parameters.
//!
//! Every parameter key is translated to a setter name ([`naming::setter_name`])
//! and dispatched through the explicit setter table of the target request type
//! ([`RequestTarget`]). Nothing is validated locally beyond the shape of each
//! value; IAM decides whether the request is legal.

pub mod naming;
mod targets;

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub use naming::{mapping_key, setter_name};

/// Parameters for a request, keyed by dash-separated field names (`role-name`).
pub type Params = serde_json::Map<String, Value>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{target} has no setter for {field}")]
    UnknownField { target: &'static str, field: String },

    #[error("{target}.{field} expects {expected}, got {found}")]
    TypeMismatch {
        target: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to build {target} request: {message}")]
    Build {
        target: &'static str,
        message: String,
    },

    /// Returned by a registered [`NestedBuilder`] that rejects its value.
    #[error("Nested builder for {key} failed: {message}")]
    Nested { key: String, message: String },
}

/// A request type that can be populated from [`Params`].
///
/// Implemented on the SDK input builders; each implementation is a fixed table
/// from setter name to typed setter.
pub trait RequestTarget: Default {
    /// Name of the IAM operation, used in error messages.
    const TARGET: &'static str;

    type Request;

    fn set_field(self, setter: &str, value: Value) -> Result<Self, RequestError>;

    fn finish(self) -> Result<Self::Request, RequestError>;
}

/// Builder applied to a parameter value before it is handed to its setter.
pub type NestedBuilder = fn(Value) -> Result<Value, RequestError>;

/// Per-key registry of nested value builders.
///
/// This is an extension point for parameters whose values are themselves
/// structured (tags, for instance). No builders are registered by default, so
/// every value reaches its setter unchanged unless the caller registers one.
#[derive(Default, Clone)]
pub struct NestedBuilders {
    builders: HashMap<String, NestedBuilder>,
}

impl NestedBuilders {
    #[must_use]
    pub fn register(mut self, key: impl Into<String>, builder: NestedBuilder) -> Self {
        self.builders.insert(key.into(), builder);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Run the builder registered for `key`, or return `value` untouched.
    pub fn apply(&self, key: &str, value: Value) -> Result<Value, RequestError> {
        match self.builders.get(key) {
            Some(builder) => builder(value),
            None => Ok(value),
        }
    }
}

impl fmt::Debug for NestedBuilders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.builders.keys()).finish()
    }
}

/// Build a `T` request from `params` with no nested builders.
pub fn build_request<T: RequestTarget>(params: &Params) -> Result<T::Request, RequestError> {
    build_request_with::<T>(params, &NestedBuilders::default())
}

/// Build a `T` request from `params`, passing each value through `nested` first.
pub fn build_request_with<T: RequestTarget>(
    params: &Params,
    nested: &NestedBuilders,
) -> Result<T::Request, RequestError> {
    log::debug!(
        "Building {} request from fields {:?}",
        T::TARGET,
        params.keys().collect::<Vec<_>>()
    );

    let mut builder = T::default();
    for (key, value) in params {
        let value = nested.apply(key, value.clone())?;
        builder = builder.set_field(&setter_name(key), value)?;
    }
    builder.finish()
}

/// Value coercions used by the setter tables.
pub(crate) mod coerce {
    use super::RequestError;
    use serde_json::Value;

    pub(crate) fn string(
        target: &'static str,
        field: &str,
        value: Value,
    ) -> Result<String, RequestError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(target, field, "a string", &other)),
        }
    }

    /// Integers also accept their decimal string form.
    pub(crate) fn int(target: &'static str, field: &str, value: Value) -> Result<i32, RequestError> {
        match &value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| mismatch(target, field, "a 32-bit integer", &value)),
            Value::String(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| mismatch(target, field, "a 32-bit integer", &value)),
            _ => Err(mismatch(target, field, "a 32-bit integer", &value)),
        }
    }

    fn mismatch(
        target: &'static str,
        field: &str,
        expected: &'static str,
        found: &Value,
    ) -> RequestError {
        RequestError::TypeMismatch {
            target,
            field: field.to_string(),
            expected,
            found: value_kind(found),
        }
    }

    fn value_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
