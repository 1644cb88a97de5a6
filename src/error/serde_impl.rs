//! Serde support for validation errors (feature-gated)
//!
//! Errors serialize as structured reports, so a service can return them to the
//! caller that sent the malformed payload:
//!
//! ```text
//! {"path": "root", "shape": "object", "errors": [
//!     {"path": "root.string", "expected": "string", "actual": "1"}
//! ]}
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{Cause, ValidationError};

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("path", &self.path)?;
        match &self.cause {
            Cause::Mismatch { expected, actual } => {
                state.serialize_field("expected", expected)?;
                state.serialize_field("actual", actual)?;
            }
            Cause::Nested { shape, errors } => {
                state.serialize_field("shape", shape)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}
