//! Debug and JSON views of entities.
//!
//! Each entity type declares its scalar and collection attributes
//! explicitly. Scalars render by value, collections by their length only,
//! so inspecting one entity never expands the cyclic graph around it.
//! Identifier fields (the entity's own id and raw foreign-key ids) are
//! omitted: resolved references supersede them.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Render a timestamp in the dataset's naive `YYYY-MM-DD HH:MM:SS` format.
pub(crate) fn timestamp_json(value: &NaiveDateTime) -> Value {
    Value::from(value.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Explicit attribute declaration for one entity type.
pub trait Describe {
    fn type_name(&self) -> &'static str;

    /// Scalar attributes, sorted by name.
    fn scalars(&self) -> Vec<(&'static str, Value)>;

    /// Relationship collections, sorted by name, as (name, length).
    fn collections(&self) -> Vec<(&'static str, usize)>;

    /// Shallow rendering: `{"TypeName": {scalars by value, collections by
    /// length}}`.
    fn shallow_json(&self) -> Value {
        let mut fields = Map::new();
        for (name, value) in self.scalars() {
            fields.insert(name.to_string(), value);
        }
        for (name, len) in self.collections() {
            fields.insert(name.to_string(), Value::from(len));
        }

        let mut outer = Map::new();
        outer.insert(self.type_name().to_string(), Value::Object(fields));
        Value::Object(outer)
    }

    /// One-line summary for logs, e.g. `<Tag name="college" questions=2 users=14>`.
    fn summary(&self) -> String {
        let mut parts = Vec::new();
        for (name, value) in self.scalars() {
            parts.push(format!("{name}={value}"));
        }
        for (name, len) in self.collections() {
            parts.push(format!("{name}={len}"));
        }
        format!("<{} {}>", self.type_name(), parts.join(" "))
    }
}
