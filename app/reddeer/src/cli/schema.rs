//! JSON Schema of run configuration files.

use crate::suite::RunConfiguration;

/// Generates the JSON Schema of one run configuration object.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(RunConfiguration);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!("https://raw.githubusercontent.com/jboss-reddeer/reddeer/main/reddeer.schema.json"),
        );
    }

    schema
}

/// Generates the schema as pretty-printed JSON.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
