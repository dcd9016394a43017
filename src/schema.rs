use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// Generate an inline JSON schema for MCP tool parameters.
///
/// Unlike rmcp's default `schema_for_type()`, this sets `inline_subschemas = true` so
/// [`OutputFormat`](crate::tools::OutputFormat) shows up as an inline `enum` rather than
/// a `$ref`, which MCP clients render as a dropdown.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    let json_object = match schema.to_value() {
        serde_json::Value::Object(object) => object,
        other => {
            tracing::warn!(schema = %other, "Schema is not an object, using an empty one");
            JsonObject::new()
        }
    };

    Arc::new(json_object)
}
