//! Response-shape contract sent as `responseSchema`.
//!
//! Gemini accepts an OpenAPI-style subset with upper-case type names. The
//! contract here is a top-level array of clip objects; field names come from
//! [`smartclip_models::fields`] so the schema, the prompt and the `Clip`
//! model stay in step.

use serde::{Serialize, Serializer};
use smartclip_models::fields;

/// Primitive and container types understood by `responseSchema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Array,
    Object,
    Number,
    String,
}

/// One node of the response schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_properties"
    )]
    pub properties: Vec<(&'static str, Schema)>,
    #[serde(rename = "propertyOrdering", skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'static str>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: Vec::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
        }
    }

    fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    fn string() -> Self {
        Self::of(SchemaType::String)
    }

    fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    fn object<const N: usize>(properties: [(&'static str, Schema); N]) -> Self {
        let names: Vec<&'static str> = properties.iter().map(|(name, _)| *name).collect();
        Self {
            properties: properties.into_iter().collect(),
            property_ordering: names.clone(),
            required: names,
            ..Self::of(SchemaType::Object)
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Property names marked as required, in declaration order.
    pub fn required_fields(&self) -> &[&'static str] {
        &self.required
    }

    /// Schema of a named property, if any.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, schema)| schema)
    }
}

/// Properties go out as a JSON object in declaration order.
fn serialize_properties<S>(
    properties: &[(&'static str, Schema)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(properties.iter().map(|(name, schema)| (name, schema)))
}

/// Schema for a single clip record.
pub fn clip_schema() -> Schema {
    Schema::object([
        (
            fields::CLIP_START,
            Schema::number().describe("The start time of the clip in seconds."),
        ),
        (
            fields::CLIP_END,
            Schema::number().describe("The end time of the clip in seconds."),
        ),
        (
            fields::CAPTIONS,
            Schema::object([
                (
                    fields::ENGLISH,
                    Schema::string().describe("The generated English caption for the clip."),
                ),
                (
                    fields::ARABIC,
                    Schema::string().describe("The generated Arabic caption for the clip."),
                ),
            ]),
        ),
        (
            fields::TITLE,
            Schema::string().describe("A catchy, viral-ready title for the clip."),
        ),
        (
            fields::HASHTAGS,
            Schema::array(Schema::string()).describe("An array of relevant hashtags."),
        ),
    ])
}

/// The full contract: an ordered array of clips.
pub fn response_schema() -> Schema {
    Schema::array(clip_schema())
}
