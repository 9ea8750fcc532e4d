//! Type Schemas
//!
//! Per-type field and edge-label metadata. Each object type declares which
//! checkbox/radio/number/date fields its nodes carry and which edge labels
//! may hang children off it. The update paths validate every field write
//! against this schema, and node creation materializes the schema's default
//! property map.
//!
//! Schemas are served through the injected [`TypeSchemaProvider`] trait
//! rather than a process-global registry, so tests can swap in fakes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A boolean flag field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxField {
    pub caption: String,
    pub key_name: String,
}

/// One selectable option of a radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    pub label: String,
    pub value: String,
}

/// A single-choice field with a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioField {
    pub caption: String,
    pub key_name: String,
    pub options: Vec<RadioOption>,
}

/// A bounded numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    pub caption: String,
    pub key_name: String,
    pub default: i64,
    pub min_value: i64,
    pub max_value: i64,
}

/// A date and/or time field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateField {
    pub caption: String,
    pub key_name: String,
    pub has_date: bool,
    pub has_time: bool,
}

/// Field and edge-label metadata for one object type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub checkbox_fields: Vec<CheckboxField>,
    pub radio_fields: Vec<RadioField>,
    pub number_fields: Vec<NumberField>,
    pub date_fields: Vec<DateField>,
    /// Edge labels under which children may attach to nodes of this type.
    pub edge_labels: Vec<String>,
}

impl TypeSchema {
    /// Whether `label` is a permitted child edge label for this type.
    pub fn allows_edge_label(&self, label: &str) -> bool {
        self.edge_labels.iter().any(|l| l == label)
    }

    pub fn checkbox(&self, key_name: &str) -> Option<&CheckboxField> {
        self.checkbox_fields.iter().find(|f| f.key_name == key_name)
    }

    pub fn radio(&self, key_name: &str) -> Option<&RadioField> {
        self.radio_fields.iter().find(|f| f.key_name == key_name)
    }

    pub fn number(&self, key_name: &str) -> Option<&NumberField> {
        self.number_fields.iter().find(|f| f.key_name == key_name)
    }

    /// Materialize the default property map for a fresh node of this type:
    /// checkboxes false, radios at their first option, numbers at their
    /// default, dates with empty date/time slots.
    pub fn default_properties(&self) -> Map<String, Value> {
        let mut props = Map::new();
        for field in &self.checkbox_fields {
            props.insert(field.key_name.clone(), Value::Bool(false));
        }
        for field in &self.radio_fields {
            let value = field
                .options
                .first()
                .map(|o| Value::String(o.value.clone()))
                .unwrap_or(Value::Null);
            props.insert(field.key_name.clone(), value);
        }
        for field in &self.number_fields {
            props.insert(field.key_name.clone(), json!(field.default));
        }
        for field in &self.date_fields {
            props.insert(field.key_name.clone(), json!({"date": null, "time": null}));
        }
        props
    }
}

/// Lookup table mapping object type names to their schemas.
///
/// Injected into the services that validate writes; the core never consults
/// a global registry.
pub trait TypeSchemaProvider: Send + Sync {
    /// Schema for `object_type`. Unknown types get an empty schema.
    fn schema_for(&self, object_type: &str) -> TypeSchema;
}

/// Built-in schema catalog for the standard object types.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardSchemaProvider;

impl TypeSchemaProvider for StandardSchemaProvider {
    fn schema_for(&self, object_type: &str) -> TypeSchema {
        let mut schema = match object_type.to_uppercase().as_str() {
            "GOAL" | "REMINDER" | "MEETING" => goal_schema(),
            "EVENT" | "INSIGHT" | "VISION" => event_schema(),
            "STATE" => state_schema(),
            "POLICY" => labeled_schema(&["Context", "Objectives", "Response", "Experiences"]),
            "REVIEW" => labeled_schema(&["Outcomes", "Policies", "Learnings"]),
            "SUPPLY" => labeled_schema(&["Context", "Options", "Experiences"]),
            "PERIOD" => labeled_schema(&["Context", "Objectives", "Policies", "Events"]),
            "PERSON" => labeled_schema(&[
                "Context",
                "Objectives",
                "Policies",
                "Events",
                "Feelings",
                "Experiences",
            ]),
            "EXPENSE" => labeled_schema(&["Payments"]),
            "PLAN" => labeled_schema(&["Parts", "Outcomes"]),
            "DECISION" => labeled_schema(&[
                "Context",
                "Feelings",
                "Objectives",
                "Options",
                "Analysis",
                "Decision",
            ]),
            _ => TypeSchema::default(),
        };

        // Every type except THOUGHT tracks an attention level.
        if !object_type.eq_ignore_ascii_case("THOUGHT") {
            schema.number_fields.insert(0, attention_field());
        }
        schema
    }
}

/// Base edge labels shared by all typed nodes.
const BASE_LABELS: [&str; 2] = ["Notes", "Related"];

fn labeled_schema(labels: &[&str]) -> TypeSchema {
    TypeSchema {
        edge_labels: labels
            .iter()
            .chain(BASE_LABELS.iter())
            .map(|l| l.to_string())
            .collect(),
        ..TypeSchema::default()
    }
}

fn attention_field() -> NumberField {
    NumberField {
        caption: "Attention".to_string(),
        key_name: "attention".to_string(),
        default: 0,
        min_value: 0,
        max_value: 100,
    }
}

fn goal_schema() -> TypeSchema {
    let mut schema = labeled_schema(&["Parts", "Effects", "History"]);
    schema.checkbox_fields = ["Urgent", "Critical", "Needs Decision", "Active"]
        .iter()
        .map(|key| CheckboxField {
            caption: key.to_string(),
            key_name: key.to_string(),
        })
        .collect();
    schema.radio_fields = vec![
        RadioField {
            caption: "Status".to_string(),
            key_name: "status".to_string(),
            options: vec![
                radio_option("Open", "open"),
                radio_option("Closed", "closed"),
                radio_option("In Progress", "in_progress"),
            ],
        },
        RadioField {
            caption: "Priority".to_string(),
            key_name: "priority".to_string(),
            options: vec![
                radio_option("Low", "low"),
                radio_option("Medium", "medium"),
                radio_option("High", "high"),
            ],
        },
    ];
    schema
}

fn event_schema() -> TypeSchema {
    let mut schema = labeled_schema(&["Feelings", "Outcomes"]);
    schema.radio_fields = vec![
        RadioField {
            caption: "Evaluation".to_string(),
            key_name: "evaluation".to_string(),
            options: vec![
                radio_option("Positive", "positive"),
                radio_option("Negative", "negative"),
                radio_option("Neutral", "neutral"),
            ],
        },
        RadioField {
            caption: "Event Size".to_string(),
            key_name: "event_size".to_string(),
            options: vec![
                radio_option("Small", "small"),
                radio_option("Medium", "medium"),
                radio_option("Large", "large"),
            ],
        },
    ];
    schema
}

fn state_schema() -> TypeSchema {
    let mut schema = labeled_schema(&["Parts", "Evaluation", "Options"]);
    schema.number_fields = vec![
        NumberField {
            caption: "Polarity".to_string(),
            key_name: "polarity".to_string(),
            default: 0,
            min_value: -100,
            max_value: 100,
        },
        NumberField {
            caption: "Probability".to_string(),
            key_name: "probability".to_string(),
            default: 0,
            min_value: 0,
            max_value: 100,
        },
    ];
    schema
}

fn radio_option(label: &str, value: &str) -> RadioOption {
    RadioOption {
        label: label.to_string(),
        value: value.to_string(),
    }
}
