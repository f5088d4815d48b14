//! Normalized schema model.
//!
//! Entities never point at each other: relations are expressed by name,
//! so the model is a plain tree owned by [`Schema`].

use serde::{Deserialize, Serialize};

/// Field name used as the primary key when no field is flagged `@id`.
pub const DEFAULT_ID_FIELD: &str = "id";

/// A parsed datamodel: models and enums in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub entities: Vec<Entity>,
    pub enums: Vec<Enum>,
}

impl Schema {
    /// Look up a model by exact name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Check whether a type name refers to a model of this schema.
    pub fn is_entity(&self, type_name: &str) -> bool {
        self.entity(type_name).is_some()
    }
}

/// A model (named record type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            fields: Vec::new(),
        }
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Name of the primary-key field: the first field flagged `is_id`,
    /// falling back to a field literally named `id`.
    pub fn id_field(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.is_id)
            .map(|f| f.name.as_str())
            .unwrap_or(DEFAULT_ID_FIELD)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Declared type name (`String`, `Int`, another model, an enum, ...).
    pub type_name: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl Field {
    /// A required scalar field with no flags.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_list: false,
            is_required: true,
            is_id: false,
            is_unique: false,
            documentation: None,
            relation: None,
        }
    }

    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }
}

/// Relation metadata on a field that references another model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub name: String,
    /// Local key fields (`fields: [...]`), empty on the back-relation side.
    #[serde(default)]
    pub from_fields: Vec<String>,
    /// Referenced key fields (`references: [...]`).
    #[serde(default)]
    pub to_fields: Vec<String>,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from_fields: Vec::new(),
            to_fields: Vec::new(),
        }
    }

    /// Default relation name for two models: names sorted and joined by `To`.
    pub fn default_name(a: &str, b: &str) -> String {
        if a <= b {
            format!("{a}To{b}")
        } else {
            format!("{b}To{a}")
        }
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}
