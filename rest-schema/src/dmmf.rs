//! Reader for DMMF datamodel JSON documents.
//!
//! Accepts either the bare datamodel (`{"models": [...], "enums": [...]}`)
//! or a full DMMF document that nests it under `"datamodel"`.

use serde::{Deserialize, de::Error as _};

use crate::{
    Result,
    error::SourceContext,
    model::{Entity, Enum, Field, Relation, Schema},
};

/// Either shape of document: a full DMMF with `datamodel`, or the bare
/// datamodel with `models` at the root.
#[derive(Deserialize)]
struct RawDocument {
    datamodel: Option<RawDatamodel>,
    models: Option<Vec<RawModel>>,
    #[serde(default)]
    enums: Vec<RawEnum>,
}

#[derive(Deserialize)]
struct RawDatamodel {
    models: Vec<RawModel>,
    #[serde(default)]
    enums: Vec<RawEnum>,
}

#[derive(Deserialize)]
struct RawModel {
    name: String,
    documentation: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    is_list: bool,
    #[serde(default)]
    is_required: bool,
    #[serde(default)]
    is_id: bool,
    #[serde(default)]
    is_unique: bool,
    documentation: Option<String>,
    relation_name: Option<String>,
    relation_from_fields: Option<Vec<String>>,
    relation_to_fields: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawEnum {
    name: String,
    #[serde(default)]
    values: Vec<RawEnumValue>,
}

#[derive(Deserialize)]
struct RawEnumValue {
    name: String,
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        let relation = raw.relation_name.map(|name| Relation {
            name,
            from_fields: raw.relation_from_fields.unwrap_or_default(),
            to_fields: raw.relation_to_fields.unwrap_or_default(),
        });
        Field {
            name: raw.name,
            type_name: raw.type_name,
            is_list: raw.is_list,
            is_required: raw.is_required,
            is_id: raw.is_id,
            is_unique: raw.is_unique,
            documentation: raw.documentation,
            relation,
        }
    }
}

/// Parse a DMMF JSON document into a [`Schema`].
pub fn parse_dmmf(content: &str, filename: &str) -> Result<Schema> {
    let ctx = SourceContext::new(content, filename);
    let document: RawDocument = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
    let datamodel = match document {
        RawDocument {
            datamodel: Some(datamodel),
            ..
        } => datamodel,
        RawDocument {
            models: Some(models),
            enums,
            ..
        } => RawDatamodel { models, enums },
        _ => return Err(ctx.json_error(serde_json::Error::missing_field("models"))),
    };

    let entities = datamodel
        .models
        .into_iter()
        .map(|model| Entity {
            name: model.name,
            documentation: model.documentation,
            fields: model.fields.into_iter().map(Field::from).collect(),
        })
        .collect();

    let enums = datamodel
        .enums
        .into_iter()
        .map(|e| Enum {
            name: e.name,
            values: e.values.into_iter().map(|v| v.name).collect(),
        })
        .collect();

    Ok(Schema { entities, enums })
}
