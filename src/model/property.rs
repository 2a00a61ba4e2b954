use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Start/end of a Notion date property. `end` is only set for ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: Option<String>,
}

/// A Notion property decoded by its `type` tag.
///
/// Only the variants the exporter reads are modelled; every other tag lands in
/// `Unknown` and extracts to nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(String),
    RichText(String),
    Select(Option<String>),
    MultiSelect(Vec<String>),
    Date(Option<DateRange>),
    Number(Option<Number>),
    Status(Option<String>),
    Relation(Vec<String>),
    Unknown,
}

/// A property whose tag is known but whose payload has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed `{kind}` property: {reason}")]
pub struct MalformedProperty {
    pub kind: String,
    pub reason: String,
}

impl MalformedProperty {
    fn new(kind: &str, reason: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }
}

/// Flat value stored in an exported task slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(Number),
    Date(DateRange),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Collapse a date range to its start; other values pass through.
    pub fn into_date_start(self) -> FieldValue {
        match self {
            FieldValue::Date(range) => FieldValue::Text(range.start),
            other => other,
        }
    }
}

fn payload<'a>(obj: &'a Map<String, Value>, kind: &str) -> Option<&'a Value> {
    obj.get(kind).filter(|v| !v.is_null())
}

fn concat_plain_text(kind: &str, value: Option<&Value>) -> Result<String, MalformedProperty> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let fragments = value
        .as_array()
        .ok_or_else(|| MalformedProperty::new(kind, "expected an array of text fragments"))?;
    fragments
        .iter()
        .map(|fragment| {
            fragment
                .get("plain_text")
                .and_then(Value::as_str)
                .ok_or_else(|| MalformedProperty::new(kind, "text fragment without `plain_text`"))
        })
        .collect()
}

fn option_name(kind: &str, value: Option<&Value>) -> Result<Option<String>, MalformedProperty> {
    let Some(value) = value else {
        return Ok(None);
    };
    value
        .get("name")
        .and_then(Value::as_str)
        .map(|name| Some(name.to_string()))
        .ok_or_else(|| MalformedProperty::new(kind, "option without `name`"))
}

fn collect_strings(
    kind: &str,
    value: Option<&Value>,
    key: &str,
) -> Result<Vec<String>, MalformedProperty> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| MalformedProperty::new(kind, "expected an array"))?;
    items
        .iter()
        .map(|item| {
            item.get(key)
                .and_then(Value::as_str)
                .map(String::from)
                .ok_or_else(|| MalformedProperty::new(kind, format!("entry without `{key}`")))
        })
        .collect()
}

fn date_range(value: Option<&Value>) -> Result<Option<DateRange>, MalformedProperty> {
    let Some(value) = value else {
        return Ok(None);
    };
    let start = value
        .get("start")
        .and_then(Value::as_str)
        .ok_or_else(|| MalformedProperty::new("date", "date without `start`"))?;
    let end = value.get("end").and_then(Value::as_str).map(String::from);
    Ok(Some(DateRange {
        start: start.to_string(),
        end,
    }))
}

impl PropertyValue {
    /// Decode one entry of a page's `properties` object.
    ///
    /// A missing or unrecognized `type` yields `Unknown`. A recognized tag with
    /// a broken payload is an error so the caller can decide how loud to be.
    pub fn parse(value: &Value) -> Result<PropertyValue, MalformedProperty> {
        let Some(obj) = value.as_object() else {
            return Ok(PropertyValue::Unknown);
        };
        let Some(kind) = obj.get("type").and_then(Value::as_str) else {
            return Ok(PropertyValue::Unknown);
        };
        let inner = payload(obj, kind);

        let parsed = match kind {
            "title" => PropertyValue::Title(concat_plain_text(kind, inner)?),
            "rich_text" => PropertyValue::RichText(concat_plain_text(kind, inner)?),
            "select" => PropertyValue::Select(option_name(kind, inner)?),
            "status" => PropertyValue::Status(option_name(kind, inner)?),
            "multi_select" => PropertyValue::MultiSelect(collect_strings(kind, inner, "name")?),
            "relation" => PropertyValue::Relation(collect_strings(kind, inner, "id")?),
            "date" => PropertyValue::Date(date_range(inner)?),
            "number" => match inner {
                None => PropertyValue::Number(None),
                Some(Value::Number(n)) => PropertyValue::Number(Some(n.clone())),
                Some(_) => return Err(MalformedProperty::new(kind, "expected a number")),
            },
            _ => PropertyValue::Unknown,
        };
        Ok(parsed)
    }

    pub fn extract(self) -> Option<FieldValue> {
        match self {
            PropertyValue::Title(text) | PropertyValue::RichText(text) => {
                Some(FieldValue::Text(text))
            }
            PropertyValue::Select(name) | PropertyValue::Status(name) => {
                name.map(FieldValue::Text)
            }
            PropertyValue::MultiSelect(names) => Some(FieldValue::List(names)),
            PropertyValue::Relation(ids) => Some(FieldValue::List(ids)),
            PropertyValue::Date(range) => range.map(FieldValue::Date),
            PropertyValue::Number(n) => n.map(FieldValue::Number),
            PropertyValue::Unknown => None,
        }
    }
}
