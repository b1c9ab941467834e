//! Response normalization: turns the API's inconsistent envelopes into a
//! predictable [`Page`] for list endpoints or a single entity for detail endpoints.
//!
//! List envelopes are matched against an ordered table of [`ListShape`]
//! strategies. The first strategy that recognizes the envelope wins; if none
//! does, the result is an empty page and a warning is logged. Shape problems
//! never become errors for list endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Name of the field every entity is identified by.
pub const ID_FIELD: &str = "uuid";

/// Page and page size the caller asked for, used to fill in missing metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: None,
        }
    }
}

/// One page of a list endpoint, with metadata always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Raw items and whatever metadata a strategy found next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedList<'a> {
    pub items: &'a [Value],
    pub total: Option<u64>,
}

/// Envelope shapes recognized by [`normalize_list`], in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `[...]`
    BareArray,
    /// `{ "data": [...], "total": n }`
    DataArray,
    /// `{ "data": { "data": [...], "count": n } }`
    NestedData,
    /// `{ "data": { "roles": [...] } }`, else `{ "favoris": [...] }` at the top level
    SingleArrayField,
}

impl ListShape {
    pub const ORDER: [ListShape; 4] = [
        ListShape::BareArray,
        ListShape::DataArray,
        ListShape::NestedData,
        ListShape::SingleArrayField,
    ];

    pub fn extract<'a>(&self, raw: &'a Value) -> Option<ExtractedList<'a>> {
        match self {
            ListShape::BareArray => raw.as_array().map(|items| ExtractedList {
                items,
                total: None,
            }),
            ListShape::DataArray => {
                let items = raw.get("data")?.as_array()?;
                Some(ExtractedList {
                    items,
                    total: total_of(raw),
                })
            }
            ListShape::NestedData => {
                let inner = raw.get("data")?;
                let items = inner.get("data")?.as_array()?;
                Some(ExtractedList {
                    items,
                    total: total_of(inner).or_else(|| total_of(raw)),
                })
            }
            ListShape::SingleArrayField => raw
                .get("data")
                .and_then(Value::as_object)
                .and_then(|data| single_array_in(data, raw))
                .or_else(|| raw.as_object().and_then(|top| single_array_in(top, raw))),
        }
    }
}

// `data` is searched first; totals come from the container holding the array,
// then from the top level.
fn single_array_in<'a>(
    container: &'a Map<String, Value>,
    raw: &'a Value,
) -> Option<ExtractedList<'a>> {
    let items = single_array_field(container)?;
    Some(ExtractedList {
        items,
        total: total_of_map(container).or_else(|| total_of(raw)),
    })
}

fn single_array_field(map: &Map<String, Value>) -> Option<&[Value]> {
    let mut arrays = map.values().filter_map(Value::as_array);
    let first = arrays.next()?;
    if arrays.next().is_some() {
        return None;
    }
    Some(first.as_slice())
}

fn total_of(value: &Value) -> Option<u64> {
    value.as_object().and_then(total_of_map)
}

fn total_of_map(map: &Map<String, Value>) -> Option<u64> {
    number_field(map, "total").or_else(|| number_field(map, "count"))
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    match map.get(key)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn data_number_field(raw: &Value, key: &str) -> Option<u64> {
    raw.get("data")
        .and_then(Value::as_object)
        .and_then(|data| number_field(data, key))
}

/// Normalizes a list envelope into a [`Page`].
///
/// Items that do not deserialize into `T` are dropped with a warning.
pub fn normalize_list<T: DeserializeOwned>(raw: &Value, requested: PageRequest) -> Page<T> {
    let matched = ListShape::ORDER
        .iter()
        .find_map(|shape| shape.extract(raw).map(|list| (*shape, list)));

    let Some((shape, list)) = matched else {
        if !raw.is_null() {
            tracing::warn!(
                "Unrecognized list response shape, returning empty page: {}",
                shape_summary(raw)
            );
        }
        return Page::empty();
    };
    tracing::debug!(?shape, count = list.items.len(), "Normalized list response");

    let mut items = Vec::with_capacity(list.items.len());
    for (index, raw_item) in list.items.iter().enumerate() {
        match T::deserialize(raw_item) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!("Skipping list item {}: {}", index, e),
        }
    }

    let total = list.total.unwrap_or(list.items.len() as u64);
    let object = raw.as_object();
    let page = object
        .and_then(|m| number_field(m, "page"))
        .or_else(|| data_number_field(raw, "page"))
        .or(requested.page)
        .unwrap_or(1);
    let pages = object
        .and_then(|m| number_field(m, "pages"))
        .or_else(|| data_number_field(raw, "pages"))
        .or_else(|| {
            requested
                .limit
                .filter(|limit| *limit > 0)
                .map(|limit| total.div_ceil(limit))
        })
        .unwrap_or(1)
        .max(1);

    Page {
        items,
        total,
        page,
        pages,
    }
}

/// Normalizes a detail envelope into a single entity.
///
/// Returns [`Error::NotFound`] when no object carrying [`ID_FIELD`] is present,
/// and [`Error::MalformedResponse`] when one is found but does not fit `T`.
pub fn normalize_detail<T: DeserializeOwned>(raw: &Value) -> Result<T, Error> {
    let entity = locate_entity(raw).ok_or_else(|| {
        tracing::warn!("Detail response holds no entity: {}", shape_summary(raw));
        Error::NotFound { message: None }
    })?;
    T::deserialize(entity).map_err(|e| {
        tracing::error!("Failed to parse entity: {}", e);
        Error::MalformedResponse(e.to_string())
    })
}

fn locate_entity(raw: &Value) -> Option<&Value> {
    let has_id = |v: &Value| v.as_object().is_some_and(|m| has_id_value(m));
    match raw.get("data") {
        Some(data) if has_id(data) => Some(data),
        _ if has_id(raw) => Some(raw),
        _ => None,
    }
}

fn has_id_value(map: &Map<String, Value>) -> bool {
    map.get(ID_FIELD).is_some_and(|v| !v.is_null())
}

fn shape_summary(raw: &Value) -> String {
    match raw {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Array(_) => "array".to_string(),
        Value::Null => "null".to_string(),
        other => format!("scalar {}", other),
    }
}
