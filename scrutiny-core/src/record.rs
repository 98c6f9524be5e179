// Record adapter over the two supported input shapes

use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// The record under validation: a parsed JSON document or a flat map of
/// form fields, read through one string accessor.
///
/// [`Record::get`] never fails: a missing key, a non-object document, or a
/// value with no scalar string form all read as the empty string, so an
/// absent field and a present-but-empty field are indistinguishable
/// downstream.
#[derive(Debug, Clone)]
pub enum Record {
    /// A structured document; scalar leaves are coerced to strings.
    Document(Value),
    /// Decoded form-post fields.
    Form(HashMap<String, String>),
}

impl Record {
    /// The current string value of `key`.
    pub fn get(&self, key: &str) -> Cow<'_, str> {
        match self {
            Record::Document(doc) => match doc.get(key) {
                Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
                Some(Value::Number(n)) => Cow::Owned(n.to_string()),
                Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
                _ => Cow::Borrowed(""),
            },
            Record::Form(fields) => fields
                .get(key)
                .map_or(Cow::Borrowed(""), |s| Cow::Borrowed(s.as_str())),
        }
    }
}

impl From<Value> for Record {
    fn from(doc: Value) -> Self {
        Record::Document(doc)
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(fields: HashMap<String, String>) -> Self {
        Record::Form(fields)
    }
}
