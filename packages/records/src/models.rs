//! # Employee record models
//!
//! Defines the shapes exchanged with the remote record store. These types are
//! `Serialize + Deserialize` so they can be sent as request bodies and read
//! back from responses without an intermediate representation.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Employee`] | A record as returned by the store, including its `_id`. `address` and `contact_methods` are optional because the store does not guarantee them. |
//! | [`EmployeeDraft`] | The request body for create and update calls: every field the client owns, never the id. |
//! | [`Address`] | The nested postal address (`line`, `city`, `country`, `zip_code`). |
//! | [`ContactMethod`] | One `(contact_method, value)` pair. |
//! | [`ContactKind`] | The kind of a contact method. `EMAIL` and `PHONE` are known; anything else is preserved verbatim as [`ContactKind::Other`]. |
//!
//! ## Reading records
//!
//! The store does not enforce a schema, so records are read leniently. Text
//! fields accept `null` (empty) and numbers or booleans (their text form). An
//! `address` that is not an object, or `contact_methods` that is not an array,
//! reads as absent. A contact entry with no kind gets [`ContactKind::missing`],
//! which is never complete and so never written back.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An employee record as stored remotely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier, serialized as `_id`.
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_address"
    )]
    pub address: Option<Address>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_contacts"
    )]
    pub contact_methods: Option<Vec<ContactMethod>>,
}

impl Employee {
    /// Address to display; empty fields when the store omitted it.
    pub fn address_or_default(&self) -> Address {
        self.address.clone().unwrap_or_default()
    }

    /// Contact methods to display; empty when the store omitted them.
    pub fn contact_methods_or_default(&self) -> &[ContactMethod] {
        self.contact_methods.as_deref().unwrap_or(&[])
    }
}

/// Request body for create and overwrite calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub address: Address,
    pub contact_methods: Vec<ContactMethod>,
}

/// Postal address of an employee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_text")]
    pub line: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub zip_code: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.line, self.city, self.country, self.zip_code
        )
    }
}

/// A single way of contacting an employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    #[serde(default = "ContactKind::missing", deserialize_with = "lenient_kind")]
    pub contact_method: ContactKind,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: String,
}

impl ContactMethod {
    pub fn new(contact_method: ContactKind, value: impl Into<String>) -> Self {
        Self {
            contact_method,
            value: value.into(),
        }
    }

    /// Both the kind and the value are filled in.
    pub fn is_complete(&self) -> bool {
        !self.contact_method.as_str().is_empty() && !self.value.is_empty()
    }
}

/// Kind of a contact method, serialized as its upper-case wire name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactKind {
    Email,
    Phone,
    /// A kind this client does not know, kept as received.
    Other(String),
}

impl ContactKind {
    /// Kinds offered when editing a record.
    pub const SELECTABLE: [ContactKind; 2] = [ContactKind::Email, ContactKind::Phone];

    /// Kind of a stored entry that carried none.
    pub fn missing() -> Self {
        ContactKind::Other(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContactKind::Email => "EMAIL",
            ContactKind::Phone => "PHONE",
            ContactKind::Other(other) => other,
        }
    }

    /// Human label for selectors.
    pub fn label(&self) -> &str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Other(other) => other,
        }
    }

    /// URI scheme for clickable links, if the kind has one.
    pub fn link_scheme(&self) -> Option<&'static str> {
        match self {
            ContactKind::Email => Some("mailto"),
            ContactKind::Phone => Some("tel"),
            ContactKind::Other(_) => None,
        }
    }
}

impl From<String> for ContactKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "EMAIL" => ContactKind::Email,
            "PHONE" => ContactKind::Phone,
            _ => ContactKind::Other(value),
        }
    }
}

impl From<&str> for ContactKind {
    fn from(value: &str) -> Self {
        ContactKind::from(value.to_string())
    }
}

impl From<ContactKind> for String {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ContactKind, D::Error> {
    Ok(ContactKind::from(scalar_text(Value::deserialize(deserializer)?)))
}

fn lenient_address<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Address>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn lenient_contacts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<ContactMethod>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_employee_reads_store_id() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "66ab01",
            "name": "Jane",
            "address": {"line": "1 Main St", "city": "Springfield", "country": "US", "zip_code": "00001"},
            "contact_methods": [{"contact_method": "PHONE", "value": "555-0100"}]
        }))
        .unwrap();

        assert_eq!(employee.id, "66ab01");
        assert_eq!(employee.address_or_default().city, "Springfield");
        assert_eq!(
            employee.contact_methods_or_default(),
            &[ContactMethod::new(ContactKind::Phone, "555-0100")]
        );
    }

    #[test]
    fn test_employee_tolerates_missing_sections() {
        let employee: Employee =
            serde_json::from_value(json!({"_id": "x", "name": "Bare"})).unwrap();

        assert!(employee.address.is_none());
        assert!(employee.contact_methods.is_none());
        assert_eq!(employee.address_or_default(), Address::default());
        assert!(employee.contact_methods_or_default().is_empty());
    }

    #[test]
    fn test_unknown_contact_kind_is_preserved() {
        let method: ContactMethod =
            serde_json::from_value(json!({"contact_method": "FAX", "value": "123"})).unwrap();

        assert_eq!(method.contact_method, ContactKind::Other("FAX".to_string()));
        assert_eq!(method.contact_method.link_scheme(), None);
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"contact_method": "FAX", "value": "123"})
        );
    }

    #[test]
    fn test_scalar_fields_read_leniently() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": 17,
            "name": null,
            "address": {"line": "1 Main St", "city": null, "country": "US", "zip_code": 12345},
            "contact_methods": [{"contact_method": "PHONE", "value": 5550100}]
        }))
        .unwrap();

        assert_eq!(employee.id, "17");
        assert_eq!(employee.name, "");
        assert_eq!(
            employee.address_or_default(),
            Address {
                line: "1 Main St".to_string(),
                city: String::new(),
                country: "US".to_string(),
                zip_code: "12345".to_string(),
            }
        );
        assert_eq!(
            employee.contact_methods_or_default(),
            &[ContactMethod::new(ContactKind::Phone, "5550100")]
        );
    }

    #[test]
    fn test_malformed_sections_read_as_absent() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "x",
            "name": "Odd",
            "address": "somewhere",
            "contact_methods": {"contact_method": "EMAIL"}
        }))
        .unwrap();

        assert!(employee.address.is_none());
        assert!(employee.contact_methods.is_none());
    }

    #[test]
    fn test_non_object_contact_entries_are_skipped() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "x",
            "contact_methods": ["a@b.c", {"contact_method": "EMAIL", "value": "a@b.c"}, null]
        }))
        .unwrap();

        assert_eq!(
            employee.contact_methods_or_default(),
            &[ContactMethod::new(ContactKind::Email, "a@b.c")]
        );
    }

    #[test]
    fn test_absent_or_null_kind_reads_as_missing() {
        let absent: ContactMethod = serde_json::from_value(json!({"value": "555"})).unwrap();
        let null: ContactMethod =
            serde_json::from_value(json!({"contact_method": null, "value": "555"})).unwrap();

        for method in [absent, null] {
            assert_eq!(method.contact_method, ContactKind::missing());
            assert_eq!(method.contact_method.link_scheme(), None);
            assert!(!method.is_complete());
        }
    }

    #[test]
    fn test_contact_method_completeness() {
        assert!(ContactMethod::new(ContactKind::Email, "a@b.c").is_complete());
        assert!(!ContactMethod::new(ContactKind::Email, "").is_complete());
        assert!(!ContactMethod::new(ContactKind::missing(), "555").is_complete());
    }

    #[test]
    fn test_address_display() {
        let address = Address {
            line: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            country: "US".to_string(),
            zip_code: "00001".to_string(),
        };
        assert_eq!(address.to_string(), "1 Main St, Springfield, US, 00001");
    }
}
