use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A lead-capture record as exchanged with the record store.
///
/// Optional fields are always present as strings; an absent key or a `null`
/// reads back as `""`, and a number or boolean reads back as its JSON text.
/// `createdAt` is kept in whatever shape the store returned. Keys the store
/// adds that we don't model are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(
        default,
        deserialize_with = "loose_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub additional_info: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub roles: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub budget: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub talents: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub persona: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}

fn loose_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Ok(Some(other.to_string())),
    }
}

/// The user-editable fields of a [`Submission`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Phone,
    Email,
    AdditionalInfo,
    Roles,
    Budget,
    Talents,
    Persona,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::Phone,
        Field::Email,
        Field::AdditionalInfo,
        Field::Roles,
        Field::Budget,
        Field::Talents,
        Field::Persona,
    ];

    /// Fields that must be non-blank before a record is created or updated.
    pub const REQUIRED: [Field; 4] = [Field::FullName, Field::Phone, Field::Email, Field::Roles];

    /// Wire name, as used in JSON bodies and HTML form inputs.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::AdditionalInfo => "additionalInfo",
            Field::Roles => "roles",
            Field::Budget => "budget",
            Field::Talents => "talents",
            Field::Persona => "persona",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::AdditionalInfo => "Additional Info",
            Field::Roles => "Roles",
            Field::Budget => "Budget",
            Field::Talents => "Talents",
            Field::Persona => "Persona",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "John Doe",
            Field::Phone => "+1 (555) 000-0000",
            Field::Email => "test@example.com",
            Field::AdditionalInfo => "Any additional information...",
            Field::Roles => "e.g., Developer, Designer",
            Field::Budget => "e.g., 100cr",
            Field::Talents => "e.g., MultiTask",
            Field::Persona => "e.g., Tech Professional",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }

    pub fn required_message(self) -> String {
        match self {
            Field::FullName => "Full name is required".to_string(),
            Field::AdditionalInfo => "Additional info is required".to_string(),
            other => format!("{} is required", other.label()),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Submission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::AdditionalInfo => &self.additional_info,
            Field::Roles => &self.roles,
            Field::Budget => &self.budget,
            Field::Talents => &self.talents,
            Field::Persona => &self.persona,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::AdditionalInfo => self.additional_info = value,
            Field::Roles => self.roles = value,
            Field::Budget => self.budget = value,
            Field::Talents => self.talents = value,
            Field::Persona => self.persona = value,
        }
    }

    /// Display value for a card: empty fields render as `-`.
    pub fn display(&self, field: Field) -> &str {
        let value = self.get(field);
        if value.is_empty() { "-" } else { value }
    }

    /// True when every user-editable field matches `other`.
    pub fn same_fields(&self, other: &Submission) -> bool {
        Field::ALL.iter().all(|f| self.get(*f) == other.get(*f))
    }
}
