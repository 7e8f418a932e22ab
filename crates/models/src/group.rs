use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A band record as persisted in the `groups` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub formation_date: NaiveDate,
}

/// Create/update payload. `id` is only consulted on create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub genre: String,
    pub formation_date: NaiveDate,
}

impl Group {
    pub fn from_input(id: String, input: GroupInput) -> Self {
        Self {
            id,
            name: input.name,
            genre: input.genre,
            formation_date: input.formation_date,
        }
    }

    /// Overwrite the mutable fields; `id` is never touched.
    pub fn apply_update(&mut self, input: GroupInput) {
        self.name = input.name;
        self.genre = input.genre;
        self.formation_date = input.formation_date;
    }
}

impl GroupInput {
    /// The client-supplied id exactly as sent, unless it is missing or blank.
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Fresh identifier in the same format MongoDB assigns to `_id`.
pub fn generate_id() -> String {
    ObjectId::new().to_hex()
}
