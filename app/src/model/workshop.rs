use atolye_backend::Document;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A partner workshop record, stored in the `workshops` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub owner: String,
    pub phone: String,
    /// Serialized as explicit `null` when empty so that clearing the
    /// address on edit deletes the stored field under merge semantics.
    #[serde(default)]
    pub address: Option<String>,
    pub is_active: bool,
    /// Reference code in the form `W-1234`. Assigned once when the
    /// workshop is created, never regenerated on edit.
    #[serde(default)]
    pub code: String,
}

impl Default for Workshop {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            owner: String::new(),
            phone: String::new(),
            address: None,
            is_active: true,
            code: String::new(),
        }
    }
}

impl Workshop {
    /// Case-insensitive substring match against name or owner.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.owner.to_lowercase().contains(&query)
    }
}

impl Document for Workshop {
    const COLLECTION: &'static str = "workshops";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Fresh workshop reference code: `W-` followed by four decimal digits.
pub fn new_workshop_code() -> String {
    format!("W-{}", rand::thread_rng().gen_range(1000..10000))
}
