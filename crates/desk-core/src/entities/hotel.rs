use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Year substituted for a missing or implausible `established_year`.
pub const DEFAULT_ESTABLISHED_YEAR: i32 = 2000;

/// A hotel property in the deduplicated hotel list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Hotel {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub established_year: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Hotel {
    /// Composite identity key used to detect duplicates across records that
    /// share no primary key.
    #[must_use]
    pub fn identity_key(&self) -> String {
        Self::key_for(&self.name, &self.address, &self.city)
    }

    /// `lower(name)_lower(address)_lower(city)`, each part trimmed.
    #[must_use]
    pub fn key_for(name: &str, address: &str, city: &str) -> String {
        format!(
            "{}_{}_{}",
            name.trim().to_lowercase(),
            address.trim().to_lowercase(),
            city.trim().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_ignores_case_and_padding() {
        assert_eq!(Hotel::key_for("Grand", "1 Main", "NY"), "grand_1 main_ny");
        assert_eq!(
            Hotel::key_for(" grand ", "1 MAIN", "ny"),
            Hotel::key_for("Grand", "1 Main", "NY")
        );
    }
}
