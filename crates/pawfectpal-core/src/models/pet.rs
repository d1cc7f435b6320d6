//! Pet models.

use serde::{Deserialize, Serialize};

/// A pet record being evaluated for vaccine eligibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Local UUID - generated when the record is created
    pub id: String,
    /// Pet name
    pub name: String,
    /// Species (e.g., "dog", "cat")
    pub species: String,
    /// Breed
    pub breed: Option<String>,
    /// Date of birth (ISO-8601, e.g., "2023-04-01"); may be absent or
    /// malformed, in which case age is treated as zero
    pub birth_date: Option<String>,
    /// Owner/client name
    pub owner_name: Option<String>,
    /// Additional notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Pet {
    /// Create a new pet with required fields.
    pub fn new(name: String, species: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            species,
            breed: None,
            birth_date: None,
            owner_name: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Get the canonical species name (lowercase).
    pub fn canonical_species(&self) -> String {
        self.species.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet() {
        let pet = Pet::new("Max".into(), "dog".into());
        assert_eq!(pet.name, "Max");
        assert_eq!(pet.species, "dog");
        assert!(pet.birth_date.is_none());
        assert_eq!(pet.id.len(), 36); // UUID format
    }

    #[test]
    fn test_canonical_species() {
        let pet = Pet::new("Whiskers".into(), "Cat".into());
        assert_eq!(pet.canonical_species(), "cat");
    }
}
