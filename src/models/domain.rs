use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory record for a single advocate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advocate {
    pub id: i32,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: i32,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Advocate {
    /// Full display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Advocate fields supplied on insert; `id` and `createdAt` come from the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdvocate {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: i32,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl NewAdvocate {
    /// Attach database-assigned identity to produce a stored record
    pub fn into_advocate(self, id: i32, created_at: DateTime<Utc>) -> Advocate {
        Advocate {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties: self.specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
            created_at,
        }
    }
}
