use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A registered user of the social graph.
///
/// Identity is the `id` alone: two personas with the same id compare equal
/// and hash identically no matter what their other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    id: String,
    name: String,
    birth_date: NaiveDate,
    city: String,
    registration_date: NaiveDate,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        city: impl Into<String>,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date,
            city: city.into(),
            registration_date,
        }
    }

    /// Start a field-by-field construction; `build()` rejects absent fields.
    pub fn builder() -> PersonaBuilder {
        PersonaBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }
}

impl PartialEq for Persona {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Persona {}

impl Hash for Persona {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Friend-list order: name first, id as tiebreak.
///
/// Total over registered personas because ids are unique.
pub fn friend_order(a: &Persona, b: &Persona) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Default, Clone)]
pub struct PersonaBuilder {
    id: Option<String>,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
    city: Option<String>,
    registration_date: Option<NaiveDate>,
}

impl PersonaBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    pub fn build(self) -> Result<Persona> {
        Ok(Persona {
            id: self.id.ok_or_else(|| missing("id"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            birth_date: self.birth_date.ok_or_else(|| missing("birth_date"))?,
            city: self.city.ok_or_else(|| missing("city"))?,
            registration_date: self
                .registration_date
                .ok_or_else(|| missing("registration_date"))?,
        })
    }
}

fn missing(field: &str) -> GraphError {
    GraphError::invalid(format!("persona field `{}` is required", field))
}
