use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A queryable field of an address.
///
/// Every search predicate is expressed against this enum, so there is no
/// by-name field access anywhere below the prompt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Street,
    City,
    State,
    ZipCode,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Street => "Street",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "Zip Code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A postal address. All fields are free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(street: String, city: String, state: String, zip_code: String) -> Self {
        Self {
            street,
            city,
            state,
            zip_code,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
        }
    }
}

/// Repository-owned bookkeeping for one record. The id is assigned at insert
/// and never changes; it is the only valid key for update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    pub metadata: Metadata,
    pub address: Address,
}

impl AddressRecord {
    pub fn new(address: Address) -> Self {
        Self {
            metadata: Metadata::new(),
            address,
        }
    }
}

/// A partial edit. `None` means "leave this field unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl AddressPatch {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
    }

    pub fn apply(&self, address: &mut Address) {
        if let Some(street) = &self.street {
            address.street = street.clone();
        }
        if let Some(city) = &self.city {
            address.city = city.clone();
        }
        if let Some(state) = &self.state {
            address.state = state.clone();
        }
        if let Some(zip_code) = &self.zip_code {
            address.zip_code = zip_code.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_get_maps_to_the_right_column() {
        let address = Address::new("1 Elm".into(), "Ames".into(), "IA".into(), "50010".into());
        assert_eq!(address.get(Field::Street), "1 Elm");
        assert_eq!(address.get(Field::City), "Ames");
        assert_eq!(address.get(Field::State), "IA");
        assert_eq!(address.get(Field::ZipCode), "50010");
    }

    #[test]
    fn empty_patch_leaves_address_untouched() {
        let mut address = Address::new("1 Elm".into(), "Ames".into(), "IA".into(), "50010".into());
        let before = address.clone();
        let patch = AddressPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut address);
        assert_eq!(address, before);
    }

    #[test]
    fn patch_overwrites_only_changed_fields() {
        let mut address = Address::new("1 Elm".into(), "Ames".into(), "IA".into(), "50010".into());
        let patch = AddressPatch {
            city: Some("Boone".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut address);
        assert_eq!(address.street, "1 Elm");
        assert_eq!(address.city, "Boone");
        assert_eq!(address.state, "IA");
        assert_eq!(address.zip_code, "50010");
    }
}
