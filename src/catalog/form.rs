use crate::models::{
    parse_leading_int, to_count, Property, PropertyStatus, PropertyType, UnknownVariant,
};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Id handed to a new record: `PROP` followed by `existing + 1`, zero padded to 3 digits.
///
/// Only the current list length is consulted, so deleting a record and then
/// adding one can reuse an id that is still taken.
pub fn next_property_id(existing: usize) -> String {
    format!("PROP{:03}", existing + 1)
}

/// Editable text of one property record, shared by the add and edit flows.
/// Numeric fields are kept as typed and only coerced on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyForm {
    pub id: String,
    pub title: String,
    pub property_type: PropertyType,
    pub location: String,
    pub price: String,
    pub status: PropertyStatus,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub description: String,
    pub features: String,
    pub available_from: String,
    pub is_rental: bool,
}

impl PropertyForm {
    pub fn for_new(existing: usize) -> Self {
        Self {
            id: next_property_id(existing),
            ..Self::default()
        }
    }

    pub fn from_property(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            property_type: property.property_type,
            location: property.location.clone(),
            price: property.price.map(|p| p.to_string()).unwrap_or_default(),
            status: property.status,
            bedrooms: property.bedrooms.to_string(),
            bathrooms: property.bathrooms.to_string(),
            area: property.area.to_string(),
            description: property.description.clone(),
            features: property.features.clone(),
            available_from: property.available_from.clone(),
            is_rental: property.is_rental,
        }
    }

    /// Build the record to submit. Counts fall back to 0; the price is left
    /// empty when it is not a number.
    pub fn to_property(&self) -> Property {
        Property {
            id: self.id.clone(),
            title: self.title.clone(),
            property_type: self.property_type,
            location: self.location.clone(),
            price: parse_leading_int(&self.price),
            status: self.status,
            bedrooms: to_count(parse_leading_int(&self.bedrooms)),
            bathrooms: to_count(parse_leading_int(&self.bathrooms)),
            area: to_count(parse_leading_int(&self.area)),
            description: self.description.clone(),
            features: self.features.clone(),
            available_from: self.available_from.clone(),
            is_rental: self.is_rental,
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), FieldError> {
        match field {
            FormField::Id => return Err(FieldError::ReadOnlyId),
            FormField::Title => self.title = value.to_string(),
            FormField::Type => self.property_type = value.parse()?,
            FormField::Location => self.location = value.to_string(),
            FormField::Price => self.price = value.trim().to_string(),
            FormField::Status => self.status = value.parse()?,
            FormField::Bedrooms => self.bedrooms = value.trim().to_string(),
            FormField::Bathrooms => self.bathrooms = value.trim().to_string(),
            FormField::Area => self.area = value.trim().to_string(),
            FormField::Description => self.description = value.to_string(),
            FormField::Features => self.features = value.to_string(),
            FormField::AvailableFrom => {
                let value = value.trim();
                if !value.is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    return Err(FieldError::InvalidDate(value.to_string()));
                }
                self.available_from = value.to_string();
            }
            FormField::Rental => self.is_rental = parse_flag(value)?,
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool, FieldError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Ok(true),
        "no" | "n" | "false" | "off" | "0" => Ok(false),
        _ => Err(FieldError::InvalidFlag(value.to_string())),
    }
}

/// An open add or edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: PropertyForm,
    /// Id of the record being edited; `None` while adding
    pub editing_id: Option<String>,
}

impl FormState {
    pub fn adding(existing: usize) -> Self {
        Self {
            fields: PropertyForm::for_new(existing),
            editing_id: None,
        }
    }

    pub fn editing(property: &Property) -> Self {
        Self {
            fields: PropertyForm::from_property(property),
            editing_id: Some(property.id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Property"
        } else {
            "Add New Property"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Title,
    Type,
    Location,
    Price,
    Status,
    Bedrooms,
    Bathrooms,
    Area,
    Description,
    Features,
    AvailableFrom,
    Rental,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        Self::Id,
        Self::Title,
        Self::Type,
        Self::Location,
        Self::Price,
        Self::Status,
        Self::Bedrooms,
        Self::Bathrooms,
        Self::Area,
        Self::Description,
        Self::Features,
        Self::AvailableFrom,
        Self::Rental,
    ];

    /// Name used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Type => "type",
            Self::Location => "location",
            Self::Price => "price",
            Self::Status => "status",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::Area => "area",
            Self::Description => "description",
            Self::Features => "features",
            Self::AvailableFrom => "availableFrom",
            Self::Rental => "rental",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "Property ID",
            Self::Title => "Title *",
            Self::Type => "Type *",
            Self::Location => "Location *",
            Self::Price => "Price (₹) *",
            Self::Status => "Status",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Area => "Area (sqft)",
            Self::Description => "Description",
            Self::Features => "Features (comma separated)",
            Self::AvailableFrom => "Available From",
            Self::Rental => "This is a rental property",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        match wanted.as_str() {
            "available" | "from" => return Ok(Self::AvailableFrom),
            "isrental" => return Ok(Self::Rental),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("the property id cannot be changed")]
    ReadOnlyId,
    #[error(transparent)]
    InvalidVariant(#[from] UnknownVariant),
    #[error("'{0}' is not a date (use YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("'{0}' is not yes/no")]
    InvalidFlag(String),
}
