use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

// Same shape the browser accepts for <input type="email">.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Custom,
    Brochure,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Custom, Category::Brochure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Custom => "custom",
            Category::Brochure => "brochure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Custom => "Want to order something custom",
            Category::Brochure => "Want to browse brochure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "custom" => Ok(Category::Custom),
            "brochure" => Ok(Category::Brochure),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Free-text fields of the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderField {
    Name,
    Phone,
    Address,
    Email,
    CustomDescription,
}

impl OrderField {
    /// The multipart field name the form processor receives.
    pub fn form_name(&self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Phone => "phone",
            OrderField::Address => "address",
            OrderField::Email => "email",
            OrderField::CustomDescription => "customDescription",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Name => "Name",
            OrderField::Phone => "Phone Number",
            OrderField::Address => "Address",
            OrderField::Email => "Email",
            OrderField::CustomDescription => "Custom Print Description",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please select what you would like")]
    MissingCategory,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Unknown order type: {0}")]
    UnknownCategory(String),
}

/// Flattened multipart body: ordered `(field, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub category: Option<Category>,
    pub custom_description: String,
}

impl OrderRequest {
    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
        if category != Category::Custom {
            self.custom_description.clear();
        }
    }

    pub fn set_field(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::Name => self.name = value,
            OrderField::Phone => self.phone = value,
            OrderField::Address => self.address = value,
            OrderField::Email => self.email = value,
            OrderField::CustomDescription => self.custom_description = value,
        }
    }

    pub fn field(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Phone => &self.phone,
            OrderField::Address => &self.address,
            OrderField::Email => &self.email,
            OrderField::CustomDescription => &self.custom_description,
        }
    }

    /// Visibility and required-ness of the description field are the same
    /// predicate.
    pub fn description_required(&self) -> bool {
        self.category == Some(Category::Custom)
    }

    /// Mirrors the `required` and `type="email"` constraints on the rendered
    /// inputs and reports the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [OrderField::Name, OrderField::Phone, OrderField::Address, OrderField::Email] {
            if self.field(field).trim().is_empty() {
                return Err(ValidationError::Missing(field.label()));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.category.is_none() {
            return Err(ValidationError::MissingCategory);
        }
        if self.description_required() && self.custom_description.trim().is_empty() {
            return Err(ValidationError::Missing(OrderField::CustomDescription.label()));
        }
        Ok(())
    }

    pub fn build_payload(&self) -> FormPayload {
        let category = self.category.map(|c| c.as_str()).unwrap_or_default();
        let mut payload = FormPayload::default();

        payload.push(OrderField::Name.form_name(), &self.name);
        payload.push(OrderField::Phone.form_name(), &self.phone);
        payload.push(OrderField::Address.form_name(), &self.address);
        payload.push(OrderField::Email.form_name(), self.email.trim());
        payload.push("orderType", category);
        if self.description_required() {
            payload.push(OrderField::CustomDescription.form_name(), &self.custom_description);
        }
        payload.push("form_type", category);
        payload.push("access_key", config::get_form_access_key());
        payload
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}
