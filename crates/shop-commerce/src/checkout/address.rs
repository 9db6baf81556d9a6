//! Shipping address types.

use serde::{Deserialize, Serialize};

/// Country used when the customer leaves it unchanged.
pub const DEFAULT_COUNTRY: &str = "US";

/// Where and to whom an order ships.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Recipient's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal/ZIP code.
    pub postal_code: String,
    /// Country code (e.g., "US").
    pub country: String,
    /// Phone number.
    pub phone: String,
}

impl ShippingDetails {
    /// A blank form prefilled with the customer's name and email.
    pub fn prefilled(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Labels of the fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full name", &self.full_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("postal code", &self.postal_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        [
            self.full_name.clone(),
            self.address.clone(),
            format!("{}, {} {}", self.city, self.state, self.postal_code),
            self.country.clone(),
        ]
        .join("\n")
    }
}

impl Default for ShippingDetails {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            phone: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ShippingDetails {
        ShippingDetails {
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            phone: "555-0100".into(),
            ..ShippingDetails::prefilled("Regular User", "user@example.com")
        }
    }

    #[test]
    fn test_prefilled_defaults_country() {
        let details = ShippingDetails::prefilled("Admin User", "admin@example.com");
        assert_eq!(details.country, "US");
        assert_eq!(details.full_name, "Admin User");
        assert!(!details.is_complete());
    }

    #[test]
    fn test_missing_fields() {
        let mut details = complete();
        assert!(details.is_complete());

        details.city = "  ".into();
        details.phone.clear();
        assert_eq!(details.missing_fields(), vec!["city", "phone"]);
    }

    #[test]
    fn test_multi_line() {
        assert_eq!(
            complete().multi_line(),
            "Regular User\n1 Main St\nSpringfield, IL 62701\nUS"
        );
    }
}
