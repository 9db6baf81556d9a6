//! Payment form details.
//!
//! Nothing here talks to a processor; the details are only checked for
//! completeness and kept out of logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card details entered at the payment step.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    /// Name on the card.
    pub card_name: String,
    /// Card number as entered.
    pub card_number: String,
    /// Expiry date, e.g. "12/27".
    pub expiry_date: String,
    /// Card verification value.
    pub cvv: String,
}

impl PaymentDetails {
    /// Labels of the fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name on card", &self.card_name),
            ("card number", &self.card_number),
            ("expiry date", &self.expiry_date),
            ("CVV", &self.cvv),
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

    /// Card number with everything but the last four digits masked.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let shown = digits.len().min(4);
        let tail: String = digits[digits.len() - shown..].iter().collect();
        format!("**** **** **** {}", tail)
    }
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &self.masked_number())
            .field("expiry_date", &"[redacted]")
            .field("cvv", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> PaymentDetails {
        PaymentDetails {
            card_name: "Regular User".into(),
            card_number: "4242 4242 4242 1234".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert!(card().is_complete());
        let blank = PaymentDetails::default();
        assert_eq!(blank.missing_fields().len(), 4);
    }

    #[test]
    fn test_masked_number() {
        assert_eq!(card().masked_number(), "**** **** **** 1234");
        let short = PaymentDetails {
            card_number: "12".into(),
            ..card()
        };
        assert_eq!(short.masked_number(), "**** **** **** 12");
    }

    #[test]
    fn test_debug_redacts() {
        let debug = format!("{:?}", card());
        assert!(!debug.contains("4242"));
        assert!(!debug.contains("123\""));
        assert!(debug.contains("1234"));
    }
}
