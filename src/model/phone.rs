//! Customer phone numbers, validated against the configured region.

use crate::config::RegionConfig;
use serde::Serialize;
use std::fmt::{self, Display};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number is empty")]
    Empty,
    #[error("unexpected character {0:?} in phone number")]
    InvalidCharacter(char),
    #[error("phone number must start with +{0}")]
    WrongCountry(String),
    #[error("national number must have {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("national number cannot start with {0}")]
    InvalidLeadingDigit(char),
}

/// A phone number in E.164 form, e.g. `+79123456789`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses an international (`+7 912 ...`), trunk-prefixed (`8 (912) ...`),
    /// country-code-prefixed without the plus (`7 912 ...`) or bare national number. Spaces, dashes, dots and parentheses are ignored.
    pub fn parse(raw: &str, region: &RegionConfig) -> Result<Self, PhoneError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        let (international, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                other => return Err(PhoneError::InvalidCharacter(other)),
            }
        }

        let expected = region.national_number_length;
        let national = if international {
            digits
                .strip_prefix(region.country_code.as_str())
                .ok_or_else(|| PhoneError::WrongCountry(region.country_code.clone()))?
        } else {
            // A leading trunk prefix or country code only counts when the rest is a full
            // national number.
            [region.trunk_prefix.as_str(), region.country_code.as_str()]
                .into_iter()
                .filter(|prefix| !prefix.is_empty() && digits.len() == expected + prefix.len())
                .find_map(|prefix| digits.strip_prefix(prefix))
                .unwrap_or(&digits)
        };

        if national.len() != expected {
            return Err(PhoneError::WrongLength {
                expected,
                found: national.len(),
            });
        }
        if let Some(first) = national.chars().next() {
            if !region.leading_digits.contains(first) {
                return Err(PhoneError::InvalidLeadingDigit(first));
            }
        }

        Ok(Self(format!("+{}{}", region.country_code, national)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<PhoneNumber, PhoneError> {
        PhoneNumber::parse(raw, &RegionConfig::default())
    }

    #[test]
    fn test_accepted_forms_normalize_to_e164() {
        for raw in [
            "+79123456789",
            "+7 912 345-67-89",
            "8 (912) 345-67-89",
            "89123456789",
            "9123456789",
            "  +7 (495) 123.45.67 ",
            "79123456789",
            "7 912 345 67 89",
        ] {
            let phone = parse(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
            assert!(phone.as_str().starts_with("+7"), "{raw}");
            assert_eq!(phone.as_str().len(), 12, "{raw}");
        }
        assert_eq!(parse("8 912 345 67 89").unwrap().to_string(), "+79123456789");
        assert_eq!(parse("79123456789").unwrap().to_string(), "+79123456789");
        assert_eq!(parse("7 912 345 67 89").unwrap().to_string(), "+79123456789");
    }

    #[test]
    fn test_country_code_without_plus_needs_full_number() {
        // Too short to carry a country code, so the 7 is read as the national leading digit
        assert_eq!(parse("7912345678"), Err(PhoneError::InvalidLeadingDigit('7')));
        assert_eq!(
            parse("791234567890"),
            Err(PhoneError::WrongLength {
                expected: 10,
                found: 12
            })
        );
        assert_eq!(parse("7 123 456 78 90"), Err(PhoneError::InvalidLeadingDigit('1')));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse("   "), Err(PhoneError::Empty));
        assert_eq!(parse("+7 912 ABC"), Err(PhoneError::InvalidCharacter('A')));
        assert_eq!(parse("+1 212 555 0100"), Err(PhoneError::WrongCountry("7".into())));
        assert_eq!(
            parse("+7 912 345"),
            Err(PhoneError::WrongLength {
                expected: 10,
                found: 6
            })
        );
        assert_eq!(parse("+7 123 456 78 90"), Err(PhoneError::InvalidLeadingDigit('1')));
    }

    #[test]
    fn test_other_region() {
        let region = RegionConfig {
            code: "KZ".into(),
            country_code: "7".into(),
            trunk_prefix: "8".into(),
            national_number_length: 10,
            leading_digits: "67".into(),
        };
        assert!(PhoneNumber::parse("+7 701 123 45 67", &region).is_ok());
        assert!(PhoneNumber::parse("+7 912 345 67 89", &region).is_err());
    }
}
