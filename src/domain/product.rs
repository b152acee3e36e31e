// SPDX-License-Identifier: MPL-2.0
//! Catalog entities and form validation rules.

use std::fmt;
use std::path::PathBuf;

/// Backend identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable item as published by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i64,
    /// URL or local file path of the product photo.
    pub image: String,
}

/// Validated payload of the add-product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_file: PathBuf,
}

/// Reasons a product form cannot be submitted.
///
/// Several may apply at once; `validate_new_product` reports all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    MissingName,
    MissingDescription,
    MissingPrice,
    InvalidPrice,
    MissingImage,
}

/// Parses the price field the way the form accepts it: an optional sign
/// followed by digits, no surrounding whitespace.
#[must_use]
pub fn parse_price(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Checks the add-product form and builds the payload when every field is usable.
///
/// # Errors
///
/// Returns every [`FormIssue`] found when any field is empty, the price does
/// not parse as an integer, or no image file is bound.
pub fn validate_new_product(
    name: &str,
    description: &str,
    price: &str,
    image_file: Option<&PathBuf>,
) -> Result<NewProduct, Vec<FormIssue>> {
    let mut issues = Vec::new();

    if name.is_empty() {
        issues.push(FormIssue::MissingName);
    }
    if description.is_empty() {
        issues.push(FormIssue::MissingDescription);
    }
    let parsed_price = if price.is_empty() {
        issues.push(FormIssue::MissingPrice);
        None
    } else {
        let parsed = parse_price(price);
        if parsed.is_none() {
            issues.push(FormIssue::InvalidPrice);
        }
        parsed
    };
    if image_file.is_none() {
        issues.push(FormIssue::MissingImage);
    }

    match (parsed_price, image_file) {
        (Some(price), Some(image_file)) if issues.is_empty() => Ok(NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_file: image_file.clone(),
        }),
        _ => Err(issues),
    }
}

/// Normalizes the name typed in the rename form.
///
/// Returns `None` when nothing but whitespace remains.
#[must_use]
pub fn normalize_new_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> PathBuf {
        PathBuf::from("/tmp/IMG_20240101_120000.jpg")
    }

    #[test]
    fn complete_form_builds_payload() {
        let file = image();
        let product = validate_new_product("Shoe", "Red", "50", Some(&file)).unwrap();
        assert_eq!(product.name, "Shoe");
        assert_eq!(product.description, "Red");
        assert_eq!(product.price, 50);
        assert_eq!(product.image_file, file);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let file = image();
        let issues = validate_new_product("Shoe", "Red", "abc", Some(&file)).unwrap_err();
        assert_eq!(issues, vec![FormIssue::InvalidPrice]);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let issues = validate_new_product("", "", "", None).unwrap_err();
        assert_eq!(
            issues,
            vec![
                FormIssue::MissingName,
                FormIssue::MissingDescription,
                FormIssue::MissingPrice,
                FormIssue::MissingImage,
            ]
        );
    }

    #[test]
    fn missing_image_blocks_otherwise_valid_form() {
        let issues = validate_new_product("Shoe", "Red", "50", None).unwrap_err();
        assert_eq!(issues, vec![FormIssue::MissingImage]);
    }

    #[test]
    fn price_accepts_sign_but_not_whitespace_or_decimals() {
        assert_eq!(parse_price("-5"), Some(-5));
        assert_eq!(parse_price("+7"), Some(7));
        assert_eq!(parse_price(" 5"), None);
        assert_eq!(parse_price("5.0"), None);
    }

    #[test]
    fn new_name_is_trimmed() {
        assert_eq!(normalize_new_name("  Runner "), Some("Runner".to_string()));
        assert_eq!(normalize_new_name("   "), None);
    }
}
