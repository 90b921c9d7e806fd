//! Provisioning candidates: the payloads the pipeline submits to the backend.
//!
//! Candidates are produced once by the data generator, validated locally,
//! sent once, and discarded. The remote backend is the system of record -
//! nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Email};

/// Errors detected locally before a candidate is put on the wire.
///
/// The reference workflow relied entirely on server-side rejection; this
/// check exists so obviously malformed payloads never cost a network round
/// trip. It does not change the wire contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Price is outside the accepted range.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The rejected price.
        price: f64,
    },
    /// Discount price must stay strictly below the list price.
    #[error("discount price {discount} must be less than price {price}")]
    DiscountNotBelowPrice {
        /// The rejected discount price.
        discount: f64,
        /// The list price it was compared against.
        price: f64,
    },
    /// Products must carry at least one image URL.
    #[error("imagesUrl cannot be empty")]
    NoImages,
}

/// A supplier account waiting to be registered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCandidate {
    pub first_name: String,
    pub last_name: String,
    /// Must be unique backend-wide; the generator disambiguates across runs.
    pub email: Email,
    pub password: String,
}

impl SupplierCandidate {
    /// Full display name, used in progress reporting.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the candidate before submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a name or the password is empty.
    /// Email validity is enforced at construction by [`Email::parse`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "firstName",
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "lastName" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyField { field: "password" });
        }
        Ok(())
    }
}

/// A product waiting to be created under an authenticated supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCandidate {
    pub name: String,
    pub description: String,
    /// List price in the marketplace currency, rounded to cents.
    pub price: f64,
    /// When present, strictly less than `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    /// Ordered, non-empty image URL list.
    pub images_url: Vec<String>,
    pub category: Category,
    pub stock_quantity: u32,
}

impl ProductCandidate {
    /// Check the candidate before submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name or description is empty,
    /// the price is non-positive, a discount price is not strictly below the
    /// price, or there are no images.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "description",
            });
        }
        if self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { price: self.price });
        }
        if let Some(discount) = self.discount_price
            && discount >= self.price
        {
            return Err(ValidationError::DiscountNotBelowPrice {
                discount,
                price: self.price,
            });
        }
        if self.images_url.is_empty() {
            return Err(ValidationError::NoImages);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product() -> ProductCandidate {
        ProductCandidate {
            name: "Acme Widget XK-1234".to_string(),
            description: "A widget of unusual quality.".to_string(),
            price: 99.99,
            discount_price: Some(19.99),
            images_url: vec!["https://picsum.photos/400/400?random=1".to_string()],
            category: Category::Electronics,
            stock_quantity: 100,
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut p = product();
        p.name = "  ".to_string();
        assert_eq!(
            p.validate(),
            Err(ValidationError::EmptyField { field: "name" })
        );
    }

    #[test]
    fn test_discount_must_be_below_price() {
        let mut p = product();
        p.discount_price = Some(99.99);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::DiscountNotBelowPrice { .. })
        ));
    }

    #[test]
    fn test_no_images_rejected() {
        let mut p = product();
        p.images_url.clear();
        assert_eq!(p.validate(), Err(ValidationError::NoImages));
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(product()).unwrap();
        assert!(json.get("discountPrice").is_some());
        assert!(json.get("imagesUrl").is_some());
        assert!(json.get("stockQuantity").is_some());
    }

    #[test]
    fn test_absent_discount_omitted() {
        let mut p = product();
        p.discount_price = None;
        let json = serde_json::to_value(p).unwrap();
        assert!(json.get("discountPrice").is_none());
    }

    #[test]
    fn test_supplier_validation() {
        let supplier = SupplierCandidate {
            first_name: "Demo".to_string(),
            last_name: "Supplier".to_string(),
            email: Email::parse("demo@supplier.com").unwrap(),
            password: "Demo123!".to_string(),
        };
        assert!(supplier.validate().is_ok());
        assert_eq!(supplier.full_name(), "Demo Supplier");

        let mut broken = supplier;
        broken.password = String::new();
        assert_eq!(
            broken.validate(),
            Err(ValidationError::EmptyField { field: "password" })
        );
    }
}
