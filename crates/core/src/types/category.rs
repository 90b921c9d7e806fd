//! Product category catalog.
//!
//! The backend accepts the category as a plain string, so the wire names
//! here (including `"Home & Garden"` and `"Office Supplies"`) must match the
//! mobile app's category list exactly.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten product categories recognized by the marketplace backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Beauty,
    Books,
    Toys,
    Automotive,
    Health,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
}

impl Category {
    /// All categories, in the order the mobile app lists them.
    pub const ALL: [Self; 10] = [
        Self::Electronics,
        Self::Clothing,
        Self::HomeAndGarden,
        Self::Sports,
        Self::Beauty,
        Self::Books,
        Self::Toys,
        Self::Automotive,
        Self::Health,
        Self::OfficeSupplies,
    ];

    /// Wire name of the category, as the backend expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::HomeAndGarden => "Home & Garden",
            Self::Sports => "Sports",
            Self::Beauty => "Beauty",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Automotive => "Automotive",
            Self::Health => "Health",
            Self::OfficeSupplies => "Office Supplies",
        }
    }

    /// Category-appropriate product-type nouns used when fabricating
    /// product names.
    #[must_use]
    pub const fn product_types(self) -> &'static [&'static str; 10] {
        match self {
            Self::Electronics => &[
                "Smartphone",
                "Laptop",
                "Headphones",
                "Camera",
                "Tablet",
                "Smartwatch",
                "Speaker",
                "Charger",
                "Cable",
                "Adapter",
            ],
            Self::Clothing => &[
                "T-Shirt", "Jeans", "Dress", "Jacket", "Sweater", "Shoes", "Hat", "Scarf", "Belt",
                "Socks",
            ],
            Self::HomeAndGarden => &[
                "Lamp",
                "Chair",
                "Table",
                "Plant",
                "Tool",
                "Decor",
                "Kitchen",
                "Bathroom",
                "Bedroom",
                "Living Room",
            ],
            Self::Sports => &[
                "Ball",
                "Racket",
                "Shoes",
                "Equipment",
                "Gear",
                "Apparel",
                "Accessories",
                "Training",
                "Outdoor",
                "Fitness",
            ],
            Self::Beauty => &[
                "Skincare",
                "Makeup",
                "Hair",
                "Fragrance",
                "Tools",
                "Bath",
                "Body",
                "Face",
                "Lips",
                "Eyes",
            ],
            Self::Books => &[
                "Fiction",
                "Non-Fiction",
                "Textbook",
                "Comic",
                "Magazine",
                "Journal",
                "Guide",
                "Manual",
                "Reference",
                "Children",
            ],
            Self::Toys => &[
                "Action Figure",
                "Doll",
                "Game",
                "Puzzle",
                "Educational",
                "Outdoor",
                "Electronic",
                "Building",
                "Art",
                "Music",
            ],
            Self::Automotive => &[
                "Part",
                "Accessory",
                "Tool",
                "Maintenance",
                "Interior",
                "Exterior",
                "Engine",
                "Electrical",
                "Safety",
                "Performance",
            ],
            Self::Health => &[
                "Supplement",
                "Equipment",
                "Monitor",
                "Therapy",
                "Fitness",
                "Medical",
                "Wellness",
                "Nutrition",
                "Care",
                "Treatment",
            ],
            Self::OfficeSupplies => &[
                "Pen",
                "Paper",
                "Folder",
                "Binder",
                "Desk",
                "Chair",
                "Computer",
                "Printer",
                "Storage",
                "Organization",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_categories_ten_types_each() {
        assert_eq!(Category::ALL.len(), 10);
        for category in Category::ALL {
            assert_eq!(category.product_types().len(), 10);
        }
    }

    #[test]
    fn test_wire_names_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Category::HomeAndGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");
        let json = serde_json::to_string(&Category::OfficeSupplies).unwrap();
        assert_eq!(json, "\"Office Supplies\"");

        let parsed: Category = serde_json::from_str("\"Electronics\"").unwrap();
        assert_eq!(parsed, Category::Electronics);
    }
}
