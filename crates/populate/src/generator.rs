//! Randomized-but-plausible candidate generation.
//!
//! Pure generation: given a valid category this never fails. Seedable so
//! tests can pin a sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use wms_core::{Category, Email, ProductCandidate, SupplierCandidate};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Daniel", "Karen", "Amara", "Chidi", "Ngozi", "Kwame", "Fatima", "Omar", "Priya", "Wei",
    "Yuki", "Sofia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Okafor", "Adeyemi", "Mensah", "Hassan", "Khan", "Patel", "Chen", "Tanaka",
    "Novak", "Fischer", "Hartley", "Sutton", "Vance", "Whitfield", "Mercer",
];

const BRAND_SUFFIXES: &[&str] = &[
    "Labs",
    "Group",
    "Works",
    "Trading",
    "Supply Co.",
    "Industries",
    "Collective",
    "Goods",
    "Outfitters",
    "Brothers",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mailinator.dev",
    "inbox.test",
];

const DESCRIPTION_OPENERS: &[&str] = &[
    "Built to wholesale-grade standards with consistent batch quality.",
    "A reliable everyday pick that keeps reorder rates high.",
    "Designed for high-turnover retail shelves.",
    "Sourced from vetted manufacturers with stable lead times.",
    "A proven seller across regional marketplaces.",
];

const DESCRIPTION_MIDDLES: &[&str] = &[
    "Ships in protective bulk packaging to reduce transit damage.",
    "Each unit is inspected before leaving the warehouse.",
    "Materials meet standard import compliance requirements.",
    "Stock photography available on request for listings.",
    "Consistent sizing and finish across production runs.",
];

const DESCRIPTION_CLOSERS: &[&str] = &[
    "Volume discounts apply at pallet quantities.",
    "Restocks typically land within two weeks of ordering.",
    "Popular with boutique and online resellers alike.",
    "Backed by a straightforward replacement policy.",
    "Contact the supplier for private-label options.",
];

const PASSWORD_UPPER: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const PASSWORD_LOWER: &[u8] = b"abcdefghijkmnpqrstuvwxyz";
const PASSWORD_DIGITS: &[u8] = b"23456789";
const PASSWORD_SPECIAL: &[u8] = b"!@#$%^&*";

/// Fabricates supplier and product candidates.
pub struct Generator {
    rng: StdRng,
    /// Per-run sequence number folded into emails; the epoch second alone
    /// is not unique within a run.
    sequence: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            sequence: 0,
        }
    }

    /// Generator with a fixed seed, for reproducible tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            sequence: 0,
        }
    }

    /// A fresh supplier candidate.
    ///
    /// The email combines a realistic local part with the current epoch
    /// second and a random tail so repeated runs do not collide against the
    /// backend's uniqueness constraint.
    pub fn supplier_candidate(&mut self) -> SupplierCandidate {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        let email = self.unique_email(first, last);

        SupplierCandidate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email,
            password: self.password(12),
        }
    }

    /// A fresh product candidate for the given category.
    pub fn product_candidate(&mut self, category: Category) -> ProductCandidate {
        let product_type = self.pick(category.product_types().as_slice());
        let brand = format!("{} {}", self.pick(LAST_NAMES), self.pick(BRAND_SUFFIXES));
        let name = format!("{brand} {product_type} {}", self.model_code());

        let price = self.price();
        let discount_price = if self.rng.random_bool(0.3) {
            Some(round_cents(price * self.rng.random_range(0.10..=0.30)))
        } else {
            None
        };

        // Distinct random parameters keep the placeholder service from
        // serving the same cached image three times.
        let images_url = (0..3)
            .map(|_| {
                format!(
                    "https://picsum.photos/400/400?random={}",
                    self.rng.random_range(1..=1000)
                )
            })
            .collect();

        ProductCandidate {
            name,
            description: self.description(),
            price,
            discount_price,
            images_url,
            category,
            stock_quantity: self.rng.random_range(10..=1000),
        }
    }

    /// A category drawn uniformly from the catalog.
    pub fn random_category(&mut self) -> Category {
        Category::ALL[self.rng.random_range(0..Category::ALL.len())]
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.random_range(0..options.len())]
    }

    /// Uniform price in [10, 500] at cent granularity.
    fn price(&mut self) -> f64 {
        f64::from(self.rng.random_range(1000_u32..=50_000)) / 100.0
    }

    fn unique_email(&mut self, first: &str, last: &str) -> Email {
        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let sequence = self.sequence;
        self.sequence += 1;
        let tail: u32 = self.rng.random_range(0..10_000);
        let domain = self.pick(EMAIL_DOMAINS);
        let address = format!(
            "{}.{}.{epoch}.{sequence}{tail:04}@{domain}",
            first.to_lowercase(),
            last.to_lowercase()
        );
        // Local parts and domains come from fixed non-empty tables.
        Email::parse(&address).unwrap_or_else(|_| unreachable!("generated email is well-formed"))
    }

    /// Model code in the `XK-1234` shape the mobile app displays.
    fn model_code(&mut self) -> String {
        let letter = |rng: &mut StdRng| char::from(b'A' + rng.random_range(0..26));
        format!(
            "{}{}-{:04}",
            letter(&mut self.rng),
            letter(&mut self.rng),
            self.rng.random_range(0..10_000)
        )
    }

    fn description(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(DESCRIPTION_OPENERS),
            self.pick(DESCRIPTION_MIDDLES),
            self.pick(DESCRIPTION_CLOSERS)
        )
    }

    /// Password containing at least one character from each of the four
    /// classes, with ambiguous glyphs (O/0, l/1) excluded.
    fn password(&mut self, length: usize) -> String {
        let length = length.max(4);
        let all: Vec<u8> = [PASSWORD_UPPER, PASSWORD_LOWER, PASSWORD_DIGITS, PASSWORD_SPECIAL]
            .concat();

        let mut bytes = vec![
            self.pick_byte(PASSWORD_UPPER),
            self.pick_byte(PASSWORD_LOWER),
            self.pick_byte(PASSWORD_DIGITS),
            self.pick_byte(PASSWORD_SPECIAL),
        ];
        while bytes.len() < length {
            bytes.push(self.pick_byte(&all));
        }
        bytes.shuffle(&mut self.rng);

        String::from_utf8(bytes).unwrap_or_else(|_| unreachable!("charset is ASCII"))
    }

    fn pick_byte(&mut self, options: &[u8]) -> u8 {
        options[self.rng.random_range(0..options.len())]
    }
}

/// Round to two decimal places.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
