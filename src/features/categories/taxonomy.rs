//! Canonical FERMENT product taxonomy.
//!
//! One literal table is the source of truth for both the migration and the
//! seed load. They differ only in how labels are cased, so the two can never
//! drift apart. Changing the product categories means editing
//! [`FERMENT_CATEGORIES`], bumping [`TAXONOMY_VERSION`] and re-running a loader.

use std::collections::HashSet;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::validation::{HEX_COLOR_REGEX, SLUG_REGEX};

pub const TAXONOMY_VERSION: &str = "2025.1";

struct CategoryLiteral {
    name: &'static str,
    slug: &'static str,
    color: Option<&'static str>,
    /// `(name, slug)` pairs
    subcategories: &'static [(&'static str, &'static str)],
}

const FERMENT_CATEGORIES: &[CategoryLiteral] = &[
    CategoryLiteral {
        name: "All",
        slug: "all",
        color: None,
        subcategories: &[],
    },
    CategoryLiteral {
        name: "Clothes",
        slug: "clothes",
        color: Some("#FF6B9D"),
        subcategories: &[
            ("T-Shirts", "t-shirts"),
            ("Hoodies & Sweatshirts", "hoodies-sweatshirts"),
            ("Prints & Graphics", "prints-graphics"),
            ("Dresses & Skirts", "dresses-skirts"),
            ("Pants & Shorts", "pants-shorts"),
        ],
    },
    CategoryLiteral {
        name: "Jewelery",
        slug: "jewelery",
        color: Some("#FFD700"),
        subcategories: &[
            ("Rings", "rings"),
            ("Necklaces & Pendants", "necklaces-pendants"),
            ("Earrings", "earrings"),
            ("Bracelets & Anklets", "bracelets-anklets"),
            ("Body Jewelry", "body-jewelry"),
        ],
    },
    CategoryLiteral {
        name: "Posters",
        slug: "posters",
        color: Some("#7EC8E3"),
        subcategories: &[
            ("Art Prints", "art-prints"),
            ("Photography Prints", "photography-prints"),
            ("Vintage & Retro", "vintage-retro"),
            ("Music & Band Posters", "music-band-posters"),
            ("Movie & TV Posters", "movie-tv-posters"),
        ],
    },
    CategoryLiteral {
        name: "Pottery",
        slug: "pottery",
        color: Some("#D4A574"),
        subcategories: &[
            ("Bowls & Dishes", "bowls-dishes"),
            ("Mugs & Cups", "mugs-cups"),
            ("Vases & Planters", "vases-planters"),
            ("Plates & Platters", "plates-platters"),
            ("Decorative Pieces", "decorative-pieces"),
        ],
    },
    CategoryLiteral {
        name: "Accessories",
        slug: "accessories",
        color: Some("#96E6B3"),
        subcategories: &[
            ("Bags & Totes", "bags-totes"),
            ("Hats & Headwear", "hats-headwear"),
            ("Pins & Patches", "pins-patches"),
            ("Belts & Straps", "belts-straps"),
            ("Scarves & Bandanas", "scarves-bandanas"),
        ],
    },
    CategoryLiteral {
        name: "Tattoos",
        slug: "tattoos",
        color: Some("#1A1A1A"),
        subcategories: &[
            ("Flash Art", "flash-art"),
            ("Custom Designs", "custom-designs"),
            ("Temporary Tattoos", "temporary-tattoos"),
            ("Tattoo Templates", "tattoo-templates"),
            ("Stencils", "stencils"),
        ],
    },
    CategoryLiteral {
        name: "Music",
        slug: "music",
        color: Some("#B5B9FF"),
        subcategories: &[
            ("Albums & EPs", "albums-eps"),
            ("Singles & Tracks", "singles-tracks"),
            ("Vinyl Records", "vinyl-records"),
            ("Digital Downloads", "digital-downloads"),
            ("Music Merch", "music-merch"),
        ],
    },
];

/// How display labels from the literal table are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCase {
    /// Keep "T-Shirts" as written
    AsWritten,
    /// "T-Shirts" becomes "t-shirts"
    Lowercase,
}

impl LabelCase {
    fn apply(self, label: &str) -> String {
        match self {
            LabelCase::AsWritten => label.to_string(),
            LabelCase::Lowercase => label.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SubcategorySpec {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words joined by hyphens"))]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CategorySpec {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words joined by hyphens"))]
    pub slug: String,

    #[validate(regex(path = *HEX_COLOR_REGEX, message = "Color must be a #RGB or #RRGGBB hex value"))]
    pub color: Option<String>,

    #[validate(nested)]
    pub subcategories: Vec<SubcategorySpec>,
}

/// An ordered set of top-level categories, each with its ordered subcategories
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TaxonomyDefinition {
    /// Human label used in logs ("migration", "seed", ...)
    pub label: String,

    #[validate(nested)]
    pub categories: Vec<CategorySpec>,
}

impl TaxonomyDefinition {
    /// Lower-cased labels, used by `migrate-categories`
    pub fn migration() -> Self {
        Self::canonical("migration", LabelCase::Lowercase)
    }

    /// Labels as written, used by `seed`
    pub fn seed() -> Self {
        Self::canonical("seed", LabelCase::AsWritten)
    }

    pub fn canonical(label: &str, case: LabelCase) -> Self {
        let categories = FERMENT_CATEGORIES
            .iter()
            .map(|literal| CategorySpec {
                name: case.apply(literal.name),
                slug: literal.slug.to_string(),
                color: literal.color.map(str::to_string),
                subcategories: literal
                    .subcategories
                    .iter()
                    .map(|(name, slug)| SubcategorySpec {
                        name: case.apply(name),
                        slug: slug.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            label: label.to_string(),
            categories,
        }
    }

    pub fn subcategory_count(&self) -> usize {
        self.categories.iter().map(|c| c.subcategories.len()).sum()
    }

    /// Field rules plus slug uniqueness across both levels.
    ///
    /// Run before anything destructive touches the store.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut seen = HashSet::new();
        let slugs = self.categories.iter().flat_map(|c| {
            std::iter::once(c.slug.as_str()).chain(c.subcategories.iter().map(|s| s.slug.as_str()))
        });
        for slug in slugs {
            if !seen.insert(slug) {
                return Err(AppError::Validation(format!(
                    "Duplicate slug '{}' in {} taxonomy",
                    slug, self.label
                )));
            }
        }

        Ok(())
    }
}
