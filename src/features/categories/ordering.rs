use std::cmp::Ordering;
use std::collections::HashMap;

use crate::features::categories::models::Category;

/// Navigation ordering for top-level categories.
///
/// Slugs in the preferred list come first, in list position. Everything else
/// follows, ordered by name ignoring case. Exact name and then slug break the
/// remaining ties so the order is total.
#[derive(Debug, Clone)]
pub struct PreferredOrder {
    positions: HashMap<String, usize>,
}

impl PreferredOrder {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions = HashMap::new();
        for (index, slug) in slugs.into_iter().enumerate() {
            // first occurrence wins
            positions.entry(slug.into()).or_insert(index);
        }
        Self { positions }
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.positions.get(slug).copied()
    }

    pub fn compare(&self, a: &Category, b: &Category) -> Ordering {
        match (self.position(&a.slug), self.position(&b.slug)) {
            (Some(a_pos), Some(b_pos)) => a_pos.cmp(&b_pos),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.slug.cmp(&b.slug)),
        }
    }

    pub fn sort(&self, categories: &mut [Category]) {
        categories.sort_by(|a, b| self.compare(a, b));
    }
}
