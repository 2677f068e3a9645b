//! Medication color coding
//!
//! Assigns each distinct medication name a stable palette color for the
//! session, in first-seen order. The mapping is rebuilt from scratch on every
//! full prescription fetch, so identical input always yields the same map.

use std::collections::HashMap;

/// Fixed ordered palette; assignment cycles when more than 8 names appear
pub const PALETTE: [&str; 8] = [
    "#E57373", // red
    "#64B5F6", // blue
    "#81C784", // green
    "#FFB74D", // orange
    "#BA68C8", // purple
    "#4DB6AC", // teal
    "#F06292", // pink
    "#A1887F", // brown
];

/// Neutral gray for names not yet assigned
pub const UNASSIGNED_COLOR: &str = "#9E9E9E";

/// Session-stable mapping from medication name to palette color
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    colors: HashMap<String, &'static str>,
}

impl ColorMap {
    /// Build the mapping from medication names in display order.
    ///
    /// The first occurrence of each distinct name claims the next palette
    /// slot, wrapping modulo the palette size. Rebuilding from the same
    /// ordered input produces the same mapping.
    pub fn assign<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut colors = HashMap::new();
        let mut next_slot = 0usize;
        for name in names {
            if !colors.contains_key(name) {
                colors.insert(name.to_string(), PALETTE[next_slot % PALETTE.len()]);
                next_slot += 1;
            }
        }
        Self { colors }
    }

    /// Color for a medication name; unassigned names get the neutral gray
    pub fn color_for(&self, name: &str) -> &'static str {
        self.colors.get(name).copied().unwrap_or(UNASSIGNED_COLOR)
    }

    /// Number of distinct names assigned
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
