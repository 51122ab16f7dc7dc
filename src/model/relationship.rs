use std::fmt;

use serde::{Deserialize, Serialize};

/// Stance one faction holds toward another.
///
/// The set is closed. Any pair that has never been configured resolves to
/// `Neutral`, which is also the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    #[default]
    Neutral,
    Friendly,
    Hostile,
    Allied,
}

impl RelationshipKind {
    /// All kinds in display order.
    pub const ALL: [RelationshipKind; 4] = [
        RelationshipKind::Neutral,
        RelationshipKind::Friendly,
        RelationshipKind::Hostile,
        RelationshipKind::Allied,
    ];

    /// Return the serde tag string for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Neutral => "neutral",
            RelationshipKind::Friendly => "friendly",
            RelationshipKind::Hostile => "hostile",
            RelationshipKind::Allied => "allied",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
