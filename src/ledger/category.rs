use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of category identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Other,
}

impl CategoryId {
    /// Every identifier, in registry order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Food,
        CategoryId::Transportation,
        CategoryId::Utilities,
        CategoryId::Entertainment,
        CategoryId::Shopping,
        CategoryId::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Food => "food",
            CategoryId::Transportation => "transportation",
            CategoryId::Utilities => "utilities",
            CategoryId::Entertainment => "entertainment",
            CategoryId::Shopping => "shopping",
            CategoryId::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "food" => Some(CategoryId::Food),
            "transportation" => Some(CategoryId::Transportation),
            "utilities" => Some(CategoryId::Utilities),
            "entertainment" => Some(CategoryId::Entertainment),
            "shopping" => Some(CategoryId::Shopping),
            "other" => Some(CategoryId::Other),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorises transactions for budgeting and reporting.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub color: &'static str,
}

/// Fixed category registry, defined once at process start. Reports that emit
/// one row per category follow this order.
pub static CATEGORIES: [Category; 6] = [
    Category {
        id: CategoryId::Food,
        name: "Food & Dining",
        color: "hsl(var(--chart-1))",
    },
    Category {
        id: CategoryId::Transportation,
        name: "Transportation",
        color: "hsl(var(--chart-2))",
    },
    Category {
        id: CategoryId::Utilities,
        name: "Utilities",
        color: "hsl(var(--chart-3))",
    },
    Category {
        id: CategoryId::Entertainment,
        name: "Entertainment",
        color: "hsl(var(--chart-4))",
    },
    Category {
        id: CategoryId::Shopping,
        name: "Shopping",
        color: "hsl(var(--chart-5))",
    },
    Category {
        id: CategoryId::Other,
        name: "Other",
        color: "hsl(var(--muted-foreground))",
    },
];

/// Sentinel bucket for transactions whose category reference is absent or
/// does not resolve against the registry.
pub static FALLBACK_CATEGORY: &Category = &CATEGORIES[5];

pub fn category_by_id(id: CategoryId) -> &'static Category {
    &CATEGORIES[id as usize]
}

/// Looks up a category by its raw identifier. Absent or unknown identifiers
/// yield `None`.
pub fn lookup_category(raw: Option<&str>) -> Option<&'static Category> {
    raw.and_then(CategoryId::parse).map(category_by_id)
}

/// Resolves a raw category reference, substituting the fallback sentinel
/// when the reference is absent or unknown.
pub fn resolve_category(raw: Option<&str>) -> &'static Category {
    lookup_category(raw).unwrap_or(FALLBACK_CATEGORY)
}
