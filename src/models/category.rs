//! Predefined category catalogue
//!
//! Transactions and budgets refer to categories by label only; this catalogue
//! supplies the default labels and the icon keys budgets display.

/// A predefined category: stable key plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: &'static str,
    pub label: &'static str,
}

pub const HOME: &str = "home";
pub const INVESTMENTS: &str = "investments";
pub const ENTERTAINMENT: &str = "entertainment";
pub const SOCIAL: &str = "social";
pub const OTHERS: &str = "others";
pub const FOOD: &str = "food";
pub const TRANSPORT: &str = "transport";
pub const HEALTH: &str = "health";
pub const EDUCATION: &str = "education";
pub const SHOPPING: &str = "shopping";

/// Default categories offered by the transaction form and budgets
pub const DEFAULT_CATEGORIES: &[CategoryDefinition] = &[
    CategoryDefinition { key: HOME, label: "Hogar" },
    CategoryDefinition { key: INVESTMENTS, label: "Inversiones" },
    CategoryDefinition { key: ENTERTAINMENT, label: "Entretenimiento" },
    CategoryDefinition { key: SOCIAL, label: "Social" },
    CategoryDefinition { key: FOOD, label: "Alimentos" },
    CategoryDefinition { key: SHOPPING, label: "Compras" },
    CategoryDefinition { key: TRANSPORT, label: "Transporte" },
    CategoryDefinition { key: HEALTH, label: "Salud" },
    CategoryDefinition { key: EDUCATION, label: "Educación" },
    CategoryDefinition { key: OTHERS, label: "Otros" },
];

/// Label for a category key, or the key itself when unknown
pub fn label_for_key(key: &str) -> &str {
    DEFAULT_CATEGORIES
        .iter()
        .find(|def| def.key == key)
        .map(|def| def.label)
        .unwrap_or(key)
}

/// Key for a label (trimmed, case-insensitive)
pub fn key_for_label(label: &str) -> Option<&'static str> {
    let normalized = label.trim().to_lowercase();
    DEFAULT_CATEGORIES
        .iter()
        .find(|def| def.label.to_lowercase() == normalized)
        .map(|def| def.key)
}

/// Default labels merged with `extra`, de-duplicated and sorted case-insensitively
pub fn merged_labels<I, S>(extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut labels: Vec<String> = DEFAULT_CATEGORIES
        .iter()
        .map(|def| def.label.to_string())
        .chain(extra.into_iter().map(Into::into))
        .filter(|label| seen.insert(label.to_lowercase()))
        .collect();

    labels.sort_by_key(|label| label.to_lowercase());
    labels
}
