use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Service {
    /// Services without a category (or with a blank one) land in "Other".
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "Other",
        }
    }
}
