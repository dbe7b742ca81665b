// palika-core/src/domain/profile/category.rs

// Every report section that breaks households down "by kind" shares the same
// shape: a closed set of enumerators, a storage code, and a bilingual label.
// The trait keeps percentage/label lookup exhaustive at compile time instead
// of string-keyed like the legacy data entry sheets.

use crate::domain::error::DomainError;

pub trait Category: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Domain the section belongs to, e.g. "economics".
    const DOMAIN: &'static str;
    /// Section slug inside the domain, e.g. "wall-material".
    const SECTION: &'static str;

    /// All enumerators, in report display order.
    fn all() -> &'static [Self];

    /// Stable storage code (uppercase snake, what the DB rows carry).
    fn code(&self) -> &'static str;

    fn label_en(&self) -> &'static str;
    fn label_ne(&self) -> &'static str;

    /// Parse a storage code back to the enumerator. Unknown codes are a
    /// domain error: the category set is closed, a stray string in the DB
    /// means corrupted seed data, not a new category.
    fn from_code(code: &str) -> Result<Self, DomainError> {
        Self::all()
            .iter()
            .find(|c| c.code() == code)
            .copied()
            .ok_or_else(|| DomainError::UnknownCategory {
                domain: Self::DOMAIN.to_string(),
                value: code.to_string(),
            })
    }

    /// Fully-qualified section key used by managers and the HTTP layer,
    /// e.g. "economics/wall-material".
    fn section_key() -> String {
        format!("{}/{}", Self::DOMAIN, Self::SECTION)
    }
}
