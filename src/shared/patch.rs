// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep stored value
// - Null: explicit null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Pair with #[serde(default)] on the field so an omitted key becomes Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U, F>(self, f: F) -> PatchField<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        preview_link: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.preview_link.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let body: Body = serde_json::from_str(r#"{ "preview_link": null }"#).unwrap();
        assert_eq!(body.preview_link, PatchField::Null);
    }

    #[test]
    fn value_is_value() {
        let body: Body =
            serde_json::from_str(r#"{ "preview_link": "https://demo.dev" }"#).unwrap();
        assert_eq!(body.preview_link.as_value().map(String::as_str), Some("https://demo.dev"));
    }

    #[test]
    fn map_transforms_only_values() {
        let trimmed = PatchField::Value("  a  ".to_string()).map(|s| s.trim().to_string());
        assert_eq!(trimmed, PatchField::Value("a".to_string()));

        let null: PatchField<String> = PatchField::Null;
        assert_eq!(null.map(|s| s.len()), PatchField::Null);
    }
}
