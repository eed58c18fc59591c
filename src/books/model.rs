//! # Book Model
//!
//! The persisted `Book` record and the request payload it is built from.

use serde::{Deserialize, Serialize};

use super::errors::{BookError, BookResult};

/// A persisted book row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year; `None` means unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

/// Body accepted by create and update.
///
/// Any `id` in the body is ignored; the store or the request path decides it.
/// Missing and `null` text fields deserialize to `None` so they fail
/// validation instead of parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
}

/// A validated payload, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
}

impl BookPayload {
    /// Convenience constructor used by callers that already hold the fields
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: Option<i32>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            published_year,
        }
    }

    /// Check required fields and normalize the year.
    ///
    /// A year of `0` is treated as unknown.
    pub fn validate(self) -> BookResult<BookDraft> {
        let title = self.title.unwrap_or_default();
        let author = self.author.unwrap_or_default();

        if title.trim().is_empty() || author.trim().is_empty() {
            return Err(BookError::Validation);
        }

        Ok(BookDraft {
            title,
            author,
            published_year: self.published_year.filter(|year| *year != 0),
        })
    }
}

impl BookDraft {
    /// Attach an identifier to produce the full record
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ignores_id() {
        let payload: BookPayload =
            serde_json::from_value(json!({"id": 42, "title": "Dune", "author": "Herbert"}))
                .unwrap();
        let book = payload.validate().unwrap().into_book(1);
        assert_eq!(book.id, 1);
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let payload: BookPayload = serde_json::from_value(json!({"title": "Dune"})).unwrap();
        assert!(matches!(payload.validate(), Err(BookError::Validation)));

        let payload: BookPayload =
            serde_json::from_value(json!({"title": null, "author": "Herbert"})).unwrap();
        assert!(matches!(payload.validate(), Err(BookError::Validation)));
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        let payload = BookPayload::new("  ", "Herbert", None);
        assert!(matches!(payload.validate(), Err(BookError::Validation)));

        let payload = BookPayload::new("Dune", "", None);
        assert!(matches!(payload.validate(), Err(BookError::Validation)));
    }

    #[test]
    fn test_zero_year_is_unknown() {
        let draft = BookPayload::new("Dune", "Herbert", Some(0)).validate().unwrap();
        assert_eq!(draft.published_year, None);

        let draft = BookPayload::new("Dune", "Herbert", Some(1965))
            .validate()
            .unwrap();
        assert_eq!(draft.published_year, Some(1965));
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let result: Result<BookPayload, _> =
            serde_json::from_value(json!({"title": "Dune", "author": "Herbert", "published_year": "soon"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_year_is_omitted() {
        let book = Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_year: None,
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value, json!({"id": 3, "title": "Dune", "author": "Herbert"}));
    }
}
