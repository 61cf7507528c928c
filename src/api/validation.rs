use std::collections::BTreeMap;

/// Field-keyed validation errors, rendered next to the form inputs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Schema for the search form: `search` non-empty, `userId` present. A
/// failure here means no provider call and no persistence happen.
pub fn validate_search_form(
    search: Option<&str>,
    user_id: Option<&str>,
) -> Result<(String, String), FieldErrors> {
    let mut errors = FieldErrors::default();

    match search {
        Some(s) if !s.is_empty() => {}
        _ => errors.push("search", "String must contain at least 1 character(s)"),
    }

    if user_id.is_none() {
        errors.push("userId", "Required");
    }

    if errors.is_empty() {
        Ok((
            search.unwrap_or_default().to_string(),
            user_id.unwrap_or_default().to_string(),
        ))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_form() {
        let result = validate_search_form(Some("cats"), Some("u1"));
        assert_eq!(result.unwrap(), ("cats".to_string(), "u1".to_string()));
    }

    #[test]
    fn rejects_empty_search() {
        let errors = validate_search_form(Some(""), Some("u1")).unwrap_err();
        assert!(errors.get("search").is_some());
        assert!(errors.get("userId").is_none());
    }

    #[test]
    fn rejects_missing_search() {
        let errors = validate_search_form(None, Some("u1")).unwrap_err();
        assert!(errors.get("search").is_some());
    }

    #[test]
    fn rejects_missing_user_id() {
        let errors = validate_search_form(Some("cats"), None).unwrap_err();
        assert_eq!(errors.get("userId"), Some("Required"));
    }

    #[test]
    fn empty_user_id_is_accepted_as_a_string() {
        // Presence is required, emptiness is not rejected at this layer.
        assert!(validate_search_form(Some("cats"), Some("")).is_ok());
    }

    #[test]
    fn collects_both_errors_at_once() {
        let errors = validate_search_form(None, None).unwrap_err();
        assert!(errors.get("search").is_some());
        assert!(errors.get("userId").is_some());
    }
}
