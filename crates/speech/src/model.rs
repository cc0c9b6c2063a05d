/// Ordered attribute collection parsed from a recognition response.
///
/// Attributes are (name, value) string pairs kept in insertion order.
/// Names repeat: every NBest hypothesis appends its own `Hypothesis`,
/// `Confidence`, ... entries, so this is a multi-entry list rather than a
/// deduplicating map. Created fresh per call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechResponse {
    attributes: Vec<(String, String)>,
}

impl SpeechResponse {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute. Existing entries with the same name are kept.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the first attribute with the given name.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values recorded under the given name, in insertion order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.attributes
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attribute entries.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no attributes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_are_kept_in_order() {
        let mut response = SpeechResponse::new();
        response.add_attribute("Hypothesis", "first");
        response.add_attribute("Confidence", "0.9");
        response.add_attribute("Hypothesis", "second");

        assert_eq!(
            response.attributes(),
            &[
                ("Hypothesis".to_string(), "first".to_string()),
                ("Confidence".to_string(), "0.9".to_string()),
                ("Hypothesis".to_string(), "second".to_string()),
            ]
        );
        assert_eq!(response.len(), 3);
    }

    #[test]
    fn test_lookups() {
        let mut response = SpeechResponse::new();
        response.add_attribute("Hypothesis", "first");
        response.add_attribute("Hypothesis", "second");

        assert_eq!(response.first_value("Hypothesis"), Some("first"));
        assert_eq!(
            response.values("Hypothesis").collect::<Vec<_>>(),
            vec!["first", "second"]
        );
        assert_eq!(response.first_value("Status"), None);
    }

    #[test]
    fn test_empty() {
        let response = SpeechResponse::new();
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);
    }
}
