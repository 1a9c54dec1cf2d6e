//! Form Fields
//!
//! Ordered name/value pairs, serialized the way a browser serializes a form.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const CSRF_FIELD: &str = "csrf_token";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_csrf(token: &str) -> Self {
        let mut fields = Self::new();
        fields.push(CSRF_FIELD, token);
        fields
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string().replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_order_and_escapes() {
        let mut fields = FormFields::with_csrf("a/b+c");
        fields.push("name", "Week 1 & 2");
        fields.push("ajax", "true");
        assert_eq!(fields.encode(), "csrf_token=a%2Fb%2Bc&name=Week+1+%26+2&ajax=true");
    }

    #[test]
    fn test_encode_unreserved_and_unicode() {
        let mut fields = FormFields::new();
        fields.push("q", "it's (fine)!~*._-");
        fields.push("t", "é");
        assert_eq!(fields.encode(), "q=it's+(fine)!~*._-&t=%C3%A9");
    }

    #[test]
    fn test_empty_and_lookup() {
        let mut fields = FormFields::new();
        assert_eq!(fields.encode(), "");
        fields.push("x", "1");
        fields.push("x", "2");
        assert_eq!(fields.get("x"), Some("1"));
        assert_eq!(fields.get("y"), None);
        assert_eq!(fields.len(), 2);
    }
}
