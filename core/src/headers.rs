//! An ordered collection of HTTP header fields with grouped lookup.
//!
//! # Design
//! `Headers` keeps two views of the same data: the entries in original
//! insertion order, and a grouped index from name to the ordered values
//! under that name. Both are built by a single pass at construction and
//! never change afterwards; building a new `Headers` is the only way to
//! "modify" one. Lookup is total and case-sensitive: an absent name yields
//! an empty string / empty slice, while a header present with an empty
//! value yields `[""]`, so the two cases stay distinguishable.

use std::collections::HashMap;
use std::fmt;
use std::slice;

use crate::header::Header;

/// The full ordered header list of an HTTP message.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<Header>,
    grouped: HashMap<String, Vec<String>>,
}

impl Headers {
    /// Build from a finite entry list, grouping values by name while
    /// preserving per-name insertion order.
    pub fn new(entries: Vec<Header>) -> Headers {
        let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
        for header in &entries {
            grouped
                .entry(header.name.clone())
                .or_default()
                .push(header.value.clone());
        }
        Headers { entries, grouped }
    }

    pub fn empty() -> Headers {
        Headers::default()
    }

    /// The values under `name` combined into one comma-separated string
    /// (RFC 2616 4.2 treatment of repeated field names), or the empty
    /// string if `name` never appeared.
    pub fn value(&self, name: &str) -> String {
        self.values(name).join(",")
    }

    /// The raw ordered values under `name`, or an empty slice.
    pub fn values(&self, name: &str) -> &[String] {
        self.grouped.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate all headers in original input order, not grouped order.
    pub fn iter(&self) -> slice::Iter<'_, Header> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The grouped index is a pure function of the entries, so comparing the
// entries alone is enough.
impl PartialEq for Headers {
    fn eq(&self, other: &Headers) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Headers {}

impl FromIterator<Header> for Headers {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Headers {
        Headers::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, header) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{header}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated(name: &str) -> Headers {
        Headers::new(vec![
            Header::new(name, "first"),
            Header::new(name, "second"),
            Header::new(name, "third"),
            Header::new(name, "fourth"),
        ])
    }

    #[test]
    fn value_comma_joins_repeated_names_in_insertion_order() {
        assert_eq!(repeated("name").value("name"), "first,second,third,fourth");
    }

    #[test]
    fn values_returns_the_raw_ordered_list() {
        assert_eq!(
            repeated("name").values("name"),
            ["first", "second", "third", "fourth"]
        );
    }

    #[test]
    fn absent_name_yields_empty_string_and_empty_list() {
        let headers = repeated("name");
        assert_eq!(headers.value("missing"), "");
        assert!(headers.values("missing").is_empty());
        assert_eq!(Headers::empty().value("anything"), "");
    }

    #[test]
    fn empty_value_is_distinguishable_from_absent() {
        let headers = Headers::new(vec![Header::new("name", "")]);
        assert_eq!(headers.value("name"), "");
        assert_eq!(headers.values("name"), [""]);
        assert!(headers.values("other").is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let headers = Headers::new(vec![Header::new("Name", "value")]);
        assert_eq!(headers.value("Name"), "value");
        assert_eq!(headers.value("name"), "");
    }

    #[test]
    fn iteration_follows_original_input_order() {
        let headers = Headers::new(vec![
            Header::new("b", "1"),
            Header::new("a", "2"),
            Header::new("b", "3"),
        ]);
        let names: Vec<&str> = headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "b"]);
    }

    #[test]
    fn displays_one_header_per_line_in_input_order() {
        let headers = Headers::new(vec![Header::new("a", "1"), Header::new("b", "2")]);
        assert_eq!(headers.to_string(), "a: 1\nb: 2");
    }

    #[test]
    fn equality_ignores_the_derived_index() {
        let left = Headers::new(vec![Header::new("a", "1")]);
        let right: Headers = [Header::new("a", "1")].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, Headers::empty());
    }
}
