use std::collections::HashMap;

/// One unparsed CSV row, keyed by the original (trimmed) header strings.
/// Ephemeral: consumed by the row normalizer and never seen downstream.
///
/// Duplicated header names keep the first column's value, consistent
/// with the column resolver mapping the first matching header.
#[derive(Debug, Clone, Default)]
pub struct RawOrderRow {
    values: HashMap<String, String>,
}

impl RawOrderRow {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, header: String, value: String) {
        self.values.entry(header).or_insert(value);
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.values.get(header).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for RawOrderRow {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

/// The parsed upload: header sequence in original order, plus one
/// [`RawOrderRow`] per data row.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawOrderRow>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn duplicated_headers_keep_the_first_value() {
        let row: RawOrderRow = [("Nama", "Budi"), ("Nama", "Siti")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(row.get("Nama"), Some("Budi"));
    }
}
