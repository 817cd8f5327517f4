use crate::entities::{CanonicalField, FieldMapping, RowWarning};
use crate::errors::Error;

/// Matching rules for one canonical field, evaluated in declaration
/// order. `exact` entries are compared against the whole normalized
/// header; `keywords` holds alternative groups, each of which matches
/// when all of its words appear as tokens of the header.
struct FieldRule {
    field: CanonicalField,
    exact: &'static [&'static str],
    keywords: &'static [&'static [&'static str]],
}

// Synonyms observed in real form exports (Indonesian order sheets plus
// their English equivalents). Keyword sets are chosen so no two fields
// can claim the same header.
const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: CanonicalField::OrderId,
        exact: &["order-id", "order id", "orderid"],
        keywords: &[&["order", "id"]],
    },
    FieldRule {
        field: CanonicalField::CustomerName,
        exact: &["nama lengkap", "nama", "name", "customer name"],
        keywords: &[&["nama"], &["name"], &["customer"]],
    },
    FieldRule {
        field: CanonicalField::Address,
        exact: &["alamat pengiriman", "alamat", "address"],
        keywords: &[&["alamat"], &["address"]],
    },
    FieldRule {
        field: CanonicalField::Size,
        exact: &["ukuran kaos (size)", "ukuran kaos", "ukuran", "size"],
        keywords: &[&["ukuran"], &["size"]],
    },
    FieldRule {
        field: CanonicalField::Quantity,
        exact: &["jumlah (qty)", "jumlah", "qty", "quantity"],
        keywords: &[&["qty"], &["jumlah"], &["quantity"]],
    },
    FieldRule {
        field: CanonicalField::PaymentMethod,
        exact: &["metode pembayaran", "metode", "payment method"],
        keywords: &[&["metode"], &["payment", "method"]],
    },
    FieldRule {
        field: CanonicalField::PaymentStatus,
        exact: &["status pembayaran", "status", "payment status"],
        keywords: &[&["status"]],
    },
    FieldRule {
        field: CanonicalField::Phone,
        exact: &["no hp", "no. hp", "nomor hp", "phone", "telepon"],
        keywords: &[&["hp"], &["phone"], &["telepon"]],
    },
    FieldRule {
        field: CanonicalField::OrderDate,
        exact: &["timestamp", "tanggal", "date"],
        keywords: &[&["timestamp"], &["tanggal"], &["date"]],
    },
];

pub(crate) struct ColumnResolver;

impl ColumnResolver {
    /// Resolve the uploaded header set into a [`FieldMapping`]. Per
    /// field: exact case-insensitive match first, keyword containment
    /// second, first header in upload order wins. Unresolvable required
    /// fields abort the batch; optional ones degrade to a warning.
    pub(crate) fn resolve(headers: &[String]) -> Result<(FieldMapping, Vec<RowWarning>), Error> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize(h)).collect();
        let tokenized: Vec<Vec<String>> = normalized.iter().map(|h| tokens(h)).collect();

        let mut mapping = FieldMapping::new();
        let mut warnings = Vec::new();
        for rule in FIELD_RULES {
            let exact_hit = normalized
                .iter()
                .position(|h| rule.exact.contains(&h.as_str()));
            let hit = exact_hit.or_else(|| {
                tokenized.iter().position(|header_tokens| {
                    rule.keywords.iter().any(|group| {
                        group
                            .iter()
                            .all(|kw| header_tokens.iter().any(|t| t == kw))
                    })
                })
            });

            match hit {
                Some(i) => mapping.insert(rule.field, headers[i].clone()),
                None if rule.field.is_required() => {
                    return Err(Error::MissingRequiredColumn { field: rule.field });
                }
                None => {
                    tracing::debug!(field = %rule.field, "no matching column, defaulting to blank");
                    warnings.push(RowWarning {
                        row_index: None,
                        message: format!(
                            "no column found for {}, values default to blank",
                            rule.field
                        ),
                    });
                }
            }
        }
        Ok((mapping, warnings))
    }
}

fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}

fn tokens(normalized_header: &str) -> Vec<String> {
    normalized_header
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
