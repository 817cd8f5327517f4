use std::collections::HashMap;
use std::fmt;

/// Fixed semantic columns every resolved order row exposes. Phone and
/// OrderDate are extras commonly present in form exports; all others come
/// from the canonical order sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    OrderId,
    CustomerName,
    Address,
    Size,
    Quantity,
    PaymentMethod,
    PaymentStatus,
    Phone,
    OrderDate,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 9] = [
        CanonicalField::OrderId,
        CanonicalField::CustomerName,
        CanonicalField::Address,
        CanonicalField::Size,
        CanonicalField::Quantity,
        CanonicalField::PaymentMethod,
        CanonicalField::PaymentStatus,
        CanonicalField::Phone,
        CanonicalField::OrderDate,
    ];

    /// Fields without which no invoice can be produced at all. Everything
    /// else degrades to a blank value with a recorded warning.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            CanonicalField::OrderId | CanonicalField::CustomerName | CanonicalField::Quantity
        )
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CanonicalField::OrderId => "OrderId",
            CanonicalField::CustomerName => "CustomerName",
            CanonicalField::Address => "Address",
            CanonicalField::Size => "Size",
            CanonicalField::Quantity => "Quantity",
            CanonicalField::PaymentMethod => "PaymentMethod",
            CanonicalField::PaymentStatus => "PaymentStatus",
            CanonicalField::Phone => "Phone",
            CanonicalField::OrderDate => "OrderDate",
        };
        write!(f, "{}", s)
    }
}

/// Canonical field -> originating header actually present in the upload.
/// Built once per batch, before any row is processed.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    columns: HashMap<CanonicalField, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    pub fn insert(&mut self, field: CanonicalField, header: String) {
        self.columns.insert(field, header);
    }

    pub fn header(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }
}
