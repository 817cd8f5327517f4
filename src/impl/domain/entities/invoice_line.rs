use std::fmt;

/// Normalized payment status. Unrecognized raw text maps to `Unknown`
/// rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Unknown,
}

impl PaymentStatus {
    /// Case-insensitive partial match against known variants. Negations
    /// are checked first so "unpaid" never hits the "paid" keyword.
    pub fn from_raw(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            return PaymentStatus::Unknown;
        }
        if lower.contains("unpaid") || lower.contains("belum") || lower.contains("pending") {
            return PaymentStatus::Unpaid;
        }
        if lower.contains("lunas") || lower.contains("paid") || lower.contains("dibayar") {
            return PaymentStatus::Paid;
        }
        PaymentStatus::Unknown
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// One validated, coerced order row. Immutable once built by the row
/// normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    /// Non-empty after trimming; rows violating this are rejected.
    pub order_id: String,
    /// Non-empty after trimming; rows violating this are rejected.
    pub customer_name: String,
    pub address: String,
    pub size: String,
    /// Always positive; unparsable or non-positive input defaults to 1
    /// with a recorded warning.
    pub quantity: u32,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub phone: String,
    /// Raw order timestamp/date text from the upload, rendered verbatim.
    /// Empty when the upload has no such column.
    pub order_date: String,
}
