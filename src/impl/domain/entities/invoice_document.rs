use chrono::NaiveDate;
use iso_currency::Currency;

use super::config::{BankConfig, CompanyConfig};
use super::invoice_line::PaymentStatus;

/// One row of the item table.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub description: String,
    pub size: String,
    pub quantity: u32,
}

/// Computed payment summary. `QuantityOnly` is the deliberate degraded
/// mode used when the source data carries no price concept.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceTotals {
    QuantityOnly {
        total_quantity: u32,
    },
    Priced {
        unit_price: f64,
        currency: Currency,
        total: f64,
        amount_paid: f64,
        balance_due: f64,
        /// True when the payment method indicates a 50% down payment.
        down_payment: bool,
    },
}

/// Fully composed invoice, ready for rendering. Carries everything the
/// renderer needs so that rendering stays pure: identical documents
/// always produce byte-identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    /// Unique within a batch: generation-date prefix + zero-padded
    /// sequence number.
    pub invoice_number: String,
    pub generated_on: NaiveDate,
    pub order_id: String,
    /// Raw order timestamp text, possibly empty.
    pub order_date: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub items: Vec<InvoiceItem>,
    pub totals: InvoiceTotals,
    pub company: CompanyConfig,
    pub bank: BankConfig,
}

impl InvoiceDocument {
    /// Whether an unpaid balance remains, and transfer details should be
    /// shown. In quantity-only mode there are no amounts, so anything not
    /// marked PAID counts as outstanding.
    pub fn balance_remaining(&self) -> bool {
        match &self.totals {
            InvoiceTotals::Priced { balance_due, .. } => *balance_due > 0.0,
            InvoiceTotals::QuantityOnly { .. } => self.payment_status != PaymentStatus::Paid,
        }
    }
}
