use chrono::NaiveDate;

use crate::entities::{
    BankConfig, CompanyConfig, InvoiceDocument, InvoiceItem, InvoiceLine, InvoiceTotals,
    PaymentStatus, PricingConfig,
};

pub(crate) struct InvoiceComposer<'a> {
    company: &'a CompanyConfig,
    bank: &'a BankConfig,
    pricing: &'a PricingConfig,
    generated_on: NaiveDate,
}

impl<'a> InvoiceComposer<'a> {
    pub(crate) fn new(
        company: &'a CompanyConfig,
        bank: &'a BankConfig,
        pricing: &'a PricingConfig,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            company,
            bank,
            pricing,
            generated_on,
        }
    }

    /// Build the document for one normalized line. `sequence` is the
    /// 1-based position within the batch; combined with the generation
    /// date it makes the invoice number unique for the run without any
    /// persisted cross-run state.
    pub(crate) fn compose(&self, line: &InvoiceLine, sequence: u32) -> InvoiceDocument {
        let invoice_number = format!(
            "INV-{}-{:03}",
            self.generated_on.format("%Y%m%d"),
            sequence
        );
        InvoiceDocument {
            invoice_number,
            generated_on: self.generated_on,
            order_id: line.order_id.clone(),
            order_date: line.order_date.clone(),
            customer_name: line.customer_name.clone(),
            address: line.address.clone(),
            phone: line.phone.clone(),
            payment_method: line.payment_method.clone(),
            payment_status: line.payment_status,
            items: vec![InvoiceItem {
                description: self.pricing.item_label.clone(),
                size: line.size.clone(),
                quantity: line.quantity,
            }],
            totals: self.totals(line),
            company: self.company.clone(),
            bank: self.bank.clone(),
        }
    }

    fn totals(&self, line: &InvoiceLine) -> InvoiceTotals {
        let Some(unit_price) = self.pricing.unit_price else {
            return InvoiceTotals::QuantityOnly {
                total_quantity: line.quantity,
            };
        };

        let total = unit_price * f64::from(line.quantity);
        let method = line.payment_method.to_lowercase();
        let down_payment = method.contains("dp") || method.contains("50%");
        let amount_paid = if down_payment {
            total * 0.5
        } else if line.payment_status == PaymentStatus::Paid {
            total
        } else {
            0.0
        };
        InvoiceTotals::Priced {
            unit_price,
            currency: self.pricing.currency,
            total,
            amount_paid,
            balance_due: total - amount_paid,
            down_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(quantity: u32, method: &str, status: PaymentStatus) -> InvoiceLine {
        InvoiceLine {
            order_id: "A-1".to_string(),
            customer_name: "Budi".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            size: "L".to_string(),
            quantity,
            payment_method: method.to_string(),
            payment_status: status,
            phone: String::new(),
            order_date: String::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn invoice_number_combines_date_and_sequence() {
        let (company, bank, pricing) = Default::default();
        let composer = InvoiceComposer::new(&company, &bank, &pricing, date());
        let doc = composer.compose(&line(1, "Transfer", PaymentStatus::Paid), 7);
        assert_eq!(doc.invoice_number, "INV-20260829-007");
    }

    #[test]
    fn sequences_yield_distinct_invoice_numbers() {
        let (company, bank, pricing) = Default::default();
        let composer = InvoiceComposer::new(&company, &bank, &pricing, date());
        let l = line(1, "Transfer", PaymentStatus::Paid);
        let numbers: Vec<String> = (1..=25)
            .map(|seq| composer.compose(&l, seq).invoice_number)
            .collect();
        let mut deduped = numbers.clone();
        deduped.dedup();
        assert_eq!(numbers, deduped);
    }

    #[test]
    fn paid_order_has_no_balance_due() {
        let (company, bank, pricing) = Default::default();
        let composer = InvoiceComposer::new(&company, &bank, &pricing, date());
        let doc = composer.compose(&line(3, "Transfer", PaymentStatus::Paid), 1);
        assert_eq!(
            doc.totals,
            InvoiceTotals::Priced {
                unit_price: 100_000.0,
                currency: iso_currency::Currency::IDR,
                total: 300_000.0,
                amount_paid: 300_000.0,
                balance_due: 0.0,
                down_payment: false,
            }
        );
        assert!(!doc.balance_remaining());
    }

    #[test]
    fn down_payment_method_splits_the_total() {
        let (company, bank, pricing) = Default::default();
        let composer = InvoiceComposer::new(&company, &bank, &pricing, date());
        let doc = composer.compose(&line(2, "DP 50%", PaymentStatus::Unpaid), 1);
        match doc.totals {
            InvoiceTotals::Priced {
                amount_paid,
                balance_due,
                down_payment,
                ..
            } => {
                assert_eq!(amount_paid, 100_000.0);
                assert_eq!(balance_due, 100_000.0);
                assert!(down_payment);
            }
            other => panic!("expected priced totals, got {:?}", other),
        }
    }

    #[test]
    fn missing_unit_price_degrades_to_quantity_only() {
        let (company, bank) = Default::default();
        let pricing = PricingConfig {
            unit_price: None,
            ..Default::default()
        };
        let composer = InvoiceComposer::new(&company, &bank, &pricing, date());
        let doc = composer.compose(&line(4, "Cash", PaymentStatus::Unknown), 1);
        assert_eq!(doc.totals, InvoiceTotals::QuantityOnly { total_quantity: 4 });
        assert!(doc.balance_remaining());
    }
}
