use crate::data::models::quantity_model::QuantityModel;
use crate::entities::{CanonicalField, FieldMapping, InvoiceLine, PaymentStatus, RawOrderRow};
use crate::errors::RowError;

/// An [`InvoiceLine`] plus the non-fatal notes produced while coercing
/// it (defaulted quantity, for example).
#[derive(Debug)]
pub(crate) struct NormalizedRow {
    pub(crate) line: InvoiceLine,
    pub(crate) warnings: Vec<String>,
}

pub(crate) struct RowNormalizer<'a> {
    mapping: &'a FieldMapping,
}

impl<'a> RowNormalizer<'a> {
    pub(crate) fn new(mapping: &'a FieldMapping) -> Self {
        Self { mapping }
    }

    /// Coerce one raw row. Only a blank OrderId or CustomerName rejects
    /// the row; every other problem degrades to a default plus warning.
    pub(crate) fn normalize(&self, row: &RawOrderRow) -> Result<NormalizedRow, RowError> {
        let order_id = self.text(row, CanonicalField::OrderId);
        if order_id.is_empty() {
            return Err(RowError::InvalidRow {
                reason: "order id is empty".to_string(),
            });
        }
        let customer_name = self.text(row, CanonicalField::CustomerName);
        if customer_name.is_empty() {
            return Err(RowError::InvalidRow {
                reason: "customer name is empty".to_string(),
            });
        }

        let mut warnings = Vec::new();
        let raw_quantity = self.text(row, CanonicalField::Quantity);
        let quantity = match raw_quantity.parse::<QuantityModel>() {
            Ok(QuantityModel(q)) => q,
            Err(_) => {
                warnings.push(format!(
                    "quantity '{}' is not a positive number, defaulting to 1",
                    raw_quantity
                ));
                1
            }
        };

        Ok(NormalizedRow {
            line: InvoiceLine {
                order_id,
                customer_name,
                address: self.text(row, CanonicalField::Address),
                size: self.text(row, CanonicalField::Size),
                quantity,
                payment_method: self.text(row, CanonicalField::PaymentMethod),
                payment_status: PaymentStatus::from_raw(&self.text(row, CanonicalField::PaymentStatus)),
                phone: self.text(row, CanonicalField::Phone),
                order_date: self.text(row, CanonicalField::OrderDate),
            },
            warnings,
        })
    }

    fn text(&self, row: &RawOrderRow, field: CanonicalField) -> String {
        self.mapping
            .header(field)
            .and_then(|header| row.get(header))
            .unwrap_or("")
            .trim()
            .to_string()
    }
}
