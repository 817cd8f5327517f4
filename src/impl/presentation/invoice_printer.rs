use crate::entities::{InvoiceDocument, InvoiceItem, InvoiceTotals};
use crate::errors::RowError;
use crate::presentation::utils::{format_amount, wrap_value};

const PAGE_WIDTH: usize = 78;
const ITEMS_PER_PAGE: usize = 20;

/// Renders one [`InvoiceDocument`] into a fixed-width plaintext page
/// layout. Rendering is pure: the same document always yields the same
/// bytes. Item tables overflowing a page continue on follow-up pages
/// (separated by form feeds), repeating only the table header; totals,
/// payment and bank blocks always land on the final page.
pub(crate) struct InvoicePrinter;

impl InvoicePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_invoice(&self, doc: &InvoiceDocument) -> Result<Vec<u8>, RowError> {
        if doc.items.is_empty() {
            return Err(RowError::RenderError {
                reason: "invoice has no line items".to_string(),
            });
        }
        if let Some(item) = doc.items.iter().find(|item| item.quantity == 0) {
            return Err(RowError::RenderError {
                reason: format!("non-positive quantity for item '{}'", item.description),
            });
        }

        let mut lines: Vec<String> = Vec::new();
        let pages: Vec<&[InvoiceItem]> = doc.items.chunks(ITEMS_PER_PAGE).collect();
        let last_page = pages.len() - 1;
        for (page_index, page_items) in pages.iter().enumerate() {
            if page_index == 0 {
                self.print_company_block(&mut lines, doc);
                self.print_invoice_block(&mut lines, doc);
                self.print_bill_to_block(&mut lines, doc);
            } else {
                // Form feed is whitespace; bypass the trimming helper.
                lines.push("\u{c}".to_string());
                push(
                    &mut lines,
                    format!("INVOICE {} (continued)", doc.invoice_number),
                );
                push(&mut lines, thin_divider());
            }
            self.print_item_table(&mut lines, doc, page_items, page_index * ITEMS_PER_PAGE);
            if page_index == last_page {
                self.print_totals_block(&mut lines, doc);
                self.print_payment_block(&mut lines, doc);
                self.print_footer_block(&mut lines, doc);
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out.into_bytes())
    }

    fn print_company_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        // The plaintext layout has no imagery; the logo slot renders as
        // bracketed initials whether or not a logo reference is set.
        let initials: String = doc.company.name.chars().take(2).collect();
        push(
            lines,
            format!("[{}]  {}", initials.to_uppercase(), doc.company.name),
        );
        push(lines, format!("      {}", doc.company.tagline));
        push(lines, format!("      {}", doc.company.address));
        push(
            lines,
            format!(
                "      Tel: {} | Email: {}",
                doc.company.phone, doc.company.email
            ),
        );
        push(lines, thick_divider());
    }

    fn print_invoice_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        push(
            lines,
            format!(
                "{:<39}{:>39}",
                "INVOICE / NOTA",
                format!("#{}", doc.invoice_number)
            ),
        );
        let date = if doc.order_date.is_empty() {
            doc.generated_on.format("%Y-%m-%d").to_string()
        } else {
            doc.order_date.clone()
        };
        push(
            lines,
            format!(
                "{:<39}{:>39}",
                format!("Order: {}", doc.order_id),
                format!("Date: {}", date)
            ),
        );
        push(lines, thin_divider());
    }

    fn print_bill_to_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        push(lines, "BILL TO".to_string());
        push(lines, format!("  Name    : {}", doc.customer_name));
        let address = wrap_value(&doc.address, 50);
        push(lines, format!("  Address : {}", address[0]));
        for continuation in &address[1..] {
            push(lines, format!("            {}", continuation));
        }
        let phone = if doc.phone.is_empty() { "-" } else { &doc.phone };
        push(lines, format!("  Phone   : {}", phone));
        push(lines, thin_divider());
    }

    fn print_item_table(
        &self,
        lines: &mut Vec<String>,
        doc: &InvoiceDocument,
        page_items: &[InvoiceItem],
        numbering_offset: usize,
    ) {
        let priced = matches!(doc.totals, InvoiceTotals::Priced { .. });
        if priced {
            push(
                lines,
                format!(
                    " {:>2}  {:<26} {:<8} {:>4}  {:>15}  {:>15}",
                    "No", "Description", "Size", "Qty", "Unit Price", "Subtotal"
                ),
            );
        } else {
            push(
                lines,
                format!(
                    " {:>2}  {:<40} {:<12} {:>6}",
                    "No", "Description", "Size", "Qty"
                ),
            );
        }
        push(lines, thin_divider());
        for (i, item) in page_items.iter().enumerate() {
            let number = numbering_offset + i + 1;
            match &doc.totals {
                InvoiceTotals::Priced {
                    unit_price,
                    currency,
                    ..
                } => {
                    let subtotal = unit_price * f64::from(item.quantity);
                    push(
                        lines,
                        format!(
                            " {:>2}  {:<26} {:<8} {:>4}  {:>15}  {:>15}",
                            number,
                            clip(&item.description, 26),
                            clip(&item.size, 8),
                            item.quantity,
                            format_amount(*unit_price, *currency),
                            format_amount(subtotal, *currency),
                        ),
                    );
                }
                InvoiceTotals::QuantityOnly { .. } => {
                    push(
                        lines,
                        format!(
                            " {:>2}  {:<40} {:<12} {:>6}",
                            number,
                            clip(&item.description, 40),
                            clip(&item.size, 12),
                            item.quantity,
                        ),
                    );
                }
            }
        }
        push(lines, thin_divider());
    }

    fn print_totals_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        match &doc.totals {
            InvoiceTotals::Priced {
                currency,
                total,
                amount_paid,
                balance_due,
                down_payment,
                ..
            } => {
                push(
                    lines,
                    totals_line("Total:", &format_amount(*total, *currency)),
                );
                let paid_label = if *down_payment {
                    "DP 50% paid:"
                } else {
                    "Amount paid:"
                };
                push(
                    lines,
                    totals_line(paid_label, &format_amount(*amount_paid, *currency)),
                );
                if *balance_due > 0.0 {
                    push(
                        lines,
                        totals_line("BALANCE DUE:", &format_amount(*balance_due, *currency)),
                    );
                }
            }
            InvoiceTotals::QuantityOnly { total_quantity } => {
                push(
                    lines,
                    totals_line("Total quantity:", &total_quantity.to_string()),
                );
            }
        }
        push(lines, String::new());
        push(
            lines,
            format!("{:^PAGE_WIDTH$}", format!("STATUS: {}", doc.payment_status)),
        );
        push(lines, String::new());
    }

    fn print_payment_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        push(lines, "PAYMENT METHOD".to_string());
        let method = if doc.payment_method.is_empty() {
            "-"
        } else {
            &doc.payment_method
        };
        push(lines, format!("  {}", method));
        if doc.balance_remaining() {
            push(lines, String::new());
            push(lines, "Transfer to:".to_string());
            push(lines, format!("  Bank        : {}", doc.bank.bank_name));
            push(
                lines,
                format!("  Account no. : {}", doc.bank.account_number),
            );
            push(
                lines,
                format!("  Holder      : {}", doc.bank.account_holder),
            );
        }
    }

    fn print_footer_block(&self, lines: &mut Vec<String>, doc: &InvoiceDocument) {
        push(lines, thin_divider());
        push(
            lines,
            format!(
                "{:^PAGE_WIDTH$}",
                format!("Thank you for your order! | {}", doc.company.website)
            ),
        );
        push(
            lines,
            format!(
                "{:^PAGE_WIDTH$}",
                "This invoice is valid proof of purchase. Please keep it for reference."
            ),
        );
    }
}

fn push(lines: &mut Vec<String>, line: String) {
    lines.push(line.trim_end().to_string());
}

fn totals_line(label: &str, amount: &str) -> String {
    format!("{:>60} {:>17}", label, amount)
}

fn thick_divider() -> String {
    "=".repeat(PAGE_WIDTH)
}

fn thin_divider() -> String {
    "-".repeat(PAGE_WIDTH)
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
