use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::data::repositories::orders_repository_impl::OrdersRepositoryImpl;
use crate::domain::logic::column_resolver::ColumnResolver;
use crate::domain::logic::invoice_composer::InvoiceComposer;
use crate::domain::logic::row_normalizer::RowNormalizer;
use crate::domain::repositories::orders_repository::OrdersRepository;
use crate::entities::{
    BankConfig, BatchResult, CompanyConfig, OrderTable, PricingConfig, RenderedOutput, RowFailure,
    RowWarning,
};
use crate::errors::Error;
use crate::presentation::invoice_printer::InvoicePrinter;
use crate::presentation::utils::sanitize_filename;

#[async_trait]
pub trait GenerateUsecase: Send + Sync {
    async fn from_string(
        &self,
        orders_csv: &str,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error>;

    async fn from_file<P>(
        &self,
        orders_csv: P,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct GenerateUsecaseImpl<
    R1 = OrdersRepositoryImpl, // Default.
> where
    R1: OrdersRepository,
{
    orders_repository: R1,
}

#[async_trait]
impl<R1> GenerateUsecase for GenerateUsecaseImpl<R1>
where
    R1: OrdersRepository,
{
    async fn from_string(
        &self,
        orders_csv: &str,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error> {
        let table = self.orders_repository.from_string(orders_csv)?;
        self.generate(&table, company, bank, pricing, generated_on)
    }

    async fn from_file<P>(
        &self,
        orders_csv: P,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let table = self.orders_repository.from_file(orders_csv).await?;
        self.generate(&table, company, bank, pricing, generated_on)
    }
}

impl GenerateUsecaseImpl<OrdersRepositoryImpl> {
    pub(crate) fn new() -> Self {
        GenerateUsecaseImpl {
            orders_repository: OrdersRepositoryImpl::new(),
        }
    }
}

impl<R1> GenerateUsecaseImpl<R1>
where
    R1: OrdersRepository,
{
    /// Drive the whole pipeline over the parsed table. Column resolution
    /// happens once, before any row work, so a missing required column
    /// aborts with no partial output. Individual row failures are
    /// recorded and skipped; the run only fails wholesale when nothing
    /// succeeds.
    fn generate(
        &self,
        table: &OrderTable,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error> {
        let (mapping, mut warnings) = ColumnResolver::resolve(&table.headers)?;
        let normalizer = RowNormalizer::new(&mapping);
        let composer = InvoiceComposer::new(company, bank, pricing, generated_on);
        let printer = InvoicePrinter::new();

        let mut outputs = Vec::new();
        let mut errors = Vec::new();
        let mut filenames = FilenameAllocator::new();
        let mut sequence: u32 = 0;
        for (row_index, row) in table.rows.iter().enumerate() {
            let normalized = match normalizer.normalize(row) {
                Ok(normalized) => normalized,
                Err(error) => {
                    tracing::warn!(row_index, %error, "row skipped");
                    errors.push(RowFailure { row_index, error });
                    continue;
                }
            };
            warnings.extend(normalized.warnings.into_iter().map(|message| RowWarning {
                row_index: Some(row_index),
                message,
            }));

            sequence += 1;
            let document = composer.compose(&normalized.line, sequence);
            let bytes = match printer.print_invoice(&document) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::warn!(row_index, %error, "render failed");
                    errors.push(RowFailure { row_index, error });
                    continue;
                }
            };

            let safe_name = sanitize_filename(&document.customer_name);
            let base = if safe_name.is_empty() {
                document.invoice_number.clone()
            } else {
                format!("{}_{}", document.invoice_number, safe_name)
            };
            outputs.push(RenderedOutput {
                filename: filenames.allocate(&base, "txt"),
                bytes,
            });
        }

        if outputs.is_empty() {
            return Err(Error::EmptyBatch {
                details: format!("0 of {} rows produced an invoice", table.rows.len()),
            });
        }
        tracing::info!(
            succeeded = outputs.len(),
            failed = errors.len(),
            "batch complete"
        );
        Ok(BatchResult {
            outputs,
            errors,
            warnings,
        })
    }
}

/// Hands out unique filenames in insertion order: the first taker of a
/// base name gets it as-is, later takers get `-2`, `-3`, ... suffixes.
struct FilenameAllocator {
    seen: HashMap<String, u32>,
}

impl FilenameAllocator {
    fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    fn allocate(&mut self, base: &str, extension: &str) -> String {
        let count = self
            .seen
            .entry(base.to_string())
            .and_modify(|c| *c += 1)
            .or_insert(1);
        if *count == 1 {
            format!("{}.{}", base, extension)
        } else {
            format!("{}-{}.{}", base, count, extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::errors::RowError;

    use super::*;

    const FORM_HEADER: &str = "ORDER-ID, Nama Lengkap, Alamat Pengiriman, Ukuran Kaos (size), Jumlah (QTY), Metode Pembayaran, STATUS PEMBAYARAN";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    async fn run(csv: &str) -> Result<BatchResult, Error> {
        let (company, bank, pricing) = Default::default();
        GenerateUsecaseImpl::new()
            .from_string(csv, &company, &bank, &pricing, date())
            .await
    }

    #[tokio::test]
    async fn single_valid_row_produces_one_invoice() {
        let csv = format!(
            "{}\nA-1, Budi, Jl. Merdeka 1, L, 3, Transfer, LUNAS\n",
            FORM_HEADER
        );
        let result = run(&csv).await.unwrap();
        assert_eq!(result.success_count(), 1);
        assert_eq!(result.errors, vec![]);
        assert_eq!(result.outputs[0].filename, "INV-20260829-001_Budi.txt");
        let text = String::from_utf8(result.outputs[0].bytes.clone()).unwrap();
        assert!(text.contains("STATUS: PAID"));
        assert!(text.contains("3"));
    }

    #[tokio::test]
    async fn bad_rows_are_recorded_and_skipped_without_aborting() {
        let csv = format!(
            "{}\n, Budi, x, L, 3, Transfer, LUNAS\nA-2, Siti, y, M, abc, Transfer, BELUM\n",
            FORM_HEADER
        );
        let result = run(&csv).await.unwrap();
        // Row 0 lacks an order id; row 1 succeeds with a defaulted quantity.
        assert_eq!(result.success_count(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row_index, 0);
        assert!(matches!(result.errors[0].error, RowError::InvalidRow { .. }));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.row_index == Some(1) && w.message.contains("abc")));
        let text = String::from_utf8(result.outputs[0].bytes.clone()).unwrap();
        assert!(text.contains("STATUS: UNPAID"));
    }

    #[tokio::test]
    async fn invoice_numbers_and_filenames_are_unique_within_a_batch() {
        let rows: String = (0..12)
            .map(|i| format!("A-{}, Budi, x, L, 1, Transfer, LUNAS\n", i))
            .collect();
        let csv = format!("{}\n{}", FORM_HEADER, rows);
        let result = run(&csv).await.unwrap();
        assert_eq!(result.success_count(), 12);
        let mut filenames: Vec<&String> =
            result.outputs.iter().map(|o| &o.filename).collect();
        filenames.sort();
        filenames.dedup();
        assert_eq!(filenames.len(), 12);
        assert_eq!(result.outputs[11].filename, "INV-20260829-012_Budi.txt");
    }

    #[tokio::test]
    async fn missing_required_column_aborts_before_any_row() {
        let csv = "ORDER-ID, Alamat, Jumlah (QTY)\nA-1, x, 3\n";
        let err = run(csv).await.unwrap_err();
        assert!(matches!(err, Error::MissingRequiredColumn { .. }));
    }

    #[tokio::test]
    async fn all_rows_failing_is_an_empty_batch_error() {
        let csv = format!("{}\n, Budi, x, L, 3, Transfer, LUNAS\n", FORM_HEADER);
        let err = run(&csv).await.unwrap_err();
        assert!(matches!(err, Error::EmptyBatch { .. }));
    }

    #[test]
    fn filename_collisions_get_deterministic_suffixes() {
        let mut allocator = FilenameAllocator::new();
        assert_eq!(allocator.allocate("INV-1_Budi", "txt"), "INV-1_Budi.txt");
        assert_eq!(allocator.allocate("INV-1_Budi", "txt"), "INV-1_Budi-2.txt");
        assert_eq!(allocator.allocate("INV-1_Budi", "txt"), "INV-1_Budi-3.txt");
        assert_eq!(allocator.allocate("INV-2_Siti", "txt"), "INV-2_Siti.txt");
    }
}
