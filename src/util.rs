use chrono::{Local, NaiveDate};

use crate::{
    domain::usecases::generate_usecase::{GenerateUsecase as _, GenerateUsecaseImpl},
    entities::{BankConfig, BatchResult, CompanyConfig, PricingConfig},
    errors::Error,
};

/// Facade over the generation pipeline: CSV order export in, one
/// rendered invoice per selected row out, bundled in a [`BatchResult`]
/// for the caller's packaging step.
pub struct InvoiceMillUtil {
    generate_usecase: GenerateUsecaseImpl,
}

impl InvoiceMillUtil {
    pub fn new() -> Self {
        Self {
            generate_usecase: GenerateUsecaseImpl::new(),
        }
    }

    /// Generate invoices for every row of the given CSV text, dated
    /// today. Invoice numbers embed the generation date, so use
    /// [`Self::from_string_on`] when reproducible output is needed.
    pub async fn from_string(
        &self,
        orders_csv: &str,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
    ) -> Result<BatchResult, Error> {
        self.from_string_on(orders_csv, company, bank, pricing, Local::now().date_naive())
            .await
    }

    pub async fn from_string_on(
        &self,
        orders_csv: &str,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
        generated_on: NaiveDate,
    ) -> Result<BatchResult, Error> {
        self.generate_usecase
            .from_string(orders_csv, company, bank, pricing, generated_on)
            .await
    }

    pub async fn from_file<P>(
        &self,
        orders_csv: P,
        company: &CompanyConfig,
        bank: &BankConfig,
        pricing: &PricingConfig,
    ) -> Result<BatchResult, Error>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_file_on(orders_csv, company, bank, pricing, Local::now().date_naive())
            .await
    }

    pub async fn from_file_on<P>(
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
        self.generate_usecase
            .from_file(orders_csv, company, bank, pricing, generated_on)
            .await
    }
}

impl Default for InvoiceMillUtil {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn end_to_end_scenario_from_the_order_form_export() {
        let csv = "ORDER-ID, Nama Lengkap, Alamat Pengiriman, Ukuran Kaos (size), Jumlah (QTY), Metode Pembayaran, STATUS PEMBAYARAN\n\
                   A-1, Budi, Jl. Merdeka 1, L, 3, Transfer, LUNAS\n";
        let (company, bank, pricing) = Default::default();
        let result = InvoiceMillUtil::new()
            .from_string_on(
                csv,
                &company,
                &bank,
                &pricing,
                NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(result.success_count(), 1);
        assert_eq!(result.failure_count(), 0);
        let output = &result.outputs[0];
        assert_eq!(output.filename, "INV-20260829-001_Budi.txt");
        let text = String::from_utf8(output.bytes.clone()).unwrap();
        assert!(text.contains("Budi"));
        assert!(text.contains("Jl. Merdeka 1"));
        assert!(text.contains("STATUS: PAID"));
        assert!(text.contains("Rp 300,000.00"));
    }

    #[tokio::test]
    async fn reading_a_missing_file_is_a_read_error() {
        let (company, bank, pricing) = Default::default();
        let err = InvoiceMillUtil::new()
            .from_file("/definitely/not/here.csv", &company, &bank, &pricing)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ReadError(_)));
    }
}
