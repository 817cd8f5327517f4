use crate::entities::{OrderTable, RawOrderRow};
use crate::errors::Error;

pub(crate) trait OrdersCsvDatasource {
    fn from_string(&self, s: &str) -> Result<OrderTable, Error>;
}

pub(crate) struct OrdersCsvDatasourceImpl;

impl OrdersCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl OrdersCsvDatasource for OrdersCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<OrderTable, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());

        // Form exports often carry stray whitespace around header names.
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record.map_err(Error::from).map(|record| {
                    headers
                        .iter()
                        .enumerate()
                        .map(|(i, header)| {
                            (header.clone(), record.get(i).unwrap_or("").to_string())
                        })
                        .collect::<RawOrderRow>()
                })
            })
            .collect::<Result<Vec<RawOrderRow>, Error>>()?;

        tracing::debug!(headers = headers.len(), rows = rows.len(), "parsed order table");
        Ok(OrderTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trims_headers_and_keeps_row_order() {
        let table = OrdersCsvDatasourceImpl::new()
            .from_string(" ORDER-ID , Nama Lengkap\nA-1,Budi\nA-2,Siti\n")
            .unwrap();
        assert_eq!(table.headers, vec!["ORDER-ID", "Nama Lengkap"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("ORDER-ID"), Some("A-1"));
        assert_eq!(table.rows[1].get("Nama Lengkap"), Some("Siti"));
    }

    #[test]
    fn duplicated_header_columns_resolve_to_the_first_occurrence() {
        let table = OrdersCsvDatasourceImpl::new()
            .from_string("Nama,Nama,qty\nBudi,Siti,3\n")
            .unwrap();
        assert_eq!(table.headers, vec!["Nama", "Nama", "qty"]);
        assert_eq!(table.rows[0].get("Nama"), Some("Budi"));
    }

    #[test]
    fn short_rows_fill_missing_cells_with_empty_strings() {
        let table = OrdersCsvDatasourceImpl::new()
            .from_string("a,b,c\n1,2\n")
            .unwrap();
        assert_eq!(table.rows[0].get("c"), Some(""));
    }
}
