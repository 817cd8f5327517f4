use async_trait::async_trait;

use crate::entities::OrderTable;
use crate::errors::Error;

#[async_trait]
pub(crate) trait OrdersRepository: Send + Sync {
    fn from_string(&self, orders_csv: &str) -> Result<OrderTable, Error>;

    async fn from_file<P>(&self, orders_csv: P) -> Result<OrderTable, Error>
    where
        P: AsRef<std::path::Path> + Send;
}
