use async_trait::async_trait;

use crate::data::datasources::orders_csv_datasource::{
    OrdersCsvDatasource, OrdersCsvDatasourceImpl,
};
use crate::domain::repositories::orders_repository::OrdersRepository;
use crate::entities::OrderTable;
use crate::errors::Error;

pub(crate) struct OrdersRepositoryImpl<
    DS = OrdersCsvDatasourceImpl, // Default.
> where
    DS: OrdersCsvDatasource + Send + Sync,
{
    orders_datasource: DS,
}

#[async_trait]
impl<DS> OrdersRepository for OrdersRepositoryImpl<DS>
where
    DS: OrdersCsvDatasource + Send + Sync,
{
    fn from_string(&self, orders_csv: &str) -> Result<OrderTable, Error> {
        self.orders_datasource.from_string(orders_csv)
    }

    async fn from_file<P>(&self, orders_csv: P) -> Result<OrderTable, Error>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&tokio::fs::read_to_string(orders_csv).await?)
    }
}

impl OrdersRepositoryImpl<OrdersCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        OrdersRepositoryImpl {
            orders_datasource: OrdersCsvDatasourceImpl::new(),
        }
    }
}
