use std::collections::HashMap;
use std::future::Future;

use crate::client::{
    ApiClient, ApiClientError, CallPath, HttpInfo, ParamValue, RequestOptions,
};
use crate::models::Order;

/// Parameters for [`StoreApi::delete_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOrderParams {
    /// ID of the order that needs to be deleted.
    pub order_id: String,
}

/// Parameters for [`StoreApi::get_inventory`].
///
/// The operation takes no inputs; the record exists so the call signature
/// stays uniform with input-bearing operations. Callers may pass `None`,
/// which is equivalent to an explicit empty record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetInventoryParams {}

/// Parameters for [`StoreApi::get_order_by_id`].
#[derive(Debug, Clone, PartialEq)]
pub struct GetOrderByIdParams {
    /// ID of the order that needs to be fetched.
    pub order_id: i64,
}

/// Parameters for [`StoreApi::place_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderParams {
    /// Order placed for purchasing the pet.
    pub order: Order,
}

/// Transport contract for the store resource group.
///
/// See [`PetApiOps`](super::PetApiOps) for the conventions shared by all
/// resource transports.
pub trait StoreApiOps {
    /// Deletes a purchase order by ID.
    fn delete_order(
        &self,
        order_id: String,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Returns pet inventories by status.
    fn get_inventory(
        &self,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<HashMap<String, i32>>, ApiClientError>> + Send;

    /// Finds a purchase order by ID.
    fn get_order_by_id(
        &self,
        order_id: i64,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Order>, ApiClientError>> + Send;

    /// Places an order for a pet.
    fn place_order(
        &self,
        order: Order,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Order>, ApiClientError>> + Send;
}

/// HTTP transport for the store resource group.
#[derive(Debug, Clone)]
pub struct StoreHttpApi {
    client: ApiClient,
}

impl StoreHttpApi {
    /// Creates the transport over a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl StoreApiOps for StoreHttpApi {
    async fn delete_order(
        &self,
        order_id: String,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let path = CallPath::from("/store/order/{orderId}")
            .add_param("orderId", ParamValue::new(order_id));
        let result = self.client.delete(path).with_options(options).await?;
        result.empty_with_info()
    }

    async fn get_inventory(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<HashMap<String, i32>>, ApiClientError> {
        let result = self
            .client
            .get("/store/inventory")
            .with_options(options)
            .await?;
        result.json_with_info()
    }

    async fn get_order_by_id(
        &self,
        order_id: i64,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Order>, ApiClientError> {
        let path = CallPath::from("/store/order/{orderId}")
            .add_param("orderId", ParamValue::new(order_id));
        let result = self.client.get(path).with_options(options).await?;
        result.json_with_info()
    }

    async fn place_order(
        &self,
        order: Order,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Order>, ApiClientError> {
        let result = self
            .client
            .post("/store/order")
            .json(&order)?
            .with_options(options)
            .await?;
        result.json_with_info()
    }
}

/// Facade over the store-order operations.
///
/// Follows the same two-call-shape convention as [`PetApi`](super::PetApi):
/// a value-only method and a `_with_http_info` sibling per operation.
#[derive(Debug, Clone)]
pub struct StoreApi<T = StoreHttpApi> {
    api: T,
}

impl StoreApi {
    /// Creates the facade with the default HTTP transport.
    pub fn new(client: ApiClient) -> Self {
        Self {
            api: StoreHttpApi::new(client),
        }
    }
}

impl<T> StoreApi<T>
where
    T: StoreApiOps,
{
    /// Creates the facade over a custom transport strategy.
    pub fn with_transport(api: T) -> Self {
        Self { api }
    }

    /// Deletes a purchase order by ID, returning the response metadata.
    ///
    /// For valid responses try integer IDs with value < 1000; anything above
    /// 1000 or non-integers will generate API errors.
    pub async fn delete_order_with_http_info(
        &self,
        params: DeleteOrderParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let DeleteOrderParams { order_id } = params;
        self.api.delete_order(order_id, options).await
    }

    /// Deletes a purchase order by ID.
    pub async fn delete_order(
        &self,
        params: DeleteOrderParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.delete_order_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Returns pet inventories by status, with response metadata.
    ///
    /// Returns a map of status codes to quantities.
    pub async fn get_inventory_with_http_info(
        &self,
        params: Option<GetInventoryParams>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<HashMap<String, i32>>, ApiClientError> {
        let GetInventoryParams {} = params.unwrap_or_default();
        self.api.get_inventory(options).await
    }

    /// Returns pet inventories by status.
    ///
    /// Returns a map of status codes to quantities.
    pub async fn get_inventory(
        &self,
        params: Option<GetInventoryParams>,
        options: Option<RequestOptions>,
    ) -> Result<HashMap<String, i32>, ApiClientError> {
        self.get_inventory_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Finds a purchase order by ID, with response metadata.
    pub async fn get_order_by_id_with_http_info(
        &self,
        params: GetOrderByIdParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Order>, ApiClientError> {
        let GetOrderByIdParams { order_id } = params;
        self.api.get_order_by_id(order_id, options).await
    }

    /// Finds a purchase order by ID.
    pub async fn get_order_by_id(
        &self,
        params: GetOrderByIdParams,
        options: Option<RequestOptions>,
    ) -> Result<Order, ApiClientError> {
        self.get_order_by_id_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Places an order for a pet, returning the stored order with response metadata.
    pub async fn place_order_with_http_info(
        &self,
        params: PlaceOrderParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Order>, ApiClientError> {
        let PlaceOrderParams { order } = params;
        self.api.place_order(order, options).await
    }

    /// Places an order for a pet.
    pub async fn place_order(
        &self,
        params: PlaceOrderParams,
        options: Option<RequestOptions>,
    ) -> Result<Order, ApiClientError> {
        self.place_order_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use http::{HeaderMap, StatusCode};

    use super::*;

    /// Counts inventory calls and records deleted order ids.
    #[derive(Debug, Default)]
    struct RecordingStoreApi {
        inventory_calls: AtomicUsize,
        deleted_orders: Mutex<Vec<String>>,
    }

    impl StoreApiOps for RecordingStoreApi {
        async fn delete_order(
            &self,
            order_id: String,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.deleted_orders
                .lock()
                .expect("not poisoned")
                .push(order_id);
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn get_inventory(
            &self,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<HashMap<String, i32>>, ApiClientError> {
            self.inventory_calls.fetch_add(1, Ordering::SeqCst);
            let mut inventory = HashMap::new();
            inventory.insert("available".to_string(), 7);
            inventory.insert("sold".to_string(), 3);
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), inventory))
        }

        async fn get_order_by_id(
            &self,
            order_id: i64,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<Order>, ApiClientError> {
            let order = Order {
                id: Some(order_id),
                ..Order::default()
            };
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), order))
        }

        async fn place_order(
            &self,
            order: Order,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<Order>, ApiClientError> {
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), order))
        }
    }

    #[tokio::test]
    async fn test_omitted_record_equals_explicit_empty_record() {
        let api = StoreApi::with_transport(RecordingStoreApi::default());

        let implicit = api
            .get_inventory(None, None)
            .await
            .expect("stubbed success");
        let explicit = api
            .get_inventory(Some(GetInventoryParams::default()), None)
            .await
            .expect("stubbed success");

        assert_eq!(implicit, explicit);
        assert_eq!(api.api.inventory_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_delete_order_forwards_string_id_unchanged() {
        let api = StoreApi::with_transport(RecordingStoreApi::default());

        api.delete_order(
            DeleteOrderParams {
                order_id: "order-0042".to_string(),
            },
            None,
        )
        .await
        .expect("stubbed success");

        assert_eq!(
            *api.api.deleted_orders.lock().expect("not poisoned"),
            vec!["order-0042".to_string()]
        );
    }

    #[tokio::test]
    async fn test_get_order_by_id_both_forms_agree() {
        let api = StoreApi::with_transport(RecordingStoreApi::default());
        let params = GetOrderByIdParams { order_id: 4 };

        let value = api
            .get_order_by_id(params.clone(), None)
            .await
            .expect("stubbed success");
        let info = api
            .get_order_by_id_with_http_info(params, None)
            .await
            .expect("stubbed success");

        assert_eq!(value, info.into_data());
    }

    #[tokio::test]
    async fn test_place_order_round_trips_the_order() {
        let api = StoreApi::with_transport(RecordingStoreApi::default());
        let order = Order {
            pet_id: Some(5),
            quantity: Some(1),
            ..Order::default()
        };

        let placed = api
            .place_order(
                PlaceOrderParams {
                    order: order.clone(),
                },
                None,
            )
            .await
            .expect("stubbed success");

        assert_eq!(placed, order);
    }
}
