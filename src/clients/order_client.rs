use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::lifecycle::{self, Transition};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate, ProductId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Product lookups and price snapshots happen inside the actor's `on_create` hook, so
/// [`create_order`](Self::create_order) is a single round trip that replies with the
/// stored order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a validated order and returns it with its price snapshots. Use
    /// [`Checkout`](crate::checkout::Checkout) to start from a raw request.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(id = %order.id, "Order stored");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Every order, by id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.list().await.map_err(Self::map_error)?;
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    /// Orders still waiting for an operator, oldest first.
    #[instrument(skip(self))]
    pub async fn new_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.list().await.map_err(Self::map_error)?;
        Ok(lifecycle::new_orders(orders))
    }

    pub async fn mark_processed(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, Transition::Process).await
    }

    pub async fn mark_finished(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, Transition::Finish).await
    }

    #[instrument(skip(self))]
    async fn transition(&self, id: OrderId, transition: Transition) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Transition(transition))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Transitioned(order) => Ok(*order),
            other => Err(OrderError::Storage(format!(
                "unexpected result for {transition:?}: {other:?}"
            ))),
        }
    }

    /// Removes the items for `product` from one order, returning how many went.
    #[instrument(skip(self))]
    pub async fn drop_product(&self, id: OrderId, product: ProductId) -> Result<usize, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::DropProduct(product))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Dropped(count) => Ok(count),
            other => Err(OrderError::Storage(format!(
                "unexpected result for drop_product: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
