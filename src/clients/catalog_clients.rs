//! Clients for the four catalog tables.
//!
//! They differ only in the record type, so a macro generates them. Each gets
//! `create_<x>`, `update_<x>` and `list_<xs>` (sorted by id), plus `get`/`delete`
//! from [`ActorClient`].

use crate::catalog::CatalogError;
use crate::clients::ActorClient;
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use crate::model::{Product, ProductCategory, Restaurant, RestaurantMenuItem};
use async_trait::async_trait;
use tracing::{debug, instrument};

macro_rules! catalog_client {
    ($(#[$meta:meta])* $client:ident, $entity:ty, $one:ident, $many:ident) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone)]
            pub struct $client {
                inner: ResourceClient<$entity>,
            }

            impl $client {
                pub fn new(inner: ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[instrument(skip(self))]
                pub async fn [<create_ $one>](
                    &self,
                    params: <$entity as ActorEntity>::Create,
                ) -> Result<<$entity as ActorEntity>::Id, CatalogError> {
                    debug!("Sending request");
                    let created = self.inner.create(params).await.map_err(Self::map_error)?;
                    Ok(created.id)
                }

                #[instrument(skip(self))]
                pub async fn [<update_ $one>](
                    &self,
                    id: <$entity as ActorEntity>::Id,
                    update: <$entity as ActorEntity>::Update,
                ) -> Result<$entity, CatalogError> {
                    debug!("Sending request");
                    self.inner.update(id, update).await.map_err(Self::map_error)
                }

                #[instrument(skip(self))]
                pub async fn [<list_ $many>](&self) -> Result<Vec<$entity>, CatalogError> {
                    debug!("Sending request");
                    let mut rows = self.inner.list().await.map_err(Self::map_error)?;
                    rows.sort_by_key(|row| row.id);
                    Ok(rows)
                }
            }

            #[async_trait]
            impl ActorClient<$entity> for $client {
                type Error = CatalogError;

                fn inner(&self) -> &ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: FrameworkError) -> CatalogError {
                    CatalogError::from_framework(e)
                }
            }
        }
    };
}

catalog_client!(
    /// Client for the restaurant actor.
    RestaurantClient, Restaurant, restaurant, restaurants
);
catalog_client!(
    /// Client for the product category actor.
    CategoryClient, ProductCategory, category, categories
);
catalog_client!(
    /// Client for the product actor.
    ProductClient, Product, product, products
);
catalog_client!(
    /// Client for the restaurant menu item actor.
    MenuItemClient, RestaurantMenuItem, menu_item, menu_items
);
