//! [`ActorEntity`] implementations for the catalog tables.
//!
//! Restaurants and categories are self-contained. Products check their category
//! reference, and menu items check both of theirs, through clients injected as context.

use crate::catalog::CatalogError;
use crate::clients::{ActorClient, CategoryClient, ProductClient, RestaurantClient};
use crate::error::ValidationError;
use crate::framework::ActorEntity;
use crate::model::{
    CategoryId, MenuItemCreate, MenuItemId, MenuItemUpdate, Price, Product, ProductCategory,
    ProductCategoryCreate, ProductCategoryUpdate, ProductCreate, ProductId, ProductUpdate,
    Restaurant, RestaurantCreate, RestaurantId, RestaurantMenuItem, RestaurantUpdate,
};
use async_trait::async_trait;

fn does_not_exist(field: &str, pk: u32) -> ValidationError {
    ValidationError::new(field, format!("invalid pk \"{pk}\" - object does not exist"))
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, CatalogError> {
        let restaurant = Self {
            id,
            name: params.name,
            address: params.address,
            contact_phone: params.contact_phone,
        };
        restaurant.validate()?;
        Ok(restaurant)
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(contact_phone) = update.contact_phone {
            self.contact_phone = contact_phone;
        }
        Ok(self.validate()?)
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CatalogError> {
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for ProductCategory {
    type Id = CategoryId;
    type Create = ProductCategoryCreate;
    type Update = ProductCategoryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(
        id: CategoryId,
        params: ProductCategoryCreate,
    ) -> Result<Self, CatalogError> {
        let category = Self {
            id,
            name: params.name,
        };
        category.validate()?;
        Ok(category)
    }

    async fn on_update(
        &mut self,
        update: ProductCategoryUpdate,
        _ctx: &(),
    ) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(self.validate()?)
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CatalogError> {
        Ok(())
    }
}

impl Product {
    async fn check_category(&self, categories: &CategoryClient) -> Result<(), CatalogError> {
        let Some(category) = self.category else {
            return Ok(());
        };
        match categories.get(category).await? {
            Some(_) => Ok(()),
            None => Err(does_not_exist("category", category.0).into()),
        }
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = CatalogError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        let product = Self {
            id,
            name: params.name,
            category: params.category,
            price: Price::parse("price", params.price, Price::PRODUCT_DIGITS)?,
            image: params.image,
            special_status: params.special_status,
            description: params.description,
        };
        product.validate()?;
        Ok(product)
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), CatalogError> {
        self.check_category(categories).await
    }

    /// Repricing only touches the catalog row; order items keep their own copy.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        categories: &CategoryClient,
    ) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = Price::parse("price", price, Price::PRODUCT_DIGITS)?;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(special_status) = update.special_status {
            self.special_status = special_status;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.validate()?;

        if let Some(category) = update.category {
            self.category = category;
            self.check_category(categories).await?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &CategoryClient,
    ) -> Result<(), CatalogError> {
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for RestaurantMenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (RestaurantClient, ProductClient);
    type Error = CatalogError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            restaurant: params.restaurant,
            product: params.product,
            availability: params.availability,
        })
    }

    async fn on_create(
        &mut self,
        ctx: &(RestaurantClient, ProductClient),
    ) -> Result<(), CatalogError> {
        let (restaurants, products) = ctx;
        if restaurants.get(self.restaurant).await?.is_none() {
            return Err(does_not_exist("restaurant", self.restaurant.0).into());
        }
        if products.get(self.product).await?.is_none() {
            return Err(does_not_exist("product", self.product.0).into());
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &(RestaurantClient, ProductClient),
    ) -> Result<(), CatalogError> {
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        Ok(())
    }

    fn check_unique(&self, existing: &Self) -> Result<(), CatalogError> {
        if existing.restaurant == self.restaurant && existing.product == self.product {
            return Err(ValidationError::new(
                "restaurant",
                format!(
                    "{} already lists {}; restaurant and product must make a unique set",
                    self.restaurant, self.product
                ),
            )
            .into());
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &(RestaurantClient, ProductClient),
    ) -> Result<(), CatalogError> {
        Ok(())
    }
}
