//! Cart controller with change notifications.

use crate::cart::{Cart, CartEvent, CartObserver, CartSummary, QuantityChange};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Owns a [`Cart`] and notifies registered observers of every successful
/// mutation. Failed operations notify nobody.
#[derive(Default)]
pub struct CartAggregator {
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartAggregator {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            observers: Vec::new(),
        }
    }

    /// Build an aggregator over a fresh cart for `products`.
    pub fn from_products(products: &[Product]) -> Self {
        Self::new(Cart::from_products(products))
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register an observer, builder style.
    pub fn with_observer(mut self, observer: impl CartObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    fn notify(&self, event: CartEvent) -> CartEvent {
        for observer in &self.observers {
            observer.on_event(&event);
        }
        event
    }

    /// See [`Cart::set_quantity`].
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        change: QuantityChange,
    ) -> Result<CartEvent, CommerceError> {
        let event = self.cart.set_quantity(product_id, change)?;
        Ok(self.notify(event))
    }

    /// See [`Cart::add_to_cart`].
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<CartEvent, CommerceError> {
        let event = self.cart.add_to_cart(product_id)?;
        Ok(self.notify(event))
    }

    /// Register a product that appeared after the cart was built.
    pub fn track(&mut self, product: &Product) -> bool {
        self.cart.track(product)
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_value(&self) -> Result<Money, CommerceError> {
        self.cart.total_value()
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        self.cart.summary()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn into_cart(self) -> Cart {
        self.cart
    }
}

impl std::fmt::Debug for CartAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartAggregator")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}
