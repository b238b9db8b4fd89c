use std::sync::Arc;

use storefront_auth::Hs256TokenCodec;
use storefront_cart::CartService;
use storefront_store::{AccountStore, CartSessionStore, CatalogStore, seed_catalog};

/// Shared application services, wired once at startup.
///
/// The cart service reads stock through the catalog store directly, so
/// every mutation sees the current record.
pub struct AppServices {
    pub catalog: Arc<CatalogStore>,
    pub accounts: Arc<AccountStore>,
    pub sessions: Arc<CartSessionStore>,
    pub cart: CartService<Arc<CatalogStore>>,
    pub tokens: Arc<Hs256TokenCodec>,
}

pub fn build_services(tokens: Arc<Hs256TokenCodec>) -> AppServices {
    let catalog = Arc::new(CatalogStore::new());
    if let Err(err) = seed_catalog(&catalog) {
        tracing::error!(error = %err, "failed to seed sample catalog");
    }

    let accounts = Arc::new(AccountStore::new());
    let sessions = Arc::new(CartSessionStore::new());
    let cart = CartService::new(Arc::clone(&catalog));

    AppServices {
        catalog,
        accounts,
        sessions,
        cart,
        tokens,
    }
}
