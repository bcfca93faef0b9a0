//! Application components and pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::catalog::{demo_products, find_product, Product};
use crate::store::{provide_cart_store, use_cart};
use bazaar_commerce::{CartLineItem, StoreGroup};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart_store();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="bazaar" href="/style.css"/>
        <Meta name="description" content="Bazaar - a multi-store marketplace storefront"/>
        <Title text="Bazaar"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let cart = use_cart();

    view! {
        <header>
            <h1>"Bazaar"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/cart">
                    "Cart"
                    <span class="cart-badge">{move || cart.item_count().to_string()}</span>
                </a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Bazaar - every store in one cart"</p>
            <p style="font-size: 0.8rem; color: #888;">"Your cart stays on this device"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with hero section
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Welcome to Bazaar"</h2>
            <p>"Independent stores, one checkout-ready cart"</p>
            <a href="/products" class="btn" style="margin-top: 1rem; display: inline-block;">
                "Browse Products"
            </a>
        </div>

        <h2>"Featured Products"</h2>
        <ProductGrid/>
    }
}

/// Products listing page
#[component]
fn ProductsPage() -> impl IntoView {
    view! {
        <h2>"All Products"</h2>
        <ProductGrid/>
    }
}

/// Single product page
#[component]
fn ProductPage() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! {
        {move || match find_product(&id()) {
            Some(p) => view! { <ProductDetail product=p/> }.into_any(),
            None => view! {
                <p>"Product not found"</p>
                <a href="/products">"Back to products"</a>
            }.into_any(),
        }}
    }
}

/// Shopping cart page
#[component]
fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let snapshot = cart.cart();

    view! {
        <h2>"Shopping Cart"</h2>
        {move || {
            let current = snapshot.get();
            if current.is_empty() {
                view! {
                    <p>"Your cart is empty."</p>
                    <a href="/products">"Continue shopping"</a>
                }.into_any()
            } else {
                view! { <CartView cart=current/> }.into_any()
            }
        }}
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid() -> impl IntoView {
    view! {
        <div class="products">
            {demo_products().into_iter().map(|p| {
                view! { <ProductCard product=p/> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = product.price_display();
    let store_name = product.store_name.clone();
    let name = product.name.clone();

    view! {
        <div class="product-card">
            <div class="product-info">
                <h3>{name}</h3>
                <p style="font-size: 0.8rem; color: #666;">"Sold by " {store_name}</p>
                <p class="price">{price}</p>
                <a href=href style="display: block; margin-bottom: 0.5rem;">
                    "View Details"
                </a>
                <AddToCartButton product=product/>
            </div>
        </div>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let price = product.price_display();

    view! {
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;">
            <div style="background: #f0f0f0; height: 400px; display: flex; align-items: center; justify-content: center; border-radius: 8px;">
                <span style="font-size: 6rem;">"\u{1f4e6}"</span>
            </div>
            <div>
                <h1>{product.name.clone()}</h1>
                <p style="color: #888;">"Sold by " {product.store_name.clone()}</p>
                <p class="price" style="font-size: 2rem; margin: 1rem 0;">{price}</p>
                <p style="color: #666; margin-bottom: 2rem;">{product.description.clone()}</p>
                <AddToCartButton product=product/>
            </div>
        </div>
    }
}

#[component]
fn AddToCartButton(product: Product) -> impl IntoView {
    let cart = use_cart();
    let just_added = RwSignal::new(false);

    let add = move |_| {
        cart.add_item(product.to_line_item());
        just_added.set(true);
    };

    view! {
        <button class="btn" on:click=add>
            "Add to Cart"
        </button>
        {move || just_added.get().then(|| view! {
            <p style="color: green; margin-top: 0.5rem;">"Added to cart!"</p>
        })}
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartView(cart: bazaar_commerce::Cart) -> impl IntoView {
    let total = cart.total_amount().display();
    let item_count = cart.item_count();
    let store_count = cart.store_count();

    view! {
        <div style="max-width: 720px;">
            <p style="margin-bottom: 1rem;">
                {item_count.to_string()} " item(s) from " {store_count.to_string()} " store(s)"
            </p>
            {cart.stores.into_iter().map(|group| {
                view! { <StoreGroupView group=group/> }
            }).collect::<Vec<_>>()}
            <div style="display: flex; justify-content: space-between; padding: 1rem; font-size: 1.25rem;">
                <strong>"Total"</strong>
                <strong>{total}</strong>
            </div>
            <div style="margin-top: 1rem; display: flex; gap: 1rem;">
                <a href="/products" style="color: #666;">"Continue Shopping"</a>
                <ClearCartButton/>
            </div>
        </div>
    }
}

#[component]
fn StoreGroupView(group: StoreGroup) -> impl IntoView {
    let subtotal = group.total.display();

    view! {
        <section style="margin-bottom: 1.5rem; border: 1px solid #eee; border-radius: 8px;">
            <div style="display: flex; justify-content: space-between; padding: 0.75rem 1rem; background: #fafafa;">
                <strong>{group.store_name.clone()}</strong>
                <span>"Subtotal: " {subtotal}</span>
            </div>
            {group.items.into_iter().map(|item| {
                view! { <CartLineRow item=item/> }
            }).collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn CartLineRow(item: CartLineItem) -> impl IntoView {
    let cart = use_cart();
    let quantity = item.quantity;
    let price = item.price.display();
    let line_total = item.line_total().display();

    let decrement = {
        let id = item.id.clone();
        move |_| cart.update_quantity(&id, quantity - 1)
    };
    let increment = {
        let id = item.id.clone();
        move |_| cart.update_quantity(&id, quantity + 1)
    };
    let remove = {
        let id = item.id.clone();
        move |_| cart.remove_item(&id)
    };

    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; padding: 1rem; border-top: 1px solid #eee;">
            <div>
                <strong>{item.name.clone()}</strong>
                <p style="color: #666;">{price} " each"</p>
            </div>
            <div style="display: flex; gap: 0.5rem; align-items: center;">
                <button class="qty-btn" on:click=decrement>"-"</button>
                <span>{quantity.to_string()}</span>
                <button class="qty-btn" on:click=increment>"+"</button>
                <strong style="min-width: 5rem; text-align: right;">{line_total}</strong>
                <button class="remove-btn" on:click=remove>"Remove"</button>
            </div>
        </div>
    }
}

#[component]
fn ClearCartButton() -> impl IntoView {
    let cart = use_cart();

    view! {
        <button
            style="background: #dc3545; color: white; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer;"
            on:click=move |_| cart.clear()
        >
            "Clear Cart"
        </button>
    }
}
