use leptos::prelude::*;
use storefront::{
    catalog::Catalog,
    items::ItemKey,
    notifications::{Notification, Notifier},
    prices::format_price,
    storefront::Storefront,
};

use crate::toast::ToastNotifier;

/// One category of the catalog, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategorySection {
    pub(crate) name: String,
    pub(crate) cards: Vec<ProductCard>,
}

/// Display data for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProductCard {
    pub(crate) key: ItemKey,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) monthly_cost: String,
    pub(crate) contract_length: String,
    pub(crate) image: Option<String>,
}

/// Build the catalog sections in category order.
pub(crate) fn catalog_sections(catalog: &Catalog) -> Vec<CategorySection> {
    catalog
        .sections()
        .into_iter()
        .map(|section| CategorySection {
            name: section.name.to_string(),
            cards: section
                .listings
                .iter()
                .map(|listing| ProductCard {
                    key: listing.key.clone(),
                    name: listing.product.name.clone(),
                    description: listing.product.description.clone(),
                    monthly_cost: format!(
                        "Monthly Cost: {}",
                        format_price(&listing.product.monthly_cost)
                    ),
                    contract_length: contract_length_label(listing.product.contract_length),
                    image: listing.image.map(str::to_string),
                })
                .collect(),
        })
        .collect()
}

fn contract_length_label(months: u32) -> String {
    if months == 1 {
        "Contract Length: 1 month".to_string()
    } else {
        format!("Contract Length: {months} months")
    }
}

pub(crate) fn toggle_button_label(in_basket: bool) -> &'static str {
    if in_basket {
        "Remove from Basket"
    } else {
        "Add to Basket"
    }
}

pub(crate) fn toggle_listing(storefront: RwSignal<Storefront<ToastNotifier>>, key: &ItemKey) {
    storefront.update(|storefront| {
        if let Err(error) = storefront.toggle(key) {
            storefront
                .notifier_mut()
                .notify(Notification::error(error.to_string()));
        }
    });
}

#[component]
fn ProductCategory(name: String) -> impl IntoView {
    view! { <h2 class="catalog-category">{name}</h2> }
}

#[component]
fn ProductCardView(
    card: ProductCard,
    storefront: RwSignal<Storefront<ToastNotifier>>,
) -> impl IntoView {
    let ProductCard {
        key,
        name,
        description,
        monthly_cost,
        contract_length,
        image,
    } = card;

    let key_for_state = key.clone();
    let in_basket = Memo::new(move |_| storefront.with(|s| s.is_in_basket(&key_for_state)));
    let test_id = format!("product-card-{key}");
    let alt = format!("{name} Logo");

    view! {
        <article class="product-card" data-testid=test_id>
            {image.map(|src| view! { <img class="product-card-image" src=src alt=alt /> })}
            <h3 class="product-card-name">{name}</h3>
            <p class="product-card-description">{description}</p>
            <p class="product-card-cost">{monthly_cost}</p>
            <p class="product-card-contract">{contract_length}</p>
            <button
                type="button"
                class="product-card-button"
                class=("in-basket", move || in_basket.get())
                aria-pressed=move || in_basket.get().to_string()
                on:click=move |_| toggle_listing(storefront, &key)
            >
                {move || toggle_button_label(in_basket.get())}
            </button>
        </article>
    }
}

/// Left panel: products grouped under their category headers.
#[component]
pub(crate) fn CatalogPanel(
    sections: Vec<CategorySection>,
    storefront: RwSignal<Storefront<ToastNotifier>>,
) -> impl IntoView {
    view! {
        <section class="catalog-panel">
            {sections
                .into_iter()
                .map(|section| {
                    let CategorySection { name, cards } = section;

                    view! {
                        <ProductCategory name=name />
                        <div class="catalog-grid">
                            {cards
                                .into_iter()
                                .map(|card| view! { <ProductCardView card=card storefront=storefront /> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
