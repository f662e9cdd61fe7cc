use leptos::prelude::*;
use storefront::{basket::Basket, items::ItemKey, prices::format_price, storefront::Storefront};

use crate::toast::ToastNotifier;

/// One basket row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BasketLine {
    pub(crate) key: ItemKey,
    pub(crate) label: String,
}

/// Basket rows in insertion order.
pub(crate) fn basket_lines(basket: &Basket) -> Vec<BasketLine> {
    basket
        .iter()
        .map(|entry| {
            let item = entry.item();

            let label = match item.monthly_cost() {
                Some(cost) => format!(
                    "{} - {} per month",
                    item.product_name(),
                    format_price(cost)
                ),
                None => item.product_name().to_string(),
            };

            BasketLine {
                key: item.key().clone(),
                label,
            }
        })
        .collect()
}

pub(crate) fn total_label(storefront: &Storefront<ToastNotifier>) -> String {
    let total = storefront
        .total_display()
        .unwrap_or_else(|_error| "N/A".to_string());

    format!("Total Amount: {total}")
}

#[component]
fn BasketLineRow(
    line: BasketLine,
    storefront: RwSignal<Storefront<ToastNotifier>>,
) -> impl IntoView {
    let BasketLine { key, label } = line;

    let remove_label = format!("Remove {label} from basket");
    let test_id = format!("basket-item-{key}");

    view! {
        <li class="basket-line" data-testid=test_id>
            <span class="basket-line-label">{label}</span>
            <button
                type="button"
                class="basket-line-remove"
                aria-label=remove_label
                on:click=move |_| {
                    storefront.update(|storefront| {
                        storefront.remove_from_basket(&key);
                    });
                }
            >
                "Remove"
            </button>
        </li>
    }
}

/// Right panel: basket contents and running total.
#[component]
pub(crate) fn BasketPanel(storefront: RwSignal<Storefront<ToastNotifier>>) -> impl IntoView {
    view! {
        <aside class="basket-panel">
            <h2 class="basket-title">"Basket"</h2>
            {move || {
                let lines = storefront.with(|storefront| basket_lines(storefront.basket()));

                if lines.is_empty() {
                    return view! { <p class="basket-empty">"Your basket is empty."</p> }
                        .into_any();
                }

                view! {
                    <ul class="basket-lines">
                        {lines
                            .into_iter()
                            .map(|line| view! { <BasketLineRow line=line storefront=storefront /> })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
            <p class="basket-total" role="status" aria-live="polite">
                {move || storefront.with(total_label)}
            </p>
        </aside>
    }
}
