//! Leptos Storefront Demo Application

use leptos::prelude::*;
use storefront::{
    catalog::Catalog, fixtures::catalogs::CatalogFixture, items::KeyStrategy,
    storefront::Storefront,
};

mod basket;
mod catalog;
mod toast;

const CATALOG_FIXTURE_YAML: &str = include_str!("../../../fixtures/catalogs/sky.yml");

/// Parsed application fixtures used by the UI.
#[derive(Debug)]
struct AppData {
    /// Catalog backing the storefront.
    catalog: Catalog,

    /// Category sections shown on the left panel.
    sections: Vec<catalog::CategorySection>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = CatalogFixture::from_yaml(CATALOG_FIXTURE_YAML)
            .and_then(|fixture| fixture.into_catalog(KeyStrategy::Positional))
            .map_err(|error| format!("Failed to load catalog: {error}"))?;

        let sections = catalog::catalog_sections(&catalog);

        Ok(Self { catalog, sections })
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(AppData { catalog, sections }) => {
            let toast = RwSignal::new(None::<toast::Toast>);
            let storefront = RwSignal::new(Storefront::with_notifier(
                catalog,
                toast::ToastNotifier::new(toast),
            ));

            view! {
                <main class="storefront">
                    <header class="storefront-header">
                        <h1 class="storefront-title">"Sky"</h1>
                    </header>
                    <div class="storefront-layout">
                        <catalog::CatalogPanel sections=sections storefront=storefront />
                        <basket::BasketPanel storefront=storefront />
                    </div>
                    <toast::ToastRegion toast=toast />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="storefront">
                <header class="storefront-header">
                    <h1 class="storefront-title">"Sky"</h1>
                </header>
                <p class="storefront-error">{error_message}</p>
            </main>
        }
        .into_any(),
    }
}

/// Mount the app
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
