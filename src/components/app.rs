use super::{
    characters_view::CharactersView, home_view::HomeView, locations_view::LocationsView,
    sightings_view::SightingsView,
};
use crate::util::{current_year, footer_tagline};
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Home,
    Characters,
    Locations,
    Sightings,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);

    let nav_link = {
        let view = view.clone();
        move |target: View, label: &'static str| -> Html {
            let active = *view == target;
            let onclick = {
                let view = view.clone();
                Callback::from(move |_| view.set(target))
            };
            html! {
                <button class={classes!("nav-link", active.then_some("active"))} {onclick}>
                    { label }
                </button>
            }
        }
    };

    let content = match *view {
        View::Home => html! { <HomeView /> },
        View::Characters => html! { <CharactersView /> },
        View::Locations => html! { <LocationsView /> },
        View::Sightings => html! { <SightingsView /> },
    };

    let year = current_year();

    html! {
        <div id="root">
            <header class="site-header">
                <h1 class="site-title">{"Gollum Watch"}</h1>
                <nav class="site-nav">
                    { nav_link(View::Home, "Home") }
                    { nav_link(View::Characters, "Characters") }
                    { nav_link(View::Locations, "Locations") }
                    { nav_link(View::Sightings, "Sightings") }
                </nav>
            </header>
            <main class="page-content">{ content }</main>
            <footer class="site-footer">
                <p class="footer-tagline">{ footer_tagline(year) }</p>
                <p class="footer-year">{ format!("© {year} Gollum Watch") }</p>
            </footer>
        </div>
    }
}
