use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use super::location_card::LocationCard;
use crate::api::fetch_locations;
use crate::model::Location;
use crate::state::MapReveal;
use crate::util::cerror;

#[derive(PartialEq, Clone)]
enum FetchStatus {
    Loading,
    Idle,
    Error(String),
}

#[function_component(LocationsView)]
pub fn locations_view() -> Html {
    let status = use_state(|| FetchStatus::Loading);
    let locations = use_state(Vec::<Location>::new);
    let revealed = use_state(|| false);
    let image_ref = use_node_ref();
    let reveal_binding = use_mut_ref(|| None::<MapReveal>);

    {
        let image_ref = image_ref.clone();
        let revealed = revealed.clone();
        let reveal_binding = reveal_binding.clone();
        use_effect_with((), move |_| {
            // A page variant without the map image just skips the animation.
            if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                let on_reveal = Callback::from(move |_| revealed.set(true));
                *reveal_binding.borrow_mut() = Some(MapReveal::arm(image, on_reveal));
            }
            move || {
                reveal_binding.borrow_mut().take();
            }
        });
    }

    {
        let status = status.clone();
        let locations = locations.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_locations().await {
                    Ok(fetched) if !fetched.is_empty() => {
                        locations.set(fetched);
                        status.set(FetchStatus::Idle);
                    }
                    Ok(_) => {
                        status.set(FetchStatus::Error(
                            "Could not load locations data.".to_string(),
                        ));
                    }
                    Err(err) => {
                        cerror(&format!("Could not fetch locations: {err}"));
                        status.set(FetchStatus::Error(
                            "Could not load locations data.".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    let grid = match &*status {
        FetchStatus::Loading => html! {},
        FetchStatus::Error(message) => html! { <p class="load-error">{ message }</p> },
        FetchStatus::Idle => html! {
            <div id="locations-grid" class="locations-grid">
                { for locations.iter().map(|location| html! {
                    <LocationCard key={location.name.clone()} location={location.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <section class="locations-page">
            <h2 class="page-title">{"Where He Lurks"}</h2>
            <figure class="map-figure">
                <img
                    ref={image_ref}
                    class={classes!("map-image", revealed.then_some("reveal"))}
                    src="images/middle-earth-map.svg"
                    alt="Map of Middle-earth"
                />
            </figure>
            { grid }
        </section>
    }
}
