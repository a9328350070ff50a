use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::prelude::*;

use super::{sighting_form::SightingForm, sighting_pin::SightingPin};
use crate::api;
use crate::model::{LoadPhase, MapPercent, Sighting, SightingsAction, SightingsState};
use crate::state::{MapReveal, OneShot};
use crate::util::{cerror, clog, now_ms};

/// Initialization runs anyway if the reveal animation never reports ending.
const INIT_FALLBACK_MS: u32 = 2_600;
/// How long the initial fetch may run before the map opens without it.
const LOAD_ABANDON_MS: u32 = 4_000;

#[function_component(SightingsView)]
pub fn sightings_view() -> Html {
    let state = use_reducer(SightingsState::default);
    let revealed = use_state(|| false);
    let init_gate = use_mut_ref(OneShot::default);
    let reveal_binding = use_mut_ref(|| None::<MapReveal>);
    let container_ref = use_node_ref();
    let content_ref = use_node_ref();
    let image_ref = use_node_ref();

    // Fetch existing sightings exactly once, whichever trigger fires first.
    // The abandon timer opens the map for interaction if the fetch hangs.
    let start_init: Rc<dyn Fn()> = {
        let state = state.clone();
        let init_gate = init_gate.clone();
        Rc::new(move || {
            if !init_gate.borrow().fire() {
                return;
            }
            {
                let state = state.clone();
                Timeout::new(LOAD_ABANDON_MS, move || {
                    state.dispatch(SightingsAction::AbandonLoad);
                })
                .forget();
            }
            let state = state.clone();
            spawn_local(async move {
                match api::fetch_sightings().await {
                    Ok(records) => state.dispatch(SightingsAction::Loaded(records)),
                    Err(err) => {
                        cerror(&format!("Could not fetch sightings data: {err}"));
                        state.dispatch(SightingsAction::LoadFailed);
                    }
                }
            });
        })
    };

    {
        let image_ref = image_ref.clone();
        let revealed = revealed.clone();
        let reveal_binding = reveal_binding.clone();
        let start_init = start_init.clone();
        use_effect_with((), move |_| {
            if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                let on_reveal = Callback::from(move |_| revealed.set(true));
                *reveal_binding.borrow_mut() = Some(MapReveal::arm(image, on_reveal));
            }
            Timeout::new(INIT_FALLBACK_MS, move || start_init()).forget();
            move || {
                reveal_binding.borrow_mut().take();
            }
        });
    }

    let on_map_animation_end = {
        let start_init = start_init.clone();
        Callback::from(move |_: AnimationEvent| start_init())
    };

    let on_map_click = {
        let state = state.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if state.phase == LoadPhase::Loading {
                return;
            }
            let Some(content) = content_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = content.get_bounding_client_rect();
            let coords = MapPercent::from_click(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            state.dispatch(SightingsAction::PlaceMarker(coords));
        })
    };

    // Magnifying zoom: scale the map content around the cursor.
    let on_zoom_move = {
        let container_ref = container_ref.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let (Some(container), Some(content)) = (
                container_ref.cast::<HtmlElement>(),
                content_ref.cast::<HtmlElement>(),
            ) else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let origin_x = (event.client_x() as f64 - rect.left()) / rect.width() * 100.0;
            let origin_y = (event.client_y() as f64 - rect.top()) / rect.height() * 100.0;
            let style = content.style();
            let _ = style.set_property("transform-origin", &format!("{origin_x}% {origin_y}%"));
            let _ = style.set_property("transform", "scale(1.2)");
        })
    };

    let on_zoom_leave = {
        let content_ref = content_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(content) = content_ref.cast::<HtmlElement>() else {
                return;
            };
            let style = content.style();
            let _ = style.set_property("transform-origin", "center center");
            let _ = style.set_property("transform", "scale(1)");
        })
    };

    let on_toggle_pin = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(SightingsAction::TogglePin(id)))
    };

    // Optimistic submit: the pin renders immediately, the POST is
    // fire-and-forget, and its outcome is only logged.
    let on_report = {
        let state = state.clone();
        Callback::from(move |(reporter, clue): (String, String)| {
            let Some(coords) = state.pending else {
                return;
            };
            let record = Sighting::report(now_ms(), coords, clue, reporter);
            state.dispatch(SightingsAction::AddSighting(record.clone()));
            spawn_local(async move {
                match api::submit_sighting(&record).await {
                    Ok(body) => clog(&format!("Success: {body}")),
                    Err(err) => cerror(&format!("Request failed: {err}")),
                }
            });
        })
    };

    let pins: Html = state
        .sightings
        .iter()
        .map(|sighting| {
            html! {
                <SightingPin
                    key={sighting.id.clone()}
                    sighting={sighting.clone()}
                    active={state.active_pin.as_deref() == Some(sighting.id.as_str())}
                    on_toggle={on_toggle_pin.clone()}
                />
            }
        })
        .collect();

    let marker = match &state.pending {
        Some(coords) => {
            html! { <div class="sighting-marker" style={coords.css_position()}></div> }
        }
        None => html! {},
    };

    let load_error = if state.phase == LoadPhase::Failed {
        html! { <p class="map-error">{"Could not load sightings... Precious is lost!"}</p> }
    } else {
        html! {}
    };

    html! {
        <section class="sightings-page">
            <h2 class="page-title">{"Sightings Map"}</h2>
            <div
                ref={container_ref}
                class="map-container"
                onmousemove={on_zoom_move}
                onmouseleave={on_zoom_leave}
            >
                <div ref={content_ref} class="map-content" onclick={on_map_click}>
                    <img
                        ref={image_ref}
                        class={classes!("map-image", revealed.then_some("reveal"))}
                        src="images/middle-earth-map.svg"
                        alt="Map of Middle-earth"
                        onanimationend={on_map_animation_end}
                    />
                    { load_error }
                    { pins }
                    { marker }
                </div>
            </div>
            <SightingForm pending={state.pending} on_report={on_report} />
        </section>
    }
}
