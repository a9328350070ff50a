use web_sys::Element;
use yew::prelude::*;

use crate::model::Location;
use crate::state::IntersectionBinding;

/// Cards fade in once a quarter of the card has scrolled into view,
/// measured slightly above the bottom edge of the viewport.
const CARD_THRESHOLD: f64 = 0.25;
const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Properties, PartialEq, Clone)]
pub struct LocationCardProps {
    pub location: Location,
}

#[function_component(LocationCard)]
pub fn location_card(props: &LocationCardProps) -> Html {
    let visible = use_state(|| false);
    let opinion_open = use_state(|| false);
    let card_ref = use_node_ref();
    let observer = use_mut_ref(|| None::<IntersectionBinding>);

    {
        let visible = visible.clone();
        let card_ref = card_ref.clone();
        let observer = observer.clone();
        use_effect_with((), move |_| {
            let binding = card_ref.cast::<Element>().and_then(|card| {
                let on_visible = {
                    let visible = visible.clone();
                    Callback::from(move |_| visible.set(true))
                };
                IntersectionBinding::observe_once(
                    &card,
                    CARD_THRESHOLD,
                    CARD_ROOT_MARGIN,
                    on_visible,
                )
            });
            match binding {
                Some(binding) => *observer.borrow_mut() = Some(binding),
                // No observer support: just show the card.
                None => visible.set(true),
            }
            move || {
                observer.borrow_mut().take();
            }
        });
    }

    let toggle_opinion = {
        let opinion_open = opinion_open.clone();
        Callback::from(move |_| opinion_open.set(!*opinion_open))
    };

    let location = &props.location;

    html! {
        <div ref={card_ref} class={classes!("location-card", visible.then_some("visible"))}>
            <h3 class="location-name">{ &location.name }</h3>
            <p class="location-description">
                <strong>{"Description: "}</strong>{ &location.description }
            </p>
            <p class="location-significance">
                <strong>{"Significance: "}</strong>{ &location.significance }
            </p>
            <button
                class="btn gollum-opinion-btn"
                aria-expanded={opinion_open.to_string()}
                onclick={toggle_opinion}
            >
                {"Gollum's Opinion"}
            </button>
            <div class="gollum-opinion-text" hidden={!*opinion_open}>
                <p>{ &location.gollums_thoughts }</p>
            </div>
        </div>
    }
}
