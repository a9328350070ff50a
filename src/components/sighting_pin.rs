use web_sys::HtmlElement;
use yew::prelude::*;

use crate::model::{Sighting, TooltipAlign, tooltip_alignment};

#[derive(Properties, PartialEq, Clone)]
pub struct SightingPinProps {
    pub sighting: Sighting,
    /// Whether this pin's tooltip is the one currently expanded.
    pub active: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(SightingPin)]
pub fn sighting_pin(props: &SightingPinProps) -> Html {
    let tooltip_ref = use_node_ref();
    let align = use_state(TooltipAlign::default);

    // Measure the expanded tooltip and pull it back inside the viewport if
    // it spills over either horizontal edge.
    {
        let tooltip_ref = tooltip_ref.clone();
        let align = align.clone();
        use_effect_with(props.active, move |active| {
            if *active {
                if let Some(tooltip) = tooltip_ref.cast::<HtmlElement>() {
                    let rect = tooltip.get_bounding_client_rect();
                    let viewport_width = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|v| v.as_f64())
                        .unwrap_or(f64::MAX);
                    align.set(tooltip_alignment(rect.left(), rect.right(), viewport_width));
                }
            } else {
                align.set(TooltipAlign::Centered);
            }
            || ()
        });
    }

    let onclick = {
        let id = props.sighting.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: MouseEvent| {
            // Keep the click from also dropping a placement marker.
            event.stop_propagation();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div
            class={classes!("sighting-pin", props.active.then_some("active"))}
            style={props.sighting.coordinates.css_position()}
            {onclick}
        >
            <div ref={tooltip_ref} class={classes!("sighting-tooltip", (*align).class())}>
                <h4 class="tooltip-title">{ &props.sighting.name }</h4>
                <p class="tooltip-clue">{ format!("\"{}\"", props.sighting.clue) }</p>
                <small class="tooltip-reporter">
                    { format!("Reported by: {}", props.sighting.reported_by) }
                </small>
            </div>
        </div>
    }
}
