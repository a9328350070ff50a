use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::model::MapPercent;

#[derive(Properties, PartialEq, Clone)]
pub struct SightingFormProps {
    /// Coordinate picked on the map, if any; submission requires one.
    pub pending: Option<MapPercent>,
    /// Fired with (reporter, clue) once a submission passes validation.
    pub on_report: Callback<(String, String)>,
}

#[function_component(SightingForm)]
pub fn sighting_form(props: &SightingFormProps) -> Html {
    let form_ref = use_node_ref();
    let reporter_ref = use_node_ref();
    let clue_ref = use_node_ref();

    let onsubmit = {
        let pending = props.pending;
        let on_report = props.on_report.clone();
        let form_ref = form_ref.clone();
        let reporter_ref = reporter_ref.clone();
        let clue_ref = clue_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            if pending.is_none() {
                let _ = window.alert_with_message(
                    "Nasty hobbitses! You must click on the map to show us where!",
                );
                return;
            }

            let reporter = reporter_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let clue = clue_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();
            on_report.emit((reporter, clue));

            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
            let _ = window
                .alert_with_message("Yesss, precious! A new secret for us! We will find it!");
        })
    };

    html! {
        <form ref={form_ref} id="sighting-form" class="sighting-form" {onsubmit}>
            <h3>{"Report a Sighting"}</h3>
            <p class="form-hint">
                {"Click the map to mark where you saw him, then tell us what you know."}
            </p>
            <label for="reporter-name">{"Your name"}</label>
            <input ref={reporter_ref} id="reporter-name" type="text" required={true} />
            <label for="sighting-clue">{"What did you see?"}</label>
            <textarea ref={clue_ref} id="sighting-clue" rows="3" required={true} />
            <button type="submit" class="btn">{"Submit Report"}</button>
        </form>
    }
}
