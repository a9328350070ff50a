use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_characters;
use crate::model::Character;
use crate::util::cerror;

/// Outgoing fade before the detail panel swaps to the next character.
const SWAP_DELAY_MS: u32 = 250;
/// The incoming fade class is cleared once the transition has finished.
const FADE_CLEANUP_MS: u32 = 500;

#[derive(PartialEq, Clone)]
enum FetchStatus {
    Loading,
    Idle,
    Error(String),
}

#[derive(Clone, Copy, PartialEq)]
enum Fade {
    None,
    Out,
    In,
}

impl Fade {
    fn class(self) -> Option<&'static str> {
        match self {
            Fade::None => None,
            Fade::Out => Some("fade-out"),
            Fade::In => Some("fade-in"),
        }
    }
}

#[function_component(CharactersView)]
pub fn characters_view() -> Html {
    let status = use_state(|| FetchStatus::Loading);
    let characters = use_state(Vec::<Character>::new);
    let selected = use_state(|| 0usize);
    let fade = use_state(|| Fade::None);

    {
        let status = status.clone();
        let characters = characters.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_characters().await {
                    Ok(fetched) => {
                        characters.set(fetched);
                        status.set(FetchStatus::Idle);
                    }
                    Err(err) => {
                        cerror(&format!("Error fetching character data: {err}"));
                        status.set(FetchStatus::Error(
                            "Failed to load characters, precious! Try again later.".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        let fade = fade.clone();
        Callback::from(move |index: usize| {
            fade.set(Fade::Out);
            let selected = selected.clone();
            let fade = fade.clone();
            Timeout::new(SWAP_DELAY_MS, move || {
                selected.set(index);
                fade.set(Fade::In);
                let fade = fade.clone();
                Timeout::new(FADE_CLEANUP_MS, move || fade.set(Fade::None)).forget();
            })
            .forget();
        })
    };

    let nav = match &*status {
        FetchStatus::Idle if !characters.is_empty() => {
            let buttons: Html = characters
                .iter()
                .enumerate()
                .map(|(index, character)| {
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_| on_select.emit(index))
                    };
                    let active = index == *selected;
                    html! {
                        <li key={character.name.clone()}>
                            <button
                                class={classes!("character-btn", active.then_some("active"))}
                                {onclick}
                            >
                                { &character.name }
                            </button>
                        </li>
                    }
                })
                .collect();
            html! { <ul id="characterList" class="character-list">{ buttons }</ul> }
        }
        _ => html! {},
    };

    let detail = match &*status {
        FetchStatus::Loading => {
            html! { <div class="loading">{"Loading characters, my precious..."}</div> }
        }
        FetchStatus::Error(message) => html! { <div class="error">{ message }</div> },
        FetchStatus::Idle => match characters.get(*selected) {
            Some(character) => render_character(character, *fade),
            None => html! {},
        },
    };

    html! {
        <section class="characters-page">
            <h2 class="page-title">{"Who's Who"}</h2>
            <div class="characters-layout">
                <aside class="character-nav">{ nav }</aside>
                <div id="characterContent" class="character-panel">{ detail }</div>
            </div>
        </section>
    }
}

fn render_character(character: &Character, fade: Fade) -> Html {
    let key_items = if character.key_items.is_empty() {
        html! { <p>{"None"}</p> }
    } else {
        html! {
            <ul>
                { for character.key_items.iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        }
    };

    let thoughts = character
        .gollums_thoughts
        .as_deref()
        .unwrap_or("Gollum has no thoughts on this character.");

    html! {
        <div class={classes!("character-content", fade.class())}>
            <h2 class="character-name">{ &character.name }</h2>
            <div class="character-section">
                <h3>{"Race"}</h3>
                <p>{ character.race.as_deref().unwrap_or("Unknown") }</p>
            </div>
            <div class="character-section">
                <h3>{"Affiliation"}</h3>
                <p>{ character.affiliation.as_deref().unwrap_or("Unknown") }</p>
            </div>
            <div class="character-section">
                <h3>{"Description"}</h3>
                <p>{ character.description.as_deref().unwrap_or("No description available.") }</p>
            </div>
            <div class="character-section">
                <h3>{"Key Items"}</h3>
                { key_items }
            </div>
            <div class="gollum-thoughts">
                <h3>{"Gollum's Thoughts"}</h3>
                <p>{ format!("\"{thoughts}\"") }</p>
            </div>
        </div>
    }
}
