use gloo_storage::{SessionStorage, Storage};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Session-only flag remembering whether the About panel is open.
const ABOUT_OPEN_KEY: &str = "gw_about_open";
/// The portrait fades in this long after the panel opens.
const IMAGE_REVEAL_DELAY_MS: u32 = 300;
const FOCUS_CLEANUP_MS: u32 = 100;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let about_open =
        use_state(|| SessionStorage::get::<bool>(ABOUT_OPEN_KEY).unwrap_or(false));
    let image_shown = use_state(|| false);
    let content_ref = use_node_ref();

    // The portrait trails the panel by a beat; closing hides it immediately.
    {
        let image_shown = image_shown.clone();
        use_effect_with(*about_open, move |open| {
            if *open {
                let image_shown = image_shown.clone();
                Timeout::new(IMAGE_REVEAL_DELAY_MS, move || image_shown.set(true)).forget();
            } else {
                image_shown.set(false);
            }
            || ()
        });
    }

    let toggle_about = {
        let about_open = about_open.clone();
        Callback::from(move |_| {
            let next = !*about_open;
            let _ = SessionStorage::set(ABOUT_OPEN_KEY, next);
            about_open.set(next);
        })
    };

    let scroll_to_content = {
        let content_ref = content_ref.clone();
        Callback::from(move |_| {
            let Some(wrapper) = content_ref.cast::<HtmlElement>() else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            wrapper.scroll_into_view_with_scroll_into_view_options(&options);

            // Focus the wrapper for keyboard users, then drop the tabindex.
            let _ = wrapper.set_attribute("tabindex", "-1");
            let _ = wrapper.focus();
            let wrapper = wrapper.clone();
            Timeout::new(FOCUS_CLEANUP_MS, move || {
                let _ = wrapper.remove_attribute("tabindex");
            })
            .forget();
        })
    };

    let about_label = if *about_open {
        "Hide About Gollum"
    } else {
        "Read About Gollum"
    };

    html! {
        <section class="home-page">
            <div class="hero">
                <h2 class="hero-title">{"Have you seen this creature?"}</h2>
                <p class="hero-subtitle">
                    {"Pale, thin, big luminous eyes. Answers to Sméagol. Last seen muttering about a ring."}
                </p>
                <button class="btn hero-btn" onclick={scroll_to_content}>{"Where is he?"}</button>
            </div>
            <div ref={content_ref} class="content-wrapper">
                <div class="about-section">
                    <button
                        class="btn about-toggle"
                        aria-expanded={about_open.to_string()}
                        onclick={toggle_about}
                    >
                        { about_label }
                    </button>
                    <div class={classes!("about-panel", about_open.then_some("show"))}>
                        <p>
                            {"Gollum was once Sméagol, a river-hobbit of the Gladden Fields, until \
                              the Ring found him and five hundred years in the dark did the rest. \
                              He escaped the Misty Mountains hunting the thief Baggins, and has \
                              been sighted creeping across half of Middle-earth since."}
                        </p>
                        <p>
                            {"This site collects those sightings. Check the map, read the clues, \
                              and if you spot him, report it. He is faster than he looks."}
                        </p>
                    </div>
                    <img
                        class={classes!("about-image", image_shown.then_some("show"))}
                        src="images/gollum-portrait.svg"
                        alt="Portrait of Gollum"
                    />
                </div>
            </div>
        </section>
    }
}
