use bubble_menu::menu_config::load_menu_config;
use bubble_menu::{BubbleMenu, MenuConfig};
use yew::prelude::*;

const SECTION_STYLE: &str = "min-height: 100vh; display: flex; flex-direction: column; \
    justify-content: center; padding: 0 10vw; border-bottom: 1px solid #14532d;";

#[derive(Properties, PartialEq)]
struct DemoProps {
    config: MenuConfig,
}

#[function_component(Demo)]
fn demo(props: &DemoProps) -> Html {
    let config = &props.config;
    let menu_open = use_state(|| false);
    let on_menu_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |open: bool| menu_open.set(open))
    };
    let sections = config.resolved_items().into_iter().map(|item| {
        let id = item.href.trim_start_matches('#').to_string();
        html! {
            <section key={id.clone()} id={id} style={SECTION_STYLE}>
                <h2>{ item.label }</h2>
                <p>{ "Pick a bubble to jump between sections." }</p>
            </section>
        }
    });
    html! {
        <main style="background: #020617; color: #bbf7d0; font-family: sans-serif;">
            <BubbleMenu
                items={config.items.clone()}
                on_menu_click={on_menu_click}
                menu_aria_label={config.menu_aria_label.clone()}
                menu_content_color={config.menu_content_color.clone()}
                use_fixed_position={config.use_fixed_position}
                animation_ease={config.animation_ease.clone()}
                animation_duration={config.animation_duration}
                stagger_delay={config.stagger_delay}
                class={classes!(config.class_name.clone())}
                style={config.style.clone().map(AttrValue::from)}
            />
            <p style="position: fixed; left: 1.5rem; top: 1.5rem; margin: 0; opacity: 0.6;">
                { if *menu_open { "menu open" } else { "menu closed" } }
            </p>
            { for sections }
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_menu_config();
    gloo::console::log!("bubble menu demo", format!("{} items", config.resolved_items().len()));
    yew::Renderer::<Demo>::with_props(DemoProps { config }).render();
}
