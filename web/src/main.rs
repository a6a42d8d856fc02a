use dioxus::prelude::*;

use ui::core::config::ICONS_CSS_URL;
use ui::views::Landing;
use ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: ICONS_CSS_URL }

        Landing {}
    }
}
