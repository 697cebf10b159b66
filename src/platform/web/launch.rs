use crate::ui::app::App;

pub fn launch() {
    dioxus::logger::initialize_default();
    tracing::info!("launching web shell");
    dioxus::launch(App);
}
