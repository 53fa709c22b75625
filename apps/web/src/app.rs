use crate::app_lib::config::AppConfig;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load().gate_config());

    view! {
        <Router>
            <AppRoutes />
        </Router>
    }
}
