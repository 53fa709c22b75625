use crate::components::AppShell;
use crate::features::payment::RequirePayment;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn CourseAccessPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequirePayment>
                <CourseAccessContent />
            </RequirePayment>
        </AppShell>
    }
}

/// Placeholder for the purchased content; the real page is owned elsewhere.
#[component]
fn CourseAccessContent() -> impl IntoView {
    let query = use_query_map();
    let order_id = move || query.get().get("order_id").unwrap_or_default();

    view! {
        <div class="max-w-lg mx-auto">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Your course"</h1>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                "Order " <span class="font-mono">{order_id}</span>
            </p>
        </div>
    }
}
