use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</h1>
                <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "The page you requested does not exist."
                </p>
                <div class="mt-6">
                    <A
                        href=paths::PAYMENT
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all"
                    >
                        "Go to checkout"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
