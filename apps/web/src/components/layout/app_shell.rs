//! Page frame shared by every route. It carries no navigation links into the
//! guarded area; the only way in is the confirm callback.

use leptos::prelude::*;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl mx-auto p-4">
                    <span class="font-semibold whitespace-nowrap dark:text-white">"Courses"</span>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
