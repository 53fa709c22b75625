use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;
use paygate::gate::GateConfig;

/// Build and gate settings, for checking what a deployed bundle was built with.
#[component]
pub fn HealthPage() -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    let rows = [
        ("version", build_info::package_version().to_string()),
        ("commit", build_info::version_label()),
        ("payment path", config.payment_path),
        ("access path", config.access_path),
        ("order parameter", config.order_param),
        ("storage prefix", config.storage_prefix),
    ];

    view! {
        <AppShell>
            <section class="mx-auto max-w-xl rounded-lg border border-gray-200 bg-white">
                <h1 class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-700">
                    "Gate status"
                </h1>
                <dl class="grid grid-cols-2 gap-y-2 p-6 text-sm">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="text-gray-500">{label}</dt>
                                <dd class="font-mono text-gray-900">{value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
            </section>
        </AppShell>
    }
}
