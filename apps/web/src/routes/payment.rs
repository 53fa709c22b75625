use crate::components::{Alert, AlertKind, AppShell};
use leptos::prelude::*;

/// Payment entry point. Checkout itself is handled by the payment provider.
#[component]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Complete your purchase"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    "Access to the course opens once your payment is confirmed."
                </p>
                <div class="mt-4">
                    <Alert
                        kind=AlertKind::Info
                        message="Already paid? Open the link from your payment confirmation.".to_string()
                    />
                </div>
            </div>
        </AppShell>
    }
}
