//! Payment callback. The provider redirects here with `order_id` after it has
//! confirmed the charge; the page writes the verification record and replaces
//! itself with the guarded access route.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::payment::storage;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use paygate::gate::GateConfig;

#[derive(Clone, Debug, PartialEq)]
enum ConfirmStatus {
    Pending,
    Error(AppError),
}

#[component]
pub fn ConfirmPaymentPage() -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    let query = use_query_map();
    let navigate = use_navigate();
    let (status, set_status) = signal(ConfirmStatus::Pending);

    Effect::new(move |_| {
        if status.get() != ConfirmStatus::Pending {
            return;
        }

        let raw = query
            .get()
            .get(config.order_param.as_str())
            .unwrap_or_default();
        let repository = storage::repository(&config);

        match repository.confirm_payment(&raw) {
            Ok(order_id) => {
                let target = config.access_location(&order_id);
                navigate(
                    &target.href(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            Err(err) => {
                tracing::warn!("payment confirmation failed: {err}");
                set_status.set(ConfirmStatus::Error(AppError::from(err)));
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Confirming your payment"
                </h1>
                {move || match status.get() {
                    ConfirmStatus::Pending => view! {
                        <div class="mt-4">
                            <Spinner label="Confirming payment" />
                        </div>
                    }
                    .into_any(),
                    ConfirmStatus::Error(err) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
