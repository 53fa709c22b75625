mod access;
mod confirm;
mod health;
mod not_found;
pub(crate) mod paths;
mod payment;

pub(crate) use access::CourseAccessPage;
pub(crate) use confirm::ConfirmPaymentPage;
pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use payment::PaymentPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/sale/buy-course/course/payment") view=PaymentPage />
            <Route path=path!("/sale/buy-course/course/confirm") view=ConfirmPaymentPage />
            <Route path=path!("/sale/buy-course/course/access") view=CourseAccessPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
