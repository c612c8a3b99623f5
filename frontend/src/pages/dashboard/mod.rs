use leptos::*;

mod panel;
pub mod utils;

pub use panel::DashboardView;

use crate::{components::layout::{ErrorMessage, LoadingSpinner}, state::auth::use_api_client};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api_client();
    let dashboard = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.admin_dashboard().await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner /> }>
            {move || dashboard.get().map(|result| match result {
                Ok(data) => view! { <DashboardView dashboard=data /> }.into_view(),
                Err(err) => view! {
                    <ErrorMessage message=err.error />
                    <DashboardView dashboard=Default::default() />
                }
                .into_view(),
            })}
        </Suspense>
    }
}
