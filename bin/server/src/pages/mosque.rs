//! Mosque detail page and its server function.

use crate::pages::NotFound;
use crate::types::MosqueDetail;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_params, params::Params};

/// URL params for the detail page.
#[derive(Params, PartialEq, Clone, Debug)]
struct MosqueParams {
    number: Option<String>,
}

/// Server function to look up a mosque by its public number.
///
/// Returns `Ok(None)` both when no record matches and when the lookup
/// fails; failures are logged on the server.
#[server]
pub async fn get_mosque(number: String) -> Result<Option<MosqueDetail>, ServerFnError> {
    use crate::server_helpers::get_app_state;

    let state = get_app_state().map_err(|e| e.into_server_error())?;

    Ok(state.load_detail(&number).await)
}

/// Detail page for the mosque named by the `:number` route segment.
#[component]
pub fn MosquePage() -> impl IntoView {
    let params = use_params::<MosqueParams>();
    let number = Signal::derive(move || params.get().ok().and_then(|p| p.number));

    let mosque = Resource::new(
        move || number.get(),
        |number| async move {
            match number {
                Some(number) => get_mosque(number).await.ok().flatten(),
                None => None,
            }
        },
    );

    view! {
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                mosque.get().map(|detail| match detail {
                    Some(detail) => view! {
                        <Title text=detail.record.name.clone()/>
                        <MosqueDetailView detail=detail/>
                    }.into_any(),
                    None => view! { <NotFound/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

/// Presentational view of a resolved mosque record.
#[component]
pub fn MosqueDetailView(detail: MosqueDetail) -> impl IntoView {
    let MosqueDetail {
        record,
        photo_url,
        map_url,
        logo_url,
        home_url,
        info_as_html,
    } = detail;

    let description = if info_as_html {
        view! { <div class="mosque-description" inner_html=record.info/> }.into_any()
    } else {
        view! { <p class="mosque-description">{record.info}</p> }.into_any()
    };

    view! {
        <div class="mosque-page">
            <section class="mosque-banner">
                <img class="mosque-banner-image" src=photo_url.clone()/>
                <div class="mosque-banner-overlay">
                    <h1>{record.name.clone()}</h1>
                </div>
            </section>

            <div class="mosque-body">
                <section class="mosque-info-panel">
                    <h2>"نبذة عن المسجد"</h2>
                    <div class="mosque-info-row">
                        "اسم المسجد: " <span class="mosque-info-value">{record.name}</span>
                    </div>
                    <div class="mosque-info-row">
                        "رقم المسجد: " <span class="mosque-info-value">{record.number}</span>
                    </div>
                    <div class="mosque-info-row">
                        "تاريخ الإنشاء: " <span class="mosque-info-value">{record.builded_at}</span>
                    </div>
                    <div class="mosque-info-row">
                        "المنطقة: " <span class="mosque-info-value">{record.location}</span>
                    </div>
                </section>

                <section class="mosque-detail">
                    <img class="mosque-detail-image" src=photo_url/>
                    {description}
                </section>
            </div>

            <section class="mosque-map">
                <iframe src=map_url height="300" width="100%"></iframe>
            </section>

            <footer class="mosque-footer">
                <img src=logo_url/>
                <a href=home_url rel="external">"العودة إلى الصفحة الرئيسية"</a>
            </footer>
        </div>
    }
}
