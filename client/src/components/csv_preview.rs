//! CSV preview table with an upload control.

use leptos::prelude::*;

use crate::state::csv::{CsvPreview, CsvSource};

/// Renders the current preview. `on_upload` receives `(file_name, contents)`
/// once the chosen file has been read.
#[component]
pub fn CsvPreviewPanel(preview: RwSignal<CsvPreview>, on_upload: Callback<(String, String)>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                    Ok(text) => match text.as_string() {
                        Some(contents) => on_upload.run((name, contents)),
                        None => log::warn!("upload {name} did not read as text"),
                    },
                    Err(err) => log::warn!("reading upload {name} failed: {err:?}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_upload);
        }
    };

    let source_label = move || match preview.get().source {
        CsvSource::Empty => "No data loaded".to_owned(),
        CsvSource::Default => "Query log".to_owned(),
        CsvSource::Upload { file_name } => file_name,
    };

    view! {
        <section class="csv-preview">
            <div class="csv-preview__header">
                <h2>"Query Data"</h2>
                <span class="csv-preview__source">{source_label}</span>
                <label class="btn csv-preview__upload">
                    "Upload CSV"
                    <input type="file" accept=".csv" on:change=on_change />
                </label>
            </div>
            <div class="csv-preview__scroll">
                {move || {
                    let table = preview.get().table;
                    if table.is_empty() {
                        return view! { <p class="csv-preview__empty">"Nothing to show yet."</p> }.into_any();
                    }
                    view! {
                        <table class="csv-preview__table">
                            <tbody>
                                {table
                                    .rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                {row
                                                    .into_iter()
                                                    .map(|cell| view! { <td>{cell}</td> })
                                                    .collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
