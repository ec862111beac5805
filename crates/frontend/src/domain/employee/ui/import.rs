//! Bulk CSV import: client-side preview, then one batch call whose
//! structured tally is rendered as-is.

use contracts::common::ImportSummary;
use contracts::domain::employee::EmployeeImportRow;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::employee::api;
use crate::shared::csv;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

/// Columns: full name, email, designation, department, joined on.
/// The header line is skipped; rows without the required name or email are
/// silently excluded from the batch.
pub fn map_import_rows(csv_text: &str) -> Vec<EmployeeImportRow> {
    csv::data_records(csv_text)
        .iter()
        .filter_map(|record| {
            let full_name = csv::field(record, 0)?;
            let email = csv::field(record, 1)?;
            Some(EmployeeImportRow {
                full_name,
                email,
                designation: csv::field(record, 2),
                department: csv::field(record, 3),
                joined_on: csv::field(record, 4),
            })
        })
        .collect()
}

pub fn open_import_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
        move |handle| {
            let rows = RwSignal::new(Vec::<EmployeeImportRow>::new());
            let file_name = RwSignal::new(String::new());
            let summary = RwSignal::new(None::<ImportSummary>);
            let submitting = RwSignal::new(false);

            let handle_file = move |ev: leptos::ev::Event| {
                let input = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                let Some(file) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) else {
                    return;
                };

                // Extension gate before anything is read or sent
                if !csv::has_csv_extension(&file.name()) {
                    toasts.error("Only .csv files are accepted");
                    return;
                }
                file_name.set(file.name());

                spawn_local(async move {
                    match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                        Ok(text) => {
                            let content = text.as_string().unwrap_or_default();
                            rows.set(map_import_rows(&content));
                        }
                        Err(e) => toasts.error(format!("Failed to read file: {:?}", e)),
                    }
                });
            };

            let handle_submit = move |_| {
                let batch = rows.get();
                if batch.is_empty() {
                    toasts.error("Nothing to import");
                    return;
                }
                submitting.set(true);
                spawn_local(async move {
                    match api::import(batch).await {
                        Ok(result) => {
                            submitting.set(false);
                            // Partial success is normal: refresh for the
                            // successful subset and keep the tally visible
                            if result.successful > 0 {
                                on_done.run(());
                            }
                            summary.set(Some(result));
                        }
                        Err(e) => {
                            submitting.set(false);
                            toasts.error(e);
                        }
                    }
                });
            };

            let handle_close = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header"><h3>{"Import employees"}</h3></div>
                    <div class="details__body">
                        <div class="form__group">
                            <label class="form__label">{"CSV file (name, email, designation, department, joined on)"}</label>
                            <input type="file" accept=".csv" on:change=handle_file />
                        </div>

                        {move || {
                            let count = rows.get().len();
                            (count > 0 && summary.get().is_none()).then(|| view! {
                                <div class="import-preview">
                                    {format!("{}: {} row(s) ready to import", file_name.get(), count)}
                                </div>
                            })
                        }}

                        {move || summary.get().map(|s| view! {
                            <div class="import-summary">
                                <p>{format!("Processed {} row(s): {} created, {} failed", s.total, s.successful, s.failed)}</p>
                                {(!s.created.is_empty()).then(|| view! {
                                    <ul class="import-summary__created">
                                        {s.created.iter().map(|c| view! { <li>{c.clone()}</li> }).collect_view()}
                                    </ul>
                                })}
                                {(!s.errors.is_empty()).then(|| view! {
                                    <ul class="import-summary__errors">
                                        {s.errors.iter().map(|e| view! { <li class="error">{e.clone()}</li> }).collect_view()}
                                    </ul>
                                })}
                            </div>
                        })}
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_close.close()>
                            {move || if summary.get().is_some() { "Close" } else { "Cancel" }}
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || rows.get().is_empty() || submitting.get() || summary.get().is_some()
                            on:click=handle_submit
                        >
                            {move || if submitting.get() { "Importing..." } else { "Import" }}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_skipped_and_incomplete_rows_are_excluded() {
        // 1 header + 2 data rows, second row missing the email field
        let text = "Full name,Email\nAsha Rao,asha@example.com\nVikram Iyer\n";
        let rows = map_import_rows(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "Asha Rao");
        assert_eq!(rows[0].email, "asha@example.com");
    }

    #[test]
    fn optional_columns_stay_optional() {
        let text = "name,email,designation\nAsha Rao,asha@example.com,Engineer\n";
        let rows = map_import_rows(text);
        assert_eq!(rows[0].designation.as_deref(), Some("Engineer"));
        assert_eq!(rows[0].department, None);
    }

    #[test]
    fn quoted_names_with_commas_survive() {
        let text = "name,email\n\"Rao, Asha\",asha@example.com\n";
        let rows = map_import_rows(text);
        assert_eq!(rows[0].full_name, "Rao, Asha");
    }
}
