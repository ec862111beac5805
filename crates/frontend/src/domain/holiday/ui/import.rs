use contracts::common::ImportSummary;
use contracts::domain::holiday::HolidayImportRow;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::holiday::api;
use crate::shared::csv;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

/// Columns: name, date, type, description. Header skipped; rows missing the
/// required name or date are silently excluded from the batch.
pub fn map_import_rows(csv_text: &str) -> Vec<HolidayImportRow> {
    csv::data_records(csv_text)
        .iter()
        .filter_map(|record| {
            let name = csv::field(record, 0)?;
            let date = csv::field(record, 1)?;
            Some(HolidayImportRow {
                name,
                date,
                holiday_type: csv::field(record, 2),
                description: csv::field(record, 3),
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
        Some("max-width: min(600px, 95vw); width: min(600px, 95vw);".to_string()),
        move |handle| {
            let rows = RwSignal::new(Vec::<HolidayImportRow>::new());
            let summary = RwSignal::new(None::<ImportSummary>);
            let submitting = RwSignal::new(false);

            let handle_file = move |ev: leptos::ev::Event| {
                let input = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                let Some(file) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) else {
                    return;
                };
                if !csv::has_csv_extension(&file.name()) {
                    toasts.error("Only .csv files are accepted");
                    return;
                }
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
                            if result.successful > 0 {
                                on_done.run(());
                            }
                            // The backend's tally is rendered as-is
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
                    <div class="details__header"><h3>{"Import holidays"}</h3></div>
                    <div class="details__body">
                        <div class="form__group">
                            <label class="form__label">{"CSV file (name, date, type, description)"}</label>
                            <input type="file" accept=".csv" on:change=handle_file />
                        </div>

                        {move || {
                            let count = rows.get().len();
                            (count > 0 && summary.get().is_none()).then(|| view! {
                                <div class="import-preview">{format!("{} row(s) ready to import", count)}</div>
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
    fn row_missing_date_is_excluded_from_batch() {
        // 1 header + 2 data rows, second row has no date: batch is exactly 1
        let text = "Name,Date\nRepublic Day,2026-01-26\nNew Year\n";
        let rows = map_import_rows(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Republic Day");
        assert_eq!(rows[0].date, "2026-01-26");
    }

    #[test]
    fn type_and_description_are_optional() {
        let text = "Name,Date,Type\nDiwali,2026-11-08,OPTIONAL\n";
        let rows = map_import_rows(text);
        assert_eq!(rows[0].holiday_type.as_deref(), Some("OPTIONAL"));
        assert_eq!(rows[0].description, None);
    }
}
