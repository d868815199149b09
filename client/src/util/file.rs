//! Local file selection for CSV import.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use assessments::csv::MAX_CSV_BYTES;

/// Reject files that are obviously not CSV or too large before reading them.
///
/// # Errors
///
/// Returns the message shown under the file picker.
pub fn check_csv_file(name: &str, size: f64) -> Result<(), String> {
    let is_csv = std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err("Please select a CSV file".to_owned());
    }
    #[allow(clippy::cast_precision_loss)]
    if size > MAX_CSV_BYTES as f64 {
        return Err("CSV file must be 10 MB or smaller".to_owned());
    }
    Ok(())
}

/// First file picked in an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read a picked file as UTF-8 text.
///
/// # Errors
///
/// Returns a message when the browser cannot read the file.
#[cfg(feature = "hydrate")]
pub async fn read_text(file: web_sys::File) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| format!("could not read file: {e:?}"))?;
    text.as_string().ok_or_else(|| "file is not text".to_owned())
}
