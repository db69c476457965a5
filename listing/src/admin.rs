//! Operations behind the admin surface: filling the editors, saving and
//! exporting override slots, and previewing editor content through the
//! string rendering backend.

use crate::resolver::{OverrideStore, RemoteSource};
use crate::{html, view, Dataset};

/// File offered for download by the export operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Initial editor content for one dataset: the override slot when present,
/// else the static file, else an empty array.
///
/// Parseable text is pretty-printed; an override that does not parse is
/// returned verbatim so the user can repair it in place.
pub async fn editor_text<S, R>(store: &S, remote: &R, dataset: Dataset) -> String
where
    S: OverrideStore,
    R: RemoteSource,
{
    if let Some(raw) = store.get(dataset) {
        return match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => pretty(&value),
            Err(_) => raw,
        };
    }

    match remote.fetch(dataset).await {
        Ok(body) => match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => pretty(&value),
            Err(e) => {
                tracing::error!("Fetched {} is not valid JSON: {}", dataset.static_path(), e);
                "[]".to_owned()
            }
        },
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", dataset.static_path(), e);
            "[]".to_owned()
        }
    }
}

/// The saved override for one dataset, pretty-printed when it parses, for
/// the explicit "reload saved edits" action. `None` when no override is
/// saved.
pub fn override_text<S>(store: &S, dataset: Dataset) -> Option<String>
where
    S: OverrideStore,
{
    store.get(dataset).map(|raw| {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => pretty(&value),
            Err(_) => raw,
        }
    })
}

/// Persists the editor text into the dataset's override slot.
///
/// The text must parse as JSON; on failure nothing is written and the parse
/// error is handed back for display.
pub fn save<S>(store: &S, dataset: Dataset, text: &str) -> Result<(), serde_json::Error>
where
    S: OverrideStore,
{
    let value: serde_json::Value = serde_json::from_str(text)?;
    store.set(dataset, &value.to_string());
    Ok(())
}

/// Validates the editor text and wraps it up for download.
pub fn export(dataset: Dataset, text: &str) -> Result<ExportFile, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text)?;
    Ok(ExportFile {
        filename: dataset.export_filename(),
        content: text.to_owned(),
    })
}

/// Removes every override slot, reverting resolution to the static files.
pub fn clear_overrides<S>(store: &S)
where
    S: OverrideStore,
{
    for dataset in Dataset::ALL {
        store.remove(dataset);
    }
}

/// Renders the editor text the way the site would show it, through the
/// string backend.
pub fn preview(dataset: Dataset, text: &str) -> Result<String, serde_json::Error> {
    match dataset {
        Dataset::Demons => {
            let demons: Vec<common::Demon> = serde_json::from_str(text)?;
            Ok(html::demon_list(&view::demon_rows(demons)))
        }
        Dataset::Players => {
            let players: Vec<common::Player> = serde_json::from_str(text)?;
            Ok(html::player_sidebar(&view::player_rows(players)))
        }
        Dataset::Records => {
            let records: Vec<common::Record> = serde_json::from_str(text)?;
            let rows = records
                .iter()
                .map(|r| view::RecordRow {
                    player_id: r.player_id.clone(),
                    player_name: r.player_id.clone(),
                    flag: None,
                    video: r.youtube.clone(),
                })
                .collect::<Vec<_>>();
            Ok(html::record_rows(&rows))
        }
    }
}
