use leptos::*;

use listing::{admin, Dataset};

use crate::browser::{BrowserOverrides, StaticFiles};

#[leptos::component]
pub fn admin() -> impl leptos::IntoView {
    view! {
        <h2>Admin</h2>
        <p>
            "Edits are saved to this browser only and take precedence over the "
            "static data files. Export a dataset to publish it."
        </p>

        <DatasetEditor dataset=Dataset::Demons />
        <DatasetEditor dataset=Dataset::Players />
        <DatasetEditor dataset=Dataset::Records />

        <ClearOverrides />
    }
}

#[leptos::component]
fn dataset_editor(dataset: Dataset) -> impl leptos::IntoView {
    let initial = create_resource(
        || (),
        move |_| async move { admin::editor_text(&BrowserOverrides::new(), &StaticFiles, dataset).await },
    );

    let (text, set_text) = create_signal(String::new());
    let (status, set_status) = create_signal(String::new());
    let (preview, set_preview) = create_signal(Option::<String>::None);

    // Fill the editor once the initial content has loaded.
    create_effect(move |_| {
        if let Some(content) = initial.get() {
            set_text(content);
        }
    });

    let on_save = move |_| match admin::save(&BrowserOverrides::new(), dataset, &text()) {
        Ok(()) => set_status(format!("Saved {} to this browser", dataset.name())),
        Err(e) => set_status(format!("Not saved, invalid JSON: {}", e)),
    };

    let on_export = move |_| match admin::export(dataset, &text()) {
        Ok(file) => match crate::browser::download(&file) {
            Ok(()) => set_status(format!("Exported {}", file.filename)),
            Err(e) => set_status(format!("Download failed: {:?}", e)),
        },
        Err(e) => set_status(format!("Not exported, invalid JSON: {}", e)),
    };

    let on_reload = move |_| match admin::override_text(&BrowserOverrides::new(), dataset) {
        Some(content) => {
            set_text(content);
            set_status("Loaded saved edits".to_owned());
        }
        None => set_status("No saved edits for this dataset".to_owned()),
    };

    let on_preview = move |_| {
        if preview.get_untracked().is_some() {
            set_preview(None);
            return;
        }
        match admin::preview(dataset, &text()) {
            Ok(markup) => {
                set_preview(Some(markup));
                set_status(String::new());
            }
            Err(e) => set_status(format!("Cannot preview, invalid JSON: {}", e)),
        }
    };

    let style = stylers::style! {
        "DatasetEditor",
        .editor {
            margin-bottom: 3vh;
        }

        textarea {
            width: 60vw;
            min-height: 20vh;

            color: #f1f1f1;
            background-color: #28282f;
            font-family: monospace;
        }

        .actions {
            display: flex;
            gap: 1ch;
        }

        .status {
            color: #8d8d95;
        }

        .preview {
            border: solid #030303aa 1px;
            padding: 8px;
        }
    };

    view! {class=style,
        <div class="editor">
            <h3>{dataset.name()}</h3>
            <textarea
                prop:value=move || text()
                on:input=move |ev| set_text(event_target_value(&ev))
            ></textarea>
            <div class="actions">
                <button on:click=on_save>Save</button>
                <button on:click=on_export>Export</button>
                <button on:click=on_reload>Load saved</button>
                <button on:click=on_preview>Preview</button>
            </div>
            <p class="status">{ move || status() }</p>
            { move || preview().map(|markup| view! {class=style,
                <div class="preview" inner_html=markup></div>
            }) }
        </div>
    }
}

#[leptos::component]
fn clear_overrides() -> impl leptos::IntoView {
    let (status, set_status) = create_signal(String::new());

    let on_clear = move |_| {
        let confirmed = leptos::window()
            .confirm_with_message("Clear all local edits? The site will use the static files again.")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        admin::clear_overrides(&BrowserOverrides::new());
        set_status("Cleared local edits, the static files are live again".to_owned());
    };

    view! {
        <div>
            <button on:click=on_clear>Clear local edits</button>
            <p>{ move || status() }</p>
        </div>
    }
}
