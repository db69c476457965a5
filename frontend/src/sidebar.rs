use leptos::*;

/// Ranked player sidebar, shared by the landing and player pages.
#[leptos::component]
pub fn player_sidebar(
    rows: impl SignalGet<Value = Option<Vec<listing::view::PlayerRow>>> + 'static,
) -> impl leptos::IntoView {
    let style = stylers::style! {
        "PlayerSidebar",
        .player-entry {
            display: grid;
            grid-template-columns: 4ch 24px auto;
            column-gap: 1ch;
            align-items: center;

            padding: 4px 8px;
            border-bottom: solid #030303aa 1px;
        }

        .flag {
            width: 24px;
        }
    };

    view! {class=style,
        <div class="players">
            { move || rows.get().unwrap_or_default().into_iter().map(|row| view! {class=style,
                <div class="player-entry">
                    <span class="placement">
                        "#" {row.rank.map(|r| r.to_string()).unwrap_or_else(|| "?".to_owned())}
                    </span>
                    {row.flag.map(|src| view! {class=style, <img class="flag" src=src alt="" />})}
                    <a href=format!("/player/{}", row.id)>{row.name}</a>
                </div>
            }).collect::<Vec<_>>() }
        </div>
    }
}
