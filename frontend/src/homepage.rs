use leptos::*;

use crate::sidebar::PlayerSidebar;

#[leptos::component]
pub fn homepage() -> impl leptos::IntoView {
    let demons = create_resource(
        || (),
        |_| async move { listing::view::demon_rows(crate::browser::resolver().demons().await) },
    );
    let players = create_resource(
        || (),
        |_| async move { listing::view::player_rows(crate::browser::resolver().players().await) },
    );

    let style = stylers::style! {
        "Homepage",
        .layout {
            display: grid;
            grid-template-columns: auto 22vw;
            column-gap: 2vw;
        }
    };

    view! {class=style,
        <div class="layout">
            <div>
                <h2>Demons</h2>
                <Suspense fallback=move || view! { <p>Loading demons</p> }>
                    <DemonList rows=demons />
                </Suspense>
            </div>
            <div>
                <h2>Players</h2>
                <Suspense fallback=move || view! { <p>Loading players</p> }>
                    <PlayerSidebar rows=players />
                </Suspense>
            </div>
        </div>
    }
}

#[leptos::component]
fn demon_list(
    rows: impl SignalGet<Value = Option<Vec<listing::view::DemonRow>>> + 'static,
) -> impl leptos::IntoView {
    view! {
        <div>
            { move || rows.get().unwrap_or_default().into_iter().map(|row| view! { <DemonListEntry row /> }).collect::<Vec<_>>() }
        </div>
    }
}

#[leptos::component]
fn demon_list_entry(row: listing::view::DemonRow) -> impl leptos::IntoView {
    let style = stylers::style! {
        "DemonListEntry",
        .list-entry {
            display: grid;
            grid-template-columns: 5ch auto 12ch 8ch 48px;
            column-gap: 1ch;
            align-items: center;

            padding: 6px 8px;
            border: solid #030303aa 1px;
        }

        .name {
            font-size: 18px;
        }

        .diff-face {
            width: 48px;
        }
    };

    view! {class=style,
        <div class="list-entry">
            <span class="placement">
                "#" {row.placement.map(|p| p.to_string()).unwrap_or_else(|| "?".to_owned())}
            </span>
            <a class="name" href=format!("/demon/{}", row.id)>{row.name}</a>
            <span class="aredl">{row.aredl_rank.map(|r| format!("AREDL #{}", r))}</span>
            <span class="points">{row.points} " pts"</span>
            {row.face.map(|src| view! {class=style, <img class="diff-face" src=src alt="" />})}
        </div>
    }
}
