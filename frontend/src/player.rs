use leptos::*;

use crate::sidebar::PlayerSidebar;

#[leptos::component]
pub fn player_page() -> impl leptos::IntoView {
    let selection = create_resource(leptos_router::use_params_map(), |params| async move {
        let id = params.get("id").cloned();
        let data = crate::browser::resolver().all().await;
        listing::view::player_detail(id.as_deref(), &data)
    });

    let players = create_resource(
        || (),
        |_| async move { listing::view::player_rows(crate::browser::resolver().players().await) },
    );

    // An implicit selection is written back into the URL, so refreshing the
    // page keeps showing the same player.
    let navigate = leptos_router::use_navigate();
    create_effect(move |_| {
        if let Some(Some(sel)) = selection.get() {
            if sel.defaulted {
                navigate(
                    &format!("/player/{}", sel.detail.id),
                    leptos_router::NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    let style = stylers::style! {
        "PlayerPage",
        .layout {
            display: grid;
            grid-template-columns: auto 22vw;
            column-gap: 2vw;
        }
    };

    view! {class=style,
        <div class="layout">
            <div>
                <Suspense fallback=move || view! { <p>Loading player</p> }>
                    { move || selection.get().map(|found| match found {
                        Some(sel) => view! { <PlayerDetail detail=sel.detail /> }.into_view(),
                        None => view! { <p class="not-found">Player not found</p> }.into_view(),
                    }) }
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
fn player_detail(detail: listing::view::PlayerDetail) -> impl leptos::IntoView {
    let style = stylers::style! {
        "PlayerDetail",
        .flag-big {
            width: 48px;
        }

        .completion {
            padding: 4px 8px;
            border-bottom: solid #030303aa 1px;
        }
    };

    let hardest = match detail.hardest {
        Some(link) => view! {class=style,
            <a href=format!("/demon/{}", link.id)>{link.name}</a>
        }
        .into_view(),
        None => view! {class=style, <span>"\u{2014}"</span> }.into_view(),
    };

    view! {class=style,
        <h2>{detail.name}</h2>
        <div class="info">
            {detail.flag.map(|src| view! {class=style, <img class="flag-big" src=src alt="" />})}
            <p>"GD Username: " {detail.gd_username}</p>
            <p>"Clan: " {detail.clan}</p>
            <p>"Rank: #" {detail.rank.map(|r| r.to_string()).unwrap_or_else(|| "?".to_owned())}</p>
            <p>"List Points: " {detail.list_points}</p>
            <p>"Hardest: " {hardest}</p>
        </div>

        <h3>Completions</h3>
        <div class="completions">
            {detail.completions.into_iter().map(|link| view! {class=style,
                <div class="completion">
                    <a href=format!("/demon/{}", link.id)>{link.name}</a>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
