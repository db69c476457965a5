use leptos::*;

#[leptos::component]
pub fn demon_page() -> impl leptos::IntoView {
    let detail = create_resource(leptos_router::use_params_map(), |params| async move {
        let id = params.get("id").cloned().unwrap_or_default();
        let data = crate::browser::resolver().all().await;
        listing::view::demon_detail(&id, &data)
    });

    view! {
        <Suspense fallback=move || view! { <p>Loading demon</p> }>
            { move || detail.get().map(|found| match found {
                Some(d) => view! { <DemonDetail detail=d /> }.into_view(),
                None => view! { <p class="not-found">Demon not found</p> }.into_view(),
            }) }
        </Suspense>
    }
}

#[leptos::component]
fn demon_detail(detail: listing::view::DemonDetail) -> impl leptos::IntoView {
    let style = stylers::style! {
        "DemonDetail",
        .head {
            display: flex;
            gap: 16px;
            align-items: center;
        }

        .face {
            height: 72px;
        }

        .aredl-badge {
            padding: 2px 6px;
            border-radius: 6px;
            background-color: #42424d;
            color: #f1f1f1;
        }

        .sub {
            color: #8d8d95;
        }
    };

    let placement = detail
        .placement
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_owned());

    let song = match detail.song {
        Some(listing::view::SongLink::Direct(link)) => view! {class=style,
            <a href=link target="_blank">NONG</a>
        }
        .into_view(),
        Some(listing::view::SongLink::Newgrounds(link)) => view! {class=style,
            <a href=link target="_blank">Newgrounds</a>
        }
        .into_view(),
        None => view! {class=style, <span>"\u{2014}"</span> }.into_view(),
    };

    view! {class=style,
        <div class="head">
            {detail.face.map(|src| view! {class=style, <img class="face" src=src alt="" />})}
            <div>
                <h2>
                    {detail.name}
                    " "
                    {detail.aredl_rank.map(|r| view! {class=style,
                        <span class="aredl-badge">{format!("AREDL #{}", r)}</span>
                    })}
                </h2>
                <span class="sub">{format!("Rank #{}", placement)} " \u{2022} " {detail.creator}</span>
            </div>
        </div>

        <div class="meta">
            <p>"Publisher: " {detail.publisher}</p>
            <p>"Level ID: " {detail.level_id.map(|v| v.to_string()).unwrap_or_default()}</p>
            <p>"Length: " {detail.length}</p>
            <p>"Objects: " {detail.objects.map(|v| v.to_string()).unwrap_or_default()}</p>
            <p>"List Points: " {detail.list_points}</p>
            <p>"Song: " {song}</p>
        </div>

        <h3>Records</h3>
        <div class="records">
            {detail.records.into_iter().map(|row| view! { <RecordEntry row /> }).collect::<Vec<_>>()}
        </div>
    }
}

#[leptos::component]
fn record_entry(row: listing::view::RecordRow) -> impl leptos::IntoView {
    let style = stylers::style! {
        "RecordEntry",
        .record-entry {
            display: grid;
            grid-template-columns: 32px auto 10ch;
            column-gap: 1ch;
            align-items: center;

            padding: 4px 8px;
            border-bottom: solid #030303aa 1px;
        }

        .flag {
            width: 32px;
        }

        .no-video {
            color: #777777;
        }
    };

    let flag = match row.flag {
        Some(src) => view! {class=style, <img class="flag" src=src alt="" /> }.into_view(),
        None => view! {class=style, <span class="flag"></span> }.into_view(),
    };
    let video = match row.video {
        Some(link) => view! {class=style, <a href=link target="_blank">YouTube</a> }.into_view(),
        None => view! {class=style, <span class="no-video">YouTube</span> }.into_view(),
    };

    view! {class=style,
        <div class="record-entry">
            {flag}
            <a href=format!("/player/{}", row.player_id)>{row.player_name}</a>
            {video}
        </div>
    }
}
