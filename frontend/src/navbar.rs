use leptos::*;
use leptos_router::A;

#[leptos::component]
fn players_link() -> impl leptos::IntoView {
    let target = create_resource(
        || (),
        |_| async move {
            let players = crate::browser::resolver().players().await;
            listing::view::nav_target(&players)
        },
    );

    // Without any players the anchor keeps pointing at the default detail
    // page, which then shows its own not-found state.
    let href = move || match target.get().flatten() {
        Some(id) => format!("/player/{}", id),
        None => "/player".to_owned(),
    };

    view! {
        <A href=href>Players</A>
    }
}

#[leptos::component]
pub fn top_bar() -> impl leptos::IntoView {
    let style = stylers::style! {
        "TopBar",
        .bar {
            width: 100%;
            height: 4vh;
            padding-top: 0.5vh;
            padding-bottom: 0.5vh;

            background-color: #28282f;
            color: #d5d5d5;

            display: grid;
            grid-template-columns: 15vw auto 10vw 10vw 10vw;
        }

        .elem {
            display: inline-block;
            margin-top: auto;
            margin-bottom: auto;
        }

        .logo {
            color: #d5d5d5;
            width: 15vw;
            font-size: 24px;
            padding: 0px;
            margin: 0px;
            margin-left: 1vw;
        }
    };

    view! {class = style,
        <div class="bar">
            <A href="/">
                <p class="logo">Demonlist</p>
            </A>

            <div class="elem" style="grid-column-start: 3">
                <A href="/">List</A>
            </div>

            <div class="elem" style="grid-column-start: 4">
                <PlayersLink />
            </div>

            <div class="elem" style="grid-column-start: 5">
                <A href="/admin">Admin</A>
            </div>
        </div>
    }
}
