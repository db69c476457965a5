use leptos::*;
use leptos_router::*;

use frontend::{Admin, DemonPage, Homepage, PlayerPage, TopBar};

fn main() {
    mount_to_body(move || {
        view! {
            <Router>
                <nav>
                    <TopBar />
                </nav>
                <main>
                    <Routes>
                        <Route path="/" view=Homepage />
                        <Route path="/demon/:id" view=DemonPage />
                        <Route path="/player" view=PlayerPage />
                        <Route path="/player/:id" view=PlayerPage />
                        <Route path="/admin" view=Admin />
                    </Routes>
                </main>
            </Router>
        }
    })
}
