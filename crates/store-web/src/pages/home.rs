//! Landing Page
//!
//! Static marketing copy only; no state.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="home">
            <header class="hero">
                <h1>"AI Interview Assistant"</h1>
                <p class="tagline">
                    "Our desktop app helps students prepare for interviews using \
                     powerful AI tools. Practice questions, get instant feedback, \
                     and improve your confidence — all in one place."
                </p>
                <div class="cta">
                    <a href="/store" class="btn btn-primary">"Pay to Unlock App"</a>
                </div>
            </header>

            <section class="features">
                <h2>"Why Choose Us?"</h2>
                <ul>
                    <li>"✔ Practice real interview questions with AI support"</li>
                    <li>"✔ Get instant feedback on your answers"</li>
                    <li>"✔ Improve confidence with mock sessions"</li>
                    <li>"✔ One-time payment, lifetime access"</li>
                </ul>
            </section>

            <footer class="footer">
                {format!("© {year} AI Interview Assistant | Contact: rahulshanisare91@gmail.com")}
            </footer>
        </div>
    }
}
