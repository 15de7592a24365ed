//! Public landing screen.

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthView};

use super::open_view;

const FEATURES: [(&str, &str); 3] = [
    ("Resume parsing", "Upload a PDF or DOCX and get structured skills, experience and education."),
    ("Semantic matching", "Candidates and openings are ranked by meaning, not keyword overlap."),
    ("One dashboard", "Job seekers track applications; hiring teams review ranked candidates."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="landing">
            <header class="landing-nav">
                <span class="brand">"HireSight"</span>
                <button class="link-text" on:click=open_view(auth, AuthView::Login)>"Sign in"</button>
            </header>
            <section class="hero">
                <h1>"Hire on evidence, not keywords"</h1>
                <p class="hero-subtitle">"AI-assisted resume screening for candidates and hiring teams."</p>
                <div class="hero-actions">
                    <button class="primary-button" on:click=open_view(auth, AuthView::Signup)>
                        "Get started"
                    </button>
                    <button class="secondary-button" on:click=open_view(auth, AuthView::Login)>
                        "I already have an account"
                    </button>
                </div>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
