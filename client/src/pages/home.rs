//! Landing page: hero, how-it-works steps and feature cards.

use leptos::prelude::*;
use leptos_router::components::A;

const STEPS: [(&str, &str); 3] = [
    ("Upload Your Project", "Share your project description, code, or GitHub repo"),
    ("AI Analysis", "Get comprehensive evaluation across 15+ dimensions"),
    ("Win Your Hackathon", "Implement actionable recommendations and impress judges"),
];

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📊",
        "Multi-Dimensional Scoring",
        "Get scored on technical excellence, innovation, impact, and execution quality",
    ),
    ("💡", "Personalized Ideas", "Generate tailored project ideas based on your skills and interests"),
    (
        "🎯",
        "Actionable Feedback",
        "Receive specific, prioritized recommendations you can implement immediately",
    ),
    ("⚡", "Quick Wins", "Identify improvements you can make in 1-2 hours for maximum impact"),
    ("📈", "Track Progress", "Re-evaluate your project and see improvement over time"),
    ("✨", "Wow Factor Tips", "Learn how to make judges say 'wow' with your demo"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, body))| {
            view! {
                <div class="step">
                    <span class="step__number">{i + 1}</span>
                    <h3 class="step__title">{*title}</h3>
                    <p class="step__body">{*body}</p>
                </div>
            }
        })
        .collect_view();

    let features = FEATURES
        .iter()
        .map(|(icon, title, body)| {
            view! {
                <div class="feature-card">
                    <div class="feature-card__icon">{*icon}</div>
                    <h3 class="feature-card__title">{*title}</h3>
                    <p class="feature-card__body">{*body}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">"AI Hackathon Helper"</h1>
                <p class="hero__tagline">"Your Personal Hackathon Mentor"</p>
                <p class="hero__lead">
                    "Get AI-powered project evaluations, personalized idea generation, and actionable guidance to win your next hackathon"
                </p>
                <div class="hero__actions">
                    <A href="/evaluate" attr:class="btn btn--primary btn--large">"Evaluate My Project"</A>
                    <A href="/generate" attr:class="btn btn--large">"Get Project Ideas"</A>
                </div>
            </section>

            <section class="home__section">
                <h2 class="home__heading">"How It Works"</h2>
                <div class="steps">{steps}</div>
            </section>

            <section class="home__section">
                <h2 class="home__heading">"Powerful Features"</h2>
                <div class="features">{features}</div>
            </section>

            <section class="home__cta">
                <h2 class="home__heading">"Ready to Win Your Next Hackathon?"</h2>
                <p>"Join thousands of hackers who've improved their projects with AI-powered guidance"</p>
                <div class="hero__actions">
                    <A href="/evaluate" attr:class="btn btn--primary">"Evaluate Your Project Now"</A>
                    <A href="/generate" attr:class="btn">"Generate Project Ideas"</A>
                </div>
            </section>
        </div>
    }
}
