//! Dashboard side widgets: completed-task bars, efficiency ring, today's plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is derived from the task list and schedule the dashboard
//! already loaded; the widgets issue no reads of their own. Adding a plan
//! block is reported through `on_add_block`.

#[cfg(test)]
#[path = "analytics_widgets_test.rs"]
mod analytics_widgets_test;

use std::f64::consts::TAU;

use leptos::prelude::*;

use crate::net::types::{NewScheduleBlock, ScheduleBlock, Task, TaskStatus};
use crate::util::analytics::TaskAnalytics;

const RING_RADIUS: f64 = 56.0;
const BLOCK_COLORS: [&str; 5] = ["blue", "purple", "pink", "yellow", "teal"];

/// Ring stroke modifier by efficiency band.
pub fn efficiency_tone(efficiency: usize) -> &'static str {
    match efficiency {
        75.. => "blue",
        50..=74 => "purple",
        25..=49 => "pink",
        _ => "yellow",
    }
}

/// `(dasharray, dashoffset)` for the efficiency ring.
pub fn ring_dash(efficiency: usize) -> (f64, f64) {
    let circumference = TAU * RING_RADIUS;
    let pct = f64::from(u32::try_from(efficiency.min(100)).unwrap_or(100));
    (circumference, circumference * (1.0 - pct / 100.0))
}

fn block_class(color: Option<&str>) -> String {
    let color = color.filter(|c| BLOCK_COLORS.contains(c)).unwrap_or("grey");
    format!("plan__bar plan__bar--{color}")
}

/// Build a plan block from the inline form, or the message to show.
/// Times are `HH:MM` from `<input type="time">`, so string order is time order.
pub fn validate_schedule_block(title: &str, start: &str, end: &str) -> Result<NewScheduleBlock, &'static str> {
    let title = title.trim();
    if title.is_empty() || start.is_empty() || end.is_empty() {
        return Err("Title, start and end time are required");
    }
    if end <= start {
        return Err("End time must be after start time");
    }
    Ok(NewScheduleBlock {
        title: title.to_owned(),
        start_time: start.to_owned(),
        end_time: end.to_owned(),
        ..NewScheduleBlock::default()
    })
}

#[component]
pub fn AnalyticsWidgets(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] schedule: Signal<Vec<ScheduleBlock>>,
    on_add_block: Callback<NewScheduleBlock>,
) -> impl IntoView {
    let analytics = Memo::new(move |_| tasks.with(|t| TaskAnalytics::compute(t)));
    let totals = move || {
        tasks.with(|t| {
            let done = t.iter().filter(|task| task.status == TaskStatus::Done).count();
            format!("{} total tasks • {done} completed", t.len())
        })
    };

    let series: [(&str, &str, fn(&TaskAnalytics) -> usize); 3] = [
        ("Main", "blue", |a| a.main_done),
        ("Secondary", "purple", |a| a.secondary_done),
        ("Tertiary", "pink", |a| a.tertiary_done),
    ];
    let bars = series
        .into_iter()
        .map(|(label, tone, pick)| {
            let count = move || pick(&analytics.get());
            let height = move || format!("height: {}%", analytics.get().bar_percent(count()));
            view! {
                <div class="bars__item">
                    <div class="bars__track">
                        <div class=format!("bars__fill bars__fill--{tone}") style=height></div>
                    </div>
                    <div class="bars__count">{count}</div>
                    <div class="bars__label">{label}</div>
                </div>
            }
        })
        .collect_view();

    let (dasharray, _) = ring_dash(0);
    let dashoffset = move || format!("{:.2}", ring_dash(analytics.get().efficiency).1);
    let ring_class = move || format!("ring__value ring__value--{}", efficiency_tone(analytics.get().efficiency));

    let adding = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_schedule_block(&title.get_untracked(), &start.get_untracked(), &end.get_untracked()) {
            Ok(block) => {
                form_error.set(None);
                title.set(String::new());
                start.set(String::new());
                end.set(String::new());
                adding.set(false);
                on_add_block.run(block);
            }
            Err(message) => form_error.set(Some(message.to_owned())),
        }
    };

    view! {
        <div class="widgets">
            <section class="widget">
                <h3 class="widget__title">"COMPLETED TASKS"</h3>
                <div class="bars">{bars}</div>
            </section>

            <section class="widget">
                <h3 class="widget__title">"EFFICIENCY"</h3>
                <div class="ring">
                    <svg class="ring__svg" viewBox="0 0 128 128">
                        <circle class="ring__track" cx="64" cy="64" r=RING_RADIUS fill="transparent"></circle>
                        <circle
                            class=ring_class
                            cx="64"
                            cy="64"
                            r=RING_RADIUS
                            fill="transparent"
                            stroke-linecap="round"
                            stroke-dasharray=format!("{dasharray:.2}")
                            stroke-dashoffset=dashoffset
                        ></circle>
                    </svg>
                    <div class="ring__label">
                        <span class="ring__number">{move || analytics.get().efficiency}</span>
                        <span class="ring__unit">"%"</span>
                    </div>
                </div>
                <p class="widget__caption">"Overall Efficiency"</p>
                <p class="widget__caption widget__caption--strong">{totals}</p>
                <p class="widget__caption">
                    {move || {
                        let a = analytics.get();
                        format!("Avg progress {}% • Completion {}%", a.avg_progress, a.completion_rate)
                    }}
                </p>
            </section>

            <section class="widget">
                <header class="widget__header">
                    <h3 class="widget__title">"PLAN"</h3>
                    <button class="widget__add" on:click=move |_| adding.update(|open| *open = !*open)>
                        {move || if adding.get() { "Close" } else { "+ Block" }}
                    </button>
                </header>
                <Show when=move || adding.get()>
                    <form class="plan__form" on:submit=on_submit>
                        <input
                            class="input input--small"
                            placeholder="What are you working on?"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <div class="plan__times">
                            <input
                                class="input input--small"
                                type="time"
                                prop:value=move || start.get()
                                on:input=move |ev| start.set(event_target_value(&ev))
                            />
                            <input
                                class="input input--small"
                                type="time"
                                prop:value=move || end.get()
                                on:input=move |ev| end.set(event_target_value(&ev))
                            />
                        </div>
                        <Show when=move || form_error.get().is_some()>
                            <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button type="submit" class="btn btn--primary btn--small">"Add"</button>
                    </form>
                </Show>
                <Show
                    when=move || schedule.with(|s| !s.is_empty())
                    fallback=|| view! { <p class="widget__empty">"Nothing planned for today yet."</p> }
                >
                    <ul class="plan">
                        <For each=move || schedule.get() key=|block| block.id.clone() let:block>
                            <li class="plan__item">
                                <span class=block_class(block.color.as_deref())></span>
                                <div class="plan__text">
                                    <span class="plan__time">{format!("{} - {}", block.start_time, block.end_time)}</span>
                                    <span class="plan__title">{block.title.clone()}</span>
                                </div>
                            </li>
                        </For>
                    </ul>
                </Show>
            </section>
        </div>
    }
}
