use shared::{fixtures, format_inr, utilization_percentage, BudgetStatus};
use yew::prelude::*;

const SATISFACTION_LEVELS: [(u8, &str, &str); 5] = [
    (1, "😢", "Very Sad"),
    (2, "😞", "Sad"),
    (3, "😐", "Neutral"),
    (4, "😊", "Happy"),
    (5, "😍", "Very Happy"),
];

fn budget_status_class(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "badge badge-success",
        BudgetStatus::HighUsage => "badge badge-warning",
        BudgetStatus::Delayed => "badge badge-destructive",
    }
}

/// Bar color tiers mirror how close a department is to exhausting its
/// allocation.
fn utilization_bar_class(percentage: f64) -> &'static str {
    if percentage > 80.0 {
        "bar-fill warning"
    } else if percentage > 60.0 {
        "bar-fill primary"
    } else {
        "bar-fill success"
    }
}

/// Budget transparency tab: ward totals, per-department utilization, the
/// satisfaction poll, and citizen budget proposals.
#[function_component(BudgetTab)]
pub fn budget_tab() -> Html {
    let satisfaction = use_state(|| Option::<u8>::None);
    let survey_submitted = use_state(|| false);

    let categories = fixtures::budget_categories();
    let proposals = fixtures::budget_proposals();

    let total_allocated: u64 = categories.iter().map(|c| c.allocated).sum();
    let total_spent: u64 = categories.iter().map(|c| c.spent).sum();
    let overall = utilization_percentage(total_spent, total_allocated);

    let submit_survey = {
        let satisfaction = satisfaction.clone();
        let survey_submitted = survey_submitted.clone();
        Callback::from(move |_: MouseEvent| {
            if satisfaction.is_some() {
                survey_submitted.set(true);
            }
        })
    };

    let selected_label = (*satisfaction).and_then(|value| {
        SATISFACTION_LEVELS
            .iter()
            .find(|(v, _, _)| *v == value)
            .map(|(_, emoji, label)| (*emoji, *label))
    });

    html! {
        <div class="tab-content budget-tab">
            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Ward Budget Overview 2024-25"}</h3>
                </div>
                <div class="card-body">
                    <div class="budget-totals">
                        <div class="budget-total-cell">
                            <p class="budget-total-label">{"Total Allocated"}</p>
                            <p class="budget-total-value">{format_inr(total_allocated)}</p>
                        </div>
                        <div class="budget-total-cell">
                            <p class="budget-total-label">{"Total Spent"}</p>
                            <p class="budget-total-value">{format_inr(total_spent)}</p>
                        </div>
                    </div>

                    <div class="bar-block">
                        <div class="bar-caption">
                            <span>{"Budget Utilization"}</span>
                            <span>{format!("{:.1}%", overall)}</span>
                        </div>
                        <div class="bar-track">
                            <div class="bar-fill primary" style={format!("width: {:.1}%;", overall)}></div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"How satisfied are you with budget utilization?"}</h3>
                </div>
                <div class="card-body">
                    {if !*survey_submitted {
                        html! {
                            <div class="satisfaction-survey">
                                <div class="satisfaction-options">
                                    {for SATISFACTION_LEVELS.iter().map(|(value, emoji, label)| {
                                        let value = *value;
                                        let satisfaction = satisfaction.clone();
                                        let class = if *satisfaction == Some(value) {
                                            "satisfaction-option selected"
                                        } else {
                                            "satisfaction-option"
                                        };
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            satisfaction.set(Some(value));
                                        });
                                        html! {
                                            <button {class} {onclick}>
                                                <span class="satisfaction-emoji">{*emoji}</span>
                                                <span class="satisfaction-label">{*label}</span>
                                            </button>
                                        }
                                    })}
                                </div>

                                {if let Some((_, label)) = selected_label {
                                    html! {
                                        <div class="satisfaction-confirm">
                                            <p>{format!("You selected: {}", label)}</p>
                                            <button class="btn btn-primary" onclick={submit_survey}>
                                                {"Submit Feedback"}
                                            </button>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                        }
                    } else {
                        html! {
                            <div class="satisfaction-thanks">
                                <div class="satisfaction-emoji-large">
                                    {selected_label.map(|(emoji, _)| emoji).unwrap_or("😊")}
                                </div>
                                <p>{"Thank you for your feedback!"}</p>
                                <p class="satisfaction-note">
                                    {"Your opinion helps us improve budget allocation and utilization."}
                                </p>
                            </div>
                        }
                    }}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Department-wise Allocation"}</h3>
                </div>
                <div class="card-body budget-category-list">
                    {for categories.iter().map(|category| {
                        let utilization = category.utilization();
                        html! {
                            <div class="budget-category">
                                <div class="budget-category-head">
                                    <h4>{category.name}</h4>
                                    <span class={budget_status_class(category.status)}>
                                        {category.status.label()}
                                    </span>
                                </div>

                                <div class="budget-category-grid">
                                    <div>
                                        <p class="cell-label">{"Allocated"}</p>
                                        <p class="cell-value">{format_inr(category.allocated)}</p>
                                    </div>
                                    <div>
                                        <p class="cell-label">{"Spent"}</p>
                                        <p class="cell-value">{format_inr(category.spent)}</p>
                                    </div>
                                    <div>
                                        <p class="cell-label">{"Projects"}</p>
                                        <p class="cell-value">{category.projects}</p>
                                    </div>
                                </div>

                                <div class="bar-block">
                                    <div class="bar-caption">
                                        <span>{"Utilization"}</span>
                                        <span>{format!("{:.1}%", utilization)}</span>
                                    </div>
                                    <div class="bar-track">
                                        <div
                                            class={utilization_bar_class(utilization)}
                                            style={format!("width: {:.1}%;", utilization)}
                                        ></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Budget Proposals & Feedback"}</h3>
                </div>
                <div class="card-body budget-proposal-list">
                    {for proposals.iter().map(|proposal| {
                        let amount_class = if proposal.amount > 0 {
                            "budget-amount increase"
                        } else {
                            "budget-amount decrease"
                        };
                        let sign = if proposal.amount > 0 { "+" } else { "-" };
                        html! {
                            <div class="budget-proposal">
                                <h4>{proposal.title}</h4>
                                <p class="budget-proposal-description">{proposal.description}</p>

                                <div class="budget-proposal-tags">
                                    <span class={amount_class}>
                                        {format!("{}{}", sign, format_inr(proposal.amount.unsigned_abs()))}
                                    </span>
                                    <span class="badge badge-outline">{proposal.status}</span>
                                </div>

                                <div class="budget-proposal-footer">
                                    <span class="upvotes">{format!("👍 {}", proposal.support_votes)}</span>
                                    <span class="downvotes">{format!("👎 {}", proposal.oppose_votes)}</span>
                                    <button class="btn btn-sm btn-outline">{"Provide Feedback"}</button>
                                </div>
                            </div>
                        }
                    })}

                    <button class="btn btn-primary full-width">{"Submit Budget Suggestion"}</button>
                </div>
            </section>
        </div>
    }
}
