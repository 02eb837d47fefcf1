use shared::Survey;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SurveyModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub survey: Option<Survey>,
}

/// Survey participation dialog: one vote per opening, then the results
/// view with an option to vote again.
#[function_component(SurveyModal)]
pub fn survey_modal(props: &SurveyModalProps) -> Html {
    let selected_option = use_state(|| Option::<&'static str>::None);
    let has_voted = use_state(|| false);

    // Transient state never leaks between openings.
    use_effect_with(props.is_open, {
        let selected_option = selected_option.clone();
        let has_voted = has_voted.clone();
        move |is_open| {
            if *is_open {
                selected_option.set(None);
                has_voted.set(false);
            }
            || ()
        }
    });

    let survey = match &props.survey {
        Some(survey) => survey,
        None => return html! {},
    };
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let vote_again = {
        let selected_option = selected_option.clone();
        let has_voted = has_voted.clone();
        Callback::from(move |_: MouseEvent| {
            selected_option.set(None);
            has_voted.set(false);
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal survey-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{survey.title}</h3>

                <div class="survey-info">
                    <span>{format!("{} responses", survey.responses)}</span>
                    <span>{survey.time_left}</span>
                </div>

                <p class="survey-description">{survey.description}</p>

                <div class="survey-question-block">
                    <h4>{survey.question}</h4>

                    {if !*has_voted {
                        html! {
                            <div class="survey-options">
                                {for survey.options.iter().map(|option| {
                                    let id = option.id;
                                    let selected_option = selected_option.clone();
                                    let has_voted = has_voted.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        if !*has_voted {
                                            selected_option.set(Some(id));
                                            has_voted.set(true);
                                        }
                                    });
                                    html! {
                                        <button class="btn btn-outline survey-option" {onclick}>
                                            {option.text}
                                        </button>
                                    }
                                })}
                            </div>
                        }
                    } else {
                        html! {
                            <div class="survey-results">
                                <p class="vote-recorded">{"Your vote has been recorded"}</p>

                                {for survey.options.iter().map(|option| {
                                    let percentage = survey.option_percentage(option.votes);
                                    let is_selected = *selected_option == Some(option.id);
                                    html! {
                                        <div class="survey-result-row">
                                            <div class="survey-result-head">
                                                <span>
                                                    {option.text}
                                                    {if is_selected {
                                                        html! {
                                                            <span class="badge badge-secondary">
                                                                {"Your choice"}
                                                            </span>
                                                        }
                                                    } else {
                                                        html! {}
                                                    }}
                                                </span>
                                                <span class="result-percentage">
                                                    {format!("{}%", percentage)}
                                                </span>
                                            </div>
                                            <div class="bar-track">
                                                <div
                                                    class="bar-fill primary"
                                                    style={format!("width: {}%;", percentage)}
                                                ></div>
                                            </div>
                                            <span class="result-votes">
                                                {format!("{} votes", option.votes)}
                                            </span>
                                        </div>
                                    }
                                })}

                                <p class="survey-total">
                                    {"Total participants: "}
                                    <strong>{survey.total_votes}</strong>
                                </p>
                            </div>
                        }
                    }}
                </div>

                <div class="modal-buttons">
                    <button class="btn btn-outline" onclick={on_close_click}>
                        {"Close"}
                    </button>
                    {if *has_voted {
                        html! {
                            <button class="btn btn-secondary" onclick={vote_again}>
                                {"Vote Again"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
