use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub on_enter: Callback<()>,
}

/// Static municipal-site entry page. Its only live control is the call to
/// action that opens the citizen portal.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let on_enter = {
        let cb = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="landing">
            <header class="landing-header">
                <div class="landing-topbar">
                    <span>{"Help"}</span>
                    <span>{"Contact"}</span>
                    <span class="landing-org">{"The Brihanmumbai Municipal Corporation (BMC)"}</span>
                </div>
                <div class="landing-masthead">
                    <div class="landing-logo" aria-hidden="true">{"🏛"}</div>
                    <div class="landing-name">
                        <p>{"बृहन्मुंबई महानगरपालिका"}</p>
                        <p class="landing-name-en">{"Brihanmumbai Municipal Corporation"}</p>
                    </div>
                </div>
            </header>

            <main class="landing-main">
                <section class="landing-hero">
                    <h2>{"Your city, your voice"}</h2>
                    <p>
                        {"Raise proposals, join town halls, follow the ward budget, and reach \
                          your representatives from one place."}
                    </p>
                    <button class="btn btn-primary landing-cta" onclick={on_enter}>
                        {"Open Citizen Engagement Services"}
                    </button>
                </section>
            </main>
        </div>
    }
}
