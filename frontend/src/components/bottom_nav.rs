use yew::prelude::*;

/// The six mutually exclusive top-level content views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Townhall,
    Proposals,
    Budget,
    Leaders,
    City,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Townhall,
        Tab::Proposals,
        Tab::Budget,
        Tab::Leaders,
        Tab::City,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Townhall => "townhall",
            Tab::Proposals => "proposals",
            Tab::Budget => "budget",
            Tab::Leaders => "leaders",
            Tab::City => "city",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Townhall => "Townhall",
            Tab::Proposals => "Proposals",
            Tab::Budget => "Budget",
            Tab::Leaders => "Leaders",
            Tab::City => "Your City",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BottomNavigationProps {
    pub active: Tab,
    pub on_change: Callback<Tab>,
}

#[function_component(BottomNavigation)]
pub fn bottom_navigation(props: &BottomNavigationProps) -> Html {
    html! {
        <nav class="bottom-nav">
            {for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let on_change = props.on_change.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_change.emit(tab));
                let class = if props.active == tab {
                    "bottom-nav-item active"
                } else {
                    "bottom-nav-item"
                };
                html! {
                    <button {class} {onclick} data-tab={tab.id()}>
                        {tab.label()}
                    </button>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_are_unique() {
        let ids: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        assert_eq!(ids, vec!["home", "townhall", "proposals", "budget", "leaders", "city"]);
    }
}
