pub mod budget;
pub mod home;
pub mod leaders;
pub mod proposals;
pub mod townhall;
pub mod your_city;

pub use budget::BudgetTab;
pub use home::HomeTab;
pub use leaders::LeadersTab;
pub use proposals::ProposalsTab;
pub use townhall::TownhallTab;
pub use your_city::YourCityTab;
