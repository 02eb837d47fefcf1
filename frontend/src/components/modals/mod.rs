pub mod calendar_modal;
pub mod create_townhall_modal;
pub mod discussion_detail_modal;
pub mod health_services_modal;
pub mod interest_modal;
pub mod notification_modal;
pub mod parking_services_modal;
pub mod post_office_modal;
pub mod proposal_detail_modal;
pub mod share_proposal_modal;
pub mod submit_proposal_modal;
pub mod survey_modal;
