use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod fixtures;

/// Review status of a community proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 4] = [
        ProposalStatus::Pending,
        ProposalStatus::UnderReview,
        ProposalStatus::Approved,
        ProposalStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pending",
            ProposalStatus::UnderReview => "Under Review",
            ProposalStatus::Approved => "Approved",
            ProposalStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Topic a proposal belongs to. Also used for the submit form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Safety,
    Infrastructure,
    Environment,
    Water,
    Transport,
    Health,
    Education,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Safety,
        Category::Infrastructure,
        Category::Environment,
        Category::Water,
        Category::Transport,
        Category::Health,
        Category::Education,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Safety => "Safety",
            Category::Infrastructure => "Infrastructure",
            Category::Environment => "Environment",
            Category::Water => "Water",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Education => "Education",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A citizen-submitted proposal as shown on the proposals tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub status: ProposalStatus,
    pub location: &'static str,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: u32,
    pub submitted_by: &'static str,
    pub submitted_date: &'static str,
    pub has_image: bool,
    /// Set on proposals submitted by the signed-in citizen; the "Your
    /// Proposal" category filter matches this flag, not the category text.
    pub is_yours: bool,
}

impl Proposal {
    pub fn support_percentage(&self) -> u32 {
        support_percentage(self.upvotes, self.downvotes)
    }
}

/// Status filter row on the proposals tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(ProposalStatus),
}

impl StatusFilter {
    pub fn all() -> Vec<StatusFilter> {
        let mut filters = vec![StatusFilter::All];
        filters.extend(ProposalStatus::ALL.iter().map(|s| StatusFilter::Status(*s)));
        filters
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Status(s) => s.label(),
        }
    }
}

/// Category filter row. `Yours` is the special case that matches the
/// `is_yours` flag instead of the category field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Yours,
    Category(Category),
}

impl CategoryFilter {
    pub fn all() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All, CategoryFilter::Yours];
        filters.extend(
            [
                Category::Safety,
                Category::Infrastructure,
                Category::Environment,
                Category::Water,
                Category::Transport,
            ]
            .iter()
            .map(|c| CategoryFilter::Category(*c)),
        );
        filters
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Yours => "Your Proposal",
            CategoryFilter::Category(c) => c.label(),
        }
    }
}

/// Conjunction of the status and category filters, in fixture order.
pub fn filter_proposals(
    proposals: &[Proposal],
    status: StatusFilter,
    category: CategoryFilter,
) -> Vec<Proposal> {
    proposals
        .iter()
        .filter(|p| match status {
            StatusFilter::All => true,
            StatusFilter::Status(s) => p.status == s,
        })
        .filter(|p| match category {
            CategoryFilter::All => true,
            CategoryFilter::Yours => p.is_yours,
            CategoryFilter::Category(c) => p.category == c,
        })
        .cloned()
        .collect()
}

/// Rounded share of upvotes among all votes. Zero votes means no signal,
/// reported as 0 rather than NaN.
pub fn support_percentage(upvotes: u32, downvotes: u32) -> u32 {
    let total = upvotes + downvotes;
    if total == 0 {
        return 0;
    }
    ((upvotes as f64 / total as f64) * 100.0).round() as u32
}

/// Rounded share of `votes` in `total`; 0 when total is 0.
pub fn vote_percentage(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

/// Community sentiment split for a discussion. Percentages are fixture
/// data and are expected to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentiment {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

impl Sentiment {
    pub fn total(&self) -> u16 {
        self.positive as u16 + self.neutral as u16 + self.negative as u16
    }
}

/// An open town-hall discussion thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Discussion {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub comments: u32,
    pub upvotes: u32,
    pub sentiment: Sentiment,
    pub time_ago: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingKind {
    Virtual,
    InPerson,
    Hybrid,
}

impl MeetingKind {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingKind::Virtual => "Virtual",
            MeetingKind::InPerson => "In-person",
            MeetingKind::Hybrid => "Hybrid",
        }
    }
}

/// A scheduled town-hall meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub attendees: u32,
    pub organizer: &'static str,
    pub kind: MeetingKind,
    pub location: Option<&'static str>,
    pub distance: Option<&'static str>,
}

/// Calendar entry: one date with its meetings.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub meetings: Vec<Meeting>,
}

/// Meetings scheduled on `date`, empty when the date has none.
pub fn meetings_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<Meeting> {
    events
        .iter()
        .find(|e| e.date == date)
        .map(|e| e.meetings.clone())
        .unwrap_or_default()
}

/// Combines a calendar date with a "7:00 PM"-style meeting time.
pub fn meeting_datetime(date: NaiveDate, time: &str) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(time, "%I:%M %p").ok()?;
    Some(date.and_time(time))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyOption {
    pub id: &'static str,
    pub text: &'static str,
    pub votes: u32,
}

/// A live citizen survey with its running results.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub question: &'static str,
    pub options: Vec<SurveyOption>,
    pub total_votes: u32,
    pub responses: u32,
    pub time_left: &'static str,
}

impl Survey {
    pub fn option_percentage(&self, votes: u32) -> u32 {
        vote_percentage(votes, self.total_votes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    HighUsage,
    Delayed,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::HighUsage => "High Usage",
            BudgetStatus::Delayed => "Delayed",
        }
    }
}

/// One department's allocation for the budget year. Utilization is derived
/// rather than stored so the bar and the label can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCategory {
    pub name: &'static str,
    pub allocated: u64,
    pub spent: u64,
    pub projects: u32,
    pub status: BudgetStatus,
}

impl BudgetCategory {
    /// Spent share of the allocation in percent; 0.0 for an empty
    /// allocation. Display with one decimal.
    pub fn utilization(&self) -> f64 {
        utilization_percentage(self.spent, self.allocated)
    }
}

pub fn utilization_percentage(spent: u64, allocated: u64) -> f64 {
    if allocated == 0 {
        return 0.0;
    }
    (spent as f64 / allocated as f64) * 100.0
}

/// A citizen suggestion to change an allocation; `amount` is signed,
/// negative for proposed savings.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProposal {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: i64,
    pub support_votes: u32,
    pub oppose_votes: u32,
    pub status: &'static str,
}

/// Indian-rupee display shared by the budget and projects views:
/// crores above 1 Cr, lakhs above 1 L, thousands below.
pub fn format_inr(amount: u64) -> String {
    if amount >= 10_000_000 {
        format!("₹{:.1} Cr", amount as f64 / 10_000_000.0)
    } else if amount >= 100_000 {
        format!("₹{:.1} L", amount as f64 / 100_000.0)
    } else {
        format!("₹{:.0}K", amount as f64 / 1_000.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTier {
    Available,
    Limited,
}

impl ContactTier {
    pub fn label(&self) -> &'static str {
        match self {
            ContactTier::Available => "Available",
            ContactTier::Limited => "Limited",
        }
    }
}

/// An elected representative in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub party: &'static str,
    pub area: &'static str,
    pub contact: ContactTier,
    pub experience: &'static str,
    pub specializations: Vec<&'static str>,
    pub rating: f32,
    pub response_time: &'static str,
}

/// Case-insensitive match against name, position, or any specialization.
pub fn search_leaders(leaders: &[Leader], term: &str) -> Vec<Leader> {
    let term = term.to_lowercase();
    leaders
        .iter()
        .filter(|l| {
            l.name.to_lowercase().contains(&term)
                || l.position.to_lowercase().contains(&term)
                || l
                    .specializations
                    .iter()
                    .any(|s| s.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedCounts {
    pub available: u32,
    pub total: u32,
    pub icu: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorCounts {
    pub on_duty: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedService {
    pub name: &'static str,
    pub price: u32,
}

/// A hospital card in the health services modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
    pub name: &'static str,
    pub distance: &'static str,
    pub address: &'static str,
    pub contact: &'static str,
    pub beds: BedCounts,
    pub doctors: DoctorCounts,
    pub departments: Vec<&'static str>,
    pub wait_time: &'static str,
    pub services: Vec<PricedService>,
}

/// How tight bed availability is, by the share of free beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityTier {
    Ok,
    Tight,
    Critical,
}

pub fn bed_tier(available: u32, total: u32) -> AvailabilityTier {
    if total == 0 {
        return AvailabilityTier::Critical;
    }
    let pct = (available as f64 / total as f64) * 100.0;
    if pct > 20.0 {
        AvailabilityTier::Ok
    } else if pct > 10.0 {
        AvailabilityTier::Tight
    } else {
        AvailabilityTier::Critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkingStatus {
    Available,
    Limited,
    Full,
}

impl ParkingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ParkingStatus::Available => "Available",
            ParkingStatus::Limited => "Limited",
            ParkingStatus::Full => "Full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingPricing {
    pub two_wheeler: u32,
    pub four_wheeler: u32,
}

/// A parking lot card in the parking services modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingLocation {
    pub name: &'static str,
    pub status: ParkingStatus,
    pub spots: u32,
    pub total: u32,
    pub distance: &'static str,
    pub address: &'static str,
    pub pricing: ParkingPricing,
    pub hours: &'static str,
    pub features: Vec<&'static str>,
}

impl ParkingLocation {
    /// Share of spots taken, for the occupancy bar.
    pub fn occupancy_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        vote_percentage(self.total - self.spots.min(self.total), self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    Short,
    Moderate,
    Long,
    Closed,
}

impl QueueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Short => "Short Wait",
            QueueStatus::Moderate => "Moderate Wait",
            QueueStatus::Long => "Long Wait",
            QueueStatus::Closed => "Currently Closed",
        }
    }
}

/// A post office card in the postal services modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PostOffice {
    pub name: &'static str,
    pub area: &'static str,
    pub address: &'static str,
    pub distance: &'static str,
    pub open: bool,
    pub timing: &'static str,
    pub queue: QueueStatus,
    pub current_queue: u32,
    pub avg_wait_time: &'static str,
    pub services: Vec<&'static str>,
    pub contact: &'static str,
    pub postal_code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Meeting,
    Proposal,
    Infrastructure,
    Budget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time_ago: &'static str,
    pub unread: bool,
}

/// Map overlay layers on the home tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOverlay {
    Traffic,
    Health,
    Safety,
}

impl MapOverlay {
    pub const ALL: [MapOverlay; 3] =
        [MapOverlay::Traffic, MapOverlay::Health, MapOverlay::Safety];

    pub fn label(&self) -> &'static str {
        match self {
            MapOverlay::Traffic => "Traffic",
            MapOverlay::Health => "Health",
            MapOverlay::Safety => "Safety",
        }
    }
}

/// A marker pinned on the interactive map, positioned in percent of the
/// map's width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: u32,
    pub overlay: MapOverlay,
    pub x: u8,
    pub y: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn markers_for(markers: &[MapMarker], overlay: MapOverlay) -> Vec<MapMarker> {
    markers
        .iter()
        .filter(|m| m.overlay == overlay)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Reddit,
    Facebook,
}

impl SocialPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Reddit => "Reddit",
            SocialPlatform::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStats {
    pub platform: SocialPlatform,
    pub engagement: u32,
    pub trending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopPost {
    pub platform: SocialPlatform,
    pub text: &'static str,
    pub engagement: u32,
}

/// A topic trending across local social media, with per-platform numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTopic {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub positive: bool,
    pub platforms: Vec<PlatformStats>,
    pub total_engagement: u32,
    pub top_posts: Vec<TopPost>,
}

/// Snapshot numbers for the city dashboard header cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CityStats {
    pub aqi: u32,
    pub aqi_status: &'static str,
    pub traffic_level: &'static str,
    pub traffic_description: &'static str,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity: u32,
    pub monsoon_alert: Option<MonsoonAlert>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonsoonAlert {
    pub level: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyService {
    pub name: &'static str,
    pub kind: &'static str,
    pub distance: &'static str,
    pub contact: &'static str,
}

/// Which service modal a public-service row opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceId {
    Health,
    Parking,
    PostOffice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublicService {
    pub id: ServiceId,
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityProject {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub contractor: &'static str,
    pub duration: &'static str,
    pub completion: u32,
    pub start_date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSchedule {
    pub service: &'static str,
    pub next_date: &'static str,
    pub frequency: &'static str,
    pub area: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialHandle {
    pub platform: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentHandles {
    pub department: &'static str,
    pub handles: Vec<SocialHandle>,
}

/// A comment under a proposal or discussion detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct CivicComment {
    pub id: u32,
    pub author: &'static str,
    pub content: &'static str,
    pub time_ago: &'static str,
    pub upvotes: u32,
    pub official: bool,
}

/// The citizen's chosen interest topics, persisted as a JSON array of
/// strings under one browser-local storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSelection {
    selected: Vec<String>,
}

impl InterestSelection {
    pub const DEFAULTS: [&'static str; 2] = ["Safety", "Infrastructure"];

    pub fn with_defaults() -> Self {
        Self {
            selected: Self::DEFAULTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_selected(&self, interest: &str) -> bool {
        self.selected.iter().any(|i| i == interest)
    }

    /// Adds the interest when absent, removes it when present.
    pub fn toggle(&mut self, interest: &str) {
        if let Some(pos) = self.selected.iter().position(|i| i == interest) {
            self.selected.remove(pos);
        } else {
            self.selected.push(interest.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.selected).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Vec<String>>(json)
            .ok()
            .map(|selected| Self { selected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_percentage_rounds() {
        // 234 / 246 = 95.12% -> 95
        assert_eq!(support_percentage(234, 12), 95);
        assert_eq!(support_percentage(189, 8), 96);
        assert_eq!(support_percentage(0, 10), 0);
        assert_eq!(support_percentage(10, 0), 100);
    }

    #[test]
    fn support_percentage_with_no_votes_is_zero() {
        assert_eq!(support_percentage(0, 0), 0);
    }

    #[test]
    fn vote_percentage_with_zero_total_is_zero() {
        assert_eq!(vote_percentage(5, 0), 0);
        assert_eq!(vote_percentage(156, 342), 46);
    }

    #[test]
    fn utilization_matches_budget_overview() {
        let infra = BudgetCategory {
            name: "Infrastructure Development",
            allocated: 15_000_000,
            spent: 8_500_000,
            projects: 12,
            status: BudgetStatus::OnTrack,
        };
        assert_eq!(format!("{:.1}", infra.utilization()), "56.7");
    }

    #[test]
    fn utilization_with_empty_allocation_is_zero() {
        assert_eq!(utilization_percentage(1_000, 0), 0.0);
    }

    #[test]
    fn inr_formatting_covers_all_magnitudes() {
        assert_eq!(format_inr(120_000_000), "₹12.0 Cr");
        assert_eq!(format_inr(15_000_000), "₹1.5 Cr");
        assert_eq!(format_inr(250_000), "₹2.5 L");
        assert_eq!(format_inr(20_000), "₹20K");
    }

    #[test]
    fn filter_matches_conjunction_of_status_and_category() {
        let proposals = fixtures::proposals();

        for status in StatusFilter::all() {
            for category in CategoryFilter::all() {
                let filtered = filter_proposals(&proposals, status, category);
                let expected: Vec<Proposal> = proposals
                    .iter()
                    .filter(|p| match status {
                        StatusFilter::All => true,
                        StatusFilter::Status(s) => p.status == s,
                    })
                    .filter(|p| match category {
                        CategoryFilter::All => true,
                        CategoryFilter::Yours => p.is_yours,
                        CategoryFilter::Category(c) => p.category == c,
                    })
                    .cloned()
                    .collect();
                assert_eq!(filtered, expected);
            }
        }
    }

    #[test]
    fn yours_filter_matches_flag_not_category_text() {
        let proposals = fixtures::proposals();
        let yours = filter_proposals(&proposals, StatusFilter::All, CategoryFilter::Yours);
        assert!(!yours.is_empty());
        assert!(yours.iter().all(|p| p.is_yours));
        // The flagged proposal keeps its real category; the filter must not
        // depend on any "Your Proposal" category literal.
        assert!(yours.iter().any(|p| p.category == Category::Infrastructure));

        let infra = filter_proposals(
            &proposals,
            StatusFilter::All,
            CategoryFilter::Category(Category::Infrastructure),
        );
        assert!(infra.iter().any(|p| !p.is_yours));
    }

    #[test]
    fn filter_preserves_fixture_order() {
        let proposals = fixtures::proposals();
        let all = filter_proposals(&proposals, StatusFilter::All, CategoryFilter::All);
        assert_eq!(all, proposals);
    }

    #[test]
    fn interest_toggle_adds_and_removes() {
        let mut selection = InterestSelection::with_defaults();
        assert!(selection.is_selected("Safety"));
        assert!(!selection.is_selected("Parks"));

        selection.toggle("Parks");
        assert!(selection.is_selected("Parks"));
        assert_eq!(selection.len(), 3);

        selection.toggle("Safety");
        assert!(!selection.is_selected("Safety"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn interest_selection_round_trips_through_json() {
        let mut selection = InterestSelection::with_defaults();
        selection.toggle("Health");
        selection.toggle("Infrastructure");

        let restored = InterestSelection::from_json(&selection.to_json()).unwrap();
        assert_eq!(restored.len(), 2);
        assert!(restored.is_selected("Safety"));
        assert!(restored.is_selected("Health"));
        assert!(!restored.is_selected("Infrastructure"));
    }

    #[test]
    fn from_json_rejects_malformed_payloads() {
        assert!(InterestSelection::from_json("not json").is_none());
        assert!(InterestSelection::from_json("{\"a\":1}").is_none());
        assert_eq!(InterestSelection::from_json("[]").unwrap().len(), 0);
    }

    #[test]
    fn leader_search_is_case_insensitive_across_fields() {
        let leaders = fixtures::leaders();
        assert_eq!(search_leaders(&leaders, "mayor").len(), 2);
        assert_eq!(search_leaders(&leaders, "RAJESH").len(), 1);
        let by_spec = search_leaders(&leaders, "water supply");
        assert!(by_spec.iter().any(|l| l.name == "Rajesh Kumar"));
        assert_eq!(search_leaders(&leaders, "").len(), leaders.len());
    }

    #[test]
    fn meeting_datetime_parses_twelve_hour_times() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let dt = meeting_datetime(date, "7:00 PM").unwrap();
        assert_eq!(dt.format("%Y%m%dT%H%M%S").to_string(), "20241215T190000");
        assert!(meeting_datetime(date, "25:00").is_none());
    }

    #[test]
    fn meetings_on_returns_only_that_dates_meetings() {
        let events = fixtures::calendar_events();
        let date = NaiveDate::from_ymd_opt(2024, 12, 18).unwrap();
        let meetings = meetings_on(&events, date);
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].title, "Traffic Management Solutions");

        let empty = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert!(meetings_on(&events, empty).is_empty());
    }

    #[test]
    fn bed_tier_thresholds() {
        assert_eq!(bed_tier(23, 100), AvailabilityTier::Ok);
        assert_eq!(bed_tier(15, 100), AvailabilityTier::Tight);
        assert_eq!(bed_tier(8, 350), AvailabilityTier::Critical);
        assert_eq!(bed_tier(0, 0), AvailabilityTier::Critical);
    }

    #[test]
    fn parking_occupancy_is_taken_share() {
        let lot = &fixtures::parking_locations()[0];
        assert_eq!(lot.spots, 15);
        assert_eq!(lot.total, 300);
        assert_eq!(lot.occupancy_percentage(), 95);

        let degenerate = ParkingLocation {
            total: 0,
            ..lot.clone()
        };
        assert_eq!(degenerate.occupancy_percentage(), 0);
    }
}
