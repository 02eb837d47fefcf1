//! Static sample records standing in for a real data source. Every list the
//! portal renders comes from here; nothing mutates these at runtime.

use crate::*;
use chrono::NaiveDate;

pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: 1,
            title: "Speed Bumps Near Schools",
            description:
                "Install speed bumps on Main Road near Government School to ensure child safety",
            category: Category::Safety,
            status: ProposalStatus::UnderReview,
            location: "Main Road, Ward 12",
            upvotes: 234,
            downvotes: 12,
            comments: 45,
            submitted_by: "Local Parent Group",
            submitted_date: "2024-12-10",
            has_image: true,
            is_yours: false,
        },
        Proposal {
            id: 2,
            title: "Community Park Development",
            description:
                "Convert vacant lot into community park with playground and walking path",
            category: Category::Environment,
            status: ProposalStatus::Approved,
            location: "Sector 15, Plot 23",
            upvotes: 189,
            downvotes: 8,
            comments: 67,
            submitted_by: "Residents Association",
            submitted_date: "2024-12-08",
            has_image: false,
            is_yours: false,
        },
        Proposal {
            id: 3,
            title: "Better Street Lighting",
            description:
                "Upgrade street lighting along the commercial area for better visibility",
            category: Category::Infrastructure,
            status: ProposalStatus::Pending,
            location: "Commercial Street",
            upvotes: 156,
            downvotes: 23,
            comments: 34,
            submitted_by: "Shop Owners Association",
            submitted_date: "2024-12-05",
            has_image: true,
            is_yours: false,
        },
        Proposal {
            id: 4,
            title: "Public WiFi Hotspots in Parks",
            description:
                "Install free public WiFi access points in all major parks to promote digital connectivity",
            category: Category::Infrastructure,
            status: ProposalStatus::UnderReview,
            location: "City Parks, Various Locations",
            upvotes: 87,
            downvotes: 5,
            comments: 12,
            submitted_by: "You",
            submitted_date: "2024-12-12",
            has_image: false,
            is_yours: true,
        },
    ]
}

pub fn discussions() -> Vec<Discussion> {
    vec![
        Discussion {
            id: 1,
            title: "Parking Issues Near Metro Station",
            author: "Anonymous Citizen",
            comments: 34,
            upvotes: 89,
            sentiment: Sentiment {
                positive: 45,
                neutral: 30,
                negative: 25,
            },
            time_ago: "2h ago",
            description:
                "The parking situation near the metro station has become increasingly problematic. \
                 With the recent increase in ridership and new developments in the area, finding \
                 parking has become nearly impossible during peak hours. Citizens are requesting \
                 immediate action to address this issue.",
        },
        Discussion {
            id: 2,
            title: "Need for Better Street Lighting",
            author: "Local Resident",
            comments: 28,
            upvotes: 67,
            sentiment: Sentiment {
                positive: 78,
                neutral: 15,
                negative: 7,
            },
            time_ago: "5h ago",
            description:
                "Several areas in our ward lack adequate street lighting, creating safety concerns \
                 for residents walking home after dark.",
        },
        Discussion {
            id: 3,
            title: "Waste Collection Schedule Changes",
            author: "Ward Committee",
            comments: 52,
            upvotes: 156,
            sentiment: Sentiment {
                positive: 34,
                neutral: 40,
                negative: 26,
            },
            time_ago: "1d ago",
            description:
                "Proposed changes to the waste collection schedule to improve efficiency across \
                 the ward's residential sectors.",
        },
    ]
}

pub fn meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: 1,
            title: "Ward 15 Development Discussion",
            date: "Dec 15, 2024",
            time: "7:00 PM",
            attendees: 23,
            organizer: "Councillor Office",
            kind: MeetingKind::Virtual,
            location: None,
            distance: None,
        },
        Meeting {
            id: 2,
            title: "Traffic Management Solutions",
            date: "Dec 18, 2024",
            time: "6:30 PM",
            attendees: 45,
            organizer: "Citizens Initiative",
            kind: MeetingKind::InPerson,
            location: Some("Civic Center, Downtown"),
            distance: Some("2.3 km"),
        },
        Meeting {
            id: 3,
            title: "Community Safety Forum",
            date: "Dec 20, 2024",
            time: "5:30 PM",
            attendees: 38,
            organizer: "Ward Committee",
            kind: MeetingKind::InPerson,
            location: Some("Community Hall, Sector 15"),
            distance: Some("1.8 km"),
        },
    ]
}

pub fn calendar_events() -> Vec<CalendarEvent> {
    let meets = meetings();
    vec![
        CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid fixture date"),
            meetings: vec![meets[0].clone()],
        },
        CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 12, 18).expect("valid fixture date"),
            meetings: vec![meets[1].clone()],
        },
        CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 12, 22).expect("valid fixture date"),
            meetings: vec![Meeting {
                id: 4,
                title: "Budget Planning Session",
                date: "Dec 22, 2024",
                time: "5:00 PM",
                attendees: 67,
                organizer: "Councillor Office",
                kind: MeetingKind::Hybrid,
                location: Some("Civic Center"),
                distance: None,
            }],
        },
    ]
}

pub fn surveys() -> Vec<Survey> {
    vec![
        Survey {
            id: 1,
            title: "Street Lighting Improvement Survey",
            description: "Help us prioritize street lighting improvements in your area",
            question: "Which areas need the most urgent street lighting improvements?",
            options: vec![
                SurveyOption {
                    id: "residential",
                    text: "Residential streets and colonies",
                    votes: 156,
                },
                SurveyOption {
                    id: "main-roads",
                    text: "Main roads and intersections",
                    votes: 98,
                },
                SurveyOption {
                    id: "parks",
                    text: "Parks and recreational areas",
                    votes: 67,
                },
                SurveyOption {
                    id: "commercial",
                    text: "Commercial and market areas",
                    votes: 21,
                },
            ],
            total_votes: 342,
            responses: 342,
            time_left: "5 days left",
        },
        Survey {
            id: 2,
            title: "Public Transport Route Feedback",
            description: "Share your thoughts on proposed bus route changes",
            question: "How do you feel about the proposed new bus route connecting Metro stations?",
            options: vec![
                SurveyOption {
                    id: "strongly-support",
                    text: "Strongly support - Much needed",
                    votes: 89,
                },
                SurveyOption {
                    id: "support",
                    text: "Support with minor modifications",
                    votes: 45,
                },
                SurveyOption {
                    id: "neutral",
                    text: "Neutral - No strong opinion",
                    votes: 15,
                },
                SurveyOption {
                    id: "oppose",
                    text: "Oppose - Will increase traffic",
                    votes: 7,
                },
            ],
            total_votes: 156,
            responses: 156,
            time_left: "12 days left",
        },
    ]
}

pub fn budget_categories() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory {
            name: "Infrastructure Development",
            allocated: 15_000_000,
            spent: 8_500_000,
            projects: 12,
            status: BudgetStatus::OnTrack,
        },
        BudgetCategory {
            name: "Water Supply & Sanitation",
            allocated: 8_500_000,
            spent: 7_200_000,
            projects: 8,
            status: BudgetStatus::HighUsage,
        },
        BudgetCategory {
            name: "Road Maintenance",
            allocated: 6_200_000,
            spent: 2_100_000,
            projects: 15,
            status: BudgetStatus::Delayed,
        },
        BudgetCategory {
            name: "Public Safety",
            allocated: 4_500_000,
            spent: 3_200_000,
            projects: 6,
            status: BudgetStatus::OnTrack,
        },
        BudgetCategory {
            name: "Parks & Recreation",
            allocated: 3_800_000,
            spent: 1_900_000,
            projects: 9,
            status: BudgetStatus::OnTrack,
        },
    ]
}

pub fn budget_proposals() -> Vec<BudgetProposal> {
    vec![
        BudgetProposal {
            id: 1,
            title: "Increase Street Lighting Budget",
            description: "Allocate additional ₹2.5 lakhs for LED street light installation",
            amount: 250_000,
            support_votes: 145,
            oppose_votes: 23,
            status: "Under Review",
        },
        BudgetProposal {
            id: 2,
            title: "Reduce Parks Maintenance Cost",
            description: "Optimize park maintenance by 15% through community participation",
            amount: -570_000,
            support_votes: 89,
            oppose_votes: 67,
            status: "Active Discussion",
        },
    ]
}

pub fn leaders() -> Vec<Leader> {
    vec![
        Leader {
            id: 1,
            name: "Rajesh Kumar",
            position: "Ward Councillor - 12",
            party: "Independent",
            area: "Sector 15-18",
            contact: ContactTier::Available,
            experience: "2 terms",
            specializations: vec!["Infrastructure", "Water Supply"],
            rating: 4.2,
            response_time: "2-3 hours",
        },
        Leader {
            id: 2,
            name: "Priya Sharma",
            position: "Mayor",
            party: "AAP",
            area: "City-wide",
            contact: ContactTier::Available,
            experience: "1 term",
            specializations: vec!["Education", "Women Safety", "Environment"],
            rating: 4.7,
            response_time: "24 hours",
        },
        Leader {
            id: 3,
            name: "Mohammad Aslam",
            position: "Deputy Mayor",
            party: "Congress",
            area: "City-wide",
            contact: ContactTier::Limited,
            experience: "3 terms",
            specializations: vec!["Budget", "Development"],
            rating: 3.9,
            response_time: "2-4 days",
        },
        Leader {
            id: 4,
            name: "Sunita Devi",
            position: "Ward Councillor - 15",
            party: "BJP",
            area: "Sector 12-14",
            contact: ContactTier::Available,
            experience: "1 term",
            specializations: vec!["Health", "Sanitation"],
            rating: 4.1,
            response_time: "1-2 hours",
        },
    ]
}

pub fn hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            name: "KEM Hospital",
            distance: "2.1 km",
            address: "Acharya Donde Marg, Parel, Mumbai",
            contact: "+91-22-2413-6051",
            beds: BedCounts {
                available: 23,
                total: 1800,
                icu: 5,
            },
            doctors: DoctorCounts {
                on_duty: 45,
                total: 312,
            },
            departments: vec![
                "Emergency",
                "Cardiology",
                "Neurology",
                "Orthopedics",
                "Pediatrics",
                "ICU",
            ],
            wait_time: "45 mins",
            services: vec![
                PricedService {
                    name: "General Consultation",
                    price: 100,
                },
                PricedService {
                    name: "Emergency Services",
                    price: 500,
                },
                PricedService {
                    name: "X-Ray",
                    price: 250,
                },
                PricedService {
                    name: "Blood Test",
                    price: 150,
                },
                PricedService {
                    name: "ICU (per day)",
                    price: 5000,
                },
            ],
        },
        Hospital {
            name: "Lilavati Hospital",
            distance: "3.5 km",
            address: "A-791, Bandra Reclamation, Mumbai",
            contact: "+91-22-2640-5000",
            beds: BedCounts {
                available: 8,
                total: 350,
                icu: 2,
            },
            doctors: DoctorCounts {
                on_duty: 28,
                total: 185,
            },
            departments: vec![
                "Emergency",
                "Cardiology",
                "Oncology",
                "Gastroenterology",
                "ICU",
            ],
            wait_time: "60 mins",
            services: vec![
                PricedService {
                    name: "General Consultation",
                    price: 500,
                },
                PricedService {
                    name: "Emergency Services",
                    price: 1500,
                },
                PricedService {
                    name: "X-Ray",
                    price: 800,
                },
                PricedService {
                    name: "Blood Test",
                    price: 400,
                },
                PricedService {
                    name: "ICU (per day)",
                    price: 15000,
                },
            ],
        },
        Hospital {
            name: "Sion Hospital",
            distance: "5.2 km",
            address: "Sion, Mumbai",
            contact: "+91-22-2409-6321",
            beds: BedCounts {
                available: 45,
                total: 1500,
                icu: 12,
            },
            doctors: DoctorCounts {
                on_duty: 52,
                total: 280,
            },
            departments: vec![
                "Emergency",
                "General Medicine",
                "Surgery",
                "Maternity",
                "Pediatrics",
            ],
            wait_time: "30 mins",
            services: vec![
                PricedService {
                    name: "General Consultation",
                    price: 50,
                },
                PricedService {
                    name: "Emergency Services",
                    price: 200,
                },
                PricedService {
                    name: "X-Ray",
                    price: 150,
                },
                PricedService {
                    name: "Blood Test",
                    price: 100,
                },
                PricedService {
                    name: "ICU (per day)",
                    price: 3000,
                },
            ],
        },
    ]
}

pub fn parking_locations() -> Vec<ParkingLocation> {
    vec![
        ParkingLocation {
            name: "Bandra Kurla Complex",
            status: ParkingStatus::Limited,
            spots: 15,
            total: 300,
            distance: "2.1 km",
            address: "BKC, Bandra East, Mumbai",
            pricing: ParkingPricing {
                two_wheeler: 20,
                four_wheeler: 50,
            },
            hours: "24/7",
            features: vec!["CCTV Surveillance", "Covered Parking", "EV Charging"],
        },
        ParkingLocation {
            name: "Linking Road Market",
            status: ParkingStatus::Full,
            spots: 0,
            total: 120,
            distance: "1.2 km",
            address: "Linking Road, Bandra West, Mumbai",
            pricing: ParkingPricing {
                two_wheeler: 15,
                four_wheeler: 40,
            },
            hours: "6 AM - 11 PM",
            features: vec!["Street Parking", "Paid Parking"],
        },
        ParkingLocation {
            name: "Bandstand Promenade",
            status: ParkingStatus::Available,
            spots: 28,
            total: 85,
            distance: "0.8 km",
            address: "Bandstand, Bandra West, Mumbai",
            pricing: ParkingPricing {
                two_wheeler: 10,
                four_wheeler: 30,
            },
            hours: "24/7",
            features: vec!["Near Beach", "CCTV", "Well Lit"],
        },
        ParkingLocation {
            name: "Phoenix Marketcity Mall",
            status: ParkingStatus::Available,
            spots: 125,
            total: 500,
            distance: "3.5 km",
            address: "LBS Marg, Kurla West, Mumbai",
            pricing: ParkingPricing {
                two_wheeler: 30,
                four_wheeler: 60,
            },
            hours: "11 AM - 11 PM",
            features: vec!["Mall Parking", "Valet Available", "EV Charging", "Covered"],
        },
        ParkingLocation {
            name: "Dharavi T-Junction",
            status: ParkingStatus::Available,
            spots: 42,
            total: 100,
            distance: "4.2 km",
            address: "90 Feet Road, Dharavi, Mumbai",
            pricing: ParkingPricing {
                two_wheeler: 10,
                four_wheeler: 25,
            },
            hours: "24/7",
            features: vec!["Multi-level Parking", "Security Guard"],
        },
    ]
}

pub fn post_offices() -> Vec<PostOffice> {
    vec![
        PostOffice {
            name: "Bandra Head Post Office",
            area: "Bandra West",
            address: "Hill Road, Bandra West, Mumbai - 400050",
            distance: "0.8 km",
            open: true,
            timing: "9:00 AM - 7:00 PM",
            queue: QueueStatus::Short,
            current_queue: 8,
            avg_wait_time: "15 mins",
            services: vec![
                "Speed Post",
                "Registered Post",
                "Passport Services",
                "Money Order",
                "Postal Savings",
                "Parcel Booking",
            ],
            contact: "+91-22-2640-5522",
            postal_code: "400050",
        },
        PostOffice {
            name: "Khar Post Office",
            area: "Khar West",
            address: "Linking Road, Khar West, Mumbai - 400052",
            distance: "1.2 km",
            open: true,
            timing: "9:00 AM - 6:00 PM",
            queue: QueueStatus::Moderate,
            current_queue: 15,
            avg_wait_time: "25 mins",
            services: vec![
                "Speed Post",
                "Registered Post",
                "Money Order",
                "Postal Savings",
                "Parcel Booking",
            ],
            contact: "+91-22-2648-7733",
            postal_code: "400052",
        },
        PostOffice {
            name: "Dharavi Post Office",
            area: "Dharavi",
            address: "90 Feet Road, Dharavi, Mumbai - 400017",
            distance: "3.5 km",
            open: true,
            timing: "10:00 AM - 5:00 PM",
            queue: QueueStatus::Long,
            current_queue: 22,
            avg_wait_time: "40 mins",
            services: vec!["Speed Post", "Registered Post", "Money Order", "Parcel Booking"],
            contact: "+91-22-2400-5544",
            postal_code: "400017",
        },
        PostOffice {
            name: "Kurla Post Office",
            area: "Kurla West",
            address: "LBS Marg, Kurla West, Mumbai - 400070",
            distance: "4.2 km",
            open: true,
            timing: "9:00 AM - 6:00 PM",
            queue: QueueStatus::Moderate,
            current_queue: 12,
            avg_wait_time: "20 mins",
            services: vec![
                "Speed Post",
                "Registered Post",
                "Passport Services",
                "Money Order",
                "Postal Savings",
                "Parcel Booking",
            ],
            contact: "+91-22-2500-8899",
            postal_code: "400070",
        },
        PostOffice {
            name: "Parel Post Office",
            area: "Parel",
            address: "Dr. Ambedkar Road, Parel, Mumbai - 400012",
            distance: "5.1 km",
            open: false,
            timing: "9:00 AM - 6:00 PM",
            queue: QueueStatus::Closed,
            current_queue: 0,
            avg_wait_time: "N/A",
            services: vec!["Speed Post", "Registered Post", "Money Order", "Parcel Booking"],
            contact: "+91-22-2413-7788",
            postal_code: "400012",
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Meeting,
            title: "Townhall Meeting Tomorrow",
            message: "Ward 15 Development Discussion at 7:00 PM",
            time_ago: "2h ago",
            unread: true,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Proposal,
            title: "New Proposal in Your Area",
            message: "Speed bumps proposed for School Road - Your input needed",
            time_ago: "5h ago",
            unread: true,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Infrastructure,
            title: "Water Supply Maintenance",
            message: "Scheduled maintenance on Dec 18, 6AM-2PM in Sector 12",
            time_ago: "1d ago",
            unread: false,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Budget,
            title: "Budget Proposal Update",
            message: "Street lighting improvement proposal has been approved",
            time_ago: "2d ago",
            unread: false,
        },
    ]
}

pub fn map_markers() -> Vec<MapMarker> {
    vec![
        MapMarker {
            id: 1,
            overlay: MapOverlay::Traffic,
            x: 25,
            y: 35,
            title: "Waterlogged Area - SV Road",
            description:
                "Heavy waterlogging reported on SV Road near Andheri station. Traffic diverted \
                 via Link Road. BMC pumps deployed.",
        },
        MapMarker {
            id: 2,
            overlay: MapOverlay::Traffic,
            x: 65,
            y: 60,
            title: "Eastern Express Highway Clear",
            description:
                "Traffic moving smoothly on EEH. Alternative route for Western Express Highway \
                 commuters during peak hours.",
        },
        MapMarker {
            id: 3,
            overlay: MapOverlay::Traffic,
            x: 80,
            y: 25,
            title: "Sion-Panvel Highway Closure",
            description:
                "Temporary closure due to flooding under railway bridge. Diversion via \
                 Kurla-Chembur route. Expected clearance: 2 hours.",
        },
        MapMarker {
            id: 4,
            overlay: MapOverlay::Traffic,
            x: 45,
            y: 75,
            title: "Heavy Rain Alert - Bandra-Kurla",
            description:
                "BMC advisory: Heavy rainfall in BKC area. Avoid basement parking. Stay updated \
                 with weather alerts.",
        },
        MapMarker {
            id: 5,
            overlay: MapOverlay::Health,
            x: 35,
            y: 45,
            title: "KEM Hospital",
            description:
                "Multi-specialty hospital with 24/7 emergency services. Flood emergency care \
                 available. Contact: +91-22-2413-6051",
        },
        MapMarker {
            id: 6,
            overlay: MapOverlay::Health,
            x: 70,
            y: 30,
            title: "Monsoon Health Camp",
            description:
                "Free health checkup for flood-affected residents this weekend at Bandra \
                 Community Center. Registration open.",
        },
        MapMarker {
            id: 7,
            overlay: MapOverlay::Health,
            x: 20,
            y: 65,
            title: "Sion Hospital Emergency Wing",
            description:
                "Dedicated emergency services for monsoon-related injuries and illnesses. 24/7 \
                 ambulance service available.",
        },
        MapMarker {
            id: 8,
            overlay: MapOverlay::Health,
            x: 55,
            y: 80,
            title: "Blood Donation Drive",
            description:
                "Emergency blood donation camp for flood relief operations. All blood types \
                 urgently needed at Lilavati Hospital.",
        },
        MapMarker {
            id: 9,
            overlay: MapOverlay::Safety,
            x: 30,
            y: 20,
            title: "Disaster Response Team",
            description:
                "Mumbai Fire Brigade disaster response team stationed for flood rescue \
                 operations. Emergency contact: 101",
        },
        MapMarker {
            id: 10,
            overlay: MapOverlay::Safety,
            x: 75,
            y: 55,
            title: "BMC Pumping Station",
            description:
                "Active water pumping operations to clear waterlogged areas. 24/7 monitoring \
                 during monsoon season.",
        },
        MapMarker {
            id: 11,
            overlay: MapOverlay::Safety,
            x: 40,
            y: 85,
            title: "Flood Relief Center",
            description:
                "Community relief center active with food, water, and temporary shelter for \
                 flood-affected families.",
        },
        MapMarker {
            id: 12,
            overlay: MapOverlay::Safety,
            x: 85,
            y: 40,
            title: "Emergency Control Room",
            description:
                "BMC disaster management control room operational. Report emergencies: 1916 \
                 (BMC Helpline)",
        },
    ]
}

pub fn trending_topics() -> Vec<TrendingTopic> {
    vec![
        TrendingTopic {
            id: 1,
            title: "Mumbai Monsoon Preparedness 2024: BMC Updates Flood Management Plan",
            category: "Disaster Management",
            positive: true,
            platforms: vec![
                PlatformStats {
                    platform: SocialPlatform::Twitter,
                    engagement: 156,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Instagram,
                    engagement: 78,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Reddit,
                    engagement: 89,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Facebook,
                    engagement: 67,
                    trending: false,
                },
            ],
            total_engagement: 390,
            top_posts: vec![
                TopPost {
                    platform: SocialPlatform::Twitter,
                    text: "BMC unveils new flood-resistant infrastructure for monsoon 2024 \
                           #MumbaiMonsoon #FloodPreparedness",
                    engagement: 287,
                },
                TopPost {
                    platform: SocialPlatform::Reddit,
                    text: "Comprehensive analysis: Mumbai's monsoon readiness vs previous years. \
                           Progress is encouraging!",
                    engagement: 198,
                },
            ],
        },
        TrendingTopic {
            id: 2,
            title: "Mithi River Cleaning Drive Shows Progress - Water Levels Monitored 24/7",
            category: "Environment",
            positive: true,
            platforms: vec![
                PlatformStats {
                    platform: SocialPlatform::Twitter,
                    engagement: 134,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Instagram,
                    engagement: 89,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Reddit,
                    engagement: 67,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Facebook,
                    engagement: 45,
                    trending: false,
                },
            ],
            total_engagement: 335,
            top_posts: vec![
                TopPost {
                    platform: SocialPlatform::Twitter,
                    text: "Mithi River cleaning making real difference! Water flow improved \
                           significantly #MithiRiver #MumbaiClean",
                    engagement: 234,
                },
                TopPost {
                    platform: SocialPlatform::Instagram,
                    text: "Before/after photos of Mithi River cleanup are incredible! Great work \
                           BMC",
                    engagement: 167,
                },
            ],
        },
        TrendingTopic {
            id: 3,
            title: "Waterlogging Alert: Real-time Updates from Hindmata, Sion, King Circle",
            category: "Weather Alert",
            positive: false,
            platforms: vec![
                PlatformStats {
                    platform: SocialPlatform::Twitter,
                    engagement: 289,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Instagram,
                    engagement: 45,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Reddit,
                    engagement: 123,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Facebook,
                    engagement: 78,
                    trending: false,
                },
            ],
            total_engagement: 535,
            top_posts: vec![
                TopPost {
                    platform: SocialPlatform::Twitter,
                    text: "Heavy waterlogging reported at King Circle & Sion. Avoid these routes! \
                           Alternative routes in thread",
                    engagement: 345,
                },
                TopPost {
                    platform: SocialPlatform::Reddit,
                    text: "Live thread: Mumbai waterlogging updates, traffic diversions, and \
                           emergency contact numbers",
                    engagement: 267,
                },
            ],
        },
        TrendingTopic {
            id: 4,
            title: "Mumbai Local Train Services Resume After Brief Suspension Due to Heavy Rain",
            category: "Transportation",
            positive: true,
            platforms: vec![
                PlatformStats {
                    platform: SocialPlatform::Twitter,
                    engagement: 198,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Instagram,
                    engagement: 34,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Reddit,
                    engagement: 156,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Facebook,
                    engagement: 56,
                    trending: false,
                },
            ],
            total_engagement: 444,
            top_posts: vec![
                TopPost {
                    platform: SocialPlatform::Twitter,
                    text: "Central & Western line services fully restored! Mumbai bounces back \
                           #MumbaiLocal #MonsoonUpdate",
                    engagement: 289,
                },
                TopPost {
                    platform: SocialPlatform::Reddit,
                    text: "Real-time train schedule updates and platform crowd status for monsoon \
                           commuters",
                    engagement: 201,
                },
            ],
        },
        TrendingTopic {
            id: 5,
            title: "Community Flood Relief Centers Activated Across Mumbai Suburbs",
            category: "Community Support",
            positive: true,
            platforms: vec![
                PlatformStats {
                    platform: SocialPlatform::Twitter,
                    engagement: 123,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Instagram,
                    engagement: 67,
                    trending: true,
                },
                PlatformStats {
                    platform: SocialPlatform::Reddit,
                    engagement: 89,
                    trending: false,
                },
                PlatformStats {
                    platform: SocialPlatform::Facebook,
                    engagement: 156,
                    trending: true,
                },
            ],
            total_engagement: 435,
            top_posts: vec![
                TopPost {
                    platform: SocialPlatform::Facebook,
                    text: "List of active relief centers in Andheri, Borivali, and Thane with \
                           contact details. Share to help others!",
                    engagement: 234,
                },
                TopPost {
                    platform: SocialPlatform::Instagram,
                    text: "Volunteers needed at flood relief centers. Every helping hand counts! \
                           #MumbaiCares",
                    engagement: 178,
                },
            ],
        },
    ]
}

pub fn city_stats() -> CityStats {
    CityStats {
        aqi: 178,
        aqi_status: "Unhealthy",
        traffic_level: "Heavy",
        traffic_description: "Peak hours: 7-11 AM, 6-10 PM",
        temperature_c: 32,
        feels_like_c: 39,
        humidity: 85,
        monsoon_alert: Some(MonsoonAlert {
            level: "Orange",
            message: "Heavy rainfall expected. Avoid waterlogged areas.",
        }),
    }
}

pub fn nearby_services() -> Vec<NearbyService> {
    vec![
        NearbyService {
            name: "KEM Hospital",
            kind: "Hospital",
            distance: "2.1 km",
            contact: "+91-22-2413-6051",
        },
        NearbyService {
            name: "Bandra Police Station",
            kind: "Police",
            distance: "1.5 km",
            contact: "100 / 112",
        },
        NearbyService {
            name: "Mumbai Fire Brigade - Bandra",
            kind: "Fire Station",
            distance: "1.8 km",
            contact: "101",
        },
        NearbyService {
            name: "BMC Ward Office H/E",
            kind: "Government",
            distance: "0.9 km",
            contact: "+91-22-2640-3511",
        },
    ]
}

pub fn public_services() -> Vec<PublicService> {
    vec![
        PublicService {
            id: ServiceId::Health,
            name: "Health Services",
            status: "Active",
            description: "23 beds available • 45 doctors on duty",
            stats: "Real-time availability across 3 hospitals",
        },
        PublicService {
            id: ServiceId::Parking,
            name: "Parking Information",
            status: "Limited",
            description: "43 spots available nearby",
            stats: "Live updates from 5 locations",
        },
        PublicService {
            id: ServiceId::PostOffice,
            name: "Post Office Services",
            status: "Open",
            description: "5 locations nearby • Short wait time",
            stats: "Real-time queue status and service availability",
        },
    ]
}

pub fn city_projects() -> Vec<CityProject> {
    vec![
        CityProject {
            id: 1,
            name: "Coastal Road Project",
            description:
                "Building flood-resilient coastal highway from Marine Drive to Kandivali",
            cost: 120_000_000,
            contractor: "Mumbai Metropolitan Development Authority",
            duration: "36 months",
            completion: 78,
            start_date: "Sep 2021",
        },
        CityProject {
            id: 2,
            name: "Mithi River Cleaning & Flood Prevention",
            description: "Comprehensive river cleaning and storm water management system",
            cost: 25_000_000,
            contractor: "BMC & State Govt",
            duration: "24 months",
            completion: 45,
            start_date: "Jun 2023",
        },
        CityProject {
            id: 3,
            name: "Metro Line 3 (Colaba-Bandra-SEEPZ)",
            description: "Underground metro line to reduce traffic congestion",
            cost: 280_000_000,
            contractor: "Mumbai Metro Rail Corporation Ltd",
            duration: "60 months",
            completion: 85,
            start_date: "Feb 2019",
        },
        CityProject {
            id: 4,
            name: "Smart Monsoon Management System",
            description: "IoT-based flood monitoring and early warning system",
            cost: 5_000_000,
            contractor: "Tata Consultancy Services",
            duration: "12 months",
            completion: 60,
            start_date: "Apr 2024",
        },
    ]
}

pub fn service_schedules() -> Vec<ServiceSchedule> {
    vec![
        ServiceSchedule {
            service: "Waste Collection",
            next_date: "Tomorrow, 5:30 AM",
            frequency: "Daily (except Sunday)",
            area: "Bandra West",
        },
        ServiceSchedule {
            service: "Water Supply",
            next_date: "Daily, 6:00 AM - 10:00 AM",
            frequency: "BMC regulated supply",
            area: "All Mumbai wards",
        },
        ServiceSchedule {
            service: "Monsoon Drain Cleaning",
            next_date: "Today, 3:00 PM - 6:00 PM",
            frequency: "Pre-monsoon & During monsoon",
            area: "Flood-prone areas",
        },
        ServiceSchedule {
            service: "Storm Water Pumping",
            next_date: "Active during rainfall",
            frequency: "Monsoon season",
            area: "Low-lying areas like Hindmata, King Circle",
        },
    ]
}

pub fn department_handles() -> Vec<DepartmentHandles> {
    vec![
        DepartmentHandles {
            department: "BMC (Brihanmumbai Municipal Corporation)",
            handles: vec![
                SocialHandle {
                    platform: "Twitter",
                    url: "https://twitter.com/mybmc",
                },
                SocialHandle {
                    platform: "Facebook",
                    url: "https://facebook.com/mybmcofficial",
                },
                SocialHandle {
                    platform: "Instagram",
                    url: "https://instagram.com/mybmcofficial",
                },
            ],
        },
        DepartmentHandles {
            department: "Mumbai Police",
            handles: vec![
                SocialHandle {
                    platform: "Twitter",
                    url: "https://twitter.com/MumbaiPolice",
                },
                SocialHandle {
                    platform: "Facebook",
                    url: "https://facebook.com/MumbaiPolice",
                },
            ],
        },
        DepartmentHandles {
            department: "Mumbai Fire Brigade",
            handles: vec![
                SocialHandle {
                    platform: "Twitter",
                    url: "https://twitter.com/MumbaiFire",
                },
                SocialHandle {
                    platform: "YouTube",
                    url: "https://youtube.com/MumbaiFireBrigade",
                },
            ],
        },
        DepartmentHandles {
            department: "Disaster Management (BMC)",
            handles: vec![
                SocialHandle {
                    platform: "Twitter",
                    url: "https://twitter.com/DisasterMgmtBMC",
                },
                SocialHandle {
                    platform: "Instagram",
                    url: "https://instagram.com/mumbaidisastermgmt",
                },
            ],
        },
    ]
}

pub fn proposal_citizen_comments() -> Vec<CivicComment> {
    vec![
        CivicComment {
            id: 1,
            author: "Sarah M.",
            content:
                "This is absolutely necessary! My kids walk to school daily and the traffic on \
                 Main Road is getting worse every day. Speed bumps would make such a difference.",
            time_ago: "2h ago",
            upvotes: 23,
            official: false,
        },
        CivicComment {
            id: 2,
            author: "Mike R.",
            content:
                "I support this proposal. As a driver, I've noticed many cars speeding through \
                 this area. Safety should be our top priority.",
            time_ago: "4h ago",
            upvotes: 15,
            official: false,
        },
        CivicComment {
            id: 3,
            author: "Local Teacher",
            content:
                "As someone who works at the school, I witness near-miss incidents almost daily. \
                 This proposal has my full support.",
            time_ago: "6h ago",
            upvotes: 31,
            official: false,
        },
    ]
}

pub fn proposal_official_comments() -> Vec<CivicComment> {
    vec![
        CivicComment {
            id: 1,
            author: "Councillor John Smith",
            content:
                "Thank you for bringing this important safety concern to our attention. We have \
                 reviewed the proposal and are coordinating with the traffic department for a \
                 site assessment. We expect to have preliminary results within 2 weeks.",
            time_ago: "1d ago",
            upvotes: 45,
            official: true,
        },
        CivicComment {
            id: 2,
            author: "Traffic Commissioner",
            content:
                "Initial assessment shows this location meets our criteria for traffic calming \
                 measures. Budget allocation discussions are underway for Q1 implementation.",
            time_ago: "3d ago",
            upvotes: 38,
            official: true,
        },
    ]
}

pub fn discussion_comments() -> Vec<CivicComment> {
    vec![
        CivicComment {
            id: 1,
            author: "Sarah M.",
            content:
                "I completely agree! The parking situation has gotten much worse since the new \
                 mall opened. We desperately need more parking spaces or better public transport \
                 options.",
            time_ago: "2h ago",
            upvotes: 23,
            official: false,
        },
        CivicComment {
            id: 2,
            author: "Mike R.",
            content:
                "Has anyone considered implementing a time-based parking system? This could help \
                 with the turnover and make spots available more frequently.",
            time_ago: "4h ago",
            upvotes: 15,
            official: false,
        },
        CivicComment {
            id: 3,
            author: "Local Business Owner",
            content:
                "As a business owner in the area, I've noticed many customers mention the parking \
                 issue. It's definitely affecting foot traffic to local shops.",
            time_ago: "6h ago",
            upvotes: 31,
            official: false,
        },
        CivicComment {
            id: 4,
            author: "City Planner",
            content:
                "Thank you all for the feedback. We're currently reviewing proposals for \
                 additional parking structures and improved bus routes to the metro station.",
            time_ago: "1d ago",
            upvotes: 45,
            official: true,
        },
    ]
}

/// Topics offered in the interest picker.
pub fn interest_topics() -> Vec<&'static str> {
    vec![
        "Safety",
        "Infrastructure",
        "Water Supply",
        "Traffic",
        "Environment",
        "Health",
        "Education",
        "Sanitation",
        "Parks",
        "Budget",
        "Transport",
        "Housing",
        "Technology",
        "Waste Management",
        "Street Lighting",
    ]
}

/// Languages the shell cycles through.
pub fn languages() -> Vec<&'static str> {
    vec!["English", "Hindi", "Punjabi", "Urdu"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discussion_sentiments_sum_to_one_hundred() {
        for discussion in discussions() {
            assert_eq!(
                discussion.sentiment.total(),
                100,
                "sentiment split for {:?}",
                discussion.title
            );
        }
    }

    #[test]
    fn survey_option_votes_sum_to_total() {
        for survey in surveys() {
            let sum: u32 = survey.options.iter().map(|o| o.votes).sum();
            assert_eq!(sum, survey.total_votes, "vote total for {:?}", survey.title);
        }
    }

    #[test]
    fn street_lighting_survey_matches_displayed_numbers() {
        let surveys = surveys();
        let lighting = &surveys[0];
        assert_eq!(lighting.title, "Street Lighting Improvement Survey");
        assert_eq!(lighting.total_votes, 342);
        assert_eq!(lighting.options.len(), 4);
    }

    #[test]
    fn every_overlay_has_markers() {
        let markers = map_markers();
        for overlay in MapOverlay::ALL {
            assert_eq!(markers_for(&markers, overlay).len(), 4);
        }
    }

    #[test]
    fn trending_totals_match_platform_engagement() {
        for topic in trending_topics() {
            let sum: u32 = topic.platforms.iter().map(|p| p.engagement).sum();
            assert_eq!(sum, topic.total_engagement, "engagement for {:?}", topic.title);
        }
    }

    #[test]
    fn exactly_one_proposal_is_yours() {
        let yours: Vec<_> = proposals().into_iter().filter(|p| p.is_yours).collect();
        assert_eq!(yours.len(), 1);
        assert_eq!(yours[0].title, "Public WiFi Hotspots in Parks");
    }

    #[test]
    fn closed_post_office_has_empty_queue() {
        let offices = post_offices();
        let closed: Vec<_> = offices.iter().filter(|o| !o.open).collect();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].queue, QueueStatus::Closed);
        assert_eq!(closed[0].current_queue, 0);
    }

    #[test]
    fn interest_defaults_are_offered_topics() {
        let topics = interest_topics();
        for default in InterestSelection::DEFAULTS {
            assert!(topics.contains(&default));
        }
    }

    #[test]
    fn project_completion_is_a_percentage() {
        for project in city_projects() {
            assert!(project.completion <= 100, "completion for {:?}", project.name);
        }
    }
}
