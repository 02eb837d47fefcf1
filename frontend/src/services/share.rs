//! Outbound link construction. Every external surface of the portal is a
//! parameterized URL template; nothing here awaits a response.

use chrono::{Duration, NaiveDate};
use shared::{meeting_datetime, Meeting, Proposal};

pub const INDIA_POST_URL: &str = "https://www.indiapost.gov.in";

/// What the share flow puts in the outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    /// The proposal itself, asking others to support it.
    Proposal,
    /// The engagement numbers the proposal has collected.
    Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub hashtags: String,
}

pub fn share_payload(proposal: &Proposal, kind: ShareKind) -> SharePayload {
    match kind {
        ShareKind::Proposal => SharePayload {
            title: format!("Check out my proposal: {}", proposal.title),
            text: format!(
                "{}\n\n{}\n\nLocation: {}\n\nSupport this proposal on our civic engagement platform!",
                proposal.title, proposal.description, proposal.location
            ),
            hashtags: "CivicEngagement,CommunityProposal".to_string(),
        },
        ShareKind::Stats => SharePayload {
            title: format!("Engagement Stats for: {}", proposal.title),
            text: format!(
                "My proposal \"{}\" has received:\n\n{} upvotes\n{} downvotes\n{} comments\n{}% community support\n\nJoin the discussion on our civic engagement platform!",
                proposal.title,
                proposal.upvotes,
                proposal.downvotes,
                proposal.comments,
                proposal.support_percentage()
            ),
            hashtags: "CivicEngagement,CommunityImpact".to_string(),
        },
    }
}

pub fn facebook_url(page_url: &str, text: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        encode(page_url),
        encode(text)
    )
}

pub fn twitter_url(text: &str, hashtags: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&hashtags={}",
        encode(text),
        encode(hashtags)
    )
}

pub fn linkedin_url(page_url: &str, title: &str, summary: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}&title={}&summary={}",
        encode(page_url),
        encode(title),
        encode(summary)
    )
}

pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", encode(text))
}

pub fn mailto_url(subject: &str, body: &str) -> String {
    format!("mailto:?subject={}&body={}", encode(subject), encode(body))
}

pub fn tel_url(number: &str) -> String {
    format!("tel:{}", number)
}

pub fn maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode(address)
    )
}

/// Google Calendar event template for a meeting, one hour long. `None`
/// when the meeting's display time does not parse.
pub fn google_calendar_url(meeting: &Meeting, date: NaiveDate) -> Option<String> {
    let start = meeting_datetime(date, meeting.time)?;
    let end = start + Duration::hours(1);
    let details = format!("Town Hall Meeting - {} attendees expected", meeting.attendees);
    let location = meeting.location.unwrap_or("Civic Center");
    Some(format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}Z/{}Z&details={}&location={}",
        encode(meeting.title),
        start.format("%Y%m%dT%H%M%S"),
        end.format("%Y%m%dT%H%M%S"),
        encode(&details),
        encode(location)
    ))
}

/// Percent-encoding with `encodeURIComponent`'s unreserved set
/// (alphanumerics and `-_.!~*'()`); everything else is escaped per UTF-8
/// byte. Implemented here so the builders stay testable off-wasm.
fn encode(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for byte in component.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::fixtures;

    #[test]
    fn encode_matches_encode_uri_component() {
        assert_eq!(encode("hello world"), "hello%20world");
        assert_eq!(encode("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode("₹2.5 L"), "%E2%82%B92.5%20L");
    }

    #[test]
    fn stats_payload_includes_support_percentage() {
        let proposal = &fixtures::proposals()[0];
        let payload = share_payload(proposal, ShareKind::Stats);
        assert!(payload.text.contains("234 upvotes"));
        assert!(payload.text.contains("95% community support"));
        assert_eq!(payload.hashtags, "CivicEngagement,CommunityImpact");
    }

    #[test]
    fn proposal_payload_carries_location() {
        let proposal = &fixtures::proposals()[0];
        let payload = share_payload(proposal, ShareKind::Proposal);
        assert!(payload.text.contains("Location: Main Road, Ward 12"));
        assert!(payload.title.starts_with("Check out my proposal:"));
    }

    #[test]
    fn share_urls_target_documented_endpoints() {
        assert!(twitter_url("hi there", "Tag").starts_with(
            "https://twitter.com/intent/tweet?text=hi%20there&hashtags=Tag"
        ));
        assert!(whatsapp_url("hi").starts_with("https://wa.me/?text=hi"));
        assert_eq!(
            maps_search_url("Hill Road, Bandra West"),
            "https://www.google.com/maps/search/?api=1&query=Hill%20Road%2C%20Bandra%20West"
        );
        assert_eq!(tel_url("+91-22-2413-6051"), "tel:+91-22-2413-6051");
    }

    #[test]
    fn calendar_url_spans_one_hour_from_meeting_time() {
        let meeting = &fixtures::meetings()[0];
        let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let url = google_calendar_url(meeting, date).unwrap();
        assert!(url.contains("dates=20241215T190000Z/20241215T200000Z"));
        assert!(url.contains("text=Ward%2015%20Development%20Discussion"));

        let broken = Meeting {
            time: "late evening",
            ..meeting.clone()
        };
        assert!(google_calendar_url(&broken, date).is_none());
    }
}
