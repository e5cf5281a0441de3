use civic_directory::sources::{
    BOARD_OF_ELECTIONS, CITY_CLERK_LEGISLATION, CITY_SERVICES_311, CITY_SERVICES_PHONE,
    VOTER_INFORMATION,
};
use civic_directory::{DistrictRecord, WardDirectory};

#[derive(Debug, Clone, Copy)]
enum KeywordMatch {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static str]),
    Always,
}

impl KeywordMatch {
    fn matches(self, lowered: &str) -> bool {
        match self {
            Self::AnyOf(keywords) => keywords.iter().any(|keyword| lowered.contains(keyword)),
            Self::AllOf(keywords) => keywords.iter().all(|keyword| lowered.contains(keyword)),
            Self::Always => true,
        }
    }
}

struct WardRule {
    name: &'static str,
    keywords: KeywordMatch,
    render: fn(&DistrictRecord) -> String,
}

struct GeneralRule {
    name: &'static str,
    keywords: KeywordMatch,
    render: fn() -> String,
}

// Evaluated top to bottom; the final entry of each table always matches.
const WARD_RULES: &[WardRule] = &[
    WardRule {
        name: "identity",
        keywords: KeywordMatch::AnyOf(&["who", "alderman", "alderperson", "represent"]),
        render: render_contact_card,
    },
    WardRule {
        name: "contact",
        keywords: KeywordMatch::AnyOf(&["contact", "phone", "email", "reach", "call"]),
        render: render_contact_block,
    },
    WardRule {
        name: "location",
        keywords: KeywordMatch::AnyOf(&["neighborhood", "where", "area", "what part"]),
        render: render_neighborhoods,
    },
    WardRule {
        name: "meetings",
        keywords: KeywordMatch::AnyOf(&["meeting", "schedule", "when"]),
        render: render_meeting_pointer,
    },
    WardRule {
        name: "ward_summary",
        keywords: KeywordMatch::Always,
        render: render_ward_summary,
    },
];

const GENERAL_RULES: &[GeneralRule] = &[
    GeneralRule {
        name: "elections",
        keywords: KeywordMatch::AnyOf(&["election", "vote", "register"]),
        render: render_elections,
    },
    GeneralRule {
        name: "city_services",
        keywords: KeywordMatch::AnyOf(&["311", "pothole", "report", "complaint", "service"]),
        render: render_city_services,
    },
    GeneralRule {
        name: "find_ward",
        keywords: KeywordMatch::AllOf(&["find", "ward"]),
        render: render_find_ward,
    },
    GeneralRule {
        name: "capabilities",
        keywords: KeywordMatch::Always,
        render: render_capabilities,
    },
];

/// Deterministic answer built from the ward table and fixed civic pointers.
///
/// Ward rules apply only when `district_id` resolves; otherwise the general
/// rules run. Never fails.
pub fn local_fallback(directory: &WardDirectory, message: &str, district_id: Option<i64>) -> String {
    let lowered = message.to_lowercase();
    if let Some(record) = district_id.and_then(|id| directory.resolve(id)) {
        let rule = select_ward_rule(&lowered);
        tracing::debug!(district_id = record.id, rule = rule.name, "ward fallback rule selected");
        return (rule.render)(record);
    }

    let rule = select_general_rule(&lowered);
    tracing::debug!(rule = rule.name, "general fallback rule selected");
    (rule.render)()
}

fn select_ward_rule(lowered: &str) -> &'static WardRule {
    WARD_RULES
        .iter()
        .find(|rule| rule.keywords.matches(lowered))
        .unwrap_or(&WARD_RULES[WARD_RULES.len() - 1])
}

fn select_general_rule(lowered: &str) -> &'static GeneralRule {
    GENERAL_RULES
        .iter()
        .find(|rule| rule.keywords.matches(lowered))
        .unwrap_or(&GENERAL_RULES[GENERAL_RULES.len() - 1])
}

fn website_line(record: &DistrictRecord, label: &str) -> String {
    record
        .website
        .as_deref()
        .map(|website| format!("\n- {label}: {website}"))
        .unwrap_or_default()
}

fn render_contact_card(record: &DistrictRecord) -> String {
    format!(
        "Ward {id} is represented by Alderperson **{name}**.\n\n\
         - Phone: {phone}\n\
         - Email: {email}\n\
         - Office: {office}{website}\n\n\
         Their current term runs from May 2023 to May 2027.",
        id = record.id,
        name = record.representative_name,
        phone = record.office_phone,
        email = record.email,
        office = record.office_full_address(),
        website = website_line(record, "Website"),
    )
}

fn render_contact_block(record: &DistrictRecord) -> String {
    format!(
        "Here's how to contact the Ward {id} office:\n\n\
         - **Phone**: {phone}\n\
         - **Email**: {email}\n\
         - **Address**: {office}\n\
         - **City Hall Phone**: {hq_phone}{website}\n\n\
         Office hours are typically Mon-Fri, 9 AM - 5 PM.",
        id = record.id,
        phone = record.office_phone,
        email = record.email,
        office = record.office_full_address(),
        hq_phone = record.headquarters_phone,
        website = website_line(record, "**Website**"),
    )
}

fn render_neighborhoods(record: &DistrictRecord) -> String {
    format!(
        "Ward {id} covers these neighborhoods: **{neighborhoods}**.\n\n\
         The ward office is located at {address}. Alderperson {name} represents this ward.",
        id = record.id,
        neighborhoods = record.neighborhood_list(),
        address = record.office_address,
        name = record.representative_name,
    )
}

fn render_meeting_pointer(record: &DistrictRecord) -> String {
    let website = record
        .website
        .as_deref()
        .map(|website| format!("- **Ward website**: {website}\n"))
        .unwrap_or_default();
    format!(
        "For Ward {id} meeting schedules, I recommend checking:\n\n\
         {website}\
         - **City Council meetings**: {CITY_CLERK_LEGISLATION}\n\
         - **Contact the office**: {phone} or {email}\n\n\
         Most wards hold monthly community meetings. Contact Alderperson {name}'s office for the latest schedule.",
        id = record.id,
        phone = record.office_phone,
        email = record.email,
        name = record.representative_name,
    )
}

fn render_ward_summary(record: &DistrictRecord) -> String {
    format!(
        "Ward {id} is represented by Alderperson **{name}** and covers {neighborhoods}.\n\n\
         Ward Office: {address}\n\
         Phone: {phone}\n\
         Email: {email}\n\n\
         What specific information would you like about Ward {id}? I can help with contact info, neighborhoods, meetings, or how to get involved.",
        id = record.id,
        name = record.representative_name,
        neighborhoods = record.neighborhood_list(),
        address = record.office_address,
        phone = record.office_phone,
        email = record.email,
    )
}

fn render_elections() -> String {
    format!(
        "For Chicago election information:\n\n\
         - **Check registration**: {VOTER_INFORMATION}\n\
         - **Find your polling place**: Same link above\n\
         - **Board of Elections**: {BOARD_OF_ELECTIONS}\n\
         - **Next municipal election**: February 2027\n\n\
         All alderpersons serve 4-year terms (current term: May 2023 to May 2027)."
    )
}

fn render_city_services() -> String {
    format!(
        "For city service requests:\n\n\
         - **311 Online**: {CITY_SERVICES_311}\n\
         - **Call**: 311 (within Chicago) or {CITY_SERVICES_PHONE}\n\
         - **Report issues**: Potholes, street lights, graffiti, abandoned vehicles, and more\n\n\
         You can also contact your alderperson's ward office directly for local issues."
    )
}

fn render_find_ward() -> String {
    format!(
        "To find your ward:\n\n\
         1. Visit **{VOTER_INFORMATION}**\n\
         2. Enter your address\n\
         3. It will show your ward number, alderperson, and polling place\n\n\
         Chicago has 50 wards, each represented by one alderperson on the City Council."
    )
}

fn render_capabilities() -> String {
    "I'm CivicGuide, your assistant for Chicago civic engagement. I can help you with:\n\n\
     - **Ward information**: Who represents your ward, contact info, neighborhoods\n\
     - **Meetings**: How to find and attend ward or city council meetings\n\
     - **Elections**: Registration, polling places, upcoming elections\n\
     - **City services**: How to report issues via 311\n\
     - **Getting involved**: Volunteering, attending meetings, contacting officials\n\n\
     Try asking something like \"Who is the alderperson for Ward 48?\" or \"How do I find my ward?\""
        .to_string()
}
