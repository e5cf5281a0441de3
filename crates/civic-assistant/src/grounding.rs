use std::fmt::Write as _;

use civic_directory::sources::{
    ward_detail_url, BOARD_OF_ELECTIONS, CITY_CLERK_LEGISLATION, CITY_SERVICES_311,
    VOTER_INFORMATION, WARDS_PAGE,
};
use civic_directory::{DistrictRecord, WardDirectory};

const SUMMARY_NEIGHBORHOODS: usize = 3;
const NEIGHBOR_NEIGHBORHOODS: usize = 2;

/// Verified ward facts injected into the system prompt.
///
/// * resolvable id: the full record for that ward plus its numeric neighbors
/// * unresolvable id: a not-found notice naming the valid range
/// * no id: one summary line per ward
pub fn build_grounding_context(directory: &WardDirectory, district_id: Option<i64>) -> String {
    match district_id {
        Some(id) => match directory.resolve(id) {
            Some(record) => single_ward_context(directory, record),
            None => {
                let range = directory.id_range();
                format!(
                    "Ward {id} was not found. Chicago has wards {}-{}. \
                     The full list is at {WARDS_PAGE}.",
                    range.start(),
                    range.end()
                )
            }
        },
        None => all_wards_context(directory),
    }
}

pub fn build_system_prompt(directory: &WardDirectory, district_id: Option<i64>) -> String {
    let context = build_grounding_context(directory, district_id);
    let ward_count = directory.len();
    format!(
        "You are CivicGuide, a civic engagement assistant for the City of Chicago.

ROLE & PERSONALITY:
- You help Chicago residents understand and engage with their local government.
- You are helpful, accurate, non-partisan, and encouraging of civic participation.
- You speak in a warm but professional tone, like a knowledgeable neighbor.
- You cite specific data (names, addresses, phone numbers) when you have it.
- You acknowledge when you don't know something and direct users to official sources.

CORE CAPABILITIES:
- Answer questions about Chicago's {ward_count} wards, alderpersons, and ward offices
- Provide contact information (phone, email, address) for any ward office
- Explain how City Council works, how to attend meetings, how to get involved
- Help users find their ward (suggest they visit {VOTER_INFORMATION})
- Discuss elections, voting, candidacy requirements
- Explain city services (311, potholes, street lights, zoning, permits)

VERIFIED WARD DATA (sourced from the Chicago Data Portal, data.cityofchicago.org):
{context}

IMPORTANT RULES:
1. ALWAYS use the verified data above when answering about specific wards or alderpersons. Never guess.
2. If asked about something not in the data, say \"I don't have that information currently, but you can check [source].\"
3. Never make up meeting dates, voting records, or budget numbers.
4. For meeting schedules, direct users to the alderperson's website or {CITY_CLERK_LEGISLATION}.
5. For election info, direct to {BOARD_OF_ELECTIONS}.
6. For city services and complaints, direct to {CITY_SERVICES_311}.
7. Current term for all alderpersons: May 2023 to May 2027.
8. Keep responses concise but complete. Use bullet points for lists.
9. If the user mentions an address, suggest they look up their ward at {VOTER_INFORMATION}.
10. Always be encouraging of civic participation."
    )
}

fn single_ward_context(directory: &WardDirectory, record: &DistrictRecord) -> String {
    let mut block = format!(
        "The user is browsing Ward {id}. Here is the complete verified data:\n\nWARD {id}:\n",
        id = record.id
    );
    let _ = writeln!(block, "  Alderperson: {}", record.representative_name);
    let _ = writeln!(block, "  Ward Office: {}", record.office_full_address());
    let _ = writeln!(block, "  Ward Phone: {}", record.office_phone);
    if let Some(fax) = &record.office_fax {
        let _ = writeln!(block, "  Ward Fax: {fax}");
    }
    let _ = writeln!(block, "  Email: {}", record.email);
    if let Some(website) = &record.website {
        let _ = writeln!(block, "  Website: {website}");
    }
    let _ = writeln!(
        block,
        "  City Hall Office: {}, Chicago, IL 60602",
        record.headquarters_address
    );
    let _ = writeln!(block, "  City Hall Phone: {}", record.headquarters_phone);
    let _ = writeln!(block, "  Neighborhoods: {}", record.neighborhood_list());
    let _ = writeln!(
        block,
        "  Chicago.gov page: {}",
        ward_detail_url(i64::from(record.id))
    );

    block.push_str("\nSurrounding wards for context:");
    for neighbor in neighboring_wards(directory, record) {
        let _ = write!(
            block,
            "\nWard {}: {} | {}",
            neighbor.id,
            neighbor.representative_name,
            neighbor.neighborhood_preview(NEIGHBOR_NEIGHBORHOODS)
        );
    }
    block
}

// Numeric neighbors only; ward numbering carries no geographic adjacency.
fn neighboring_wards<'a>(
    directory: &'a WardDirectory,
    record: &DistrictRecord,
) -> Vec<&'a DistrictRecord> {
    let range = directory.id_range();
    [record.id.checked_sub(1), record.id.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|id| range.contains(id))
        .filter_map(|id| directory.by_id(id))
        .collect()
}

fn all_wards_context(directory: &WardDirectory) -> String {
    let mut block = format!("ALL {} CHICAGO WARDS:", directory.len());
    for record in directory.records() {
        let _ = write!(
            block,
            "\nWard {}: {} | {} | {}",
            record.id, record.representative_name, record.office_phone, record.email
        );
        if let Some(website) = &record.website {
            let _ = write!(block, " | {website}");
        }
        let _ = write!(
            block,
            " | {}",
            record.neighborhood_preview(SUMMARY_NEIGHBORHOODS)
        );
    }
    block
}
