use civic_directory::sources::{ward_detail_url, WARD_OFFICES_API};

use crate::Citation;

pub const DATASET_CITATION_TITLE: &str = "Chicago Data Portal";
pub const DATASET_CITATION_SNIPPET: &str = "Official ward office data";

/// Dataset citation first, then the Chicago.gov ward page when the request
/// named a district. The id is cited as given.
pub fn build_citations(district_id: Option<i64>) -> Vec<Citation> {
    let mut citations = vec![Citation {
        title: DATASET_CITATION_TITLE.to_string(),
        url: WARD_OFFICES_API.to_string(),
        snippet: DATASET_CITATION_SNIPPET.to_string(),
    }];

    if let Some(id) = district_id {
        citations.push(Citation {
            title: format!("Chicago.gov Ward {id}"),
            url: ward_detail_url(id),
            snippet: format!("Official Ward {id} page"),
        });
    }

    citations
}
