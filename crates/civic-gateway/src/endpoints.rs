pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const CHAT_ALIAS_ENDPOINT: &str = "/chat";
pub const HEALTH_ENDPOINT: &str = "/health";
pub const WARDS_ENDPOINT: &str = "/api/wards";
pub const WARD_DETAIL_ENDPOINT: &str = "/api/wards/{id}";
pub const SEARCH_ENDPOINT: &str = "/api/search";
