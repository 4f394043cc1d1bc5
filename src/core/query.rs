use crate::domain::model::FilterRequest;

pub const EQUIPMENT_PARAM: &str = "equipment";
pub const MUSCLES_PARAM: &str = "muscles";

/// Builds a filter request from a raw, url-encoded query string. Both keys
/// may repeat; other keys are ignored.
pub fn parse_filter_query(query: Option<&str>) -> FilterRequest {
    let mut request = FilterRequest::default();

    let Some(query) = query else {
        return request;
    };

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            EQUIPMENT_PARAM => request.equipment.push(value.into_owned()),
            MUSCLES_PARAM => request.muscles.push(value.into_owned()),
            other => tracing::debug!("Ignoring unknown query parameter: {}", other),
        }
    }

    request
}
