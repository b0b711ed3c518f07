//! Table API URI construction.

/// Path prefix of the ServiceNow Table API.
pub const TABLE_API_PATH: &str = "/api/now/table/";

/// Build the request URI for `table`, appending `query` when one is given.
///
/// The table name is not validated; whatever the caller configured is sent
/// to the instance as-is.
pub fn construct_uri(table: &str, query: Option<&str>) -> String {
    let mut uri = format!("{}{}", TABLE_API_PATH, table);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        uri.push('?');
        uri.push_str(query);
    }
    uri
}
