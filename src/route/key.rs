/// Prefix every canonical route path carries.
pub const API_PREFIX: &str = "/api";

/// Build the canonical route key for a method and path.
///
/// Pure and allocation-only: discovery and lookup both go through this
/// function so the same logical route always yields byte-identical keys.
#[must_use]
pub fn route_key(method: &str, path: &str) -> String {
    if path.contains(API_PREFIX) {
        format!("{method}:{path}")
    } else {
        format!("{method}:{API_PREFIX}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::route_key;

    #[test]
    fn test_prefixes_plain_paths() {
        assert_eq!(route_key("GET", "/hello"), "GET:/api/hello");
        assert_eq!(route_key("POST", "/users/list"), "POST:/api/users/list");
    }

    #[test]
    fn test_keeps_paths_that_contain_api() {
        assert_eq!(route_key("GET", "/api/hello"), "GET:/api/hello");
        // substring match, not a prefix match
        assert_eq!(route_key("GET", "/v2/api/hello"), "GET:/v2/api/hello");
        assert_eq!(route_key("GET", "/apix"), "GET:/apix");
    }

    #[test]
    fn test_no_case_or_slash_normalisation() {
        assert_ne!(route_key("GET", "/hello"), route_key("get", "/hello"));
        assert_ne!(route_key("GET", "/hello"), route_key("GET", "/hello/"));
        assert_ne!(route_key("GET", "/Hello"), route_key("GET", "/hello"));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(route_key("GET", ""), "GET:/api");
    }

    #[test]
    fn test_deterministic_over_inputs() {
        let inputs = [
            ("GET", "/"),
            ("DELETE", "/items/42"),
            ("PATCH", "/api/items"),
            ("OPTIONS", "/api"),
        ];
        for (method, path) in inputs {
            let key = route_key(method, path);
            assert_eq!(key, route_key(method, path));
            let expected = if path.contains("/api") {
                format!("{method}:{path}")
            } else {
                format!("{method}:/api{path}")
            };
            assert_eq!(key, expected);
        }
    }
}
