// soapdump - core/scanner.rs
//
// Finds request and response payloads embedded in log text.
// Core layer: operates on an in-memory string, never touches the filesystem.
//
// Each payload is bounded to the rest of its line; `.` never crosses a
// newline, so multi-line payloads are not recognised.

use crate::util::constants::{REQUEST_MARKER, RESPONSE_MARKER};
use regex::Regex;
use std::sync::OnceLock;

fn request_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("{}(.*)", regex::escape(REQUEST_MARKER)))
            .expect("request marker pattern is valid")
    })
}

fn response_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The `<?...?>` declaration is required and discarded. Greedy, so it
        // runs to the last `?>` on the line.
        Regex::new(&format!(r"{}<\?.*\?>(.*)", regex::escape(RESPONSE_MARKER)))
            .expect("response marker pattern is valid")
    })
}

/// Payloads following `PPAPIService: Request: `, in order of appearance.
pub fn extract_request_fragments(log_text: &str) -> Vec<String> {
    collect_fragments(request_pattern(), log_text)
}

/// Payloads following `PPAPIService: Response: <?...?>`, in order of
/// appearance. Lines without the declaration prefix yield nothing.
pub fn extract_response_fragments(log_text: &str) -> Vec<String> {
    collect_fragments(response_pattern(), log_text)
}

fn collect_fragments(pattern: &Regex, log_text: &str) -> Vec<String> {
    pattern
        .captures_iter(log_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
2024-05-01 10:00:00 INFO PPAPIService: Request: <req>one</req>
2024-05-01 10:00:01 INFO PPAPIService: Response: <?xml version=\"1.0\"?><resp>one</resp>
2024-05-01 10:00:02 INFO unrelated line
2024-05-01 10:00:03 INFO PPAPIService: Request: <req>two</req>
2024-05-01 10:00:04 INFO PPAPIService: Response: <resp>no declaration</resp>
";

    #[test]
    fn test_requests_in_order() {
        assert_eq!(
            extract_request_fragments(LOG),
            vec!["<req>one</req>", "<req>two</req>"]
        );
    }

    #[test]
    fn test_response_requires_declaration() {
        assert_eq!(extract_response_fragments(LOG), vec!["<resp>one</resp>"]);
    }

    #[test]
    fn test_response_declaration_is_greedy() {
        let log = "PPAPIService: Response: <?xml?><a>1</a><?pi?><b>2</b>\n";
        assert_eq!(extract_response_fragments(log), vec!["<b>2</b>"]);
    }

    #[test]
    fn test_payload_stops_at_end_of_line() {
        let log = "PPAPIService: Request: <a>first\n<b>continued</b>\n";
        assert_eq!(extract_request_fragments(log), vec!["<a>first"]);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let log = "PPAPIService: Request: <a>1</a>\r\nPPAPIService: Request: <a>2</a>\r\n";
        assert_eq!(extract_request_fragments(log), vec!["<a>1</a>", "<a>2</a>"]);
    }

    #[test]
    fn test_marker_shape_must_be_exact() {
        let log = "PPAPIService:Request: <a/>\nPPAPIService: request: <a/>\n";
        assert!(extract_request_fragments(log).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_request_fragments("").is_empty());
        assert!(extract_response_fragments("").is_empty());
    }

    #[test]
    fn test_marker_at_end_of_file_without_newline() {
        let log = "x PPAPIService: Request: <a>1</a>";
        assert_eq!(extract_request_fragments(log), vec!["<a>1</a>"]);
    }

    #[test]
    fn test_scanning_is_repeatable() {
        assert_eq!(extract_request_fragments(LOG), extract_request_fragments(LOG));
        assert_eq!(extract_response_fragments(LOG), extract_response_fragments(LOG));
    }
}
