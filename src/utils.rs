/// Utility functions
use serde_json::Value;

/// Extract a non-empty string field from a JSON object.
/// Numbers are stringified so numeric-typed fields still render.
pub fn str_field(v: &Value, key: &str) -> Option<String> {
    let x = v.get(key)?;
    if let Some(s) = x.as_str() {
        if !s.is_empty() {
            return Some(s.to_string());
        }
    } else if x.is_number() {
        return Some(x.to_string());
    }
    None
}

/// Scan a rise/set event list for the record whose `phen` matches
/// `kind` and return its `time` string.
pub fn event_time(events: &[Value], kind: &str) -> Option<String> {
    events
        .iter()
        .find(|e| e.get("phen").and_then(Value::as_str) == Some(kind))
        .and_then(|e| e.get("time").and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_field_present() {
        let json = json!({"title": "Crescent Moon"});
        assert_eq!(str_field(&json, "title"), Some("Crescent Moon".to_string()));
    }

    #[test]
    fn test_str_field_empty_string_ignored() {
        let json = json!({"title": ""});
        assert_eq!(str_field(&json, "title"), None);
    }

    #[test]
    fn test_str_field_missing() {
        let json = json!({"other": "value"});
        assert_eq!(str_field(&json, "title"), None);
    }

    #[test]
    fn test_str_field_number_stringified() {
        let json = json!({"tz": -4});
        assert_eq!(str_field(&json, "tz"), Some("-4".to_string()));
    }

    #[test]
    fn test_event_time_finds_matching_phen() {
        let events = vec![
            json!({"phen": "Rise", "time": "06:32"}),
            json!({"phen": "Set", "time": "19:54"}),
        ];
        assert_eq!(event_time(&events, "Rise"), Some("06:32".to_string()));
        assert_eq!(event_time(&events, "Set"), Some("19:54".to_string()));
    }

    #[test]
    fn test_event_time_absent_kind() {
        let events = vec![json!({"phen": "Rise", "time": "14:03"})];
        assert_eq!(event_time(&events, "Set"), None);
    }

    #[test]
    fn test_event_time_ignores_other_phenomena() {
        let events = vec![
            json!({"phen": "Upper Transit", "time": "12:10"}),
            json!({"phen": "Set", "time": "19:54"}),
        ];
        assert_eq!(event_time(&events, "Rise"), None);
        assert_eq!(event_time(&events, "Set"), Some("19:54".to_string()));
    }

    #[test]
    fn test_event_time_empty_list() {
        assert_eq!(event_time(&[], "Rise"), None);
    }
}
