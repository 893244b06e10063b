//! Replay Scripts
//!
//! A script is a JSON array of `UiAction`s. Replaying it against a dashboard
//! reproduces a user session deterministically.

use std::path::Path;

use crate::dashboard::{Dashboard, UiAction};
use crate::error::{PulseError, PulseResult};

/// Parse a script from JSON text
pub fn parse_script(text: &str) -> PulseResult<Vec<UiAction>> {
    let actions: Vec<UiAction> = serde_json::from_str(text)?;
    Ok(actions)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> PulseResult<Vec<UiAction>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text).map_err(|e| match e {
        PulseError::Script(msg) => PulseError::Script(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Apply every action in order, then let pending work finish
pub fn replay(dashboard: &mut Dashboard, actions: &[UiAction]) {
    for action in actions {
        tracing::debug!("Replaying {:?}", action);
        dashboard.dispatch(action);
    }
    dashboard.settle();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Section;
    use std::io::Write;

    const SESSION: &str = r#"[
        {"action": "wait", "ms": 500},
        {"action": "navigate", "section": "content"},
        {"action": "wait", "ms": 500},
        {"action": "click_cta", "label": "Upload Video"}
    ]"#;

    #[test]
    fn test_replay_session() {
        let mut dashboard = Dashboard::default();
        replay(&mut dashboard, &parse_script(SESSION).unwrap());

        assert_eq!(dashboard.current_section(), Section::Content);
        assert!(!dashboard.is_busy());
        // every toast has been dismissed by the time the session settles
        assert!(dashboard.notifications().is_empty());
        assert!(dashboard.now() >= 1000 + 1000 + 5000 + 300);
    }

    #[test]
    fn test_load_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SESSION).unwrap();

        let actions = load_script(file.path()).unwrap();
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_invalid_script() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"action": "navigate"}}]"#).unwrap();

        match load_script(file.path()) {
            Err(PulseError::Script(msg)) => assert!(msg.contains("section")),
            other => panic!("unexpected result: {:?}", other.map(|a| a.len())),
        }

        let missing = load_script(Path::new("/nonexistent/session.json"));
        assert!(matches!(missing, Err(PulseError::Io(_))));
    }
}
