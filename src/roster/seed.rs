//! Seed data: the built-in activity list and YAML/JSON seed files.
//!
//! A seed file is a sequence of entries:
//!
//! ```yaml
//! - name: Chess Club
//!   description: Learn strategies and compete in chess tournaments
//!   schedule: Fridays, 3:30 PM - 5:00 PM
//!   max_participants: 12
//!   participants:
//!     - michael@mergington.edu
//! ```
//!
//! JSON is accepted too, since it parses as YAML.

use std::path::Path;

use super::activity::{Activity, ActivityEntry};
use super::error::SeedError;
use super::store::Roster;

fn entry(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: [&str; 2],
) -> ActivityEntry {
    ActivityEntry::new(
        name,
        Activity::new(description, schedule, max_participants).with_participants(participants),
    )
}

/// The nine activities Mergington High School starts each term with.
pub fn mergington_activities() -> Vec<ActivityEntry> {
    vec![
        entry(
            "Soccer Team",
            "Join the school soccer team and compete in inter-school matches",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            25,
            ["alex@mergington.edu", "sarah@mergington.edu"],
        ),
        entry(
            "Basketball Team",
            "Practice basketball skills and participate in league games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            ["james@mergington.edu", "lucy@mergington.edu"],
        ),
        entry(
            "Drama Club",
            "Perform in school plays and develop acting skills",
            "Thursdays, 3:30 PM - 5:30 PM",
            20,
            ["emily@mergington.edu", "noah@mergington.edu"],
        ),
        entry(
            "Art Studio",
            "Explore various art mediums including painting, drawing, and sculpture",
            "Wednesdays, 3:00 PM - 5:00 PM",
            15,
            ["ava@mergington.edu", "liam@mergington.edu"],
        ),
        entry(
            "Science Club",
            "Conduct experiments and participate in science competitions",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
            ["william@mergington.edu", "isabella@mergington.edu"],
        ),
        entry(
            "Debate Team",
            "Develop critical thinking and public speaking through competitive debates",
            "Fridays, 4:00 PM - 6:00 PM",
            16,
            ["ethan@mergington.edu", "mia@mergington.edu"],
        ),
        entry(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        entry(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        entry(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}

/// Parse seed entries from YAML (or JSON) text.
pub fn parse_seed(text: &str) -> Result<Vec<ActivityEntry>, SeedError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Read a seed file and build a roster from it.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Roster, SeedError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = Roster::from_entries(parse_seed(&text)?)?;
    log::info!("Loaded {} activities from {:?}", roster.len(), path);
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_has_nine_unique_activities() {
        let entries = mergington_activities();
        assert_eq!(entries.len(), 9);
        for e in &entries {
            assert_eq!(e.activity.participants.len(), 2, "{}", e.name);
        }
        assert!(Roster::from_entries(entries).is_ok());
    }

    #[test]
    fn test_parse_seed_yaml() {
        let yaml = r#"
- name: Robotics
  description: Build robots
  schedule: Saturdays, 10:00 AM - 12:00 PM
  max_participants: 8
  participants:
    - kai@mergington.edu
- name: Choir
  description: Sing
  schedule: Tuesdays
  max_participants: 40
"#;
        let entries = parse_seed(yaml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Robotics");
        assert_eq!(entries[0].activity.max_participants, 8);
        assert_eq!(
            entries[0].activity.participants.as_slice(),
            ["kai@mergington.edu"]
        );
        assert!(entries[1].activity.participants.is_empty());
    }

    #[test]
    fn test_parse_seed_accepts_json() {
        let json = r#"[{"name": "Chess Club", "description": "d", "schedule": "s",
                        "max_participants": 12, "participants": ["a@mergington.edu"]}]"#;
        let entries = parse_seed(json).unwrap();
        assert_eq!(entries[0].name, "Chess Club");
    }

    #[test]
    fn test_parse_seed_rejects_repeated_participant() {
        let yaml = r#"
- name: Choir
  description: Sing
  schedule: Tuesdays
  max_participants: 40
  participants: [a@mergington.edu, a@mergington.edu]
"#;
        assert!(matches!(parse_seed(yaml), Err(SeedError::Yaml(_))));
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "- name: Robotics\n  description: Build robots\n  schedule: Saturdays\n  max_participants: 8\n  participants: [kai@mergington.edu]"
        )
        .unwrap();

        let roster = load_seed_file(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
        roster.enroll("Robotics", "lee@mergington.edu").unwrap();
        assert!(matches!(
            roster.enroll("Soccer Team", "lee@mergington.edu"),
            Err(crate::roster::RosterError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_seed_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn test_load_seed_file_duplicate_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "- {{name: A, description: d, schedule: s, max_participants: 1}}\n- {{name: A, description: d, schedule: s, max_participants: 2}}"
        )
        .unwrap();
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateActivity(name) if name == "A"));
    }
}
