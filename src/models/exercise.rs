use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "#4CAF50",
            Difficulty::Intermediate => "#FFC107",
            Difficulty::Advanced => "#F44336",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
}

// Difficulty stays a raw string so an unexpected value from the content
// platform degrades to the "Unknown" badge instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image: Option<ImageField>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Exercise {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::parse)
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled Exercise"
        } else {
            &self.name
        }
    }

    pub fn image_asset(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.asset.as_ref())
            .map(|asset| asset.reference.as_str())
    }

    pub fn image_alt(&self) -> Option<&str> {
        self.image.as_ref().and_then(|image| image.alt.as_deref())
    }

    pub fn video_link(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("beginner"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("INTERMEDIATE"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::parse("Advanced"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("expert"), None);
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn test_difficulty_round_trips_through_as_str() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::parse(difficulty.as_str()), Some(difficulty));
        }
    }

    #[test]
    fn test_exercise_tolerates_nulls() {
        let exercise: Exercise = serde_json::from_value(serde_json::json!({
            "_id": "ex-1",
            "name": null,
            "description": null,
            "difficulty": "legendary",
            "image": null,
            "videoUrl": null,
            "isActive": null
        }))
        .unwrap();

        assert_eq!(exercise.name, "");
        assert_eq!(exercise.display_name(), "Untitled Exercise");
        assert_eq!(exercise.difficulty(), None);
        assert!(exercise.is_active());
        assert!(exercise.image_asset().is_none());
    }

    #[test]
    fn test_exercise_full_document() {
        let exercise: Exercise = serde_json::from_value(serde_json::json!({
            "_id": "ex-2",
            "_type": "exercise",
            "_rev": "abc",
            "name": "Squat",
            "description": "A lower body compound movement.",
            "difficulty": "Beginner",
            "image": {
                "_type": "image",
                "asset": { "_ref": "image-abc123-800x600-jpg", "_type": "reference" },
                "alt": "Person squatting"
            },
            "videoUrl": "https://video.example.com/squat",
            "isActive": false
        }))
        .unwrap();

        assert_eq!(exercise.difficulty(), Some(Difficulty::Beginner));
        assert_eq!(exercise.image_asset(), Some("image-abc123-800x600-jpg"));
        assert_eq!(exercise.image_alt(), Some("Person squatting"));
        assert_eq!(exercise.video_link(), Some("https://video.example.com/squat"));
        assert!(!exercise.is_active());
    }

    #[test]
    fn test_video_link_rejects_other_schemes() {
        let exercise = Exercise {
            id: "ex-3".to_string(),
            name: "Plank".to_string(),
            description: None,
            difficulty: None,
            image: None,
            video_url: Some("javascript:alert(1)".to_string()),
            is_active: None,
        };

        assert!(exercise.video_link().is_none());
    }
}
