use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry: the base profile of one AI persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub description: String,
}

/// Normalized trait document for one persona. Upserted wholesale,
/// keyed by `persona_id` — there are no partial field updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaTrait {
    pub persona_id: String,
    pub about: String,
    pub core_expertise: Vec<String>,
    pub communication_style: String,
    pub traits: Vec<String>,
    pub pain_points: Vec<String>,
    pub key_responsibilities: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Legacy flat trait: a titled block of descriptive text with no
/// persona linkage. Written by the import command and kept as fallback
/// data for the first persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatTrait {
    pub title: String,
    pub category: String,
    pub description: String,
}

/// The six named sections a client may submit for a persona.
/// Missing sections are skipped, not errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitSections {
    pub about: Option<String>,
    pub core_expertise: Option<String>,
    pub communication_style: Option<String>,
    pub traits: Option<String>,
    pub pain_points: Option<String>,
    pub key_responsibilities: Option<String>,
}

/// Section titles in their canonical order.
pub const TRAIT_SECTION_TITLES: [&str; 6] = [
    "About",
    "Core Expertise",
    "Communication Style",
    "Traits",
    "Pain Points",
    "Key Responsibilities",
];

impl TraitSections {
    /// Reshape the present sections into titled flat traits,
    /// preserving the canonical section order.
    pub fn to_flat_traits(&self) -> Vec<FlatTrait> {
        let values = [
            &self.about,
            &self.core_expertise,
            &self.communication_style,
            &self.traits,
            &self.pain_points,
            &self.key_responsibilities,
        ];
        TRAIT_SECTION_TITLES
            .iter()
            .zip(values)
            .filter_map(|(title, value)| {
                value.as_ref().map(|description| FlatTrait {
                    title: (*title).to_owned(),
                    category: (*title).to_owned(),
                    description: description.clone(),
                })
            })
            .collect()
    }
}

/// The built-in persona catalog. Unknown ids fall back to a default
/// profile rather than a 404 — the chat UI always gets something to render.
pub fn base_persona(id: &str) -> Persona {
    match id {
        "1" => Persona {
            id: "1".to_owned(),
            name: "C-Level Bank ICP".to_owned(),
            role: "Chief Financial Officer".to_owned(),
            avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_owned(),
            description: "Financial decision maker for banking institutions".to_owned(),
        },
        "2" => Persona {
            id: "2".to_owned(),
            name: "Senior Executive".to_owned(),
            role: "Head of Retail Lending".to_owned(),
            avatar: "https://randomuser.me/api/portraits/men/33.jpg".to_owned(),
            description: "Growth and strategic partnerships specialist".to_owned(),
        },
        "3" => Persona {
            id: "3".to_owned(),
            name: "Emily Carter".to_owned(),
            role: "Head of Engineering".to_owned(),
            avatar: "https://randomuser.me/api/portraits/women/44.jpg".to_owned(),
            description: "Technical leadership and engineering management".to_owned(),
        },
        "4" => Persona {
            id: "4".to_owned(),
            name: "Jessica Davis".to_owned(),
            role: "CTO".to_owned(),
            avatar: "https://randomuser.me/api/portraits/women/45.jpg".to_owned(),
            description: "Technology strategy and innovation leader".to_owned(),
        },
        other => Persona {
            id: other.to_owned(),
            name: "AI Persona".to_owned(),
            role: "Default Role".to_owned(),
            avatar: "https://randomuser.me/api/portraits/lego/1.jpg".to_owned(),
            description: "Default persona description".to_owned(),
        },
    }
}

/// Placeholder traits for personas with nothing stored yet.
pub fn mock_traits(persona_id: &str) -> Vec<FlatTrait> {
    vec![
        FlatTrait {
            title: "About".to_owned(),
            category: "About".to_owned(),
            description: format!(
                "This is the about section for persona {persona_id}. This persona has \
                 different expertise and background than the main persona."
            ),
        },
        FlatTrait {
            title: "Core Expertise".to_owned(),
            category: "Core Expertise".to_owned(),
            description: "1) Product strategy\n2) Market analysis\n3) User experience design\n\
                          4) Agile methodology\n5) Cross-functional team leadership"
                .to_owned(),
        },
        FlatTrait {
            title: "Communication Style".to_owned(),
            category: "Communication Style".to_owned(),
            description: "Clear and concise communication with a focus on data-driven \
                          insights and collaborative problem-solving."
                .to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_persona_known_id() {
        let persona = base_persona("3");
        assert_eq!(persona.name, "Emily Carter");
        assert_eq!(persona.role, "Head of Engineering");
    }

    #[test]
    fn test_base_persona_unknown_id_gets_default() {
        let persona = base_persona("99");
        assert_eq!(persona.id, "99");
        assert_eq!(persona.name, "AI Persona");
    }

    #[test]
    fn test_trait_sections_skip_missing() {
        let sections = TraitSections {
            about: Some("About text".to_owned()),
            pain_points: Some("Slow onboarding".to_owned()),
            ..TraitSections::default()
        };
        let flat = sections.to_flat_traits();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].title, "About");
        assert_eq!(flat[1].title, "Pain Points");
        assert_eq!(flat[1].description, "Slow onboarding");
    }

    #[test]
    fn test_persona_trait_serializes_camel_case() {
        let doc = PersonaTrait {
            persona_id: "1".to_owned(),
            about: "a".to_owned(),
            core_expertise: vec!["x".to_owned()],
            communication_style: "direct".to_owned(),
            traits: vec![],
            pain_points: vec![],
            key_responsibilities: vec![],
            timestamp: chrono::Utc::now(),
        };
        let value = serde_json::to_value(&doc).expect("serializable");
        assert!(value.get("personaId").is_some());
        assert!(value.get("coreExpertise").is_some());
        assert!(value.get("persona_id").is_none());
    }
}
