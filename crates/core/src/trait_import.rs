//! Parsers for the flat trait files the import command consumes.
//!
//! Two formats exist in the wild: the legacy dashed-block format
//! (`- <title>` / `Trait Category:` / `Trait Description:`) and the newer
//! sectioned format with the six canonical headings. Both produce
//! [`FlatTrait`]s; the sectioned form can additionally be normalized into
//! a [`PersonaTrait`] document.

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::{FlatTrait, PersonaTrait, TRAIT_SECTION_TITLES};

/// Parse the sectioned format: each canonical heading at a line start
/// opens a section running to the next heading (or end of file).
pub fn parse_sectioned_trait_file(content: &str) -> Vec<FlatTrait> {
    let mut headings: Vec<(usize, usize, &str)> = TRAIT_SECTION_TITLES
        .iter()
        .filter_map(|title| {
            find_heading(content, title).map(|(start, end)| (start, end, *title))
        })
        .collect();
    headings.sort_by_key(|&(start, _, _)| start);

    let mut traits = Vec::new();
    for (i, &(_, body_start, title)) in headings.iter().enumerate() {
        let body_end = headings.get(i + 1).map_or(content.len(), |&(next, _, _)| next);
        let description = content[body_start..body_end].trim();
        if description.is_empty() {
            continue;
        }
        traits.push(FlatTrait {
            title: title.to_owned(),
            category: title.to_owned(),
            description: description.to_owned(),
        });
    }
    traits
}

/// Find `<title>:` at the start of a line. Returns the heading's byte
/// range so the caller can slice the body that follows it.
fn find_heading(content: &str, title: &str) -> Option<(usize, usize)> {
    let needle = format!("{title}:");
    let mut from = 0;
    while let Some(pos) = content[from..].find(&needle) {
        let abs = from + pos;
        if abs == 0 || content.as_bytes().get(abs.wrapping_sub(1)) == Some(&b'\n') {
            return Some((abs, abs + needle.len()));
        }
        from = abs + needle.len();
    }
    None
}

/// Parse the legacy dashed-block format. Blocks are separated by runs of
/// blank lines; each block carries a title line, a category line and a
/// free-text description. The "Role Profile & Responsibilities" block has
/// its own shape and is mapped to the "Role Profile" category.
pub fn parse_legacy_trait_file(content: &str) -> Vec<FlatTrait> {
    let block_split = Regex::new(r"\n{3,}").unwrap();
    let title_re = Regex::new(r"^\s*-\s*(.+)").unwrap();
    let category_re = Regex::new(r"Trait Category:\s*(.+)").unwrap();
    let description_re = Regex::new(r"(?s)Trait Description:\s*(.+)").unwrap();
    // The rest of the title line is discarded; the description is the
    // lines that follow it.
    let role_profile_re =
        Regex::new(r"(?s)-\s*Role Profile & Responsibilities:[^\n]*\n?(.*)").unwrap();

    let mut traits = Vec::new();
    for block in block_split.split(content) {
        if block.trim().is_empty() {
            continue;
        }

        if let Some(caps) = role_profile_re.captures(block) {
            let description = caps.get(1).map_or("", |m| m.as_str()).trim();
            traits.push(FlatTrait {
                title: "Role Profile & Responsibilities".to_owned(),
                category: "Role Profile".to_owned(),
                description: description.to_owned(),
            });
            continue;
        }

        let title = title_re.captures(block).and_then(|c| c.get(1)).map(|m| m.as_str().trim());
        let category =
            category_re.captures(block).and_then(|c| c.get(1)).map(|m| m.as_str().trim());
        let description =
            description_re.captures(block).and_then(|c| c.get(1)).map(|m| m.as_str().trim());

        if let (Some(title), Some(category), Some(description)) = (title, category, description) {
            traits.push(FlatTrait {
                title: title.to_owned(),
                category: category.to_owned(),
                description: description.to_owned(),
            });
        } else {
            tracing::debug!(block_head = %block.lines().next().unwrap_or(""), "skipping unparsable trait block");
        }
    }
    traits
}

/// Split a list-valued section into items: one per line, with leading
/// `1)` / `2.` / `-` markers stripped.
pub fn split_list_items(text: &str) -> Vec<String> {
    let marker = Regex::new(r"^\s*(?:\d+[).]|-)\s*").unwrap();
    text.lines()
        .map(|line| marker.replace(line, "").trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Normalize parsed sections into the per-persona trait document.
/// Returns `None` when no canonical section was found at all.
pub fn normalize_traits(
    persona_id: &str,
    sections: &[FlatTrait],
    timestamp: DateTime<Utc>,
) -> Option<PersonaTrait> {
    if sections.is_empty() {
        return None;
    }
    let find = |title: &str| {
        sections.iter().find(|t| t.title.eq_ignore_ascii_case(title)).map(|t| t.description.clone())
    };
    Some(PersonaTrait {
        persona_id: persona_id.to_owned(),
        about: find("About").unwrap_or_default(),
        core_expertise: find("Core Expertise").map(|s| split_list_items(&s)).unwrap_or_default(),
        communication_style: find("Communication Style").unwrap_or_default(),
        traits: find("Traits").map(|s| split_list_items(&s)).unwrap_or_default(),
        pain_points: find("Pain Points").map(|s| split_list_items(&s)).unwrap_or_default(),
        key_responsibilities: find("Key Responsibilities")
            .map(|s| split_list_items(&s))
            .unwrap_or_default(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONED: &str = "About:\nTwenty years in retail banking.\n\n\
Core Expertise:\n1) Payments\n2) Risk management\n\n\
Communication Style:\nDirect and numbers-first.\n\n\
Traits:\n- Skeptical\n- Detail-oriented\n\n\
Pain Points:\n1) Legacy core systems\n\n\
Key Responsibilities:\n1) P&L ownership\n2) Regulatory reporting";

    const LEGACY: &str = "  - Decision Style\n\
Trait Category: Behavior\n\
Trait Description: Prefers hard numbers over narratives.\n\n\n\
  - Risk Appetite\n\
Trait Category: Behavior\n\
Trait Description: Conservative, needs regulatory\ncover before committing.\n\n\n\
  - Role Profile & Responsibilities: CFO\n\
Owns the bank's balance sheet and capital planning.";

    #[test]
    fn test_sectioned_parser_finds_all_sections() {
        let traits = parse_sectioned_trait_file(SECTIONED);
        assert_eq!(traits.len(), 6);
        assert_eq!(traits[0].title, "About");
        assert_eq!(traits[0].description, "Twenty years in retail banking.");
        assert_eq!(traits[5].title, "Key Responsibilities");
        assert!(traits[5].description.contains("Regulatory reporting"));
    }

    #[test]
    fn test_sectioned_parser_tolerates_missing_sections() {
        let traits = parse_sectioned_trait_file("About:\nJust the about.\n");
        assert_eq!(traits.len(), 1);
        assert_eq!(traits[0].description, "Just the about.");
    }

    #[test]
    fn test_sectioned_parser_ignores_mid_line_headings() {
        let traits = parse_sectioned_trait_file("Nothing to see. Traits: inline mention.");
        assert!(traits.is_empty());
    }

    #[test]
    fn test_legacy_parser_extracts_blocks() {
        let traits = parse_legacy_trait_file(LEGACY);
        assert_eq!(traits.len(), 3);
        assert_eq!(traits[0].title, "Decision Style");
        assert_eq!(traits[0].category, "Behavior");
        assert_eq!(traits[1].description, "Conservative, needs regulatory\ncover before committing.");
    }

    #[test]
    fn test_legacy_parser_maps_role_profile() {
        let traits = parse_legacy_trait_file(LEGACY);
        let role = &traits[2];
        assert_eq!(role.title, "Role Profile & Responsibilities");
        assert_eq!(role.category, "Role Profile");
        assert!(role.description.contains("capital planning"));
    }

    #[test]
    fn test_split_list_items_strips_markers() {
        let items = split_list_items("1) Payments\n2. Risk\n- Lending\n\n");
        assert_eq!(items, vec!["Payments", "Risk", "Lending"]);
    }

    #[test]
    fn test_normalize_traits_builds_document() {
        let sections = parse_sectioned_trait_file(SECTIONED);
        let doc = normalize_traits("1", &sections, chrono::Utc::now()).unwrap();
        assert_eq!(doc.persona_id, "1");
        assert_eq!(doc.core_expertise, vec!["Payments", "Risk management"]);
        assert_eq!(doc.communication_style, "Direct and numbers-first.");
        assert_eq!(doc.pain_points, vec!["Legacy core systems"]);
    }

    #[test]
    fn test_normalize_traits_empty_input() {
        assert!(normalize_traits("1", &[], chrono::Utc::now()).is_none());
    }
}
