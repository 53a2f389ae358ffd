//! Plain-text (markdown flavoured) rendering of extracted records.
//!
//! Every renderer is a pure function of its record, so rendering the same
//! record twice gives identical text.

use crate::results::{BuildCategoryResult, QuestRecord, SkillRecord};
use crate::utils::title_case;

/// Render a quest record; absent sections are left out entirely
pub fn quest(record: &QuestRecord) -> String {
    if !record.found {
        return format!("Quest '{}' not found in the Guild Wars Wiki.", record.name);
    }

    let mut out = format!("# {}\n\n", record.name);

    if let Some(objectives) = &record.objectives {
        push_bullets(&mut out, "Objectives", objectives);
        out.push('\n');
    }

    if let Some(rewards) = &record.rewards {
        push_bullets(&mut out, "Rewards", rewards);
        out.push('\n');
    }

    if let Some(walkthrough) = &record.walkthrough {
        out.push_str("## Walkthrough\n");
        out.push_str(walkthrough);
        out.push_str("\n\n");
    }

    if let Some(notes) = &record.notes {
        push_bullets(&mut out, "Notes", notes);
    }

    out
}

/// Render a skill record
pub fn skill(record: &SkillRecord) -> String {
    if !record.found {
        return format!("Skill '{}' not found in the Guild Wars Wiki.", record.name);
    }

    let mut out = format!("# {}\n\n", record.name);

    push_labeled(&mut out, "**Profession:**", &record.profession);
    push_labeled(&mut out, "**Attribute:**", &record.attribute);
    push_labeled(&mut out, "**Campaign:**", &record.campaign);

    out.push_str("\n**Stats:**\n");
    push_labeled(&mut out, "- Energy:", &record.energy);
    push_labeled(&mut out, "- Activation:", &record.activation);
    push_labeled(&mut out, "- Recharge:", &record.recharge);

    if let Some(description) = &record.description {
        out.push_str(&format!("\n**Description:**\n{}\n", description));
    }

    out
}

/// Render a build listing, honouring the result's limit
pub fn builds(result: &BuildCategoryResult) -> String {
    if result.builds.is_empty() {
        return format!("No builds found for category '{}'.", result.category);
    }

    let shown = result
        .effective_limit()
        .map_or(result.builds.len(), |limit| limit.min(result.builds.len()));

    let mut out = format!("# PvE builds - {}\n\n", title_case(&result.category));
    for build in &result.builds[..shown] {
        out.push_str(&format!("- {}", build.name));
        if !build.url.is_empty() {
            out.push_str(&format!(" — {}", build.url));
        }
        out.push('\n');
    }

    if result.is_truncated() {
        out.push_str(&format!(
            "\nShowing first {} builds of {} total.",
            shown,
            result.builds.len()
        ));
    }

    out
}

fn push_bullets(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("## {}\n", heading));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}

/// Blank values count as absent
fn push_labeled(out: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        out.push_str(&format!("{} {}\n", label, value));
    }
}
