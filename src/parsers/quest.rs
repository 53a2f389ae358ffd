use scraper::Html;

use crate::parsers::sections::Section;
use crate::results::QuestRecord;

/// Anchor ids for each quest section, tried in document order
pub const OBJECTIVES_ANCHORS: &[&str] = &["Objectives"];
pub const REWARDS_ANCHORS: &[&str] = &["Reward", "Rewards"];
pub const WALKTHROUGH_ANCHORS: &[&str] = &["Walkthrough"];
pub const NOTES_ANCHORS: &[&str] = &["Notes"];

/// Parses a quest page into a [`QuestRecord`]
///
/// Each section is probed on its own; a missing section leaves its field
/// `None` and never affects the others. `quest_name` is only used as the
/// record label.
pub fn parse(html: &str, quest_name: &str) -> QuestRecord {
    let doc = Html::parse_document(html);
    let mut record = QuestRecord::new(quest_name);

    record.objectives = Section::locate(&doc, OBJECTIVES_ANCHORS).and_then(|s| s.list_items());
    record.rewards = Section::locate(&doc, REWARDS_ANCHORS).and_then(|s| s.list_items());
    record.walkthrough = Section::locate(&doc, WALKTHROUGH_ANCHORS).and_then(|s| s.text_blocks());
    record.notes = Section::locate(&doc, NOTES_ANCHORS).and_then(|s| s.list_items());

    ::log::debug!(
        "Quest '{}': objectives={} rewards={} walkthrough={} notes={}",
        quest_name,
        record.objectives.is_some(),
        record.rewards.is_some(),
        record.walkthrough.is_some(),
        record.notes.is_some()
    );

    record
}
