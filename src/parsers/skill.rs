use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::results::SkillRecord;
use crate::utils::clean_text;

static INFOBOX: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.skill-box").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.skill-description").unwrap());

/// Infobox rows the skill record picks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfoboxField {
    Profession,
    Attribute,
    Energy,
    Activation,
    Recharge,
}

/// Label keywords in matching priority order
const LABEL_KEYWORDS: [(&str, InfoboxField); 5] = [
    ("profession", InfoboxField::Profession),
    ("attribute", InfoboxField::Attribute),
    ("energy", InfoboxField::Energy),
    ("activation", InfoboxField::Activation),
    ("recharge", InfoboxField::Recharge),
];

impl InfoboxField {
    /// First field whose keyword appears in a lower-cased row label
    fn from_label(label: &str) -> Option<Self> {
        LABEL_KEYWORDS
            .iter()
            .find(|(keyword, _)| label.contains(keyword))
            .map(|(_, field)| *field)
    }

    fn slot(self, record: &mut SkillRecord) -> &mut Option<String> {
        match self {
            InfoboxField::Profession => &mut record.profession,
            InfoboxField::Attribute => &mut record.attribute,
            InfoboxField::Energy => &mut record.energy,
            InfoboxField::Activation => &mut record.activation,
            InfoboxField::Recharge => &mut record.recharge,
        }
    }
}

/// Parses a skill page into a [`SkillRecord`]
///
/// A page without a `table.skill-box` infobox yields a not-found record with
/// every other field empty. Rows are read in order, so a repeated label keeps
/// the value of its last row.
pub fn parse(html: &str, skill_name: &str) -> SkillRecord {
    let doc = Html::parse_document(html);

    let Some(infobox) = doc.select(&INFOBOX).next() else {
        ::log::debug!("No skill infobox on page for '{}'", skill_name);
        return SkillRecord::not_found(skill_name);
    };

    let mut record = SkillRecord::new(skill_name);

    for row in infobox.select(&ROW) {
        let mut cells = row.select(&CELL);
        let (Some(label_cell), Some(value_cell)) = (cells.next(), cells.next()) else {
            continue;
        };

        let label = clean_text(label_cell).to_lowercase();
        if let Some(field) = InfoboxField::from_label(&label) {
            *field.slot(&mut record) = Some(clean_text(value_cell));
        }
    }

    record.description = doc
        .select(&DESCRIPTION)
        .next()
        .map(clean_text)
        .filter(|text| !text.is_empty());

    record
}
