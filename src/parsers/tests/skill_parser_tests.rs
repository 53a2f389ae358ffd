use crate::parsers::skill;

const METEOR_SHOWER: &str = r#"
<html><body>
<table class="skill-box">
  <tr><th colspan="2">Meteor Shower</th></tr>
  <tr><th>Profession</th><td><a href="/wiki/Elementalist">Elementalist</a></td></tr>
  <tr><th>Attribute</th><td>Fire Magic</td></tr>
  <tr><th>Campaign</th><td>Core</td></tr>
  <tr><th>Energy cost</th><td> 25 </td></tr>
  <tr><th>Activation time</th><td>5</td></tr>
  <tr><th>Recharge time</th><td>60</td></tr>
</table>
<div class="skill-description">
  Spell. Three meteors fall on the target location.
</div>
</body></html>
"#;

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_full_infobox() {
        let record = skill::parse(METEOR_SHOWER, "Meteor Shower");
        assert!(record.found);
        assert_eq!(record.name, "Meteor Shower");
        assert_eq!(record.profession.as_deref(), Some("Elementalist"));
        assert_eq!(record.attribute.as_deref(), Some("Fire Magic"));
        assert_eq!(record.energy.as_deref(), Some("25"));
        assert_eq!(record.activation.as_deref(), Some("5"));
        assert_eq!(record.recharge.as_deref(), Some("60"));
        assert_eq!(
            record.description.as_deref(),
            Some("Spell. Three meteors fall on the target location.")
        );
    }

    #[test]
    fn test_campaign_row_is_not_extracted() {
        let record = skill::parse(METEOR_SHOWER, "Meteor Shower");
        assert_eq!(record.campaign, None);
    }

    #[test]
    fn test_missing_infobox_is_not_found() {
        let html = r#"
            <table class="wikitable"><tr><th>Energy</th><td>10</td></tr></table>
            <div class="skill-description">Orphaned description.</div>
        "#;
        let record = skill::parse(html, "Healing Breeze");
        assert!(!record.found);
        assert_eq!(record.name, "Healing Breeze");
        assert_eq!(record.profession, None);
        assert_eq!(record.attribute, None);
        assert_eq!(record.campaign, None);
        assert_eq!(record.energy, None);
        assert_eq!(record.activation, None);
        assert_eq!(record.recharge, None);
        assert_eq!(record.description, None);
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_last_row_wins() {
        let html = r#"
            <table class="skill-box">
              <tr><td>Energy</td><td>5</td></tr>
              <tr><td>Energy (PvP)</td><td>10</td></tr>
            </table>
        "#;
        let record = skill::parse(html, "Split Skill");
        assert_eq!(record.energy.as_deref(), Some("10"));
    }

    #[test]
    fn test_single_cell_rows_are_skipped() {
        let html = r#"
            <table class="skill-box">
              <tr><th>Energy</th></tr>
              <tr><td>Recharge</td><td>8</td></tr>
            </table>
        "#;
        let record = skill::parse(html, "Short Rows");
        assert!(record.found);
        assert_eq!(record.energy, None);
        assert_eq!(record.recharge.as_deref(), Some("8"));
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let html = r#"
            <table class="skill-box">
              <tr><th>PROFESSION</th><td>Monk</td></tr>
            </table>
        "#;
        let record = skill::parse(html, "Healing Breeze");
        assert_eq!(record.profession.as_deref(), Some("Monk"));
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_infobox_without_matching_rows() {
        let html = r#"<table class="skill-box"><tr><th>Type</th><td>Spell</td></tr></table>"#;
        let record = skill::parse(html, "Odd Skill");
        assert!(record.found);
        assert_eq!(record.profession, None);
        assert_eq!(record.energy, None);
    }
}
