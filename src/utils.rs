use scraper::ElementRef;

/// Visible text of an element: text nodes concatenated, whitespace runs collapsed, trimmed
pub fn clean_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a page display name to a wiki path segment
pub fn page_path(identifier: &str) -> String {
    identifier.trim().replace(' ', "_")
}

/// Join a site base and a page path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Upper-case the first letter of each word and lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<li>  Talk to <a>Prince\n  Rurik</a>, then\tleave. </li>");
        let li = doc.select(&Selector::parse("li").unwrap()).next().unwrap();
        assert_eq!(clean_text(li), "Talk to Prince Rurik, then leave.");
    }

    #[test]
    fn test_page_path() {
        assert_eq!(page_path("Against the Charr"), "Against_the_Charr");
        assert_eq!(page_path(" Meteor Shower "), "Meteor_Shower");
        assert_eq!(page_path("The_Path_to_Glory"), "The_Path_to_Glory");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://wiki.guildwars.com/wiki/", "/Healing_Breeze"),
            "https://wiki.guildwars.com/wiki/Healing_Breeze"
        );
        assert_eq!(
            join_url("https://wiki.guildwars.com/wiki", "Healing_Breeze"),
            "https://wiki.guildwars.com/wiki/Healing_Breeze"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("farming"), "Farming");
        assert_eq!(title_case("pve team builds"), "Pve Team Builds");
        assert_eq!(title_case(""), "");
    }
}
