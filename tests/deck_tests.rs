use std::io::Write;

use slidenav::deck::{Deck, DeckSource, Section, SlideDocument};
use slidenav::errors::SlidenavError;
use tempfile::NamedTempFile;

const DECK: &str = r#"<!doctype html>
<html>
<body>
  <section id="slide0"><h1>Welcome</h1><p>Press space</p></section>
  <section id="slide1"><h2>Agenda</h2><ul><li>one</li><li>two</li></ul></section>
  <section id="appendix"><h1>Appendix</h1></section>
</body>
</html>
"#;

fn write_deck(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let deck = Deck::parse(DECK).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slide_count(), 3);

        let sections = deck.sections();
        assert_eq!(sections[0].id.as_deref(), Some("slide0"));
        assert_eq!(sections[0].title.as_deref(), Some("Welcome"));
        assert_eq!(sections[0].body, vec!["Press space"]);
        assert_eq!(sections[1].title.as_deref(), Some("Agenda"));
        assert_eq!(sections[1].body, vec!["• one", "• two"]);
        assert_eq!(sections[2].id.as_deref(), Some("appendix"));
    }

    #[test]
    fn test_empty_input_is_empty_deck() {
        let deck = Deck::parse("<p>no slides here</p>").unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn test_unterminated_section_tag() {
        let err = Deck::parse(r#"<section id="slide0""#).unwrap_err();
        assert!(matches!(err, SlidenavError::DeckParse(_)));
    }

    #[test]
    fn test_unquoted_attribute_values() {
        let deck = Deck::parse(
            "<section id=slide0 title=it's>a</section>\
             <section id=slide1>b</section>\
             <section id=slide2 title='c'>c</section>",
        )
        .unwrap();
        assert_eq!(deck.slide_count(), 3);
        let ids: Vec<_> = deck.sections().iter().map(|s| s.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("slide0"), Some("slide1"), Some("slide2")]);
    }

    #[test]
    fn test_literal_less_than_in_text() {
        let deck = Deck::parse("<section id=slide0><p>x < y</p><p>z</p></section>").unwrap();
        assert_eq!(deck.sections()[0].body, vec!["x < y", "", "z"]);
    }

    #[test]
    fn test_new_from_sections() {
        let deck = Deck::new(vec![
            Section {
                id: Some("slide0".to_string()),
                title: Some("Intro".to_string()),
                body: vec![],
            },
            Section {
                id: None,
                title: None,
                body: vec!["untargetable".to_string()],
            },
        ]);
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.target("slide0"), Some("slide0"));
        assert_eq!(deck.visible_section(Some("slide0")).map(|(i, _)| i), Some(0));
        let parsed =
            Deck::parse("<section id=slide0><h1>Intro</h1></section><section>untargetable</section>")
                .unwrap();
        assert_eq!(deck, parsed);
    }

    #[test]
    fn test_target_requires_slide_prefix() {
        let deck = Deck::parse(DECK).unwrap();
        assert_eq!(deck.target("slide1"), Some("slide1"));
        assert_eq!(deck.target("appendix"), None);
        assert_eq!(deck.target("slide9"), None);
        assert_eq!(deck.target(""), None);
    }

    #[test]
    fn test_visible_section_matches_any_id() {
        let deck = Deck::parse(DECK).unwrap();

        let (index, section) = deck.visible_section(Some("slide1")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(section.title.as_deref(), Some("Agenda"));

        let (index, _) = deck.visible_section(Some("appendix")).unwrap();
        assert_eq!(index, 2);

        assert!(deck.visible_section(Some("missing")).is_none());
        assert!(deck.visible_section(Some("")).is_none());
        assert!(deck.visible_section(None).is_none());
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = Deck::load("/nonexistent/deck.html").unwrap_err();
        assert!(matches!(err, SlidenavError::FileOperation(_)));
        assert!(err.message().contains("/nonexistent/deck.html"));
    }

    #[test]
    fn test_open_reads_file() {
        let file = write_deck(DECK);
        let source = DeckSource::open(file.path()).unwrap();
        assert_eq!(source.path(), file.path());
        assert_eq!(source.deck().len(), 3);
    }

    #[test]
    fn test_refresh_without_change() {
        let file = write_deck(DECK);
        let mut source = DeckSource::open(file.path()).unwrap();
        assert!(!source.refresh().unwrap());
        assert_eq!(source.deck().len(), 3);
    }

    #[test]
    fn test_refresh_picks_up_added_section() {
        let file = write_deck(DECK);
        let mut source = DeckSource::open(file.path()).unwrap();

        let grown = DECK.replace(
            "</body>",
            "  <section id=\"slide3\"><h1>Extra</h1></section>\n</body>",
        );
        std::fs::write(file.path(), grown).unwrap();

        assert!(source.refresh().unwrap());
        assert_eq!(source.deck().len(), 4);
        assert_eq!(source.deck().target("slide3"), Some("slide3"));
    }

    #[test]
    fn test_refresh_sees_same_length_edit() {
        let file = write_deck(DECK);
        let mut source = DeckSource::open(file.path()).unwrap();
        assert_eq!(source.deck().target("slide1"), Some("slide1"));

        // Same byte length, written straight after the first version
        let renamed = DECK.replace("id=\"slide1\"", "id=\"slide2\"");
        assert_eq!(renamed.len(), DECK.len());
        std::fs::write(file.path(), renamed).unwrap();

        assert!(source.refresh().unwrap());
        assert_eq!(source.deck().target("slide1"), None);
        assert_eq!(source.deck().target("slide2"), Some("slide2"));
    }

    #[test]
    fn test_failed_reload_keeps_previous_deck() {
        let file = write_deck(DECK);
        let mut source = DeckSource::open(file.path()).unwrap();

        std::fs::write(file.path(), "<section id=\"broken\"").unwrap();
        assert!(source.refresh().is_err());
        assert_eq!(source.deck().len(), 3);
    }

    #[test]
    fn test_explicit_reload() {
        let file = write_deck(DECK);
        let mut source = DeckSource::open(file.path()).unwrap();
        std::fs::write(file.path(), "<section id=\"slide0\"></section>").unwrap();
        source.reload().unwrap();
        assert_eq!(source.deck().len(), 1);
    }
}
