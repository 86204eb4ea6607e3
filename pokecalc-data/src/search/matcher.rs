use crate::{
    DataStore,
    hiragana_to_katakana,
    katakana_to_hiragana,
    romaji_to_hiragana,
    search::romaji::romaji_entry,
};

/// Checks if a candidate name matches a search query, for incremental filtering.
///
/// If the candidate is the primary name of a species in the data store, the species' secondary
/// name is also matched. A failed lookup only skips that stage.
pub fn matches_search<D>(data: &D, candidate: &str, query: &str) -> bool
where
    D: DataStore + ?Sized,
{
    let secondary_name = match data.find_species(&|species| species.name == candidate) {
        Ok(species) => species.map(|species| species.name_en),
        Err(err) => {
            log::warn!("Failed to look up species {candidate} for search: {err:#}");
            None
        }
    };
    matches_search_with_secondary_name(candidate, secondary_name.as_deref(), query)
}

/// Checks if a candidate name matches a search query.
///
/// Stages are tried in order, and the first success wins:
/// 1. Substring of the candidate, ignoring case.
/// 1. Substring of the candidate's secondary name, ignoring case.
/// 1. The query is a curated romaji entry whose katakana form is in the candidate.
/// 1. The query converted between hiragana and katakana is in the candidate.
/// 1. The query transliterated from romaji to hiragana (or further to katakana) is in the
///    candidate.
///
/// A blank query matches everything.
pub fn matches_search_with_secondary_name(
    candidate: &str,
    secondary_name: Option<&str>,
    query: &str,
) -> bool {
    let normalized_query = query.trim().to_lowercase();
    if normalized_query.is_empty() {
        return true;
    }
    let normalized_candidate = candidate.to_lowercase();
    let contains = |needle: &str| normalized_candidate.contains(&needle.to_lowercase());

    if normalized_candidate.contains(&normalized_query) {
        return true;
    }

    if secondary_name.is_some_and(|name| name.to_lowercase().contains(&normalized_query)) {
        return true;
    }

    if romaji_entry(&normalized_query)
        .is_some_and(|hiragana| contains(&hiragana_to_katakana(hiragana)))
    {
        return true;
    }

    if contains(&hiragana_to_katakana(query)) || contains(&katakana_to_hiragana(query)) {
        return true;
    }

    let transliterated = romaji_to_hiragana(&normalized_query);
    transliterated != normalized_query
        && (contains(&transliterated) || contains(&hiragana_to_katakana(&transliterated)))
}

#[cfg(test)]
mod matcher_test {
    use crate::{
        LocalDataStore,
        matches_search,
        matches_search_with_secondary_name,
    };

    fn matches(candidate: &str, query: &str) -> bool {
        matches_search_with_secondary_name(candidate, None, query)
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches("ピカチュウ", ""));
        assert!(matches("ピカチュウ", "   "));
    }

    #[test]
    fn matches_substring_ignoring_case() {
        assert!(matches("ピカチュウ", "カチュ"));
        assert!(matches("Pikachu", "PIKA"));
        assert!(!matches("ピカチュウ", "ライ"));
    }

    #[test]
    fn matches_secondary_name() {
        assert!(matches_search_with_secondary_name(
            "ゲンガー",
            Some("gengar"),
            "Geng"
        ));
        assert!(!matches_search_with_secondary_name(
            "ゲンガー",
            Some("gengar"),
            "mew"
        ));
    }

    #[test]
    fn matches_curated_romaji_entry() {
        assert!(matches("ピカチュウ", "pikachu"));
        assert!(matches("ヒトカゲ", "Hitokage"));
        assert!(matches("たいあたり", "taiatari"));
    }

    #[test]
    fn matches_across_kana_scripts() {
        assert!(matches("ピカチュウ", "ぴかちゅう"));
        assert!(matches("ゲンガー", "げんが"));
        assert!(matches("たいあたり", "タイアタリ"));
    }

    #[test]
    fn matches_transliterated_romaji() {
        assert!(matches("ゲンガー", "genga"));
        assert!(matches("ロトム", "rotomu"));
        assert!(matches("なみのり", "namino"));
    }

    #[test]
    fn unlisted_syllables_do_not_match() {
        assert!(!matches("ミミッキュ", "mimikkyu"));
        assert!(!matches("ゲンガー", "xyz"));
    }

    #[test]
    fn matches_species_in_bundled_data() {
        let store = LocalDataStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../data")).unwrap();
        assert!(matches_search(&store, "ガブリアス", "garchomp"));
        assert!(matches_search(&store, "ピカチュウ", "Pika"));
        assert!(matches_search(&store, "フシギダネ", "fushigidane"));
        assert!(matches_search(&store, "ゲンガー", "げんが"));
        assert!(!matches_search(&store, "ミュウ", "ぴか"));
        // Not a species, so only the candidate itself is searched.
        assert!(matches_search(&store, "なみのり", "nami"));
        assert!(!matches_search(&store, "なみのり", "surf"));
    }
}
