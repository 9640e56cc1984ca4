//! In-memory refinement of an already-fetched result set.
//!
//! Users recall commands imprecisely, so a record passes a stage when the
//! query is either a plain substring of the field or a fuzzy match against
//! it. Fuzzy acceptance is SkimMatcherV2 returning any score, i.e. the
//! query is a smart-case subsequence of the field.

use crate::query::SearchFilters;
use crate::store::CommandStore;
use cmdbook_types::{Command, StoreError, StoreResult};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::debug;

fn is_match(matcher: &SkimMatcherV2, haystack: &str, query: &str) -> bool {
    haystack.contains(query) || matcher.fuzzy_match(haystack, query).is_some()
}

/// Keep the records whose command text matches `query`.
pub fn by_command(records: Vec<Command>, query: &str) -> Vec<Command> {
    let matcher = SkimMatcherV2::default();
    records
        .into_iter()
        .filter(|record| is_match(&matcher, &record.command, query))
        .collect()
}

/// Keep the records whose alias matches `query`.
pub fn by_alias(records: Vec<Command>, query: &str) -> Vec<Command> {
    let matcher = SkimMatcherV2::default();
    records
        .into_iter()
        .filter(|record| is_match(&matcher, &record.alias, query))
        .collect()
}

/// Progressive search: the highest-precedence non-empty criterion (tag,
/// then command, then alias) queries storage once; every later criterion
/// refines the previous stage's output in memory. Storage is never
/// re-queried after a stage has produced results, so the set narrows
/// monotonically.
pub fn cascade(store: &CommandStore, filters: &SearchFilters) -> StoreResult<Vec<Command>> {
    if filters.is_empty() {
        return Err(StoreError::InvalidFilters);
    }

    let mut results: Option<Vec<Command>> = None;

    if !filters.tag.is_empty() {
        results = Some(store.search(&SearchFilters::tag(filters.tag.clone()))?);
    }

    if !filters.command.is_empty() {
        results = Some(match results {
            Some(records) => by_command(records, &filters.command),
            None => store.search(&SearchFilters::command(filters.command.clone()))?,
        });
    }

    if !filters.alias.is_empty() {
        results = Some(match results {
            Some(records) => by_alias(records, &filters.alias),
            None => store.search(&SearchFilters::alias(filters.alias.clone()))?,
        });
    }

    let results = results.unwrap_or_default();
    debug!("cascade narrowed to {} commands", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use tempfile::TempDir;

    fn record(alias: &str, command: &str) -> Command {
        Command {
            id: Some(1),
            alias: alias.to_string(),
            command: command.to_string(),
            tags: String::new(),
            note: String::new(),
            last_used: 0,
        }
    }

    #[test]
    fn test_substring_match_passes() {
        let records = vec![record("ls-la", "ls -la"), record("push", "git push")];
        let kept = by_command(records, "git");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].command, "git push");
    }

    #[test]
    fn test_fuzzy_only_match_passes() {
        // "gcm" is not a substring but is a subsequence of the command
        let records = vec![record("commit", "git commit -m"), record("ls", "ls -la")];
        let kept = by_command(records, "gcm");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].command, "git commit -m");
    }

    #[test]
    fn test_unrelated_query_rejects_all() {
        let records = vec![record("ls-la", "ls -la"), record("push", "git push")];
        assert!(by_command(records, "xqz").is_empty());
    }

    #[test]
    fn test_by_alias_matches_alias_field_only() {
        let records = vec![record("deploy", "kubectl apply"), record("push", "git push")];
        let kept = by_alias(records, "dep");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].alias, "deploy");
    }

    fn seeded_store(dir: &TempDir) -> CommandStore {
        let db = Db::new(dir.path().join("commands.db")).unwrap();
        let store = CommandStore::new(db);
        store.add("ls-la", "ls -la", "fs,list", "").unwrap();
        store.add("ls-tmp", "ls /tmp", "fs", "").unwrap();
        store.add("push", "git push origin", "vcs", "").unwrap();
        store
    }

    #[test]
    fn test_cascade_requires_a_filter() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(matches!(
            cascade(&store, &SearchFilters::default()),
            Err(StoreError::InvalidFilters)
        ));
    }

    #[test]
    fn test_cascade_tag_then_command_narrows() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let filters = SearchFilters {
            command: "tmp".to_string(),
            alias: String::new(),
            tag: "fs".to_string(),
        };
        let found = cascade(&store, &filters).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "ls /tmp");
    }

    #[test]
    fn test_cascade_single_alias_filter_queries_storage() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let found = cascade(&store, &SearchFilters::alias("push")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "git push origin");
    }

    #[test]
    fn test_cascade_keeps_refining_an_empty_stage() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        // the tag stage matches nothing; later stages must refine that
        // empty set instead of falling back to a fresh storage query
        let filters = SearchFilters {
            command: "ls".to_string(),
            alias: String::new(),
            tag: "network".to_string(),
        };
        let found = cascade(&store, &filters).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_cascade_all_three_stages() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let filters = SearchFilters {
            command: "ls".to_string(),
            alias: "la".to_string(),
            tag: "fs".to_string(),
        };
        let found = cascade(&store, &filters).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].alias, "ls-la");
    }
}
