use crate::models::Entry;

/// Ordering applied to match results before they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    /// Lexicographic ascending by name (project flow)
    Name,
    /// Most recently modified first (workspace flow)
    Recency,
}

/// Sort `matches` by `key`
///
/// The sort is stable: entries with equal keys keep their relative input order.
pub fn order<E: Entry>(mut matches: Vec<E>, key: RankKey) -> Vec<E> {
    match key {
        RankKey::Name => matches.sort_by(|a, b| a.name().cmp(b.name())),
        RankKey::Recency => matches.sort_by(|a, b| b.modified().cmp(&a.modified())),
    }
    matches
}
