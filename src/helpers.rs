use strsim::levenshtein;

/// Find the most similar parameter name from a list of candidates.
///
/// Only names within an edit distance of 2 are suggested.
pub fn find_similar_name<'a>(target: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}
