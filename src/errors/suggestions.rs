//! Nearest-match suggestions for unresolved names.

/// Names this short are never matched against the symbol table.
const MIN_SUGGESTION_LENGTH: usize = 3;

/// Bound names within this edit distance are offered as suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Levenshtein distance with unit cost for insertion, deletion and
/// substitution, computed over the full `(m + 1) x (n + 1)` table.
pub fn levenshtein_distance(first: &str, second: &str) -> usize {
    let first = first.chars().collect::<Vec<char>>();
    let second = second.chars().collect::<Vec<char>>();
    let (m, n) = (first.len(), second.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if first[i - 1] == second[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[m][n]
}

/// Collects every candidate close enough to `name`, keeping the order the
/// candidates are given in.
pub fn suggest_names<'a, I>(name: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if name.chars().count() < MIN_SUGGESTION_LENGTH {
        return vec![];
    }

    candidates
        .into_iter()
        .filter(|candidate| candidate.as_str() != name)
        .filter(|candidate| levenshtein_distance(name, candidate) <= MAX_SUGGESTION_DISTANCE)
        .cloned()
        .collect()
}
