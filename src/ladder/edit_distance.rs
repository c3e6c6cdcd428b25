//! Levenshtein distance and the one-edit adjacency relation.

/// Computes the Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. Works on `char`s,
/// so multi-byte letters count as a single position.
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    levenshtein(&a, &b)
}

/// Returns true when the edit distance between `s1` and `s2` is at most `threshold`.
///
/// Strings whose lengths differ by more than `threshold` are rejected before
/// the table is built.
pub fn edit_distance_within(s1: &str, s2: &str, threshold: usize) -> bool {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.len().abs_diff(b.len()) > threshold {
        return false;
    }

    levenshtein(&a, &b) <= threshold
}

/// Two words are adjacent when one edit turns one into the other.
///
/// A word is adjacent to itself (distance 0).
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    edit_distance_within(word1, word2, 1)
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j] // deletion
                    .min(dp[i][j - 1]) // insertion
                    .min(dp[i - 1][j - 1]) // substitution
            };
        }
    }

    dp[m][n]
}
