//! String similarity ratios used by the fuzzy stage.

use strum::{Display, EnumString, VariantNames};

/// Similarity measure for the fuzzy fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, VariantNames, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Similarity {
    /// Ratcliff/Obershelp matching-blocks ratio.
    #[default]
    Gestalt,
    /// Normalized Levenshtein distance.
    Levenshtein,
}

impl Similarity {
    /// Ratio in `[0, 1]` between `keyword` and `text`.
    #[must_use]
    pub fn ratio(self, keyword: &[char], text: &[char]) -> f64 {
        match self {
            Similarity::Gestalt => gestalt_ratio(keyword, text),
            Similarity::Levenshtein => {
                let a: String = keyword.iter().collect();
                let b: String = text.iter().collect();
                strsim::normalized_levenshtein(&a, &b)
            }
        }
    }

    /// Cheap upper bound on `ratio`, when one exists.
    #[must_use]
    pub fn upper_bound(self, keyword_len: usize, text_len: usize) -> f64 {
        match self {
            Similarity::Gestalt => {
                let total = keyword_len + text_len;
                if total == 0 {
                    1.0
                } else {
                    to_f64(2 * keyword_len.min(text_len)) / to_f64(total)
                }
            }
            Similarity::Levenshtein => 1.0,
        }
    }
}

/// `2 * M / (|a| + |b|)` where `M` is the number of characters in matching
/// blocks.
#[must_use]
fn gestalt_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    to_f64(2 * matching_chars(a, b)) / to_f64(total)
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}

/// Total size of the matching blocks between `a` and `b`.
///
/// Takes the longest common block, then recurses into the regions to its
/// left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest block with `a[i..i+k] == b[j..j+k]` inside the given ranges.
///
/// Ties go to the block that ends earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

    // prev[j + 1] holds the length of the match ending at (i - 1, j).
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        curr.fill(0);
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = prev[j] + 1;
            curr[j + 1] = k;
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_i, best_j, best_k)
}
