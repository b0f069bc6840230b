use serde::{Deserialize, Serialize};

/// How reference and response tokens are paired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Positional pass, then first-fit over the leftovers regardless of order.
    #[default]
    Greedy,
    /// Longest common subsequence: only in-order matches count.
    Ordered,
}

impl AlignmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Ordered => "ordered",
        }
    }
}

impl std::fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlignmentPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "ordered" => Ok(Self::Ordered),
            other => anyhow::bail!("Unknown alignment policy '{}' (expected greedy or ordered)", other),
        }
    }
}

/// One-to-one pairs of matched `(reference_index, response_index)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pairs: Vec<(usize, usize)>,
    reference_matched: Vec<bool>,
    response_matched: Vec<bool>,
}

impl Alignment {
    fn new(reference_len: usize, response_len: usize) -> Self {
        Self {
            pairs: Vec::new(),
            reference_matched: vec![false; reference_len],
            response_matched: vec![false; response_len],
        }
    }

    fn add(&mut self, reference_idx: usize, response_idx: usize) {
        debug_assert!(!self.reference_matched[reference_idx]);
        debug_assert!(!self.response_matched[response_idx]);
        self.reference_matched[reference_idx] = true;
        self.response_matched[response_idx] = true;
        self.pairs.push((reference_idx, response_idx));
    }

    /// Matched pairs in the order they were found.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_reference_matched(&self, idx: usize) -> bool {
        self.reference_matched.get(idx).copied().unwrap_or(false)
    }

    pub fn is_response_matched(&self, idx: usize) -> bool {
        self.response_matched.get(idx).copied().unwrap_or(false)
    }

    /// Reference indices absent from the alignment, ascending.
    pub fn unmatched_reference(&self) -> Vec<usize> {
        unmatched(&self.reference_matched)
    }

    /// Response indices absent from the alignment, ascending.
    pub fn unmatched_response(&self) -> Vec<usize> {
        unmatched(&self.response_matched)
    }
}

fn unmatched(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, matched)| !**matched)
        .map(|(i, _)| i)
        .collect()
}

pub fn align(reference: &[String], response: &[String], policy: AlignmentPolicy) -> Alignment {
    match policy {
        AlignmentPolicy::Greedy => align_greedy(reference, response),
        AlignmentPolicy::Ordered => align_ordered(reference, response),
    }
}

/// Two-phase greedy alignment.
///
/// Phase 1 pairs equal tokens sitting at the same index. Phase 2 walks the
/// leftover reference indices in order and gives each the first leftover
/// response index holding an equal token. Assignments are never revisited, so
/// the result is not always a maximum matching; historical scores depend on
/// exactly this behavior.
pub fn align_greedy(reference: &[String], response: &[String]) -> Alignment {
    let mut alignment = Alignment::new(reference.len(), response.len());

    for (i, (r, m)) in reference.iter().zip(response.iter()).enumerate() {
        if r == m {
            alignment.add(i, i);
        }
    }

    // Ordered Vec, not a set: first-fit must scan ascending response indices
    let mut open_response = alignment.unmatched_response();
    for ref_idx in alignment.unmatched_reference() {
        let found = open_response
            .iter()
            .position(|&resp_idx| response[resp_idx] == reference[ref_idx]);
        if let Some(pos) = found {
            let resp_idx = open_response.remove(pos);
            alignment.add(ref_idx, resp_idx);
        }
    }

    alignment
}

/// Longest-common-subsequence alignment.
///
/// Equal heads are always taken. Otherwise the response token is skipped when
/// that loses nothing, which keeps matches on the earliest reference indices.
pub fn align_ordered(reference: &[String], response: &[String]) -> Alignment {
    let n = reference.len();
    let m = response.len();
    let mut alignment = Alignment::new(n, m);

    // lcs[i][j] = LCS length of reference[i..] and response[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if reference[i] == response[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if reference[i] == response[j] {
            alignment.add(i, j);
            i += 1;
            j += 1;
        } else if lcs[i][j + 1] >= lcs[i + 1][j] {
            j += 1;
        } else {
            i += 1;
        }
    }

    alignment
}
