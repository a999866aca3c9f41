use std::error::Error;
use std::fmt;

use super::cluster::Cluster;

// Closest-pair pseudocode (planar divide and conquer):
//
// SlowClosestPair(P)
//    (d, i, j) = (inf, -1, -1)
//    for each ordered pair (u, v) in P, u != v
//       (d, i, j) = min((d, i, j), (dist(u, v), u, v))
//    return (d, i, j)
//
// FastClosestPair(P)   // P sorted ascending by horizontal coordinate
//    if |P| <= 3: return SlowClosestPair(P)
//    m = |P| / 2
//    (d, i, j) = min(FastClosestPair(P[0..m]),
//                    FastClosestPair(P[m..]) shifted right by m)
//    mid = (P[m - 1].x + P[m].x) / 2
//    return min((d, i, j), ClosestPairStrip(P, mid, d))
//
// ClosestPairStrip(P, mid, w)
//    S = indices of P with |x - mid| < w, sorted by vertical coordinate
//    check each member of S against its next 3 successors only
//    (packing bound: no more than 3 can be closer than w in the strip)

/// The two closest clusters in a list, by index
///
/// Indices always satisfy `idx1 < idx2`; the constructor canonicalizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPair {
    /// Euclidean distance between the two cluster centers
    pub distance: f64,
    /// Index of the first cluster in the searched list
    pub idx1: usize,
    /// Index of the second cluster in the searched list
    pub idx2: usize,
}

impl ClusterPair {
    /// Creates a pair result, swapping indices so that `idx1 < idx2`
    pub fn new(distance: f64, idx1: usize, idx2: usize) -> Self {
        if idx1 > idx2 {
            ClusterPair {
                distance,
                idx1: idx2,
                idx2: idx1,
            }
        } else {
            ClusterPair {
                distance,
                idx1,
                idx2,
            }
        }
    }

    /// Returns whichever of the two pairs has the smaller distance
    ///
    /// Ties keep `self`, so the first-found pair wins.
    fn min(self, other: ClusterPair) -> ClusterPair {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

/// Returned when a closest-pair function receives fewer than two clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairError {
    /// Number of clusters actually supplied
    pub found: usize,
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "closest pair needs at least 2 clusters, got {}",
            self.found
        )
    }
}

impl Error for PairError {}

/// Finds the closest pair of clusters by exhaustive O(N²) scan
///
/// Ties are broken by the first minimal pair found in iteration order.
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn slow_closest_pair(clusters: &[Cluster]) -> Result<ClusterPair, PairError> {
    if clusters.len() < 2 {
        return Err(PairError {
            found: clusters.len(),
        });
    }
    Ok(slow_pair(clusters))
}

/// Finds the closest pair of clusters by divide and conquer
///
/// `clusters` must be sorted ascending by `horiz_center`; the result is
/// meaningless otherwise. Runs in O(N log² N) against the slow scan's
/// O(N²), and both always agree on the minimum distance.
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn fast_closest_pair(clusters: &[Cluster]) -> Result<ClusterPair, PairError> {
    if clusters.len() < 2 {
        return Err(PairError {
            found: clusters.len(),
        });
    }
    Ok(fast_pair(clusters))
}

/// Finds the closest pair among clusters inside a vertical strip
///
/// The strip holds every cluster whose horizontal distance from
/// `horiz_center` is strictly less than `half_width`. Members are scanned
/// in `vert_center` order and each is compared against at most its next 3
/// successors. Returns `None` when fewer than two clusters fall inside
/// the strip; indices otherwise refer to positions in `clusters`.
pub fn closest_pair_strip(
    clusters: &[Cluster],
    horiz_center: f64,
    half_width: f64,
) -> Option<ClusterPair> {
    let mut strip: Vec<usize> = (0..clusters.len())
        .filter(|&idx| (clusters[idx].horiz_center() - horiz_center).abs() < half_width)
        .collect();
    strip.sort_by(|&a, &b| {
        clusters[a]
            .vert_center()
            .total_cmp(&clusters[b].vert_center())
    });

    if strip.len() < 2 {
        return None;
    }

    let mut best: Option<ClusterPair> = None;
    for u in 0..strip.len() - 1 {
        for v in u + 1..(u + 4).min(strip.len()) {
            let distance = clusters[strip[u]].distance(&clusters[strip[v]]);
            let candidate = ClusterPair::new(distance, strip[u], strip[v]);
            best = Some(match best {
                Some(pair) => pair.min(candidate),
                None => candidate,
            });
        }
    }
    best
}

/// Exhaustive scan; assumes at least two clusters
fn slow_pair(clusters: &[Cluster]) -> ClusterPair {
    let mut best = ClusterPair::new(f64::INFINITY, 0, 1);
    for idx_u in 0..clusters.len() {
        for idx_v in idx_u + 1..clusters.len() {
            let distance = clusters[idx_u].distance(&clusters[idx_v]);
            best = best.min(ClusterPair::new(distance, idx_u, idx_v));
        }
    }
    best
}

/// Divide-and-conquer recursion; assumes at least two sorted clusters
pub(super) fn fast_pair(clusters: &[Cluster]) -> ClusterPair {
    let num_clusters = clusters.len();
    if num_clusters <= 3 {
        return slow_pair(clusters);
    }

    let half = num_clusters / 2;
    let left_pair = fast_pair(&clusters[..half]);
    let right_pair = fast_pair(&clusters[half..]);

    // Right-half indices are relative to the sub-slice; shift them back
    // into this slice's index space before comparing.
    let best = left_pair.min(ClusterPair::new(
        right_pair.distance,
        right_pair.idx1 + half,
        right_pair.idx2 + half,
    ));

    // A closer pair may straddle the split; check the strip around the
    // midline between the two boundary clusters.
    let mid_point = (clusters[half - 1].horiz_center() + clusters[half].horiz_center()) / 2.0;
    match closest_pair_strip(clusters, mid_point, best.distance) {
        Some(strip_pair) => best.min(strip_pair),
        None => best,
    }
}
