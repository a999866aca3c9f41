use std::collections::BTreeSet;

use super::cluster::Cluster;

/// Clusters a list into `num_clusters` groups by k-means iteration
///
/// Seeding is deterministic: the initial centers are the positions of the
/// first `num_clusters` entries of `clusters` (`num_clusters` is clamped
/// to the input length). Each round builds fresh empty accumulators,
/// merges every input cluster into the accumulator with the nearest
/// center (ties go to the lowest center index), then adopts the
/// accumulator centroids as the next round's centers.
///
/// The loop always runs exactly `num_iterations` rounds; convergence is
/// not checked. The input list is never mutated. With zero iterations the
/// result is `num_clusters` empty clusters positioned at the seed
/// centers.
pub fn kmeans_clustering(
    clusters: &[Cluster],
    num_clusters: usize,
    num_iterations: usize,
) -> Vec<Cluster> {
    let num_clusters = num_clusters.min(clusters.len());

    let mut centers: Vec<(f64, f64)> = clusters[..num_clusters]
        .iter()
        .map(|cluster| (cluster.horiz_center(), cluster.vert_center()))
        .collect();

    let mut accumulators: Vec<Cluster> = centers
        .iter()
        .map(|&(horiz, vert)| at_position(horiz, vert))
        .collect();

    for _ in 0..num_iterations {
        accumulators = vec![Cluster::empty(); num_clusters];

        for cluster in clusters {
            let nearest = nearest_center(&centers, cluster);
            accumulators[nearest].merge(cluster);
        }

        // An accumulator that received nothing keeps its empty (0, 0)
        // center and feeds that into the next round.
        for (center, accumulator) in centers.iter_mut().zip(&accumulators) {
            *center = (accumulator.horiz_center(), accumulator.vert_center());
        }
    }

    accumulators
}

/// Index of the center closest to a cluster, first-found on ties
fn nearest_center(centers: &[(f64, f64)], cluster: &Cluster) -> usize {
    let mut nearest = 0;
    let mut nearest_dist = f64::INFINITY;
    for (idx, &(horiz, vert)) in centers.iter().enumerate() {
        let horiz_dist = horiz - cluster.horiz_center();
        let vert_dist = vert - cluster.vert_center();
        let dist = (horiz_dist * horiz_dist + vert_dist * vert_dist).sqrt();
        if dist < nearest_dist {
            nearest_dist = dist;
            nearest = idx;
        }
    }
    nearest
}

/// Empty cluster pinned at a seed position
fn at_position(horiz: f64, vert: f64) -> Cluster {
    Cluster::new(BTreeSet::new(), horiz, vert, 0.0, 0.0)
}
