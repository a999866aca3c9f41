use super::closest_pair::fast_pair;
use super::cluster::Cluster;

/// Reduces a list of clusters to `num_clusters` by repeated closest-pair
/// merging (agglomerative clustering)
///
/// Works on a cloned copy; the caller's list is never touched. Each
/// iteration removes the two closest clusters and replaces them with
/// their merge, so the cluster count drops by exactly one per step and
/// the total population is conserved throughout. Output order is
/// unspecified.
///
/// If `num_clusters` is at least the input length the clone is returned
/// unchanged.
pub fn hierarchical_clustering(clusters: &[Cluster], num_clusters: usize) -> Vec<Cluster> {
    let mut working: Vec<Cluster> = clusters.to_vec();

    while working.len() > num_clusters {
        if working.len() < 2 {
            break;
        }
        // The fast finder requires its input sorted by horizontal center;
        // merging perturbs centers, so re-sort every iteration.
        working.sort_by(|a, b| a.horiz_center().total_cmp(&b.horiz_center()));
        let pair = fast_pair(&working);

        // idx1 < idx2 always, so removing idx2 first leaves idx1 valid.
        let absorbed = working.swap_remove(pair.idx2);
        working[pair.idx1].merge(&absorbed);
    }

    working
}
