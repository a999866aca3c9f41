use std::collections::HashMap;

use super::cluster::Cluster;

/// Squared-distance error of one cluster against the original records
///
/// `table` is the singleton-cluster list the clustering was built from.
/// The error is the sum, over every record folded into `cluster`, of the
/// record's population times its squared distance to the cluster center.
/// Ids not present in `table` contribute nothing.
#[allow(dead_code)] // Part of public API, may be used by external code
pub fn cluster_error(cluster: &Cluster, table: &[Cluster]) -> f64 {
    let index = table_index(table);
    single_cluster_error(cluster, table, &index)
}

/// Total distortion of a clustering: the sum of [`cluster_error`] over
/// every output cluster
pub fn compute_distortion(clusters: &[Cluster], table: &[Cluster]) -> f64 {
    let index = table_index(table);
    clusters
        .iter()
        .map(|cluster| single_cluster_error(cluster, table, &index))
        .sum()
}

/// Maps record id to its row in the table, first row winning duplicates
fn table_index(table: &[Cluster]) -> HashMap<&str, usize> {
    let mut index = HashMap::new();
    for (row, record) in table.iter().enumerate() {
        for id in record.ids() {
            index.entry(id.as_str()).or_insert(row);
        }
    }
    index
}

fn single_cluster_error(
    cluster: &Cluster,
    table: &[Cluster],
    index: &HashMap<&str, usize>,
) -> f64 {
    let mut total_error = 0.0;
    for id in cluster.ids() {
        if let Some(&row) = index.get(id.as_str()) {
            let record = &table[row];
            let distance = cluster.distance(record);
            total_error += record.total_population() * distance * distance;
        }
    }
    total_error
}
