//! Package clustering implements agglomerative (hierarchical) and k-means
//! clustering over weighted geographic points, built on a planar
//! divide-and-conquer closest-pair search
pub mod closest_pair;
pub mod cluster;
pub mod distortion;
pub mod hierarchical;
pub mod kmeans;

#[cfg(test)]
mod cluster_test;

pub use cluster::Cluster;
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use closest_pair::{ClusterPair, PairError, closest_pair_strip, fast_closest_pair, slow_closest_pair};
#[allow(unused_imports)]
pub use distortion::{cluster_error, compute_distortion};
#[allow(unused_imports)]
pub use hierarchical::hierarchical_clustering;
#[allow(unused_imports)]
pub use kmeans::kmeans_clustering;
