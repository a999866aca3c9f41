//! Package clustering implements agglomerative and k-means clustering
//! over weighted geographic points

use std::collections::BTreeSet;
use std::fmt;

/// Cluster represents a weighted centroid aggregate of one or more
/// geographic records
///
/// A cluster starts life as a singleton wrapping one input record and
/// grows by absorbing other clusters via [`Cluster::merge`]. The center
/// and risk are always the population-weighted averages of every record
/// folded in so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    ids: BTreeSet<String>,
    horiz_center: f64,
    vert_center: f64,
    total_population: f64,
    averaged_risk: f64,
}

impl Cluster {
    /// Creates a cluster from explicit parts
    pub fn new(
        ids: BTreeSet<String>,
        horiz_center: f64,
        vert_center: f64,
        total_population: f64,
        averaged_risk: f64,
    ) -> Self {
        Cluster {
            ids,
            horiz_center,
            vert_center,
            total_population,
            averaged_risk,
        }
    }

    /// Creates a singleton cluster wrapping one input record
    pub fn singleton(
        id: impl Into<String>,
        horiz_center: f64,
        vert_center: f64,
        total_population: f64,
        averaged_risk: f64,
    ) -> Self {
        let mut ids = BTreeSet::new();
        ids.insert(id.into());
        Cluster {
            ids,
            horiz_center,
            vert_center,
            total_population,
            averaged_risk,
        }
    }

    /// Creates an empty accumulator cluster (no ids, population 0)
    ///
    /// Used by the k-means driver as a per-round accumulator; the first
    /// merge into it adopts the merged cluster's center and risk outright
    /// because the accumulator carries zero weight.
    pub fn empty() -> Self {
        Cluster {
            ids: BTreeSet::new(),
            horiz_center: 0.0,
            vert_center: 0.0,
            total_population: 0.0,
            averaged_risk: 0.0,
        }
    }

    /// Identifiers of the records folded into this cluster
    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    /// Horizontal coordinate of the weighted center
    pub fn horiz_center(&self) -> f64 {
        self.horiz_center
    }

    /// Vertical coordinate of the weighted center
    pub fn vert_center(&self) -> f64 {
        self.vert_center
    }

    /// Total population weight of the folded-in records
    pub fn total_population(&self) -> f64 {
        self.total_population
    }

    /// Population-weighted average risk of the folded-in records
    pub fn averaged_risk(&self) -> f64 {
        self.averaged_risk
    }

    /// Checks whether this cluster has absorbed no records yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.total_population == 0.0
    }

    /// Returns the Euclidean distance between the two cluster centers
    pub fn distance(&self, other: &Cluster) -> f64 {
        let horiz_dist = self.horiz_center - other.horiz_center;
        let vert_dist = self.vert_center - other.vert_center;
        (horiz_dist * horiz_dist + vert_dist * vert_dist).sqrt()
    }

    /// Merges another cluster into this one in place
    ///
    /// The new center and risk are the population-weighted averages of the
    /// two constituents and the id sets are unioned. Merging an empty
    /// cluster is a no-op. If both sides carry zero population the id sets
    /// are still unioned but the center and risk stay put (no weight to
    /// average by).
    pub fn merge(&mut self, other: &Cluster) {
        if other.is_empty() {
            return;
        }

        self.ids.extend(other.ids.iter().cloned());

        let new_population = self.total_population + other.total_population;
        if new_population > 0.0 {
            let self_weight = self.total_population / new_population;
            let other_weight = other.total_population / new_population;
            self.horiz_center =
                self_weight * self.horiz_center + other_weight * other.horiz_center;
            self.vert_center = self_weight * self.vert_center + other_weight * other.vert_center;
            self.averaged_risk =
                self_weight * self.averaged_risk + other_weight * other.averaged_risk;
        }
        self.total_population = new_population;
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in &self.ids {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", id)?;
            first = false;
        }
        write!(
            f,
            " ({}, {}) pop={} risk={}",
            self.horiz_center, self.vert_center, self.total_population, self.averaged_risk
        )
    }
}
