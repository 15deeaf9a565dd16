use crate::algorithms::geometry::GeoPoint;

/// Represents a cluster of reported locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    /// A representative location of the cluster. For seeded clustering it is the location of
    /// the point which started the cluster, for grid clustering it is the cell location.
    pub center: GeoPoint,
    /// Member locations in input order.
    pub members: Vec<GeoPoint>,
}

impl Cluster {
    /// Returns amount of members in the cluster.
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Represents the result of hotspot detection.
#[derive(Clone, Debug, Default)]
pub struct Hotspots {
    /// Clusters which reached minimum size, in order of creation.
    pub clusters: Vec<Cluster>,
    /// Total amount of input records.
    pub total: usize,
    /// Amount of input records skipped as malformed.
    pub skipped: usize,
    /// Amount of clusters formed before filtering by size.
    pub formed: usize,
}

impl Hotspots {
    /// Returns hotspot centers in order of cluster creation.
    pub fn centers(&self) -> Vec<GeoPoint> {
        self.clusters.iter().map(|cluster| cluster.center.clone()).collect()
    }

    /// Returns true if no hotspots were found.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
