//! This module contains an implementation of greedy single pass seeded clustering: every item
//! joins the first cluster whose seed is close enough, otherwise it becomes a seed of a new one.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/seeded_test.rs"]
mod seeded_test;

use crate::utils::Float;

/// Represents a cluster of items. The first item is the seed of the cluster.
pub type Cluster<'a, T> = Vec<&'a T>;

/// Creates clusters of items using first-fit seeded clustering.
/// `items`: items to cluster, processed in their iteration order.
/// `radius`: max distance between item and cluster's seed, inclusive.
/// `distance_fn`: a function which returns distance between two items.
///
/// Seeds never move: a cluster is always represented by its first item. Items are compared with
/// seeds only, so two members of the same cluster can be up to `2 * radius` apart.
pub fn create_clusters<'a, T, IS, FN>(items: IS, radius: Float, distance_fn: FN) -> Vec<Cluster<'a, T>>
where
    IS: IntoIterator<Item = &'a T>,
    FN: Fn(&T, &T) -> Float,
{
    items.into_iter().fold(Vec::<Cluster<'a, T>>::new(), |mut clusters, item| {
        match clusters.iter_mut().find(|cluster| distance_fn(item, cluster[0]) <= radius) {
            Some(cluster) => cluster.push(item),
            None => clusters.push(vec![item]),
        }

        clusters
    })
}
