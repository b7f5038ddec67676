//! Level assignment: clustering heading font sizes into H1, H2, ...

use std::cmp::Ordering;

use crate::model::{HeadingCandidate, SemanticBlock};

/// Cluster the distinct heading sizes and assign each candidate the
/// ordinal of the nearest cluster (1-based; largest cluster is level 1).
///
/// Clustering walks the distinct sizes in descending order, absorbing a
/// size into the current cluster while it lies within `tolerance` of the
/// cluster's running average, and starting a new cluster otherwise. A
/// candidate equidistant between two cluster averages takes the lower
/// ordinal.
pub fn assign_levels(headings: Vec<SemanticBlock>, tolerance: f32) -> Vec<HeadingCandidate> {
    if headings.is_empty() {
        return Vec::new();
    }

    let level_sizes = cluster_sizes(&distinct_sizes_descending(&headings), tolerance);
    log::debug!(
        "detected {} heading levels with effective sizes {:?}",
        level_sizes.len(),
        level_sizes
    );

    headings
        .into_iter()
        .map(|block| {
            let level = nearest_level(&level_sizes, block.font_size);
            HeadingCandidate { block, level }
        })
        .collect()
}

/// Distinct font sizes across the candidates, largest first.
fn distinct_sizes_descending(headings: &[SemanticBlock]) -> Vec<f32> {
    let mut sizes: Vec<f32> = headings.iter().map(|h| h.font_size).collect();
    sizes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    sizes.dedup();
    sizes
}

/// Running-average clustering of descending sizes. Returns the final
/// average size of each cluster, still in descending order.
fn cluster_sizes(sizes_desc: &[f32], tolerance: f32) -> Vec<f32> {
    let mut levels = Vec::new();
    let Some((&first, rest)) = sizes_desc.split_first() else {
        return levels;
    };

    let mut avg = first;
    let mut count = 1usize;
    for &size in rest {
        if (avg - size) < tolerance {
            avg = (avg * count as f32 + size) / (count + 1) as f32;
            count += 1;
        } else {
            levels.push(avg);
            avg = size;
            count = 1;
        }
    }
    levels.push(avg);
    levels
}

/// 1-based ordinal of the cluster average closest to `size`; exact ties
/// keep the first (larger) cluster.
fn nearest_level(level_sizes: &[f32], size: f32) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, &level_size) in level_sizes.iter().enumerate() {
        let dist = (level_size - size).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best + 1
}
