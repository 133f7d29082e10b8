//! Cross-image merging of partial extraction results
//!
//! Each successfully processed source contributes its dominant color
//! list; failed sources contribute nothing. Colors are folded into
//! clusters in input order, so the merge is a deterministic reduction
//! over whatever subset of sources succeeded.

use crate::color::hue_distance;
use crate::constants::merge;
use crate::ExtractedColor;

struct Cluster {
    representative: ExtractedColor,
    frequency: f32,
    count: u32,
}

impl Cluster {
    fn seed(color: &ExtractedColor) -> Self {
        Self {
            representative: color.clone(),
            frequency: color.frequency,
            count: 1,
        }
    }

    fn absorbs(&self, color: &ExtractedColor) -> bool {
        hue_distance(self.representative.hsl.h, color.hsl.h) < merge::MAX_HUE_DISTANCE
            && (self.representative.hsl.s - color.hsl.s).abs() < merge::MAX_SATURATION_DISTANCE
    }

    fn fold(&mut self, color: &ExtractedColor) {
        // Running average weighted by how many colors the cluster holds
        self.frequency =
            (self.frequency * self.count as f32 + color.frequency) / (self.count as f32 + 1.0);
        self.count += 1;
    }
}

/// Merge per-image dominant color lists into one consolidated set
///
/// Iterates colors in input order; each joins the first cluster whose
/// representative is within 20 degrees of hue and 20 points of
/// saturation, otherwise it seeds a new cluster. Emits one color per
/// cluster (first-seen representative, accumulated-average frequency),
/// sorted by descending frequency. Empty input yields an empty vec.
pub fn merge_color_sets(sets: &[Vec<ExtractedColor>]) -> Vec<ExtractedColor> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for set in sets {
        for color in set {
            match clusters.iter_mut().find(|cluster| cluster.absorbs(color)) {
                Some(cluster) => cluster.fold(color),
                None => clusters.push(Cluster::seed(color)),
            }
        }
    }

    tracing::debug!(
        sources = sets.len(),
        clusters = clusters.len(),
        "Merged per-image color sets"
    );

    let mut merged: Vec<ExtractedColor> = clusters
        .into_iter()
        .map(|cluster| ExtractedColor {
            frequency: cluster.frequency,
            ..cluster.representative
        })
        .collect();
    merged.sort_by(|a, b| {
        b.frequency
            .partial_cmp(&a.frequency)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    fn color(hex: &str, frequency: f32) -> ExtractedColor {
        let (r, g, b) = hex_to_rgb(hex).unwrap();
        ExtractedColor::from_rgb(r, g, b, frequency)
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(merge_color_sets(&[]).is_empty());
        assert!(merge_color_sets(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_near_identical_colors_fold_into_one_cluster() {
        let merged = merge_color_sets(&[
            vec![color("#3366CC", 0.6)],
            vec![color("#3366CD", 0.4)],
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].hex, "#3366CC"); // first-seen representative
        assert!((merged[0].frequency - 0.5).abs() < 0.001); // weighted average
    }

    #[test]
    fn test_distinct_hues_stay_separate() {
        let merged = merge_color_sets(&[
            vec![color("#FF0000", 0.5)],
            vec![color("#0000FF", 0.5)],
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_same_hue_different_saturation_stays_separate() {
        // Hue matches but saturation is 100 vs ~30: no fold
        let merged = merge_color_sets(&[
            vec![color("#FF0000", 0.5)],
            vec![color("#A65C5C", 0.5)],
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_result_sorted_by_descending_frequency() {
        let merged = merge_color_sets(&[
            vec![color("#FF0000", 0.2)],
            vec![color("#0000FF", 0.7)],
            vec![color("#00FF00", 0.4)],
        ]);
        let frequencies: Vec<f32> = merged.iter().map(|c| c.frequency).collect();
        assert_eq!(frequencies, vec![0.7, 0.4, 0.2]);
    }

    #[test]
    fn test_running_average_weights_by_cluster_count() {
        // Three folds: ((0.6 + 0.3)/2 + 0.3)/... running average keeps
        // each fold weighted by the colors already absorbed
        let merged = merge_color_sets(&[
            vec![color("#3366CC", 0.6)],
            vec![color("#3366CD", 0.3)],
            vec![color("#3365CB", 0.3)],
        ]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].frequency - 0.4).abs() < 0.001);
    }
}
