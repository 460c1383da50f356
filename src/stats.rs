//! Packing Stats
//!
//! Completion summary derived from the current collection.

use crate::models::Item;

/// Completion summary for the stats footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingStats {
    /// Nothing on the list yet
    Empty,
    /// Some items still unpacked
    InProgress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
    /// Everything packed
    Complete,
}

/// Derive the completion summary from the collection
pub fn packing_stats(items: &[Item]) -> PackingStats {
    if items.is_empty() {
        return PackingStats::Empty;
    }
    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    // round half away from zero at .5 boundaries
    let percentage = (packed as f64 / total as f64 * 100.0).round() as u32;
    if percentage == 100 {
        PackingStats::Complete
    } else {
        PackingStats::InProgress {
            total,
            packed,
            percentage,
        }
    }
}

impl PackingStats {
    /// Footer message for this summary
    pub fn message(&self) -> String {
        match self {
            PackingStats::Empty => "Start adding some items to your packing list".to_string(),
            PackingStats::Complete => "You got everything to go 🛫".to_string(),
            PackingStats::InProgress {
                total,
                packed,
                percentage,
            } => format!(
                "You have {} items on your list, and you already packed {} ({}%)",
                total, packed, percentage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_items(total: usize, packed: usize) -> Vec<Item> {
        (0..total)
            .map(|i| Item {
                id: i as u64,
                description: format!("Item {}", i),
                quantity: 1,
                packed: i < packed,
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(packing_stats(&[]), PackingStats::Empty);
        assert_eq!(
            PackingStats::Empty.message(),
            "Start adding some items to your packing list"
        );
    }

    #[test]
    fn test_all_packed_is_complete() {
        assert_eq!(packing_stats(&make_items(3, 3)), PackingStats::Complete);
        assert_eq!(
            PackingStats::Complete.message(),
            "You got everything to go 🛫"
        );
    }

    #[test]
    fn test_quarter_packed() {
        assert_eq!(
            packing_stats(&make_items(4, 1)),
            PackingStats::InProgress {
                total: 4,
                packed: 1,
                percentage: 25
            }
        );
    }

    #[test]
    fn test_progress_message() {
        let stats = packing_stats(&make_items(2, 1));
        assert_eq!(
            stats.message(),
            "You have 2 items on your list, and you already packed 1 (50%)"
        );
    }

    #[test]
    fn test_none_packed_is_zero_percent() {
        // distinct from the empty state
        assert_eq!(
            packing_stats(&make_items(2, 0)),
            PackingStats::InProgress {
                total: 2,
                packed: 0,
                percentage: 0
            }
        );
    }

    #[test]
    fn test_half_percent_rounds_away_from_zero() {
        // 1/8 = 12.5%
        assert_eq!(
            packing_stats(&make_items(8, 1)),
            PackingStats::InProgress {
                total: 8,
                packed: 1,
                percentage: 13
            }
        );
    }
}
