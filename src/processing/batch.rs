//! Batching and usable-range conversion.
//!
//! Partitions a region's subnets into fixed-size batches in document order
//! and derives the first/last usable host address for each subnet.

use crate::error::Result;
use crate::models::{IpRange, Ipv4, Region};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// First and last host address derived from one subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsableRange {
    /// First usable host address.
    pub first: Ipv4Addr,
    /// Last usable host address.
    pub last: Ipv4Addr,
}

/// An ordered group of up to `max_rules_per_file` ranges from one region,
/// mapped to exactly one output file.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Name of the originating region.
    pub region: String,
    /// Zero-based batch index within the region.
    pub index: usize,
    /// Usable ranges in original document order.
    pub rules: Vec<UsableRange>,
}

/// Parse one subnet entry and compute its usable host range.
pub fn usable_range(range: &IpRange) -> Result<UsableRange> {
    let subnet = Ipv4::new(&range.subnet)?;
    Ok(UsableRange {
        first: subnet.first_usable(),
        last: subnet.last_usable(),
    })
}

/// Partition a region's subnets into batches of at most `max_rules_per_file`
/// entries. Entry *i* lands in batch `i / max_rules_per_file`; order is
/// preserved and batches never overlap.
///
/// A malformed subnet anywhere in the region fails the whole call.
pub fn batch_region(region: &Region, max_rules_per_file: usize) -> Result<Vec<Batch>> {
    assert!(max_rules_per_file > 0, "batch size must be positive");
    log::debug!(
        "batch_region() region='{}' ranges={} max_rules_per_file={}",
        region.display_name(),
        region.ip_ranges.len(),
        max_rules_per_file
    );

    let mut batches = Vec::new();
    let groups = region.ip_ranges.iter().chunks(max_rules_per_file);
    for (index, chunk) in groups.into_iter().enumerate() {
        let rules = chunk.map(usable_range).collect::<Result<Vec<UsableRange>>>()?;
        batches.push(Batch {
            region: region.display_name().to_string(),
            index,
            rules,
        });
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with(count: usize) -> Region {
        // distinct /24 subnets so order is checkable
        let ip_ranges = (0..count)
            .map(|i| IpRange {
                subnet: format!("10.{}.{}.0/24", i / 256, i % 256),
            })
            .collect();
        Region {
            name: Some("East US".to_string()),
            ip_ranges,
        }
    }

    #[test]
    fn test_usable_range() {
        let range = IpRange {
            subnet: "13.65.0.0/16".to_string(),
        };
        let usable = usable_range(&range).unwrap();
        assert_eq!(usable.first, Ipv4Addr::new(13, 65, 0, 1));
        assert_eq!(usable.last, Ipv4Addr::new(13, 65, 255, 254));
    }

    #[test]
    fn test_usable_range_malformed() {
        let range = IpRange {
            subnet: "bogus".to_string(),
        };
        assert!(usable_range(&range).is_err());
    }

    #[test]
    fn test_batch_region_empty() {
        let batches = batch_region(&region_with(0), 135).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_batch_region_single_partial() {
        let batches = batch_region(&region_with(7), 135).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].index, 0);
        assert_eq!(batches[0].rules.len(), 7);
        assert_eq!(batches[0].region, "East US");
    }

    #[test]
    fn test_batch_region_exact_multiple() {
        let batches = batch_region(&region_with(270), 135).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].rules.len(), 135);
        assert_eq!(batches[1].rules.len(), 135);
    }

    #[test]
    fn test_batch_region_one_over() {
        let batches = batch_region(&region_with(136), 135).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].rules.len(), 135);
        assert_eq!(batches[1].rules.len(), 1);
        assert_eq!(batches[1].index, 1);
    }

    #[test]
    fn test_batch_region_preserves_order() {
        let region = region_with(10);
        let batches = batch_region(&region, 3).unwrap();
        assert_eq!(batches.len(), 4);

        let flattened: Vec<UsableRange> = batches
            .iter()
            .flat_map(|b| b.rules.iter().copied())
            .collect();
        let direct: Vec<UsableRange> = region
            .ip_ranges
            .iter()
            .map(|r| usable_range(r).unwrap())
            .collect();
        assert_eq!(flattened, direct);

        // indices ascend 0,1,2,...
        for (i, batch) in batches.iter().enumerate() {
            assert_eq!(batch.index, i);
        }
    }

    #[test]
    fn test_batch_region_bad_subnet_is_fatal() {
        let mut region = region_with(3);
        region.ip_ranges[1].subnet = "10.0.0.0/40".to_string();
        assert!(batch_region(&region, 135).is_err());
    }
}
