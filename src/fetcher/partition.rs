//! Positional splitting of an input list into a fixed number of partitions.

/// Split `items` into `count` contiguous partitions.
///
/// The first `count - 1` partitions each take `items.len() / count` elements
/// (integer division); the final partition takes everything left over. With
/// two partitions this yields `floor(n/2)` and `n - floor(n/2)` elements.
///
/// An empty input yields no partitions at all. When there are fewer items
/// than partitions the leading partitions are empty and the final one holds
/// every item.
pub(super) fn partition<T>(items: &[T], count: usize) -> Vec<&[T]> {
    debug_assert!(count > 0, "partition count is validated by the caller");
    if items.is_empty() {
        return Vec::new();
    }

    let chunk = items.len() / count;
    let mut partitions = Vec::with_capacity(count);
    let mut start = 0;
    for _ in 0..count - 1 {
        partitions.push(&items[start..start + chunk]);
        start += chunk;
    }
    partitions.push(&items[start..]);
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_way_split_of_even_list() {
        let items: Vec<u32> = (0..6).collect();
        let parts = partition(&items, 2);
        assert_eq!(parts, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
    }

    #[test]
    fn two_way_split_puts_the_odd_element_in_the_last_partition() {
        let items: Vec<u32> = (0..7).collect();
        let parts = partition(&items, 2);
        assert_eq!(parts[0].len(), 3, "partition 0 takes floor(n/2)");
        assert_eq!(parts[1].len(), 4, "partition 1 takes n - floor(n/2)");
    }

    #[test]
    fn n_way_split_gives_the_remainder_to_the_last_partition() {
        let items: Vec<u32> = (0..10).collect();
        let parts = partition(&items, 3);
        let sizes: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 4]);
    }

    #[test]
    fn single_partition_takes_everything() {
        let items: Vec<u32> = (0..5).collect();
        let parts = partition(&items, 1);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], &items[..]);
    }

    #[test]
    fn empty_input_yields_no_partitions() {
        let items: Vec<u32> = Vec::new();
        assert!(partition(&items, 2).is_empty());
    }

    #[test]
    fn fewer_items_than_partitions_keeps_empty_leading_partitions() {
        let items = vec![42_u32];
        let parts = partition(&items, 2);
        assert_eq!(parts.len(), 2, "partition count is always honored");
        assert!(parts[0].is_empty(), "floor(1/2) = 0 items in partition 0");
        assert_eq!(parts[1], &[42][..]);
    }

    #[test]
    fn flattening_the_partitions_reproduces_the_input_order() {
        let items: Vec<u32> = (0..23).collect();
        for count in 1..=6 {
            let flattened: Vec<u32> = partition(&items, count).concat();
            assert_eq!(flattened, items, "order must survive a {count}-way split");
        }
    }
}
