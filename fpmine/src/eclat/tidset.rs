use std::cmp::Ordering;

/// Intersection of two ascending tid lists.
pub fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Intersects `tidsets` left to right, giving up as soon as the running
/// intersection holds fewer than `min_count` tids. Returns the final
/// intersection if it survives, and adds the number of pairwise
/// intersections performed to `intersections`.
pub fn intersect_all<'a, T>(
    tidsets: T,
    min_count: usize,
    intersections: &mut usize,
) -> Option<Vec<usize>>
where
    T: IntoIterator<Item = &'a [usize]>,
{
    let mut tidsets = tidsets.into_iter();
    let first = tidsets.next()?;
    if first.len() < min_count {
        return None;
    }

    let mut running = first.to_vec();
    for tids in tidsets {
        running = intersect_sorted(&running, tids);
        *intersections += 1;
        if running.len() < min_count {
            return None;
        }
    }
    Some(running)
}
