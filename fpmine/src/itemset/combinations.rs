/// Calls `callback` once for every `k`-combination of `items`, in
/// lexicographic order of positions. `k == 0` yields the single empty
/// combination; `k > items.len()` yields none.
pub fn for_each_combination<T, F>(items: &[T], k: usize, callback: &mut F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    if k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, callback);
}

/// All `k`-combinations of `items`, collected.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    for_each_combination(items, k, &mut |combination: &[T]| result.push(combination.to_vec()));
    result
}

fn generate_combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Clone,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current.as_slice());
        return;
    }

    let needed = k - current.len();
    if items.len() < start + needed {
        return;
    }

    for i in start..=items.len() - needed {
        current.push(items[i].clone());
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
