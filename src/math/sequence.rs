//! Wrap-around iteration and small set-like helpers over ordered lists.

/// Iterates over every window of `N` consecutive elements, wrapping around.
///
/// Yields exactly `items.len()` windows; the first one starts at `start`
/// (which may be negative, e.g. `-1` to begin with the last element).
pub fn cyclic_windows<'a, T, const N: usize>(
    items: &'a [T],
    start: isize,
) -> impl Iterator<Item = [&'a T; N]> + 'a {
    let len = items.len();
    let first = isize::try_from(len)
        .ok()
        .filter(|&l| l > 0)
        .and_then(|l| usize::try_from(start.rem_euclid(l)).ok())
        .unwrap_or(0);

    (0..len).map(move |i| std::array::from_fn(move |j| &items[(first + i + j) % len]))
}

/// Iterates over consecutive pairs `(items[i], items[i + 1])`, closing the loop
/// with `(last, first)`.
pub fn cyclic_pairs<'a, T>(items: &'a [T]) -> impl Iterator<Item = (&'a T, &'a T)> + 'a {
    cyclic_windows::<T, 2>(items, 0).map(|[a, b]| (a, b))
}

/// Keeps only the first occurrence of each element, preserving order.
#[must_use]
pub fn distinct<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Removes the first occurrence of `item`, returning whether one was found.
pub fn remove_first<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|x| x == item) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Appends `item` unless it is already present, returning whether it was added.
pub fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}
