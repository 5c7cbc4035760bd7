/// Index of the largest value, ties going to the lowest index.
///
/// Returns `None` for an empty iterator.
pub fn argmax(values: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.into_iter().enumerate() {
        match best {
            Some((_, top)) if v <= top => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
