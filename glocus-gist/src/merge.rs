use glocus_core::models::Locus;

///
/// Merge two keys into their bounding box.
///
#[inline]
pub fn merge(a: &Locus, b: &Locus) -> Locus {
    a.union(b)
}

///
/// Bounding box of a sequence of keys, folding [`merge`] over them in order.
/// Returns `None` when there is nothing to enclose.
///
/// ```
/// use glocus_core::models::Locus;
/// use glocus_gist::merge::bounding_box;
///
/// let loci: Vec<Locus> = ["chr1:100-200", "chr1:50-60", "chr1:180-400"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let bbox = bounding_box(&loci).unwrap();
/// assert_eq!(bbox.to_string(), "chr1:50-400");
/// ```
pub fn bounding_box<'a, I>(entries: I) -> Option<Locus>
where
    I: IntoIterator<Item = &'a Locus>,
{
    let mut iter = entries.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, next| merge(&acc, next)))
}
