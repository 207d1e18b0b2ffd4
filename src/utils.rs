/// Takes the leading run of `items` for which every predicate holds.
///
/// Stops at the first item that fails any predicate, so later matches are never included.
pub fn filter_while<T, I>(items: I, predicates: &[&dyn Fn(&T) -> bool]) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .take_while(|item| predicates.iter().all(|predicate| predicate(item)))
        .collect()
}
