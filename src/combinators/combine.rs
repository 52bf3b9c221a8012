//! Positional combination of several results into one.
//!
//! Results are visited left to right. The first failure wins and nothing
//! after it is inspected; otherwise every value is collected in input order.

/// A positional collection of results that can be combined into one result.
///
/// Implemented for `Vec<Result<T, E>>`, `[Result<T, E>; N]` and tuples of
/// up to eight results sharing an error type.
///
/// # Examples
///
/// ```
/// use safetry::{combine, failure, success, Error, SafeResult};
///
/// let all: SafeResult<(i32, &str)> = combine((success(1), success("two")));
/// assert_eq!(all.unwrap(), (1, "two"));
///
/// let first = Error::new("first");
/// let results: Vec<SafeResult<i32>> =
///     vec![success(1), failure(first.clone()), failure(Error::new("second"))];
/// assert_eq!(combine(results).unwrap_err(), first);
/// ```
pub trait Combine<E> {
    /// The ordered collection of success values.
    type Output;

    /// Combines the results, short-circuiting on the first failure.
    fn combine(self) -> Result<Self::Output, E>;
}

/// Combines a positional collection of results.
///
/// An empty collection yields an empty success.
#[inline]
pub fn combine<C, E>(results: C) -> Result<C::Output, E>
where
    C: Combine<E>,
{
    results.combine()
}

/// Combines results pulled lazily from an iterator.
///
/// The iterator is not advanced past the first failure.
///
/// ```
/// use safetry::{combine_iter, Error, SafeResult};
///
/// let mut visited = 0;
/// let results = (0..5).map(|i| -> SafeResult<i32> {
///     visited += 1;
///     if i == 1 { Err(Error::new("stop")) } else { Ok(i) }
/// });
///
/// assert!(combine_iter(results).is_err());
/// assert_eq!(visited, 2);
/// ```
pub fn combine_iter<I, T, E>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for result in iter {
        values.push(result?);
    }
    Ok(values)
}

impl<T, E> Combine<E> for Vec<Result<T, E>> {
    type Output = Vec<T>;

    #[inline]
    fn combine(self) -> Result<Self::Output, E> {
        combine_iter(self)
    }
}

impl<T, E, const N: usize> Combine<E> for [Result<T, E>; N] {
    type Output = Vec<T>;

    #[inline]
    fn combine(self) -> Result<Self::Output, E> {
        combine_iter(self)
    }
}

macro_rules! impl_combine_tuple {
    ($($value:ident => $result:ident),+) => {
        impl<E, $($value),+> Combine<E> for ($(Result<$value, E>,)+) {
            type Output = ($($value,)+);

            #[inline]
            fn combine(self) -> Result<Self::Output, E> {
                let ($($result,)+) = self;
                Ok(($($result?,)+))
            }
        }
    };
}

impl_combine_tuple!(A => a);
impl_combine_tuple!(A => a, B => b);
impl_combine_tuple!(A => a, B => b, C => c);
impl_combine_tuple!(A => a, B => b, C => c, D => d);
impl_combine_tuple!(A => a, B => b, C => c, D => d, F => f);
impl_combine_tuple!(A => a, B => b, C => c, D => d, F => f, G => g);
impl_combine_tuple!(A => a, B => b, C => c, D => d, F => f, G => g, H => h);
impl_combine_tuple!(A => a, B => b, C => c, D => d, F => f, G => g, H => h, I => i);
