//! Flat tuple accumulation for form composition.
//!
//! Forms accumulate their fields and outputs one `append` at a time. Rather
//! than threading a curried constructor through every step, each step pushes
//! onto a flat tuple: `()` becomes `(A,)`, `(A,)` becomes `(A, B)`, and so on.
//! The final `map` destructures the tuple into the application's own types, so
//! a field appended in the wrong position fails to compile there.

/// Appends one element to the end of a tuple.
///
/// # Examples
///
/// ```
/// use formlet_forms::tuple::Push;
///
/// let t = ().push(1).push("two").push(3.0);
/// assert_eq!(t, (1, "two", 3.0));
/// ```
pub trait Push<T> {
    /// The tuple with `T` appended.
    type Output;

    /// Appends `item` to the end of `self`.
    fn push(self, item: T) -> Self::Output;
}

impl<T> Push<T> for () {
    type Output = (T,);

    fn push(self, item: T) -> Self::Output {
        (item,)
    }
}

macro_rules! impl_push {
    ($($name:ident),+) => {
        impl<$($name,)+ T> Push<T> for ($($name,)+) {
            type Output = ($($name,)+ T);

            #[allow(non_snake_case)]
            fn push(self, item: T) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ item)
            }
        }
    };
}

impl_push!(A);
impl_push!(A, B);
impl_push!(A, B, C);
impl_push!(A, B, C, D);
impl_push!(A, B, C, D, E);
impl_push!(A, B, C, D, E, F);
impl_push!(A, B, C, D, E, F, G);
impl_push!(A, B, C, D, E, F, G, H);
impl_push!(A, B, C, D, E, F, G, H, I);
impl_push!(A, B, C, D, E, F, G, H, I, J);
impl_push!(A, B, C, D, E, F, G, H, I, J, K);
impl_push!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_push!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_push!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_push!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
