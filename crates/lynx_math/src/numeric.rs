/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : Copy;

    /// Epsilon used by [`ApproxEq::is_approx_eq`]
    const DEFAULT_EPSILON : Self::Epsilon;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another value, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::DEFAULT_EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                const DEFAULT_EPSILON : $ty = <$ty>::EPSILON;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    (self - rhs).abs() <= epsilon
                }
            }
        )*
    };
}
impl_approx_eq!{ f32, f64 }

/// Check if all elements of 2 slices are within `epsilon` of each other
pub(crate) fn slice_close_to(lhs: &[f32], rhs: &[f32], epsilon: f32) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| a.is_close_to(*b, epsilon))
}
