/// Angle and ratio constants used by the math kernel and its users
pub trait MathConsts {
    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// pi / 4
    const QUARTER_PI : Self;
    /// pi / 6
    const SIXTH_PI : Self;
    /// 1 / pi
    const ONE_OVER_PI : Self;

    /// sqrt(2)
    const ROOT_TWO : Self;
    /// 1 / sqrt(2)
    const ONE_OVER_ROOT_TWO : Self;
    /// sqrt(3) / 2, i.e. cos(pi / 6)
    const HALF_ROOT_THREE : Self;

    /// pi / 180
    const DEG_TO_RAD : Self;
    /// 180 / pi
    const RAD_TO_DEG : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const PI                : $ty = 3.14159265358979323846264338327950288 as $ty;
                const TWO_PI            : $ty = 6.28318530717958647692528676655900576 as $ty;
                const HALF_PI           : $ty = 1.57079632679489661923132169163975144 as $ty;
                const QUARTER_PI        : $ty = 0.785398163397448309615660845819875721 as $ty;
                const SIXTH_PI          : $ty = 0.523598775598298873077107230546583814 as $ty;
                const ONE_OVER_PI       : $ty = 0.318309886183790671537767526745028724 as $ty;

                const ROOT_TWO          : $ty = 1.41421356237309504880168872420969808 as $ty;
                const ONE_OVER_ROOT_TWO : $ty = 0.707106781186547524400844362104849039 as $ty;
                const HALF_ROOT_THREE   : $ty = 0.866025403784438646763723170752936183 as $ty;

                const DEG_TO_RAD        : $ty = (<f64 as MathConsts>::PI / 180.0) as $ty;
                const RAD_TO_DEG        : $ty = (180.0 / <f64 as MathConsts>::PI) as $ty;
            }
        )*
    };
}

impl_math_constants!{ f32, f64 }
