use std::borrow::Cow;

/// Conversion of a value into the text substituted for a path placeholder.
///
/// Implement this for domain types that are addressed by an identifier:
///
/// ```
/// use std::borrow::Cow;
/// use waymark::ToParam;
///
/// struct Post {
///     id: u64,
/// }
///
/// impl ToParam for Post {
///     fn to_param(&self) -> Cow<'_, str> {
///         Cow::Owned(self.id.to_string())
///     }
/// }
///
/// assert_eq!(Post { id: 7 }.to_param(), "7");
/// ```
pub trait ToParam {
    fn to_param(&self) -> Cow<'_, str>;
}

impl ToParam for str {
    fn to_param(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToParam for String {
    fn to_param(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToParam for Cow<'_, str> {
    fn to_param(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> Cow<'_, str> {
        (**self).to_param()
    }
}

macro_rules! display_param {
    ($($ty:ty),+) => {
        $(
            impl ToParam for $ty {
                fn to_param(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

display_param!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);
