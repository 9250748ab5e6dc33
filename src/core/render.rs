//! Message rendering
//!
//! Turns a heterogeneous argument list into the single message string that
//! the emitter splits and writes.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// One argument of a log call.
///
/// Most callers build these through `From` (strings, numbers, `bool`, `char`,
/// `Option`) or the logging macros. Composite values go through [`Arg::debug`].
pub enum Arg<'a> {
    /// An absent value. Rendered as `<nil>` when other arguments are present.
    Nil,
    Text(Cow<'a, str>),
    Display(&'a dyn fmt::Display),
    Debug(&'a dyn fmt::Debug),
}

impl<'a> Arg<'a> {
    /// Render a value through its `Display` implementation.
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    /// Render a value through its (recursive) `Debug` implementation.
    pub fn debug<T: fmt::Debug>(value: &'a T) -> Self {
        Arg::Debug(value)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Arg::Nil)
    }

    fn write_to(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            Arg::Nil => {
                out.push_str("<nil>");
                Ok(())
            }
            Arg::Text(s) => {
                out.push_str(s);
                Ok(())
            }
            Arg::Display(v) => write!(out, "{}", v),
            Arg::Debug(v) => write!(out, "{:?}", v),
        };
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.write_to(&mut rendered);
        f.debug_tuple("Arg").field(&rendered).finish()
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(s: String) -> Self {
        Arg::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Arg::Text(s)
    }
}

impl From<()> for Arg<'_> {
    fn from(_: ()) -> Self {
        Arg::Nil
    }
}

impl<'a, T: Into<Arg<'a>>> From<Option<T>> for Arg<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Nil, Into::into)
    }
}

macro_rules! impl_from_to_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::Text(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

impl_from_to_string!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Render an argument list into one message.
///
/// Returns `None` when there is nothing to log: the list is empty or every
/// argument is [`Arg::Nil`]. Otherwise the rendered arguments are joined with
/// a single space.
pub fn render_message(args: &[Arg<'_>]) -> Option<String> {
    if args.iter().all(Arg::is_nil) {
        return None;
    }

    let mut message = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        arg.write_to(&mut message);
    }
    Some(message)
}
