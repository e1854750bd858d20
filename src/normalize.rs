use alloc::{borrow::Cow, string::String};
use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

/// Returns the NFKD form of `text`. Absent text normalizes to `""`.
///
/// Text that is already in NFKD is returned borrowed.
pub fn normalize(text: Option<&str>) -> Cow<'_, str> {
    let Some(text) = text else {
        return Cow::Borrowed("");
    };

    match is_nfkd_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkd().collect::<String>()),
    }
}
