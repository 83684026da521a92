/// An annotation that excludes its field from decoding
pub const SKIP_SENTINEL: &str = "-";

/// Options of a field annotation: everything after the first comma of `"name,opt1,opt2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Whether the options contain `flag`. An empty flag never matches.
    pub fn contains(&self, flag: &str) -> bool {
        if flag.is_empty() || self.0.is_empty() {
            return false;
        }
        self.0.split(',').any(|option| option == flag)
    }

    /// The options as written, without the leading name
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Splits a raw annotation into its lookup name and its options.
///
/// The name may be empty, in which case the field's declared name is used.
///
/// ```rust
/// let (name, options) = urlquery_decode::parse_tag("style,seen");
/// assert_eq!(name, "style");
/// assert!(options.contains("seen"));
/// ```
pub fn parse_tag(raw: &str) -> (&str, TagOptions<'_>) {
    match raw.split_once(',') {
        Some((name, options)) => (name, TagOptions(options)),
        None => (raw, TagOptions("")),
    }
}
