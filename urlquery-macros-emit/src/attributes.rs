use urlquery_macros_parse::{Attribute, ToTokens, UrlInner, unquote};

/// A parsed field name: the raw identifier and the name recorded in the field descriptor.
///
/// Examples:
///
///   raw = "style", declared = "style"
///   raw = "r#type", declared = "type"
///   raw = "0" (tuple struct), declared = "0"
///
pub struct PName {
    pub raw: String,
    pub declared: String,
}

impl PName {
    pub fn new(raw: String) -> Self {
        let declared = raw.strip_prefix("r#").unwrap_or(&raw).to_string();
        Self { raw, declared }
    }
}

/// Everything the field attributes say about a field
#[derive(Default)]
pub struct PFieldAttrs {
    /// raw annotation, from `#[url("...")]`
    pub tag: Option<String>,

    /// `#[url(flatten)]`
    pub embedded: bool,

    /// doc comment lines
    pub doc: Vec<String>,
}

/// Collects `#[url(...)]` and doc attributes.
///
/// Panics (which surfaces as a compile error on the derive) on anything `#[url]` doesn't
/// understand, or on a field with more than one annotation string.
pub fn parse_field_attributes(attrs: &[Attribute]) -> PFieldAttrs {
    let mut result = PFieldAttrs::default();

    for attr in attrs {
        if let Some(line) = attr.doc_line() {
            result.doc.push(line);
            continue;
        }

        let Some(items) = attr.url_items() else {
            continue;
        };

        for item in items {
            match item {
                UrlInner::Flatten(_) => result.embedded = true,
                UrlInner::Tag(lit) => {
                    let tag = unquote(&lit.tokens_to_string());
                    if let Some(previous) = &result.tag {
                        panic!(
                            "A field may carry a single #[url] annotation string (got {previous:?} and {tag:?})"
                        );
                    }
                    result.tag = Some(tag);
                }
                UrlInner::Other(tts) => {
                    panic!(
                        "Unknown #[url] attribute item: {} (expected \"name,options\" or flatten)",
                        tts.tokens_to_string()
                    );
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pname_keeps_plain_names() {
        let p = PName::new("style".to_string());
        assert_eq!(p.raw, "style");
        assert_eq!(p.declared, "style");
    }

    #[test]
    fn pname_strips_raw_prefix() {
        let p = PName::new("r#type".to_string());
        assert_eq!(p.raw, "r#type");
        assert_eq!(p.declared, "type");
    }

    #[test]
    fn pname_tuple_index() {
        let p = PName::new("0".to_string());
        assert_eq!(p.declared, "0");
    }
}
