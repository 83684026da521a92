use log::{debug, trace};
use urlquery_core::{Kind, Queryable, Record, Slot};

use crate::{DecodeError, DecodeErrorKind, SKIP_SENTINEL, Values, convert_str, parse_tag};

/// Copies query values into the fields of `target`, guided by each field's `#[url]` annotation.
///
/// `target` may sit behind `Option` or `Box`; if it turns out to be `None` there is nothing to
/// decode into and this succeeds. Anything that isn't a record is a
/// [`TypeMismatch`](DecodeErrorKind::TypeMismatch).
///
/// Fields are visited in declaration order. The first error stops decoding, and fields visited
/// before it keep their new values.
pub fn decode<T: Queryable>(values: &Values, target: &mut T) -> Result<(), DecodeError> {
    decode_slot(values, target.slot())
}

/// Like [`decode`], for a value already behind a [`Slot`]
pub fn decode_slot(values: &Values, slot: Slot<'_>) -> Result<(), DecodeError> {
    let Some(slot) = slot.follow() else {
        trace!("Decode target points to nothing, nothing to do");
        return Ok(());
    };

    match slot {
        Slot::Record(record) => absorb(values, record, ""),
        other => Err(DecodeErrorKind::TypeMismatch { got: other.kind() }.into()),
    }
}

/// Assigns each eligible field of `record` from `values`. A non-empty `scope` qualifies lookup
/// names as `scope[name]`.
fn absorb(values: &Values, record: &mut dyn Record, scope: &str) -> Result<(), DecodeError> {
    let shape = record.shape();
    trace!("Decoding into {shape} ({} fields)", shape.fields().len());

    for (index, field) in shape.fields().iter().enumerate() {
        if !field.is_exported() {
            trace!("Skipping unexported field {}", field.name);
            continue;
        }

        let raw_tag = field.tag.unwrap_or("");
        if raw_tag == SKIP_SENTINEL {
            continue;
        }

        let (mut name, options) = parse_tag(raw_tag);
        if name.is_empty() {
            if field.is_embedded() && field.shape().kind == Kind::Struct {
                debug!("Skipping embedded record {}.{}", shape, field.name);
                continue;
            }
            name = field.name;
        }

        let Some(slot) = record.field_slot(index) else {
            continue;
        };

        if options.contains("seen") {
            match slot {
                Slot::Bool(flag) => {
                    if values.contains_key(name) {
                        *flag = true;
                    }
                }
                other => trace!("Ignoring seen option on {} ({other:?})", field.name),
            }
            continue;
        }

        let qualified;
        if !scope.is_empty() {
            qualified = format!("{scope}[{name}]");
            name = &qualified;
        }

        if field.shape().is_decoder() {
            match (slot, values.get(name)) {
                (Slot::Custom { value, .. }, Some(first)) => {
                    trace!("Handing {name:?} to the decoder of {}", field.name);
                    value.decode_values(name, first).map_err(|e| {
                        DecodeError::new(DecodeErrorKind::Custom(e)).with_field(field.name)
                    })?;
                }
                (Slot::Custom { .. }, None) => {}
                (other, _) => debug!("Decoder shape without a decoder slot: {other:?}"),
            }
            continue;
        }

        if slot.kind().is_sequence() {
            debug!("Skipping sequence field {}.{}", shape, field.name);
            continue;
        }

        let Some(value) = values.get(name) else {
            continue;
        };

        if let Slot::Pointer { .. } = slot {
            debug!("Skipping pointer field {}.{}", shape, field.name);
            continue;
        }

        trace!("Assigning {value:?} to {}.{}", shape, field.name);
        convert_str(value, slot, &options).map_err(|e| e.with_field(field.name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlquery::Queryable;

    #[derive(Queryable, Default, Debug, PartialEq)]
    struct Inner {
        pub x: u8,
    }

    #[derive(Queryable, Default, Debug, PartialEq)]
    struct Outer {
        pub a: String,
        #[url(flatten)]
        pub inner: Inner,
    }

    #[derive(Default)]
    struct Upper(String);

    impl urlquery::DecodeValues for Upper {
        fn decode_values(
            &mut self,
            _key: &str,
            value: &str,
        ) -> Result<(), urlquery::DecodeValuesError> {
            self.0 = value.to_uppercase();
            Ok(())
        }
    }

    urlquery::queryable_decoder!(Upper);

    #[derive(Queryable, Default)]
    struct Shouting {
        pub word: Upper,
        pub plain: String,
    }

    #[test]
    fn decoder_shapes_are_routed_to_their_decoder() {
        let fields = <Shouting as Queryable>::SHAPE.fields();
        assert!(fields[0].shape().is_decoder());
        assert!(!fields[1].shape().is_decoder());

        let values: Values = [("word", "hey"), ("plain", "hey")].into_iter().collect();
        let mut target = Shouting::default();
        decode(&values, &mut target).unwrap();
        assert_eq!(target.word.0, "HEY");
        assert_eq!(target.plain, "hey");
    }

    #[test]
    fn none_targets_succeed() {
        let values: Values = [("a", "1")].into_iter().collect();
        let mut target: Option<Outer> = None;
        decode(&values, &mut target).unwrap();
        assert!(target.is_none());
    }

    #[test]
    fn targets_behind_pointers_are_followed() {
        let values: Values = [("a", "here")].into_iter().collect();
        let mut target = Some(Box::new(Outer::default()));
        decode(&values, &mut target).unwrap();
        assert_eq!(target.map(|t| t.a), Some("here".to_string()));
    }

    #[test]
    fn non_records_are_a_type_mismatch() {
        let mut n = 0u32;
        let err = decode(&Values::new(), &mut n).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::TypeMismatch { got: Kind::U32 }
        ));
    }

    #[test]
    fn embedded_records_are_skipped() {
        let values: Values = [("inner", "1"), ("x", "2")].into_iter().collect();
        let mut target = Outer::default();
        decode(&values, &mut target).unwrap();
        assert_eq!(target.inner, Inner::default());
    }

    #[test]
    fn scope_qualifies_names() {
        let values: Values = [("inner[x]", "5"), ("x", "6")].into_iter().collect();
        let mut inner = Inner::default();
        absorb(&values, &mut inner, "inner").unwrap();
        assert_eq!(inner.x, 5);
    }
}
