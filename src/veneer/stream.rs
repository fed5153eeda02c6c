//! # Streaming Decoration
//!
//! [`Decorated`] adapts an iterator of owned records into the pass-through
//! pipeline form of the decorate operation: each record is decorated as it
//! arrives and re-emitted in arrival order.
//!
//! Because the adapter owns its records, it is inherently pass-through;
//! dropping decorated records on the floor is never useful here. A caller
//! that wants mutation without re-emission keeps ownership and uses
//! [`Decorator::apply_all`] instead.
//!
//! Failure semantics are strictly sequential: the record that fails is
//! consumed and its error is yielded in its place, records already emitted
//! stay emitted, and the stream then ends without reaching later records.

use crate::decorate::Decorator;
use crate::error::Result;
use crate::model::Record;

/// Iterator adapter yielding decorated records, halting after the first
/// failure.
#[derive(Debug)]
pub struct Decorated<I> {
    records: I,
    decorator: Decorator,
    halted: bool,
}

impl<I> Iterator for Decorated<I>
where
    I: Iterator<Item = Record>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let mut record = self.records.next()?;
        match self.decorator.apply(&mut record) {
            Ok(_) => Some(Ok(record)),
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}

/// Extension hook attaching [`Decorated`] to any iterator of records.
pub trait DecorateExt: Iterator<Item = Record> + Sized {
    fn decorated(self, decorator: Decorator) -> Decorated<Self> {
        Decorated {
            records: self,
            decorator,
            halted: false,
        }
    }
}

impl<I> DecorateExt for I where I: Iterator<Item = Record> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecorateError;
    use serde_json::json;

    fn named(name: &str) -> Record {
        Record::from_fields([("name", json!(name))])
    }

    #[test]
    fn preserves_arrival_order() {
        let records = vec![named("r1"), named("r2"), named("r3")];

        let decorated: Vec<Record> = records
            .into_iter()
            .decorated(Decorator::new().display_fields(["name"]))
            .collect::<Result<_>>()
            .unwrap();

        let names: Vec<_> = decorated
            .iter()
            .map(|r| r.get("name").unwrap().clone())
            .collect();
        assert_eq!(names, vec![json!("r1"), json!("r2"), json!("r3")]);
        assert!(decorated.iter().all(|r| r.bundle().is_some()));
    }

    #[test]
    fn failure_consumes_the_record_and_ends_the_stream() {
        let records = vec![named("r1"), Record::from_value(json!(7)), named("r3")];

        let mut stream = records
            .into_iter()
            .decorated(Decorator::new().display_fields(["name"]));

        let first = stream.next().unwrap().unwrap();
        assert!(first.bundle().is_some());

        let second = stream.next().unwrap();
        assert!(matches!(
            second,
            Err(DecorateError::FixedType { shape: "number" })
        ));

        // r3 is never reached, and the stream stays ended.
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut stream = std::iter::empty().decorated(Decorator::new());
        assert!(stream.next().is_none());
    }
}
