//! The decode loop.

use super::{
    descriptor::FieldDescriptor,
    record::Record,
    report::{Reporter, Warning},
    source::{Chunk, Source},
    value::Value,
};

/// Decode a record by reading each descriptor's field from a source, in order.
///
/// Every field is visited exactly once. A field whose descriptor has no usable
/// size (see [`skips_field`](super::descriptor::DescriptorError::skips_field))
/// is left unset without reading.
/// Every other field is set, even if a short read left it incomplete. An
/// irregular descriptor is read by its unit size, ignoring `narrow` on a fixed
/// field, so later fields stay aligned. Warnings for all of these cases are
/// published to the reporter.
pub fn decode(
    descriptors: &[FieldDescriptor],
    r: &mut impl Source,
    o: &mut impl Reporter,
) -> Record {
    let mut fields = Vec::with_capacity(descriptors.len());

    for d in descriptors {
        let value = match d.validate() {
            Err(error) if error.skips_field() => {
                o.report(Warning::MalformedDescriptor {
                    field: d.name.clone(),
                    error,
                });
                None
            }
            result => {
                if let Err(error) = result {
                    o.report(Warning::IrregularDescriptor {
                        field: d.name.clone(),
                        error,
                    });
                }
                Some(decode_field(d, r, o))
            }
        };

        fields.push((d.name.clone(), value));
    }

    Record {
        fields,
        position: r.position(),
    }
}

fn decode_field(d: &FieldDescriptor, r: &mut impl Source, o: &mut impl Reporter) -> Value {
    tracing::trace!(
        field = %d.name,
        position = r.position(),
        delimited = d.delimited,
        "decoding field"
    );

    let bytes = if d.delimited {
        read_delimited(d, r, o)
    } else {
        // A short fixed-width read still yields a (degraded) value.
        let chunk = r.read_exact(d.unit_size);
        if chunk.is_short() {
            report_short(d, o, chunk)
        } else {
            chunk.bytes
        }
    };

    Value::absorb(d.kind, bytes)
}

/// Accumulate units until a terminator or a short read.
///
/// The terminating unit, and any partial unit, is discarded.
fn read_delimited(d: &FieldDescriptor, r: &mut impl Source, o: &mut impl Reporter) -> Vec<u8> {
    let mut acc = Vec::new();

    loop {
        let chunk = r.read_exact(d.unit_size);

        if chunk.is_short() {
            report_short(d, o, chunk);
            break;
        }

        let unit = chunk.bytes;

        if unit.starts_with(&[0, 0]) {
            break;
        }

        if d.narrow {
            acc.push(unit[0]);
        } else {
            acc.extend_from_slice(&unit);
        }
    }

    acc
}

/// Publish a short read, handing back the bytes that were obtained.
fn report_short(d: &FieldDescriptor, o: &mut impl Reporter, chunk: Chunk) -> Vec<u8> {
    let Chunk {
        bytes,
        requested,
        error,
    } = chunk;

    o.report(Warning::ShortRead {
        field: d.name.clone(),
        expected: requested,
        got: bytes.len(),
        error,
    });

    bytes
}
