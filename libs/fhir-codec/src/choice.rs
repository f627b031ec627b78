//! Choice types (`value[x]`, `onset[x]`, ...).
//!
//! A choice family is one logical field spread over several physical keys,
//! one per allowed type: `onsetDateTime`, `onsetAge`, `onsetPeriod`. At most
//! one may be populated. Families are declared with
//! [`choice_type!`](crate::choice_type) and resolved by
//! [`FieldReader::choice`].

use crate::aggregate::FieldValue;
use crate::error::Result;
use crate::reader::FieldReader;
use crate::writer::FieldWriter;
use tessera_format::Document;

pub trait ChoiceFamily: Sized {
    /// Logical name without the `[x]`, e.g. `onset`.
    const FAMILY: &'static str;

    /// Physical field names, in declaration order.
    const CANDIDATES: &'static [&'static str];

    /// Whether `candidate` is populated. A primitive candidate also counts as
    /// populated when only its `_candidate` companion is there.
    fn is_candidate_present(fields: &Document, candidate: &str) -> bool;

    fn decode_candidate(reader: &mut FieldReader<'_>, candidate: &str) -> Result<Option<Self>>;

    /// Write the populated physical field (and its companion).
    fn encode(&self, writer: &mut FieldWriter);

    /// The physical field this value is written to.
    fn field_name(&self) -> &'static str;
}

/// Decode candidate `name` and wrap it in its family variant.
///
/// Called from every arm of the `decode_candidate` that
/// [`choice_type!`](crate::choice_type) generates. Out of line, so that frame
/// stays the same size whatever the number of candidates; it is on the stack
/// once per level of a recursive family such as `Extension.value[x]`.
#[doc(hidden)]
#[inline(never)]
pub fn take_candidate<T, C>(
    reader: &mut FieldReader<'_>,
    name: &str,
    wrap: fn(T) -> C,
) -> Result<Option<C>>
where
    T: FieldValue,
{
    Ok(T::take(reader, name)?.map(wrap))
}
