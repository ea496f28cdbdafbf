//! Archival layer
//!
//! Structured values that are not built-in primitives are encoded with a
//! serde codec and stored in the slot's blob. Reads are forgiving: a missing
//! slot, a non-blob value, or a blob that does not decode as the requested
//! type all read as `None`. Writes are strict: a value the codec cannot
//! encode is a contract violation.
//!
//! ## Envelope
//!
//! Every archive is encoded as a `(tag, payload)` pair, where the tag is the
//! Rust type path of the archived value. A blob whose tag is not the
//! requested type reads as `None`, even when its payload would decode, so a
//! struct cannot be read back as a compatible subset and an unrelated blob
//! cannot be mistaken for an archive. Moving or renaming an archived type
//! orphans its existing archives.

use crate::value::Slot;
use bincode::Options;
use defaults_core::{DefaultsError, DefaultsResult, DefaultsStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Decoder refuses to allocate past this many bytes for one archive
const BINCODE_LIMIT: u64 = 16 * 1024 * 1024;

/// Blob format for archived values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArchiveCodec {
    /// MessagePack with named struct fields
    #[default]
    #[serde(rename = "msgpack")]
    MessagePack,
    /// Compact bincode
    #[serde(rename = "bincode")]
    Bincode,
}

impl ArchiveCodec {
    /// Encode `value`
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::Serialization` if the codec rejects the value.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> DefaultsResult<Vec<u8>> {
        match self {
            ArchiveCodec::MessagePack => Ok(rmp_serde::to_vec_named(value)?),
            ArchiveCodec::Bincode => Ok(bincode_options().serialize(value)?),
        }
    }

    /// Decode `bytes` as `T`
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::Serialization` if the bytes are not a `T`.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> DefaultsResult<T> {
        match self {
            ArchiveCodec::MessagePack => rmp_serde::from_slice(bytes)
                .map_err(|e| DefaultsError::Serialization(e.to_string())),
            ArchiveCodec::Bincode => Ok(bincode_options().deserialize(bytes)?),
        }
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(BINCODE_LIMIT)
}

/// Encode `value` and store it as the slot's blob
///
/// # Errors
///
/// An encoding failure is returned as a contract violation on the slot's key;
/// the store is not touched.
pub fn archive_into<T, S>(slot: Slot<'_, S>, value: &T) -> DefaultsResult<()>
where
    T: Serialize + ?Sized,
    S: DefaultsStore + ?Sized,
{
    let bytes = slot.codec().encode(&(archive_tag::<T>(), value)).map_err(|e| {
        DefaultsError::contract(slot.key(), format!("value cannot be archived: {}", e))
    })?;
    slot.store().set_data(slot.key(), bytes);
    Ok(())
}

/// Load the slot's blob and decode it as `T`
///
/// `None` if the blob is missing, does not decode, or was archived from
/// another type.
pub fn unarchive_from<T, S>(slot: Slot<'_, S>) -> Option<T>
where
    T: DeserializeOwned,
    S: DefaultsStore + ?Sized,
{
    let bytes = slot.store().data(slot.key())?;
    let expected = archive_tag::<T>();
    match slot.codec().decode::<(String, T)>(&bytes) {
        Ok((tag, value)) if tag == expected => Some(value),
        Ok((tag, _)) => {
            warn!(
                key = slot.key(),
                stored = %tag,
                expected,
                "stored archive holds another type"
            );
            None
        }
        Err(e) => {
            warn!(
                key = slot.key(),
                codec = ?slot.codec(),
                error = %e,
                "stored blob is not an archive of {}",
                expected
            );
            None
        }
    }
}

/// Tag written in front of every archive of `T`
#[inline]
fn archive_tag<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Route serde types through the archival layer
///
/// Generates the type's `DefaultsValue` impl, so `DefaultsKey<T>` and
/// `DefaultsKey<Option<T>>` work with `Defaults::get`/`set`. Add
/// `impl_default_value!` as well for the non-optional key form.
///
/// ```
/// use defaults_primitives::{impl_archived_defaults, Defaults, DefaultsKey};
/// use defaults_storage::LocalStore;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Window { width: u32, height: u32 }
///
/// impl_archived_defaults!(Window);
///
/// const WINDOW: DefaultsKey<Option<Window>> = DefaultsKey::new("window");
///
/// let defaults = Defaults::new(LocalStore::new());
/// defaults.set(&WINDOW, Some(Window { width: 800, height: 600 })).unwrap();
/// assert_eq!(defaults.get(&WINDOW), Some(Window { width: 800, height: 600 }));
/// ```
#[macro_export]
macro_rules! impl_archived_defaults {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DefaultsValue for $ty {
                fn load<S: $crate::DefaultsStore + ?Sized>(
                    slot: $crate::Slot<'_, S>,
                ) -> ::std::option::Option<Self> {
                    $crate::archive::unarchive_from(slot)
                }

                fn save<S: $crate::DefaultsStore + ?Sized>(
                    self,
                    slot: $crate::Slot<'_, S>,
                ) -> $crate::DefaultsResult<()> {
                    $crate::archive::archive_into(slot, &self)
                }
            }
        )+
    };
}
