//! Turning records into the opaque bytes the store keeps, and back.
//!
//! The store never looks inside a row, so whoever owns the record shape
//! picks the codec. [`JsonCodec`] is the default; [`FnCodec`] wraps any pair
//! of plain functions.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("could not encode record: {0}")]
    Encode(String),

    #[error("invalid data in table: {0}")]
    Decode(String),
}

pub trait RecordCodec<T> {
    fn encode(&self, record: &T) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// Stores records as JSON documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl<T> RecordCodec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(record).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes)
            .map_err(|_| CodecError::Decode(String::from_utf8_lossy(bytes).to_string()))
    }
}

/// A codec made of two plain functions.
pub struct FnCodec<T> {
    encode: fn(&T) -> Result<Vec<u8>, CodecError>,
    decode: fn(&[u8]) -> Result<T, CodecError>,
    _record: PhantomData<fn() -> T>,
}

impl<T> FnCodec<T> {
    pub fn new(
        encode: fn(&T) -> Result<Vec<u8>, CodecError>,
        decode: fn(&[u8]) -> Result<T, CodecError>,
    ) -> FnCodec<T> {
        FnCodec {
            encode,
            decode,
            _record: PhantomData,
        }
    }
}

impl<T> RecordCodec<T> for FnCodec<T> {
    fn encode(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        (self.encode)(record)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (self.decode)(bytes)
    }
}
