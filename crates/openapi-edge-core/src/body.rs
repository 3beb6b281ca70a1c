//! Message bodies for the generic request/response model.
//!
//! A [`Body`] is either fully buffered bytes or a stream of byte chunks.
//! Both carry a [`BodyLength`] hint so a consumer knows whether the total
//! size is declared up front.

use std::fmt;

use bytes::{Bytes, BytesMut};
use futures::Stream;
use futures::stream::{BoxStream, StreamExt};

use crate::BoxError;

/// Length hint for a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLength {
    /// The total number of body bytes is declared.
    Known(u64),
    /// The body ends whenever its stream does.
    Unknown,
}

enum Payload {
    Full(Bytes),
    Stream(BoxStream<'static, Result<Bytes, BoxError>>),
}

/// A request or response payload.
pub struct Body {
    payload: Payload,
    length: BodyLength,
}

impl Body {
    /// Create a buffered body; the length hint is the byte count.
    pub fn full(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let length = BodyLength::Known(bytes.len() as u64);
        Self {
            payload: Payload::Full(bytes),
            length,
        }
    }

    /// Create a buffered body with an explicit length hint.
    pub fn full_with_length(bytes: impl Into<Bytes>, length: BodyLength) -> Self {
        Self {
            payload: Payload::Full(bytes.into()),
            length,
        }
    }

    /// Create a streamed body with the given length hint.
    pub fn stream<S>(stream: S, length: BodyLength) -> Self
    where
        S: Stream<Item = Result<Bytes, BoxError>> + Send + 'static,
    {
        Self {
            payload: Payload::Stream(stream.boxed()),
            length,
        }
    }

    /// The body's length hint.
    pub fn length(&self) -> BodyLength {
        self.length
    }

    /// Read the body into a single buffer, consuming at most `limit` bytes.
    ///
    /// A buffered body is returned as-is, truncated to `limit`. A streamed
    /// body is drained until it ends or `limit` bytes have been collected,
    /// truncating the final chunk if it crosses the limit.
    ///
    /// # Errors
    ///
    /// Propagates the first error produced by the underlying stream.
    pub async fn collect(self, limit: usize) -> Result<Bytes, BoxError> {
        match self.payload {
            Payload::Full(bytes) => {
                if bytes.len() > limit {
                    Ok(bytes.slice(..limit))
                } else {
                    Ok(bytes)
                }
            }
            Payload::Stream(mut stream) => {
                let mut collected = BytesMut::new();
                while collected.len() < limit {
                    let Some(chunk) = stream.next().await else {
                        break;
                    };
                    let chunk = chunk?;
                    let remaining = limit - collected.len();
                    if chunk.len() > remaining {
                        collected.extend_from_slice(&chunk[..remaining]);
                    } else {
                        collected.extend_from_slice(&chunk);
                    }
                }
                Ok(collected.freeze())
            }
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.payload {
            Payload::Full(_) => "full",
            Payload::Stream(_) => "stream",
        };
        f.debug_struct("Body")
            .field("kind", &kind)
            .field("length", &self.length)
            .finish()
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::full(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::full(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunks(parts: &[&'static str]) -> Vec<Result<Bytes, BoxError>> {
        parts.iter().map(|part| Ok(Bytes::from(*part))).collect()
    }

    #[test]
    fn test_full_body_length() {
        let body = Body::full("hello".as_bytes().to_vec());
        assert_eq!(body.length(), BodyLength::Known(5));
    }

    #[test]
    fn test_full_body_collect() {
        let body = Body::full(b"hello".to_vec());
        let bytes = tokio_test::block_on(body.collect(usize::MAX)).unwrap();
        assert_eq!(&bytes[..], b"hello");
    }

    #[test]
    fn test_full_body_collect_truncates_to_limit() {
        let body = Body::full(b"hello world".to_vec());
        let bytes = tokio_test::block_on(body.collect(5)).unwrap();
        assert_eq!(&bytes[..], b"hello");
    }

    #[test]
    fn test_stream_body_collect() {
        let body = Body::stream(
            stream::iter(chunks(&["he", "ll", "o"])),
            BodyLength::Known(5),
        );
        let bytes = tokio_test::block_on(body.collect(5)).unwrap();
        assert_eq!(&bytes[..], b"hello");
    }

    #[test]
    fn test_stream_body_collect_stops_at_limit() {
        let body = Body::stream(
            stream::iter(chunks(&["hello", " world"])),
            BodyLength::Unknown,
        );
        let bytes = tokio_test::block_on(body.collect(8)).unwrap();
        assert_eq!(&bytes[..], b"hello wo");
    }

    #[test]
    fn test_stream_body_collect_propagates_errors() {
        let items: Vec<Result<Bytes, BoxError>> =
            vec![Ok(Bytes::from("he")), Err("stream failed".into())];
        let body = Body::stream(stream::iter(items), BodyLength::Unknown);
        let result = tokio_test::block_on(body.collect(usize::MAX));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_length_hint() {
        let body = Body::full_with_length(b"hello".to_vec(), BodyLength::Unknown);
        assert_eq!(body.length(), BodyLength::Unknown);
    }
}
