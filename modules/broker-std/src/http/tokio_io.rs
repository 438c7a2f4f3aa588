use std::{
  io,
  pin::Pin,
  task::{Context, Poll},
};

use pin_project_lite::pin_project;

pin_project! {
  /// Adapts a Tokio byte stream to hyper's runtime IO traits.
  #[derive(Debug)]
  pub struct TokioIo<T> {
    #[pin]
    inner: T,
  }
}

impl<T> TokioIo<T> {
  /// Wraps a Tokio stream.
  #[must_use]
  pub const fn new(inner: T) -> Self {
    Self { inner }
  }
}

impl<T> hyper::rt::Read for TokioIo<T>
where
  T: tokio::io::AsyncRead,
{
  fn poll_read(
    self: Pin<&mut Self>,
    cx: &mut Context<'_>,
    mut buf: hyper::rt::ReadBufCursor<'_>,
  ) -> Poll<Result<(), io::Error>> {
    // SAFETY: tokio's ReadBuf only ever writes initialised bytes into the unfilled region.
    let filled = unsafe {
      let mut tbuf = tokio::io::ReadBuf::uninit(buf.as_mut());
      match tokio::io::AsyncRead::poll_read(self.project().inner, cx, &mut tbuf) {
        | Poll::Ready(Ok(())) => tbuf.filled().len(),
        | other => return other,
      }
    };

    // SAFETY: `filled` bytes were initialised by the read above.
    unsafe {
      buf.advance(filled);
    }
    Poll::Ready(Ok(()))
  }
}

impl<T> hyper::rt::Write for TokioIo<T>
where
  T: tokio::io::AsyncWrite,
{
  fn poll_write(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &[u8]) -> Poll<Result<usize, io::Error>> {
    tokio::io::AsyncWrite::poll_write(self.project().inner, cx, buf)
  }

  fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
    tokio::io::AsyncWrite::poll_flush(self.project().inner, cx)
  }

  fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
    tokio::io::AsyncWrite::poll_shutdown(self.project().inner, cx)
  }

  fn is_write_vectored(&self) -> bool {
    tokio::io::AsyncWrite::is_write_vectored(&self.inner)
  }

  fn poll_write_vectored(
    self: Pin<&mut Self>,
    cx: &mut Context<'_>,
    bufs: &[io::IoSlice<'_>],
  ) -> Poll<Result<usize, io::Error>> {
    tokio::io::AsyncWrite::poll_write_vectored(self.project().inner, cx, bufs)
  }
}
