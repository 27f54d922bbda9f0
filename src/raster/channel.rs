use std::fmt;
use std::io::Cursor;

use futures::channel::oneshot;

use crate::{
    foundation::error::{FrameshowError, FrameshowResult},
    raster::MessagePort,
};

type PeerReply = Result<Vec<u8>, String>;
type Peer = Box<dyn FnMut(Vec<u8>, Reply) + Send>;

/// Reply handle given to the peer for one posted message.
///
/// Dropping it without replying closes the channel, which the receiving side reports as a
/// rasterization failure.
#[derive(Debug)]
pub struct Reply {
    tx: oneshot::Sender<PeerReply>,
}

impl Reply {
    /// Answer with image bytes.
    pub fn send(self, bytes: Vec<u8>) {
        let _ = self.tx.send(Ok(bytes));
    }

    /// Answer with a failure.
    pub fn fail(self, msg: impl Into<String>) {
        let _ = self.tx.send(Err(msg.into()));
    }
}

/// In-process [`MessagePort`] whose peer is a closure.
///
/// The peer may answer synchronously or move the [`Reply`] elsewhere and answer later.
pub struct LoopbackPort {
    peer: Peer,
    pending: Option<oneshot::Receiver<PeerReply>>,
}

impl fmt::Debug for LoopbackPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopbackPort")
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl LoopbackPort {
    /// Port backed by `peer`.
    pub fn new(peer: impl FnMut(Vec<u8>, Reply) + Send + 'static) -> Self {
        Self {
            peer: Box::new(peer),
            pending: None,
        }
    }

    /// Peer that echoes the posted bytes unchanged.
    pub fn echo() -> Self {
        Self::new(|bytes, reply| reply.send(bytes))
    }

    /// Peer that decodes the posted image and replies with canonical PNG bytes.
    pub fn png_normalizer() -> Self {
        Self::new(|bytes, reply| match normalize_png(&bytes) {
            Ok(out) => reply.send(out),
            Err(e) => reply.fail(e),
        })
    }
}

fn normalize_png(bytes: &[u8]) -> Result<Vec<u8>, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("decode posted image: {e}"))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| format!("encode png: {e}"))?;
    Ok(out)
}

impl MessagePort for LoopbackPort {
    fn post(&mut self, bytes: Vec<u8>) -> FrameshowResult<()> {
        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);
        (self.peer)(bytes, Reply { tx });
        Ok(())
    }

    async fn recv(&mut self) -> FrameshowResult<Vec<u8>> {
        let rx = self
            .pending
            .take()
            .ok_or_else(|| FrameshowError::rasterization("recv called before post"))?;
        match rx.await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(msg)) => Err(FrameshowError::rasterization(msg)),
            Err(oneshot::Canceled) => Err(FrameshowError::rasterization(
                "message channel closed before a reply",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/channel.rs"]
mod tests;
