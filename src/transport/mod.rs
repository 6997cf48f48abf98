//! Byte-stream endpoints as the core sees them: a line in, a line out.

/// A newline-framed text connection to one player.
///
/// `recv_line` resolves to `Ok(None)` on a clean end-of-stream, which the
/// session loop treats as that player leaving.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
    async fn recv_line(&mut self) -> anyhow::Result<Option<String>>;
}

pub mod in_memory;
pub mod tcp;
