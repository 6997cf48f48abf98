//! Listener setup and the session I/O loop.
//!
//! Two listeners, one per player slot; each accepts exactly one connection
//! before the session starts. From then on exactly one connection is read at
//! a time: the session names the active seat, the loop blocks on that
//! transport, and the turn flips only after the line is fully dispatched.

use log::info;
use tokio::net::TcpListener;

use crate::session::GameSession;
use crate::transport::tcp::TcpTransport;
use crate::transport::Transport;

/// Bind both player ports, wait for one client on each, then run a single
/// session to completion.
pub async fn serve(port1: u16, port2: u16) -> anyhow::Result<()> {
    let listener1 = TcpListener::bind(("0.0.0.0", port1)).await?;
    let listener2 = TcpListener::bind(("0.0.0.0", port2)).await?;
    serve_with_listeners(listener1, listener2).await
}

/// As [`serve`], but on already-bound listeners (tests bind port 0).
pub async fn serve_with_listeners(
    listener1: TcpListener,
    listener2: TcpListener,
) -> anyhow::Result<()> {
    info!(
        "waiting for players on {} and {}",
        listener1.local_addr()?,
        listener2.local_addr()?
    );
    let (stream1, addr1) = listener1.accept().await?;
    info!("player one connected from {}", addr1);
    let (stream2, addr2) = listener2.accept().await?;
    info!("player two connected from {}", addr2);

    let transports: [Box<dyn Transport>; 2] = [
        Box::new(TcpTransport::new(stream1)),
        Box::new(TcpTransport::new(stream2)),
    ];
    info!("players connected, starting game");
    run_session(GameSession::new(), transports).await
}

/// Drive one session over any pair of transports until it finishes.
///
/// A clean end-of-stream on the active connection ends the session; a
/// read or write failure propagates and ends it too.
pub async fn run_session(
    mut session: GameSession,
    mut transports: [Box<dyn Transport>; 2],
) -> anyhow::Result<()> {
    while !session.is_finished() {
        let seat = session.active();
        let line = match transports[seat.index()].recv_line().await? {
            Some(line) => line,
            None => {
                info!("player {:?} disconnected, session over", seat);
                session.handle_disconnect();
                break;
            }
        };
        let reply = session.handle_line(&line);
        transports[seat.index()].send_line(&reply.to_string()).await?;
    }
    info!("session finished");
    Ok(())
}
