use std::io::ErrorKind;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use crate::files::FileStore;
use crate::http::connection::Connection;

/// Accepts connections until the shutdown signal flips, handing each one to
/// an independent task. The loop never blocks on request processing;
/// dropping the listener on exit closes the server socket.
pub(crate) async fn accept_loop(
    listener: TcpListener,
    mut shutdown: watch::Receiver<bool>,
    store: FileStore,
) {
    loop {
        tokio::select! {
            res = listener.accept() => match res {
                Ok((socket, peer)) => {
                    info!("Accepted connection from {}", peer);

                    let store = store.clone();
                    tokio::spawn(async move {
                        let mut conn = Connection::new(socket, store);
                        if let Err(e) = conn.run().await {
                            error!("Connection error from {}: {}", peer, e);
                        }
                    });
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            },

            _ = shutdown.changed() => break,
        }
    }

    info!("Accept loop exited");
}
