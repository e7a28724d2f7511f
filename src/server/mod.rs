//! Server lifecycle.
//!
//! `Server` owns the listening socket and its lifecycle explicitly; there
//! is no process-global server state. `start` and `stop` drive the
//! transitions `Stopped → Starting → Running → Stopping → Stopped`.
//!
//! Shutdown is abrupt: `stop` tears down the accept loop and returns
//! without draining in-flight connection tasks. A deliberate limitation.

mod listener;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpSocket;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::files::FileStore;

/// Lifecycle states of a [`Server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

/// A server instance: configuration, socket ownership and lifecycle flag.
pub struct Server {
    config: Config,
    state: ServerState,
    shutdown: Option<watch::Sender<bool>>,
    accept_loop: Option<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: ServerState::Stopped,
            shutdown: None,
            accept_loop: None,
            local_addr: None,
        }
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Address the listener is bound to, once running. With a port-0
    /// configuration this is the kernel-assigned port.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Binds the socket and spawns the accept loop.
    ///
    /// Any failure here is fatal to startup: the state rolls back to
    /// `Stopped` and the error propagates to the caller.
    pub async fn start(&mut self) -> anyhow::Result<SocketAddr> {
        if self.state != ServerState::Stopped {
            anyhow::bail!("server already started");
        }
        self.state = ServerState::Starting;

        match self.bind_and_spawn() {
            Ok(addr) => {
                self.state = ServerState::Running;
                Ok(addr)
            }
            Err(e) => {
                self.state = ServerState::Stopped;
                Err(e)
            }
        }
    }

    fn bind_and_spawn(&mut self) -> anyhow::Result<SocketAddr> {
        let addr: SocketAddr = self.config.server.listen_addr.parse().with_context(|| {
            format!("invalid listen address {}", self.config.server.listen_addr)
        })?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true).context("SO_REUSEADDR failed")?;
        socket
            .bind(addr)
            .with_context(|| format!("bind {addr} failed"))?;
        let listener = socket
            .listen(self.config.server.backlog)
            .context("listen failed")?;
        let local_addr = listener.local_addr()?;

        let (tx, rx) = watch::channel(false);
        let store = FileStore::new(self.config.files.directory.clone());
        let handle = tokio::spawn(listener::accept_loop(listener, rx, store));

        self.shutdown = Some(tx);
        self.accept_loop = Some(handle);
        self.local_addr = Some(local_addr);

        info!("Listening on {}", local_addr);
        Ok(local_addr)
    }

    /// Stops accepting connections and waits for the accept loop to exit.
    ///
    /// Closing the socket forces a blocked accept to resolve. In-flight
    /// handlers keep running; only the listener is torn down. A no-op
    /// unless the server is running.
    pub async fn stop(&mut self) {
        if self.state != ServerState::Running {
            return;
        }
        self.state = ServerState::Stopping;

        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
        if let Some(handle) = self.accept_loop.take() {
            if let Err(e) = handle.await {
                tracing::error!("Accept loop task failed: {}", e);
            }
        }

        self.local_addr = None;
        self.state = ServerState::Stopped;
        info!("Server stopped");
    }
}
