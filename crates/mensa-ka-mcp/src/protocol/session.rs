//! Handshake state for one client connection.

use crate::types::{Implementation, InitializeParams, InitializeResult, MCP_VERSION};

/// Where the connection is in the `initialize` / `initialized` exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingInitialize,
    /// `initialize` answered, `notifications/initialized` not yet seen.
    AwaitingInitialized,
    Ready,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    client: Option<Implementation>,
}

impl Session {
    /// Record who connected and answer with the server's own version.
    /// A version mismatch is logged and left to the client.
    pub fn initialize(&mut self, params: InitializeParams) -> InitializeResult {
        if params.protocol_version != MCP_VERSION {
            tracing::warn!(
                "Client asked for protocol {}, answering with {MCP_VERSION}",
                params.protocol_version
            );
        }
        tracing::info!(
            "Initialize from {} v{}",
            params.client_info.name,
            params.client_info.version
        );

        self.client = Some(params.client_info);
        self.phase = Phase::AwaitingInitialized;
        InitializeResult::for_server()
    }

    pub fn mark_ready(&mut self) {
        if self.phase == Phase::AwaitingInitialize {
            tracing::warn!("initialized notification arrived before initialize");
        }
        self.phase = Phase::Ready;
        tracing::info!("Handshake complete with {}", self.client_name());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn client_name(&self) -> &str {
        self.client.as_ref().map_or("unknown client", |c| c.name.as_str())
    }
}
