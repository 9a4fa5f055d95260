//! Client side of the delegation protocol

pub mod connection;

pub use connection::RemoteAgentConnection;
