//! Collaborator ports consumed by the navigation controller
//!
//! The controller never talks to storage, the network, or the platform
//! clipboard directly. It goes through three narrow traits:
//!
//! - [`ListDataSource`]: read-only views of friends, pending requests and
//!   messages
//! - [`ClipboardReader`]: one asynchronous text read, awaited by the controller
//! - [`FriendService`]: friend-request side effects, started but never awaited
//!
//! [`memory::MemoryStore`] implements the data source and the friend service
//! in memory; [`clipboard`] provides the system and fixed-text readers.

pub mod clipboard;
pub mod memory;

use crate::nav::{HexCode, ListCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

pub use clipboard::{ClipboardError, FixedClipboard, SystemClipboard};
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    #[default]
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub code: HexCode,
    #[serde(default)]
    pub status: OnlineStatus,
}

/// An incoming friend request awaiting accept/reject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub code: HexCode,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: HexCode,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

/// Ordered lists the screens are built from
pub trait ListDataSource {
    fn friends(&self) -> Vec<Friend>;

    fn pending_requests(&self) -> Vec<PendingRequest>;

    fn messages(&self) -> Vec<Message>;

    fn counts(&self) -> ListCounts {
        ListCounts {
            friends: self.friends().len(),
            pending: self.pending_requests().len(),
            messages: self.messages().len(),
        }
    }
}

/// Source of pasted text
pub trait ClipboardReader {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendServiceError {
    #[error("{0} is already a friend")]
    AlreadyFriends(HexCode),

    #[error("a request to {0} is already pending")]
    AlreadyRequested(HexCode),

    #[error("no pending request from {0}")]
    NoSuchRequest(HexCode),

    #[error("cannot send a friend request to yourself")]
    SelfRequest,
}

/// Friend-request side effects.
///
/// Each call starts the work synchronously and hands back a future that
/// finishes it. The controller spawns that future and never looks at its
/// result beyond logging it.
pub trait FriendService {
    fn send_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static;

    fn accept_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static;

    fn reject_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static;
}
