//! In-memory friend store
//!
//! [`MemoryStore`] backs both [`ListDataSource`] and [`FriendService`] with a
//! shared, mutex-guarded record. Clones share the same record, so the
//! controller can read lists from one handle while friend-service futures
//! spawned on other tasks mutate it through another.

use super::{
    Friend, FriendService, FriendServiceError, ListDataSource, Message, OnlineStatus,
    PendingRequest,
};
use crate::nav::{HexCode, ListCounts};
use chrono::Utc;
use rustc_hash::FxHashSet;
use std::future::{self, Future};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Default)]
struct StoreInner {
    my_code: Option<HexCode>,
    friends: Vec<Friend>,
    pending: Vec<PendingRequest>,
    messages: Vec<Message>,
    /// Codes we have sent requests to and not heard back from
    outgoing: FxHashSet<HexCode>,
}

impl StoreInner {
    fn is_friend(&self, code: HexCode) -> bool {
        self.friends.iter().any(|friend| friend.code == code)
    }

    fn send(&mut self, code: HexCode) -> Result<(), FriendServiceError> {
        if self.my_code == Some(code) {
            return Err(FriendServiceError::SelfRequest);
        }
        if self.is_friend(code) {
            return Err(FriendServiceError::AlreadyFriends(code));
        }
        if !self.outgoing.insert(code) {
            return Err(FriendServiceError::AlreadyRequested(code));
        }
        Ok(())
    }

    fn take_pending(&mut self, code: HexCode) -> Result<PendingRequest, FriendServiceError> {
        let position = self
            .pending
            .iter()
            .position(|request| request.code == code)
            .ok_or(FriendServiceError::NoSuchRequest(code))?;
        Ok(self.pending.remove(position))
    }

    fn accept(&mut self, code: HexCode) -> Result<(), FriendServiceError> {
        self.take_pending(code)?;
        self.outgoing.remove(&code);
        if !self.is_friend(code) {
            self.friends.push(Friend {
                code,
                status: OnlineStatus::Offline,
            });
        }
        Ok(())
    }

    fn reject(&mut self, code: HexCode) -> Result<(), FriendServiceError> {
        self.take_pending(code).map(|_| ())
    }
}

/// Shared in-memory friends, requests and messages
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given lists
    pub fn seeded(
        my_code: Option<HexCode>,
        friends: Vec<Friend>,
        pending: Vec<PendingRequest>,
        messages: Vec<Message>,
    ) -> Self {
        MemoryStore {
            inner: Arc::new(Mutex::new(StoreInner {
                my_code,
                friends,
                pending,
                messages,
                outgoing: FxHashSet::default(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A panic while holding the lock cannot leave the lists half-written
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn my_code(&self) -> Option<HexCode> {
        self.lock().my_code
    }

    /// Record an incoming request, as a network layer would
    pub fn receive_request(&self, code: HexCode) {
        let mut inner = self.lock();
        if inner.is_friend(code) || inner.pending.iter().any(|r| r.code == code) {
            return;
        }
        inner.pending.push(PendingRequest {
            code,
            received_at: Utc::now(),
        });
    }

    /// Append an incoming message
    #[cfg(test)]
    pub(crate) fn receive_message(&self, sender: HexCode, text: impl Into<String>) {
        self.lock().messages.push(Message {
            sender,
            text: text.into(),
            received_at: Utc::now(),
        });
    }

    /// Codes with an outgoing request still open
    #[cfg(test)]
    pub(crate) fn outgoing_requests(&self) -> Vec<HexCode> {
        let mut codes: Vec<HexCode> = self.lock().outgoing.iter().copied().collect();
        codes.sort();
        codes
    }

    fn apply(
        &self,
        verb: &'static str,
        code: HexCode,
        op: fn(&mut StoreInner, HexCode) -> Result<(), FriendServiceError>,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        let result = op(&mut self.lock(), code);
        match &result {
            Ok(()) => info!(%code, "friend request {}", verb),
            Err(err) => warn!(%code, error = %err, "friend request not {}", verb),
        }
        future::ready(result)
    }
}

impl ListDataSource for MemoryStore {
    fn friends(&self) -> Vec<Friend> {
        self.lock().friends.clone()
    }

    fn pending_requests(&self) -> Vec<PendingRequest> {
        self.lock().pending.clone()
    }

    fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    fn counts(&self) -> ListCounts {
        let inner = self.lock();
        ListCounts {
            friends: inner.friends.len(),
            pending: inner.pending.len(),
            messages: inner.messages.len(),
        }
    }
}

impl FriendService for MemoryStore {
    fn send_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.apply("sent", code, StoreInner::send)
    }

    fn accept_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.apply("accepted", code, StoreInner::accept)
    }

    fn reject_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.apply("rejected", code, StoreInner::reject)
    }
}
