use crate::events::ServerEvent;
use std::collections::HashMap;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Outbound event channel for one connected participant
pub type EventSender = mpsc::UnboundedSender<ServerEvent>;

struct Peer {
    tx: EventSender,
    /// Room this participant currently occupies, at most one
    room: Option<String>,
}

#[derive(Default)]
struct RegistryInner {
    /// Room code -> member ids in join order. A room is present iff it has
    /// at least one member.
    rooms: HashMap<String, Vec<String>>,
    /// All connected participants, joined to a room or not
    peers: HashMap<String, Peer>,
}

/// Session registry: room membership and best-effort event delivery.
///
/// All mutation goes through the single mutex, so joins, leaves and relays
/// are serialized with respect to each other. Delivery is at-most-once: a
/// send to a participant whose channel is gone is silently ignored.
pub struct Registry {
    inner: Mutex<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
        }
    }

    /// Register a freshly accepted connection and its outbound channel.
    pub async fn register(&self, peer_id: &str, tx: EventSender) {
        let mut guard = self.inner.lock().await;
        guard.peers.insert(
            peer_id.to_string(),
            Peer {
                tx,
                room: None,
            },
        );
        info!("{} connected", peer_id);
    }

    /// Add a participant to a room, creating the room if unknown.
    ///
    /// The joiner receives the prior occupant list (`existing users`); every
    /// prior occupant is told the participant joined. Room codes are not
    /// validated and rooms have no size limit.
    pub async fn join(&self, room: &str, peer_id: &str) {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        let Some(peer) = inner.peers.get_mut(peer_id) else {
            warn!("Join from unregistered peer {}", peer_id);
            return;
        };
        if let Some(current) = &peer.room {
            warn!(
                "{} tried to join room {} while already in {}",
                peer_id, room, current
            );
            return;
        }

        let existing = inner.rooms.get(room).cloned().unwrap_or_default();
        let _ = peer.tx.send(ServerEvent::ExistingUsers {
            users: existing.clone(),
        });
        peer.room = Some(room.to_string());

        inner
            .rooms
            .entry(room.to_string())
            .or_default()
            .push(peer_id.to_string());

        let joined = ServerEvent::UserJoined {
            id: peer_id.to_string(),
        };
        for id in &existing {
            if let Some(other) = inner.peers.get(id) {
                let _ = other.tx.send(joined.clone());
            }
        }

        info!("{} joined room {}", peer_id, room);
    }

    /// Remove a connection entirely.
    ///
    /// If the participant occupied a room, the remaining occupants are told
    /// it left. Returns the room code when this departure emptied the room
    /// (the room is removed from the registry before returning), so the
    /// caller can drive teardown. A disconnect without a prior join is a
    /// no-op.
    pub async fn disconnect(&self, peer_id: &str) -> Option<String> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        let peer = inner.peers.remove(peer_id)?;
        info!("{} disconnected", peer_id);
        let room = peer.room?;

        let members = inner.rooms.get_mut(&room)?;
        members.retain(|m| m != peer_id);

        if members.is_empty() {
            inner.rooms.remove(&room);
            info!("Room {} removed as it is empty", room);
            return Some(room);
        }

        let left = ServerEvent::UserLeft {
            id: peer_id.to_string(),
        };
        for id in members.clone() {
            if let Some(other) = inner.peers.get(&id) {
                let _ = other.tx.send(left.clone());
            }
        }
        None
    }

    /// Forward an opaque negotiation payload to one participant.
    ///
    /// The payload is never inspected. An unknown target is an accepted
    /// race (it may have just disconnected): the message is dropped and the
    /// sender is not told.
    pub async fn relay(&self, from: &str, to: &str, signal: serde_json::Value) {
        let guard = self.inner.lock().await;
        match guard.peers.get(to) {
            Some(peer) => {
                let _ = peer.tx.send(ServerEvent::Signal {
                    from: from.to_string(),
                    signal,
                });
            }
            None => debug!("Dropping signal from {} to unknown peer {}", from, to),
        }
    }

    /// Deliver an event to a single participant, if still connected.
    pub async fn send_to(&self, peer_id: &str, event: ServerEvent) {
        let guard = self.inner.lock().await;
        if let Some(peer) = guard.peers.get(peer_id) {
            let _ = peer.tx.send(event);
        }
    }

    /// Deliver an event to every occupant of a room except `from`.
    pub async fn broadcast_from(&self, room: &str, from: &str, event: ServerEvent) {
        let guard = self.inner.lock().await;
        let Some(members) = guard.rooms.get(room) else {
            return;
        };
        for id in members {
            if id == from {
                continue;
            }
            if let Some(peer) = guard.peers.get(id) {
                let _ = peer.tx.send(event.clone());
            }
        }
    }

    /// Current occupant count for a room (0 when the room is absent)
    pub async fn occupancy(&self, room: &str) -> usize {
        self.inner
            .lock()
            .await
            .rooms
            .get(room)
            .map(|m| m.len())
            .unwrap_or(0)
    }

    /// Occupants of a room in join order
    pub async fn members(&self, room: &str) -> Vec<String> {
        self.inner
            .lock()
            .await
            .rooms
            .get(room)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
