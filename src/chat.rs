//! Simulated live chat.
//!
//! There is no real-time transport; chat is a local feed seeded with a
//! mock transcript, and "incoming" messages are produced by a timer.
//! The timer runs on a background thread that only talks to the owner
//! through a channel, so feed state is mutated exclusively by the
//! owning view when it drains the channel. Dropping the simulator
//! handle cancels the task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Local;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{User, UserRole};

/// Interval between simulated arrivals: a new audience message lands
/// every 8 seconds
pub const SIMULATED_ARRIVAL_PERIOD: Duration = Duration::from_secs(8);

/// Canned messages for simulated arrivals
const CANNED_MESSAGES: &[&str] = &[
    "This is so cool!",
    "Can't wait to see the final demo.",
    "What library are they using for the UI?",
    "This gives me an idea for my own project.",
    "The stream quality is great.",
    "🤯🤯🤯",
];

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user: User,
    pub message: String,
    /// Display timestamp, e.g. "10:31 AM"
    pub timestamp: String,
}

/// The mock audience that produces simulated messages
pub fn mock_chat_users() -> Vec<User> {
    [
        ("chatuser1", "DevDude"),
        ("chatuser2", "ReactFan"),
        ("chatuser3", "PyQueen"),
        ("chatuser4", "CSS_Ninja"),
    ]
    .iter()
    .map(|(id, name)| User {
        id: id.to_string(),
        role: UserRole::Visitor,
        name: name.to_string(),
        avatar: format!("https://i.pravatar.cc/150?u={id}"),
    })
    .collect()
}

/// The seeded transcript shown when a watch page opens
pub fn mock_transcript() -> Vec<ChatMessage> {
    let audience = mock_chat_users();
    let participant = User::for_role(UserRole::Participant);
    let lines: [(&User, &str, &str); 5] = [
        (&audience[0], "This is an awesome project! 🔥", "10:30 AM"),
        (&audience[1], "Wow, using the Gemini API like that is genius.", "10:31 AM"),
        (&audience[2], "What was the backend written in?", "10:31 AM"),
        (&participant, "Thanks everyone! The backend is Node.js with Express.", "10:32 AM"),
        (&audience[3], "Super clean UI. I love the animations.", "10:33 AM"),
    ];
    lines
        .iter()
        .enumerate()
        .map(|(i, (user, message, timestamp))| ChatMessage {
            id: format!("msg{}", i + 1),
            user: (*user).clone(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
}

/// The chat feed for one watch session
#[derive(Debug, Clone, Default)]
pub struct ChatFeed {
    messages: Vec<ChatMessage>,
}

impl ChatFeed {
    /// Feed seeded with the mock transcript
    pub fn seeded() -> Self {
        Self { messages: mock_transcript() }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message posted by the current user
    pub fn post(&mut self, user: &User, message: &str) {
        self.messages.push(ChatMessage {
            id: format!("msg-{}", Uuid::new_v4()),
            user: user.clone(),
            message: message.to_string(),
            timestamp: Local::now().format("%I:%M %p").to_string(),
        });
    }

    /// Append an already-built message (simulated arrivals drained from
    /// the simulator channel)
    pub fn receive(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Build one simulated arrival: a random canned line from a random
/// audience member
pub fn simulate_arrival() -> ChatMessage {
    let mut rng = rand::rng();
    let audience = mock_chat_users();
    let user = audience
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| User::for_role(UserRole::Visitor));
    let message = CANNED_MESSAGES
        .choose(&mut rng)
        .copied()
        .unwrap_or(CANNED_MESSAGES[0]);
    ChatMessage {
        id: format!("msg-{}", Uuid::new_v4()),
        user,
        message: message.to_string(),
        timestamp: Local::now().format("%I:%M %p").to_string(),
    }
}

/// Background timer that delivers simulated arrivals over a channel.
///
/// Tied to the owning view's lifetime: dropping the handle sets the
/// cancel flag and joins the thread, so no message is produced after
/// the view is torn down.
pub struct ChatSimulator {
    cancelled: Arc<AtomicBool>,
    receiver: Receiver<ChatMessage>,
    handle: Option<JoinHandle<()>>,
}

impl ChatSimulator {
    /// Spawn the simulator with the standard period
    pub fn start() -> Self {
        Self::with_period(SIMULATED_ARRIVAL_PERIOD)
    }

    /// Spawn the simulator with a custom period (short periods keep
    /// tests fast)
    pub fn with_period(period: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = std::sync::mpsc::channel();
        let flag = Arc::clone(&cancelled);
        let handle = std::thread::spawn(move || run_timer(period, flag, sender));
        Self { cancelled, receiver, handle: Some(handle) }
    }

    /// Drain every message delivered since the last call
    pub fn drain(&self) -> Vec<ChatMessage> {
        let mut drained = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(message) => drained.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        drained
    }
}

impl Drop for ChatSimulator {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_timer(period: Duration, cancelled: Arc<AtomicBool>, sender: Sender<ChatMessage>) {
    // Sleep in short slices so cancellation is prompt even with the
    // 8-second period.
    let slice = Duration::from_millis(50).min(period);
    let mut elapsed = Duration::ZERO;
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return;
        }
        std::thread::sleep(slice);
        elapsed += slice;
        if elapsed >= period {
            elapsed = Duration::ZERO;
            if sender.send(simulate_arrival()).is_err() {
                // Receiver gone; the owning view was torn down.
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transcript_order() {
        let feed = ChatFeed::seeded();
        assert_eq!(feed.messages().len(), 5);
        assert_eq!(feed.messages()[0].user.name, "DevDude");
        assert_eq!(feed.messages()[3].user.name, "Alex");
    }

    #[test]
    fn test_post_appends_for_current_user() {
        let mut feed = ChatFeed::seeded();
        let judge = User::for_role(UserRole::Judge);
        feed.post(&judge, "Impressive demo.");
        let last = feed.messages().last().unwrap();
        assert_eq!(last.user.role, UserRole::Judge);
        assert_eq!(last.message, "Impressive demo.");
    }

    #[test]
    fn test_simulated_arrival_uses_mock_audience() {
        let audience: Vec<String> =
            mock_chat_users().into_iter().map(|u| u.name).collect();
        let message = simulate_arrival();
        assert!(audience.contains(&message.user.name));
        assert!(CANNED_MESSAGES.contains(&message.message.as_str()));
    }

    #[test]
    fn test_simulator_delivers_and_cancels() {
        let simulator = ChatSimulator::with_period(Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(150));
        assert!(!simulator.drain().is_empty());
        // Drop cancels the background task without hanging.
        drop(simulator);
    }
}
