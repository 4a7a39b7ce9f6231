//! Direct messages between staff

use super::employees::Staff;
use crate::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use sitedesk_model::{Employee, Message};
use sitedesk_store::RecordStore;
use std::collections::HashMap;
use tracing::debug;
use ulid::Ulid;

/// One row in the conversation list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversation<'a> {
    pub partner: &'a Employee,
    pub last_message: &'a Message,
    /// Messages from the partner not yet read
    pub unread: usize,
}

/// Message history seen from one signed-in employee
#[derive(Debug, Default)]
pub struct Messenger {
    messages: RecordStore<Message>,
    current_user: String,
}

impl Messenger {
    /// # Errors
    /// If two messages share an id.
    pub fn new(messages: Vec<Message>, current_user: impl Into<String>) -> Result<Self> {
        Ok(Self {
            messages: RecordStore::with_records(messages)?,
            current_user: current_user.into(),
        })
    }

    #[must_use]
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Act as another employee
    pub fn sign_in(&mut self, employee_id: impl Into<String>) {
        self.current_user = employee_id.into();
    }

    /// Conversations with known staff, most recent first
    #[must_use]
    pub fn conversations<'a>(&'a self, staff: &'a Staff) -> Vec<Conversation<'a>> {
        let me = self.current_user.as_str();
        let mut by_partner: HashMap<&str, Conversation<'a>> = HashMap::new();

        for message in self.messages.iter() {
            let partner_id = if message.sender_id == me {
                message.receiver_id.as_str()
            } else if message.receiver_id == me {
                message.sender_id.as_str()
            } else {
                continue;
            };
            let Some(partner) = staff.get(partner_id) else {
                continue;
            };
            let incoming_unread = usize::from(message.receiver_id == me && !message.read);

            by_partner
                .entry(partner_id)
                .and_modify(|conversation| {
                    if message.timestamp > conversation.last_message.timestamp {
                        conversation.last_message = message;
                    }
                    conversation.unread += incoming_unread;
                })
                .or_insert(Conversation {
                    partner,
                    last_message: message,
                    unread: incoming_unread,
                });
        }

        let mut conversations: Vec<Conversation<'a>> = by_partner.into_values().collect();
        conversations.sort_by(|a, b| b.last_message.timestamp.cmp(&a.last_message.timestamp));
        conversations
    }

    /// Messages with `partner`, oldest first
    #[must_use]
    pub fn thread(&self, partner: &str) -> Vec<&Message> {
        let mut thread: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.is_between(&self.current_user, partner))
            .collect();
        thread.sort_by_key(|m| m.timestamp);
        thread
    }

    /// Total unread messages addressed to the current user
    #[must_use]
    pub fn unread_total(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.receiver_id == self.current_user && !m.read)
            .count()
    }

    /// Open a conversation, marking the partner's messages read
    ///
    /// Returns how many messages changed.
    pub fn open(&mut self, partner: &str) -> usize {
        let unread: Vec<String> = self
            .messages
            .iter()
            .filter(|m| m.sender_id == partner && m.receiver_id == self.current_user && !m.read)
            .map(|m| m.id.clone())
            .collect();
        for id in &unread {
            self.messages.update(id, |m| m.read = true);
        }
        debug!(partner, marked = unread.len(), "conversation opened");
        unread.len()
    }

    /// Send `text` to `partner` at `now`
    ///
    /// # Errors
    /// [`DashboardError::EmptyMessage`] when the text is blank after trimming.
    pub fn send(&mut self, partner: &str, text: &str, now: DateTime<Utc>) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DashboardError::EmptyMessage);
        }
        let id = format!("msg-{}", Ulid::new());
        self.messages.insert(Message {
            id: id.clone(),
            sender_id: self.current_user.clone(),
            receiver_id: partner.to_string(),
            text: text.to_string(),
            timestamp: now,
            read: false,
        })?;
        debug!(message = %id, to = partner, "message sent");
        Ok(id)
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<Message> {
        &mut self.messages
    }
}
