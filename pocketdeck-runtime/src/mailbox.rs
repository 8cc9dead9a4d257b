//! Touch sample handoff from interrupt context
//!
//! Touch controllers raise an interrupt when a contact changes. The
//! handler reads the controller and posts the result here; the main loop
//! picks up the latest value on its next poll. Only the newest sample is
//! kept, so the loop never works through a backlog of stale contacts.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use pocketdeck_hal::{TouchPanel, TouchPoint};

/// Single-slot, latest-wins touch mailbox
///
/// Usable from a `static`:
///
/// ```ignore
/// static TOUCH: TouchMailbox = TouchMailbox::new();
/// ```
pub struct TouchMailbox {
    signal: Signal<CriticalSectionRawMutex, Option<TouchPoint>>,
}

impl TouchMailbox {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Post the controller's current contact, replacing any unread one
    pub fn post(&self, contact: Option<TouchPoint>) {
        self.signal.signal(contact);
    }

    /// Take the unread contact, if one was posted since the last take
    pub fn take(&self) -> Option<Option<TouchPoint>> {
        self.signal.try_take()
    }

    /// Returns true if a posted contact is waiting
    pub fn has_unread(&self) -> bool {
        self.signal.signaled()
    }
}

impl Default for TouchMailbox {
    fn default() -> Self {
        Self::new()
    }
}

/// [`TouchPanel`] fed by a [`TouchMailbox`]
///
/// Between posts the last contact is repeated, so a finger held still
/// stays down.
pub struct MailboxTouch<'a> {
    mailbox: &'a TouchMailbox,
    contact: Option<TouchPoint>,
}

impl<'a> MailboxTouch<'a> {
    pub fn new(mailbox: &'a TouchMailbox) -> Self {
        Self {
            mailbox,
            contact: None,
        }
    }
}

impl TouchPanel for MailboxTouch<'_> {
    fn primary_contact(&mut self) -> Option<TouchPoint> {
        if let Some(contact) = self.mailbox.take() {
            self.contact = contact;
        }
        self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_post_wins() {
        let mailbox = TouchMailbox::new();
        assert_eq!(mailbox.take(), None);

        mailbox.post(Some(TouchPoint::new(1, 1)));
        mailbox.post(Some(TouchPoint::new(2, 2)));
        assert!(mailbox.has_unread());
        assert_eq!(mailbox.take(), Some(Some(TouchPoint::new(2, 2))));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_panel_holds_last_contact() {
        static MAILBOX: TouchMailbox = TouchMailbox::new();
        let mut panel = MailboxTouch::new(&MAILBOX);
        assert_eq!(panel.primary_contact(), None);

        MAILBOX.post(Some(TouchPoint::new(100, 300)));
        assert_eq!(panel.primary_contact(), Some(TouchPoint::new(100, 300)));
        assert_eq!(panel.primary_contact(), Some(TouchPoint::new(100, 300)));

        MAILBOX.post(None);
        assert_eq!(panel.primary_contact(), None);
    }
}
