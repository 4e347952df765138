// Status channel: a bounded ring buffer between producers (lights, remote)
// and whoever prints the status lines

use crate::messaging::notification::Notification;
use ringbuf::{
    HeapRb,
    traits::{Consumer, Producer, Split},
};
use std::cell::RefCell;
use std::rc::Rc;

pub type NotificationProducer = ringbuf::HeapProd<Notification>;
pub type NotificationConsumer = ringbuf::HeapCons<Notification>;

/// Default number of status lines buffered before new ones are dropped
pub const DEFAULT_STATUS_CAPACITY: usize = 256;

/// Cloneable handle used by every publisher of status lines
///
/// All clones push into the same ring buffer. The handle is single-threaded:
/// lights and the remote controller live on the same thread as the consumer.
#[derive(Clone)]
pub struct StatusFeed {
    producer: Rc<RefCell<NotificationProducer>>,
}

impl StatusFeed {
    /// Push a notification onto the channel
    ///
    /// Returns false if the ringbuffer is full; the line is dropped.
    pub fn publish(&self, notification: Notification) -> bool {
        match self.producer.borrow_mut().try_push(notification) {
            Ok(()) => true,
            Err(dropped) => {
                tracing::warn!(line = %dropped.message, "status channel full, dropping line");
                false
            }
        }
    }
}

/// Create a status channel holding up to `capacity` pending lines
///
/// A capacity of 0 is raised to 1.
pub fn create_status_channel(capacity: usize) -> (StatusFeed, NotificationConsumer) {
    let rb = HeapRb::<Notification>::new(capacity.max(1));
    let (producer, consumer) = rb.split();
    let feed = StatusFeed {
        producer: Rc::new(RefCell::new(producer)),
    };
    (feed, consumer)
}

/// Pop every pending notification, oldest first
pub fn drain(consumer: &mut NotificationConsumer) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Some(notification) = consumer.try_pop() {
        out.push(notification);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::notification::NotificationSource;

    #[test]
    fn test_publish_and_drain_in_order() {
        let (feed, mut rx) = create_status_channel(8);
        let other = feed.clone();

        assert!(feed.publish(Notification::info(NotificationSource::Light, "a".into())));
        assert!(other.publish(Notification::info(NotificationSource::Remote, "b".into())));

        let lines: Vec<String> = drain(&mut rx).into_iter().map(|n| n.message).collect();
        assert_eq!(lines, vec!["a", "b"]);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_full_channel_drops_line() {
        let (feed, mut rx) = create_status_channel(1);

        assert!(feed.publish(Notification::info(NotificationSource::Light, "kept".into())));
        assert!(!feed.publish(Notification::info(NotificationSource::Light, "lost".into())));

        let lines = drain(&mut rx);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "kept");
    }

    #[test]
    fn test_zero_capacity_holds_one_line() {
        let (feed, mut rx) = create_status_channel(0);

        assert!(feed.publish(Notification::info(NotificationSource::Light, "only".into())));
        assert!(!feed.publish(Notification::info(NotificationSource::Light, "over".into())));
        assert_eq!(drain(&mut rx).len(), 1);
    }
}
