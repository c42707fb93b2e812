use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::mpsc::Sender;

/// Change notifications published by [`Configuration`](crate::configuration::Configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigEvent {
    InterfaceThemeChanged,
    ColorsUpdated,
    FontsUpdated,
}

impl fmt::Display for ConfigEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigEvent::InterfaceThemeChanged => "interface-theme-changed",
            ConfigEvent::ColorsUpdated => "colors-updated",
            ConfigEvent::FontsUpdated => "fonts-updated",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

enum Listener {
    Callback(Box<dyn FnMut(ConfigEvent)>),
    Channel(Sender<ConfigEvent>),
}

/// Synchronous publish/subscribe for [`ConfigEvent`]s.
///
/// Listeners run in subscription order before [`emit`](Self::emit) returns.
/// Emitting from inside a listener is not allowed; such nested events are
/// logged and dropped. Channel listeners whose receiver is gone are removed.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: u64,
    dispatching: Cell<bool>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(ConfigEvent) + 'static) -> ListenerId {
        self.register(Listener::Callback(Box::new(callback)))
    }

    pub fn subscribe_channel(&mut self, tx: Sender<ConfigEvent>) -> ListenerId {
        self.register(Listener::Channel(tx))
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let listeners = self.listeners.get_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn emit(&self, event: ConfigEvent) {
        if self.dispatching.replace(true) {
            log::warn!("Dropping nested {event} notification emitted during dispatch");
            return;
        }

        log::trace!("Dispatching {event}");
        self.listeners
            .borrow_mut()
            .retain_mut(|(id, listener)| match listener {
                Listener::Callback(callback) => {
                    callback(event);
                    true
                }
                Listener::Channel(tx) => match tx.send(event) {
                    Ok(()) => true,
                    Err(_) => {
                        log::debug!("Removing disconnected listener {id:?}");
                        false
                    }
                },
            });

        self.dispatching.set(false);
    }

    fn register(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.get_mut().push((id, listener));
        id
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}
