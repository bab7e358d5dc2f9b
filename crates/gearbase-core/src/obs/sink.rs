use crate::obs;
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn EventSink>>> = const { RefCell::new(None) };
}

///
/// ModelEvent
///
/// Typed notification emitted by the model lifecycle. The channel key keeps
/// the `<entity>.fromJson` naming the UI layers already key their listeners
/// on.
///

#[derive(Clone, Debug)]
pub enum ModelEvent {
    /// Server data was applied onto an entity.
    FromJson {
        entity: &'static str,
        data: Value,
    },
}

impl ModelEvent {
    /// Dotted channel key, e.g. `contact.fromJson`.
    #[must_use]
    pub fn channel(&self) -> String {
        match self {
            Self::FromJson { entity, .. } => format!("{entity}.fromJson"),
        }
    }
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &ModelEvent);
}

/// CountingSink
/// Default process-local sink that counts events per entity.
/// Acts as the concrete sink when no scoped override is installed.

struct CountingSink;

impl EventSink for CountingSink {
    fn record(&self, event: &ModelEvent) {
        match event {
            ModelEvent::FromJson { entity, .. } => obs::bump_from_json(entity),
        }
    }
}

pub(crate) fn record(event: &ModelEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    if let Some(sink) = sink {
        sink.record(event);
    } else {
        CountingSink.record(event);
    }
}

/// Run a closure with a temporary event sink override.
///
/// The previous sink (if any) is restored on every exit path, including
/// unwind, so overrides nest.
pub fn with_event_sink<T>(sink: Rc<dyn EventSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn EventSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
